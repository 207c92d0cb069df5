//! The liquid property model.

use rt_config::LiquidPropertiesDef;

use crate::error::{LiquidError, LiquidResult};
use crate::function::PropertyFunction;

/// One sub-function slot: configuration key plus accessor and mutator.
///
/// `read_if_present`, `from_def` and `to_def` all iterate this single list,
/// so no reader or writer carries its own copy of the key set.
struct FunctionSlot {
    name: &'static str,
    get: fn(&LiquidProperties) -> &PropertyFunction,
    set: fn(&mut LiquidProperties, PropertyFunction),
}

const FUNCTION_SLOTS: [FunctionSlot; 13] = [
    FunctionSlot { name: "rho", get: |l| &l.rho, set: |l, f| l.rho = f },
    FunctionSlot { name: "pv", get: |l| &l.pv, set: |l, f| l.pv = f },
    FunctionSlot { name: "hl", get: |l| &l.hl, set: |l, f| l.hl = f },
    FunctionSlot { name: "Cp", get: |l| &l.cp, set: |l, f| l.cp = f },
    FunctionSlot { name: "h", get: |l| &l.h, set: |l, f| l.h = f },
    FunctionSlot { name: "Cpg", get: |l| &l.cpg, set: |l, f| l.cpg = f },
    FunctionSlot { name: "B", get: |l| &l.b, set: |l, f| l.b = f },
    FunctionSlot { name: "mu", get: |l| &l.mu, set: |l, f| l.mu = f },
    FunctionSlot { name: "mug", get: |l| &l.mug, set: |l, f| l.mug = f },
    FunctionSlot { name: "kappa", get: |l| &l.kappa, set: |l, f| l.kappa = f },
    FunctionSlot { name: "kappag", get: |l| &l.kappag, set: |l, f| l.kappag = f },
    FunctionSlot { name: "sigma", get: |l| &l.sigma, set: |l, f| l.sigma = f },
    FunctionSlot { name: "D", get: |l| &l.d, set: |l, f| l.d = f },
];

/// Saturation and transport properties of one pure liquid.
///
/// Construction is all-or-nothing from a complete block (`from_def`) or a
/// compiled preset; afterwards `read_if_present` overrides individual
/// entries in place, leaving everything a block does not name untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct LiquidProperties {
    /// Molecular weight [kg/kmol].
    w: f64,
    /// Critical temperature [K].
    tc: f64,
    /// Critical pressure [Pa].
    pc: f64,
    /// Critical specific volume [m³/kg].
    vc: f64,
    /// Critical compressibility factor.
    zc: f64,
    /// Triple-point temperature [K].
    tt: f64,
    /// Triple-point pressure [Pa].
    pt: f64,
    /// Normal boiling temperature [K].
    tb: f64,
    /// Dipole moment [debye].
    dipm: f64,
    /// Pitzer acentric factor.
    omega: f64,
    /// Solubility parameter [(J/m³)^0.5].
    delta: f64,

    /// Heat of formation [J/kg]; splits actual from sensible enthalpy.
    hf: Option<f64>,
    /// Heat of combustion [J/kg].
    hc: Option<f64>,

    rho: PropertyFunction,
    pv: PropertyFunction,
    hl: PropertyFunction,
    cp: PropertyFunction,
    h: PropertyFunction,
    cpg: PropertyFunction,
    b: PropertyFunction,
    mu: PropertyFunction,
    mug: PropertyFunction,
    kappa: PropertyFunction,
    kappag: PropertyFunction,
    sigma: PropertyFunction,
    d: PropertyFunction,

    /// Compressibility departure; incompressible (zero) unless supplied.
    psi: Option<PropertyFunction>,
    /// Cp − Cv departure; zero unless supplied.
    cp_m_cv: Option<PropertyFunction>,
}

impl LiquidProperties {
    /// Build from a complete block. Every scalar constant and all thirteen
    /// sub-functions must be present.
    pub fn from_def(def: &LiquidPropertiesDef) -> LiquidResult<Self> {
        fn req(v: Option<f64>, key: &'static str) -> LiquidResult<f64> {
            v.ok_or_else(|| LiquidError::Configuration {
                path: key.to_string(),
                reason: "required scalar missing".to_string(),
            })
        }

        let placeholder = PropertyFunction::Constant { value: 0.0 };
        let mut liquid = Self {
            w: req(def.mol_weight, "molWeight")?,
            tc: req(def.tc, "Tc")?,
            pc: req(def.pc, "Pc")?,
            vc: req(def.vc, "Vc")?,
            zc: req(def.zc, "Zc")?,
            tt: req(def.tt, "Tt")?,
            pt: req(def.pt, "Pt")?,
            tb: req(def.tb, "Tb")?,
            dipm: req(def.dipm, "dipm")?,
            omega: req(def.omega, "omega")?,
            delta: req(def.delta, "delta")?,
            hf: def.hf,
            hc: def.hc,
            rho: placeholder.clone(),
            pv: placeholder.clone(),
            hl: placeholder.clone(),
            cp: placeholder.clone(),
            h: placeholder.clone(),
            cpg: placeholder.clone(),
            b: placeholder.clone(),
            mu: placeholder.clone(),
            mug: placeholder.clone(),
            kappa: placeholder.clone(),
            kappag: placeholder.clone(),
            sigma: placeholder.clone(),
            d: placeholder,
            psi: None,
            cp_m_cv: None,
        };

        for slot in &FUNCTION_SLOTS {
            let fd = def
                .function(slot.name)
                .ok_or_else(|| LiquidError::Configuration {
                    path: slot.name.to_string(),
                    reason: "required sub-function missing".to_string(),
                })?;
            (slot.set)(&mut liquid, PropertyFunction::from_def(fd));
        }

        Ok(liquid)
    }

    /// Partial override: replace exactly what the block names.
    ///
    /// Scalars and sub-functions absent from the block keep their current
    /// definition; sub-function names outside the recognized set are
    /// ignored here (use the strict config validation to reject them).
    pub fn read_if_present(&mut self, def: &LiquidPropertiesDef) {
        if let Some(v) = def.mol_weight {
            self.w = v;
        }
        if let Some(v) = def.tc {
            self.tc = v;
        }
        if let Some(v) = def.pc {
            self.pc = v;
        }
        if let Some(v) = def.vc {
            self.vc = v;
        }
        if let Some(v) = def.zc {
            self.zc = v;
        }
        if let Some(v) = def.tt {
            self.tt = v;
        }
        if let Some(v) = def.pt {
            self.pt = v;
        }
        if let Some(v) = def.tb {
            self.tb = v;
        }
        if let Some(v) = def.dipm {
            self.dipm = v;
        }
        if let Some(v) = def.omega {
            self.omega = v;
        }
        if let Some(v) = def.delta {
            self.delta = v;
        }
        if let Some(v) = def.hf {
            self.hf = Some(v);
        }
        if let Some(v) = def.hc {
            self.hc = Some(v);
        }

        for slot in &FUNCTION_SLOTS {
            if let Some(fd) = def.function(slot.name) {
                (slot.set)(self, PropertyFunction::from_def(fd));
            }
        }
    }

    /// Full dump: every scalar constant and all thirteen sub-functions, in
    /// the same key layout `from_def` reads.
    pub fn to_def(&self) -> LiquidPropertiesDef {
        let mut def = LiquidPropertiesDef {
            mol_weight: Some(self.w),
            tc: Some(self.tc),
            pc: Some(self.pc),
            vc: Some(self.vc),
            zc: Some(self.zc),
            tt: Some(self.tt),
            pt: Some(self.pt),
            tb: Some(self.tb),
            dipm: Some(self.dipm),
            omega: Some(self.omega),
            delta: Some(self.delta),
            hf: self.hf,
            hc: self.hc,
            ..Default::default()
        };
        for slot in &FUNCTION_SLOTS {
            def.functions
                .insert(slot.name.to_string(), (slot.get)(self).to_def());
        }
        def
    }

    /// Override the compressibility departure in place.
    pub fn with_psi(mut self, psi: PropertyFunction) -> Self {
        self.psi = Some(psi);
        self
    }

    /// Override the Cp − Cv departure in place.
    pub fn with_cp_m_cv(mut self, cp_m_cv: PropertyFunction) -> Self {
        self.cp_m_cv = Some(cp_m_cv);
        self
    }

    // Scalar constants.

    /// Molecular weight [kg/kmol].
    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn tc(&self) -> f64 {
        self.tc
    }

    pub fn pc(&self) -> f64 {
        self.pc
    }

    pub fn vc(&self) -> f64 {
        self.vc
    }

    pub fn zc(&self) -> f64 {
        self.zc
    }

    pub fn tt(&self) -> f64 {
        self.tt
    }

    pub fn pt(&self) -> f64 {
        self.pt
    }

    pub fn tb(&self) -> f64 {
        self.tb
    }

    pub fn dipm(&self) -> f64 {
        self.dipm
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    // Defaulted contract.

    /// Temperature limiting; identity — no clamping by default.
    pub fn limit(&self, t: f64) -> f64 {
        t
    }

    /// Mass fraction of a pure substance.
    pub fn y(&self) -> f64 {
        1.0
    }

    /// Compressibility departure [s²/m²].
    pub fn psi(&self, p: f64, t: f64) -> f64 {
        self.psi.as_ref().map_or(0.0, |f| f.evaluate(p, t))
    }

    /// Isobaric minus isochoric heat capacity [J/(kg·K)].
    pub fn cp_m_cv(&self, p: f64, t: f64) -> f64 {
        self.cp_m_cv.as_ref().map_or(0.0, |f| f.evaluate(p, t))
    }

    /// Actual enthalpy [J/kg]: the raw enthalpy plus the heat of formation
    /// once one is configured.
    pub fn ha(&self, p: f64, t: f64) -> f64 {
        self.h(p, t) + self.hf.unwrap_or(0.0)
    }

    /// Sensible enthalpy [J/kg]: always the raw enthalpy function.
    pub fn hs(&self, p: f64, t: f64) -> f64 {
        self.h(p, t)
    }

    /// Heat of combustion [J/kg].
    pub fn hc(&self) -> f64 {
        self.hc.unwrap_or(0.0)
    }

    /// Thermal diffusivity for enthalpy [kg/(m·s)]; definitionally
    /// kappa/cp, never independently overridable.
    pub fn alphah(&self, p: f64, t: f64) -> f64 {
        self.kappa(p, t) / self.cp(p, t)
    }

    // The thirteen sub-functions.

    /// Liquid density [kg/m³].
    pub fn rho(&self, p: f64, t: f64) -> f64 {
        self.rho.evaluate(p, t)
    }

    /// Saturation vapor pressure [Pa].
    pub fn pv(&self, p: f64, t: f64) -> f64 {
        self.pv.evaluate(p, t)
    }

    /// Latent heat of vaporization [J/kg].
    pub fn hl(&self, p: f64, t: f64) -> f64 {
        self.hl.evaluate(p, t)
    }

    /// Liquid heat capacity [J/(kg·K)].
    pub fn cp(&self, p: f64, t: f64) -> f64 {
        self.cp.evaluate(p, t)
    }

    /// Raw enthalpy [J/kg].
    pub fn h(&self, p: f64, t: f64) -> f64 {
        self.h.evaluate(p, t)
    }

    /// Ideal-gas vapor heat capacity [J/(kg·K)].
    pub fn cpg(&self, p: f64, t: f64) -> f64 {
        self.cpg.evaluate(p, t)
    }

    /// Second virial coefficient [m³/kg].
    pub fn b(&self, p: f64, t: f64) -> f64 {
        self.b.evaluate(p, t)
    }

    /// Liquid dynamic viscosity [Pa·s].
    pub fn mu(&self, p: f64, t: f64) -> f64 {
        self.mu.evaluate(p, t)
    }

    /// Vapor dynamic viscosity [Pa·s].
    pub fn mug(&self, p: f64, t: f64) -> f64 {
        self.mug.evaluate(p, t)
    }

    /// Liquid thermal conductivity [W/(m·K)].
    pub fn kappa(&self, p: f64, t: f64) -> f64 {
        self.kappa.evaluate(p, t)
    }

    /// Vapor thermal conductivity [W/(m·K)].
    pub fn kappag(&self, p: f64, t: f64) -> f64 {
        self.kappag.evaluate(p, t)
    }

    /// Surface tension [N/m].
    pub fn sigma(&self, p: f64, t: f64) -> f64 {
        self.sigma.evaluate(p, t)
    }

    /// Vapor diffusivity [m²/s].
    pub fn d(&self, p: f64, t: f64) -> f64 {
        self.d.evaluate(p, t)
    }
}
