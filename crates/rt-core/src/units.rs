// rt-core/src/units.rs

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, MassDensity as UomMassDensity,
    MolarMass as UomMolarMass, Pressure as UomPressure, Ratio as UomRatio,
    TemperatureInterval as UomTemperatureInterval, ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type DynVisc = UomDynamicViscosity;
pub type MolarMass = UomMolarMass;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type TempInterval = UomTemperatureInterval;
pub type Temperature = UomThermodynamicTemperature;
pub type ThermalCond = UomThermalConductivity;

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific internal energy [J/kg].
pub type SpecEnergy = f64;

/// Specific entropy [J/(kg·K)].
pub type SpecEntropy = f64;

/// Specific heat capacity [J/(kg·K)].
pub type SpecHeatCapacity = f64;

/// Thermal diffusivity for enthalpy, kappa/Cp [kg/(m·s)].
pub type ThermalDiffusivity = f64;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kgm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pas(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn wmk(v: f64) -> ThermalCond {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    ThermalCond::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn kg_per_kmol(v: f64) -> MolarMass {
    use uom::si::molar_mass::kilogram_per_mole;
    // uom stores molar mass per mole; configuration files carry kg/kmol.
    MolarMass::new::<kilogram_per_mole>(v * 1e-3)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _rho = kgm3(1.2);
        let _mu = pas(1.8e-5);
        let _kap = wmk(0.026);
        let _r = unitless(0.5);
    }

    #[test]
    fn molar_mass_is_si_under_the_hood() {
        let w = kg_per_kmol(28.014);
        use uom::si::molar_mass::kilogram_per_mole;
        assert!((w.get::<kilogram_per_mole>() - 0.028014).abs() < 1e-12);
    }
}
