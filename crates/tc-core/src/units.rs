// tc-core/src/units.rs

use uom::si::f64::{Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn deg_c(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

/// Pressure value in kPa. The cycle relations mix MPa inputs with kJ/kg energies.
#[inline]
pub fn in_kpa(p: Pressure) -> f64 {
    use uom::si::pressure::kilopascal;
    p.get::<kilopascal>()
}

#[inline]
pub fn in_mpa(p: Pressure) -> f64 {
    use uom::si::pressure::megapascal;
    p.get::<megapascal>()
}

#[inline]
pub fn in_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

/// °C → K for a bare value.
#[inline]
pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    in_kelvin(deg_c(t_c))
}

/// MPa → kPa for a bare value.
#[inline]
pub fn mpa_to_kpa(p_mpa: f64) -> f64 {
    in_kpa(mpa(p_mpa))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kelvin_roundtrip() {
        assert!((in_kelvin(k(300.0)) - 300.0).abs() < 1e-12);
        assert!((in_kpa(kpa(101.325)) - 101.325).abs() < 1e-12);
    }

    #[test]
    fn celsius_offset() {
        assert!((celsius_to_kelvin(25.0) - 298.15).abs() < 1e-9);
        assert!((celsius_to_kelvin(500.0) - 773.15).abs() < 1e-9);
        assert!((celsius_to_kelvin(-273.15)).abs() < 1e-9);
    }

    #[test]
    fn megapascal_to_kilopascal() {
        assert!((mpa_to_kpa(0.1) - 100.0).abs() < 1e-9);
        assert!((mpa_to_kpa(8.0) - 8000.0).abs() < 1e-9);
        assert!((in_mpa(kpa(250.0)) - 0.25).abs() < 1e-12);
    }
}
