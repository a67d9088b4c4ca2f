/// Celsius to Kelvin offset
///
/// The service has always reported Kelvin with the rounded offset 273
/// rather than 273.15; clients depend on the exact values, so keep it.
const KELVIN_OFFSET: f64 = 273.0;

/// Convert Celsius to Fahrenheit
///
/// Formula: F = C * 1.8 + 32
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Convert Celsius to Kelvin
///
/// Formula: K = C + 273
#[inline]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    fn almost_equal(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-4
    }

    #[test]
    fn test_fahrenheit_anchor_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert!(almost_equal(celsius_to_fahrenheit(37.0), 98.6));
        assert!(almost_equal(celsius_to_fahrenheit(-10.0), 14.0));
    }

    #[test]
    fn test_kelvin_anchor_points() {
        assert_eq!(celsius_to_kelvin(0.0), 273.0);
        assert_eq!(celsius_to_kelvin(100.0), 373.0);
        assert_eq!(celsius_to_kelvin(-273.0), 0.0);
    }
}
