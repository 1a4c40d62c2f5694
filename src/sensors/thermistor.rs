use {
    crate::hardware::ANALOG_MAX,
    anyhow::{bail, Result},
};

/// Beta parameter of the Grove temperature sensor's thermistor.
pub const B: f64 = 3975.0;

const R0: f64 = 10_000.0;
const T0_KELVIN: f64 = 298.15;
const KELVIN_OFFSET: f64 = 273.15;

/// Converts a raw 10-bit ADC count into degrees Celsius, rounded to two
/// decimal places.
pub fn celsius(raw: u16) -> Result<f64> {
    if raw == 0 {
        bail!("Temperature reading of 0 cannot be converted: thermistor resistance is unbounded");
    }
    if raw > ANALOG_MAX {
        bail!("Temperature reading {} exceeds ADC range", raw);
    }

    let raw = f64::from(raw);
    let resistance = (f64::from(ANALOG_MAX) - raw) * R0 / raw;
    let kelvin = 1.0 / ((resistance / R0).ln() / B + 1.0 / T0_KELVIN);

    Ok(round_2dp(kelvin - KELVIN_OFFSET))
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_points() {
        assert_eq!(celsius(512).unwrap(), 25.04);
        assert_eq!(celsius(400).unwrap(), 15.41);
        assert_eq!(celsius(1).unwrap(), -76.97);
    }

    #[test]
    fn test_deterministic() {
        for raw in 1..=ANALOG_MAX {
            assert_eq!(celsius(raw).unwrap(), celsius(raw).unwrap());
        }
    }

    #[test]
    fn test_monotonic() {
        let mut last = celsius(1).unwrap();
        for raw in 2..ANALOG_MAX {
            let t = celsius(raw).unwrap();
            assert!(t >= last, "{} dropped below {} at raw {}", t, last, raw);
            last = t;
        }
    }

    #[test]
    fn test_zero_is_error() {
        assert!(celsius(0).is_err());
    }

    #[test]
    fn test_out_of_range() {
        assert!(celsius(1024).is_err());
    }
}
