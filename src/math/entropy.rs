use rand::RngCore;

const SIGN_BIT: u64 = 1 << 63;
const TWO_POW_63: f64 = SIGN_BIT as f64;

/// Draws a uniform value in [0, 1) from `rng`.
///
/// Eight bytes are read as a little-endian u64, the sign bit is discarded and
/// the remaining 63 bits are scaled by 2^-63. Fails if the source cannot be
/// read; nothing is retried.
pub fn uniform_unit<R: RngCore + ?Sized>(rng: &mut R) -> Result<f64, rand::Error> {
    let mut bytes = [0u8; 8];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(unit_from_bits(u64::from_le_bytes(bytes)))
}

/// Maps raw bits onto [0, 1).
pub fn unit_from_bits(raw: u64) -> f64 {
    let magnitude = raw & !SIGN_BIT;
    // Only 53 bits survive the conversion; truncate so nothing rounds up to 1.0.
    ((magnitude >> 10) << 10) as f64 / TWO_POW_63
}

/// A value in [-0.5, 0.5), used for every initial weight and bias.
pub fn centered<R: RngCore + ?Sized>(rng: &mut R) -> Result<f64, rand::Error> {
    Ok(uniform_unit(rng)? - 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn bit_extremes_stay_half_open() {
        assert_eq!(unit_from_bits(0), 0.0);
        assert_eq!(unit_from_bits(SIGN_BIT), 0.0);
        assert!(unit_from_bits(u64::MAX) < 1.0);
        assert!(unit_from_bits(u64::MAX >> 1) < 1.0);
        assert_eq!(unit_from_bits(1 << 62), 0.5);
    }

    #[test]
    fn sign_bit_is_ignored() {
        let raw = 0x1234_5678_9abc_def0;
        assert_eq!(unit_from_bits(raw), unit_from_bits(raw | SIGN_BIT));
    }

    #[test]
    fn os_samples_in_range() {
        let mut rng = OsRng;
        for _ in 0..1000 {
            let u = uniform_unit(&mut rng).unwrap();
            assert!((0.0..1.0).contains(&u));
            let c = centered(&mut rng).unwrap();
            assert!((-0.5..0.5).contains(&c));
        }
    }
}
