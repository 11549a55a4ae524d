/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use ibig::{IBig, UBig};

/// Interprets `bytes` as an unsigned big-endian integer.
pub fn to_ibig_be(bytes: &[u8]) -> IBig {
    IBig::from(UBig::from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::to_ibig_be;
    use ibig::ibig;

    #[test]
    fn test_to_ibig_be() {
        assert_eq!(to_ibig_be(&[]), ibig!(0));
        assert_eq!(to_ibig_be(&[0x01, 0x00]), ibig!(256));
        assert_eq!(to_ibig_be(&[0x00, 0x00, 0xff]), ibig!(255));
        assert_eq!(
            to_ibig_be(&[0xde, 0xad, 0xbe, 0xef]),
            ibig!(_deadbeef base 16)
        );
    }
}
