/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

pub mod fixed;
pub mod securerng;
pub mod simplerng;

pub use fixed::FixedRng;
pub use securerng::SecureRng;
pub use simplerng::SimpleRng;

use ibig::{IBig, UBig};

/// Source of the random scalars used for private keys and signature nonces.
pub trait ScalarRng {
    fn fill_bytes(&mut self, buf: &mut [u8]);

    /// Draws a uniformly distributed integer from `[min, max)` by rejection
    /// sampling. Returns `min` if the range is empty.
    fn between(&mut self, min: &IBig, max: &IBig) -> IBig {
        let range = match UBig::try_from(max - min) {
            Ok(range) if range != UBig::from(0u8) => range,
            _ => return min.clone(),
        };
        let bits = range.bit_len();
        let mut buf = vec![0u8; (bits + 7) / 8];
        let mask = 0xffu8 >> (buf.len() * 8 - bits);
        loop {
            self.fill_bytes(&mut buf);
            buf[0] &= mask;
            let candidate = UBig::from_be_bytes(&buf);
            if candidate < range {
                return min + IBig::from(candidate);
            }
        }
    }
}

pub trait SeedableRng<T> {
    fn from_seed(seed: T) -> Self;
}

impl<R: ScalarRng + ?Sized> ScalarRng for Box<R> {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        (**self).fill_bytes(buf)
    }
    fn between(&mut self, min: &IBig, max: &IBig) -> IBig {
        (**self).between(min, max)
    }
}
