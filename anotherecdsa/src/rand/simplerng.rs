/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use crate::rand::ScalarRng;
use crate::rand::SeedableRng;

/// Seeded, predictable generator. Only meant for reproducible demos and
/// tests, never for real keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleRng(u32);

impl SeedableRng<u32> for SimpleRng {
    fn from_seed(seed: u32) -> Self {
        Self(seed)
    }
}

impl SimpleRng {
    pub fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(1);
        let a = self.0.wrapping_mul(15485863);
        (a.wrapping_pow(3)) % u32::MAX
    }
}

impl ScalarRng for SimpleRng {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(4) {
            let word = self.next().to_be_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}
