/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use ibig::IBig;

use crate::rand::ScalarRng;

/// Replays a fixed list of scalars, starting over after the last one.
/// Used to pin known-answer signatures.
#[derive(Clone, Debug)]
pub struct FixedRng {
    values: Vec<IBig>,
    pos: usize,
}

impl FixedRng {
    pub fn new(values: Vec<IBig>) -> Self {
        Self { values, pos: 0 }
    }
}

impl ScalarRng for FixedRng {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        buf.fill(0);
    }

    /// Ignores the requested range.
    fn between(&mut self, min: &IBig, _max: &IBig) -> IBig {
        if self.values.is_empty() {
            return min.clone();
        }
        let value = self.values[self.pos % self.values.len()].clone();
        self.pos += 1;
        value
    }
}
