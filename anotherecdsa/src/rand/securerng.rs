/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use rand_core::{CryptoRng, OsRng, RngCore};

use crate::rand::ScalarRng;

/// Adapter over a cryptographically secure generator. Defaults to the
/// operating system source.
pub struct SecureRng<R = OsRng>(R);

impl SecureRng<OsRng> {
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl Default for SecureRng<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> SecureRng<R> {
    pub fn from_rng(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: RngCore + CryptoRng> ScalarRng for SecureRng<R> {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        self.0.fill_bytes(buf)
    }
}
