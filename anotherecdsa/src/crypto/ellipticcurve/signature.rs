/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use std::fmt;

use ibig::IBig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub r: IBig,
    pub s: IBig,
}

impl Signature {
    pub fn new(r: IBig, s: IBig) -> Self {
        Self { r, s }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r={:x}, s={:x}", self.r, self.s)
    }
}
