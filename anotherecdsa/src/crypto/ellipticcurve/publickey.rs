/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use super::{Curve, Point};

/// Not validated on construction, `Ecdsa::verify` reports a point that is
/// off the curve as malformed input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub point: Point,
    pub curve: Curve,
}

impl PublicKey {
    pub fn new(point: Point, curve: Curve) -> Self {
        Self { point, curve }
    }
}
