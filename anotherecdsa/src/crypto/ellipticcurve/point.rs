/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use ibig::IBig;

use super::{math, Curve};

/// A point of the curve group. The identity has no affine coordinates and
/// is its own variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    Infinity,
    Affine { x: IBig, y: IBig },
}

impl Point {
    pub fn new(x: IBig, y: IBig) -> Self {
        Point::Affine { x, y }
    }

    pub fn u32(x: u32, y: u32) -> Self {
        Point::Affine {
            x: IBig::from(x),
            y: IBig::from(y),
        }
    }

    pub fn identity() -> Self {
        Point::Infinity
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    pub fn x(&self) -> Option<&IBig> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    pub fn y(&self) -> Option<&IBig> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// `-P = (x, p - y)`
    pub fn negate(&self, curve: &Curve) -> Point {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: math::rem_euclid(&(&curve.p - y), &curve.p),
            },
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::Infinity
    }
}
