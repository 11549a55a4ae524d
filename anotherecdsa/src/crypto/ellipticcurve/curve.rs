/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use super::{math, EcError, Point};
use ibig::{ibig, IBig};

/// Short Weierstrass curve `y^2 = x^3 + a*x + b (mod p)` together with a
/// base point `g` of prime order `n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    pub name: String,
    pub p: IBig,  // finite field
    pub a: IBig,  // used in equation
    pub b: IBig,  // used in equation
    pub n: IBig,  // prime order
    pub g: Point, // base point of prime order
}

impl Curve {
    /// Only checks that `g` lies on the curve. The caller is responsible for
    /// `p` and `n` being prime.
    pub fn new(
        name: &str,
        p: IBig,
        a: IBig,
        b: IBig,
        g: Point,
        n: IBig,
    ) -> Result<Self, EcError> {
        if p <= ibig!(1) || n <= ibig!(1) {
            return Err(EcError::InvalidModulus);
        }
        let curve = Curve {
            name: name.to_string(),
            p,
            a,
            b,
            n,
            g,
        };
        if curve.g.is_identity() || !curve.contains(&curve.g) {
            return Err(EcError::NotOnCurve);
        }
        Ok(curve)
    }

    pub fn secp224r1() -> Self {
        Curve {
            name: "secp224r1 (also known as NIST P-224)".to_string(),
            p: ibig!(_ffffffffffffffffffffffffffffffff000000000000000000000001 base 16),
            a: ibig!(_fffffffffffffffffffffffffffffffefffffffffffffffffffffffe base 16),
            b: ibig!(_b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4 base 16),
            n: ibig!(_ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d base 16),
            g: Point::new(
                ibig!(_b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21 base 16),
                ibig!(_bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34 base 16),
            ),
        }
    }

    pub fn secp256r1() -> Self {
        Curve {
            name: "secp256r1 (also known as NIST P-256)".to_string(),
            p: ibig!(_ffffffff00000001000000000000000000000000ffffffffffffffffffffffff base 16),
            a: ibig!(_ffffffff00000001000000000000000000000000fffffffffffffffffffffffc base 16),
            b: ibig!(_5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b base 16),
            n: ibig!(_ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551 base 16),
            g: Point::new(
                ibig!(_6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296 base 16),
                ibig!(_4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5 base 16),
            ),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "secp224r1" | "p-224" => Some(Self::secp224r1()),
            "secp256r1" | "prime256v1" | "p-256" => Some(Self::secp256r1()),
            _ => None,
        }
    }

    /// Verify if the point p is on the curve. The identity always is.
    ///
    /// ```
    /// # use anotherecdsa::{Curve, Point};
    /// let curve = Curve::secp256r1();
    /// assert_eq!(curve.contains(&Point::u32(10, 10)), false);
    /// assert_eq!(curve.contains(&curve.g), true);
    /// assert_eq!(curve.contains(&Point::identity()), true);
    /// ```
    pub fn contains(&self, p: &Point) -> bool {
        match p {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let left = math::rem_euclid(&(y * y), &self.p);
                let right = math::rem_euclid(&(x * x * x + &self.a * x + &self.b), &self.p);
                left == right
            }
        }
    }
}
