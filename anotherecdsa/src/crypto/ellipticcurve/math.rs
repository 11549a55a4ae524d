/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

mod affine;

use affine::{affine_add, affine_multiply};
use ibig::{ibig, IBig};

use super::{Curve, EcError, Point};

/// Calculates the modular inverse of `x` with respect to `n` using the Extended Euclidean Algorithm.
///
/// ```
/// # use ibig::{ibig, IBig};
/// # use anotherecdsa::crypto::ellipticcurve::math::inv;
/// let x = ibig!(5);
/// let n = ibig!(11);
///
/// assert_eq!(inv(&x, &n), Ok(ibig!(9)));
/// ```
pub fn inv(x: &IBig, n: &IBig) -> Result<IBig, EcError> {
    if *n <= ibig!(1) {
        return Err(EcError::InvalidModulus);
    }

    let mut lm = ibig!(1);
    let mut hm = ibig!(0);
    let mut low = rem_euclid(x, n);
    let mut high = n.clone();

    while low > ibig!(1) {
        let r = &high / &low;
        let nm = &hm - &lm * &r;
        let nw = &high - &low * &r;
        high = low;
        hm = lm;
        low = nw;
        lm = nm;
    }

    // low == 0 means gcd(x, n) = high > 1
    if low != ibig!(1) {
        return Err(EcError::NoInverse);
    }

    Ok(rem_euclid(&lm, n))
}

/// `a / b (mod p)`, both operands are reduced first so negative values work.
///
/// ```
/// # use ibig::ibig;
/// # use anotherecdsa::crypto::ellipticcurve::math::div;
/// assert_eq!(div(&ibig!(-3), &ibig!(2), &ibig!(17)), Ok(ibig!(7)));
/// ```
pub fn div(a: &IBig, b: &IBig, p: &IBig) -> Result<IBig, EcError> {
    let b_inv = inv(&rem_euclid(b, p), p)?;
    Ok(rem_euclid(&(rem_euclid(a, p) * b_inv), p))
}

/// Calculates the modules
///
/// ```
/// # use ibig::{ibig, IBig};
/// # use anotherecdsa::crypto::ellipticcurve::math::rem_euclid;
/// let x = ibig!(12);
/// let n = ibig!(11);
///
/// assert_eq!(rem_euclid(&x, &n), ibig!(1));
/// assert_eq!(rem_euclid(&ibig!(-1), &n), ibig!(10));
/// ```
pub fn rem_euclid(x: &IBig, v: &IBig) -> IBig {
    let r = x % v;
    if r < ibig!(0) {
        if *v < ibig!(0) {
            r - v
        } else {
            r + v
        }
    } else {
        r
    }
}

pub fn add(p: &Point, q: &Point, curve: &Curve) -> Result<Point, EcError> {
    affine_add(p, q, curve)
}

pub fn double(p: &Point, curve: &Curve) -> Result<Point, EcError> {
    affine_add(p, p, curve)
}

/// `k * p` by double-and-add over the bits of `k`.
///
/// `k` is not reduced modulo `n`. If `k` is a multiple of `n` the input point
/// is returned unchanged instead of the identity.
pub fn multiply(p: &Point, k: &IBig, curve: &Curve) -> Result<Point, EcError> {
    affine_multiply(p, k, curve)
}

#[cfg(test)]
mod tests {
    use crate::crypto::ellipticcurve::{math, Curve, EcError, Point};
    use ibig::{ibig, IBig};
    use proptest::prelude::*;
    use test_case::test_case;

    fn p256_point() -> Point {
        Point::new(
            ibig!(_440c8c7d996adc6038090e43d8595c45381b840219ea7d376f1fe9cd833bbe61 base 16),
            ibig!(_c5a285ff65319f8f3d8dcb12388457140c00a1887e18a0fe8da0f1b8c34670e3 base 16),
        )
    }

    fn toy_curve() -> Curve {
        Curve::new("toy", ibig!(17), ibig!(2), ibig!(2), Point::u32(5, 1), ibig!(19)).unwrap()
    }

    #[test_case(5, 11, 9)]
    #[test_case(3, 19, 13)]
    #[test_case(1, 7, 1)]
    #[test_case(-1, 7, 6)]
    #[test_case(30, 7, 4)]
    fn test_inv(x: i64, n: i64, expected: i64) {
        assert_eq!(
            math::inv(&IBig::from(x), &IBig::from(n)),
            Ok(IBig::from(expected))
        );
    }

    #[test_case(0, 7 ; "zero")]
    #[test_case(6, 9 ; "common factor")]
    #[test_case(19, 19 ; "multiple of modulus")]
    fn test_inv_fails(x: i64, n: i64) {
        assert_eq!(
            math::inv(&IBig::from(x), &IBig::from(n)),
            Err(EcError::NoInverse)
        );
    }

    #[test]
    fn test_inv_invalid_modulus() {
        assert_eq!(math::inv(&ibig!(3), &ibig!(1)), Err(EcError::InvalidModulus));
        assert_eq!(math::inv(&ibig!(3), &ibig!(0)), Err(EcError::InvalidModulus));
    }

    #[test]
    fn test_div() {
        // 3 / 2 = 3 * 9 = 27 = 10 (mod 17)
        assert_eq!(math::div(&ibig!(3), &ibig!(2), &ibig!(17)), Ok(ibig!(10)));
        assert_eq!(math::div(&ibig!(20), &ibig!(-15), &ibig!(17)), Ok(ibig!(10)));
        assert_eq!(
            math::div(&ibig!(3), &ibig!(34), &ibig!(17)),
            Err(EcError::NoInverse)
        );
    }

    proptest! {
        #[test]
        fn prop_inv_round_trip(x in 1u64..u64::MAX) {
            let n = Curve::secp256r1().n;
            let x = IBig::from(x);
            let x_inv = math::inv(&x, &n).unwrap();
            prop_assert_eq!(math::rem_euclid(&(x * x_inv), &n), ibig!(1));
        }

        #[test]
        fn prop_inv_round_trip_small(x in -1000i64..1000, m in 2i64..500) {
            let modulus = IBig::from(m);
            match math::inv(&IBig::from(x), &modulus) {
                Ok(x_inv) => {
                    prop_assert!(x_inv >= ibig!(0) && x_inv < modulus);
                    prop_assert_eq!(math::rem_euclid(&(IBig::from(x) * x_inv), &modulus), ibig!(1));
                }
                Err(e) => {
                    prop_assert_eq!(e, EcError::NoInverse);
                    prop_assert!((1..m).all(|c| (x * c).rem_euclid(m) != 1));
                }
            }
        }
    }

    #[test]
    fn test_weierstrass_add() {
        let curve = Curve::secp256r1();
        let p = p256_point();
        let q = Point::new(
            ibig!(_7ce1ff2021e6deefb316d445735415e917f1f60c1617e4d21f7671168a1a97f0 base 16),
            ibig!(_af3f69d7f46758f99b027372b28c20bc8661422698f91de196695f1415a17c8d base 16),
        );
        let result = math::add(&p, &q, &curve).unwrap();
        assert_eq!(
            result,
            Point::new(
                ibig!(_aba09341535abbb6e7d8a93d6dd69c3251ab4eb0b62e5b6d5af96bf0c4c9950e base 16),
                ibig!(_91da9e032e4165b8b7115c58251ce1620ebefd8dd221b73bd93ca14c3650e62c base 16),
            )
        );
        assert_eq!(math::add(&q, &p, &curve).unwrap(), result);
    }

    #[test]
    fn test_weierstrass_double() {
        let curve = Curve::secp256r1();
        let result = math::double(&p256_point(), &curve).unwrap();
        assert_eq!(
            result,
            Point::new(
                ibig!(_aefb289843cfeba8dd1d1db86cb85f306384994c5a57c109ee018d8ef70b5582 base 16),
                ibig!(_8b1babf616e2094b38d4b97c5e83182d3478734247a5a8523828430f99668ebf base 16),
            )
        );
    }

    #[test]
    fn test_weierstrass_multiply() {
        let curve = Curve::secp256r1();
        let result = math::multiply(&p256_point(), &ibig!(10), &curve).unwrap();
        assert_eq!(
            result,
            Point::new(
                ibig!(_38bfb2c88dd3dcfc1513aaef707fd37211b8f664625ed52edd1b365b534cfb55 base 16),
                ibig!(_5d1e3367bfc361ca6c7af6f46bd23e7ac8809d8364344558920b2f475278da52 base 16),
            )
        );
    }

    #[test]
    fn test_identity_is_neutral() {
        let curve = Curve::secp256r1();
        let p = p256_point();
        let o = Point::identity();
        assert_eq!(math::add(&o, &p, &curve).unwrap(), p);
        assert_eq!(math::add(&p, &o, &curve).unwrap(), p);
        assert_eq!(math::add(&o, &o, &curve).unwrap(), o);
    }

    #[test]
    fn test_add_inverse_is_identity() {
        let curve = Curve::secp256r1();
        let p = p256_point();
        let neg = p.negate(&curve);
        assert_eq!(math::add(&p, &neg, &curve).unwrap(), Point::identity());
    }

    #[test]
    fn test_add_not_on_curve() {
        let curve = Curve::secp256r1();
        let bad = Point::u32(10, 10);
        assert_eq!(math::add(&bad, &curve.g, &curve), Err(EcError::NotOnCurve));
        assert_eq!(math::add(&curve.g, &bad, &curve), Err(EcError::NotOnCurve));
        assert_eq!(
            math::add(&Point::identity(), &bad, &curve),
            Err(EcError::NotOnCurve)
        );
    }

    #[test]
    fn test_toy_multiples() {
        let curve = toy_curve();
        let expected = [
            (5, 1),
            (6, 3),
            (10, 6),
            (3, 1),
            (9, 16),
            (16, 13),
            (0, 6),
            (13, 7),
            (7, 6),
            (7, 11),
            (13, 10),
            (0, 11),
            (16, 4),
            (9, 1),
            (3, 16),
            (10, 11),
            (6, 14),
            (5, 16),
        ];
        let mut acc = Point::identity();
        for (i, (x, y)) in expected.iter().enumerate() {
            let k = IBig::from(i + 1);
            let point = Point::u32(*x, *y);
            assert_eq!(math::multiply(&curve.g, &k, &curve).unwrap(), point, "k = {k}");
            acc = math::add(&acc, &curve.g, &curve).unwrap();
            assert_eq!(acc, point, "k = {k}");
        }
        // 18 * G + G closes the group
        assert_eq!(math::add(&acc, &curve.g, &curve).unwrap(), Point::identity());
    }

    #[test]
    fn test_multiply_order_returns_point() {
        // k = 0 (mod n) hands back the input point, not the identity
        for curve in [toy_curve(), Curve::secp256r1()] {
            let n = curve.n.clone();
            assert_eq!(math::multiply(&curve.g, &n, &curve).unwrap(), curve.g);
            assert_eq!(math::multiply(&curve.g, &ibig!(0), &curve).unwrap(), curve.g);
            assert_eq!(
                math::multiply(&curve.g, &(&n * ibig!(3)), &curve).unwrap(),
                curve.g
            );
        }
    }

    #[test]
    fn test_multiply_unreduced_scalar() {
        let curve = toy_curve();
        // 20 = n + 1
        assert_eq!(math::multiply(&curve.g, &ibig!(20), &curve).unwrap(), curve.g);
        assert_eq!(
            math::multiply(&curve.g, &ibig!(26), &curve).unwrap(),
            math::multiply(&curve.g, &ibig!(7), &curve).unwrap()
        );
    }

    #[test]
    fn test_multiply_errors() {
        let curve = toy_curve();
        assert_eq!(
            math::multiply(&Point::u32(1, 1), &ibig!(3), &curve),
            Err(EcError::NotOnCurve)
        );
        assert_eq!(
            math::multiply(&curve.g, &ibig!(-3), &curve),
            Err(EcError::NegativeScalar)
        );
        assert_eq!(
            math::multiply(&Point::identity(), &ibig!(3), &curve).unwrap(),
            Point::identity()
        );
    }

    #[test]
    fn test_double_two_torsion_point() {
        // y^2 = x^3 + 1 (mod 5): (4, 0) has order two
        let curve = Curve::new("two-torsion", ibig!(5), ibig!(0), ibig!(1), Point::u32(0, 1), ibig!(3)).unwrap();
        let p = Point::u32(4, 0);
        assert!(curve.contains(&p));
        assert_eq!(math::double(&p, &curve).unwrap(), Point::identity());
    }
}
