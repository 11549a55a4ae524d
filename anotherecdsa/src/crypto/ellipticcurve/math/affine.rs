/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use super::{div, rem_euclid};
use crate::crypto::ellipticcurve::{Curve, EcError, Point};
use ibig::{ibig, IBig, UBig};

pub(crate) fn affine_add(p: &Point, q: &Point, curve: &Curve) -> Result<Point, EcError> {
    if !curve.contains(p) || !curve.contains(q) {
        return Err(EcError::NotOnCurve);
    }

    let (x1, y1) = match p {
        Point::Infinity => return Ok(q.clone()),
        Point::Affine { x, y } => (rem_euclid(x, &curve.p), rem_euclid(y, &curve.p)),
    };
    let (x2, y2) = match q {
        Point::Infinity => return Ok(p.clone()),
        Point::Affine { x, y } => (rem_euclid(x, &curve.p), rem_euclid(y, &curve.p)),
    };
    let prime = &curve.p;

    let s = if x1 == x2 {
        // q == -p, or p is its own inverse and the tangent is vertical
        if y1 != y2 || y1 == ibig!(0) {
            return Ok(Point::Infinity);
        }
        div(&(ibig!(3) * &x1 * &x1 + &curve.a), &(ibig!(2) * &y1), prime)?
    } else {
        div(&(&y2 - &y1), &(&x2 - &x1), prime)?
    };

    let x = rem_euclid(&(&s * &s - &x1 - &x2), prime);
    let y = rem_euclid(&(s * (&x1 - &x) - &y1), prime);

    Ok(Point::Affine { x, y })
}

pub(crate) fn affine_multiply(p: &Point, k: &IBig, curve: &Curve) -> Result<Point, EcError> {
    if !curve.contains(p) {
        return Err(EcError::NotOnCurve);
    }
    let k = UBig::try_from(k.clone()).map_err(|_| EcError::NegativeScalar)?;
    if p.is_identity() || rem_euclid(&IBig::from(k.clone()), &curve.n) == ibig!(0) {
        return Ok(p.clone());
    }

    let mut r = Point::Infinity;
    for i in (0..k.bit_len()).rev() {
        r = affine_add(&r, &r, curve)?;
        if k.bit(i) {
            r = affine_add(&r, p, curve)?;
        }
    }
    Ok(r)
}
