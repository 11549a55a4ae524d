/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcError {
    #[error("point is not on the curve")]
    NotOnCurve,
    #[error("no modular inverse")]
    NoInverse,
    #[error("modulus must be greater than one")]
    InvalidModulus,
    #[error("scalar must not be negative")]
    NegativeScalar,
    #[error("scalar is outside of [1, n-1]")]
    ScalarOutOfRange,
}
