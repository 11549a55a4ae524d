/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

pub mod crypto;
pub mod hash;
pub mod rand;
pub(crate) mod utils;

pub use crypto::ellipticcurve::{
    Curve, EcError, Ecdsa, EcdsaBuilder, KeyPair, Point, PrivateKey, PublicKey, Signature,
    Verification,
};
pub use hash::HashType;
