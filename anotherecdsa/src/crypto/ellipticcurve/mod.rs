/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

pub mod curve;
pub mod ecdsa;
pub mod error;
pub mod math;
pub mod point;
pub mod privatekey;
pub mod publickey;
pub mod signature;

pub use curve::Curve;
pub use ecdsa::{Ecdsa, EcdsaBuilder, Verification};
pub use error::EcError;
pub use point::Point;
pub use privatekey::{KeyPair, PrivateKey};
pub use publickey::PublicKey;
pub use signature::Signature;
