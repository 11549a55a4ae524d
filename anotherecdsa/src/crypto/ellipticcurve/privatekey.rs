/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use std::fmt;

use super::{curve::Curve, math, publickey::PublicKey, EcError};
use ibig::{ibig, IBig};

#[derive(Clone)]
pub struct PrivateKey {
    pub curve: Curve,
    pub secret: IBig,
}

impl PrivateKey {
    /// The secret has to be in `[1, n-1]`.
    pub fn new(curve: Curve, secret: IBig) -> Result<PrivateKey, EcError> {
        if secret < ibig!(1) || secret >= curve.n {
            return Err(EcError::ScalarOutOfRange);
        }
        Ok(PrivateKey { curve, secret })
    }

    /// `Q = d * G`
    pub fn get_public_key(&self) -> Result<PublicKey, EcError> {
        let point = math::multiply(&self.curve.g, &self.secret, &self.curve)?;
        Ok(PublicKey::new(point, self.curve.clone()))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve.name)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct KeyPair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl KeyPair {
    pub fn from_private_key(private_key: PrivateKey) -> Result<Self, EcError> {
        let public_key = private_key.get_public_key()?;
        Ok(KeyPair {
            private_key,
            public_key,
        })
    }
}
