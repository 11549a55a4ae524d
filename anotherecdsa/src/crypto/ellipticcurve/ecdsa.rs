/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use ibig::ibig;

use crate::hash::{self, HashType};
use crate::rand::{ScalarRng, SecureRng, SeedableRng, SimpleRng};

use super::{math, Curve, EcError, KeyPair, Point, PrivateKey, PublicKey, Signature};

/// Outcome of a signature check. Inputs the math can't work with (a
/// non-invertible `s`, a public key off the curve) are reported as
/// `MalformedInput` instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Valid,
    Invalid,
    MalformedInput(EcError),
}

impl Verification {
    pub fn is_valid(&self) -> bool {
        *self == Verification::Valid
    }
}

pub struct Ecdsa {
    rng: Box<dyn ScalarRng>,
    hash: HashType,
}

pub struct EcdsaBuilder {
    rng: Option<Box<dyn ScalarRng>>,
    hash: HashType,
}

impl Default for EcdsaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EcdsaBuilder {
    pub fn new() -> Self {
        EcdsaBuilder {
            rng: None,
            hash: HashType::SHA256,
        }
    }
    pub fn hash(mut self, hash: HashType) -> Self {
        self.hash = hash;
        self
    }
    pub fn rng(mut self, rng: impl ScalarRng + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }
    pub fn build(self) -> Ecdsa {
        let rng: Box<dyn ScalarRng> = match self.rng {
            Some(rng) => rng,
            None => Box::new(SecureRng::new()),
        };
        Ecdsa {
            rng,
            hash: self.hash,
        }
    }
}

impl Ecdsa {
    pub fn builder() -> EcdsaBuilder {
        EcdsaBuilder::new()
    }

    pub fn urandom() -> Self {
        EcdsaBuilder::new().build()
    }

    /// Predictable nonces, only for tests and demos.
    pub fn unsecure() -> Self {
        EcdsaBuilder::new().rng(SimpleRng::from_seed(10)).build()
    }

    pub fn hash_type(&self) -> HashType {
        self.hash
    }

    pub fn generate_keypair(&mut self, curve: &Curve) -> Result<KeyPair, EcError> {
        let secret = self.rng.between(&ibig!(1), &curve.n);
        log::trace!("generating key pair on {}", curve.name);
        KeyPair::from_private_key(PrivateKey::new(curve.clone(), secret)?)
    }

    pub fn sign(&mut self, privkey: &PrivateKey, message: &[u8]) -> Result<Signature, EcError> {
        let hashed_message = hash::sha_x(self.hash, message);
        self.sign_prehashed(privkey, &hashed_message)
    }

    pub fn sign_prehashed(
        &mut self,
        privkey: &PrivateKey,
        hashed_message: &[u8],
    ) -> Result<Signature, EcError> {
        let msg = hash::digest_to_int(hashed_message);
        let curve = &privkey.curve;
        let d = &privkey.secret;

        loop {
            // 1. Select a random nonce in [1, n-1]
            let k = self.rng.between(&ibig!(1), &curve.n);

            // 2. k * G
            let p = math::multiply(&curve.g, &k, curve)?;

            // 3. r = p.x mod n
            let r = match p.x() {
                Some(x) => math::rem_euclid(x, &curve.n),
                None => ibig!(0),
            };

            // 4. s = ( (msg + r * d) * inv(k) ) mod n
            let s = math::rem_euclid(
                &((&msg + &r * d) * math::inv(&k, &curve.n)?),
                &curve.n,
            );

            if r == ibig!(0) || s == ibig!(0) {
                log::debug!("degenerate signature (r or s is zero), drawing a new nonce");
                continue;
            }

            return Ok(Signature::new(r, s));
        }
    }

    pub fn verify(&self, pub_key: &PublicKey, sign: &Signature, message: &[u8]) -> Verification {
        let hashed_message = hash::sha_x(self.hash, message);
        self.verify_prehashed(pub_key, sign, &hashed_message)
    }

    pub fn verify_prehashed(
        &self,
        pub_key: &PublicKey,
        sign: &Signature,
        hashed_message: &[u8],
    ) -> Verification {
        match check(pub_key, sign, hashed_message) {
            Ok(true) => Verification::Valid,
            Ok(false) => {
                log::debug!("signature does not match");
                Verification::Invalid
            }
            Err(e) => {
                log::debug!("rejecting malformed signature input: {e}");
                Verification::MalformedInput(e)
            }
        }
    }
}

fn check(pub_key: &PublicKey, sign: &Signature, hashed_message: &[u8]) -> Result<bool, EcError> {
    let curve = &pub_key.curve;
    if !curve.contains(&pub_key.point) {
        return Err(EcError::NotOnCurve);
    }
    if sign.r < ibig!(0) || sign.s < ibig!(0) {
        return Err(EcError::NegativeScalar);
    }

    let z = hash::digest_to_int(hashed_message);
    let s_inv = math::inv(&sign.s, &curve.n)?;

    let u1 = math::rem_euclid(&(z * &s_inv), &curve.n);
    let u2 = math::rem_euclid(&(&sign.r * s_inv), &curve.n);

    let res1 = math::multiply(&curve.g, &u1, curve)?;
    let res2 = math::multiply(&pub_key.point, &u2, curve)?;
    let res = math::add(&res1, &res2, curve)?;

    Ok(match res {
        Point::Infinity => false,
        Point::Affine { x, .. } => {
            math::rem_euclid(&x, &curve.n) == math::rem_euclid(&sign.r, &curve.n)
        }
    })
}
