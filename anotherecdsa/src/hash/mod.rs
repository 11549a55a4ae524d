/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use ibig::IBig;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::utils::bytes;

/// Digest used to turn a message into the integer that gets signed.
/// The discriminant is the digest length in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashType {
    SHA224 = 28,
    #[default]
    SHA256 = 32,
    SHA384 = 48,
    SHA512 = 64,
}

impl HashType {
    pub fn output_len(&self) -> usize {
        *self as usize
    }
}

pub fn sha_x(typ: HashType, data: &[u8]) -> Vec<u8> {
    match typ {
        HashType::SHA224 => Sha224::digest(data).to_vec(),
        HashType::SHA256 => Sha256::digest(data).to_vec(),
        HashType::SHA384 => Sha384::digest(data).to_vec(),
        HashType::SHA512 => Sha512::digest(data).to_vec(),
    }
}

/// The digest is read as one big-endian number, it is not truncated to the
/// bit length of the group order.
pub fn digest_to_int(digest: &[u8]) -> IBig {
    bytes::to_ibig_be(digest)
}
