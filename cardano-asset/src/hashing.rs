/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The digest stage: reduces a policy id and an asset name to the 20 bytes
//! that get bech32-encoded into a fingerprint.

use blake2b_simd::Params as Blake2bParams;

/// Length in bytes of every digest produced by a [`Hasher`]
pub const DIGEST_LENGTH: usize = 20;

/// A one-way hash with a 160-bit output. Fingerprints are only interoperable
/// when computed with [`Blake2b160`]; other implementations exist so the
/// encoder can be exercised independently of the hash.
pub trait Hasher {
    fn hash(&self, bytes: &[u8]) -> [u8; DIGEST_LENGTH];
}

/// BLAKE2b with a 20 byte output length, no key and no personalization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blake2b160;

impl Hasher for Blake2b160 {
    fn hash(&self, bytes: &[u8]) -> [u8; DIGEST_LENGTH] {
        let h = Blake2bParams::new()
            .hash_length(DIGEST_LENGTH)
            .to_state()
            .update(bytes)
            .finalize();

        let mut digest = [0u8; DIGEST_LENGTH];
        digest.copy_from_slice(h.as_bytes());
        digest
    }
}

/// Digest of `policy ‖ name` under blake2b-160. Length checks belong to the
/// caller; this never fails.
pub fn digest(policy: &[u8], name: &[u8]) -> [u8; DIGEST_LENGTH] {
    digest_with(&Blake2b160, policy, name)
}

/// Same as [`digest`], with the hash supplied by the caller.
pub fn digest_with<H: Hasher + ?Sized>(
    hasher: &H,
    policy: &[u8],
    name: &[u8],
) -> [u8; DIGEST_LENGTH] {
    let mut preimage = Vec::with_capacity(policy.len() + name.len());
    preimage.extend_from_slice(policy);
    preimage.extend_from_slice(name);

    hasher.hash(&preimage)
}
