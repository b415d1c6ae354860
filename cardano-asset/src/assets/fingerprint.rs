/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::{
    assets::constants::{
        FINGERPRINT_HRP, FINGERPRINT_LENGTH, MAX_ASSET_NAME_LENGTH, POLICY_ID_LENGTH,
    },
    bech32,
    errors::{AssetError, AssetErrorKind},
    hashing::{digest_with, Blake2b160, Hasher},
    serializing::bytes_to_hex,
};
use std::{fmt, io, str::FromStr};

use super::policy_id::PolicyId;

/// CIP-14 fingerprint of a native asset: blake2b-160 of the policy id
/// followed by the asset name. Rendered as bech32 under the `asset` prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AssetFingerprint([u8; FINGERPRINT_LENGTH]);

impl AssetFingerprint {
    /// Fingerprint the raw policy id and asset name bytes. The policy id must
    /// be 28 bytes and the name at most 32.
    pub fn from_parts(policy_id: &[u8], asset_name: &[u8]) -> Result<Self, AssetError> {
        Self::from_parts_with(&Blake2b160, policy_id, asset_name)
    }

    /// Same as [`AssetFingerprint::from_parts`], with the hash supplied by the
    /// caller. Anything but [`Blake2b160`] produces fingerprints no other
    /// implementation will agree with.
    pub fn from_parts_with<H: Hasher + ?Sized>(
        hasher: &H,
        policy_id: &[u8],
        asset_name: &[u8],
    ) -> Result<Self, AssetError> {
        if policy_id.len() != POLICY_ID_LENGTH {
            return Err(AssetError::new(AssetErrorKind::InvalidPolicyId));
        }
        if asset_name.len() > MAX_ASSET_NAME_LENGTH {
            return Err(AssetError::new(AssetErrorKind::AssetNameTooLong));
        }

        let fingerprint = Self(digest_with(hasher, policy_id, asset_name));

        tracing::trace!(
            policy_id = %bytes_to_hex(policy_id),
            asset_name = %bytes_to_hex(asset_name),
            fingerprint = %bytes_to_hex(&fingerprint.0),
            "computed asset fingerprint"
        );

        Ok(fingerprint)
    }

    pub fn from_policy(policy_id: &PolicyId, asset_name: &[u8]) -> Result<Self, AssetError> {
        Self::from_parts(policy_id.as_bytes(), asset_name)
    }

    /// Wrap an already computed hash.
    pub fn from_hash(hash: [u8; FINGERPRINT_LENGTH]) -> Self {
        Self(hash)
    }

    pub fn hash(&self) -> &[u8; FINGERPRINT_LENGTH] {
        &self.0
    }

    /// The `asset1...` form of this fingerprint.
    pub fn to_bech32(&self) -> Result<String, AssetError> {
        bech32::encode(FINGERPRINT_HRP, &self.0)
    }

    /// Parse an `asset1...` string. Any valid bech32 string with another
    /// prefix or a payload other than 20 bytes is rejected.
    pub fn from_bech32(encoded: &str) -> Result<Self, AssetError> {
        let (hrp, data) = bech32::decode(encoded)?;
        if hrp != FINGERPRINT_HRP {
            return Err(AssetError::new(AssetErrorKind::UnexpectedHrp));
        }

        let hash: [u8; FINGERPRINT_LENGTH] = data
            .try_into()
            .map_err(|_| AssetError::new(AssetErrorKind::InvalidLength))?;

        Ok(Self(hash))
    }

    pub fn read<R: io::Read>(mut reader: R) -> Result<Self, AssetError> {
        let mut hash = [0u8; FINGERPRINT_LENGTH];
        reader.read_exact(&mut hash)?;
        Ok(Self(hash))
    }

    /// Stow the hash bytes of this fingerprint in the given writer.
    pub fn write<W: io::Write>(&self, mut writer: W) -> Result<(), AssetError> {
        writer.write_all(&self.0)?;

        Ok(())
    }
}

impl FromStr for AssetFingerprint {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bech32(s)
    }
}

impl fmt::Display for AssetFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.to_bech32().map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

/// Fingerprint of the asset with the given hex policy id and raw asset name,
/// as an `asset1...` string.
pub fn fingerprint(policy_id: &str, asset_name: &str) -> Result<String, AssetError> {
    let policy_id = PolicyId::from_hex(policy_id)?;
    AssetFingerprint::from_policy(&policy_id, asset_name.as_bytes())?.to_bech32()
}

#[cfg(test)]
mod test {
    use super::{fingerprint, AssetFingerprint};
    use crate::{
        errors::AssetErrorKind,
        hashing::{Hasher, DIGEST_LENGTH},
        serializing::hex_to_vec_bytes,
        test_util::{CIP14_VECTORS, SPACEBUDZ_POLICY, SPACEBUD_FINGERPRINT},
    };
    use hex_literal::hex;

    const POLICY: [u8; 28] = hex!("d5e6bf0500378d4f0da4e8dde6becec7621cd8cbf5cbb9b87013d4cc");

    struct ZeroHasher;

    impl Hasher for ZeroHasher {
        fn hash(&self, _bytes: &[u8]) -> [u8; DIGEST_LENGTH] {
            [0; DIGEST_LENGTH]
        }
    }

    #[test]
    fn test_cip14_vectors() {
        for (policy_id, name_hex, expected) in CIP14_VECTORS {
            let policy = hex_to_vec_bytes(policy_id).expect("valid policy hex");
            let name = hex_to_vec_bytes(name_hex).expect("valid name hex");

            let fingerprint =
                AssetFingerprint::from_parts(&policy, &name).expect("valid asset parts");
            assert_eq!(fingerprint.to_bech32().expect("encodes"), expected);
        }
    }

    #[test]
    fn test_spacebud_fingerprint() {
        let fp = fingerprint(SPACEBUDZ_POLICY, "SpaceBud0").expect("valid asset");

        assert_eq!(fp, SPACEBUD_FINGERPRINT);
        assert_eq!(fp.len(), 44);
        assert!(fp.starts_with("asset1"));
        assert!(fp[6..]
            .bytes()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert!(!fp[6..].contains(&['1', 'b', 'i', 'o'][..]));
    }

    #[test]
    fn test_fingerprint_deterministic() {
        let first = fingerprint(SPACEBUDZ_POLICY, "SpaceBud0").expect("valid asset");
        let second = fingerprint(SPACEBUDZ_POLICY, "SpaceBud0").expect("valid asset");
        assert_eq!(first, second);
    }

    #[test]
    fn test_fingerprint_sensitivity() {
        let base = fingerprint(SPACEBUDZ_POLICY, "SpaceBud0").expect("valid asset");

        let other_name = fingerprint(SPACEBUDZ_POLICY, "SpaceBud1").expect("valid asset");
        assert_ne!(base, other_name);

        let other_policy = fingerprint(&"a".repeat(56), "SpaceBud0").expect("valid asset");
        assert_ne!(base, other_policy);
    }

    #[test]
    fn test_empty_name() {
        let fp = AssetFingerprint::from_parts(&POLICY, &[]).expect("empty names are valid");
        assert_eq!(
            fp.to_string(),
            "asset1tjluzpzluxmz8mz7z3u9qsesypkfjxne853g7p"
        );
    }

    #[test]
    fn test_name_length_boundary() {
        AssetFingerprint::from_parts(&POLICY, &[b'a'; 32]).expect("32 bytes is the limit");

        let err = AssetFingerprint::from_parts(&POLICY, &[b'a'; 33]).expect_err("33 bytes");
        assert_eq!(err.kind, AssetErrorKind::AssetNameTooLong);

        let err = fingerprint(SPACEBUDZ_POLICY, &"a".repeat(33)).expect_err("33 bytes");
        assert_eq!(err.kind, AssetErrorKind::AssetNameTooLong);
    }

    #[test]
    fn test_invalid_policy() {
        let err = AssetFingerprint::from_parts(&POLICY[..27], b"x").expect_err("27 bytes");
        assert_eq!(err.kind, AssetErrorKind::InvalidPolicyId);

        let err = fingerprint("bad", "name").expect_err("not a policy id");
        assert_eq!(err.kind, AssetErrorKind::InvalidPolicyId);
    }

    #[test]
    fn test_injected_hasher() {
        let fp = AssetFingerprint::from_parts_with(&ZeroHasher, &POLICY, b"SpaceBud0")
            .expect("valid asset parts");

        assert_eq!(fp.hash(), &[0; DIGEST_LENGTH]);
        assert_eq!(fp.to_string(), "asset1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq6wyvar");
    }

    #[test]
    fn test_parse_fingerprint() {
        let parsed: AssetFingerprint = SPACEBUD_FINGERPRINT.parse().expect("valid fingerprint");
        let computed =
            AssetFingerprint::from_parts(&POLICY, b"SpaceBud0").expect("valid asset parts");
        assert_eq!(parsed, computed);

        let upper: AssetFingerprint = SPACEBUD_FINGERPRINT
            .to_uppercase()
            .parse()
            .expect("uppercase fingerprint");
        assert_eq!(upper, computed);
    }

    #[test]
    fn test_parse_rejects_other_payloads() {
        let addr = crate::bech32::encode("addr", &[0; 20]).expect("encodes");
        let err = AssetFingerprint::from_bech32(&addr).expect_err("wrong prefix");
        assert_eq!(err.kind, AssetErrorKind::UnexpectedHrp);

        let short = crate::bech32::encode("asset", &[0; 19]).expect("encodes");
        let err = AssetFingerprint::from_bech32(&short).expect_err("19 byte payload");
        assert_eq!(err.kind, AssetErrorKind::InvalidLength);
    }

    #[test]
    fn test_read_write() {
        let fp = AssetFingerprint::from_parts(&POLICY, b"SpaceBud0").expect("valid asset parts");

        let mut buf = Vec::new();
        fp.write(&mut buf).expect("writes");
        assert_eq!(buf.len(), DIGEST_LENGTH);
        assert_eq!(buf, hex!("1df6e4ffecba302facdb793c36f361d2281a74d5"));

        let read = AssetFingerprint::read(&buf[..]).expect("reads");
        assert_eq!(read, fp);

        let err = AssetFingerprint::read(&buf[..10]).expect_err("short read");
        assert_eq!(err.kind, AssetErrorKind::Io);
    }
}
