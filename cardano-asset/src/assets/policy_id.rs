/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::{
    assets::constants::POLICY_ID_LENGTH,
    errors::{AssetError, AssetErrorKind},
    serializing::{bytes_to_hex, hex_to_bytes},
};
use std::{fmt, str::FromStr};

/// Checks that `policy_id` is exactly 56 lowercase hexadecimal characters.
pub fn validate_policy_id(policy_id: &str) -> Result<(), AssetError> {
    let valid = policy_id.len() == POLICY_ID_LENGTH * 2
        && policy_id
            .bytes()
            .all(|c| c.is_ascii_digit() || (b'a'..=b'f').contains(&c));

    if valid {
        Ok(())
    } else {
        Err(AssetError::new(AssetErrorKind::InvalidPolicyId))
    }
}

/// Hash of the minting policy script that controls an asset.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PolicyId([u8; POLICY_ID_LENGTH]);

impl PolicyId {
    pub fn new(bytes: [u8; POLICY_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse the canonical lowercase hex form of a policy id.
    pub fn from_hex(policy_id: &str) -> Result<Self, AssetError> {
        validate_policy_id(policy_id)?;
        Ok(Self(hex_to_bytes(policy_id)?))
    }

    pub fn as_bytes(&self) -> &[u8; POLICY_ID_LENGTH] {
        &self.0
    }

    pub fn hex(&self) -> String {
        bytes_to_hex(&self.0)
    }
}

impl TryFrom<&[u8]> for PolicyId {
    type Error = AssetError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; POLICY_ID_LENGTH] = bytes
            .try_into()
            .map_err(|_| AssetError::new(AssetErrorKind::InvalidPolicyId))?;
        Ok(Self(bytes))
    }
}

impl FromStr for PolicyId {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[cfg(test)]
mod test {
    use super::{validate_policy_id, PolicyId};
    use crate::{errors::AssetErrorKind, test_util::SPACEBUDZ_POLICY};

    #[test]
    fn test_validate_policy_id() {
        let valid = [
            SPACEBUDZ_POLICY.to_string(),
            "0".repeat(56),
            "f".repeat(56),
        ];
        for policy_id in valid.iter() {
            validate_policy_id(policy_id).expect("valid policy id");
        }

        let invalid = [
            "".to_string(),
            "d5e6bf".to_string(),
            format!("{}00", SPACEBUDZ_POLICY),
            SPACEBUDZ_POLICY.to_uppercase(),
            format!("g{}", &SPACEBUDZ_POLICY[1..]),
        ];
        for policy_id in invalid.iter() {
            let err = validate_policy_id(policy_id).expect_err("invalid policy id");
            assert_eq!(err.kind, AssetErrorKind::InvalidPolicyId);
        }
    }

    #[test]
    fn test_policy_id_hex_round_trip() {
        let policy_id: PolicyId = SPACEBUDZ_POLICY.parse().expect("valid policy id");

        assert_eq!(policy_id.as_bytes()[0], 0xd5);
        assert_eq!(policy_id.hex(), SPACEBUDZ_POLICY);
        assert_eq!(policy_id.to_string(), SPACEBUDZ_POLICY);
    }

    #[test]
    fn test_from_hex_reports_policy_id_kind() {
        let uppercase = SPACEBUDZ_POLICY.to_uppercase();
        for policy_id in ["d5e6", uppercase.as_str()] {
            let err = PolicyId::from_hex(policy_id).expect_err("invalid policy id");
            assert_eq!(err.kind, AssetErrorKind::InvalidPolicyId);
            assert!(err.source.is_none());
        }
    }

    #[test]
    fn test_policy_id_from_slice() {
        PolicyId::try_from(&[0u8; 28][..]).expect("28 bytes");

        let err = PolicyId::try_from(&[0u8; 27][..]).expect_err("27 bytes");
        assert_eq!(err.kind, AssetErrorKind::InvalidPolicyId);
    }
}
