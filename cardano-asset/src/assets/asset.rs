/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::{
    assets::{
        constants::{ASSET_ID_SEPARATOR, MAX_ASSET_NAME_LENGTH},
        fingerprint::AssetFingerprint,
        policy_id::PolicyId,
    },
    errors::{AssetError, AssetErrorKind},
    serializing::{bytes_to_hex, hex_to_vec_bytes},
};
use std::str::FromStr;

/// Checks that `asset_name_hex` is valid hex of at most 32 bytes.
pub fn validate_asset_name_hex(asset_name_hex: &str) -> Result<(), AssetError> {
    decode_asset_name(asset_name_hex).map(|_| ())
}

fn decode_asset_name(asset_name_hex: &str) -> Result<Vec<u8>, AssetError> {
    let name = hex_to_vec_bytes(asset_name_hex)?;
    check_name_length(&name)?;
    Ok(name)
}

fn check_name_length(name: &[u8]) -> Result<(), AssetError> {
    if name.len() > MAX_ASSET_NAME_LENGTH {
        return Err(AssetError::new(AssetErrorKind::AssetNameTooLong));
    }
    Ok(())
}

/// A native token: the policy that mints it and its name under that policy.
/// The name is raw bytes and is not required to be UTF-8.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Asset {
    policy_id: PolicyId,

    /// At most 32 bytes, possibly empty
    name: Vec<u8>,
}

impl Asset {
    /// Create an asset from a hex policy id and a text name.
    pub fn new(policy_id: &str, name: &str) -> Result<Asset, AssetError> {
        let policy_id = PolicyId::from_hex(policy_id)?;
        Self::from_parts(policy_id, name.as_bytes())
    }

    /// Create an asset from a hex policy id and a hex encoded name.
    pub fn from_hex(policy_id: &str, name_hex: &str) -> Result<Asset, AssetError> {
        let policy_id = PolicyId::from_hex(policy_id)?;
        let name = decode_asset_name(name_hex)?;
        Ok(Asset { policy_id, name })
    }

    pub fn from_parts(policy_id: PolicyId, name: &[u8]) -> Result<Asset, AssetError> {
        check_name_length(name)?;
        Ok(Asset {
            policy_id,
            name: name.to_vec(),
        })
    }

    /// Parse an asset id, `policyId.assetNameHex`, or a bare `policyId` for
    /// an asset with an empty name.
    pub fn parse_asset_id(asset_id: &str) -> Result<Asset, AssetError> {
        let (policy_id, name_hex) = asset_id
            .split_once(ASSET_ID_SEPARATOR)
            .unwrap_or((asset_id, ""));

        if policy_id.is_empty() {
            return Err(AssetError::new(AssetErrorKind::InvalidAssetId));
        }

        Self::from_hex(policy_id, name_hex)
    }

    pub fn policy_id(&self) -> &PolicyId {
        &self.policy_id
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn name_hex(&self) -> String {
        bytes_to_hex(&self.name)
    }

    /// `policyId.assetNameHex`, or just the policy id when the name is empty.
    pub fn asset_id(&self) -> String {
        if self.name.is_empty() {
            return self.policy_id.hex();
        }
        format!(
            "{}{}{}",
            self.policy_id.hex(),
            ASSET_ID_SEPARATOR,
            self.name_hex()
        )
    }

    pub fn fingerprint(&self) -> Result<AssetFingerprint, AssetError> {
        AssetFingerprint::from_policy(&self.policy_id, &self.name)
    }

    pub fn info(&self) -> Result<AssetInfo, AssetError> {
        Ok(AssetInfo {
            fingerprint: self.fingerprint()?.to_bech32()?,
            name_hex: self.name_hex(),
            asset_id: self.asset_id(),
            asset: self.clone(),
        })
    }

    pub fn is_valid_utf8_name(&self) -> bool {
        std::str::from_utf8(&self.name).is_ok()
    }
}

impl FromStr for Asset {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_asset_id(s)
    }
}

/// Everything commonly displayed about an asset, computed at once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetInfo {
    pub asset: Asset,
    /// `asset1...`
    pub fingerprint: String,
    pub name_hex: String,
    pub asset_id: String,
}
