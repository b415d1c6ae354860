/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

/// Length in bytes of a policy id (a script hash)
pub const POLICY_ID_LENGTH: usize = 28;

/// Maximum length in bytes of an asset name
pub const MAX_ASSET_NAME_LENGTH: usize = 32;

/// Length in bytes of the hash inside a fingerprint
pub const FINGERPRINT_LENGTH: usize = crate::hashing::DIGEST_LENGTH;

/// Bech32 prefix of every fingerprint
pub const FINGERPRINT_HRP: &str = "asset";

/// Separates the policy id from the asset name in an asset id
pub const ASSET_ID_SEPARATOR: char = '.';
