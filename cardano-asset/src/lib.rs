/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! CIP-14 fingerprints for Cardano native assets.
//!
//! A fingerprint is `bech32("asset", blake2b-160(policy_id ‖ asset_name))`.
//! Everything here is a pure function of its inputs and safe to call from
//! any number of threads.

pub mod assets;
pub mod bech32;
pub mod errors;
pub mod hashing;
pub mod serializing;

pub use {
    assets::{
        asset::{validate_asset_name_hex, Asset, AssetInfo},
        fingerprint::{fingerprint, AssetFingerprint},
        network::Network,
        policy_id::{validate_policy_id, PolicyId},
    },
    errors::{AssetError, AssetErrorKind},
    hashing::{digest, Blake2b160, Hasher},
};

#[cfg(any(test, feature = "benchmark"))]
pub mod test_util;
