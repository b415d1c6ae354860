/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::errors::{AssetError, AssetErrorKind};

/// Cardano network, identified by the id carried in address headers.
///
/// Fingerprints do not depend on the network: the same policy and name give
/// the same fingerprint everywhere.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Network {
    Testnet,
    Mainnet,
}

impl Network {
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Testnet => 0,
            Self::Mainnet => 1,
        }
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Testnet),
            1 => Some(Self::Mainnet),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Network {
    type Error = AssetError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or_else(|| AssetError::new(AssetErrorKind::InvalidNetwork))
    }
}

impl From<Network> for u8 {
    #[inline]
    fn from(network: Network) -> u8 {
        network.as_u8()
    }
}
