/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Bech32 (BIP-173) strings: a human readable prefix, the separator `1`, the
//! payload as 5-bit symbols and a six symbol BCH checksum over all of it.

mod bits;
mod checksum;

pub use bits::convert_bits;
pub use checksum::CHECKSUM_LENGTH;

use crate::errors::{AssetError, AssetErrorKind};
use checksum::{create_checksum, verify_checksum};

/// Symbol alphabet, indexed by 5-bit value
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

pub const SEPARATOR: char = '1';

pub const MAX_HRP_LENGTH: usize = 83;

/// Length of the string [`encode`] produces for `len` bytes of payload.
pub const fn encoded_len(hrp: &str, len: usize) -> usize {
    hrp.len() + 1 + (len * 8 + 4) / 5 + CHECKSUM_LENGTH
}

/// Checks that `hrp` can be used as a prefix: 1 to 83 characters in the
/// printable ASCII range, lowercase, and never the separator itself.
pub fn validate_hrp(hrp: &str) -> Result<(), AssetError> {
    if hrp.is_empty() || hrp.len() > MAX_HRP_LENGTH {
        return Err(AssetError::new(AssetErrorKind::InvalidHrp));
    }

    let valid = hrp
        .bytes()
        .all(|c| (33..=126).contains(&c) && c != SEPARATOR as u8 && !c.is_ascii_uppercase());

    if valid {
        Ok(())
    } else {
        Err(AssetError::new(AssetErrorKind::InvalidHrp))
    }
}

/// Encode `data` bytes under the prefix `hrp`.
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, AssetError> {
    validate_hrp(hrp)?;
    let groups = convert_bits(data, 8, 5, true)?;
    assemble(hrp, &groups)
}

/// Encode values that are already 5-bit groups. A value of 32 or more is an
/// [`AssetErrorKind::AlphabetOverflow`].
pub fn encode_groups(hrp: &str, groups: &[u8]) -> Result<String, AssetError> {
    validate_hrp(hrp)?;
    assemble(hrp, groups)
}

/// `hrp` must already be validated.
fn assemble(hrp: &str, groups: &[u8]) -> Result<String, AssetError> {
    let checksum = create_checksum(hrp, groups);

    let mut encoded = String::with_capacity(hrp.len() + 1 + groups.len() + CHECKSUM_LENGTH);
    encoded.push_str(hrp);
    encoded.push(SEPARATOR);
    for value in groups.iter().chain(checksum.iter()) {
        encoded.push(symbol(*value)?);
    }

    Ok(encoded)
}

/// Decode a bech32 string into its prefix and payload bytes.
pub fn decode(encoded: &str) -> Result<(String, Vec<u8>), AssetError> {
    let (hrp, groups) = decode_groups(encoded)?;
    let data = convert_bits(&groups, 5, 8, false)?;
    Ok((hrp, data))
}

/// Decode a bech32 string into its (lowercase) prefix and 5-bit groups, with
/// the checksum verified and removed.
pub fn decode_groups(encoded: &str) -> Result<(String, Vec<u8>), AssetError> {
    parse(encoded).map_err(|e| {
        tracing::debug!(kind = ?e.kind, "rejected bech32 string");
        e
    })
}

fn parse(encoded: &str) -> Result<(String, Vec<u8>), AssetError> {
    let has_lower = encoded.bytes().any(|c| c.is_ascii_lowercase());
    let has_upper = encoded.bytes().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(AssetError::new(AssetErrorKind::MixedCase));
    }

    let encoded = encoded.to_ascii_lowercase();
    let split = encoded
        .rfind(SEPARATOR)
        .ok_or_else(|| AssetError::new(AssetErrorKind::MissingSeparator))?;
    let (hrp, rest) = encoded.split_at(split);
    let data_part = &rest[1..];

    validate_hrp(hrp)?;

    if data_part.len() < CHECKSUM_LENGTH {
        return Err(AssetError::new(AssetErrorKind::InvalidLength));
    }

    let mut groups = data_part
        .bytes()
        .map(value)
        .collect::<Result<Vec<u8>, AssetError>>()?;

    if !verify_checksum(hrp, &groups) {
        return Err(AssetError::new(AssetErrorKind::InvalidChecksum));
    }

    groups.truncate(groups.len() - CHECKSUM_LENGTH);

    Ok((hrp.to_string(), groups))
}

fn symbol(value: u8) -> Result<char, AssetError> {
    match CHARSET.get(value as usize) {
        Some(c) => Ok(*c as char),
        None => {
            tracing::error!(value, "bech32 symbol out of range");
            Err(AssetError::new(AssetErrorKind::AlphabetOverflow))
        }
    }
}

fn value(symbol: u8) -> Result<u8, AssetError> {
    CHARSET
        .iter()
        .position(|c| *c == symbol)
        .map(|v| v as u8)
        .ok_or_else(|| AssetError::new(AssetErrorKind::InvalidCharacter))
}
