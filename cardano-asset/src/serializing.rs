/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::errors::{AssetError, AssetErrorKind};

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Output the bytes as a lowercase hexadecimal String
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);

    for b in bytes {
        hex.push(HEX_CHARS[(b >> 4) as usize] as char);
        hex.push(HEX_CHARS[(b & 0x0f) as usize] as char);
    }

    hex
}

/// Output the hexadecimal String as a fixed-size byte array. The string must
/// be exactly `SIZE * 2` characters long.
pub fn hex_to_bytes<const SIZE: usize>(hex: &str) -> Result<[u8; SIZE], AssetError> {
    if hex.len() != SIZE * 2 {
        return Err(AssetError::new(AssetErrorKind::InvalidData));
    }

    hex_to_vec_bytes(hex)?
        .try_into()
        .map_err(|_| AssetError::new(AssetErrorKind::InvalidData))
}

/// Decode hex of any even length, in either case.
pub fn hex_to_vec_bytes(hex: &str) -> Result<Vec<u8>, AssetError> {
    if hex.len() % 2 != 0 {
        return Err(AssetError::new(AssetErrorKind::InvalidData));
    }

    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| Ok(nibble(pair[0])? << 4 | nibble(pair[1])?))
        .collect()
}

#[inline]
fn nibble(c: u8) -> Result<u8, AssetError> {
    char::from(c)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| AssetError::new(AssetErrorKind::InvalidData))
}
