/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

/// Number of 5-bit symbols in a checksum
pub const CHECKSUM_LENGTH: usize = 6;

/// Generator of the BCH code behind the checksum
const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Residue a valid string leaves; distinguishes bech32 from bech32m
const BECH32_CONST: u32 = 1;

pub(crate) fn polymod<I>(values: I) -> u32
where
    I: IntoIterator<Item = u8>,
{
    let mut chk: u32 = 1;
    for value in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ffffff) << 5) ^ u32::from(value);
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// High bits of every HRP character, a zero, then the low bits of every
/// character. The HRP must already be validated.
pub(crate) fn hrp_expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut expanded = Vec::with_capacity(bytes.len() * 2 + 1);
    expanded.extend(bytes.iter().map(|c| c >> 5));
    expanded.push(0);
    expanded.extend(bytes.iter().map(|c| c & 31));
    expanded
}

pub(crate) fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let values = hrp_expand(hrp)
        .into_iter()
        .chain(data.iter().copied())
        .chain([0u8; CHECKSUM_LENGTH]);
    let modulus = polymod(values) ^ BECH32_CONST;

    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, symbol) in checksum.iter_mut().enumerate() {
        *symbol = ((modulus >> (5 * (5 - i))) & 31) as u8;
    }
    checksum
}

/// `data` includes the trailing checksum symbols.
pub(crate) fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    polymod(hrp_expand(hrp).into_iter().chain(data.iter().copied())) == BECH32_CONST
}
