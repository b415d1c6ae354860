/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use crate::errors::{AssetError, AssetErrorKind};

/// Regroup a sequence of `from`-bit values into `to`-bit values, most
/// significant bits first.
///
/// With `pad` set, leftover bits are shifted up into one final value. Without
/// it, the input must regroup exactly: more than `from - 1` leftover bits, or
/// any non-zero leftover bit, is [`AssetErrorKind::InvalidPadding`]. Input
/// values wider than `from` bits are [`AssetErrorKind::InvalidData`], as are
/// widths outside `1..=8`.
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, AssetError> {
    if !(1..=8).contains(&from) || !(1..=8).contains(&to) {
        return Err(AssetError::new(AssetErrorKind::InvalidData));
    }

    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let maxv: u32 = (1 << to) - 1;
    // only the bits that can still be emitted are kept in the accumulator
    let max_acc: u32 = (1 << (from + to - 1)) - 1;

    let mut result = Vec::with_capacity((data.len() * from as usize + to as usize - 1) / to as usize);

    for value in data {
        let value = u32::from(*value);
        if value >> from != 0 {
            return Err(AssetError::new(AssetErrorKind::InvalidData));
        }

        acc = ((acc << from) | value) & max_acc;
        bits += from;

        while bits >= to {
            bits -= to;
            result.push(((acc >> bits) & maxv) as u8);
        }
    }

    if pad {
        if bits > 0 {
            result.push(((acc << (to - bits)) & maxv) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & maxv) != 0 {
        return Err(AssetError::new(AssetErrorKind::InvalidPadding));
    }

    Ok(result)
}
