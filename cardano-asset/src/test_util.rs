/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

pub const SPACEBUDZ_POLICY: &str = "d5e6bf0500378d4f0da4e8dde6becec7621cd8cbf5cbb9b87013d4cc";

/// `SpaceBud0` as hex
pub const SPACEBUD_NAME_HEX: &str = "537061636542756430";

pub const SPACEBUD_FINGERPRINT: &str = "asset1rhmwfllvhgczltxm0y7rdump6g5p5ax4c25csq";

/// (policy id, asset name hex, fingerprint) from CIP-14
pub const CIP14_VECTORS: [(&str, &str, &str); 7] = [
    (
        "7eae28af2208be856f7a119668ae52a49b73725e326dc16579dcc373",
        "",
        "asset1rjklcrnsdzqp65wjgrg55sy9723kw09mlgvlc3",
    ),
    (
        "7eae28af2208be856f7a119668ae52a49b73725e326dc16579dcc373",
        "504154415445",
        "asset13n25uv0yaf5kus35fm2k86cqy60z58d9xmde92",
    ),
    (
        "1e349c9bdea19fd6c147626a5260bc44b71635f398b67c59881df209",
        "504154415445",
        "asset1hv4p5tv2a837mzqrst04d0dcptdjmluqvdx9k3",
    ),
    (
        "1e349c9bdea19fd6c147626a5260bc44b71635f398b67c59881df209",
        "7eae28af2208be856f7a119668ae52a49b73725e326dc16579dcc373",
        "asset1aqrdypg669jgazruv5ah07nuyqe0wxjhe2el6f",
    ),
    (
        "7eae28af2208be856f7a119668ae52a49b73725e326dc16579dcc373",
        "1e349c9bdea19fd6c147626a5260bc44b71635f398b67c59881df209",
        "asset17jd78wukhtrnmjh3fngzasxm8rck0l2r4hhyyt",
    ),
    (
        "7eae28af2208be856f7a119668ae52a49b73725e326dc16579dcc373",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "asset1pkpwyknlvul7az0xx8czhl60pyel45rpje4z8w",
    ),
    (
        "1e349c9bdea19fd6c147626a5260bc44b71635f398b67c59881df209",
        "",
        "asset1uyuxku60yqe57nusqzjx38aan3f2wq6s93f6ea",
    ),
];
