use cardano_asset::assets::constants::MAX_ASSET_NAME_LENGTH;
use rand::{thread_rng, Rng, RngCore};

/// Random bytes of the given length
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    thread_rng().fill_bytes(&mut bytes);
    bytes
}

/// Random asset name of any valid length, including empty
pub fn random_asset_name() -> Vec<u8> {
    let len = thread_rng().gen_range(0..=MAX_ASSET_NAME_LENGTH);
    random_bytes(len)
}
