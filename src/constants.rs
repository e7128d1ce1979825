use solana_program::{pubkey, pubkey::Pubkey};

pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;
pub const MAX_DECIMALS: u8 = 9;

pub const PUBKEY_LENGTH: usize = 32;

/// Seed prefix for the per-mint launched-asset PDA.
pub const LAUNCHED_ASSET_SEED: &str = "launched_asset";

/// Instruction tag for LaunchAsset, the only operation this crate builds.
pub const LAUNCH_ASSET_DISCRIMINATOR: u8 = 0;

pub const LAUNCHPAD_PROGRAM_ID: Pubkey = pubkey!("4n6ByGTtLj4fTgLApV2aigC3XzWZhCmYkNbcfVheGzd8");
pub const SPL_TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const SPL_TOKEN_2022_PROGRAM_ID: Pubkey = pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");
