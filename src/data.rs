use std::{fmt::Display, str::FromStr};

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_program::pubkey::Pubkey;

/// The kinds of asset the launchpad program can issue. The wire tag is the
/// variant index, one byte.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub enum AssetType {
    SplTokenLegacy,
    SplToken2022,
    StandardNft,
}

impl FromStr for AssetType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spl-legacy" => Ok(AssetType::SplTokenLegacy),
            "spl-2022" => Ok(AssetType::SplToken2022),
            "nft" => Ok(AssetType::StandardNft),
            _ => Err(anyhow::anyhow!("Invalid asset type: {}", s)),
        }
    }
}

impl Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetType::SplTokenLegacy => write!(f, "spl-legacy"),
            AssetType::SplToken2022 => write!(f, "spl-2022"),
            AssetType::StandardNft => write!(f, "nft"),
        }
    }
}

/// Full specification of an asset launch. Field order is the wire contract;
/// see [`crate::codec`] for the byte layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfig {
    pub asset_type: AssetType,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: u64,
    pub metadata_uri: String,
    pub creator: Pubkey,
    pub is_mutable: bool,
}

impl LaunchConfig {
    pub fn new_spl_token_legacy(
        name: String,
        symbol: String,
        decimals: u8,
        total_supply: u64,
        metadata_uri: String,
        creator: Pubkey,
    ) -> Self {
        Self {
            asset_type: AssetType::SplTokenLegacy,
            name,
            symbol,
            decimals,
            total_supply,
            metadata_uri,
            creator,
            is_mutable: true,
        }
    }

    pub fn new_spl_token_2022(
        name: String,
        symbol: String,
        decimals: u8,
        total_supply: u64,
        metadata_uri: String,
        creator: Pubkey,
    ) -> Self {
        Self {
            asset_type: AssetType::SplToken2022,
            name,
            symbol,
            decimals,
            total_supply,
            metadata_uri,
            creator,
            is_mutable: true,
        }
    }

    /// NFTs are issued with zero decimals and a supply of one.
    pub fn new_standard_nft(
        name: String,
        symbol: String,
        metadata_uri: String,
        creator: Pubkey,
    ) -> Self {
        Self {
            asset_type: AssetType::StandardNft,
            name,
            symbol,
            decimals: 0,
            total_supply: 1,
            metadata_uri,
            creator,
            is_mutable: true,
        }
    }
}

/// The record the program writes into the launched-asset PDA.
#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
pub struct Asset {
    pub asset_type: AssetType,
    pub mint: Pubkey,
    pub creator: Pubkey,
    pub name: String,
    pub symbol: String,
    pub total_supply: u64,
    pub launch_timestamp: i64,
}
