//! Read back the launched-asset record the program writes for each mint.

use std::str::FromStr;

use solana_client::rpc_client::RpcClient;
use solana_program::borsh::try_from_slice_unchecked;
use solana_sdk::pubkey::Pubkey;

use crate::data::Asset;
use crate::derive::derive_launched_asset_pda;

pub mod errors;
use errors::DecodeError;

pub fn decode_launched_asset(
    client: &RpcClient,
    mint: &Pubkey,
    program_id: &Pubkey,
) -> Result<Asset, DecodeError> {
    let pda = derive_launched_asset_pda(mint, program_id)
        .map_err(|err| DecodeError::DerivationFailed(err.to_string()))?;

    let account_data = match client.get_account_data(&pda) {
        Ok(data) => data,
        Err(err) => {
            return Err(DecodeError::ClientError(err.kind));
        }
    };

    let asset: Asset = match try_from_slice_unchecked(&account_data) {
        Ok(asset) => asset,
        Err(err) => return Err(DecodeError::DeserializationFailed(err.to_string())),
    };

    Ok(asset)
}

pub fn decode_launched_asset_from_mint_address(
    client: &RpcClient,
    mint_address: &str,
    program_id: &Pubkey,
) -> Result<Asset, DecodeError> {
    let mint = match Pubkey::from_str(mint_address) {
        Ok(pubkey) => pubkey,
        Err(_) => return Err(DecodeError::PubkeyParseFailed(mint_address.to_string())),
    };

    decode_launched_asset(client, &mint, program_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::AssetType;
    use borsh::BorshSerialize;

    #[test]
    fn test_asset_record_deserialization() {
        let asset = Asset {
            asset_type: AssetType::SplToken2022,
            mint: Pubkey::new_unique(),
            creator: Pubkey::new_unique(),
            name: "TestToken".to_string(),
            symbol: "TTK".to_string(),
            total_supply: 1_000_000_000,
            launch_timestamp: 1_700_000_000,
        };

        // The program pads the account to a fixed size; the client decode
        // must tolerate the trailing zeroes.
        let mut account_data = asset.try_to_vec().unwrap();
        account_data.resize(account_data.len() + 64, 0);

        let decoded: Asset = try_from_slice_unchecked(&account_data).unwrap();
        assert_eq!(decoded, asset);
    }
}
