//! Account-list assembly for the LaunchAsset instruction.
//!
//! The program walks the account list positionally, so the order and the
//! signer/writable flags produced here are part of the wire contract.

use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, system_program, sysvar};

use crate::constants::SPL_TOKEN_2022_PROGRAM_ID;
use crate::data::AssetType;
use crate::derive::{derive_launched_asset_pda, DerivationError};

/// The caller-supplied keys taking part in a launch. `mint` and
/// `token_account` are fresh keypairs generated by the caller; all three
/// must sign the transaction.
#[derive(Debug, Clone, Copy)]
pub struct LaunchParticipants {
    pub payer: Pubkey,
    pub mint: Pubkey,
    pub token_account: Pubkey,
}

/// Which token program services each asset type. NFT launches go through
/// token-2022, a policy of the on-chain program.
pub fn token_program_for(asset_type: AssetType) -> Pubkey {
    match asset_type {
        AssetType::SplTokenLegacy => spl_token::id(),
        AssetType::SplToken2022 | AssetType::StandardNft => SPL_TOKEN_2022_PROGRAM_ID,
    }
}

/// Build the eight accounts LaunchAsset expects, in program order:
///
/// 0. `[signer, writable]` payer
/// 1. `[signer, writable]` mint to be created
/// 2. `[signer, writable]` token account for the initial supply
/// 3. `[writable]` launched-asset metadata PDA
/// 4. `[]` system program
/// 5. `[]` token program (legacy or 2022, per asset type)
/// 6. `[]` associated token program
/// 7. `[]` rent sysvar
pub fn resolve_launch_accounts(
    asset_type: AssetType,
    participants: &LaunchParticipants,
    program_id: &Pubkey,
) -> Result<Vec<AccountMeta>, DerivationError> {
    let metadata_account = derive_launched_asset_pda(&participants.mint, program_id)?;

    Ok(vec![
        AccountMeta::new(participants.payer, true),
        AccountMeta::new(participants.mint, true),
        AccountMeta::new(participants.token_account, true),
        AccountMeta::new(metadata_account, false),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new_readonly(token_program_for(asset_type), false),
        AccountMeta::new_readonly(spl_associated_token_account::id(), false),
        AccountMeta::new_readonly(sysvar::rent::id(), false),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LAUNCHPAD_PROGRAM_ID, SPL_TOKEN_PROGRAM_ID};

    fn test_participants() -> LaunchParticipants {
        LaunchParticipants {
            payer: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            token_account: Pubkey::new_unique(),
        }
    }

    #[test]
    fn test_account_order_and_flags() {
        let participants = test_participants();

        for asset_type in [
            AssetType::SplTokenLegacy,
            AssetType::SplToken2022,
            AssetType::StandardNft,
        ] {
            let accounts =
                resolve_launch_accounts(asset_type, &participants, &LAUNCHPAD_PROGRAM_ID).unwrap();

            assert_eq!(accounts.len(), 8);

            assert_eq!(accounts[0].pubkey, participants.payer);
            assert_eq!(accounts[1].pubkey, participants.mint);
            assert_eq!(accounts[2].pubkey, participants.token_account);
            for account in &accounts[..3] {
                assert!(account.is_signer);
                assert!(account.is_writable);
            }

            assert!(!accounts[3].is_signer);
            assert!(accounts[3].is_writable);

            for account in &accounts[4..] {
                assert!(!account.is_signer);
                assert!(!account.is_writable);
            }

            assert_eq!(accounts[4].pubkey, system_program::id());
            assert_eq!(accounts[5].pubkey, token_program_for(asset_type));
            assert_eq!(accounts[6].pubkey, spl_associated_token_account::id());
            assert_eq!(accounts[7].pubkey, sysvar::rent::id());
        }
    }

    #[test]
    fn test_metadata_account_is_derived_from_mint() {
        let participants = test_participants();
        let accounts = resolve_launch_accounts(
            AssetType::StandardNft,
            &participants,
            &LAUNCHPAD_PROGRAM_ID,
        )
        .unwrap();

        let expected = Pubkey::find_program_address(
            &[b"launched_asset", participants.mint.as_ref()],
            &LAUNCHPAD_PROGRAM_ID,
        )
        .0;
        assert_eq!(accounts[3].pubkey, expected);
    }

    #[test]
    fn test_token_program_selection() {
        assert_eq!(
            token_program_for(AssetType::SplTokenLegacy),
            SPL_TOKEN_PROGRAM_ID
        );
        assert_eq!(
            token_program_for(AssetType::SplToken2022),
            SPL_TOKEN_2022_PROGRAM_ID
        );
        assert_eq!(
            token_program_for(AssetType::StandardNft),
            SPL_TOKEN_2022_PROGRAM_ID
        );
    }
}
