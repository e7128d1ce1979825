use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

use crate::constants::LAUNCHED_ASSET_SEED;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DerivationError {
    #[error("no valid program address for mint {0}")]
    NoValidAddress(Pubkey),
}

/// Address of the launched-asset record for `mint`. The bump is discarded;
/// the client never signs for this account.
pub fn derive_launched_asset_pda(
    mint: &Pubkey,
    program_id: &Pubkey,
) -> Result<Pubkey, DerivationError> {
    derive_launched_asset_pda_with_bump(mint, program_id).map(|(pda, _)| pda)
}

pub fn derive_launched_asset_pda_with_bump(
    mint: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), DerivationError> {
    Pubkey::try_find_program_address(&[LAUNCHED_ASSET_SEED.as_bytes(), mint.as_ref()], program_id)
        .ok_or(DerivationError::NoValidAddress(*mint))
}
