use anyhow::Result;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};

use crate::codec::launch_asset_instruction_data;
use crate::data::LaunchConfig;
use crate::derive::derive_launched_asset_pda;
use crate::resolve::{resolve_launch_accounts, LaunchParticipants};
use crate::transaction::send_and_confirm_tx_with_retries;

pub struct LaunchAssetArgs<'a> {
    pub payer: &'a Keypair,
    pub program_id: Pubkey,
    pub config: LaunchConfig,
}

pub struct LaunchResult {
    pub signature: Signature,
    pub mint: Pubkey,
    pub token_account: Pubkey,
    pub metadata_account: Pubkey,
}

/// Assemble the LaunchAsset instruction without touching the network:
/// encoded config plus the resolved account list under `program_id`.
pub fn launch_asset_instruction(
    config: &LaunchConfig,
    participants: &LaunchParticipants,
    program_id: &Pubkey,
) -> Result<Instruction> {
    let accounts = resolve_launch_accounts(config.asset_type, participants, program_id)?;
    let data = launch_asset_instruction_data(config)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts,
        data,
    })
}

/// Launch an asset: generates fresh mint and token-account keypairs,
/// builds the instruction and submits it signed by payer, mint and token
/// account.
pub fn launch_asset(client: &RpcClient, args: LaunchAssetArgs) -> Result<LaunchResult> {
    let mint = Keypair::new();
    let token_account = Keypair::new();

    let participants = LaunchParticipants {
        payer: args.payer.pubkey(),
        mint: mint.pubkey(),
        token_account: token_account.pubkey(),
    };

    let instruction = launch_asset_instruction(&args.config, &participants, &args.program_id)?;
    let metadata_account = derive_launched_asset_pda(&mint.pubkey(), &args.program_id)?;

    let signature = send_and_confirm_tx_with_retries(
        client,
        &[args.payer, &mint, &token_account],
        &[instruction],
    )?;

    Ok(LaunchResult {
        signature,
        mint: mint.pubkey(),
        token_account: token_account.pubkey(),
        metadata_account,
    })
}
