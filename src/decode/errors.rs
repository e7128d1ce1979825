use solana_client::client_error::ClientErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("failed to get account data")]
    ClientError(ClientErrorKind),

    #[error("failed to parse string into Pubkey")]
    PubkeyParseFailed(String),

    #[error("failed to derive launched-asset address: {0}")]
    DerivationFailed(String),

    #[error("failed to deserialize account data: {0}")]
    DeserializationFailed(String),
}
