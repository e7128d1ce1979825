//! Client-side preflight against the program's published limits, so a
//! caller can reject a doomed config before paying fees. The codec never
//! calls this; the program remains the authority on validation.

use thiserror::Error;

use crate::constants::{MAX_DECIMALS, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH};
use crate::data::LaunchConfig;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckError {
    #[error("name of {len} bytes exceeds the {max}-byte limit")]
    NameTooLong { len: usize, max: usize },

    #[error("symbol of {len} bytes exceeds the {max}-byte limit")]
    SymbolTooLong { len: usize, max: usize },

    #[error("metadata uri of {len} bytes exceeds the {max}-byte limit")]
    UriTooLong { len: usize, max: usize },

    #[error("decimals {0} exceeds the maximum of 9")]
    DecimalsTooHigh(u8),
}

pub fn check_launch_config(config: &LaunchConfig) -> Result<(), CheckError> {
    if config.name.len() > MAX_NAME_LENGTH {
        return Err(CheckError::NameTooLong {
            len: config.name.len(),
            max: MAX_NAME_LENGTH,
        });
    }

    if config.symbol.len() > MAX_SYMBOL_LENGTH {
        return Err(CheckError::SymbolTooLong {
            len: config.symbol.len(),
            max: MAX_SYMBOL_LENGTH,
        });
    }

    if config.metadata_uri.len() > MAX_URI_LENGTH {
        return Err(CheckError::UriTooLong {
            len: config.metadata_uri.len(),
            max: MAX_URI_LENGTH,
        });
    }

    if config.decimals > MAX_DECIMALS {
        return Err(CheckError::DecimalsTooHigh(config.decimals));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    fn valid_config() -> LaunchConfig {
        LaunchConfig::new_spl_token_legacy(
            "TestToken".to_string(),
            "TTK".to_string(),
            6,
            1_000_000_000,
            "https://example.com/metadata.json".to_string(),
            Pubkey::new_unique(),
        )
    }

    #[test]
    fn test_valid_config_passes() {
        assert_eq!(check_launch_config(&valid_config()), Ok(()));
    }

    #[test]
    fn test_limits_are_enforced() {
        let mut config = valid_config();
        config.name = "N".repeat(MAX_NAME_LENGTH + 1);
        assert!(matches!(
            check_launch_config(&config),
            Err(CheckError::NameTooLong { .. })
        ));

        let mut config = valid_config();
        config.symbol = "S".repeat(MAX_SYMBOL_LENGTH + 1);
        assert!(matches!(
            check_launch_config(&config),
            Err(CheckError::SymbolTooLong { .. })
        ));

        let mut config = valid_config();
        config.metadata_uri = "u".repeat(MAX_URI_LENGTH + 1);
        assert!(matches!(
            check_launch_config(&config),
            Err(CheckError::UriTooLong { .. })
        ));

        let mut config = valid_config();
        config.decimals = MAX_DECIMALS + 1;
        assert_eq!(
            check_launch_config(&config),
            Err(CheckError::DecimalsTooHigh(10))
        );
    }

    #[test]
    fn test_oversized_config_still_encodes() {
        // Limits are advisory on the client; the codec stays a thin,
        // honest transport.
        let mut config = valid_config();
        config.symbol = "S".repeat(MAX_SYMBOL_LENGTH * 4);
        assert!(check_launch_config(&config).is_err());
        assert!(crate::codec::encode_launch_config(&config).is_ok());
    }
}
