//! Wire codec for [`LaunchConfig`].
//!
//! The launchpad program reads instruction data as a fixed field order:
//! strings carry a u32 little-endian byte-length prefix, integers are
//! little-endian at fixed width, the creator is 32 raw bytes and booleans
//! are a single 0/1 byte. The codec performs no business validation; limits
//! like name length are enforced on-chain (see [`crate::check`] for an
//! optional client-side preflight).

use solana_program::pubkey::Pubkey;

use crate::constants::{LAUNCH_ASSET_DISCRIMINATOR, PUBKEY_LENGTH};
use crate::data::{AssetType, LaunchConfig};

pub mod errors;
use errors::{DecodingError, EncodingError};

fn asset_type_tag(asset_type: AssetType) -> u8 {
    match asset_type {
        AssetType::SplTokenLegacy => 0,
        AssetType::SplToken2022 => 1,
        AssetType::StandardNft => 2,
    }
}

fn asset_type_from_tag(tag: u8) -> Result<AssetType, DecodingError> {
    match tag {
        0 => Ok(AssetType::SplTokenLegacy),
        1 => Ok(AssetType::SplToken2022),
        2 => Ok(AssetType::StandardNft),
        _ => Err(DecodingError::InvalidAssetType(tag)),
    }
}

fn put_str(buf: &mut Vec<u8>, s: &str) -> Result<(), EncodingError> {
    let len = u32::try_from(s.len()).map_err(|_| EncodingError::StringTooLong(s.len()))?;
    buf.extend_from_slice(&len.to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
    Ok(())
}

/// Number of bytes [`encode_launch_config`] will produce for `config`.
pub fn encoded_len(config: &LaunchConfig) -> usize {
    1 + 4
        + config.name.len()
        + 4
        + config.symbol.len()
        + 1
        + 8
        + 4
        + config.metadata_uri.len()
        + PUBKEY_LENGTH
        + 1
}

/// Serialize a launch configuration into the byte layout the program
/// expects. Deterministic: equal configs always produce equal bytes.
pub fn encode_launch_config(config: &LaunchConfig) -> Result<Vec<u8>, EncodingError> {
    let mut buf = Vec::with_capacity(encoded_len(config));

    buf.push(asset_type_tag(config.asset_type));
    put_str(&mut buf, &config.name)?;
    put_str(&mut buf, &config.symbol)?;
    buf.push(config.decimals);
    buf.extend_from_slice(&config.total_supply.to_le_bytes());
    put_str(&mut buf, &config.metadata_uri)?;
    buf.extend_from_slice(config.creator.as_ref());
    buf.push(config.is_mutable as u8);

    Ok(buf)
}

/// Structural inverse of [`encode_launch_config`]. Trailing bytes after the
/// final field are ignored.
pub fn decode_launch_config(bytes: &[u8]) -> Result<LaunchConfig, DecodingError> {
    let mut reader = Reader::new(bytes);

    let asset_type = asset_type_from_tag(reader.read_u8()?)?;
    let name = reader.read_str()?;
    let symbol = reader.read_str()?;
    let decimals = reader.read_u8()?;
    let total_supply = reader.read_u64()?;
    let metadata_uri = reader.read_str()?;
    let creator = reader.read_pubkey()?;
    let is_mutable = match reader.read_u8()? {
        0 => false,
        1 => true,
        b => return Err(DecodingError::InvalidBoolean(b)),
    };

    Ok(LaunchConfig {
        asset_type,
        name,
        symbol,
        decimals,
        total_supply,
        metadata_uri,
        creator,
        is_mutable,
    })
}

/// Full instruction data for LaunchAsset: the discriminator byte followed
/// by the encoded configuration.
pub fn launch_asset_instruction_data(config: &LaunchConfig) -> Result<Vec<u8>, EncodingError> {
    let mut data = Vec::with_capacity(1 + encoded_len(config));
    data.push(LAUNCH_ASSET_DISCRIMINATOR);
    data.extend_from_slice(&encode_launch_config(config)?);
    Ok(data)
}

/// Inverse of [`launch_asset_instruction_data`]: validates the
/// discriminator and decodes the configuration that follows it.
pub fn decode_launch_asset_instruction_data(
    data: &[u8],
) -> Result<LaunchConfig, DecodingError> {
    match data.first() {
        None => Err(DecodingError::TruncatedData {
            needed: 1,
            remaining: 0,
        }),
        Some(&LAUNCH_ASSET_DISCRIMINATOR) => decode_launch_config(&data[1..]),
        Some(&b) => Err(DecodingError::UnknownDiscriminator(b)),
    }
}

/// Bounds-checked reader over the wire bytes. Every access goes through
/// `take` so a truncated buffer surfaces as an error, never a panic or an
/// out-of-bounds read.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodingError> {
        if len > self.remaining() {
            return Err(DecodingError::TruncatedData {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn read_u8(&mut self) -> Result<u8, DecodingError> {
        Ok(self.take(1)?[0])
    }

    fn read_u32(&mut self) -> Result<u32, DecodingError> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes(bytes.try_into().unwrap()))
    }

    fn read_u64(&mut self) -> Result<u64, DecodingError> {
        let bytes = self.take(8)?;
        Ok(u64::from_le_bytes(bytes.try_into().unwrap()))
    }

    fn read_str(&mut self) -> Result<String, DecodingError> {
        let declared = self.read_u32()?;
        if declared as usize > self.remaining() {
            return Err(DecodingError::LengthOutOfBounds {
                declared,
                remaining: self.remaining(),
            });
        }
        let bytes = self.take(declared as usize)?;
        Ok(std::str::from_utf8(bytes)?.to_string())
    }

    fn read_pubkey(&mut self) -> Result<Pubkey, DecodingError> {
        let bytes = self.take(PUBKEY_LENGTH)?;
        Ok(Pubkey::new(bytes))
    }
}
