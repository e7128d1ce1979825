use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodingError {
    #[error("string field of {0} bytes does not fit a u32 length prefix")]
    StringTooLong(usize),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodingError {
    #[error("unexpected end of data: needed {needed} more bytes, {remaining} remain")]
    TruncatedData { needed: usize, remaining: usize },

    #[error("declared length {declared} exceeds {remaining} remaining bytes")]
    LengthOutOfBounds { declared: u32, remaining: usize },

    #[error("unknown asset type tag: {0}")]
    InvalidAssetType(u8),

    #[error("invalid boolean byte: {0}")]
    InvalidBoolean(u8),

    #[error("string field is not valid utf-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("unknown instruction discriminator: {0}")]
    UnknownDiscriminator(u8),
}
