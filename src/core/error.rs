use thiserror::Error;

use super::types::FieldTag;

/// Errors that can occur while building, encoding or rendering a QR payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FatooraError {
    /// The seller's VAT registration number is not exactly 15 characters.
    #[error("VAT registration number must contain exactly 15 characters, got {chars}")]
    InvalidVatId { chars: usize },

    /// A field value does not fit the single length byte of a TLV record.
    #[error("{field} is {bytes} bytes long, TLV values must be shorter than 256 bytes")]
    ValueTooLong { field: FieldTag, bytes: usize },

    /// The transport encoder was handed zero bytes.
    #[error("cannot encode an empty TLV payload")]
    EmptyPayload,

    /// The QR renderer could not produce an image for the encoded text.
    #[error("could not render QR code image")]
    NoRenderableImage,

    /// Builder encountered missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// A rendered image could not be written out.
    #[error("render error: {0}")]
    Render(String),
}

/// A single validation finding for one of the five QR fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The offending field.
    pub field: FieldTag,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: FieldTag, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
