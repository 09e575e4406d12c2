use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::error::FatooraError;
use super::types::{EncodedString, QrFields, TlvPayload};

/// Frame a TLV payload as standard Base64 (`=` padded, no line breaks).
///
/// An empty payload is rejected with [`FatooraError::EmptyPayload`]; the
/// builder never produces one.
pub fn encode_base64(payload: &TlvPayload) -> Result<EncodedString, FatooraError> {
    if payload.is_empty() {
        return Err(FatooraError::EmptyPayload);
    }
    let text = STANDARD.encode(payload.as_bytes());
    log::debug!("encoded {} TLV bytes as {} Base64 chars", payload.len(), text.len());
    Ok(EncodedString::new(text))
}

/// Build and encode in one step, for callers that render the QR code elsewhere.
pub fn encode_fields(fields: &QrFields) -> Result<EncodedString, FatooraError> {
    encode_base64(&fields.to_tlv()?)
}
