use unicode_segmentation::UnicodeSegmentation;

use super::error::{FatooraError, ValidationError};
use super::types::*;

/// User-perceived characters (extended grapheme clusters) in the VAT number.
fn vat_char_count(vat_number: &str) -> usize {
    vat_number.graphemes(true).count()
}

/// Fail-fast validation used by the TLV builder.
///
/// The VAT number shape is checked first, then the byte length of every
/// field in tag order. The first violation is returned.
pub(crate) fn check_fields(fields: &QrFields) -> Result<(), FatooraError> {
    let chars = vat_char_count(&fields.vat_number);
    if chars != VAT_NUMBER_CHARS {
        return Err(FatooraError::InvalidVatId { chars });
    }

    if let Some((field, value)) = fields.iter().find(|(_, v)| v.len() > MAX_VALUE_BYTES) {
        return Err(FatooraError::ValueTooLong {
            field,
            bytes: value.len(),
        });
    }

    Ok(())
}

/// Validate the QR fields and report every problem found (not just the first).
///
/// An empty result means [`build_tlv`](super::build_tlv) will succeed for
/// the same fields.
pub fn validate_qr_fields(fields: &QrFields) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let chars = vat_char_count(&fields.vat_number);
    if chars != VAT_NUMBER_CHARS {
        errors.push(ValidationError::new(
            FieldTag::VatNumber,
            format!("must contain exactly {VAT_NUMBER_CHARS} characters, got {chars}"),
        ));
    }

    for (tag, value) in fields.iter() {
        if value.len() > MAX_VALUE_BYTES {
            errors.push(ValidationError::new(
                tag,
                format!(
                    "{} bytes exceeds the TLV limit of {MAX_VALUE_BYTES} bytes",
                    value.len()
                ),
            ));
        }
    }

    errors
}
