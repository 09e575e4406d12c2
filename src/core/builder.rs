use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::FatooraError;
use super::types::*;
use super::validation;

/// Timestamp layout written by [`QrBuilder::issued_at`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Build the TLV payload for the five QR fields.
///
/// Fails with [`FatooraError::InvalidVatId`] unless `vat_number` has exactly
/// 15 characters, then with [`FatooraError::ValueTooLong`] if any value is
/// 256 UTF-8 bytes or longer.
///
/// ```
/// let payload = fatoora::build_tlv(
///     "Test Co",
///     "300000000000003",
///     "2022-01-01T12:00:00Z",
///     "115.00",
///     "15.00",
/// )
/// .unwrap();
/// assert_eq!(&payload.as_bytes()[..2], &[b'1', 7]);
/// assert_eq!(payload.len(), 63);
/// ```
pub fn build_tlv(
    seller_name: &str,
    vat_number: &str,
    timestamp: &str,
    total_with_vat: &str,
    vat_total: &str,
) -> Result<TlvPayload, FatooraError> {
    QrFields::new(seller_name, vat_number, timestamp, total_with_vat, vat_total).to_tlv()
}

impl QrFields {
    /// Validate and serialize into a [`TlvPayload`].
    pub fn to_tlv(&self) -> Result<TlvPayload, FatooraError> {
        validation::check_fields(self)?;

        let records: Vec<TlvRecord<'_>> = self
            .iter()
            .map(|(tag, value)| TlvRecord { tag, value })
            .collect();
        let mut bytes = Vec::with_capacity(records.iter().map(TlvRecord::encoded_len).sum());
        for record in &records {
            record.write_to(&mut bytes);
        }

        log::debug!("built TLV payload of {} bytes", bytes.len());
        Ok(TlvPayload::from_bytes(bytes))
    }
}

/// Builder for QR fields from typed invoice data.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use fatoora::QrBuilder;
/// use rust_decimal::Decimal;
///
/// let payload = QrBuilder::new("Test Co", "300000000000003")
///     .issued_at(Utc.with_ymd_and_hms(2022, 1, 1, 12, 0, 0).unwrap())
///     .total_with_vat_amount(Decimal::new(115, 0))
///     .vat_total_amount(Decimal::new(15, 0))
///     .build()
///     .unwrap();
/// assert_eq!(payload.len(), 63);
/// ```
#[derive(Debug, Clone)]
pub struct QrBuilder {
    seller_name: String,
    vat_number: String,
    timestamp: Option<String>,
    total_with_vat: Option<String>,
    vat_total: Option<String>,
}

impl QrBuilder {
    pub fn new(seller_name: impl Into<String>, vat_number: impl Into<String>) -> Self {
        Self {
            seller_name: seller_name.into(),
            vat_number: vat_number.into(),
            timestamp: None,
            total_with_vat: None,
            vat_total: None,
        }
    }

    /// Set the invoice timestamp verbatim.
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Set the invoice timestamp from a UTC date-time (`2022-01-01T12:00:00Z`).
    pub fn issued_at(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at.format(TIMESTAMP_FORMAT).to_string());
        self
    }

    pub fn total_with_vat(mut self, total: impl Into<String>) -> Self {
        self.total_with_vat = Some(total.into());
        self
    }

    /// Set the invoice total with VAT, rendered with two decimal places.
    pub fn total_with_vat_amount(mut self, total: Decimal) -> Self {
        self.total_with_vat = Some(format_amount(total));
        self
    }

    pub fn vat_total(mut self, vat: impl Into<String>) -> Self {
        self.vat_total = Some(vat.into());
        self
    }

    /// Set the VAT total, rendered with two decimal places.
    pub fn vat_total_amount(mut self, vat: Decimal) -> Self {
        self.vat_total = Some(format_amount(vat));
        self
    }

    /// Collect the fields without validating them.
    pub fn fields(self) -> Result<QrFields, FatooraError> {
        let timestamp = self
            .timestamp
            .ok_or_else(|| FatooraError::Builder("timestamp is required".into()))?;
        let total_with_vat = self
            .total_with_vat
            .ok_or_else(|| FatooraError::Builder("total_with_vat is required".into()))?;
        let vat_total = self
            .vat_total
            .ok_or_else(|| FatooraError::Builder("vat_total is required".into()))?;

        Ok(QrFields {
            seller_name: self.seller_name,
            vat_number: self.vat_number,
            timestamp,
            total_with_vat,
            vat_total,
        })
    }

    /// Collect the fields and build the TLV payload.
    pub fn build(self) -> Result<TlvPayload, FatooraError> {
        self.fields()?.to_tlv()
    }
}

/// Two decimal places, half-up (commercial rounding).
fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn example_invoice_layout() {
        let p = build_tlv(
            "Test Co",
            "300000000000003",
            "2022-01-01T12:00:00Z",
            "115.00",
            "15.00",
        )
        .unwrap();
        let b = p.as_bytes();
        assert_eq!(b.len(), 63);
        assert_eq!(&b[..9], b"1\x07Test Co");
        assert_eq!(&b[9..26], b"2\x0f300000000000003");
        assert_eq!(&b[26..48], b"3\x142022-01-01T12:00:00Z");
        assert_eq!(&b[48..56], b"4\x06115.00");
        assert_eq!(&b[56..], b"5\x0515.00");
    }

    #[test]
    fn empty_values_still_get_records() {
        let p = build_tlv("", "300000000000003", "", "", "").unwrap();
        assert_eq!(p.len(), 10 + 15);
        assert_eq!(&p.as_bytes()[..2], &[b'1', 0]);
        assert_eq!(&p.as_bytes()[19..], &[b'3', 0, b'4', 0, b'5', 0]);
    }

    #[test]
    fn length_byte_counts_utf8_bytes() {
        let seller = "شركة";
        let p = build_tlv(seller, "300000000000003", "t", "1", "1").unwrap();
        assert_eq!(p.as_bytes()[1] as usize, seller.len());
        assert_eq!(&p.as_bytes()[2..2 + seller.len()], seller.as_bytes());
    }

    #[test]
    fn value_of_255_bytes_encodes_as_0xff() {
        let seller = "a".repeat(255);
        let p = build_tlv(&seller, "300000000000003", "t", "1", "1").unwrap();
        assert_eq!(p.as_bytes()[1], 0xFF);
    }

    #[test]
    fn builder_formats_typed_values() {
        let fields = QrBuilder::new("Test Co", "300000000000003")
            .issued_at(Utc.with_ymd_and_hms(2022, 1, 1, 12, 0, 0).unwrap())
            .total_with_vat_amount(dec!(115))
            .vat_total_amount(dec!(14.995))
            .fields()
            .unwrap();
        assert_eq!(fields.timestamp, "2022-01-01T12:00:00Z");
        assert_eq!(fields.total_with_vat, "115.00");
        assert_eq!(fields.vat_total, "15.00");
    }

    #[test]
    fn builder_requires_all_fields() {
        let err = QrBuilder::new("Test Co", "300000000000003")
            .timestamp("2022-01-01T12:00:00Z")
            .vat_total("15.00")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FatooraError::Builder("total_with_vat is required".into())
        );
    }

    #[test]
    fn builder_matches_free_function() {
        let a = QrBuilder::new("Test Co", "300000000000003")
            .timestamp("2022-01-01T12:00:00Z")
            .total_with_vat("115.00")
            .vat_total("15.00")
            .build()
            .unwrap();
        let b = build_tlv(
            "Test Co",
            "300000000000003",
            "2022-01-01T12:00:00Z",
            "115.00",
            "15.00",
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
