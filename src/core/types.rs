use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of characters a seller VAT registration number must have.
pub const VAT_NUMBER_CHARS: usize = 15;

/// Largest value (in UTF-8 bytes) a single TLV record can carry.
pub const MAX_VALUE_BYTES: usize = 255;

/// The five fields of a phase 1 invoice QR code, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTag {
    /// Tag 1: Seller name.
    Seller = 1,
    /// Tag 2: Seller VAT registration number.
    VatNumber = 2,
    /// Tag 3: Invoice timestamp (date and time).
    Timestamp = 3,
    /// Tag 4: Invoice total including VAT.
    TotalWithVat = 4,
    /// Tag 5: VAT total.
    VatTotal = 5,
}

impl FieldTag {
    /// All tags in the order they appear on the wire.
    pub const ALL: [FieldTag; 5] = [
        FieldTag::Seller,
        FieldTag::VatNumber,
        FieldTag::Timestamp,
        FieldTag::TotalWithVat,
        FieldTag::VatTotal,
    ];

    /// The tag number, 1 through 5.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// The byte written in the tag position of a TLV record.
    ///
    /// This is the ASCII digit of the tag number (`b'1'` for the seller),
    /// not the binary value. Existing verifiers expect the digit form.
    pub fn wire_byte(self) -> u8 {
        b'0' + self.number()
    }

    /// Stable field name used in errors and validation reports.
    pub fn name(self) -> &'static str {
        match self {
            FieldTag::Seller => "seller_name",
            FieldTag::VatNumber => "vat_number",
            FieldTag::Timestamp => "timestamp",
            FieldTag::TotalWithVat => "total_with_vat",
            FieldTag::VatTotal => "vat_total",
        }
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The five text values encoded into the QR payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrFields {
    /// Tag 1: Seller name.
    pub seller_name: String,
    /// Tag 2: Seller VAT registration number (15 characters).
    pub vat_number: String,
    /// Tag 3: Invoice timestamp, e.g. "2022-01-01T12:00:00Z".
    pub timestamp: String,
    /// Tag 4: Invoice total with VAT, e.g. "115.00".
    pub total_with_vat: String,
    /// Tag 5: VAT total, e.g. "15.00".
    pub vat_total: String,
}

impl QrFields {
    pub fn new(
        seller_name: impl Into<String>,
        vat_number: impl Into<String>,
        timestamp: impl Into<String>,
        total_with_vat: impl Into<String>,
        vat_total: impl Into<String>,
    ) -> Self {
        Self {
            seller_name: seller_name.into(),
            vat_number: vat_number.into(),
            timestamp: timestamp.into(),
            total_with_vat: total_with_vat.into(),
            vat_total: vat_total.into(),
        }
    }

    /// The value stored for `tag`.
    pub fn value(&self, tag: FieldTag) -> &str {
        match tag {
            FieldTag::Seller => &self.seller_name,
            FieldTag::VatNumber => &self.vat_number,
            FieldTag::Timestamp => &self.timestamp,
            FieldTag::TotalWithVat => &self.total_with_vat,
            FieldTag::VatTotal => &self.vat_total,
        }
    }

    /// `(tag, value)` pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldTag, &str)> + '_ {
        FieldTag::ALL.into_iter().map(move |tag| (tag, self.value(tag)))
    }
}

/// One tag-length-value record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvRecord<'a> {
    pub tag: FieldTag,
    pub value: &'a str,
}

impl TlvRecord<'_> {
    /// Value length in UTF-8 bytes, as written in the length position.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Bytes this record occupies on the wire (tag + length + value).
    pub fn encoded_len(&self) -> usize {
        2 + self.value.len()
    }

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        // Callers validate lengths before writing, so the cast never truncates.
        debug_assert!(self.value.len() <= MAX_VALUE_BYTES);
        out.push(self.tag.wire_byte());
        out.push(self.value.len() as u8);
        out.extend_from_slice(self.value.as_bytes());
    }
}

/// The raw TLV byte sequence: five records, tags 1 through 5, back to back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TlvPayload {
    bytes: Vec<u8>,
}

impl TlvPayload {
    /// Wrap bytes produced elsewhere. No validation is performed.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for TlvPayload {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Base64 text form of a [`TlvPayload`], ready for a QR code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedString(String);

impl EncodedString {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EncodedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EncodedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
