//! # fatoora
//!
//! QR payloads for Saudi simplified tax invoices (ZATCA e-invoicing, phase 1).
//!
//! Five invoice fields are serialized as Tag-Length-Value records, framed as
//! Base64, and rendered as a QR code that scanners decode to verify the sale.
//! The byte layout is fixed: each record starts with the tag as an ASCII
//! digit (`'1'`..`'5'`), then a one-byte value length, then the raw UTF-8
//! value.
//!
//! ## Quick Start
//!
//! ```rust
//! use fatoora::*;
//!
//! let payload = build_tlv(
//!     "Test Co",
//!     "300000000000003",
//!     "2022-01-01T12:00:00Z",
//!     "115.00",
//!     "15.00",
//! )
//! .unwrap();
//! assert_eq!(payload.len(), 63);
//!
//! let text = encode_base64(&payload).unwrap();
//! assert!(text.as_str().starts_with("MQdUZXN0IENv"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Field types, validation, TLV builder, Base64 framing |
//! | `qr` | QR code rendering (raster, SVG, terminal text) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "qr")]
pub mod qr;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
