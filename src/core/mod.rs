//! Core QR payload types, TLV encoding and Base64 framing.
//!
//! This module turns the five phase 1 invoice fields into the byte-exact
//! TLV sequence scanners expect, frames it as Base64, and hands the text
//! to a [`QrRenderer`].

mod builder;
mod encoding;
mod error;
mod generate;
mod types;
mod validation;

pub use builder::*;
pub use encoding::*;
pub use error::*;
pub use generate::*;
pub use types::*;
pub use validation::validate_qr_fields;
