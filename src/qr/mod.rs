//! QR code rendering for encoded invoice payloads.
//!
//! [`QrCodeRenderer`] plugs into [`generate`](crate::core::generate) and
//! produces a raster image, an SVG document, or terminal text.
//!
//! ```
//! use fatoora::qr::{QrCodeRenderer, QrConfig, QrImage};
//!
//! let renderer = QrCodeRenderer::new(QrConfig::default());
//! let qr = fatoora::generate(
//!     &renderer,
//!     "Test Co",
//!     "300000000000003",
//!     "2022-01-01T12:00:00Z",
//!     "115.00",
//!     "15.00",
//! )
//! .unwrap();
//! assert!(matches!(qr.image, QrImage::Raster(_)));
//! ```

mod renderer;

pub use qrcode::EcLevel;
pub use renderer::{QrCodeRenderer, QrConfig, QrFormat, QrImage};
