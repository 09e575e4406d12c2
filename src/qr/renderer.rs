use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

use crate::core::{FatooraError, QrRenderer};

/// Output format for rendered QR codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrFormat {
    /// Grayscale raster image (default)
    #[default]
    Raster,
    /// SVG vector image
    Svg,
    /// Block characters for terminal display
    Text,
}

/// Configuration for [`QrCodeRenderer`].
#[derive(Debug, Clone)]
pub struct QrConfig {
    /// Error correction level (default: Medium)
    pub ec_level: EcLevel,
    /// Module size in pixels (default: 10)
    pub module_size: u32,
    /// Surround the symbol with a quiet zone (default: true)
    pub quiet_zone: bool,
    /// Output format
    pub format: QrFormat,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::M,
            module_size: 10,
            quiet_zone: true,
            format: QrFormat::Raster,
        }
    }
}

/// A rendered QR code.
#[derive(Debug, Clone)]
pub enum QrImage {
    Raster(GrayImage),
    Svg(String),
    Text(String),
}

impl QrImage {
    /// Returns the raster image, if this is one.
    pub fn as_raster(&self) -> Option<&GrayImage> {
        match self {
            QrImage::Raster(img) => Some(img),
            _ => None,
        }
    }

    /// Returns the SVG or text content.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            QrImage::Svg(s) | QrImage::Text(s) => Some(s),
            QrImage::Raster(_) => None,
        }
    }

    /// Write the image to `path`: rasters as PNG, SVG and text verbatim.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), FatooraError> {
        let path = path.as_ref();
        match self {
            QrImage::Raster(img) => img
                .save_with_format(path, ImageFormat::Png)
                .map_err(|e| FatooraError::Render(format!("failed to save PNG: {e}"))),
            QrImage::Svg(s) | QrImage::Text(s) => std::fs::write(path, s).map_err(|e| {
                FatooraError::Render(format!("failed to write {}: {e}", path.display()))
            }),
        }
    }
}

/// Renders QR codes with the `qrcode` crate.
#[derive(Debug, Clone, Default)]
pub struct QrCodeRenderer {
    config: QrConfig,
}

impl QrCodeRenderer {
    pub fn new(config: QrConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QrConfig {
        &self.config
    }
}

impl QrRenderer for QrCodeRenderer {
    type Image = QrImage;

    fn render(&self, text: &str) -> Option<QrImage> {
        if text.is_empty() {
            return None;
        }

        let qr = match QrCode::with_error_correction_level(text, self.config.ec_level) {
            Ok(qr) => qr,
            Err(e) => {
                log::warn!("QR code generation failed: {e}");
                return None;
            }
        };

        let size = self.config.module_size.max(1);
        let image = match self.config.format {
            QrFormat::Raster => QrImage::Raster(
                qr.render::<Luma<u8>>()
                    .quiet_zone(self.config.quiet_zone)
                    .module_dimensions(size, size)
                    .build(),
            ),
            QrFormat::Svg => QrImage::Svg(
                qr.render::<svg::Color>()
                    .quiet_zone(self.config.quiet_zone)
                    .module_dimensions(size, size)
                    .dark_color(svg::Color("#000000"))
                    .light_color(svg::Color("#ffffff"))
                    .build(),
            ),
            QrFormat::Text => QrImage::Text(
                qr.render::<char>()
                    .quiet_zone(self.config.quiet_zone)
                    .module_dimensions(2, 1)
                    .build(),
            ),
        };
        Some(image)
    }
}
