use super::encoding::encode_base64;
use super::error::FatooraError;
use super::types::{EncodedString, QrFields};

/// Turns encoded text into a scannable image.
///
/// Returning `None` means no image could be produced; callers of
/// [`generate`] see that as [`FatooraError::NoRenderableImage`].
/// Any `Fn(&str) -> Option<I>` closure is a renderer.
pub trait QrRenderer {
    type Image;

    fn render(&self, text: &str) -> Option<Self::Image>;
}

impl<F, I> QrRenderer for F
where
    F: Fn(&str) -> Option<I>,
{
    type Image = I;

    fn render(&self, text: &str) -> Option<I> {
        self(text)
    }
}

/// The Base64 payload together with its rendered image.
#[derive(Debug, Clone)]
pub struct GeneratedQr<I> {
    /// Base64 text that the image encodes.
    pub encoded: EncodedString,
    /// Image produced by the renderer.
    pub image: I,
}

/// Build, encode and render the QR code for one invoice.
///
/// The first failure is returned unchanged. A renderer that produces nothing
/// yields [`FatooraError::NoRenderableImage`]; no placeholder is substituted.
pub fn generate<R: QrRenderer>(
    renderer: &R,
    seller_name: &str,
    vat_number: &str,
    timestamp: &str,
    total_with_vat: &str,
    vat_total: &str,
) -> Result<GeneratedQr<R::Image>, FatooraError> {
    let fields = QrFields::new(seller_name, vat_number, timestamp, total_with_vat, vat_total);
    generate_from_fields(renderer, &fields)
}

/// Same as [`generate`], taking the fields as one value.
pub fn generate_from_fields<R: QrRenderer>(
    renderer: &R,
    fields: &QrFields,
) -> Result<GeneratedQr<R::Image>, FatooraError> {
    let payload = fields.to_tlv()?;
    let encoded = encode_base64(&payload)?;

    let Some(image) = renderer.render(encoded.as_str()) else {
        log::warn!(
            "QR renderer returned no image for {} chars of payload",
            encoded.as_str().len()
        );
        return Err(FatooraError::NoRenderableImage);
    };

    log::debug!(
        "rendered QR code for {} chars of payload",
        encoded.as_str().len()
    );
    Ok(GeneratedQr { encoded, image })
}
