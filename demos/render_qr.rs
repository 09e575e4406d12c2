use fatoora::core::*;
use fatoora::qr::{QrCodeRenderer, QrConfig, QrFormat};

fn main() {
    env_logger::init();

    let fields = QrFields::new(
        "شركة التوريدات التقنية",
        "310122393500003",
        "2022-04-25T15:30:00Z",
        "1000.00",
        "150.00",
    );

    // ── 1. Terminal preview ───────────────────────────────────────────
    let text = QrCodeRenderer::new(QrConfig {
        format: QrFormat::Text,
        ..QrConfig::default()
    });
    match generate_from_fields(&text, &fields) {
        Ok(qr) => {
            println!("{}", qr.encoded);
            println!("{}", qr.image.as_text().unwrap_or_default());
        }
        Err(e) => println!("  Render failed: {}", e),
    }

    // ── 2. PNG on disk ────────────────────────────────────────────────
    let raster = QrCodeRenderer::default();
    let path = std::env::temp_dir().join("fatoora-invoice-qr.png");
    match generate_from_fields(&raster, &fields).and_then(|qr| qr.image.save(&path)) {
        Ok(()) => println!("Saved {}", path.display()),
        Err(e) => println!("  Render failed: {}", e),
    }
}
