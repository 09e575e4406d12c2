#![cfg(feature = "qr")]

use fatoora::core::*;
use fatoora::qr::*;

fn fields() -> QrFields {
    QrFields::new(
        "شركة التوريدات التقنية",
        "310122393500003",
        "2022-04-25T15:30:00Z",
        "1000.00",
        "150.00",
    )
}

#[test]
fn default_renderer_produces_raster() {
    let renderer = QrCodeRenderer::default();
    let qr = generate_from_fields(&renderer, &fields()).unwrap();
    let img = qr.image.as_raster().expect("raster output");
    assert!(img.width() >= 210);
    assert_eq!(img.width(), img.height());
}

#[test]
fn svg_renderer() {
    let renderer = QrCodeRenderer::new(QrConfig {
        format: QrFormat::Svg,
        ec_level: EcLevel::H,
        ..QrConfig::default()
    });
    let qr = generate_from_fields(&renderer, &fields()).unwrap();
    let svg = qr.image.as_text().unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("#000000"));
}

#[test]
fn largest_payload_still_renders() {
    let max = "x".repeat(255);
    let renderer = QrCodeRenderer::new(QrConfig {
        ec_level: EcLevel::L,
        ..QrConfig::default()
    });
    let qr = generate(&renderer, &max, "300000000000003", &max, &max, &max).unwrap();
    assert_eq!(qr.encoded.as_str().len(), 1396);
}

#[test]
fn save_writes_png() {
    let renderer = QrCodeRenderer::new(QrConfig {
        module_size: 2,
        ..QrConfig::default()
    });
    let qr = generate_from_fields(&renderer, &fields()).unwrap();
    let path = std::env::temp_dir().join(format!("fatoora-qr-{}.png", std::process::id()));
    qr.image.save(&path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn save_to_missing_directory_fails() {
    let renderer = QrCodeRenderer::new(QrConfig {
        format: QrFormat::Text,
        ..QrConfig::default()
    });
    let qr = generate_from_fields(&renderer, &fields()).unwrap();
    let err = qr
        .image
        .save("/nonexistent-dir/fatoora/qr.txt")
        .unwrap_err();
    assert!(matches!(err, FatooraError::Render(_)));
}
