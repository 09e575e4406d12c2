use chrono::{TimeZone, Utc};
use fatoora::core::*;
use rust_decimal_macros::dec;

fn main() {
    // Phase 1 QR payload for a simplified tax invoice
    let fields = QrBuilder::new("Test Co", "300000000000003")
        .issued_at(Utc.with_ymd_and_hms(2022, 1, 1, 12, 0, 0).unwrap())
        .total_with_vat_amount(dec!(115))
        .vat_total_amount(dec!(15))
        .fields()
        .unwrap();

    let payload = fields.to_tlv().unwrap();
    println!("TLV payload: {} bytes", payload.len());
    for chunk in payload.as_bytes().chunks(16) {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
        println!("  {}", hex.join(" "));
    }

    let encoded = encode_base64(&payload).unwrap();
    println!("\nBase64 (embed this in the QR code):\n  {encoded}");
}
