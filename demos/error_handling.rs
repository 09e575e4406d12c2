use fatoora::core::*;

fn main() {
    // ── 1. Fail-fast build: the first violation wins ──────────────────
    println!("=== build_tlv() ===");
    let long_name = "A".repeat(300);
    match build_tlv(&long_name, "30000000000000", "2022-01-01T12:00:00Z", "115.00", "15.00") {
        Ok(_) => println!("  Built (unexpected)"),
        Err(e) => println!("  Build failed: {}", e),
    }

    // ── 2. Full report: every violation ───────────────────────────────
    println!("\n=== validate_qr_fields() ===");
    let fields = QrFields::new(long_name, "30000000000000", "2022-01-01T12:00:00Z", "115.00", "15.00");
    let errors = validate_qr_fields(&fields);
    println!("  Found {} validation errors:", errors.len());
    for e in &errors {
        println!("  - {}", e);
    }

    // ── 3. Renderer failure is an error, not a placeholder ────────────
    println!("\n=== generate() with a failing renderer ===");
    let unavailable = |_: &str| None::<Vec<u8>>;
    match generate(&unavailable, "Test Co", "300000000000003", "2022-01-01T12:00:00Z", "115.00", "15.00") {
        Ok(_) => println!("  Rendered (unexpected)"),
        Err(e) => println!("  Generate failed: {}", e),
    }
}
