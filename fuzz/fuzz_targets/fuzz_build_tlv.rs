#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split arbitrary input into five fields on NUL bytes. Must not panic,
    // and every successful payload must carry the five records back to back
    // and encode without hitting the empty-payload guard.
    let text = String::from_utf8_lossy(data);
    let mut parts = text.split('\0');
    let mut next = || parts.next().unwrap_or("").to_string();
    let fields = fatoora::QrFields::new(next(), next(), next(), next(), next());

    if let Ok(payload) = fields.to_tlv() {
        let expected = 10 + fields.iter().map(|(_, v)| v.len()).sum::<usize>();
        assert_eq!(payload.len(), expected);
        assert!(fatoora::encode_base64(&payload).is_ok());
    }
});
