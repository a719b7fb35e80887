#![no_main]
use libfuzzer_sys::fuzz_target;
use zenppm::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = decode(data, enough::Unstoppable) else {
        return;
    };

    let Ok(reencoded) = encode(&decoded, enough::Unstoppable) else {
        panic!("decoded image failed to encode");
    };
    let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded, decoded2, "roundtrip mismatch");
    assert_eq!(encode(&decoded2, enough::Unstoppable).ok(), Some(reencoded));
});
