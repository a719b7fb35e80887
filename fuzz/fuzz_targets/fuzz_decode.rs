#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and full decode must never panic
    let _ = zenppm::ImageInfo::from_bytes(data);
    let Ok(mut image) = zenppm::decode(data, enough::Unstoppable) else {
        return;
    };

    // Neither may any transform on whatever decoded
    let factor = f32::from(data.last().copied().unwrap_or(0)) / 64.0 - 1.0;
    for op in zenppm::Operation::ALL {
        if let Ok(t) = zenppm::Transform::new(op, Some(factor)) {
            t.apply(&mut image);
        }
    }
    assert!(image.samples().iter().all(|&s| s <= image.max_value()));
});
