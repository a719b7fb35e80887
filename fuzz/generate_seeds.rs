#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PPM 2x2
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/ppm_2x2.ppm"), ppm).unwrap();

    // Comments between every field, low max value
    let commented = b"P6 # seed\n1 # w\n2 # h\n15\n\x0f\x00\x07\x01\x02\x03";
    fs::write(format!("{dir}/ppm_commented.ppm"), commented).unwrap();

    // 3x1 odd pixel count, for rotate180's self-swap
    let odd = b"P6\n3 1\n255\n\x01\x02\x03\x04\x05\x06\x07\x08\x09";
    fs::write(format!("{dir}/ppm_3x1.ppm"), odd).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/p5.bin"), b"P5\n1 1\n255\n\x00").unwrap();
    fs::write(format!("{dir}/open_comment.bin"), b"P6\n1 1 # never ends").unwrap();
    fs::write(format!("{dir}/short_payload.bin"), b"P6\n2 2\n255\n\x00\x00\x00").unwrap();
    fs::write(format!("{dir}/maxval_256.bin"), b"P6\n1 1\n256\n\x00\x00\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
