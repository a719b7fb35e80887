#![cfg(feature = "std")]

use std::fs;

use zenppm::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_ppm(dir: &std::path::Path, name: &str, header: &str, samples: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut data = header.as_bytes().to_vec();
    data.extend_from_slice(samples);
    fs::write(&path, data).unwrap();
    path
}

#[test]
fn load_transform_save() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let src = write_ppm(
        dir.path(),
        "in.ppm",
        "P6\n# from a scanner\n2 1\n255\n",
        &[10, 20, 30, 200, 210, 220],
    );
    let dst = dir.path().join("out.ppm");

    let mut image = load(&src).unwrap();
    apply(&mut image, "negate", None).unwrap();
    save(&dst, &image).unwrap();

    let mut expected = b"P6\n2 1\n255\n".to_vec();
    expected.extend_from_slice(&[245, 235, 225, 55, 45, 35]);
    assert_eq!(fs::read(&dst).unwrap(), expected);
}

#[test]
fn save_of_load_is_identity_for_canonical_files() {
    let dir = tempfile::tempdir().unwrap();
    let samples: Vec<u8> = (0..=255u8).cycle().take(5 * 7 * 3).collect();
    let src = write_ppm(dir.path(), "a.ppm", "P6\n5 7\n255\n", &samples);
    let dst = dir.path().join("b.ppm");

    save(&dst, &load(&src).unwrap()).unwrap();
    assert_eq!(fs::read(&src).unwrap(), fs::read(&dst).unwrap());
}

#[test]
fn missing_source_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path().join("nope.ppm")).unwrap_err();
    assert!(matches!(err, PpmError::Io(_)), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn truncated_file_fails_load() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_ppm(dir.path(), "short.ppm", "P6\n2 2\n255\n", &[0u8; 8]);
    let err = load(&src).unwrap_err();
    assert!(matches!(err, PpmError::TruncatedData { needed: 12, actual: 8 }));
}

#[test]
fn load_with_limits_rejects_large() {
    let dir = tempfile::tempdir().unwrap();
    let src = write_ppm(dir.path(), "big.ppm", "P6\n4 4\n255\n", &[0u8; 48]);
    let limits = Limits::default().with_max_pixels(8);
    assert!(matches!(
        load_with_limits(&src, &limits),
        Err(PpmError::LimitExceeded(_))
    ));
    assert!(load(&src).is_ok());
}

#[test]
fn failed_save_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let image = PixelBuffer::new(1, 1, 255, vec![1, 2, 3]).unwrap();
    let dst = dir.path().join("missing-dir").join("out.ppm");
    let err = save(&dst, &image).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(!dst.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn save_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let dst = dir.path().join("out.ppm");
    fs::write(&dst, b"old contents").unwrap();

    let image = PixelBuffer::new(1, 1, 9, vec![9, 0, 4]).unwrap();
    save(&dst, &image).unwrap();
    assert_eq!(fs::read(&dst).unwrap(), b"P6\n1 1\n9\n\x09\x00\x04");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn reader_and_writer() {
    let image = PixelBuffer::new(1, 2, 255, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let mut out = Vec::new();
    write_to(&mut out, &image).unwrap();
    assert_eq!(out, encode(&image, Unstoppable).unwrap());
    assert_eq!(read_from(&out[..]).unwrap(), image);
}
