use std::path::PathBuf;

use brandgen::{BANNER_HEIGHT, BANNER_WIDTH, LOGO_SIZE, Theme, generate};

#[test]
fn generate_writes_both_decodable_pngs() {
    let dir = PathBuf::from("target").join("generate_e2e");
    let _ = std::fs::remove_dir_all(&dir);

    let written = generate(&dir, &Theme::default()).unwrap();
    assert_eq!(written[0], dir.join("header.png"));
    assert_eq!(written[1], dir.join("logo.png"));

    let header = image::open(&written[0]).unwrap();
    assert_eq!(header.width(), BANNER_WIDTH);
    assert_eq!(header.height(), BANNER_HEIGHT);

    let logo = image::open(&written[1]).unwrap();
    assert_eq!(logo.width(), LOGO_SIZE);
    assert_eq!(logo.height(), LOGO_SIZE);

    let logo_rgba = logo.to_rgba8();
    assert_eq!(logo_rgba.get_pixel(0, 0).0[3], 0, "corner must stay transparent");
}

#[test]
fn second_run_is_byte_identical() {
    let dir = PathBuf::from("target").join("generate_determinism");
    let _ = std::fs::remove_dir_all(&dir);

    let theme = Theme::default();
    let first = generate(&dir, &theme).unwrap();
    let header_a = std::fs::read(&first[0]).unwrap();
    let logo_a = std::fs::read(&first[1]).unwrap();

    let second = generate(&dir, &theme).unwrap();
    assert_eq!(header_a, std::fs::read(&second[0]).unwrap());
    assert_eq!(logo_a, std::fs::read(&second[1]).unwrap());
}

#[test]
fn unwritable_output_dir_is_an_error() {
    // A path below an existing *file* cannot be created.
    let scratch = PathBuf::from("target").join("generate_unwritable");
    let _ = std::fs::remove_dir_all(&scratch);
    std::fs::create_dir_all(&scratch).unwrap();
    let blocker = scratch.join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let err = generate(&blocker.join("sub"), &Theme::default()).unwrap_err();
    assert!(matches!(err, brandgen::BrandError::Io(_)));
}
