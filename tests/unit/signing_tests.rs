// Signature generation tests

use rstest::rstest;
use thumbor_url::{sign, verify_signature};

#[rstest]
#[case(b"Jefe".as_slice(), "what do ya want for nothing?", "7_zfauXrL6LSdBbV8YTfnCWafHk=")]
#[case(b"k".as_slice(), "300x200/img.jpg", "51oXH2o2LY7iGeS0Wy-X2U7ijjI=")]
#[case(b"k".as_slice(), "1x1/img.jpg", "b0A6-BKBEN_0fjPSHd2VwoNqc0Y=")]
#[case(b"secret".as_slice(), "0x0/photo.png", "0o9EfRcTxlhI4L42MNW2xwlX17I=")]
fn test_known_signatures(#[case] key: &[u8], #[case] data: &str, #[case] expected: &str) {
    assert_eq!(sign(key, data).unwrap(), expected);
}

#[test]
fn test_empty_key_still_signs() {
    let sig = sign(b"", "0x0/img.jpg").unwrap();
    assert_eq!(sig.len(), 28);
    assert!(verify_signature(&sig, b"", "0x0/img.jpg"));
}

#[test]
fn test_tampered_path_fails_verification() {
    let sig = sign(b"k", "300x200/img.jpg").unwrap();
    assert!(!verify_signature(&sig, b"k", "3000x2000/img.jpg"));
}
