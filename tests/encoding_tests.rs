//! tests/encoding_tests.rs
//! Base64 text layer

use secure_storage_rs::encoding::{decode, encode, encode_with, Base64Layout};
use secure_storage_rs::SecureStorageError;

#[test]
fn standard_alphabet_with_padding() {
    let cases = vec![
        (b"" as &[u8], ""),
        (b"f" as &[u8], "Zg=="),
        (b"fo" as &[u8], "Zm8="),
        (b"foo" as &[u8], "Zm9v"),
        (&[0xfbu8, 0xff, 0xbf] as &[u8], "+/+/"),
    ];

    for (bytes, text) in cases {
        assert_eq!(encode(bytes), text);
        assert_eq!(encode_with(bytes, Base64Layout::Standard), text);
        assert_eq!(decode(text).unwrap(), bytes);
    }
}

#[test]
fn mime_layout_wraps_at_76_with_trailing_newline() {
    let bytes: Vec<u8> = (0..=255u8).collect();
    let wrapped = encode_with(&bytes, Base64Layout::Mime);

    assert!(wrapped.ends_with('\n'));
    let lines: Vec<&str> = wrapped.lines().collect();
    assert_eq!(lines.len(), 5); // 344 chars → 4 × 76 + 40
    assert!(lines[..4].iter().all(|l| l.len() == 76));
    assert_eq!(lines[4].len(), 40);
    assert_eq!(lines.concat(), encode(&bytes));

    assert_eq!(decode(&wrapped).unwrap(), bytes);
    assert_eq!(encode_with(b"", Base64Layout::Mime), "");
}

#[test]
fn malformed_input_is_an_encoding_error() {
    let cases = vec![
        ("!!!", "invalid characters"),
        ("Zg=", "short padding"),
        ("Zg", "missing padding"),
        ("Zm9v_w==", "url-safe alphabet"),
        ("Z", "dangling symbol"),
    ];

    for (text, desc) in cases {
        assert!(
            matches!(decode(text), Err(SecureStorageError::Encoding(_))),
            "{desc}: {text:?}"
        );
    }
}
