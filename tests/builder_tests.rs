//! tests/builder_tests.rs
//! MessageCipherBuilder: defaults, iterations, layout

mod common;

use common::{TEST_CIPHERTEXT, TEST_IDENTIFIER, TEST_PASSWORD, TEST_PLAINTEXT};
use secure_storage_rs::consts::{KEY_ITERATION_COUNT, PBKDF2_MAX_ITER, PBKDF2_MIN_ITER};
use secure_storage_rs::{decrypt_message, encrypt_message, Base64Layout, MessageCipherBuilder};

#[test]
fn defaults_match_free_functions() {
    let builder = MessageCipherBuilder::default();
    assert_eq!(builder, MessageCipherBuilder::new());
    assert_eq!(builder.iterations(), KEY_ITERATION_COUNT);
    assert_eq!(builder.layout(), Base64Layout::Standard);

    let encrypted = builder
        .encrypt(TEST_IDENTIFIER, TEST_PLAINTEXT, TEST_PASSWORD)
        .unwrap();
    assert_eq!(encrypted, TEST_CIPHERTEXT);
    assert_eq!(
        builder
            .decrypt(TEST_IDENTIFIER, TEST_CIPHERTEXT, TEST_PASSWORD)
            .unwrap(),
        TEST_PLAINTEXT
    );
}

#[test]
fn iterations_are_clamped() {
    let cases = vec![
        (0, PBKDF2_MIN_ITER),
        (1, 1),
        (10_000, 10_000),
        (u32::MAX, PBKDF2_MAX_ITER),
    ];

    for (requested, expected) in cases {
        let builder = MessageCipherBuilder::new().with_iterations(requested);
        assert_eq!(builder.iterations(), expected, "requested {requested}");
    }
}

#[test]
fn custom_iterations_are_not_interchangeable() {
    let builder = MessageCipherBuilder::new().with_iterations(1_000);

    let encrypted = builder
        .encrypt(TEST_IDENTIFIER, TEST_PLAINTEXT, TEST_PASSWORD)
        .unwrap();
    assert_ne!(encrypted, TEST_CIPHERTEXT);
    assert_eq!(
        builder
            .decrypt(TEST_IDENTIFIER, &encrypted, TEST_PASSWORD)
            .unwrap(),
        TEST_PLAINTEXT
    );

    assert!(decrypt_message(TEST_IDENTIFIER, &encrypted, TEST_PASSWORD).is_err());
}

#[test]
fn mime_layout_round_trips_through_default_decrypt() {
    let builder = MessageCipherBuilder::new().with_layout(Base64Layout::Mime);
    let plaintext = "a refresh token long enough to need more than one base64 line";

    let wrapped = builder
        .encrypt(TEST_IDENTIFIER, plaintext, TEST_PASSWORD)
        .unwrap();
    let single = encrypt_message(TEST_IDENTIFIER, plaintext, TEST_PASSWORD).unwrap();

    assert!(wrapped.ends_with('\n'));
    assert!(wrapped.trim_end().contains('\n'));
    assert_eq!(wrapped.replace('\n', ""), single);
    assert_eq!(
        decrypt_message(TEST_IDENTIFIER, &wrapped, TEST_PASSWORD).unwrap(),
        plaintext
    );
}
