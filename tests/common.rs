//! tests/common.rs
//! Common constants shared across test files

/// 16 ASCII bytes: the shortest valid identifier
#[allow(dead_code)] // Used across multiple test files
pub const TEST_IDENTIFIER: &str = "0123456789ABCDEF";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "correct-password";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_PLAINTEXT: &str = "secret-value";

/// Base64 of AES-256-CBC(PBKDF2-HMAC-SHA1) for the three constants above
#[allow(dead_code)] // Used across multiple test files
pub const TEST_CIPHERTEXT: &str = "RNyT56c1dIMWujZJ+1WwXA==";

/// PBKDF2-HMAC-SHA1(TEST_PASSWORD, TEST_IDENTIFIER, 100, 32) as hex
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KEY_HEX: &str = "68d37895844f56d81dd9eac989bf182310b4dc16107b9f29fb97d053e2e7758b";
