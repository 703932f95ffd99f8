//! Salted PBKDF2 password hashing and verification.
//!
//! Salts are short per-user random strings stored alongside the hash, and
//! hashes are the base64 encoding of a PBKDF2-HMAC-SHA256 derived key with
//! fixed parameters. Compatibility note: [`generate_salt`] base64-encodes
//! the random bytes first and then truncates the *encoded* string to the
//! requested length, so the effective entropy is lower than the length
//! suggests. Existing stored credentials use salts produced this way, so
//! the behavior is kept as-is rather than encoding exactly that many raw
//! bytes.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

/// Default salt length in characters.
pub const DEFAULT_SALT_LEN: usize = 5;

/// PBKDF2 iteration count.
const ITERATIONS: u32 = 10_000;

/// Derived key length in bytes (before base64 encoding).
const KEY_LEN: usize = 32;

/// Generate a random salt of exactly `len` characters.
///
/// Fills `len` bytes from the OS entropy source, base64-encodes them, and
/// truncates the encoded string to `len` characters (see the module note
/// on effective entropy).
pub fn generate_salt(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    let mut encoded = BASE64.encode(bytes);
    encoded.truncate(len);
    encoded
}

/// Derive the stored hash for a password and salt.
///
/// PBKDF2-HMAC-SHA256 with 10,000 iterations and a 32-byte derived key,
/// base64-encoded.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), ITERATIONS, &mut key);
    BASE64.encode(key)
}

/// Check an entered password against a stored hash and salt.
///
/// Recomputes the hash with the stored salt and compares. Any mismatch
/// yields `false`; this never fails with an error.
pub fn verify_password(entered: &str, stored_hash: &str, stored_salt: &str) -> bool {
    hash_password(entered, stored_salt) == stored_hash
}
