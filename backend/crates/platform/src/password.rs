//! Admin Credential Digest and Verification
//!
//! The gateway has exactly one administrative credential, configured
//! out-of-band as the lowercase hex SHA-256 digest of the password.
//!
//! ## Security Notes
//! - Single hash pass: no salt, no iterations, no key stretching. This is
//!   only acceptable for one static admin credential and must not be reused
//!   as a multi-user password store (that needs per-user salt and a slow KDF).
//! - Digest comparison is constant-time with respect to the contents; a length
//!   mismatch fails immediately since length is not secret here.
//! - Clear text is zeroized on drop and never printed by `Debug`.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{constant_time_eq, hex_encode_lower, sha256};

/// Length of a SHA-256 digest rendered as hex
pub const DIGEST_HEX_LENGTH: usize = 64;

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`; debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a password exactly as submitted (no normalization, no policy)
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Compute the SHA-256 digest of the UTF-8 password
    pub fn digest(&self) -> PasswordDigest {
        PasswordDigest(hex_encode_lower(&sha256(self.as_bytes())))
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Password Digest
// ============================================================================

/// Hex-rendered SHA-256 password digest
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Wrap a stored digest as configured
    ///
    /// The value is kept verbatim: a malformed digest is accepted here and
    /// simply never verifies. Use [`PasswordDigest::is_well_formed`] to warn
    /// about it at start-up.
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Get the hex string
    pub fn as_hex(&self) -> &str {
        &self.0
    }

    /// True when the digest is 64 lowercase hex characters
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == DIGEST_HEX_LENGTH
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    /// Verify a password against this digest
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        let candidate = password.digest();
        constant_time_eq(candidate.0.as_bytes(), self.0.as_bytes())
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PasswordDigest").field(&"[HASH]").finish()
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// `hash(plaintext) -> digestHex`
pub fn hash_password(plaintext: &str) -> String {
    ClearTextPassword::new(plaintext.to_owned()).digest().0
}

/// `verify(plaintext, storedDigestHex) -> bool`
pub fn verify_password(plaintext: &str, stored_digest_hex: &str) -> bool {
    PasswordDigest::from_hex(stored_digest_hex)
        .verify(&ClearTextPassword::new(plaintext.to_owned()))
}

// ============================================================================
// Tests
// ============================================================================
