//! Password digests
//!
//! The server never receives cleartext passwords: login and register take a
//! SHA-256 digest, lowercase hex encoded. Callers hash with [`sha256_hex`] (or
//! [`HashedPassword::from_plaintext`]) before calling the API; request
//! construction itself never hashes.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::shared::error::ClientError;

/// SHA-256 of `text`, lowercase hex
pub fn sha256_hex(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// A password already reduced to its SHA-256 hex digest.
///
/// Only two constructors exist: hashing a plaintext, or validating an existing
/// 64 character hex digest. A `HashedPassword` therefore never holds a
/// cleartext password.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Hash a plaintext password
    pub fn from_plaintext(password: &str) -> Self {
        Self(sha256_hex(password))
    }

    /// Accept an existing digest; uppercase hex is normalized to lowercase
    pub fn from_hex(digest: &str) -> Result<Self, ClientError> {
        let digest = digest.trim();
        if digest.len() != 64 || !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ClientError::InvalidPassword);
        }
        Ok(Self(digest.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword(..)")
    }
}
