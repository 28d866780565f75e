//! PASETO v2.local
//!
//! Symmetric authenticated tokens, as specified by
//! <https://github.com/paseto-standard/paseto-spec/blob/master/docs/01-Protocol-Versions/Version2.md>.
//!
//! Tokens are encrypted with XChaCha20-Poly1305 under a 32-byte symmetric
//! key, with an optional footer that is authenticated but not encrypted.
//!
//! ```
//! use paseto_v2_local::{EncryptedToken, LocalKey};
//!
//! // create a new symmetric key
//! let key = LocalKey::random().unwrap();
//!
//! // encrypt a message, with an authenticated but unencrypted footer
//! let token = key.encrypt(b"call me on the weekend", b"kid:gandalf0").unwrap();
//!
//! // serialize the token.
//! let token = token.to_string();
//! // "v2.local..."
//!
//! // parse the token
//! let token: EncryptedToken = token.parse().unwrap();
//!
//! // the footer is readable before decryption, but is not yet trustworthy
//! assert_eq!(token.unverified_footer(), b"kid:gandalf0");
//!
//! // decrypt the token
//! let token = token.decrypt(&key).unwrap();
//! assert_eq!(token.message, b"call me on the weekend");
//! assert_eq!(token.footer, b"kid:gandalf0");
//! ```
#![forbid(unsafe_code)]

pub mod pae;

mod key;
mod local;
mod tokens;

pub use key::LocalKey;
pub use tokens::{DecryptedToken, EncryptedToken, HEADER};

/// Error returned for all PASETO operations that can fail.
///
/// Decryption deliberately collapses every failure mode, structural or
/// cryptographic, into [`InvalidToken`](PasetoError::InvalidToken):
/// distinguishing a malformed token from a forged one would hand an
/// attacker a decryption oracle.
#[derive(Debug)]
#[non_exhaustive]
pub enum PasetoError {
    /// Could not decode the provided key bytes
    InvalidKey,
    /// The token could not be parsed or decrypted
    InvalidToken,
    /// The system random source failed
    CryptoError,
}

impl std::error::Error for PasetoError {}

impl std::fmt::Display for PasetoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasetoError::InvalidKey => f.write_str("Could not parse the key"),
            PasetoError::InvalidToken => f.write_str("Could not parse or decrypt the token"),
            PasetoError::CryptoError => f.write_str("The system random source failed"),
        }
    }
}
