//! Token framing: the dot-delimited base64url text format.

use core::fmt;

use base64ct::{Base64UrlUnpadded, Encoding};
use rand_core::TryCryptoRng;

use crate::key::LocalKey;
use crate::{local, PasetoError};

/// Header identifying the version and purpose of every token.
pub const HEADER: &str = "v2.local.";

/// An encrypted `v2.local` token.
///
/// The message is inaccessible until [`decrypt`](EncryptedToken::decrypt)
/// succeeds. Serialize with [`Display`](fmt::Display), parse with
/// [`FromStr`](core::str::FromStr).
pub struct EncryptedToken {
    pub(crate) payload: Vec<u8>,
    pub(crate) footer: Vec<u8>,
}

/// An [`EncryptedToken`] that has been decrypted.
pub struct DecryptedToken {
    /// The message that was contained in the token
    pub message: Vec<u8>,
    /// The footer that was sent with the token
    pub footer: Vec<u8>,
}

impl LocalKey {
    /// Encrypt `message` into a token, seeding the nonce from the OS
    /// CSPRNG.
    ///
    /// The footer is authenticated but **not** encrypted; pass `b""`
    /// for none. Fails only if the random source does.
    pub fn encrypt(&self, message: &[u8], footer: &[u8]) -> Result<EncryptedToken, PasetoError> {
        let mut seed = [0; 24];
        getrandom::fill(&mut seed).map_err(|_| PasetoError::CryptoError)?;
        self.encrypt_with_seed(message, footer, seed)
    }

    /// Encrypt `message` into a token, seeding the nonce from the given
    /// rng. Intended for deterministic tests; production callers want
    /// [`encrypt`](LocalKey::encrypt).
    pub fn encrypt_with_rng(
        &self,
        message: &[u8],
        footer: &[u8],
        mut rng: impl TryCryptoRng,
    ) -> Result<EncryptedToken, PasetoError> {
        let mut seed = [0; 24];
        rng.try_fill_bytes(&mut seed)
            .map_err(|_| PasetoError::CryptoError)?;
        self.encrypt_with_seed(message, footer, seed)
    }

    fn encrypt_with_seed(
        &self,
        message: &[u8],
        footer: &[u8],
        seed: [u8; 24],
    ) -> Result<EncryptedToken, PasetoError> {
        let mut payload = Vec::with_capacity(24 + message.len() + 16);
        payload.extend_from_slice(&seed);
        payload.extend_from_slice(message);

        let payload = local::seal(self, payload, footer)?;

        Ok(EncryptedToken {
            payload,
            footer: footer.to_vec(),
        })
    }
}

impl EncryptedToken {
    /// View the **unverified** footer for this token.
    ///
    /// The footer is only authenticated once [`decrypt`](Self::decrypt)
    /// succeeds. Callers that expect a particular footer value must
    /// compare it themselves, with a constant-time comparison.
    pub fn unverified_footer(&self) -> &[u8] {
        &self.footer
    }

    /// Decrypt the token, returning the message and the now
    /// authenticated footer.
    ///
    /// Failure is uniform: a forged tag, a tampered footer and a
    /// malformed body all surface as [`PasetoError::InvalidToken`].
    pub fn decrypt(mut self, key: &LocalKey) -> Result<DecryptedToken, PasetoError> {
        // Freshly allocate the returned message rather than handing the
        // caller a slice of the wire buffer.
        let message = local::unseal(key, &mut self.payload, &self.footer)?.to_vec();

        Ok(DecryptedToken {
            message,
            footer: self.footer,
        })
    }
}

impl fmt::Display for EncryptedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HEADER)?;
        f.write_str(&Base64UrlUnpadded::encode_string(&self.payload))?;

        if !self.footer.is_empty() {
            f.write_str(".")?;
            f.write_str(&Base64UrlUnpadded::encode_string(&self.footer))?;
        }

        Ok(())
    }
}

impl core::str::FromStr for EncryptedToken {
    type Err = PasetoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(HEADER).ok_or(PasetoError::InvalidToken)?;

        // Neither segment's alphabet contains '.', so splitting on the
        // first one is unambiguous. Any further '.' lands inside the
        // footer segment and is rejected by its base64 decoding.
        let (payload, footer) = match s.split_once('.') {
            Some((payload, footer)) => (payload, Some(footer)),
            None => (s, None),
        };

        let payload =
            Base64UrlUnpadded::decode_vec(payload).map_err(|_| PasetoError::InvalidToken)?;
        let footer = footer
            .map(|footer| Base64UrlUnpadded::decode_vec(footer))
            .transpose()
            .map_err(|_| PasetoError::InvalidToken)?
            .unwrap_or_default();

        // nonce at minimum; the tag length is checked during decryption
        if payload.len() < 24 {
            return Err(PasetoError::InvalidToken);
        }

        Ok(EncryptedToken { payload, footer })
    }
}
