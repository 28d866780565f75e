use core::fmt;

use crate::PasetoError;

/// A symmetric key used to encrypt and decrypt `v2.local` tokens.
///
/// Exactly 32 bytes. The key is opaque to the codec: it is supplied by
/// the caller and never stored or serialized by this crate.
#[derive(Clone)]
pub struct LocalKey(pub(crate) [u8; 32]);

impl LocalKey {
    pub fn as_raw_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn from_raw_bytes(b: [u8; 32]) -> Self {
        Self(b)
    }

    /// Decode a key from a byte slice. Any length other than 32 is rejected.
    pub fn decode(bytes: &[u8]) -> Result<Self, PasetoError> {
        bytes
            .try_into()
            .map(LocalKey)
            .map_err(|_| PasetoError::InvalidKey)
    }

    /// Generate a random local key from the OS CSPRNG.
    pub fn random() -> Result<Self, PasetoError> {
        let mut bytes = [0; 32];
        getrandom::fill(&mut bytes).map_err(|_| PasetoError::CryptoError)?;
        Ok(LocalKey(bytes))
    }
}

impl fmt::Debug for LocalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LocalKey([redacted])")
    }
}

#[cfg(test)]
mod tests {
    use super::LocalKey;

    #[test]
    fn decode_rejects_wrong_lengths() {
        assert!(LocalKey::decode(&[0; 31]).is_err());
        assert!(LocalKey::decode(&[0; 33]).is_err());
        assert!(LocalKey::decode(&[]).is_err());
        assert!(LocalKey::decode(&[0; 32]).is_ok());
    }

    #[test]
    fn debug_never_prints_key_material() {
        let key = LocalKey::from_raw_bytes([0xAB; 32]);
        let s = format!("{key:?}");
        assert!(!s.contains("171"));
        assert!(!s.to_lowercase().contains("ab"));
    }
}
