//! Nonce derivation and AEAD sealing for `v2.local`.

use blake2::Blake2bMac;
use chacha20poly1305::aead::AeadMutInPlace;
use chacha20poly1305::{KeyInit, XChaCha20Poly1305};
use digest::Mac;
use generic_array::typenum::U24;

use crate::key::LocalKey;
use crate::pae::pre_auth_encode;
use crate::tokens::HEADER;
use crate::PasetoError;

/// Seal `payload` in place. It must arrive as `seed(24) || message` and
/// is returned as `nonce(24) || ciphertext || tag(16)`.
pub(crate) fn seal(
    key: &LocalKey,
    mut payload: Vec<u8>,
    footer: &[u8],
) -> Result<Vec<u8>, PasetoError> {
    let (nonce, message) = payload
        .split_first_chunk_mut::<24>()
        .ok_or(PasetoError::CryptoError)?;

    // The nonce is a keyed hash of the message, keyed by the random
    // seed. A repeated seed under two different messages still yields
    // two different nonces.
    let mut mac: Blake2bMac<U24> =
        Mac::new_from_slice(nonce).expect("24 bytes is less than the 64 bytes max");
    mac.update(message);
    *nonce = mac.finalize().into_bytes().into();

    let nonce: &[u8; 24] = nonce;

    let aad = pre_auth_encode([HEADER.as_bytes(), nonce, footer]);
    let tag = XChaCha20Poly1305::new((&key.0).into())
        .encrypt_in_place_detached(nonce.into(), &aad, message)
        .map_err(|_| PasetoError::CryptoError)?;

    payload.extend_from_slice(&tag);

    Ok(payload)
}

/// Open `payload` (`nonce(24) || ciphertext || tag(16)`) in place,
/// returning the plaintext slice. All-or-nothing: on any failure no
/// plaintext, partial or otherwise, is handed back.
pub(crate) fn unseal<'a>(
    key: &LocalKey,
    payload: &'a mut [u8],
    footer: &[u8],
) -> Result<&'a [u8], PasetoError> {
    let (ciphertext, tag) = payload
        .split_last_chunk_mut::<16>()
        .ok_or(PasetoError::InvalidToken)?;
    let (nonce, ciphertext) = ciphertext
        .split_first_chunk_mut::<24>()
        .ok_or(PasetoError::InvalidToken)?;
    let nonce: &[u8; 24] = nonce;
    let tag: &[u8; 16] = tag;

    let aad = pre_auth_encode([HEADER.as_bytes(), nonce, footer]);
    XChaCha20Poly1305::new((&key.0).into())
        .decrypt_in_place_detached(nonce.into(), &aad, ciphertext, tag.into())
        .map_err(|_| PasetoError::InvalidToken)?;

    Ok(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::{seal, unseal};
    use crate::key::LocalKey;

    #[test]
    fn nonce_depends_on_the_message() {
        let key = LocalKey::from_raw_bytes([0; 32]);

        // same seed, different messages
        let mut a = vec![0; 24];
        a.extend_from_slice(b"message one");
        let mut b = vec![0; 24];
        b.extend_from_slice(b"message two");

        let a = seal(&key, a, b"").unwrap();
        let b = seal(&key, b, b"").unwrap();
        assert_ne!(a[..24], b[..24]);
    }

    #[test]
    fn unseal_rejects_short_payloads() {
        let key = LocalKey::from_raw_bytes([0; 32]);
        for len in 0..40 {
            let mut payload = vec![0; len];
            assert!(unseal(&key, &mut payload, b"").is_err());
        }
    }
}
