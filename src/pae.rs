//! Pre-auth encoding
//!
//! <https://github.com/paseto-standard/paseto-spec/blob/master/docs/01-Protocol-Versions/Common.md#authentication-padding>

/// Canonically serializes an ordered list of byte strings into one
/// unambiguous buffer: an 8-byte little-endian element count, then for
/// each element an 8-byte little-endian length followed by its raw
/// bytes. No delimiters; unambiguity comes entirely from the explicit
/// length prefixes, so distinct lists never collide even when their
/// concatenated bytes are equal.
pub fn pre_auth_encode<const N: usize>(pieces: [&[u8]; N]) -> Vec<u8> {
    let len = 8 + pieces.iter().map(|piece| 8 + piece.len()).sum::<usize>();
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(&le64(N as u64));
    for piece in pieces {
        out.extend_from_slice(&le64(piece.len() as u64));
        out.extend_from_slice(piece);
    }
    out
}

// The most significant bit of every count/length field is reserved
// clear on the wire.
fn le64(n: u64) -> [u8; 8] {
    (n << 1 >> 1).to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::pre_auth_encode;

    #[test]
    fn known_encodings() {
        let v = pre_auth_encode([]);
        assert_eq!(v, b"\x00\x00\x00\x00\x00\x00\x00\x00");

        let v = pre_auth_encode([b"".as_slice()]);
        assert_eq!(
            v,
            b"\x01\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00"
        );

        let v = pre_auth_encode([b"test".as_slice()]);
        assert_eq!(
            v,
            b"\x01\x00\x00\x00\x00\x00\x00\x00\x04\x00\x00\x00\x00\x00\x00\x00test"
        );
    }

    #[test]
    fn distinct_splits_never_collide() {
        let ab = pre_auth_encode([b"ab".as_slice()]);
        let a_b = pre_auth_encode([b"a".as_slice(), b"b".as_slice()]);
        let a_empty_b = pre_auth_encode([b"a".as_slice(), b"".as_slice(), b"b".as_slice()]);

        assert_ne!(ab, a_b);
        assert_ne!(ab, a_empty_b);
        assert_ne!(a_b, a_empty_b);
    }

    #[test]
    fn capacity_is_exact() {
        let v = pre_auth_encode([b"v2.local.".as_slice(), &[0; 24], b"footer"]);
        assert_eq!(v.len(), 8 + 3 * 8 + 9 + 24 + 6);
    }
}
