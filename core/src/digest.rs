//! Content hashing used for request signing.

/// Uppercase hexadecimal MD5 digest of `input`'s UTF-8 bytes.
pub fn md5_hex(input: &str) -> String {
    hex::encode_upper(md5::compute(input.as_bytes()).0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_matches_known_digest() {
        assert_eq!(md5_hex(""), "D41D8CD98F00B204E9800998ECF8427E");
    }

    #[test]
    fn abc_matches_known_digest() {
        assert_eq!(md5_hex("abc"), "900150983CD24FB0D6963F7D28E17F72");
    }

    #[test]
    fn digest_is_uppercase_hex() {
        let digest = md5_hex("message digest");
        assert_eq!(digest.len(), 32);
        assert!(digest.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn multibyte_input_hashes_utf8_bytes() {
        assert_ne!(md5_hex("héllo"), md5_hex("hello"));
        assert_eq!(md5_hex("héllo").len(), 32);
    }
}
