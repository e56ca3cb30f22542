use openssl::symm::Cipher;

use crate::crypto::aes::cbc::cbc_encrypt;
use crate::crypto::aes::ecb::ecb_encrypt;
use crate::crypto::common::{pad_pkcs7, random_bytes};

// A chosen-plaintext encryption capability: the attacker controls the
// input, everything else (key, IV, fixed affixes) lives inside the closure
// and never escapes. Deterministic by construction.
pub trait Oracle: Fn(&[u8]) -> Vec<u8> {}
impl<T: Fn(&[u8]) -> Vec<u8>> Oracle for T {}

pub fn identity_oracle() -> Box<dyn Oracle> {
    Box::new(move |buf: &[u8]| buf.to_vec())
}

pub fn coin_flip<'a>(f: impl Oracle + 'a, g: impl Oracle + 'a) -> (bool, impl Oracle + 'a) {
    let chose_f: bool = rand::random();
    (chose_f, move |buf: &[u8]| {
        if chose_f {
            f(buf)
        } else {
            g(buf)
        }
    })
}

impl dyn Oracle {
    // Concatenates a fixed unknown suffix after the caller-supplied prefix
    pub fn append_suffix(self: Box<dyn Oracle>, suffix: &[u8]) -> Box<dyn Oracle> {
        let suffix = suffix.to_owned();
        Box::new(move |buf: &[u8]| self(&[buf, &suffix].concat()))
    }

    pub fn pad_pkcs7(self: Box<dyn Oracle>, block_size: usize) -> Box<dyn Oracle> {
        Box::new(move |buf: &[u8]| pad_pkcs7(&self(buf), block_size))
    }

    // Key material is drawn once at construction; the resulting oracle is
    // a pure function of its input
    pub fn encrypt_ecb_fixed_key(self: Box<dyn Oracle>, cipher: Cipher) -> Box<dyn Oracle> {
        let key = random_bytes(cipher.key_len());
        Box::new(move |buf: &[u8]| {
            ecb_encrypt(cipher, &key, &self(buf)).expect("oracle input should be block aligned")
        })
    }

    pub fn encrypt_cbc_fixed_key(self: Box<dyn Oracle>, cipher: Cipher) -> Box<dyn Oracle> {
        let key = random_bytes(cipher.key_len());
        let iv = random_bytes(cipher.block_size());
        Box::new(move |buf: &[u8]| {
            cbc_encrypt(cipher, &key, &iv, &self(buf)).expect("oracle input should be block aligned")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_is_deterministic() {
        let oracle = identity_oracle()
            .append_suffix(b"secret")
            .pad_pkcs7(16)
            .encrypt_ecb_fixed_key(Cipher::aes_128_ecb());
        assert_eq!(oracle(b"probe"), oracle(b"probe"));
    }

    #[test]
    fn test_append_suffix_and_pad() {
        let oracle = identity_oracle().append_suffix(b"tail").pad_pkcs7(8);
        assert_eq!(b"headtail\x08\x08\x08\x08\x08\x08\x08\x08".to_vec(), oracle(b"head"));
    }
}
