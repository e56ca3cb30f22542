use rand::RngCore;
use snafu::prelude::*;

use crate::error::{Error, InvalidPaddingSnafu};

// Standard PKCS#7: the pad value is the pad length, and an input already at
// a block boundary gains a whole extra block so stripping is unambiguous
pub fn pad_pkcs7(buf: &[u8], block_size: usize) -> Vec<u8> {
    let padding_length = block_size - buf.len() % block_size;
    let mut out = buf.to_vec();
    out.extend(std::iter::repeat(padding_length as u8).take(padding_length));
    out
}

pub fn strip_pkcs7(buf: &[u8], block_size: usize) -> Result<Vec<u8>, Error> {
    ensure!(
        !buf.is_empty() && buf.len() % block_size == 0,
        InvalidPaddingSnafu
    );
    let padding_length = *buf.last().unwrap() as usize;
    ensure!(
        padding_length >= 1 && padding_length <= block_size,
        InvalidPaddingSnafu
    );
    ensure!(
        buf.iter()
            .rev()
            .take(padding_length)
            .all(|&b| b as usize == padding_length),
        InvalidPaddingSnafu
    );
    Ok(buf[..buf.len() - padding_length].to_vec())
}

pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut data);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_pkcs7() {
        let case = b"YELLOW SUBMARINE";
        assert_eq!(
            b"YELLOW SUBMARINE\x04\x04\x04\x04".to_vec(),
            pad_pkcs7(case, 20)
        );

        // Already aligned: a full block of padding is appended
        let aligned = pad_pkcs7(case, 16);
        assert_eq!(32, aligned.len());
        assert_eq!(vec![16u8; 16], aligned[16..].to_vec());
    }

    #[test]
    fn test_strip_pkcs7() {
        let case = b"ICE ICE BABY\x04\x04\x04\x04";
        assert_eq!(Some(b"ICE ICE BABY".to_vec()), strip_pkcs7(case, 16).ok());

        let bad_value = b"ICE ICE BABY\x05\x05\x05\x05";
        assert!(matches!(
            strip_pkcs7(bad_value, 16),
            Err(Error::InvalidPadding)
        ));

        let bad_run = b"ICE ICE BABY\x01\x02\x03\x04";
        assert!(matches!(
            strip_pkcs7(bad_run, 16),
            Err(Error::InvalidPadding)
        ));

        let misaligned = b"ICE ICE BABY\x04\x04\x04";
        assert!(matches!(
            strip_pkcs7(misaligned, 16),
            Err(Error::InvalidPadding)
        ));
    }

    #[test]
    fn test_pad_strip_round_trip() {
        let case = b"hello world";
        for block_size in [8usize, 16, 20] {
            let padded = pad_pkcs7(case, block_size);
            assert_eq!(0, padded.len() % block_size);
            assert_eq!(case.to_vec(), strip_pkcs7(&padded, block_size).unwrap());
        }
    }
}
