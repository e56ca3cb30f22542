use openssl::symm::Cipher;
use snafu::prelude::*;

use crate::crypto::aes::ecb::{ecb_decrypt, ecb_encrypt};
use crate::crypto::xor::fixed_xor;
use crate::error::{Error, SizeMismatchSnafu};

pub fn cbc_encrypt(cipher: Cipher, key: &[u8], iv: &[u8], buf: &[u8]) -> Result<Vec<u8>, Error> {
    let block_size = cipher.block_size();
    ensure!(
        iv.len() == block_size,
        SizeMismatchSnafu { len: iv.len(), block_size }
    );
    ensure!(
        buf.len() % block_size == 0,
        SizeMismatchSnafu { len: buf.len(), block_size }
    );

    let mut prev = iv.to_vec();
    let mut out = Vec::with_capacity(buf.len());
    for block in buf.chunks(block_size) {
        let enc = ecb_encrypt(cipher, key, &fixed_xor(block, &prev))?;
        out.extend_from_slice(&enc);
        prev = enc;
    }
    Ok(out)
}

pub fn cbc_decrypt(cipher: Cipher, key: &[u8], iv: &[u8], buf: &[u8]) -> Result<Vec<u8>, Error> {
    let block_size = cipher.block_size();
    ensure!(
        iv.len() == block_size,
        SizeMismatchSnafu { len: iv.len(), block_size }
    );
    ensure!(
        buf.len() % block_size == 0,
        SizeMismatchSnafu { len: buf.len(), block_size }
    );

    let mut prev: &[u8] = iv;
    let mut out = Vec::with_capacity(buf.len());
    for block in buf.chunks(block_size) {
        let dec = ecb_decrypt(cipher, key, block)?;
        out.extend(fixed_xor(&dec, prev));
        prev = block;
    }
    Ok(out)
}
