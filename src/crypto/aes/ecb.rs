use openssl::symm::{Cipher, Crypter, Mode};
use snafu::prelude::*;

use crate::error::{CipherSnafu, Error, SizeMismatchSnafu};

pub mod byte_by_byte;

// Raw codebook mode: the caller handles padding, every block goes through
// the cipher independently under the same key
pub fn ecb_encrypt(cipher: Cipher, key: &[u8], buf: &[u8]) -> Result<Vec<u8>, Error> {
    apply(cipher, Mode::Encrypt, key, buf)
}

pub fn ecb_decrypt(cipher: Cipher, key: &[u8], buf: &[u8]) -> Result<Vec<u8>, Error> {
    apply(cipher, Mode::Decrypt, key, buf)
}

fn apply(cipher: Cipher, mode: Mode, key: &[u8], buf: &[u8]) -> Result<Vec<u8>, Error> {
    let block_size = cipher.block_size();
    ensure!(
        buf.len() % block_size == 0,
        SizeMismatchSnafu { len: buf.len(), block_size }
    );
    let mut crypter = Crypter::new(cipher, mode, key, None).context(CipherSnafu)?;
    crypter.pad(false);
    let mut out = vec![0u8; buf.len() + block_size];
    let mut count = crypter.update(buf, &mut out).context(CipherSnafu)?;
    count += crypter.finalize(&mut out[count..]).context(CipherSnafu)?;
    out.truncate(count);
    Ok(out)
}
