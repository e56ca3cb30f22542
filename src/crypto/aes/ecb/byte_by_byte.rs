use std::collections::HashMap;

use snafu::prelude::*;

use crate::crypto::aes::FILLER;
use crate::crypto::oracle::Oracle;
use crate::error::{AmbiguousOracleSnafu, Error, SizeMismatchSnafu};

// Recovers the fixed unknown suffix of an ECB oracle one byte at a time,
// without ever touching the key. For each position, an alignment prefix
// places the unknown byte at the end of a block, and a 256-entry
// dictionary of "last block_size - 1 recovered bytes plus candidate"
// encryptions identifies it.
pub fn recover_suffix(oracle: &dyn Oracle, block_size: usize) -> Result<Vec<u8>, Error> {
    let total_len = oracle(&[]).len();
    ensure!(
        total_len > 0 && total_len % block_size == 0,
        SizeMismatchSnafu { len: total_len, block_size }
    );

    // Seeded with block_size - 1 filler bytes so the dictionary probe is
    // always exactly one block wide, even before anything is recovered.
    // Append-only: a resolved byte is never revisited.
    let mut recovered = vec![FILLER; block_size - 1];
    loop {
        let position = recovered.len() - (block_size - 1);
        if position >= total_len {
            break;
        }

        // Sized so the unknown byte lands at the end of its block
        let prefix = vec![FILLER; block_size - 1 - position % block_size];
        let block_start = (position / block_size) * block_size;
        let target = oracle(&prefix)[block_start..block_start + block_size].to_vec();

        let tail = recovered[recovered.len() - (block_size - 1)..].to_vec();
        let lookup: HashMap<Vec<u8>, u8> = (0..=u8::MAX)
            .map(|candidate| {
                let probe = [tail.as_slice(), &[candidate]].concat();
                (oracle(&probe)[..block_size].to_vec(), candidate)
            })
            .collect();

        match lookup.get(&target) {
            Some(&byte) => recovered.push(byte),
            None => break,
        }
    }

    // The first byte past the true suffix always resolves to the 0x01
    // PKCS#7 pad, after which the dictionary misses. Anything else means
    // the oracle is not deterministic or carries an unknown prefix.
    let mut suffix = recovered.split_off(block_size - 1);
    ensure!(
        suffix.last() == Some(&0x01),
        AmbiguousOracleSnafu { position: suffix.len() }
    );
    suffix.pop();
    Ok(suffix)
}
