use std::collections::HashSet;

use snafu::prelude::*;

use crate::crypto::oracle::Oracle;
use crate::error::{BlockSizeNotFoundSnafu, Error, SizeMismatchSnafu};

pub mod cbc;
pub mod ecb;

// Known byte used for every chosen-plaintext probe
pub(crate) const FILLER: u8 = b'A';

const PROBE_START: usize = 8;
const PROBE_STEP: usize = 2;
const PROBE_LIMIT: usize = 128;

// Two identical plaintext blocks encrypt identically under ECB, so feed
// ever longer runs of a single byte until the output opens with a doubled
// block. The probe of length L confirms a block size of L/2.
pub fn find_block_size(oracle: &dyn Oracle) -> Result<usize, Error> {
    let mut probe_len = PROBE_START;
    while probe_len <= PROBE_LIMIT {
        let block_size = probe_len / 2;
        let out = oracle(&vec![FILLER; probe_len]);
        if out.len() >= probe_len && out[..block_size] == out[block_size..probe_len] {
            return Ok(block_size);
        }
        probe_len += PROBE_STEP;
    }
    BlockSizeNotFoundSnafu { limit: PROBE_LIMIT }.fail()
}

pub fn detect_ecb(ciph: &[u8], block_size: usize) -> Result<bool, Error> {
    ensure!(
        ciph.len() % block_size == 0,
        SizeMismatchSnafu { len: ciph.len(), block_size }
    );
    let mut seen: HashSet<&[u8]> = HashSet::new();
    for block in ciph.chunks(block_size) {
        if !seen.insert(block) {
            return Ok(true);
        }
    }
    Ok(false)
}

// Four identical filler blocks survive any fixed affixes the oracle may
// add; a repeated ciphertext block then fingerprints ECB
pub fn oracle_uses_ecb(oracle: &dyn Oracle, block_size: usize) -> Result<bool, Error> {
    let out = oracle(&vec![FILLER; 4 * block_size]);
    let trimmed = &out[..out.len() - out.len() % block_size];
    detect_ecb(trimmed, block_size)
}
