use itertools::Itertools;
use snafu::prelude::*;

use crate::crypto::xor;
use crate::error::{CiphertextTooShortSnafu, EmptyInputSnafu, Error};
use crate::scoring::MIN_SCORE_LENGTH;

// Scoring a fixed-size prefix of each trial decryption is enough to rank
// the 256 keys; the winner is decrypted in full afterwards
pub const SCORE_PREFIX_LEN: usize = 30;

pub const MAX_KEY_LENGTH: usize = 40;

pub fn break_single_byte_xor(
    ciph: &[u8],
    score_fn: impl Fn(&[u8]) -> f64,
) -> Result<(Vec<u8>, u8), Error> {
    ensure!(!ciph.is_empty(), EmptyInputSnafu);
    let chunk = &ciph[..ciph.len().min(SCORE_PREFIX_LEN)];

    let mut best_key = 0u8;
    let mut best_score = f64::NEG_INFINITY;
    for key in 0..=u8::MAX {
        let score = score_fn(&xor::byte_xor(chunk, key));
        // Strictly greater, so equal scores resolve to the lowest key
        if score > best_score {
            best_score = score;
            best_key = key;
        }
    }
    Ok((xor::byte_xor(ciph, best_key), best_key))
}

// Windows XORed with the same repeating key at the same phase differ only
// where the underlying English differs, which is fewer bits than windows
// at mismatched phase. The candidate minimising the mean per-bit distance
// over adjacent window pairs is the key length. Distances are averaged
// over every adjacent pair inside a fixed byte budget, so short candidates
// get many pairs and even the longest gets at least four.
pub fn estimate_key_length(ciph: &[u8], max_len: usize) -> Result<usize, Error> {
    ensure!(
        max_len > 0 && ciph.len() >= max_len * MIN_SCORE_LENGTH,
        CiphertextTooShortSnafu { len: ciph.len(), max_len }
    );
    let budget = max_len * MIN_SCORE_LENGTH;

    let mut best_len = 1;
    let mut best_dist = f64::INFINITY;
    for k in 1..=max_len {
        let windows = budget / k;
        let dist: f64 = ciph
            .chunks(k)
            .take(windows)
            .tuple_windows()
            .map(|(a, b)| xor::normalised_hamming_distance(a, b))
            .sum::<f64>()
            / (windows - 1) as f64;
        // Strictly less, so equal distances resolve to the shortest length
        if dist < best_dist {
            best_dist = dist;
            best_len = k;
        }
    }
    Ok(best_len)
}

pub fn break_repeating_key_xor(
    ciph: &[u8],
    score_fn: impl Fn(&[u8]) -> f64,
) -> Result<(Vec<u8>, Vec<u8>), Error> {
    let keysize = estimate_key_length(ciph, MAX_KEY_LENGTH)?;

    // Column i holds the bytes at positions i, i+k, i+2k, ... — every byte
    // of a column was XORed with the same single key byte
    let mut plain = vec![0u8; ciph.len()];
    for offset in 0..keysize {
        let column: Vec<u8> = ciph.iter().skip(offset).step_by(keysize).copied().collect();
        let (column_plain, _) = break_single_byte_xor(&column, &score_fn)?;
        for (i, &b) in column_plain.iter().enumerate() {
            plain[offset + i * keysize] = b;
        }
    }

    let key = xor::fixed_xor(&ciph[..keysize], &plain[..keysize]);
    Ok((plain, key))
}
