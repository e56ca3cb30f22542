use std::path::Path;

use snafu::prelude::*;

use crate::error::{CorpusUnreadableSnafu, EmptyCorpusSnafu, EmptyInputSnafu, Error};

// We only model 7-bit ASCII; anything above is treated as "never English"
pub const ASCII_LIMIT: usize = 128;

// Scores over fewer bytes than this are well-defined but statistically noisy
pub const MIN_SCORE_LENGTH: usize = 6;

// Relative byte frequencies over a training corpus. Built once at startup
// and passed by reference into every scoring call; never mutated.
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    freqs: [f64; ASCII_LIMIT],
}

impl FrequencyModel {
    pub fn train(corpus: &[u8]) -> Result<Self, Error> {
        ensure!(!corpus.is_empty(), EmptyCorpusSnafu);
        let mut freqs = [0f64; ASCII_LIMIT];
        for &c in corpus {
            if (c as usize) < ASCII_LIMIT {
                freqs[c as usize] += 1.0;
            }
        }
        let n = corpus.len() as f64;
        for f in freqs.iter_mut() {
            *f /= n;
        }
        Ok(FrequencyModel { freqs })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let corpus = std::fs::read(path).context(CorpusUnreadableSnafu { path })?;
        Self::train(&corpus)
    }

    pub fn frequency(&self, byte: u8) -> f64 {
        if (byte as usize) < ASCII_LIMIT {
            self.freqs[byte as usize]
        } else {
            0.0
        }
    }

    // Mean modeled frequency over all bytes. Bytes outside the modeled
    // range contribute zero to the sum but still count in the divisor, so
    // binary garbage scores close to zero rather than being skipped over.
    pub fn score(&self, text: &[u8]) -> Result<f64, Error> {
        ensure!(!text.is_empty(), EmptyInputSnafu);
        let sum: f64 = text.iter().map(|&c| self.frequency(c)).sum();
        Ok(sum / text.len() as f64)
    }

    // The breakers only ever score non-empty slices, so adapt to the plain
    // closure shape they take
    pub fn as_score_fn(&self) -> impl Fn(&[u8]) -> f64 + '_ {
        move |text| self.score(text).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ENGLISH;

    #[test]
    fn test_train_relative_frequencies() {
        let model = FrequencyModel::train(b"abcc").unwrap();
        assert_eq!(0.25, model.frequency(b'a'));
        assert_eq!(0.25, model.frequency(b'b'));
        assert_eq!(0.50, model.frequency(b'c'));
        assert_eq!(0.00, model.frequency(b'd'));
        assert_eq!(0.00, model.frequency(200));
    }

    #[test]
    fn test_train_ignores_high_bytes() {
        let model = FrequencyModel::train(&[b'a', 0xff, 0xff, 0xff]).unwrap();
        // High bytes still count towards the corpus length
        assert_eq!(0.25, model.frequency(b'a'));
    }

    #[test]
    fn test_train_empty_corpus() {
        assert!(matches!(FrequencyModel::train(b""), Err(Error::EmptyCorpus)));
    }

    #[test]
    fn test_score_empty_input() {
        assert!(matches!(ENGLISH.score(b""), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_corpus_frequencies_sum_to_one() {
        let total: f64 = (0..ASCII_LIMIT as u8).map(|c| ENGLISH.frequency(c)).sum();
        assert!((total - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_english_scores_above_garbage() {
        let english = b"Now that the party is jumping";
        let garbage: Vec<u8> = english.iter().map(|b| b ^ 0x91).collect();
        let s_english = ENGLISH.score(english).unwrap();
        let s_garbage = ENGLISH.score(&garbage).unwrap();
        assert!(s_english > s_garbage);
    }
}
