pub mod common;
pub mod xor;
pub mod aes;
pub mod oracle;

#[cfg(test)]
mod generic_tests {
    use crate::crypto::*;
    use crate::testing::ENGLISH;

    // Breaking the same ciphertext twice must be bit-identical; none of the
    // breakers carry hidden randomness
    #[test]
    fn test_breakers_are_idempotent() {
        let corpus = std::fs::read("./data/corpus.txt")
            .expect("Should have been able to read the file");
        let ciph = xor::repeating_key_xor(&corpus, b"VANILLA");
        let score_fn = ENGLISH.as_score_fn();

        let first = xor::attack::break_repeating_key_xor(&ciph, &score_fn).unwrap();
        let second = xor::attack::break_repeating_key_xor(&ciph, &score_fn).unwrap();
        assert_eq!(first, second);

        let single = xor::byte_xor(&corpus[..200], 0x3c);
        let a = xor::attack::break_single_byte_xor(&single, &score_fn).unwrap();
        let b = xor::attack::break_single_byte_xor(&single, &score_fn).unwrap();
        assert_eq!(a, b);
    }
}
