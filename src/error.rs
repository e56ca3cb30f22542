use std::path::PathBuf;

use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("training corpus is empty"))]
    EmptyCorpus,

    #[snafu(display("could not read training corpus at {}", path.display()))]
    CorpusUnreadable { path: PathBuf, source: std::io::Error },

    #[snafu(display("cannot score an empty input"))]
    EmptyInput,

    #[snafu(display(
        "ciphertext of {len} bytes is too short to estimate key lengths up to {max_len}"
    ))]
    CiphertextTooShort { len: usize, max_len: usize },

    #[snafu(display("length {len} is not a multiple of the block size {block_size}"))]
    SizeMismatch { len: usize, block_size: usize },

    #[snafu(display("no repeated ciphertext block found probing up to {limit} bytes"))]
    BlockSizeNotFound { limit: usize },

    #[snafu(display("dictionary lookup found no match for suffix byte {position}"))]
    AmbiguousOracle { position: usize },

    #[snafu(display("padding bytes are malformed"))]
    InvalidPadding,

    #[snafu(display("block cipher operation failed"))]
    Cipher { source: openssl::error::ErrorStack },
}
