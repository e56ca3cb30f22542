#[macro_use] extern crate hex_literal;
#[cfg(test)]
#[macro_use] extern crate lazy_static;

mod error;
mod scoring;
mod util;
mod crypto;

pub use error::*;
pub use scoring::*;
pub use util::*;
pub use crypto::*;

#[cfg(test)]
pub(crate) mod testing {
    use crate::scoring::FrequencyModel;

    lazy_static! {
        // Trained once, shared read-only across the test modules
        pub static ref ENGLISH: FrequencyModel =
            FrequencyModel::from_file("./data/corpus.txt")
                .expect("training corpus should be present under ./data");
    }
}
