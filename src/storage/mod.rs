//! Reading word lists and writing network artifacts

pub mod artifacts;
pub mod csv;
pub mod wordlist;

pub use artifacts::{read_longform, save_network, ArtifactPaths};
pub use wordlist::read_word_list;
