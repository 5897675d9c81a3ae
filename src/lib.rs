//! # semnet Library
//!
//! Semantic similarity networks from skip-gram word embeddings.
//! Loads `.vec` embedding tables, computes all-pairs cosine similarity
//! over a word list and draws the result as a radial chord diagram.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod processing;
pub mod storage;
pub mod ui;

pub use error::{NetError, Result};
