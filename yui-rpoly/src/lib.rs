mod types;

pub use types::*;

pub mod config;
pub mod util;

#[cfg(test)]
mod proptests;
