pub mod algorithm;
pub use algorithm::*;

pub mod insertion;
pub mod selection;
