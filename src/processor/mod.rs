pub mod aggregator;
pub mod filter;
pub mod normalizer;

pub use aggregator::*;
pub use filter::*;
pub use normalizer::*;
