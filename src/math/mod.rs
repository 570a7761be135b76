pub mod rng;
pub mod vector;

pub use rng::SplitMix64;
