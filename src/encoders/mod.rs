pub mod algorithms;
pub mod text;

pub use algorithms::radix;
