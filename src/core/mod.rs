pub mod alphabet;
pub mod cache;
pub mod config;
