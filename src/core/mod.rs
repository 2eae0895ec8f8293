//! Core library components.
//!
//! The dotenv codec, the record merge engine, the tabular projection and
//! the secret store abstraction they run against.

pub mod config;
pub mod constants;
pub mod domain;
pub mod dotenv;
pub mod merge;
pub mod quote;
pub mod store;
pub mod table;
pub mod types;
