//! Domain types.

mod record;

pub use record::Record;
