//! I/O utilities for archive operations.

pub mod bounded;

pub use bounded::BoundedReader;
