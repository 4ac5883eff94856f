//! Storage layer tests
//!
//! Incremental build behaviour, index file handling and concurrent
//! search during builds.

mod test_persistence;
