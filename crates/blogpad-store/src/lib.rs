// ABOUTME: Persistence layer for blogpad, backing the core slot contract with the filesystem.
// ABOUTME: Provides the directory-backed FileSlot and the one-shot seed bootstrap.

pub mod file;
pub mod seed;

pub use file::FileSlot;
pub use seed::{Bootstrap, SeedError, SeedSource, bootstrap, fetch_seed};
