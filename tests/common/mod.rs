//! Shared utilities for the integration tests, built around real git
//! repositories in temporary directories.

pub mod assertions;
pub mod fixtures;
pub mod repository;
