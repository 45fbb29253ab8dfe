//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod snippets;
pub mod tree_assertions;
