//! Shared helpers for the cross-crate lock tests.

#![forbid(unsafe_code)]

pub mod search_test_helpers;
