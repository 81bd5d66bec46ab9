//! Tests for the CLI module

pub mod args_tests;
