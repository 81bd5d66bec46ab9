//! CLI module containing argument parsing and summary output

pub mod args;
pub mod display;

#[cfg(test)]
mod tests;
