pub mod common;

#[cfg(test)]
mod account_tests;
