//! Shared test infrastructure

pub mod database_helper;
pub mod fixtures;

pub use database_helper::TestApp;
