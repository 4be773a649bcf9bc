//! Error types and error handling for the translator.
//!
//! This module defines the error types used throughout translation and the
//! optional build step. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants grouped into syntax, semantic and toolchain categories
//! - Helpful tips for the caret diagnostic

pub mod errors;

#[cfg(test)]
mod tests;
