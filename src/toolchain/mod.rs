//! External build step.
//!
//! Hands generated C++ to a native compiler and runs the result. Translation
//! never depends on this module; only the binary and the end-to-end tests
//! use it.

pub mod toolchain;
