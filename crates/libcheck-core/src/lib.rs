//! # libcheck-core
//!
//! Safe Rust implementations of the C library functions exercised by the
//! libcheck conformance suites.
//!
//! Strings are modelled as byte slices where the first NUL byte (`0x00`)
//! marks the logical end. No `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod math;
pub mod string;
