//! String operations.
//!
//! Implements the bounded `<string.h>` functions as safe Rust operating on
//! slices.

pub mod str;

pub use str::{strlcat, strlcpy, strlen, strnlen};
