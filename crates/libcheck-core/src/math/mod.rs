//! Mathematical functions.
//!
//! Implements the `<math.h>` trigonometric entry points used by the suites.

pub mod trig;

pub use trig::tan;
