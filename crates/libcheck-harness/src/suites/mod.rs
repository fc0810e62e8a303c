//! Conformance suites.
//!
//! Each submodule builds one [`TestGroup`](crate::group::TestGroup) over a
//! backend:
//! - `string_strlcpy`: bounded copy
//! - `string_strlcat`: bounded concatenation
//! - `test_tan`: tangent at the asymptotes, domain errors and exact points

use std::rc::Rc;

use crate::backend::{BoundedStrings, CoreBackend, Trigonometry};
use crate::group::Registry;

pub mod strlcat;
pub mod strlcpy;
pub mod tan;

/// Register every suite against the given backends.
pub fn register_all(
    registry: &mut Registry,
    strings: Rc<dyn BoundedStrings>,
    trig: Rc<dyn Trigonometry>,
) {
    registry
        .register(strlcpy::group(Rc::clone(&strings)))
        .register(strlcat::group(strings))
        .register(tan::group(trig));
}

/// A registry with every suite running against [`CoreBackend`].
#[must_use]
pub fn default_registry() -> Registry {
    let mut registry = Registry::new();
    register_all(&mut registry, Rc::new(CoreBackend), Rc::new(CoreBackend));
    registry
}
