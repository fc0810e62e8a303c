//! `test_tan`: tangent near the asymptotes, at exact points and on domain errors.
//!
//! `FRAC_PI_2` is the double nearest pi/2, slightly below it, so `tan` there is
//! finite and large rather than infinite or NaN.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};
use std::rc::Rc;

use crate::assert::{CaseResult, assert_equal_double, assert_nan, assert_true};
use crate::backend::Trigonometry;
use crate::group::TestGroup;

pub const GROUP: &str = "test_tan";

/// `tan(FRAC_PI_2)` in double precision.
pub const TAN_NEAR_PI_2: f64 = 1.633_123_935_319_537e16;
/// `tan(FRAC_PI_3)` to twelve decimal places.
pub const TAN_PI_3: f64 = 1.732_050_807_569;

pub struct TanFixture {
    backend: Rc<dyn Trigonometry>,
}

impl TanFixture {
    fn tan(&self, x: f64) -> f64 {
        self.backend.tan(x)
    }
}

#[must_use]
pub fn group(backend: Rc<dyn Trigonometry>) -> TestGroup<TanFixture> {
    TestGroup::new(GROUP, move || TanFixture {
        backend: Rc::clone(&backend),
    })
    .case("tan_boundary_values_left", tan_boundary_values_left)
    .case("tan_boundary_values_right", tan_boundary_values_right)
    .case("tan_middle_values", tan_middle_values)
    .case("tan_signed_zero", tan_signed_zero)
    .case("tan_domain_errors", tan_domain_errors)
}

fn tan_boundary_values_left(fx: &mut TanFixture) -> CaseResult {
    assert_equal_double(-TAN_NEAR_PI_2, fx.tan(-FRAC_PI_2))
}

fn tan_boundary_values_right(fx: &mut TanFixture) -> CaseResult {
    assert_equal_double(TAN_NEAR_PI_2, fx.tan(FRAC_PI_2))
}

fn tan_middle_values(fx: &mut TanFixture) -> CaseResult {
    assert_equal_double(0.0, fx.tan(0.0))?;
    assert_equal_double(-1.0, fx.tan(-FRAC_PI_4))?;
    assert_equal_double(1.0, fx.tan(FRAC_PI_4))?;
    assert_equal_double(TAN_PI_3, fx.tan(FRAC_PI_3))
}

fn tan_signed_zero(fx: &mut TanFixture) -> CaseResult {
    let value = fx.tan(-0.0);
    assert_equal_double(0.0, value)?;
    assert_true(value.is_sign_negative(), "tan(-0.0) must keep the sign")
}

fn tan_domain_errors(fx: &mut TanFixture) -> CaseResult {
    assert_nan(fx.tan(f64::NAN))?;
    assert_nan(fx.tan(f64::INFINITY))?;
    assert_nan(fx.tan(f64::NEG_INFINITY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::CaseFailure;
    use crate::backend::CoreBackend;
    use crate::group::Group;

    struct Saturating;

    impl Trigonometry for Saturating {
        fn tan(&self, x: f64) -> f64 {
            if x.is_finite() { x.tan() } else { 0.0 }
        }
    }

    #[test]
    fn every_case_passes_on_core_backend() {
        let group = group(Rc::new(CoreBackend));
        for (index, name) in group.case_names().into_iter().enumerate() {
            assert_eq!(group.run_case(index), Ok(()), "{name}");
        }
    }

    #[test]
    fn domain_check_catches_non_nan_backend() {
        let group = group(Rc::new(Saturating));
        let index = group
            .case_names()
            .iter()
            .position(|n| *n == "tan_domain_errors")
            .unwrap();
        assert_eq!(
            group.run_case(index),
            Err(CaseFailure::NotNan { actual: 0.0 })
        );
    }
}
