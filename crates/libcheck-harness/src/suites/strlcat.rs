//! `string_strlcat`: bounded concatenation onto prefixes of `"klmnopqrstu"`.

use std::rc::Rc;

use libcheck_core::string::strlen;

use crate::assert::{
    CaseResult, assert_equal_bytes, assert_equal_int, assert_equal_string, fail,
};
use crate::backend::BoundedStrings;
use crate::group::TestGroup;

pub const GROUP: &str = "string_strlcat";

pub const SRC1_SIZE: usize = 4;
pub const SRC2_SIZE: usize = 6;
pub const BUF_SIZE: usize = 12;

/// Per-case state, rebuilt before every case.
pub struct StrlcatFixture {
    backend: Rc<dyn BoundedStrings>,
    pub source1: [u8; SRC1_SIZE],
    pub source2: [u8; SRC2_SIZE],
    pub buffer: [u8; BUF_SIZE],
}

impl StrlcatFixture {
    #[must_use]
    pub fn new(backend: Rc<dyn BoundedStrings>) -> Self {
        Self {
            backend,
            source1: *b"abc\0",
            source2: *b"defgh\0",
            buffer: *b"klmnopqrstu\0",
        }
    }

    /// Cut the buffer's string to its first `len` bytes.
    fn truncate_prefix(&mut self, len: usize) {
        self.buffer[len] = 0;
    }

    fn concat_source2(&mut self, size: usize) -> usize {
        self.backend.strlcat(&mut self.buffer, &self.source2, size)
    }
}

/// Build the group against `backend`.
#[must_use]
pub fn group(backend: Rc<dyn BoundedStrings>) -> TestGroup<StrlcatFixture> {
    TestGroup::new(GROUP, move || StrlcatFixture::new(Rc::clone(&backend)))
        .case("strlcat_fullconcat_empty", strlcat_fullconcat_empty)
        .case("strlcat_fullconcat_part", strlcat_fullconcat_part)
        .case("strlcat_exact_fit", strlcat_exact_fit)
        .case("strlcat_partconcat_overflow", strlcat_partconcat_overflow)
        .case("strlcat_onelength", strlcat_onelength)
        .case("strlcat_zerolength", strlcat_zerolength)
        .case("strlcat_capacity_below_buffer", strlcat_capacity_below_buffer)
        .case("strlcat_bounds_all_sizes", strlcat_bounds_all_sizes)
}

fn strlcat_fullconcat_empty(fx: &mut StrlcatFixture) -> CaseResult {
    fx.buffer.fill(0);
    let ret = fx.backend.strlcat(&mut fx.buffer, &fx.source1, BUF_SIZE);
    assert_equal_int(3, ret)?;
    assert_equal_string(&fx.source1, &fx.buffer)
}

fn strlcat_fullconcat_part(fx: &mut StrlcatFixture) -> CaseResult {
    fx.truncate_prefix(3);
    let ret = fx.concat_source2(BUF_SIZE);
    assert_equal_int(SRC2_SIZE + 2, ret)?;
    assert_equal_string(b"klmdefgh", &fx.buffer)
}

fn strlcat_exact_fit(fx: &mut StrlcatFixture) -> CaseResult {
    fx.truncate_prefix(6);
    let ret = fx.concat_source2(BUF_SIZE);
    assert_equal_int(BUF_SIZE - 1, ret)?;
    assert_equal_bytes(b"klmnopdefgh\0", &fx.buffer)
}

fn strlcat_partconcat_overflow(fx: &mut StrlcatFixture) -> CaseResult {
    fx.truncate_prefix(8);
    let ret = fx.concat_source2(BUF_SIZE);
    assert_equal_int(BUF_SIZE + 1, ret)?;
    assert_equal_string(b"klmnopqrdef", &fx.buffer)?;
    // terminator lands on the last byte of the capacity
    assert_equal_int(0, fx.buffer[BUF_SIZE - 1])
}

fn strlcat_onelength(fx: &mut StrlcatFixture) -> CaseResult {
    fx.truncate_prefix(6);
    let ret = fx.concat_source2(1);
    assert_equal_int(SRC2_SIZE, ret)?;
    assert_equal_string(b"klmnop", &fx.buffer)?;
    assert_equal_bytes(b"klmnop\0rstu\0", &fx.buffer)
}

fn strlcat_zerolength(fx: &mut StrlcatFixture) -> CaseResult {
    fx.truncate_prefix(6);
    let ret = fx.concat_source2(0);
    assert_equal_int(SRC2_SIZE - 1, ret)?;
    assert_equal_string(b"klmnop", &fx.buffer)?;
    assert_equal_bytes(b"klmnop\0rstu\0", &fx.buffer)
}

fn strlcat_capacity_below_buffer(fx: &mut StrlcatFixture) -> CaseResult {
    fx.truncate_prefix(3);
    let ret = fx.concat_source2(6);
    assert_equal_int(SRC2_SIZE + 2, ret)?;
    assert_equal_string(b"klmde", &fx.buffer)?;
    // bytes at and past the capacity keep the original buffer content
    assert_equal_bytes(b"klmde\0qrstu\0", &fx.buffer)
}

/// Every prefix length against every capacity up to the buffer size.
fn strlcat_bounds_all_sizes(fx: &mut StrlcatFixture) -> CaseResult {
    let src_len = SRC2_SIZE - 1;
    for prefix in 0..BUF_SIZE {
        for size in 0..=BUF_SIZE {
            let mut buf = [b'x'; BUF_SIZE];
            buf[..prefix].copy_from_slice(&fx.buffer[..prefix]);
            buf[prefix] = 0;
            let before = buf;

            let ret = fx.backend.strlcat(&mut buf, &fx.source2, size);
            let context = format!("prefix={prefix} size={size}");

            if ret != prefix.min(size) + src_len {
                return fail(&format!(
                    "{context}: expected return {} was {ret}",
                    prefix.min(size) + src_len
                ));
            }
            if buf[size..] != before[size..] {
                return fail(&format!("{context}: wrote at or past index {size}"));
            }
            if prefix < size {
                let appended = src_len.min(size - prefix - 1);
                let mut expected = before[..prefix].to_vec();
                expected.extend_from_slice(&fx.source2[..appended]);
                if strlen(&buf) != expected.len() || buf[..expected.len()] != expected[..] {
                    return fail(&format!("{context}: wrong concatenation"));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert::CaseFailure;
    use crate::backend::CoreBackend;
    use crate::group::Group;

    #[test]
    fn every_case_passes_on_core_backend() {
        let group = group(Rc::new(CoreBackend));
        for (index, name) in group.case_names().into_iter().enumerate() {
            assert_eq!(group.run_case(index), Ok(()), "{name}");
        }
    }

    /// Treats the whole slice as capacity once a terminator is found.
    struct IgnoresSize;

    impl BoundedStrings for IgnoresSize {
        fn strlcpy(&self, dest: &mut [u8], src: &[u8], size: usize) -> usize {
            libcheck_core::string::strlcpy(dest, src, size)
        }

        fn strlcat(&self, dest: &mut [u8], src: &[u8], size: usize) -> usize {
            let size = if libcheck_core::string::strnlen(dest, size) < size {
                dest.len()
            } else {
                size
            };
            libcheck_core::string::strlcat(dest, src, size)
        }
    }

    fn run_named(backend: Rc<dyn BoundedStrings>, name: &str) -> CaseResult {
        let group = group(backend);
        let index = group
            .case_names()
            .iter()
            .position(|n| *n == name)
            .unwrap();
        group.run_case(index)
    }

    #[test]
    fn overrunning_capacity_is_caught() {
        let err = run_named(Rc::new(IgnoresSize), "strlcat_capacity_below_buffer").unwrap_err();
        assert!(matches!(err, CaseFailure::StringMismatch { .. }), "{err}");

        let err = run_named(Rc::new(IgnoresSize), "strlcat_bounds_all_sizes").unwrap_err();
        assert!(err.to_string().contains("prefix=0 size=1"), "{err}");
    }

    #[test]
    fn full_capacity_cases_cannot_see_overrun() {
        for name in [
            "strlcat_fullconcat_empty",
            "strlcat_fullconcat_part",
            "strlcat_exact_fit",
            "strlcat_partconcat_overflow",
            "strlcat_onelength",
            "strlcat_zerolength",
        ] {
            assert_eq!(run_named(Rc::new(IgnoresSize), name), Ok(()), "{name}");
        }
    }
}
