//! `string_strlcpy`: bounded copy of `"abcd"` into a `"xxxx"` sentinel buffer.

use std::rc::Rc;

use libcheck_core::string::strlen;

use crate::assert::{
    CaseResult, assert_equal_bytes, assert_equal_int, assert_equal_string, fail,
};
use crate::backend::BoundedStrings;
use crate::group::TestGroup;

pub const GROUP: &str = "string_strlcpy";

pub const SRC_SIZE: usize = 5;
pub const DEST_SIZE: usize = 5;

/// Per-case state, rebuilt before every case.
pub struct StrlcpyFixture {
    backend: Rc<dyn BoundedStrings>,
    pub source: [u8; SRC_SIZE],
    pub dest: [u8; DEST_SIZE],
}

impl StrlcpyFixture {
    #[must_use]
    pub fn new(backend: Rc<dyn BoundedStrings>) -> Self {
        Self {
            backend,
            source: *b"abcd\0",
            dest: *b"xxxx\0",
        }
    }

    fn copy(&mut self, size: usize) -> usize {
        self.backend.strlcpy(&mut self.dest, &self.source, size)
    }
}

/// Build the group against `backend`.
#[must_use]
pub fn group(backend: Rc<dyn BoundedStrings>) -> TestGroup<StrlcpyFixture> {
    TestGroup::new(GROUP, move || StrlcpyFixture::new(Rc::clone(&backend)))
        .case("strlcpy_fullcopy", strlcpy_fullcopy)
        .case("strlcpy_shorter", strlcpy_shorter)
        .case("strlcpy_longer", strlcpy_longer)
        .case("strlcpy_short_source", strlcpy_short_source)
        .case("strlcpy_onelength", strlcpy_onelength)
        .case("strlcpy_zerolength", strlcpy_zerolength)
        .case("strlcpy_bounds_all_sizes", strlcpy_bounds_all_sizes)
}

fn strlcpy_fullcopy(fx: &mut StrlcpyFixture) -> CaseResult {
    let ret = fx.copy(SRC_SIZE);
    assert_equal_int(SRC_SIZE - 1, ret)?;
    assert_equal_string(&fx.source, &fx.dest)
}

fn strlcpy_shorter(fx: &mut StrlcpyFixture) -> CaseResult {
    let ret = fx.copy(SRC_SIZE - 2);
    assert_equal_string(b"ab", &fx.dest)?;
    assert_equal_int(SRC_SIZE - 1, ret)?;
    // only `size` bytes may change
    assert_equal_bytes(b"ab\0x\0", &fx.dest)
}

fn strlcpy_longer(fx: &mut StrlcpyFixture) -> CaseResult {
    fx.source[3] = 0;
    let ret = fx.copy(SRC_SIZE);
    assert_equal_string(b"abc", &fx.dest)?;
    assert_equal_int(SRC_SIZE - 2, ret)
}

fn strlcpy_short_source(fx: &mut StrlcpyFixture) -> CaseResult {
    fx.source[2] = 0;
    let ret = fx.copy(SRC_SIZE - 2);
    assert_equal_string(b"ab", &fx.dest)?;
    assert_equal_int(2, ret)
}

fn strlcpy_onelength(fx: &mut StrlcpyFixture) -> CaseResult {
    let ret = fx.copy(1);
    assert_equal_string(b"", &fx.dest)?;
    assert_equal_int(SRC_SIZE - 1, ret)?;
    assert_equal_bytes(b"\0xxx\0", &fx.dest)
}

fn strlcpy_zerolength(fx: &mut StrlcpyFixture) -> CaseResult {
    let ret = fx.copy(0);
    assert_equal_string(b"xxxx", &fx.dest)?;
    assert_equal_int(SRC_SIZE - 1, ret)?;
    assert_equal_bytes(b"xxxx\0", &fx.dest)
}

/// Every source length against every capacity up to the buffer size.
fn strlcpy_bounds_all_sizes(fx: &mut StrlcpyFixture) -> CaseResult {
    for src_len in 0..SRC_SIZE {
        let mut source = fx.source;
        source[src_len] = 0;
        for size in 0..=DEST_SIZE {
            let mut dest = [b'x'; DEST_SIZE];
            let ret = fx.backend.strlcpy(&mut dest, &source, size);
            let context = format!("src_len={src_len} size={size}");

            if ret != src_len {
                return fail(&format!("{context}: expected return {src_len} was {ret}"));
            }
            if dest[size..].iter().any(|&b| b != b'x') {
                return fail(&format!("{context}: wrote at or past index {size}"));
            }
            if size > 0 {
                let copied = src_len.min(size - 1);
                if strlen(&dest) != copied || dest[..copied] != source[..copied] {
                    return fail(&format!("{context}: wrong copy"));
                }
            }
        }
    }
    Ok(())
}
