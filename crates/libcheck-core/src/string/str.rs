//! String operations: strlen, strnlen, strlcpy, strlcat.
//!
//! These are safe Rust implementations operating on byte slices that represent
//! NUL-terminated C strings. A NUL byte (`0x00`) marks the logical end of the
//! string; a slice without one ends at its length.
//!
//! The `size` argument of the bounded functions is the capacity the caller
//! claims for `dest`, terminator included. It is clamped to `dest.len()`, so a
//! capacity larger than the slice cannot cause an out-of-bounds write.

/// Returns the length of a NUL-terminated byte string (not counting the NUL).
///
/// Equivalent to C `strlen`. If no NUL is found, returns the full slice length.
pub fn strlen(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

/// Returns the length of `s`, looking at no more than `maxlen` bytes.
///
/// Equivalent to POSIX `strnlen`.
pub fn strnlen(s: &[u8], maxlen: usize) -> usize {
    let limit = maxlen.min(s.len());
    strlen(&s[..limit])
}

/// Copies `src` into `dest`, writing at most `size` bytes including the NUL.
///
/// Equivalent to BSD `strlcpy`. At most `size - 1` bytes are copied and the
/// result is always NUL-terminated, unless `size` is zero, in which case
/// `dest` is left untouched.
///
/// Returns `strlen(src)`. A return value `>= size` means the copy was
/// truncated.
pub fn strlcpy(dest: &mut [u8], src: &[u8], size: usize) -> usize {
    let src_len = strlen(src);
    let size = size.min(dest.len());

    if size == 0 {
        return src_len;
    }

    let copy_len = src_len.min(size - 1);
    dest[..copy_len].copy_from_slice(&src[..copy_len]);
    dest[copy_len] = 0;

    src_len
}

/// Appends `src` to the NUL-terminated string in `dest`, never writing past
/// `size` bytes in total.
///
/// Equivalent to BSD `strlcat`. At most `size - strlen(dest) - 1` bytes are
/// appended and the result is NUL-terminated. When no NUL occurs within the
/// first `size` bytes of `dest`, nothing is written.
///
/// Returns the length of the string it tried to create:
/// `min(strlen(dest), size) + strlen(src)`.
pub fn strlcat(dest: &mut [u8], src: &[u8], size: usize) -> usize {
    let size = size.min(dest.len());
    let dest_len = strnlen(dest, size);
    let src_len = strlen(src);

    if dest_len == size {
        return size + src_len;
    }

    let copy_len = src_len.min(size - dest_len - 1);
    dest[dest_len..dest_len + copy_len].copy_from_slice(&src[..copy_len]);
    dest[dest_len + copy_len] = 0;

    dest_len + src_len
}
