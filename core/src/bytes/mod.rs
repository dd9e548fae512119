//! `ByteStr`: an immutable, heap-allocated byte string.
//!
//! Every instance owns exactly one allocation of `len + 1` bytes, the content
//! followed by a NUL terminator:
//!
//! ```text
//! ptr ──▶ [ b0 | b1 | ... | b(len-1) | 0 ]
//! ```
//!
//! Nothing mutates a `ByteStr` in place. Operations that produce text
//! (`upper`, `lower`, `substr`, `replace`, `+`) return a fresh instance sized
//! exactly for its content; `+=` swaps in such an instance.
//!
//! Bytes are opaque: case mapping is ASCII-only and no UTF-8 validity is
//! assumed.
//!
//! # Example
//!
//! ```
//! use pdt_core::ByteStr;
//!
//! let greeting = ByteStr::from("Hello") + &ByteStr::from(", world");
//! assert_eq!(greeting.upper(), "HELLO, WORLD");
//! assert_eq!(greeting.find("o", 5), Ok(Some(8)));
//! assert_eq!(greeting.to_string(), "\"Hello, world\"");
//! ```


use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::Copied,
    ops::{Add, AddAssign, Index},
    ptr::{self, NonNull},
    slice,
};

use crate::{
    error::{Error, Result},
    list::List,
};

pub struct ByteStr {
    ptr: NonNull<u8>,
    len: usize,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(ByteStr, [usize; 2]);

// ByteStr exclusively owns its bytes and never mutates them through `&self`.
unsafe impl Send for ByteStr {}
unsafe impl Sync for ByteStr {}

impl ByteStr {
    /// The empty string. Still holds a one-byte allocation for the terminator.
    pub fn new() -> Self {
        Self::from_bytes(&[])
    }

    /// Copies `bytes` into a fresh allocation.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::concat(&[bytes])
    }

    /// Allocates exactly the summed length of `parts` and copies them in order.
    fn concat(parts: &[&[u8]]) -> Self {
        let len = parts
            .iter()
            .try_fold(0usize, |total, part| total.checked_add(part.len()))
            .expect("capacity overflow");
        let out = Self::alloc_len(len);
        let mut offset = 0;
        for part in parts {
            // SAFETY: `offset + part.len() <= len`, and the source never aliases
            // the allocation we just made.
            unsafe {
                ptr::copy_nonoverlapping(part.as_ptr(), out.ptr.as_ptr().add(offset), part.len());
            }
            offset += part.len();
        }
        out
    }

    /// Allocates `len + 1` bytes and writes the terminator. Content bytes are
    /// uninitialized until the caller fills them.
    fn alloc_len(len: usize) -> Self {
        let layout = Self::layout(len);
        // SAFETY: the layout is at least one byte.
        let ptr = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(ptr) else {
            handle_alloc_error(layout)
        };
        // SAFETY: `len` is the last byte of the allocation.
        unsafe { ptr.as_ptr().add(len).write(0) };
        Self { ptr, len }
    }

    fn layout(len: usize) -> Layout {
        let size = len.checked_add(1).expect("capacity overflow");
        Layout::array::<u8>(size).expect("capacity overflow")
    }

    /// Number of content bytes, excluding the terminator.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: the first `len` bytes are initialized and owned by `self`.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The content followed by its NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        // SAFETY: the allocation is `len + 1` initialized bytes.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len + 1) }
    }

    fn as_mut_bytes(&mut self) -> &mut [u8] {
        // SAFETY: as in `as_bytes`; only used on freshly built instances.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Byte at `index`.
    pub fn get(&self, index: usize) -> Result<u8> {
        Error::check_index(index, self.len)?;
        Ok(self.as_bytes()[index])
    }

    pub fn iter(&self) -> Copied<slice::Iter<'_, u8>> {
        self.as_bytes().iter().copied()
    }

    /// Copy with ASCII `a-z` mapped to `A-Z`.
    pub fn upper(&self) -> ByteStr {
        let mut out = self.clone();
        out.as_mut_bytes().make_ascii_uppercase();
        out
    }

    /// Copy with ASCII `A-Z` mapped to `a-z`.
    pub fn lower(&self) -> ByteStr {
        let mut out = self.clone();
        out.as_mut_bytes().make_ascii_lowercase();
        out
    }

    /// First index `>= start` where `needle` occurs.
    ///
    /// Fails when `start >= len`. An empty needle matches at `start`.
    pub fn find(&self, needle: impl AsRef<[u8]>, start: usize) -> Result<Option<usize>> {
        Error::check_index(start, self.len)?;
        Ok(self.find_from(needle.as_ref(), start))
    }

    fn find_from(&self, needle: &[u8], start: usize) -> Option<usize> {
        let haystack = self.as_bytes();
        if needle.len() > haystack.len().saturating_sub(start) {
            return None;
        }
        (start..=haystack.len() - needle.len()).find(|&i| &haystack[i..i + needle.len()] == needle)
    }

    /// `len` bytes starting at `start`, as a new string.
    ///
    /// Valid when `start < self.len()` and the window ends at or before the
    /// end of the string.
    pub fn substr(&self, start: usize, len: usize) -> Result<ByteStr> {
        if start >= self.len || len > self.len - start {
            return Err(Error::InvalidRange {
                start,
                len,
                total: self.len,
            });
        }
        Ok(Self::from_bytes(&self.as_bytes()[start..start + len]))
    }

    /// Copy with every non-overlapping occurrence of `old`, scanned left to
    /// right, replaced by `new`. An empty `old` matches nothing.
    pub fn replace(&self, old: impl AsRef<[u8]>, new: impl AsRef<[u8]>) -> ByteStr {
        let (old, new) = (old.as_ref(), new.as_ref());
        if old.is_empty() {
            return self.clone();
        }

        let bytes = self.as_bytes();
        let mut segments = List::new();
        let mut last = 0;
        while let Some(index) = self.find_from(old, last) {
            segments.append(&bytes[last..index]);
            segments.append(new);
            last = index + old.len();
        }
        segments.append(&bytes[last..]);
        Self::concat(segments.as_slice())
    }

    pub fn contains(&self, needle: impl AsRef<[u8]>) -> bool {
        self.find_from(needle.as_ref(), 0).is_some()
    }

    pub fn starts_with(&self, prefix: impl AsRef<[u8]>) -> bool {
        self.as_bytes().starts_with(prefix.as_ref())
    }

    pub fn ends_with(&self, suffix: impl AsRef<[u8]>) -> bool {
        self.as_bytes().ends_with(suffix.as_ref())
    }

    /// Number of non-overlapping occurrences of `needle`.
    ///
    /// The empty needle occurs between every pair of bytes and at both ends.
    pub fn count(&self, needle: impl AsRef<[u8]>) -> usize {
        let needle = needle.as_ref();
        if needle.is_empty() {
            return self.len + 1;
        }
        let mut count = 0;
        let mut from = 0;
        while let Some(index) = self.find_from(needle, from) {
            count += 1;
            from = index + needle.len();
        }
        count
    }
}

impl Default for ByteStr {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ByteStr {
    fn clone(&self) -> Self {
        Self::from_bytes(self.as_bytes())
    }
}

impl Drop for ByteStr {
    fn drop(&mut self) {
        // SAFETY: `ptr` came from `alloc_len(self.len)` with this exact layout.
        unsafe { dealloc(self.ptr.as_ptr(), Self::layout(self.len)) }
    }
}

impl From<&[u8]> for ByteStr {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for ByteStr {
    fn from(bytes: &[u8; N]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&str> for ByteStr {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl AsRef<[u8]> for ByteStr {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for ByteStr {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteStr {}

impl PartialEq<[u8]> for ByteStr {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for ByteStr {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialOrd for ByteStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteStr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for ByteStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

impl Index<usize> for ByteStr {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        if let Err(err) = Error::check_index(index, self.len) {
            panic!("{err}");
        }
        &self.as_bytes()[index]
    }
}

impl Add<&ByteStr> for &ByteStr {
    type Output = ByteStr;

    fn add(self, other: &ByteStr) -> ByteStr {
        ByteStr::concat(&[self.as_bytes(), other.as_bytes()])
    }
}

impl Add<&ByteStr> for ByteStr {
    type Output = ByteStr;

    fn add(self, other: &ByteStr) -> ByteStr {
        &self + other
    }
}

impl Add for ByteStr {
    type Output = ByteStr;

    fn add(self, other: ByteStr) -> ByteStr {
        &self + &other
    }
}

impl AddAssign<&ByteStr> for ByteStr {
    fn add_assign(&mut self, other: &ByteStr) {
        *self = &*self + other;
    }
}

impl AddAssign for ByteStr {
    fn add_assign(&mut self, other: ByteStr) {
        *self += &other;
    }
}

/// Writes `bytes`, showing valid UTF-8 as text and anything else as `\xNN`.
fn write_lossless(f: &mut fmt::Formatter<'_>, bytes: &[u8], escape: bool) -> fmt::Result {
    for chunk in bytes.utf8_chunks() {
        if escape {
            write!(f, "{}", chunk.valid().escape_debug())?;
        } else {
            f.write_str(chunk.valid())?;
        }
        for byte in chunk.invalid() {
            write!(f, "\\x{byte:02X}")?;
        }
    }
    Ok(())
}

/// Formats as the content wrapped in double quotes, e.g. `"foo"`.
impl fmt::Display for ByteStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        write_lossless(f, self.as_bytes(), false)?;
        f.write_str("\"")
    }
}

impl fmt::Debug for ByteStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        write_lossless(f, self.as_bytes(), true)?;
        f.write_str("\"")
    }
}
