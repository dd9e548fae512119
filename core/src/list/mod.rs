//! `List<T>`: a growable array over a hand-managed buffer.
//!
//! `List` keeps its elements in one contiguous allocation:
//!
//! ```text
//! ptr ──▶ [ e0 | e1 | ... | e(len-1) | ~~~ | ~~~ ]
//!          └──────── live ──────────┘└ spare ┘
//!          └─────────────── capacity ────────────┘
//! ```
//!
//! - `len <= capacity` at all times; `capacity == 0` means nothing is allocated.
//! - Before a slot is added, the list grows by [`policy::grow`] if it is full.
//! - Before a slot is removed by `pop`/`pop_at`/`remove`, the list may shrink
//!   by [`policy::shrink`]. Capacity is not guaranteed to track `len` tightly.
//! - Insertion and removal shift the tail so untouched elements keep their order.
//!
//! # Example
//!
//! ```
//! use pdt_core::List;
//!
//! let mut list = List::new();
//! list.append(1);
//! list.append(2);
//! list.append(3);
//! assert_eq!(list.pop_at(1), Ok(2));
//! assert_eq!(list.to_string(), "{1, 3}");
//! ```

mod cursor;
mod iter;
pub mod policy;
mod raw;


use core::{
    fmt,
    hash::{Hash, Hasher},
    mem::ManuallyDrop,
    ops::{Index, IndexMut},
    ptr, slice,
};

use crate::error::{Error, Result};

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter, IterMut};
use raw::RawBuf;

pub struct List<T> {
    buf: RawBuf<T>,
    len: usize,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(List<u8>, [usize; 3]);

impl<T> List<T> {
    /// Creates an empty list. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates an empty list with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
        }
    }

    /// Number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.cap()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_not_empty(&self) -> bool {
        self.len > 0
    }

    /// Drops every element and releases the allocation.
    pub fn clear(&mut self) {
        let elems: *mut [T] = ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len);
        // Reset first so a panicking destructor cannot cause a double drop.
        self.len = 0;
        // SAFETY: the first `len` slots were live and are no longer reachable.
        unsafe { ptr::drop_in_place(elems) };
        self.buf.release();
    }

    /// Places `value` after the last element, growing first if the list is full.
    pub fn append(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow(1);
        }
        // SAFETY: `len < capacity` after growing.
        unsafe { ptr::write(self.buf.ptr().add(self.len), value) };
        self.len += 1;
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends. Fails when `index > len`.
    pub fn insert(&mut self, value: T, index: usize) -> Result<()> {
        if index > self.len {
            return Err(Error::index(index, self.len));
        }
        if self.len == self.capacity() {
            self.grow(1);
        }
        // SAFETY: `index <= len < capacity`, so both the shifted tail and the
        // new slot fit inside the allocation.
        unsafe {
            let slot = self.buf.ptr().add(index);
            if index < self.len {
                ptr::copy(slot, slot.add(1), self.len - index);
            }
            ptr::write(slot, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the last element, or `None` if the list is empty.
    ///
    /// May shrink the allocation first.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.try_shrink();
        self.len -= 1;
        // SAFETY: slot `len` was live and is now past the end.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Removes and returns the element at `index`, shifting `[index + 1, len)`
    /// one slot left.
    ///
    /// May shrink the allocation first. Fails when `index >= len`.
    pub fn pop_at(&mut self, index: usize) -> Result<T> {
        Error::check_index(index, self.len)?;
        self.try_shrink();
        // SAFETY: `index < len`; the read slot is overwritten by the shift.
        let value = unsafe {
            let slot = self.buf.ptr().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            value
        };
        self.len -= 1;
        Ok(value)
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        let elems = self.as_mut_slice();
        let (mut lo, mut hi) = (0, elems.len());
        while lo + 1 < hi {
            hi -= 1;
            elems.swap(lo, hi);
            lo += 1;
        }
    }

    /// Read access to element `index`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.get(index).ok_or(Error::index(index, self.len))
    }

    /// Write access to element `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.get_mut(index).ok_or(Error::index(index, len))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized; the pointer is dangling-but-aligned when empty.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, plus `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Cursor at the first slot (`begin`).
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Cursor one past the last element (`end`).
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len)
    }

    /// Read-write cursor at `begin`.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), 0)
    }

    #[cold]
    fn grow(&mut self, min_increment: usize) {
        let new_cap = policy::grow(self.capacity(), min_increment);
        // SAFETY: `new_cap >= capacity >= len`.
        unsafe { self.buf.reallocate(self.len, new_cap) };
    }

    /// Makes room for `additional` more elements with at most one reallocation.
    fn reserve(&mut self, additional: usize) {
        let headroom = self.capacity() - self.len;
        if additional > headroom {
            self.grow(additional - headroom);
        }
    }

    fn try_shrink(&mut self) {
        if let Some(new_cap) = policy::shrink(self.capacity(), self.len) {
            if new_cap < self.capacity() {
                // SAFETY: the policy only returns capacities above `len`.
                unsafe { self.buf.reallocate(self.len, new_cap) };
            }
        }
    }
}

impl<T: PartialEq> List<T> {
    /// Removes the first element equal to `value`. Does nothing if there is none.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let index = self.index_of(value)?;
        self.pop_at(index).ok()
    }

    /// Number of elements equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.iter().filter(|elem| *elem == value).count()
    }

    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|elem| elem == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T: Clone> List<T> {
    /// Appends a copy of every element of `other`, in order.
    ///
    /// Reallocates at most once. Extending a list with itself cannot be
    /// expressed: `other` is borrowed shared while `self` is borrowed unique.
    pub fn extend_from_list(&mut self, other: &List<T>) {
        self.extend_from_slice(other.as_slice());
    }

    /// Appends a copy of every element of `other`, in order.
    pub fn extend_from_slice(&mut self, other: &[T]) {
        self.reserve(other.len());
        for elem in other {
            // SAFETY: `reserve` left room for all of `other`. `len` is bumped per
            // element so a panicking `clone` leaves the list consistent.
            unsafe { ptr::write(self.buf.ptr().add(self.len), elem.clone()) };
            self.len += 1;
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let elems: *mut [T] = ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len);
        // SAFETY: the live prefix is dropped exactly once; `buf` frees the slots.
        unsafe { ptr::drop_in_place(elems) }
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len);
        list.extend_from_slice(self.as_slice());
        list
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialEq> PartialEq<[T]> for List<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for List<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Formats as `{e1, e2, ...}`.
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str("}")
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Builds a list with `len == capacity == N`.
impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        for value in values {
            // SAFETY: exactly N slots were allocated for N values.
            unsafe { ptr::write(list.buf.ptr().add(list.len), value) };
            list.len += 1;
        }
        list
    }
}

/// Builds a list with `len == capacity == values.len()`.
impl<T: Clone> From<&[T]> for List<T> {
    fn from(values: &[T]) -> Self {
        let mut list = Self::with_capacity(values.len());
        list.extend_from_slice(values);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so ownership of the buffer and its
        // live prefix moves to the iterator.
        let buf = unsafe { ptr::read(&this.buf) };
        IntoIter::new(buf, this.len)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
