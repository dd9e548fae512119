//! Iterators over [`List`](super::List).

use core::{
    fmt,
    iter::FusedIterator,
    ptr,
    slice,
};

use super::raw::RawBuf;

/// Borrowing iterator, see [`List::iter`](super::List::iter).
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slice: &'a [T]) -> Self {
        Self {
            inner: slice.iter(),
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        self.inner.nth(n)
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}

/// Mutably borrowing iterator, see [`List::iter_mut`](super::List::iter_mut).
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slice: &'a mut [T]) -> Self {
        Self {
            inner: slice.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.inner.as_slice()).finish()
    }
}

/// Owning iterator, see [`List::into_iter`](super::List::into_iter).
///
/// Takes over the list's buffer. Elements that are never yielded are
/// dropped together with the iterator.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    // Live slots are [start, end).
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: RawBuf<T>, len: usize) -> Self {
        Self {
            buf,
            start: 0,
            end: len,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [start, end) are initialized and owned by `self`.
        unsafe { slice::from_raw_parts(self.buf.ptr().add(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start` is a live slot; bumping `start` gives up ownership of it.
        let value = unsafe { ptr::read(self.buf.ptr().add(self.start)) };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: `end` was the last live slot and is no longer counted as one.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.end)) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [T] = ptr::slice_from_raw_parts_mut(
            // SAFETY: `start <= end <= cap`.
            unsafe { self.buf.ptr().add(self.start) },
            self.end - self.start,
        );
        // SAFETY: the remaining slots are initialized and dropped exactly once here;
        // `buf` frees the allocation right after.
        unsafe { ptr::drop_in_place(remaining) }
    }
}
