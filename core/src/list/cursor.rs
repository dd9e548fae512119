//! Random-access cursors over a [`List`](super::List).
//!
//! A cursor is a position in `[begin, end]` of the list it was issued from.
//! It can step in both directions, jump by any signed offset, measure the
//! distance to another cursor, and be compared with cursors from the same list.
//!
//! # Invalidation
//!
//! A cursor is only meaningful until the list changes shape: any reallocation
//! or shift (`append`, `insert`, `extend`, `remove`, `pop`, `clear`) moves the
//! slots it points at. Cursors borrow the list, so the borrow checker rejects
//! such a mutation while a cursor is alive instead of leaving it dangling.
//!
//! Positions are not bounds checked when moved. Dereferencing re-derives the
//! element from the borrowed slice, so a position outside `[begin, end)`
//! yields `None` rather than reading out of bounds.

use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
    ptr,
};

/// Read-only cursor. Cheap to copy.
pub struct Cursor<'a, T> {
    slice: &'a [T],
    pos: isize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(slice: &'a [T], pos: usize) -> Self {
        Self {
            slice,
            pos: pos as isize,
        }
    }

    /// Current position, counted from `begin`. Negative once moved before it.
    pub fn position(&self) -> isize {
        self.pos
    }

    /// True when the cursor sits exactly at `end`.
    pub fn is_end(&self) -> bool {
        self.pos == self.slice.len() as isize
    }

    /// Element under the cursor, `None` outside `[begin, end)`.
    pub fn get(&self) -> Option<&'a T> {
        self.peek(0)
    }

    /// Element `offset` slots away from the cursor, without moving it.
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        let index = usize::try_from(self.pos.checked_add(offset)?).ok()?;
        self.slice.get(index)
    }

    /// Steps one slot towards `end`.
    pub fn move_next(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    /// Steps one slot towards `begin`.
    pub fn move_prev(&mut self) -> &mut Self {
        self.pos -= 1;
        self
    }

    /// Signed number of slots from `other` to `self`.
    pub fn distance(&self, other: &Self) -> isize {
        self.pos - other.pos
    }

    fn same_list(&self, other: &Self) -> bool {
        ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()) && self.slice.len() == other.slice.len()
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list(other) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

/// Cursors from different lists are unordered.
impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_list(other).then(|| self.pos.cmp(&other.pos))
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;

    fn add(mut self, offset: isize) -> Self {
        self += offset;
        self
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    fn add_assign(&mut self, offset: isize) {
        self.pos += offset;
    }
}

impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;

    fn sub(mut self, offset: isize) -> Self {
        self -= offset;
        self
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    fn sub_assign(&mut self, offset: isize) {
        self.pos -= offset;
    }
}

impl<'a, T> Sub for Cursor<'a, T> {
    type Output = isize;

    fn sub(self, other: Cursor<'a, T>) -> isize {
        self.distance(&other)
    }
}

/// Read-write cursor. Holds the list's unique borrow.
pub struct CursorMut<'a, T> {
    slice: &'a mut [T],
    pos: isize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(slice: &'a mut [T], pos: usize) -> Self {
        Self {
            slice,
            pos: pos as isize,
        }
    }

    pub fn position(&self) -> isize {
        self.pos
    }

    pub fn is_end(&self) -> bool {
        self.pos == self.slice.len() as isize
    }

    pub fn get(&self) -> Option<&T> {
        self.index().map(|i| &self.slice[i])
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.index().map(|i| &mut self.slice[i])
    }

    /// Overwrites the element under the cursor, returning the old value.
    ///
    /// Hands `value` back unchanged when the cursor is outside `[begin, end)`.
    pub fn replace(&mut self, value: T) -> Result<T, T> {
        match self.get_mut() {
            Some(slot) => Ok(core::mem::replace(slot, value)),
            None => Err(value),
        }
    }

    pub fn move_next(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    pub fn move_prev(&mut self) -> &mut Self {
        self.pos -= 1;
        self
    }

    /// Moves the cursor by a signed offset.
    pub fn seek(&mut self, offset: isize) -> &mut Self {
        self.pos += offset;
        self
    }

    /// Read-only view at the same position, e.g. to measure distances.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            slice: &*self.slice,
            pos: self.pos,
        }
    }

    fn index(&self) -> Option<usize> {
        usize::try_from(self.pos)
            .ok()
            .filter(|&i| i < self.slice.len())
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("pos", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}
