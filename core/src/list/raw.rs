//! Owned element storage backing [`List`](super::List).
//!
//! `RawBuf` knows how many slots it has, never how many are initialized.
//! Callers track the live prefix and must pass it to [`RawBuf::reallocate`].

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use core::{
    marker::PhantomData,
    mem,
    ptr::{self, NonNull},
};

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// RawBuf owns its slots exactly like `Box<[T]>` would.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        if cap == 0 {
            return Self::new();
        }
        Self {
            ptr: Self::allocate(cap),
            cap,
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Moves the first `len` slots into a fresh allocation of `new_cap` slots
    /// and frees the old one.
    ///
    /// # Safety
    ///
    /// `len <= self.cap()`, `len <= new_cap`, and slots `[0, len)` must be
    /// initialized. Every pointer previously derived from [`RawBuf::ptr`] is
    /// dangling afterwards.
    pub unsafe fn reallocate(&mut self, len: usize, new_cap: usize) {
        debug_assert!(len <= self.cap);
        debug_assert!(len <= new_cap);
        tracing::trace!(old_cap = self.cap, new_cap, len, "reallocating list buffer");

        let new_ptr = if new_cap == 0 {
            NonNull::dangling()
        } else {
            Self::allocate(new_cap)
        };

        // SAFETY: both allocations hold at least `len` slots and do not overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len);
        }
        self.deallocate();

        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    /// Frees the allocation without touching its contents.
    ///
    /// Elements still living in the buffer are leaked, so callers drop them first.
    pub fn release(&mut self) {
        if self.cap != 0 {
            tracing::trace!(old_cap = self.cap, "releasing list buffer");
        }
        self.deallocate();
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    fn layout(cap: usize) -> Layout {
        Layout::array::<T>(cap).expect("capacity overflow")
    }

    fn allocate(cap: usize) -> NonNull<T> {
        if Self::IS_ZST {
            return NonNull::dangling();
        }
        let layout = Self::layout(cap);
        // SAFETY: `cap > 0` and `T` is not zero-sized, so the layout is non-empty.
        let ptr = unsafe { alloc(layout) };
        match NonNull::new(ptr.cast::<T>()) {
            Some(ptr) => ptr,
            None => handle_alloc_error(layout),
        }
    }

    fn deallocate(&mut self) {
        if self.cap == 0 || Self::IS_ZST {
            return;
        }
        // SAFETY: `ptr` came from `allocate(self.cap)` with this exact layout.
        unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), Self::layout(self.cap)) }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.deallocate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_allocate() {
        let buf = RawBuf::<u64>::new();
        assert_eq!(buf.cap(), 0);
        assert_eq!(buf.ptr(), NonNull::dangling().as_ptr());
    }

    #[test]
    fn with_capacity_zero_does_not_allocate() {
        let buf = RawBuf::<u64>::with_capacity(0);
        assert_eq!(buf.cap(), 0);
    }

    #[test]
    fn reallocate_keeps_prefix() {
        let mut buf = RawBuf::<u32>::with_capacity(2);
        unsafe {
            buf.ptr().write(7);
            buf.ptr().add(1).write(8);
            buf.reallocate(2, 10);
        }
        assert_eq!(buf.cap(), 10);
        let prefix = unsafe { core::slice::from_raw_parts(buf.ptr(), 2) };
        assert_eq!(prefix, &[7, 8]);
    }

    #[test]
    fn reallocate_to_zero_releases() {
        let mut buf = RawBuf::<u32>::with_capacity(4);
        unsafe { buf.reallocate(0, 0) };
        assert_eq!(buf.cap(), 0);
    }

    #[test]
    fn release_resets() {
        let mut buf = RawBuf::<String>::with_capacity(3);
        buf.release();
        assert_eq!(buf.cap(), 0);
        // Releasing twice is harmless.
        buf.release();
        assert_eq!(buf.cap(), 0);
    }

    #[test]
    fn zero_sized_slots() {
        let mut buf = RawBuf::<()>::with_capacity(5);
        assert_eq!(buf.cap(), 5);
        unsafe { buf.reallocate(0, 100) };
        assert_eq!(buf.cap(), 100);
    }
}
