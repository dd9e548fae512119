#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Core value types: a growable [`List`] and an immutable [`ByteStr`].
//!
//! Both types own exactly one heap allocation at a time and manage it by
//! hand instead of delegating to `Vec` or `String`. The crate is `no_std`
//! unless the `std` feature is enabled; it only needs `alloc`.

extern crate alloc;

pub mod bytes;
pub mod error;
pub mod list;

pub use bytes::ByteStr;
pub use error::{Error, Result};
pub use list::{Cursor, CursorMut, IntoIter, Iter, IterMut, List};
