//! pdt - hand-managed value types: a growable `List<T>` and an immutable `ByteStr`
//!
//! # Overview
//!
//! The two types own their storage directly instead of wrapping `Vec` or
//! `String`:
//!
//! - [`List<T>`]: a contiguous growable array. It grows by half its capacity
//!   when full and opportunistically shrinks to two thirds when popping, see
//!   [`list::policy`].
//! - [`ByteStr`]: an immutable byte string. Every producing operation returns
//!   a fresh, exactly-sized instance.
//!
//! Index and range errors are reported as [`Error`], never silently clamped.
//!
//! # Quick Start
//!
//! ```
//! use pdt::{ByteStr, List};
//!
//! let mut list = List::from([1, 2, 3]);
//! list.insert(0, 0).unwrap();
//! list.remove(&2);
//! assert_eq!(list.to_string(), "{0, 1, 3}");
//! assert!(list.pop_at(10).is_err());
//!
//! let s = ByteStr::from("aXbXc").replace("X", "-");
//! assert_eq!(s, "a-b-c");
//! assert_eq!(s.to_string(), "\"a-b-c\"");
//! ```
//!
//! # Scripts
//!
//! [`script`] runs small list-manipulation programs, one operation per
//! statement, and reports failures with the offending source span:
//!
//! ```
//! use pdt::{List, script::Script};
//!
//! let script = Script::parse("append 4; insert 9 0; pop 1").unwrap();
//! let mut list = List::new();
//! let mut out = Vec::new();
//! script.run(&mut list, &mut out, false).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "4\n");
//! assert_eq!(list.to_string(), "{9}");
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

pub mod script;

// Re-export public API from pdt_core
pub use pdt_core::{
    ByteStr, Cursor, CursorMut, Error, IntoIter, Iter, IterMut, List, Result, bytes, list,
};
