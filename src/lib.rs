//! Operational transformation over plain text.
//!
//! An [`OperationSeq`] describes an edit as a run of retains, deletes and
//! inserts. Sequences can be applied to text, inverted for undo, composed
//! when one follows another, and transformed against a concurrent sequence so
//! that every replica converges on the same text. All lengths are counted in
//! unicode scalar values, never in bytes.
//!
//! ```
//! use ot::OperationSeq;
//!
//! let mut left = OperationSeq::new();
//! left.retain(3).insert("def");
//! let mut right = OperationSeq::new();
//! right.retain(3).insert("ghi");
//!
//! let (left_, right_) = left.transform(&right).unwrap();
//! let via_left = right_.apply(&left.apply("abc").unwrap()).unwrap();
//! let via_right = left_.apply(&right.apply("abc").unwrap()).unwrap();
//! assert_eq!(via_left, "abcdefghi");
//! assert_eq!(via_left, via_right);
//! ```

mod apply;
mod compose;
mod error;
mod operation;
mod transform;
mod util;
pub mod wire;

pub use error::{OtError, Result};
pub use operation::{Operation, OperationSeq};
