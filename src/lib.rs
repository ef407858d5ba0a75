#![deny(unused_imports)]
#![deny(missing_docs)]
#![cfg_attr(all(feature = "bench", test), feature(test))]

//! An addressable Fibonacci heap implementation for Rust.
//!
//! Addressable heaps return handles to stored elements that make it possible
//! to query and edit them. For example this allows for the `decrease_key(h: Handle)` method
//! that decreases the key (priority) of the element that is associated with the
//! given handle.
//!
//! | insert | find_min | extract_min      | decrease_key | delete           | merge  |
//! |--------|----------|------------------|--------------|------------------|--------|
//! | *O*(1) | *O*(1)   | *O*(log *n*) am. | *O*(1) am.   | *O*(log *n*) am. | *O*(1) |
//!
//! This implementation stores elements within a `UniqueStash` that allocates elements
//! densely within an array and stamps every slot with a generation. Handles of removed
//! elements are therefore detected and reported as `Error::InvalidHandle`.
//!
//! It is possible to use custom types as the underlying `Key` type by implementing
//! the `Key` trait.
//!
//! ```
//! use addressable_fibonacci_heap::FibonacciHeap;
//!
//! let mut heap = FibonacciHeap::new();
//! let a = heap.insert(5, "a");
//! heap.insert(3, "b");
//! heap.decrease_key(a, 1).unwrap();
//! assert_eq!(heap.find_min(), Ok((&1, &"a")));
//! assert_eq!(heap.extract_min(), Ok((1, "a")));
//! assert_eq!(heap.extract_min(), Ok((3, "b")));
//! assert!(heap.is_empty());
//! ```

#[cfg(all(feature = "bench", test))]
extern crate test;

mod consolidate;
mod cut;
mod error;
mod handle;
mod heap;
mod node;
mod ring;

pub use crate::error::{Error, Result};
pub use crate::handle::{Handle, HandleMap};
pub use crate::heap::{DefaultFibonacciHeap, DrainMin, FibonacciHeap};

/// Represents a trait for keys within an addressable Fibonacci heap.
///
/// A user can use custom type for the key type by implementing this trait.
///
/// This trait is implicitely implemented already for all types that
/// are `Copy`, `PartialOrd` and `Ord`.
pub trait Key: Copy + PartialOrd + Ord {}
impl<T> Key for T where T: Copy + PartialOrd + Ord {}
