use thiserror::Error;

/// Errors that can be caused while using `FibonacciHeap`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// Caused by `find_min` or `extract_min` on a heap without elements.
	#[error("the heap is empty")]
	EmptyHeap,

	/// Caused when using `decrease_key` method with a `new_key` that is greater than the old one.
	#[error("new key is greater than the current key")]
	InvalidKeyIncrease,

	/// Caused by a handle whose element was already removed or that belongs to another heap.
	#[error("handle does not refer to a live element of this heap")]
	InvalidHandle,
}

/// Generic `Result` type for `FibonacciHeap` methods.
pub type Result<T> = ::std::result::Result<T, Error>;
