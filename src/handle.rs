use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use stash::Tag;

static NEXT_HEAP_ID: AtomicUsize = AtomicUsize::new(0);

/// Identifies one `FibonacciHeap` instance for the lifetime of the process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct HeapId(usize);

impl HeapId {
	pub(crate) fn fresh() -> Self {
		HeapId(NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// A handle to access stored elements within an addressable Fibonacci heap.
///
/// Handles are local to the heap that created them. Once the element is
/// removed, or the heap was merged into another one, every operation taking
/// the handle reports `Error::InvalidHandle`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Handle {
	heap: HeapId,
	tag: Tag,
}

impl Handle {
	#[inline]
	pub(crate) fn new(heap: HeapId, tag: Tag) -> Self {
		Handle { heap, tag }
	}

	/// Returns the arena tag if this handle was issued by the heap `id`.
	#[inline]
	pub(crate) fn tag_for(self, id: HeapId) -> Option<Tag> {
		if self.heap == id {
			Some(self.tag)
		} else {
			None
		}
	}
}

/// Translates handles of a heap that was merged into another one.
///
/// Returned by `FibonacciHeap::merge`.
#[derive(Debug, Clone)]
pub struct HandleMap {
	from: HeapId,
	into: HeapId,
	tags: HashMap<Tag, Tag>,
}

impl HandleMap {
	pub(crate) fn new(from: HeapId, into: HeapId, tags: HashMap<Tag, Tag>) -> Self {
		HandleMap { from, into, tags }
	}

	/// Returns the handle that now refers to the element `old` referred to
	/// before the merge, or `None` if `old` did not belong to the merged heap.
	pub fn get(&self, old: Handle) -> Option<Handle> {
		old.tag_for(self.from)
			.and_then(|tag| self.tags.get(&tag))
			.map(|&tag| Handle::new(self.into, tag))
	}

	/// Returns the number of relocated elements.
	pub fn len(&self) -> usize {
		self.tags.len()
	}

	/// Returns true if no element was relocated.
	pub fn is_empty(&self) -> bool {
		self.tags.is_empty()
	}
}
