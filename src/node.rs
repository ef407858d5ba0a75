use stash::{Tag, UniqueStash};
use unreachable::UncheckedOptionExt;

use crate::Key;

/// An entry within an addressable Fibonacci heap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry<T, K>
where
	K: Key,
{
	pub(crate) key: K,
	pub(crate) elem: T,
}

impl<T, K> Entry<T, K>
where
	K: Key,
{
	#[inline]
	pub(crate) fn new(key: K, elem: T) -> Self {
		Entry { key, elem }
	}
}

/// A tree node of the heap.
///
/// `left` and `right` link the node into the ring it currently belongs to:
/// either the root list or the child list of `parent`.
/// `None` stands for a link back to the node itself.
#[derive(Debug)]
pub(crate) struct Node<T, K>
where
	K: Key,
{
	pub(crate) entry: Entry<T, K>,
	pub(crate) parent: Option<Tag>,
	pub(crate) child: Option<Tag>,
	pub(crate) left: Option<Tag>,
	pub(crate) right: Option<Tag>,
	pub(crate) degree: usize,
	pub(crate) marked: bool,
}

impl<T, K> Node<T, K>
where
	K: Key,
{
	#[inline]
	pub(crate) fn new_root(entry: Entry<T, K>) -> Self {
		Node {
			entry,
			parent: None,
			child: None,
			left: None,
			right: None,
			degree: 0,
			marked: false,
		}
	}

	#[inline]
	pub(crate) fn is_root(&self) -> bool {
		self.parent.is_none()
	}

	/// Makes this node a ring of its own.
	#[inline]
	pub(crate) fn unlink(&mut self) {
		self.left = None;
		self.right = None;
	}
}

/// Owns every node of a heap.
///
/// Slots carry a generation so that tags of removed nodes are never
/// resolved to a node that later reuses the slot.
pub(crate) struct Arena<T, K>
where
	K: Key,
{
	data: UniqueStash<Node<T, K>>,
}

impl<T, K> Arena<T, K>
where
	K: Key,
{
	pub(crate) fn new() -> Self {
		Arena {
			data: UniqueStash::new(),
		}
	}

	pub(crate) fn with_capacity(capacity: usize) -> Self {
		Arena {
			data: UniqueStash::with_capacity(capacity),
		}
	}

	#[inline]
	pub(crate) fn len(&self) -> usize {
		self.data.len()
	}

	#[inline]
	pub(crate) fn put(&mut self, node: Node<T, K>) -> Tag {
		self.data.put(node)
	}

	/// Checked lookup for tags coming from outside the heap.
	#[inline]
	pub(crate) fn get(&self, tag: Tag) -> Option<&Node<T, K>> {
		self.data.get(tag)
	}

	/// Checked mutable lookup for tags coming from outside the heap.
	#[inline]
	pub(crate) fn get_mut(&mut self, tag: Tag) -> Option<&mut Node<T, K>> {
		self.data.get_mut(tag)
	}

	/// Returns a reference to the `Node` that is associated with the given tag.
	/// Note that this won't fail on usage for a correct implementation of `FibonacciHeap`.
	#[inline]
	pub(crate) fn node(&self, tag: Tag) -> &Node<T, K> {
		debug_assert!(self.data.get(tag).is_some(), "dangling internal link");
		unsafe { self.data.get(tag).unchecked_unwrap() }
	}

	/// Returns a mutable reference to the `Node` that is associated with the given tag.
	/// Note that this won't fail on usage for a correct implementation of `FibonacciHeap`.
	#[inline]
	pub(crate) fn node_mut(&mut self, tag: Tag) -> &mut Node<T, K> {
		debug_assert!(self.data.get(tag).is_some(), "dangling internal link");
		unsafe { self.data.get_mut(tag).unchecked_unwrap() }
	}

	/// Removes the node from the arena. The node must already be detached
	/// from every ring.
	#[inline]
	pub(crate) fn take(&mut self, tag: Tag) -> Node<T, K> {
		debug_assert!(self.data.get(tag).is_some(), "dangling internal link");
		unsafe { self.data.take(tag).unchecked_unwrap() }
	}

	#[inline]
	pub(crate) fn key(&self, tag: Tag) -> K {
		self.node(tag).entry.key
	}
}
