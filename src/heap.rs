use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};

use stash::Tag;

use crate::error::{Error, Result};
use crate::handle::{Handle, HandleMap, HeapId};
use crate::node::{Arena, Entry, Node};
use crate::Key;

/// Type alias for `FibonacciHeap` that has `i64` as default `Key` type.
pub type DefaultFibonacciHeap<T> = FibonacciHeap<T, i64>;

/// An addressable Fibonacci heap implementation.
///
/// Stores elements with an associated key.
/// The key can be thought of as the priority of the element that is associated to it.
///
/// Supports usages like `extract_min` that takes the element with the minimum key out of this storage.
///
/// Inserting elements into this data structure provides the caller with handles
/// that makes accessing the elements possible - this is called "addressable".
/// Handles are always local to the associated heap instance and are rejected
/// with `Error::InvalidHandle` by any other instance.
///
/// The heap is a collection of heap-ordered trees whose roots form a circular
/// root list. Inserting and merging only splice into that list, the trees are
/// consolidated lazily on `extract_min`. `decrease_key` cuts violating nodes
/// to the root list and marks their parents, cutting a parent as well once it
/// lost a second child.
pub struct FibonacciHeap<T, K>
where
	K: Key,
{
	/// Stamped into every handle issued by this heap.
	id: HeapId,

	/// Root with the minimum key, `None` iff the heap is empty.
	pub(crate) min: Option<Tag>,

	/// In the `data` arena all nodes are stored.
	/// This indirection to the real data allows for efficient addressable elements via handles.
	pub(crate) data: Arena<T, K>,
}

impl<T, K> FibonacciHeap<T, K>
where
	K: Key,
{
	/// Creates a new instance of a `FibonacciHeap`.
	#[inline]
	pub fn new() -> Self {
		FibonacciHeap {
			id: HeapId::fresh(),
			min: None,
			data: Arena::new(),
		}
	}

	/// Creates a new `FibonacciHeap` that can store `capacity` elements without reallocating.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		FibonacciHeap {
			id: HeapId::fresh(),
			min: None,
			data: Arena::with_capacity(capacity),
		}
	}

	/// Returns the number of elements stored in this `FibonacciHeap`.
	#[inline]
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns true if this `FibonacciHeap` is empty.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.min.is_none()
	}

	/// Resolves a handle issued by this heap to the tag of its live node.
	fn resolve(&self, handle: Handle) -> Result<Tag> {
		handle
			.tag_for(self.id)
			.filter(|&tag| self.data.get(tag).is_some())
			.ok_or(Error::InvalidHandle)
	}

	/// Updates the internal pointer to the current minimum element by hinting
	/// to a new possible min element within the heap.
	#[inline]
	pub(crate) fn update_min(&mut self, root: Tag) {
		match self.min {
			Some(min) if self.data.key(min) <= self.data.key(root) => {}
			_ => self.min = Some(root),
		}
	}

	/// Splices the detached `root` into the root list and checks whether it is the new minimum element.
	pub(crate) fn insert_root(&mut self, root: Tag) {
		debug_assert!(self.data.node(root).is_root());
		debug_assert!(!self.data.node(root).marked, "roots are never marked");

		match self.min {
			None => self.min = Some(root),
			Some(min) => {
				self.data.ring_insert(min, root);
				self.update_min(root);
			}
		}
	}

	/// Inserts the given element into the `FibonacciHeap` with its associated key
	/// and returns a `Handle` to it that allows to directly address it.
	///
	/// The handle is for example required in order to use methods like `decrease_key`.
	#[inline]
	pub fn insert(&mut self, key: K, elem: T) -> Handle {
		let tag = self.data.put(Node::new_root(Entry::new(key, elem)));
		self.insert_root(tag);
		Handle::new(self.id, tag)
	}

	/// Returns the minimum key and its element.
	///
	/// Fails with `Error::EmptyHeap` if there are no elements.
	#[inline]
	pub fn find_min(&self) -> Result<(&K, &T)> {
		let min = self.min.ok_or(Error::EmptyHeap)?;
		let entry = &self.data.node(min).entry;
		Ok((&entry.key, &entry.elem))
	}

	/// Removes the element associated with the minimum key within this `FibonacciHeap`
	/// and returns it together with its key.
	///
	/// Fails with `Error::EmptyHeap` if there are no elements.
	pub fn extract_min(&mut self) -> Result<(K, T)> {
		let min = self.min.ok_or(Error::EmptyHeap)?;
		Ok(self.remove_min(min))
	}

	/// Removes `min`, which must be the current minimum root, promotes its
	/// children to roots and consolidates the remaining trees.
	fn remove_min(&mut self, min: Tag) -> (K, T) {
		debug_assert_eq!(self.min, Some(min));

		if let Some(child) = self.data.node_mut(min).child.take() {
			for tag in self.data.ring(child) {
				let node = self.data.node_mut(tag);
				node.parent = None;
				node.marked = false;
			}
			self.data.ring_splice(min, child);
			self.data.node_mut(min).degree = 0;
		}

		self.min = self.data.ring_remove(min);
		let Entry { key, elem } = self.data.take(min).entry;
		if let Some(start) = self.min {
			self.consolidate(start);
		}
		(key, elem)
	}

	/// Decreases the key of the element with the associated given `handle`.
	///
	/// Fails with `Error::InvalidKeyIncrease` if `new_key` is greater than the current key
	/// and with `Error::InvalidHandle` if the element is no longer stored in this heap.
	/// The heap is left untouched in both cases.
	pub fn decrease_key(&mut self, handle: Handle, new_key: K) -> Result<()> {
		let tag = self.resolve(handle)?;
		if new_key > self.data.key(tag) {
			return Err(Error::InvalidKeyIncrease);
		}

		self.data.node_mut(tag).entry.key = new_key;
		match self.data.node(tag).parent {
			None => self.update_min(tag),
			Some(parent) if new_key < self.data.key(parent) => {
				self.cut(tag, parent);
				self.cascading_cut(parent);
			}
			Some(_) => {}
		}
		Ok(())
	}

	/// Removes the element associated with the given `handle` and returns it together with its key.
	///
	/// Fails with `Error::InvalidHandle` if the element is no longer stored in this heap.
	pub fn delete(&mut self, handle: Handle) -> Result<(K, T)> {
		let tag = self.resolve(handle)?;
		if let Some(parent) = self.data.node(tag).parent {
			self.cut(tag, parent);
			self.cascading_cut(parent);
		}
		self.min = Some(tag);
		Ok(self.remove_min(tag))
	}

	/// Moves all elements of `other` into this `FibonacciHeap`.
	///
	/// Handles of this heap stay valid. Handles of `other` are invalidated;
	/// the returned `HandleMap` translates them into handles of this heap.
	///
	/// Joining the root lists takes constant time, but every node of `other`
	/// is first relocated into this heap's arena, so the whole call runs in
	/// O(n) where n is the length of `other`.
	pub fn merge(&mut self, other: FibonacciHeap<T, K>) -> HandleMap {
		let FibonacciHeap {
			id: other_id,
			min: other_min,
			data: mut other_data,
		} = other;
		let mut tags = HashMap::with_capacity(other_data.len());

		let other_min = match other_min {
			Some(min) => min,
			None => return HandleMap::new(other_id, self.id, tags),
		};

		let mut rings = vec![other_min];
		let mut nodes = Vec::with_capacity(other_data.len());
		while let Some(start) = rings.pop() {
			for tag in other_data.ring(start) {
				if let Some(child) = other_data.node(tag).child {
					rings.push(child);
				}
				nodes.push(tag);
			}
		}
		for old in nodes {
			let node = other_data.take(old);
			tags.insert(old, self.data.put(node));
		}

		for &new in tags.values() {
			let node = self.data.node_mut(new);
			node.parent = relocate(&tags, node.parent);
			node.child = relocate(&tags, node.child);
			node.left = relocate(&tags, node.left);
			node.right = relocate(&tags, node.right);
		}

		if let Some(root) = relocate(&tags, Some(other_min)) {
			match self.min {
				None => self.min = Some(root),
				Some(min) => {
					self.data.ring_splice(min, root);
					self.update_min(root);
				}
			}
		}

		tracing::debug!(relocated = tags.len(), len = self.len(), "merged heaps");
		HandleMap::new(other_id, self.id, tags)
	}

	/// Returns a reference to the element associated with the given handle.
	#[inline]
	pub fn get(&self, handle: Handle) -> Option<&T> {
		handle
			.tag_for(self.id)
			.and_then(|tag| self.data.get(tag))
			.map(|node| &node.entry.elem)
	}

	/// Returns a mutable reference to the element associated with the given handle.
	#[inline]
	pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
		let id = self.id;
		let data = &mut self.data;
		handle
			.tag_for(id)
			.and_then(move |tag| data.get_mut(tag))
			.map(|node| &mut node.entry.elem)
	}

	/// Returns a reference to the key of the element associated with the given handle.
	#[inline]
	pub fn key(&self, handle: Handle) -> Option<&K> {
		handle
			.tag_for(self.id)
			.and_then(|tag| self.data.get(tag))
			.map(|node| &node.entry.key)
	}

	/// Returns true if the element associated with the given handle is stored in this heap.
	#[inline]
	pub fn contains(&self, handle: Handle) -> bool {
		self.get(handle).is_some()
	}

	/// Drops all elements. Every handle issued so far becomes invalid.
	pub fn clear(&mut self) {
		*self = FibonacciHeap::new();
	}

	/// Iterate over keys and values stored within a `FibonacciHeap` in a sorted-by-min order. Drains the heap.
	#[inline]
	pub fn drain_min(self) -> DrainMin<T, K> {
		DrainMin { heap: self }
	}
}

/// Translates a link of a relocated node into the tag of its new slot.
#[inline]
fn relocate(tags: &HashMap<Tag, Tag>, link: Option<Tag>) -> Option<Tag> {
	link.and_then(|old| {
		debug_assert!(tags.contains_key(&old), "link leaves the merged heap");
		tags.get(&old).cloned()
	})
}

impl<T, K> Default for FibonacciHeap<T, K>
where
	K: Key,
{
	fn default() -> Self {
		FibonacciHeap::new()
	}
}

impl<T, K> fmt::Debug for FibonacciHeap<T, K>
where
	K: Key + fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("FibonacciHeap")
			.field("len", &self.len())
			.field("min", &self.min.map(|min| self.data.key(min)))
			.finish()
	}
}

impl<T, K> Index<Handle> for FibonacciHeap<T, K>
where
	K: Key,
{
	type Output = T;

	fn index(&self, handle: Handle) -> &Self::Output {
		self.get(handle).expect("no node found for given handle")
	}
}

impl<T, K> IndexMut<Handle> for FibonacciHeap<T, K>
where
	K: Key,
{
	fn index_mut(&mut self, handle: Handle) -> &mut Self::Output {
		self.get_mut(handle).expect("no node found for given handle")
	}
}

/// Iterator over keys and values stored within a `FibonacciHeap` in a sorted-by-min order. Drains the heap.
pub struct DrainMin<T, K: Key> {
	heap: FibonacciHeap<T, K>,
}

impl<T, K: Key> Iterator for DrainMin<T, K> {
	type Item = (K, T);

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.heap.extract_min().ok()
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.heap.len(), Some(self.heap.len()))
	}
}

impl<T, K: Key> ExactSizeIterator for DrainMin<T, K> {}

#[cfg(test)]
impl<T, K> FibonacciHeap<T, K>
where
	K: Key,
{
	pub(crate) fn tag(&self, handle: Handle) -> Tag {
		self.resolve(handle).expect("live handle")
	}

	pub(crate) fn roots(&self) -> Vec<Tag> {
		self.min.map(|min| self.data.ring(min)).unwrap_or_default()
	}

	/// Walks every tree and panics on the first violated structural invariant.
	pub(crate) fn assert_invariants(&self) {
		let roots = self.roots();
		let mut visited = 0;
		if let Some(min) = self.min {
			for &root in &roots {
				let node = self.data.node(root);
				assert!(node.is_root(), "root list member has a parent");
				assert!(!node.marked, "root is marked");
				assert!(self.data.key(min) <= node.entry.key, "min is not minimal");
			}
		}
		self.assert_ring(&roots, None);
		for &root in &roots {
			visited += self.assert_tree(root);
		}
		assert_eq!(visited, self.len(), "unreachable nodes in arena");
	}

	fn assert_ring(&self, ring: &[Tag], parent: Option<Tag>) {
		for &tag in ring {
			assert_eq!(self.data.left(self.data.right(tag)), tag, "broken ring");
			assert_eq!(self.data.node(tag).parent, parent, "wrong parent link");
		}
	}

	/// Returns the size of the subtree rooted at `tag`.
	fn assert_tree(&self, tag: Tag) -> usize {
		let node = self.data.node(tag);
		let children = node.child.map(|c| self.data.ring(c)).unwrap_or_default();
		assert_eq!(children.len(), node.degree, "degree does not match child count");
		self.assert_ring(&children, Some(tag));

		let mut size = 1;
		for &child in &children {
			assert!(node.entry.key <= self.data.key(child), "heap order violated");
			size += self.assert_tree(child);
		}
		assert!(
			size >= fibonacci(node.degree + 2),
			"degree {} with only {} nodes",
			node.degree,
			size
		);
		size
	}
}

#[cfg(test)]
fn fibonacci(n: usize) -> usize {
	let (mut a, mut b) = (0, 1);
	for _ in 0..n {
		let next = a + b;
		a = b;
		b = next;
	}
	a
}


#[cfg(all(feature = "bench", test))]
mod bench {
	use super::*;
	use test::{black_box, Bencher};

	fn setup_sample() -> Vec<i64> {
		use rand::rngs::StdRng;
		use rand::seq::SliceRandom;
		use rand::SeedableRng;
		let mut sample: Vec<i64> = (1..100_000).collect();
		sample.shuffle(&mut StdRng::seed_from_u64(0x5eed));
		sample
	}

	#[bench]
	fn fibonacci_heap_insert(bencher: &mut Bencher) {
		let sample = setup_sample();
		bencher.iter(|| {
			let mut fh = FibonacciHeap::new();
			for &key in sample.iter() {
				black_box(fh.insert(key, ()));
			}
		});
	}

	#[bench]
	fn fibonacci_heap_extract_min(bencher: &mut Bencher) {
		let sample = setup_sample();
		bencher.iter(|| {
			let mut fh = FibonacciHeap::with_capacity(sample.len());
			for &key in sample.iter() {
				fh.insert(key, ());
			}
			while let Ok(_) = black_box(fh.extract_min()) {}
		});
	}

	#[bench]
	fn fibonacci_heap_decrease_key(bencher: &mut Bencher) {
		let sample = setup_sample();
		bencher.iter(|| {
			let mut fh = FibonacciHeap::with_capacity(sample.len());
			let handles: Vec<_> = sample.iter().map(|&key| fh.insert(key, ())).collect();
			fh.extract_min().unwrap();
			for (handle, &key) in handles.iter().zip(sample.iter()).skip(1) {
				black_box(fh.decrease_key(*handle, key - 100_000)).ok();
			}
		});
	}
}
