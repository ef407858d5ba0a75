//! Circular doubly linked sibling rings.
//!
//! The root list and every child list are rings of nodes linked through
//! their `left` and `right` tags. All primitives are O(1) except `ring`,
//! which snapshots the members.

use stash::Tag;

use crate::node::Arena;
use crate::Key;

impl<T, K> Arena<T, K>
where
	K: Key,
{
	#[inline]
	pub(crate) fn left(&self, tag: Tag) -> Tag {
		self.node(tag).left.unwrap_or(tag)
	}

	#[inline]
	pub(crate) fn right(&self, tag: Tag) -> Tag {
		self.node(tag).right.unwrap_or(tag)
	}

	#[inline]
	fn set_left(&mut self, tag: Tag, left: Tag) {
		self.node_mut(tag).left = Some(left);
	}

	#[inline]
	fn set_right(&mut self, tag: Tag, right: Tag) {
		self.node_mut(tag).right = Some(right);
	}

	/// Links `lhs` and `rhs` as direct neighbours, `lhs` on the left.
	#[inline]
	pub(crate) fn join(&mut self, lhs: Tag, rhs: Tag) {
		self.set_right(lhs, rhs);
		self.set_left(rhs, lhs);
	}

	/// Splices the singleton `node` into the ring of `anchor`, directly to its left.
	pub(crate) fn ring_insert(&mut self, anchor: Tag, node: Tag) {
		debug_assert!(anchor != node, "cannot insert a node next to itself");
		debug_assert!(self.right(node) == node, "node is still linked into a ring");

		let left = self.left(anchor);
		self.join(left, node);
		self.join(node, anchor);
	}

	/// Detaches `node` from its ring and leaves it as a singleton.
	///
	/// Returns another member of the old ring or `None` if `node` was alone.
	pub(crate) fn ring_remove(&mut self, node: Tag) -> Option<Tag> {
		let left = self.left(node);
		let right = self.right(node);
		if right == node {
			return None;
		}
		self.join(left, right);
		self.node_mut(node).unlink();
		Some(right)
	}

	/// Merges the two distinct rings containing `a` and `b` into one.
	pub(crate) fn ring_splice(&mut self, a: Tag, b: Tag) {
		let a_left = self.left(a);
		let b_left = self.left(b);
		self.join(a_left, b);
		self.join(b_left, a);
	}

	/// Collects the members of the ring of `start`, beginning with `start`
	/// and walking rightwards.
	pub(crate) fn ring(&self, start: Tag) -> Vec<Tag> {
		let mut members = vec![start];
		let mut current = self.right(start);
		while current != start {
			members.push(current);
			current = self.right(current);
		}
		members
	}
}

#[cfg(test)]
mod tests {
	use crate::node::{Arena, Entry, Node};
	use stash::Tag;

	fn arena_with(keys: &[i64]) -> (Arena<(), i64>, Vec<Tag>) {
		let mut arena = Arena::new();
		let tags = keys
			.iter()
			.map(|&key| arena.put(Node::new_root(Entry::new(key, ()))))
			.collect();
		(arena, tags)
	}

	fn keys(arena: &Arena<(), i64>, start: Tag) -> Vec<i64> {
		arena.ring(start).into_iter().map(|t| arena.key(t)).collect()
	}

	#[test]
	fn singleton() {
		let (arena, tags) = arena_with(&[1]);
		assert_eq!(arena.left(tags[0]), tags[0]);
		assert_eq!(arena.right(tags[0]), tags[0]);
		assert_eq!(arena.ring(tags[0]), vec![tags[0]]);
	}

	#[test]
	fn insert_keeps_order_left_of_anchor() {
		let (mut arena, tags) = arena_with(&[1, 2, 3]);
		arena.ring_insert(tags[0], tags[1]);
		arena.ring_insert(tags[0], tags[2]);
		assert_eq!(keys(&arena, tags[0]), vec![1, 2, 3]);
		assert_eq!(arena.left(tags[0]), tags[2]);
		assert_eq!(arena.right(tags[2]), tags[0]);
	}

	#[test]
	fn remove() {
		let (mut arena, tags) = arena_with(&[1, 2, 3]);
		arena.ring_insert(tags[0], tags[1]);
		arena.ring_insert(tags[0], tags[2]);

		assert_eq!(arena.ring_remove(tags[1]), Some(tags[2]));
		assert_eq!(keys(&arena, tags[0]), vec![1, 3]);
		assert_eq!(arena.ring(tags[1]), vec![tags[1]]);

		assert_eq!(arena.ring_remove(tags[0]), Some(tags[2]));
		assert_eq!(arena.ring(tags[2]), vec![tags[2]]);
		assert_eq!(arena.ring_remove(tags[2]), None);
	}

	#[test]
	fn splice() {
		let (mut arena, tags) = arena_with(&[1, 2, 3, 4, 5]);
		arena.ring_insert(tags[0], tags[1]);
		arena.ring_insert(tags[2], tags[3]);
		arena.ring_insert(tags[2], tags[4]);

		arena.ring_splice(tags[0], tags[2]);
		assert_eq!(keys(&arena, tags[0]), vec![1, 2, 3, 4, 5]);
		for &tag in &tags {
			assert_eq!(arena.left(arena.right(tag)), tag);
		}
	}

	#[test]
	fn splice_singletons() {
		let (mut arena, tags) = arena_with(&[7, 8]);
		arena.ring_splice(tags[0], tags[1]);
		assert_eq!(keys(&arena, tags[1]), vec![8, 7]);
		assert_eq!(arena.left(tags[0]), tags[1]);
	}
}
