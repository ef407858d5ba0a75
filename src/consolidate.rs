use itertools::Itertools;
use stash::Tag;

use crate::heap::FibonacciHeap;
use crate::Key;

/// The golden ratio, base of the logarithm bounding root degrees.
const PHI: f64 = 1.618_033_988_749_895;

/// Returns the number of degree buckets needed for a heap of `len` elements.
///
/// A tree whose root has degree `d` holds at least `F(d + 2) >= φ^d` nodes,
/// so no degree exceeds `log_φ(len)`.
fn bucket_count(len: usize) -> usize {
	if len <= 1 {
		return 2;
	}
	((len as f64).ln() / PHI.ln()).ceil() as usize + 2
}

impl<T, K> FibonacciHeap<T, K>
where
	K: Key,
{
	/// Links trees of equal degree until every root has a distinct degree,
	/// then rebuilds the root list and finds the new minimum.
	///
	/// `start` is any member of the root list.
	pub(crate) fn consolidate(&mut self, start: Tag) {
		let roots = self.data.ring(start);
		let mut buckets: Vec<Option<Tag>> = vec![None; bucket_count(self.len())];

		for &root in &roots {
			let mut tree = root;
			let mut degree = self.data.node(tree).degree;
			loop {
				if degree >= buckets.len() {
					buckets.resize(degree + 1, None);
				}
				match buckets[degree].take() {
					None => {
						buckets[degree] = Some(tree);
						break;
					}
					Some(other) => {
						tree = if self.data.key(other) <= self.data.key(tree) {
							self.link(tree, other);
							other
						} else {
							self.link(other, tree);
							tree
						};
						degree = self.data.node(tree).degree;
					}
				}
			}
		}

		let survivors: Vec<Tag> = buckets.into_iter().flatten().collect();
		for &root in &survivors {
			self.data.node_mut(root).unlink();
		}
		for (lhs, rhs) in survivors.iter().cloned().circular_tuple_windows::<(_, _)>() {
			if lhs != rhs {
				self.data.join(lhs, rhs);
			}
		}
		self.min = survivors
			.iter()
			.cloned()
			.min_by_key(|&root| self.data.key(root));

		tracing::trace!(
			before = roots.len(),
			after = survivors.len(),
			"consolidated root list"
		);
	}

	/// Makes the root `child` a child of the root `parent`.
	pub(crate) fn link(&mut self, child: Tag, parent: Tag) {
		debug_assert!(child != parent, "cannot link to self!");
		debug_assert!(
			self.data.node(child).is_root(),
			"child cannot have multiple parents!"
		);
		debug_assert!(self.data.key(parent) <= self.data.key(child));

		self.data.ring_remove(child);
		{
			let node = self.data.node_mut(child);
			node.parent = Some(parent);
			node.marked = false;
		}
		match self.data.node(parent).child {
			Some(first) => self.data.ring_insert(first, child),
			None => self.data.node_mut(parent).child = Some(child),
		}
		self.data.node_mut(parent).degree += 1;
	}
}
