use stash::Tag;

use crate::heap::FibonacciHeap;
use crate::Key;

impl<T, K> FibonacciHeap<T, K>
where
	K: Key,
{
	/// Cuts the given `child` from its `parent` and inserts it as a root into the `FibonacciHeap`.
	pub(crate) fn cut(&mut self, child: Tag, parent: Tag) {
		debug_assert_eq!(self.data.node(child).parent, Some(parent));

		let sibling = self.data.ring_remove(child);
		let node = self.data.node_mut(parent);
		if node.child == Some(child) {
			node.child = sibling;
		}
		node.degree -= 1;

		let node = self.data.node_mut(child);
		node.parent = None;
		node.marked = false;
		self.insert_root(child);
	}

	/// Walks up from `node`, which just lost a child, cutting every marked
	/// ancestor and marking the first unmarked non-root one.
	pub(crate) fn cascading_cut(&mut self, node: Tag) {
		let mut current = node;
		let mut cuts = 0usize;
		while let Some(parent) = self.data.node(current).parent {
			if !self.data.node(current).marked {
				self.data.node_mut(current).marked = true;
				break;
			}
			self.cut(current, parent);
			cuts += 1;
			current = parent;
		}
		if cuts > 0 {
			tracing::trace!(cuts, "cascading cut");
		}
	}
}
