//! Binomial Heap implementation
//!
//! A binomial heap is a collection of binomial trees with:
//! - O(log n) insert and extract_min
//! - O(1) peek_min (cached minimum root)
//! - O(log n) merge of the root lists
//!
//! # Algorithm Overview
//!
//! A binomial heap maintains a collection of binomial trees, where:
//! - Each tree satisfies the heap property
//! - At most one tree of each degree (0, 1, 2, ..., log n)
//! - This is analogous to binary representation of n
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes and height k
//!
//! # Storage
//!
//! Nodes live in a [`SlotMap`] arena. A node owns its children through two
//! arena keys: `child` (first child) and `sibling` (next child of the same
//! parent). There are no parent links, so every node is reachable from exactly
//! one place and there is no shared ownership to untangle.

use crate::traits::{Heap, HeapError, MergeableHeap};
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Arena key of a binomial heap node
    struct NodeKey;
}

/// Root slots indexed by degree. 32 inline slots cover any heap below 2³² keys.
type RootSlots = SmallVec<[Option<NodeKey>; 32]>;

/// Internal node structure for binomial heap
///
/// **Binomial Tree Structure**: Nodes form binomial trees where a node of degree k
/// has exactly k children with degrees k-1, ..., 1, 0 (in child-list order).
#[derive(Debug)]
struct Node<K> {
    key: K,
    /// First child in child list (None if leaf)
    child: Option<NodeKey>,
    /// Next sibling in parent's child list (None if last child)
    sibling: Option<NodeKey>,
    /// Number of children. A binomial tree Bₖ has root degree k and 2ᵏ nodes
    degree: usize,
}

/// Binomial Heap
///
/// # Example
///
/// ```rust
/// use heap_bench::binomial::BinomialHeap;
/// use heap_bench::{Heap, MergeableHeap};
///
/// let mut a = BinomialHeap::new();
/// a.insert(5).unwrap();
/// a.insert(9).unwrap();
///
/// let mut b = BinomialHeap::new();
/// b.insert(2).unwrap();
///
/// a.merge(b);
/// assert_eq!(a.peek_min(), Some(&2));
/// assert_eq!(a.len(), 3);
/// ```
#[derive(Debug)]
pub struct BinomialHeap<K: Ord> {
    nodes: SlotMap<NodeKey, Node<K>>,
    /// Binomial trees indexed by degree. Each slot holds at most one tree.
    trees: RootSlots,
    /// Root holding the minimum key
    min: Option<NodeKey>,
    len: usize,
}

impl<K: Ord> BinomialHeap<K> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            trees: SmallVec::new(),
            min: None,
            len: 0,
        }
    }

    /// Links two binomial trees of the same degree into one tree of degree+1
    ///
    /// The root with the smaller key becomes the parent. On equal keys the
    /// current minimum root stays a root, so `min` always names a root.
    fn link(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        debug_assert_eq!(self.nodes[a].degree, self.nodes[b].degree);

        let b_wins = self.nodes[b].key < self.nodes[a].key
            || (self.nodes[b].key == self.nodes[a].key && self.min == Some(b));
        let (parent, child) = if b_wins { (b, a) } else { (a, b) };

        let first_child = self.nodes[parent].child.replace(child);
        self.nodes[child].sibling = first_child;
        self.nodes[parent].degree += 1;
        parent
    }

    /// Places a tree into the root slots, linking with carry propagation
    fn carry_in(&mut self, mut tree: NodeKey) {
        let mut degree = self.nodes[tree].degree;
        loop {
            if degree >= self.trees.len() {
                self.trees.resize(degree + 1, None);
            }
            match self.trees[degree].take() {
                None => {
                    self.trees[degree] = Some(tree);
                    return;
                }
                Some(existing) => {
                    tree = self.link(existing, tree);
                    degree += 1;
                }
            }
        }
    }

    /// Merges a degree-indexed list of trees (already in this arena) into the roots
    ///
    /// Works like binary addition: at each degree there are up to three trees
    /// (ours, incoming, carry). One stays, a pair is linked into the carry.
    fn merge_roots(&mut self, incoming: &[Option<NodeKey>]) {
        let max_degree = self.trees.len().max(incoming.len());
        self.trees.resize(max_degree, None);

        let mut carry: Option<NodeKey> = None;
        for degree in 0..max_degree {
            let own = self.trees[degree].take();
            let other = incoming.get(degree).copied().flatten();
            let mut pending = [own, other, carry.take()].into_iter().flatten();

            match (pending.next(), pending.next()) {
                (Some(a), Some(b)) => {
                    carry = Some(self.link(a, b));
                    self.trees[degree] = pending.next();
                }
                (single, _) => self.trees[degree] = single,
            }
        }

        if let Some(tree) = carry {
            self.trees.push(Some(tree));
        }
    }

    /// Finds and updates the minimum pointer by scanning all roots
    fn refresh_min(&mut self) {
        let mut min: Option<NodeKey> = None;
        for &root in self.trees.iter().flatten() {
            let smaller = match min {
                Some(current) => self.nodes[root].key < self.nodes[current].key,
                None => true,
            };
            if smaller {
                min = Some(root);
            }
        }
        self.min = min;
    }

    /// Moves every node of `other` into this arena, returning its re-keyed roots
    fn adopt(&mut self, other: &mut Self) -> RootSlots {
        let mut remap: SecondaryMap<NodeKey, NodeKey> = SecondaryMap::new();
        for (old, node) in other.nodes.drain() {
            remap.insert(old, self.nodes.insert(node));
        }

        for &new in remap.values() {
            let node = &mut self.nodes[new];
            node.child = node.child.map(|old| remap[old]);
            node.sibling = node.sibling.map(|old| remap[old]);
        }

        other
            .trees
            .drain(..)
            .map(|slot| slot.map(|old| remap[old]))
            .collect()
    }
}

impl<K: Ord> Heap<K> for BinomialHeap<K> {
    fn len(&self) -> usize {
        self.len
    }

    /// Inserts a new key
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Algorithm**: create a B₀ tree, update the minimum, then carry it into
    /// the root slots exactly like incrementing a binary counter.
    fn insert(&mut self, key: K) -> Result<(), HeapError> {
        let smaller = match self.min {
            Some(current) => key < self.nodes[current].key,
            None => true,
        };

        let node = self.nodes.insert(Node {
            key,
            child: None,
            sibling: None,
            degree: 0,
        });
        if smaller {
            self.min = Some(node);
        }

        self.carry_in(node);
        self.len += 1;
        Ok(())
    }

    fn peek_min(&self) -> Option<&K> {
        self.min.map(|root| &self.nodes[root].key)
    }

    /// Removes and returns the minimum key
    ///
    /// **Time Complexity**: O(log n) worst-case
    ///
    /// **Binomial Tree Property**: When the root of a Bₖ tree is removed, its
    /// children are Bₖ₋₁, Bₖ₋₂, ..., B₀ trees. They are slotted by degree and
    /// merged back into the root list.
    fn extract_min(&mut self) -> Option<K> {
        let min = self.min.take()?;
        let node = self.nodes.remove(min)?;
        debug_assert_eq!(self.trees.get(node.degree).copied().flatten(), Some(min));

        if let Some(slot) = self.trees.get_mut(node.degree) {
            *slot = None;
        }

        let mut children: RootSlots = SmallVec::new();
        children.resize(node.degree, None);
        let mut current = node.child;
        while let Some(child) = current {
            current = self.nodes[child].sibling.take();
            let degree = self.nodes[child].degree;
            children[degree] = Some(child);
        }

        self.merge_roots(&children);
        while let Some(None) = self.trees.last() {
            self.trees.pop();
        }
        self.refresh_min();

        self.len -= 1;
        Some(node.key)
    }
}

impl<K: Ord> MergeableHeap<K> for BinomialHeap<K> {
    /// Merges another heap into this heap
    ///
    /// **Time Complexity**: O(m + log n), where m is the size of `other`.
    /// Moving `other`'s nodes into this arena is linear in m; the root merge
    /// itself is logarithmic.
    fn merge(&mut self, mut other: Self) {
        if other.len == 0 {
            return;
        }
        if self.len == 0 {
            *self = other;
            return;
        }

        let incoming = self.adopt(&mut other);
        self.merge_roots(&incoming);
        self.refresh_min();
        self.len += other.len;
    }
}

impl<K: Ord> Default for BinomialHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}
