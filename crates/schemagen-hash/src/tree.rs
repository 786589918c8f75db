//! Subtree hash engine
//!
//! Builds a parallel arena over a tree of [`Hashable`] nodes, computes a
//! Merkle hash for every subtree and collapses subtrees with equal hashes
//! whose ancestor `level` steps up is the same node.
//!
//! # Algorithm
//!
//! 1. Walk the tree in DFS pre-order; a node's arena index is its pre-order
//!    position and `ancestors[0]` is its parent.
//! 2. Hash bottom-up: `calc(fingerprint + "(") ++ (child ++ ",")* ++ ")"`.
//! 3. Binary lifting: `ancestors[i + 1] = ancestors[i].ancestors[i]`, up to
//!    `⌊log₂ level⌋`, then resolve the ancestor `level` steps up by applying
//!    the set bits of `level`.
//! 4. Sort by `(hash, ancestor index)`, nodes without such an ancestor first.
//! 5. Sweep adjacent equal pairs and ask the parent of the later node to
//!    replace it with the earlier one.

use crate::hash::{HashValue, PolyHash};
use tracing::trace;

/// Tree node capability required by [`compress_tree`]
///
/// Implementors are handles: cloning one yields another handle to the same
/// node, and [`compress`](Hashable::compress) mutates through shared
/// references.
pub trait Hashable: Clone {
    /// Local fingerprint covering every locally meaningful attribute
    fn fingerprint(&self) -> String;

    /// Children in a deterministic order
    fn children(&self) -> Vec<Self>;

    /// Wherever `destination` is a child of this node, put `source` instead
    fn compress(&self, source: &Self, destination: &Self);
}

/// Collapse structurally identical subtrees sharing the ancestor `level` steps up
///
/// A `level` of zero leaves the tree untouched.
pub fn compress_tree<T: Hashable>(root: &T, level: usize) {
    let mut tree = Tree::build(root);
    tree.calc_hashes();
    tree.compress(level);
}

/// Set-bit positions of `level`, least significant first
///
/// The last entry is `⌊log₂ level⌋`; zero has no set bits.
#[must_use]
pub fn level_powers(level: usize) -> Vec<usize> {
    (0..usize::BITS as usize)
        .filter(|bit| (level >> bit) & 1 == 1)
        .collect()
}

#[derive(Debug)]
struct TreeNode<T> {
    item: T,
    value: HashValue,
    ancestors: Vec<Option<usize>>,
    ancestor: Option<usize>,
    children: Vec<usize>,
}

#[derive(Debug)]
struct Tree<T> {
    nodes: Vec<TreeNode<T>>,
    hash: PolyHash,
}

impl<T: Hashable> Tree<T> {
    fn build(root: &T) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            hash: PolyHash::new(),
        };
        tree.push(root.clone(), None);
        tree
    }

    fn push(&mut self, item: T, parent: Option<usize>) -> usize {
        let index = self.nodes.len();
        let children = item.children();
        self.nodes.push(TreeNode {
            item,
            value: HashValue::default(),
            ancestors: vec![parent],
            ancestor: None,
            children: Vec::with_capacity(children.len()),
        });
        for child in children {
            let child_index = self.push(child, Some(index));
            self.nodes[index].children.push(child_index);
        }
        index
    }

    // Children always sit after their parent in pre-order, so a reverse
    // sweep sees every child before its parent.
    fn calc_hashes(&mut self) {
        let open = self.hash.calc("(");
        let comma = self.hash.calc(",");
        let close = self.hash.calc(")");
        for index in (0..self.nodes.len()).rev() {
            let local = self.hash.calc(&self.nodes[index].item.fingerprint());
            let mut value = self.hash.join(local, open);
            for position in 0..self.nodes[index].children.len() {
                let child = self.nodes[index].children[position];
                value = self.hash.join(value, self.nodes[child].value);
                value = self.hash.join(value, comma);
            }
            self.nodes[index].value = self.hash.join(value, close);
        }
    }

    fn compress(&mut self, level: usize) {
        if level == 0 || !self.assign_ancestors(level) {
            return;
        }

        let mut order: Vec<usize> = (0..self.nodes.len()).collect();
        order.sort_by_key(|&index| {
            let node = &self.nodes[index];
            (node.ancestor.is_some(), node.value, node.ancestor, index)
        });

        for pair in order.windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            let (prev_node, cur_node) = (&self.nodes[previous], &self.nodes[current]);
            if prev_node.ancestor.is_none()
                || prev_node.ancestor != cur_node.ancestor
                || prev_node.value != cur_node.value
            {
                continue;
            }
            let Some(parent) = cur_node.ancestors[0] else {
                continue;
            };
            trace!(
                survivor = previous,
                collapsed = current,
                hash = %cur_node.value,
                "collapsing duplicate subtree"
            );
            let survivor = prev_node.item.clone();
            self.nodes[parent]
                .item
                .compress(&survivor, &self.nodes[current].item);
            self.nodes[current].item = survivor;
        }
    }

    /// Fill `ancestor` for every node; false when no node has one
    fn assign_ancestors(&mut self, level: usize) -> bool {
        let powers = level_powers(level);
        let Some(&log) = powers.last() else {
            return false;
        };
        if self.nodes.len() <= 1 {
            return false;
        }

        for i in 0..log {
            let mut any = false;
            for index in 0..self.nodes.len() {
                let next = self.nodes[index].ancestors[i].and_then(|up| {
                    any = true;
                    self.nodes[up].ancestors[i]
                });
                self.nodes[index].ancestors.push(next);
            }
            if !any {
                return false;
            }
        }

        for index in 0..self.nodes.len() {
            let mut ancestor = Some(index);
            for &power in &powers {
                ancestor = ancestor.and_then(|up| self.nodes[up].ancestors[power]);
            }
            self.nodes[index].ancestor = ancestor;
        }
        true
    }
}
