//! # Balanced Index
//!
//! An AVL tree stored in a flat arena. Nodes live in a `Vec` and refer to their
//! children by index, so rotations only rewrite a few `Option<usize>` links and
//! no node is ever moved or freed.
//!
//! The index only grows: [`BalancedIndex::insert`] is the one operation that
//! changes its shape, and there is no removal. [`BalancedIndex::get_mut`] hands
//! out payloads for in-place edits but never exposes keys or links.

use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Option<usize>,
    right: Option<usize>,
    height: u32,
}

/// Ordered map from `K` to `V` with O(log n) insert and search.
///
/// Invariants, at every node:
/// - `height == 1 + max(height(left), height(right))`, absent children count as 0
/// - `|height(left) - height(right)| <= 1`
#[derive(Debug, Clone)]
pub struct BalancedIndex<K, V> {
    nodes: Vec<Node<K, V>>,
    root: Option<usize>,
}

impl<K: Ord, V> Default for BalancedIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> BalancedIndex<K, V> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Height of the whole tree (0 when empty).
    pub fn height(&self) -> u32 {
        self.height_of(self.root)
    }

    /// Inserts `value` under `key`.
    ///
    /// An existing key is left as it is: nothing is overwritten and `false` is
    /// returned.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let (root, inserted) = self.insert_at(self.root, key, value);
        self.root = Some(root);
        inserted.is_some()
    }

    pub fn search(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| &self.nodes[i].value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.find(key).map(|i| &mut self.nodes[i].value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Entries in ascending key order.
    ///
    /// Every call starts a fresh traversal; iterators share no cursor state.
    pub fn inorder(&self) -> Inorder<'_, K, V> {
        Inorder {
            nodes: &self.nodes,
            stack: Vec::new(),
            cursor: self.root,
        }
    }

    fn find(&self, key: &K) -> Option<usize> {
        let mut link = self.root;
        while let Some(i) = link {
            link = match key.cmp(&self.nodes[i].key) {
                Ordering::Less => self.nodes[i].left,
                Ordering::Greater => self.nodes[i].right,
                Ordering::Equal => return Some(i),
            };
        }
        None
    }

    /// Returns the new root of the subtree and the arena slot of the new node,
    /// if one was created.
    fn insert_at(&mut self, link: Option<usize>, key: K, value: V) -> (usize, Option<usize>) {
        let Some(node) = link else {
            let index = self.nodes.len();
            self.nodes.push(Node {
                key,
                value,
                left: None,
                right: None,
                height: 1,
            });
            return (index, Some(index));
        };

        let inserted = match key.cmp(&self.nodes[node].key) {
            Ordering::Less => {
                let (child, inserted) = self.insert_at(self.nodes[node].left, key, value);
                self.nodes[node].left = Some(child);
                inserted
            }
            Ordering::Greater => {
                let (child, inserted) = self.insert_at(self.nodes[node].right, key, value);
                self.nodes[node].right = Some(child);
                inserted
            }
            Ordering::Equal => None,
        };

        match inserted {
            Some(new) => {
                self.update_height(node);
                (self.rebalance(node, new), inserted)
            }
            None => (node, None),
        }
    }

    /// Restores balance at `node` after `new` landed somewhere below it.
    fn rebalance(&mut self, node: usize, new: usize) -> usize {
        let balance = self.balance_factor(node);

        if balance > 1 {
            // Left-right: the new key went into the left child's right subtree.
            if let Some(left) = self.nodes[node].left {
                if self.nodes[new].key > self.nodes[left].key {
                    let pivot = self.rotate_left(left);
                    self.nodes[node].left = Some(pivot);
                }
            }
            return self.rotate_right(node);
        }

        if balance < -1 {
            // Right-left: the new key went into the right child's left subtree.
            if let Some(right) = self.nodes[node].right {
                if self.nodes[new].key < self.nodes[right].key {
                    let pivot = self.rotate_right(right);
                    self.nodes[node].right = Some(pivot);
                }
            }
            return self.rotate_left(node);
        }

        node
    }

    fn rotate_right(&mut self, y: usize) -> usize {
        let Some(x) = self.nodes[y].left else {
            return y;
        };
        self.nodes[y].left = self.nodes[x].right;
        self.nodes[x].right = Some(y);
        self.update_height(y);
        self.update_height(x);
        x
    }

    fn rotate_left(&mut self, x: usize) -> usize {
        let Some(y) = self.nodes[x].right else {
            return x;
        };
        self.nodes[x].right = self.nodes[y].left;
        self.nodes[y].left = Some(x);
        self.update_height(x);
        self.update_height(y);
        y
    }

    fn height_of(&self, link: Option<usize>) -> u32 {
        link.map_or(0, |i| self.nodes[i].height)
    }

    fn balance_factor(&self, node: usize) -> i64 {
        i64::from(self.height_of(self.nodes[node].left))
            - i64::from(self.height_of(self.nodes[node].right))
    }

    fn update_height(&mut self, node: usize) {
        let left = self.height_of(self.nodes[node].left);
        let right = self.height_of(self.nodes[node].right);
        self.nodes[node].height = 1 + left.max(right);
    }
}

/// Ascending in-order iterator over a [`BalancedIndex`].
pub struct Inorder<'a, K, V> {
    nodes: &'a [Node<K, V>],
    stack: Vec<usize>,
    cursor: Option<usize>,
}

impl<'a, K, V> Iterator for Inorder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(i) = self.cursor {
            self.stack.push(i);
            self.cursor = self.nodes[i].left;
        }
        let i = self.stack.pop()?;
        self.cursor = self.nodes[i].right;
        let node = &self.nodes[i];
        Some((&node.key, &node.value))
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a BalancedIndex<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Inorder<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Walks the tree and checks both invariants; returns the subtree height.
    fn check_subtree<K: Ord, V>(index: &BalancedIndex<K, V>, link: Option<usize>) -> u32 {
        let Some(i) = link else { return 0 };
        let node = &index.nodes[i];
        let left = check_subtree(index, node.left);
        let right = check_subtree(index, node.right);
        assert_eq!(node.height, 1 + left.max(right), "stale height");
        assert!(
            (i64::from(left) - i64::from(right)).abs() <= 1,
            "unbalanced node"
        );
        node.height
    }

    fn keys(index: &BalancedIndex<i32, String>) -> Vec<i32> {
        index.inorder().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_inorder_is_sorted() {
        let mut index = BalancedIndex::new();
        for key in [50, 25, 75, 10, 30] {
            assert!(index.insert(key, format!("customer {key}")));
        }
        assert_eq!(keys(&index), vec![10, 25, 30, 50, 75]);
        check_subtree(&index, index.root);
    }

    #[test]
    fn test_duplicate_key_is_not_overwritten() {
        let mut index = BalancedIndex::new();
        assert!(index.insert(1, "first".to_string()));
        assert!(!index.insert(1, "second".to_string()));
        assert_eq!(index.search(&1).map(String::as_str), Some("first"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_search_miss() {
        let mut index = BalancedIndex::new();
        index.insert(5, "five".to_string());
        assert!(index.search(&4).is_none());
        assert!(BalancedIndex::<i32, String>::new().search(&1).is_none());
    }

    #[test]
    fn test_each_rotation_case() {
        // right, left, left-right, right-left
        for order in [[3, 2, 1], [1, 2, 3], [3, 1, 2], [1, 3, 2]] {
            let mut index = BalancedIndex::new();
            for key in order {
                index.insert(key, key.to_string());
            }
            assert_eq!(index.height(), 2, "order {order:?}");
            assert_eq!(index.search(&2).map(String::as_str), Some("2"));
            assert_eq!(keys(&index), vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_sequential_inserts_stay_logarithmic() {
        let mut index = BalancedIndex::new();
        for key in 0..1024 {
            index.insert(key, String::new());
        }
        // An AVL tree of n nodes is at most ~1.44 log2(n) tall.
        assert!(index.height() <= 15, "height {}", index.height());
        check_subtree(&index, index.root);
    }

    #[test]
    fn test_traversals_are_independent() {
        let mut index = BalancedIndex::new();
        for key in [2, 1, 3] {
            index.insert(key, String::new());
        }
        let mut first = index.inorder();
        assert_eq!(first.next().map(|(k, _)| *k), Some(1));
        assert_eq!(keys(&index), vec![1, 2, 3]);
        assert_eq!(first.next().map(|(k, _)| *k), Some(2));
    }

    #[test]
    fn test_get_mut_edits_payload_only() {
        let mut index = BalancedIndex::new();
        index.insert(9, "old".to_string());
        if let Some(value) = index.get_mut(&9) {
            *value = "new".to_string();
        }
        assert_eq!(index.search(&9).map(String::as_str), Some("new"));
    }

    proptest! {
        #[test]
        fn balance_holds_after_every_insert(
            inserts in prop::collection::vec(-500i32..500, 0..200)
        ) {
            let mut index = BalancedIndex::new();
            let mut expected = std::collections::BTreeSet::new();
            for key in inserts {
                prop_assert_eq!(index.insert(key, key.to_string()), expected.insert(key));
                check_subtree(&index, index.root);
            }
            prop_assert_eq!(keys(&index), expected.into_iter().collect::<Vec<_>>());
        }
    }
}
