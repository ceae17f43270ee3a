//! Unbalanced binary search tree keyed by string.
//!
//! # Ordering rule
//!
//! An incoming key that is `>=` the current node's key descends right;
//! strictly smaller descends left.  Equal keys therefore pile up in the right
//! subtree of the first equal node, and in-order traversal yields duplicates
//! in insertion order.
//!
//! # Ownership
//!
//! Each node owns its children (`Option<Box<Node>>`); the index owns the
//! root.  Dropping or clearing the index tears the tree down with an explicit
//! work stack instead of recursive `Box` drops.

use hm_core::{LicenseNumber, Professional};

use crate::iter::InOrder;

// ── Entry / Node ──────────────────────────────────────────────────────────────

/// A `(key, professional)` pair as stored in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key:          String,
    pub professional: Professional,
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) entry: Entry,
    pub(crate) left:  Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    fn leaf(entry: Entry) -> Self {
        Self { entry, left: None, right: None }
    }
}

// ── ProfessionalIndex ─────────────────────────────────────────────────────────

/// Key-ordered index of professionals.
///
/// The registry keeps two of these over the same records: one keyed by name,
/// one keyed by specialty label.
#[derive(Debug, Default)]
pub struct ProfessionalIndex {
    root: Option<Box<Node>>,
    len:  usize,
}

impl ProfessionalIndex {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert `professional` under `key` and return the stored entry.
    ///
    /// Never fails and never rejects duplicates; uniqueness is the caller's
    /// concern.  O(depth).
    pub fn insert(&mut self, key: impl Into<String>, professional: Professional) -> &Entry {
        let key = key.into();

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if key >= node.entry.key { &mut node.right } else { &mut node.left };
        }

        self.len += 1;
        let node = slot.insert(Box::new(Node::leaf(Entry { key, professional })));
        &node.entry
    }

    /// Exact-match lookup.  Returns the first entry met on the search path,
    /// which for duplicate keys is the earliest inserted one.
    pub fn find(&self, key: &str) -> Option<&Entry> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match key.cmp(node.entry.key.as_str()) {
                std::cmp::Ordering::Equal   => return Some(&node.entry),
                std::cmp::Ordering::Greater => node.right.as_deref(),
                std::cmp::Ordering::Less    => node.left.as_deref(),
            };
        }
        None
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// `true` if any stored professional holds `license`.
    ///
    /// License numbers are not the ordering key, so this visits every node:
    /// O(n).
    pub fn contains_license(&self, license: LicenseNumber) -> bool {
        self.iter().any(|e| e.professional.license == license)
    }

    /// Lazy in-order traversal: entries in ascending key order, duplicates in
    /// insertion order.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// Recursive in-order visitor.  Yields exactly the sequence of
    /// [`iter`](Self::iter); recursion depth equals tree height.
    pub fn for_each_in_order<F: FnMut(&Entry)>(&self, mut f: F) {
        fn walk<F: FnMut(&Entry)>(node: Option<&Node>, f: &mut F) {
            let Some(node) = node else { return };
            walk(node.left.as_deref(), f);
            f(&node.entry);
            walk(node.right.as_deref(), f);
        }
        walk(self.root.as_deref(), &mut f);
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut best = 0;
        let mut stack: Vec<(&Node, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            best = best.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        best
    }

    /// Release every node.  The index is empty and reusable afterwards.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
            // `node` now has no children; dropping it is O(1).
        }
        self.len = 0;
    }
}

impl Drop for ProfessionalIndex {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a> IntoIterator for &'a ProfessionalIndex {
    type Item = &'a Entry;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> InOrder<'a> {
        self.iter()
    }
}
