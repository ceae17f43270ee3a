//! Stack-based in-order iterator.

use crate::tree::{Entry, Node};

/// Lazy in-order traversal of a [`ProfessionalIndex`](crate::ProfessionalIndex).
///
/// Holds at most `height` pending nodes.  Borrowing the index immutably for
/// the iterator's lifetime rules out mutation mid-traversal.
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        let mut it = Self { stack: Vec::new() };
        it.push_left_spine(root);
        it
    }

    fn push_left_spine(&mut self, mut cur: Option<&'a Node>) {
        while let Some(node) = cur {
            self.stack.push(node);
            cur = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<&'a Entry> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.entry)
    }
}

impl std::iter::FusedIterator for InOrder<'_> {}
