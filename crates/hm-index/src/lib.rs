//! `hm-index` — ordered professional index.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`tree`]   | `ProfessionalIndex` (unbalanced BST), `Entry`              |
//! | [`iter`]   | `InOrder`: lazy, stack-based in-order traversal            |
//!
//! The tree is deliberately unbalanced: shape depends on insertion order and
//! a sorted insertion sequence degenerates to a chain.  Every operation is
//! written iteratively, except the optional recursive visitor
//! [`ProfessionalIndex::for_each_in_order`], so chain depth never becomes
//! call-stack depth.

pub mod iter;
pub mod tree;


pub use iter::InOrder;
pub use tree::{Entry, ProfessionalIndex};
