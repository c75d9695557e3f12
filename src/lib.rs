//! Indexable doubly- and singly-linked sequences with arena-backed nodes.
//!
//! This crate provides linked sequences for workloads that mix
//! handle-based splicing with positional access. The key insight:
//! separate the chain from the allocation.
//!
//! # Design Philosophy
//!
//! Traditional linked lists own their nodes through pointers:
//!
//! ```text
//! LinkedList<T>  - heap node per element, no handles, no indexing
//! Vec<T>         - O(1) indexing, but O(n) insertion/removal
//! ```
//!
//! This crate puts nodes in a sequence-owned slot arena and links them
//! with indices:
//!
//! ```text
//! SlotArena  - owns the nodes, provides stable generation-stamped slots
//! DList      - doubly-linked chain over the arena + a locator anchor
//! SList      - singly-linked chain over the arena
//! ```
//!
//! Benefits:
//! - **Stable handles**: every insertion returns a [`NodeRef`] that stays
//!   valid until that node is removed, and O(1) removal anywhere
//! - **Safe staleness**: a handle to a removed node, or one minted by a
//!   different sequence, fails with [`ListError::NotOwned`] in O(1)
//!   instead of touching the wrong node
//! - **No cycles by construction**: links are indices, so the chain
//!   cannot form ownership cycles and needs no cycle collector
//! - **Sub-linear indexing**: [`DList`] remembers one anchor position and
//!   resolves `get(i)` from the nearest of head, tail, and anchor —
//!   never more than `min(i, len - 1 - i)` link walks, O(1) amortized
//!   for sequential or clustered access
//!
//! # Quick Start
//!
//! ```
//! use linkseq::DList;
//!
//! let mut queue: DList<u64> = DList::new();
//!
//! // Insert returns a stable handle for O(1) access later
//! let key = queue.push_back(42);
//! queue.push_back(7);
//!
//! // O(1) removal from anywhere
//! assert_eq!(queue.remove(key), Ok(42));
//!
//! // Index access, negative indices count from the back
//! assert_eq!(queue.get(-1), Ok(&7));
//! ```
//!
//! # Choosing a Variant
//!
//! | Structure | Links | `insert_before` / `remove` | `get(i)` |
//! |-----------|-------|----------------------------|----------|
//! | [`DList`] | double | O(1) | O(min(i, len − 1 − i)), anchored |
//! | [`SList`] | single | O(n) predecessor scan | O(i) |
//!
//! [`SList`] halves the per-node link overhead; everything that needs a
//! predecessor pays a forward scan instead.
//!
//! # Ownership Model
//!
//! A sequence exclusively owns its nodes. A detached [`Node`] belongs to
//! nobody; attaching it consumes it, so a node can never be offered to
//! two sequences. Removal hands the value back to the caller and retires
//! the slot generation, staling every outstanding handle to that node.
//!
//! # Concurrency
//!
//! Single-threaded by design. [`DList`] keeps its locator in a `Cell`
//! and is `Send` but not `Sync`; callers needing concurrent access must
//! serialize externally around the whole sequence.

#![warn(missing_docs)]

pub mod dlist;
pub mod error;
pub mod key;
pub mod node;
pub mod seq;
pub mod slist;

mod storage;

pub use dlist::DList;
pub use error::{ListError, NotAttached};
pub use key::Key;
pub use node::{ListId, Node, NodeRef};
pub use seq::ValueSequence;
pub use slist::SList;
