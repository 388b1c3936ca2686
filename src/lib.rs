//! This crate provides a doubly-linked list with owned nodes, anchored by a
//! pair of permanent sentinel nodes.
//!
//! The [`List`] allows inserting, removing, reading and overwriting elements
//! at any index, traversing forward and backward, concatenating, copying and
//! containment testing. Every indexed operation reaches its position by
//! walking the chain node-by-node, so it takes *O*(*n*) time; the two ends
//! are reachable in *O*(1) through the sentinels.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use sentinel_list::List;
//!
//! let mut list = List::from([3, 1, 4, 1, 6]);
//!
//! list.insert(1, 5).unwrap(); // insert 5 at position 1
//! assert_eq!(list.to_string(), "(3, 5, 1, 4, 1, 6)");
//!
//! assert_eq!(list.remove(2), Ok(1)); // remove the element at position 2
//! assert_eq!(list.get(0), Ok(&3));
//! assert_eq!(list.set(0, 2), Ok(3)); // overwrite in place
//!
//! assert!(list.contains(&6));
//! assert_eq!(list.to_string(), "(2, 5, 4, 1, 6)");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!  ┌───────────┐          ╔═══════════╗                 ╔═══════════╗          ┌───────────┐
//!  │   next    │ ───────→ ║   next    ║ ───→ ┄┄ ───→    ║   next    ║ ───────→ │  (next)   │
//!  ├───────────┤          ╟───────────╢                 ╟───────────╢          ├───────────┤
//!  │  (prev)   │ ←─────── ║   prev    ║ ←─── ┄┄ ←───    ║   prev    ║ ←─────── │   prev    │
//!  ├───────────┤          ╟───────────╢  Node 1, 2, ... ╟───────────╢          ├───────────┤
//!  ┊no payload ┊          ║ payload T ║                 ║ payload T ║          ┊no payload ┊
//!  └───────────┘          ╚═══════════╝                 ╚═══════════╝          └───────────┘
//!  head sentinel              Node 0                     Node n - 1            tail sentinel
//! ```
//! The `List` owns two payload-free sentinel nodes for its whole lifetime:
//! - the head sentinel, whose `next` points to the first element (or to the
//!   tail sentinel while the list is empty);
//! - the tail sentinel, whose `prev` points to the last element (or to the
//!   head sentinel while the list is empty).
//!
//! The chain is linear, not circular: no link closes the tail back to the
//! head. The outward links `head.prev` and `tail.next` (parenthesized above)
//! are self-referential and never read. The sentinels are never replaced by
//! data nodes either: removing the element at index 0 relinks `head.next`
//! around it and leaves the sentinel untouched.
//!
//! Each data node is allocated on the heap and carries its `next` and `prev`
//! pointers together with the payload `T`. A node is owned through the
//! forward chain and freed exactly once when it is detached; the `prev`
//! pointer is a non-owning observer, used only for reverse traversal and for
//! *O*(1) predecessor access during removal.
//!
//! # Indexed Access
//!
//! [`insert`], [`remove`], [`get`], [`get_mut`] and [`set`] validate the
//! index against the current length before touching any link, and report
//! [`Error::OutOfRange`] without mutating anything when it is out of bounds.
//! Since indices are `usize`, negative or non-integer indices are rejected
//! at compile time rather than at run time.
//!
//! ```
//! use sentinel_list::{Error, List};
//!
//! let mut list = List::from([1, 2, 3]);
//! assert_eq!(list.insert(5, 9), Err(Error::OutOfRange { index: 5, len: 3 }));
//! assert_eq!(list.to_string(), "(1, 2, 3)"); // untouched
//! ```
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are lazy, fused, double-ended iterators: `rev` traverses tail to head
//! along the `prev` pointers. Each call to [`iter`] starts a fresh
//! traversal, and the borrow checker keeps the list from being structurally
//! mutated while one is alive.
//!
//! ## Examples
//!
//! ```
//! use sentinel_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // fused
//!
//! assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![&3, &2, &1]);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Diagnostics
//!
//! [`dump`] renders every node of the chain (sentinels included), and
//! [`has_cycle`] sweeps the forward links with a visited set. Both stop the
//! moment a node is reached twice instead of walking forever; `dump`
//! reports [`Error::Corrupted`] in that case. No list built through the
//! public API ever trips them.
//!
//! ```
//! use sentinel_list::List;
//!
//! let list = List::from([1, 2]);
//! assert!(!list.has_cycle());
//! // one line per node: head sentinel, 1, 2, tail sentinel
//! assert_eq!(list.dump().unwrap().lines().count(), 4);
//! ```
//!
//! [`insert`]: List::insert
//! [`remove`]: List::remove
//! [`get`]: List::get
//! [`get_mut`]: List::get_mut
//! [`set`]: List::set
//! [`iter`]: List::iter
//! [`dump`]: List::dump
//! [`has_cycle`]: List::has_cycle
//! [`Error::OutOfRange`]: crate::Error::OutOfRange
//! [`Error::Corrupted`]: crate::Error::Corrupted

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{Error, List};

pub mod list;

mod experiments;
