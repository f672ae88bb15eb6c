//! This crate provides a doubly-linked list with owned nodes, kept as a
//! ring of nodes anchored by a single sentinel.
//!
//! The [`List`] allows inserting, removing and splicing elements at any
//! given position in constant time. In compromise, reaching a position by
//! index takes *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.current(), Some(&1));
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 2, 3, 4]));
//!
//! cursor.seek_to(3).unwrap(); // move the cursor to position 3 ...
//! assert_eq!(cursor.remove(), Some(3)); // ... and remove that element.
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 2, 4]));
//!
//! cursor.push_front(5); // pushing front through the cursor is also allowed
//! assert_eq!(cursor.view(), &List::from_iter([5, 0, 1, 2, 4]));
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────┐
//!          ↓                                                   Sentinel      │
//!    ╔═══════════╗           ╔═══════════╗                   ┌───────────┐   │
//!    ║   next    ║ ────────→ ║   next    ║ ───→ ┄┄ ────────→ │   next    │ ──┘
//!    ╟───────────╢           ╟───────────╢   Node 1, 2, ...  ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←─── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                   ├───────────┤
//! │  ║ element T ║           ║ element T ║                   ┊no element ┊
//! │  ╚═══════════╝           ╚═══════════╝                   └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                          ↑   ↑
//! └──────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                      │
//! ║ sentinel  ║ ─────────────────────────────────────────────────────┘
//! ╚═══════════╝
//!     List
//! ```
//!
//! The `List` owns exactly one pointer: the box holding the sentinel node.
//! Each value node of a `List<T>` is allocated on the heap and contains:
//! - the `next` pointer to the next element (or the sentinel if it is the
//!   last element of the list);
//! - the `prev` pointer to the previous element (or the sentinel if it is
//!   the first element of the list);
//! - the actual payload `T`.
//!
//! The sentinel carries the same link header but **no** payload. In an
//! empty list its `next` and `prev` point to itself, which is what makes
//! the ring closed at all times: traversal never needs a null check, and
//! emptiness is a single pointer comparison.
//!
//! The list deliberately does **not** cache its length; [`List::len`]
//! walks the ring in *O*(*n*).
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators.
//! These are double-ended iterators and iterate the list like an array
//! (fused and non-cyclic). Walking backward is the standard adapter:
//! `list.iter().rev()`. [`IterMut`] provides mutability of the elements
//! (but not of the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursor Views
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of viewing the list.
//!
//! As the names suggest, they are like cursors and can move forward or
//! backward over the list. In a list with length *n*, there are *n* + 1
//! valid locations for a cursor: one over each value node, and one over
//! the sentinel.
//!
//! A [`CursorMut`] converts into a read-only [`Cursor`] with
//! [`CursorMut::into_cursor`]; there is no conversion in the other
//! direction.
//!
//! Cursors can also be used as iterators, which are cyclic and not fused.
//!
//! **Warning**: Though cursor iterators have methods `rev`, they **DO
//! NOT** behave as double-ended iterators. Instead, they create a new
//! iterator that reverses the moving direction of the cursor.
//!
//! ## Examples
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//! // Create a cursor iterator
//! let mut cursor_iter = list.cursor_start().into_iter();
//! assert_eq!(cursor_iter.next(), Some(&1));
//! assert_eq!(cursor_iter.next(), Some(&2));
//! assert_eq!(cursor_iter.next(), Some(&3));
//! assert_eq!(cursor_iter.next(), None);
//! assert_eq!(cursor_iter.next(), Some(&1)); // Not fused and cyclic
//!
//! // Create a cursor back iterator which reverses the moving direction
//! // of the cursor
//! let mut cursor_iter = cursor_iter.rev();
//! assert_eq!(cursor_iter.next(), Some(&1)); // Iterate in reversed direction
//! assert_eq!(cursor_iter.next(), None); // Pass through the sentinel boundary
//! assert_eq!(cursor_iter.next(), Some(&3));
//! ```
//!
//! # Cursor Mutations
//!
//! [`CursorMut`] provides many useful ways to mutate the list at any
//! position.
//! - [`insert`]: insert a new item at the cursor;
//! - [`remove`]: remove the item at the cursor;
//! - [`remove_n`]: remove a run of items starting at the cursor;
//! - [`backspace`]: remove the item before the cursor;
//! - [`split`]: split the list into a new one, from the cursor position to
//!   the end;
//! - [`splice`]: splice another list in before the cursor position;
//! - [`splice_range`]: splice a sub-range of another list in before the
//!   cursor position, without allocating or copying nodes.
//!
//! ## Examples
//!
//! ```
//! use ring_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [5, 1, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 4]);
//! ```
//!
//! See more functions in [`CursorMut`].
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`CursorMut::into_cursor`]: crate::list::cursor::CursorMut::into_cursor
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`remove_n`]: crate::list::cursor::CursorMut::remove_n
//! [`backspace`]: crate::list::cursor::CursorMut::backspace
//! [`split`]: crate::list::cursor::CursorMut::split
//! [`splice`]: crate::list::cursor::CursorMut::splice
//! [`splice_range`]: crate::list::cursor::CursorMut::splice_range

#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod experiments;
