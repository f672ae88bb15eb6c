use crate::list::{List, Node};
use std::fmt;
use std::fmt::Formatter;
use std::ops::Range;
use std::ptr::NonNull;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek
/// back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the
/// cursor: one over each value node, and one over the sentinel that marks
/// the end of the list.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The sentinel of
/// the list is denoted by `#`).
/// ```
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D #]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #]
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #]
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor at the end: [ A B C D|#]
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D #]
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
///
/// // Create a cursor at the end and move forward: [ A B C D|#]
/// let mut cursor = list.cursor_end();
/// assert!(cursor.move_next().is_err());
/// // Move cursor forward, cyclically: [|A B C D #]
/// cursor.move_next_cyclic();
/// assert_eq!(cursor.current(), Some(&'A'));
/// ```
#[derive(Clone)]
pub struct Cursor<'a, T: 'a> {
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a List<T>,
}

/// Compare cursors by position.
///
/// Only cursors belonging to the same list and standing over the same node
/// are considered equal.
///
/// # Examples
/// ```
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1.clone();
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next_cyclic();
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_start();
/// // A different list entirely.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek
/// back-and-forth, and can safely mutate the list during iteration. This is
/// because the lifetime of its yielded references is tied to its own
/// lifetime, instead of just the underlying list. This means cursors cannot
/// yield multiple elements at once.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily
/// borrow the list and returns an immutable reference whose lifetime is
/// shorter than the cursor. See the documents for details.
///
/// A `CursorMut` converts into a read-only [`Cursor`] with
/// [`CursorMut::into_cursor`]; there is no conversion back.
///
/// # Examples
///
/// ```compile_fail
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_sentinel(&self) -> bool {
                self.current == self.list.sentinel_node()
            }
            pub(crate) fn is_front(&self) -> bool {
                self.prev_node() == self.list.sentinel_node()
            }
            pub(crate) fn next_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.next` is always valid since the ring is
                // closed.
                unsafe { self.current.as_ref().next }
            }
            pub(crate) fn prev_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.prev` is always valid since the ring is
                // closed.
                unsafe { self.current.as_ref().prev }
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor to the next position, where passing through
            /// the sentinel is allowed.
            ///
            /// In an empty list this is a no-op: the only position is the
            /// sentinel, whose successor is itself.
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // The cursor is at the sentinel
            /// assert_eq!(cursor.previous(), Some(&3));
            /// cursor.move_next_cyclic();
            ///
            /// // The cursor is now at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_next_cyclic(&mut self) {
                self.current = self.next_node();
            }

            /// Move the cursor to the previous position, where passing
            /// through the sentinel is allowed.
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// cursor.move_prev_cyclic();
            ///
            /// // The cursor is now at the sentinel
            /// assert_eq!(cursor.current(), None);
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn move_prev_cyclic(&mut self) {
                self.current = self.prev_node();
            }

            /// Move the cursor to the next position, or return an error if
            /// that would pass through the sentinel.
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // The cursor is at the sentinel
            /// assert_eq!(cursor.previous(), Some(&3));
            ///
            /// // Refuse to move past the sentinel
            /// assert!(cursor.move_next().is_err());
            ///
            /// // The cursor is still at the sentinel
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn move_next(&mut self) -> Result<(), &'static str> {
                if self.is_sentinel() {
                    return Err("`move_next` across the sentinel boundary");
                }
                self.move_next_cyclic();
                Ok(())
            }

            /// Move the cursor to the previous position, or return an error
            /// if that would pass through the sentinel.
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            ///
            /// // Refuse to move past the sentinel
            /// assert!(cursor.move_prev().is_err());
            ///
            /// // The cursor is still at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_prev(&mut self) -> Result<(), &'static str> {
                if self.is_front() {
                    return Err("`move_prev` across the sentinel boundary");
                }
                self.move_prev_cyclic();
                Ok(())
            }

            /// Move the cursor forward by the given number of steps, or
            /// return `Err(i)` after `i` steps if moving further would pass
            /// through the sentinel.
            ///
            /// If an error occurs, the cursor stays at the sentinel.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert_eq!(cursor.seek_forward(2), Ok(()));
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// assert_eq!(cursor.seek_forward(5), Err(1));
            /// assert_eq!(cursor.current(), None);
            /// ```
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_next().map_err(|_| i))
            }

            /// Move the cursor backward by the given number of steps, or
            /// return `Err(i)` after `i` steps if moving further would pass
            /// through the sentinel.
            ///
            /// If an error occurs, the cursor stays at the first node.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// assert_eq!(cursor.seek_backward(2), Ok(()));
            /// assert_eq!(cursor.current(), Some(&2));
            ///
            /// assert_eq!(cursor.seek_backward(5), Err(1));
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn seek_backward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_prev().map_err(|_| i))
            }

            /// Move the cursor to the given position `target`, counted from
            /// the start of the list, or return an error when `target > len`.
            ///
            /// If an error occurs, the cursor stays put, and the error value
            /// is how far `target` lies beyond the sentinel.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // Move the cursor to a valid place (over the third node)
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Refuse to move to an invalid place
            /// assert!(cursor.seek_to(5).is_err());
            ///
            /// // The cursor is still over the third node
            /// assert_eq!(cursor.current(), Some(&3));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<(), usize> {
                let saved = self.current;
                self.move_to_start();
                self.seek_forward(target).map_err(|reached| {
                    self.current = saved;
                    target - reached
                })
            }

            /// Set the cursor to the start of the list (i.e. the first node).
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// cursor.move_to_start();
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            #[inline]
            pub fn move_to_start(&mut self) {
                self.current = self.list.front_node();
            }

            /// Set the cursor to the end of the list (i.e. the sentinel).
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// cursor.move_to_end();
            /// assert_eq!(cursor.current(), None);
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            #[inline]
            pub fn move_to_end(&mut self) {
                self.current = self.list.sentinel_node();
            }

            /// Return an immutable reference to the element under the
            /// cursor, or return `None` if it stands over the sentinel.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// assert_eq!(list.cursor(0).current(), Some(&1));
            /// assert_eq!(list.cursor(1).current(), Some(&2));
            /// assert_eq!(list.cursor(2).current(), Some(&3));
            /// assert_eq!(list.cursor(3).current(), None);
            /// ```
            pub fn current(&self) -> Option<&'a T> {
                if self.is_sentinel() {
                    return None;
                }
                // SAFETY: non-sentinel nodes always hold a valid element.
                unsafe { Some(&self.current.as_ref().element) }
            }

            /// Return an immutable reference to the element before the
            /// cursor, or return `None` if it stands over the first node.
            ///
            /// This is useful where using the cursor as a reversed cursor.
            /// See [`CursorBackIter`] for details.
            ///
            /// # Examples
            ///
            /// ```
            /// use ring_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// assert_eq!(list.cursor(0).previous(), None);
            /// assert_eq!(list.cursor(1).previous(), Some(&1));
            /// assert_eq!(list.cursor(2).previous(), Some(&2));
            /// assert_eq!(list.cursor(3).previous(), Some(&3));
            /// ```
            pub fn previous(&self) -> Option<&'a T> {
                if self.is_front() {
                    return None;
                }
                // SAFETY: the previous node of a non-first position is never
                // the sentinel, and non-sentinel nodes hold a valid element.
                Some(unsafe { &self.prev_node().as_ref().element })
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: NonNull<Node<T>>) -> Self {
        Self { current, list }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        self.list as *const _ == other.list as *const _
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: NonNull<Node<T>>) -> Self {
        Self { current, list }
    }

    /// Insert a new item before the given node `next`.
    ///
    /// It is unsafe because it does not check whether `next` belongs to the
    /// list the cursor points into.
    unsafe fn insert_before(&mut self, next: NonNull<Node<T>>, item: T) -> NonNull<Node<T>> {
        let node = Node::new_detached(item);
        self.list.attach_node(next.as_ref().prev, next, node);
        node
    }
}

// Methods that do not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return a mutable reference to the element under the cursor, or
    /// return `None` if it stands over the sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_mut(0);
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // The sentinel holds no element to mutate.
    /// assert!(list.cursor_mut(3).current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&'a mut T> {
        if self.is_sentinel() {
            return None;
        }
        // SAFETY: non-sentinel nodes always hold a valid element.
        unsafe { Some(&mut self.current.as_mut().element) }
    }

    /// Return a mutable reference to the element before the cursor, or
    /// return `None` if it stands over the first node.
    ///
    /// This is useful where using the cursor as a reversed cursor.
    /// See [`CursorBackIterMut`] for details.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_mut(3);
    /// *cursor.previous_mut().unwrap() *= 5;
    /// assert_eq!(cursor.previous(), Some(&15));
    ///
    /// assert!(list.cursor_mut(0).previous_mut().is_none());
    /// ```
    pub fn previous_mut(&mut self) -> Option<&'a mut T> {
        if self.is_front() {
            return None;
        }
        // SAFETY: the previous node of a non-first position is never the
        // sentinel, and non-sentinel nodes hold a valid element.
        Some(unsafe { &mut self.prev_node().as_mut().element })
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current)
    }

    /// Convert the mutable cursor into an immutable one over the same node.
    ///
    /// This conversion is one-way: an immutable cursor can never be
    /// promoted back.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current)
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// This is useful where the list is not able to be read while a mutable
    /// cursor is alive. This method provides the ability of temporarily
    /// reading the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// // Temporarily view the list
    /// assert_eq!(cursor.view().back(), Some(&3));
    ///
    /// cursor.insert(4);
    /// assert_eq!(list.to_vec(), vec![4, 1, 2, 3]);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Add an element first in the list.
    ///
    /// It is the same as [`List::push_front`], except it avoids another
    /// mutable borrow of the list while the mutable cursor is being used.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// cursor.insert(4);
    /// cursor.push_front(0);
    /// assert_eq!(cursor.previous(), Some(&4));
    ///
    /// assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn push_front(&mut self, item: T) {
        self.list.push_front(item);
    }

    /// Remove the first element and return it, or `None` if the list is
    /// empty.
    ///
    /// It is the same as [`List::pop_front`], except it avoids another
    /// mutable borrow of the list while the mutable cursor is being used.
    /// A cursor standing over the removed node is moved to the new first
    /// node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert_eq!(cursor.pop_front(), Some(1));
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// assert_eq!(list.to_vec(), vec![2, 3]);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let was_front = self.is_front();
        let item = self.list.pop_front();
        if was_front {
            self.current = self.list.front_node();
        }
        item
    }

    /// Append an element to the back of the list.
    ///
    /// It is the same as [`List::push_back`], except it avoids another
    /// mutable borrow of the list while the mutable cursor is being used.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// cursor.insert(0);
    /// cursor.push_back(4);
    ///
    /// assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn push_back(&mut self, item: T) {
        self.list.push_back(item)
    }

    /// Remove the last element from the list and return it, or `None` if
    /// it is empty.
    ///
    /// It is the same as [`List::pop_back`], except it avoids another
    /// mutable borrow of the list while the mutable cursor is being used.
    /// A cursor standing over the removed node is moved to the sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert_eq!(cursor.pop_back(), Some(3));
    ///
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let was_back = self.current == self.list.back_node();
        let item = self.list.pop_back();
        if was_back {
            self.current = self.list.sentinel_node();
        }
        item
    }

    /// Add an element before the cursor position.
    ///
    /// After insertion, the cursor keeps standing over the same node, with
    /// the new element now before it.
    ///
    /// This operation should compute in *O*(1) time, and the ring is only
    /// relinked after the new node is fully built.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(5); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.previous(), Some(&5));
    ///
    /// assert_eq!(list.to_vec(), vec![1, 4, 2, 3, 5]);
    /// ```
    pub fn insert(&mut self, item: T) {
        // SAFETY: `self.current` is a valid node of the list, so it is safe.
        unsafe { self.insert_before(self.current, item) };
    }

    /// Remove the element under the cursor and return it, or return `None`
    /// if the cursor stands over the sentinel. After removal, the cursor is
    /// moved to the successor of the removed node.
    ///
    /// Only positions over the removed node are invalidated; the rest of
    /// the ring is untouched.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..5);
    /// let mut cursor = list.cursor_mut(2);
    ///
    /// assert_eq!(cursor.remove(), Some(2)); // becomes [0, 1, 3, 4]
    /// assert_eq!(cursor.current(), Some(&3));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    ///
    /// assert_eq!(list.to_vec(), vec![0, 1, 3, 4]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_sentinel() {
            return None;
        }
        // SAFETY: `self.current` is a valid non-sentinel node of the list.
        let node = unsafe { self.list.detach_node(self.current) };
        // The detached node still remembers its old successor.
        self.current = node.next;
        Some(Node::into_element(node))
    }

    /// Remove up to `count` elements starting at the cursor, in forward
    /// order, and return the number actually removed.
    ///
    /// Removal stops early when the sentinel is reached. After removal, the
    /// cursor stands over the node that followed the removed range.
    ///
    /// This operation should compute in *O*(`count`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..6);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// assert_eq!(cursor.remove_n(3), 3); // removes 1, 2, 3
    /// assert_eq!(cursor.current(), Some(&4));
    /// assert_eq!(list.to_vec(), vec![0, 4, 5]);
    ///
    /// let mut cursor = list.cursor_mut(2);
    /// assert_eq!(cursor.remove_n(5), 1); // only 5 was left
    /// assert_eq!(cursor.current(), None);
    /// ```
    pub fn remove_n(&mut self, count: usize) -> usize {
        (0..count).take_while(|_| self.remove().is_some()).count()
    }

    /// Remove the element before the cursor and return it, or return `None`
    /// if the cursor stands over the first node. After removal, the cursor
    /// is not moved.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..5);
    /// let mut cursor = list.cursor_mut(2);
    ///
    /// assert_eq!(cursor.backspace(), Some(1)); // becomes [0, 2, 3, 4]
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// cursor.move_to_start();
    /// assert_eq!(cursor.backspace(), None);
    ///
    /// assert_eq!(list.to_vec(), vec![0, 2, 3, 4]);
    /// ```
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok().and_then(|_| self.remove())
    }

    /// Split the list into two at the current element (inclusive). This
    /// will return a new list consisting of everything after the cursor
    /// (inclusive), with the original list retaining everything before
    /// (exclusive).
    ///
    /// If the cursor stands over the sentinel, `None` will be returned.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// let list2 = cursor.split().unwrap();
    /// assert_eq!(cursor.current(), None);
    ///
    /// assert_eq!(list2.to_vec(), vec![5, 6, 7, 8, 9]);
    /// assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn split(&mut self) -> Option<List<T>> {
        if self.is_sentinel() {
            return None;
        }
        // After splitting, the cursor stands over the sentinel.
        let current = std::mem::replace(&mut self.current, self.list.sentinel_node());
        // SAFETY: `current` is a non-sentinel node, so the range from it to
        // the back node is a valid closed range of the list.
        unsafe {
            Some(List::from_detached(
                self.list.detach_nodes(current, self.list.back_node()),
            ))
        }
    }

    /// Split the list into two before the current element (exclusive). This
    /// will return a new list consisting of everything before the cursor
    /// (exclusive), with the original list retaining everything after
    /// (inclusive).
    ///
    /// If the cursor stands over the first node, `None` will be returned.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// let list2 = cursor.split_before().unwrap();
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// assert_eq!(list2.to_vec(), vec![0, 1, 2, 3, 4]);
    /// assert_eq!(list.to_vec(), vec![5, 6, 7, 8, 9]);
    /// ```
    pub fn split_before(&mut self) -> Option<List<T>> {
        if self.is_front() {
            return None;
        }
        // SAFETY: `current` is a non-first node, so the range from the
        // front node to its predecessor is a valid closed range of the list.
        unsafe {
            Some(List::from_detached(
                self.list
                    .detach_nodes(self.list.front_node(), self.prev_node()),
            ))
        }
    }

    /// Splice another list between the current node and its predecessor.
    ///
    /// The spliced nodes are reused as-is; nothing is allocated or copied,
    /// and an empty `other` leaves the list untouched (the explicit no-op
    /// check, not an unconditional relink).
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([0, 1, 7, 8, 9]);
    /// let list2 = List::from_iter([2, 3, 4, 5, 6]);
    /// let mut cursor = list.cursor_mut(2);
    ///
    /// cursor.splice(list2);
    /// assert_eq!(cursor.current(), Some(&7));
    ///
    /// assert_eq!(list.to_vec(), (0..10).collect::<Vec<_>>());
    /// ```
    pub fn splice(&mut self, other: List<T>) {
        if let Some(detached) = other.into_detached() {
            // SAFETY: `self.current.prev` and `self.current` are valid
            // adjacent nodes of the list, so it is safe.
            unsafe {
                self.list
                    .attach_nodes(self.prev_node(), self.current, detached);
            }
        }
    }

    /// Splice the sub-range `range` of `other` between the current node and
    /// its predecessor, keeping the original relative order of the moved
    /// elements.
    ///
    /// Only link fields are rewritten: no node is allocated, copied or
    /// dropped, and ownership of the moved nodes passes to this list
    /// together with the relink. An empty `range` is an explicit no-op that
    /// leaves both lists untouched.
    ///
    /// This operation should compute in *O*(`range.end`) time to locate the
    /// boundary nodes of `other`, and *O*(1) to relink.
    ///
    /// # Panics
    ///
    /// Panics if `range.end > other.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4]);
    /// let mut other = List::new();
    ///
    /// other.cursor_start_mut().splice_range(&mut list, 1..3);
    ///
    /// assert_eq!(list.to_vec(), vec![1, 4]);
    /// assert_eq!(other.to_vec(), vec![2, 3]);
    /// ```
    pub fn splice_range(&mut self, other: &mut List<T>, range: Range<usize>) {
        if range.start >= range.end {
            return;
        }
        let front = other.node_at(range.start);
        let back = other.node_at(range.end - 1);
        assert!(
            back != other.sentinel_node(),
            "Cannot splice a range outside of the source list bounds"
        );
        // SAFETY: `front..=back` is a valid closed range of value nodes of
        // `other` (checked above), so detaching it is safe.
        let detached = unsafe { other.detach_nodes(front, back) };
        // SAFETY: `self.current.prev` and `self.current` are valid adjacent
        // nodes of this list, so it is safe.
        unsafe {
            self.list
                .attach_nodes(self.prev_node(), self.current, detached);
        }
    }
}

/// `CursorIter` provides a cursor-like iterator that is cyclic and not
/// fused.
///
/// If you are looking for container-like iterators, see [`Iter`] and
/// [`IterMut`] for details.
///
/// [`Iter`]: crate::Iter
/// [`IterMut`]: crate::IterMut
///
/// # Examples
///
/// ```
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// // Create a cursor iterator
/// let mut cursor_iter = list.cursor_start().into_iter();
/// assert_eq!(cursor_iter.next(), Some(&1));
/// assert_eq!(cursor_iter.next(), Some(&2));
/// assert_eq!(cursor_iter.next(), Some(&3));
/// assert_eq!(cursor_iter.next(), None);
/// assert_eq!(cursor_iter.next(), Some(&1)); // Not fused and cyclic
///
/// // Convert back to a cursor
/// let cursor = cursor_iter.into_cursor();
/// assert_eq!(cursor.current(), Some(&2));
/// ```
pub struct CursorIter<'a, T: 'a> {
    pub(crate) cursor: Cursor<'a, T>,
}

/// `CursorIterMut` provides a cursor-like mutable iterator that is cyclic
/// and not fused.
///
/// If you are looking for container-like iterators, see [`Iter`] and
/// [`IterMut`] for details.
///
/// [`Iter`]: crate::Iter
/// [`IterMut`]: crate::IterMut
///
/// # Examples
///
/// ```
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// // Create a mutable cursor iterator
/// let mut cursor_iter = list.cursor_start_mut().into_iter();
/// *cursor_iter.next().unwrap() *= 5;
/// *cursor_iter.next().unwrap() *= 5;
/// *cursor_iter.next().unwrap() *= 5;
/// assert_eq!(cursor_iter.next(), None);
/// assert_eq!(cursor_iter.next(), Some(&mut 5)); // back at the first element
/// assert_eq!(cursor_iter.next(), Some(&mut 10));
///
/// // Convert back to a cursor
/// let cursor = cursor_iter.into_cursor_mut();
/// assert_eq!(cursor.current(), Some(&15));
/// ```
pub struct CursorIterMut<'a, T: 'a> {
    pub(crate) cursor: CursorMut<'a, T>,
}

/// `CursorBackIter` is largely the same as [`CursorIter`], except that the
/// cursor moves in the opposite direction.
///
/// # Examples
///
/// ```
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// // Create a cursor back iterator
/// let mut cursor_iter = list.cursor_end().into_iter().rev();
/// assert_eq!(cursor_iter.next(), Some(&3));
/// assert_eq!(cursor_iter.next(), Some(&2));
/// assert_eq!(cursor_iter.next(), Some(&1));
/// assert_eq!(cursor_iter.next(), None);
/// assert_eq!(cursor_iter.next(), Some(&3)); // Not fused and cyclic
/// ```
pub struct CursorBackIter<'a, T: 'a> {
    pub(crate) cursor: Cursor<'a, T>,
}

/// `CursorBackIterMut` is largely the same as [`CursorIterMut`], except
/// that the cursor moves in the opposite direction.
///
/// # Examples
///
/// ```
/// use ring_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// // Create a mutable cursor back iterator
/// let mut cursor_iter = list.cursor_end_mut().into_iter().rev();
/// *cursor_iter.next().unwrap() *= 5;
/// *cursor_iter.next().unwrap() *= 5;
/// *cursor_iter.next().unwrap() *= 5;
/// assert_eq!(cursor_iter.next(), None);
/// assert_eq!(cursor_iter.next(), Some(&mut 15)); // back at the last element
/// ```
pub struct CursorBackIterMut<'a, T: 'a> {
    pub(crate) cursor: CursorMut<'a, T>,
}

impl<'a, T: 'a> CursorIter<'a, T> {
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }
    pub fn rev(self) -> CursorBackIter<'a, T> {
        CursorBackIter {
            cursor: self.cursor,
        }
    }
    pub fn peek(&self) -> Option<&'a T> {
        self.cursor.current()
    }
}

impl<'a, T: 'a> CursorIterMut<'a, T> {
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor.into_cursor()
    }
    pub fn into_cursor_mut(self) -> CursorMut<'a, T> {
        self.cursor
    }
    pub fn rev(self) -> CursorBackIterMut<'a, T> {
        CursorBackIterMut {
            cursor: self.cursor,
        }
    }
    pub fn peek(&mut self) -> Option<&'a mut T> {
        self.cursor.current_mut()
    }
}

impl<'a, T: 'a> CursorBackIter<'a, T> {
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor
    }
    pub fn rev(self) -> CursorIter<'a, T> {
        CursorIter {
            cursor: self.cursor,
        }
    }
    pub fn peek(&self) -> Option<&'a T> {
        self.cursor.previous()
    }
}

impl<'a, T: 'a> CursorBackIterMut<'a, T> {
    pub fn into_cursor(self) -> Cursor<'a, T> {
        self.cursor.into_cursor()
    }
    pub fn into_cursor_mut(self) -> CursorMut<'a, T> {
        self.cursor
    }
    pub fn rev(self) -> CursorIterMut<'a, T> {
        CursorIterMut {
            cursor: self.cursor,
        }
    }
    pub fn peek(&mut self) -> Option<&'a mut T> {
        self.cursor.previous_mut()
    }
}

impl<'a, T: 'a> From<CursorIter<'a, T>> for Cursor<'a, T> {
    fn from(cursor_iter: CursorIter<'a, T>) -> Self {
        cursor_iter.into_cursor()
    }
}

impl<'a, T: 'a> From<CursorIterMut<'a, T>> for CursorMut<'a, T> {
    fn from(cursor_iter: CursorIterMut<'a, T>) -> Self {
        cursor_iter.into_cursor_mut()
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

impl<'a, T: 'a> From<CursorIterMut<'a, T>> for CursorIter<'a, T> {
    fn from(cursor_iter: CursorIterMut<'a, T>) -> Self {
        cursor_iter.into_cursor().into_iter()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

unsafe impl<T: Sync> Send for CursorIter<'_, T> {}

unsafe impl<T: Sync> Sync for CursorIter<'_, T> {}

unsafe impl<T: Send> Send for CursorIterMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorIterMut<'_, T> {}

unsafe impl<T: Sync> Send for CursorBackIter<'_, T> {}

unsafe impl<T: Sync> Sync for CursorBackIter<'_, T> {}

unsafe impl<T: Send> Send for CursorBackIterMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorBackIterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn cursor_equality_tracks_node_identity() {
        let list = List::from_iter([1, 2, 3]);
        let start = list.cursor_start();
        let mut walker = list.cursor_start();
        assert_eq!(walker, start);
        // Three steps pass the remaining nodes and the sentinel ...
        for _ in 0..3 {
            walker.move_next_cyclic();
            assert_ne!(walker, start);
        }
        // ... and the fourth wraps around to the same node again.
        walker.move_next_cyclic();
        assert_eq!(walker, start);
    }

    // A cursor over a node stays valid while neighbors are inserted and
    // removed around it; only erasing its own node would invalidate it.
    #[test]
    fn cursor_survives_neighbor_mutation() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_mut(1);
        assert_eq!(cursor.current(), Some(&2));

        cursor.insert(10); // new predecessor
        assert_eq!(cursor.current(), Some(&2));

        cursor.push_front(0);
        cursor.push_back(4);
        assert_eq!(cursor.current(), Some(&2));

        assert_eq!(cursor.backspace(), Some(10)); // old predecessor removed
        assert_eq!(cursor.current(), Some(&2));

        assert_eq!(cursor.pop_front(), Some(0));
        assert_eq!(cursor.pop_back(), Some(4));
        assert_eq!(cursor.current(), Some(&2));

        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    // Inserting an element and erasing it right away restores the sequence.
    #[test]
    fn cursor_insert_then_backspace_roundtrip() {
        for at in 0..=4_usize {
            let mut list = List::from_iter(0..4);
            let mut cursor = list.cursor_mut(at);
            let after = cursor.current().copied();
            cursor.insert(100);
            assert_eq!(cursor.backspace(), Some(100));
            assert_eq!(cursor.current().copied(), after);
            assert_eq!(list.to_vec(), (0..4).collect::<Vec<_>>());
        }
    }

    #[test]
    fn cursor_splice_range_between_lists() {
        // The two-container scenario: A = [1, 2, 3, 4], B = [],
        // moving A[1..3] to the start of B.
        let mut a = List::from_iter([1, 2, 3, 4]);
        let mut b = List::new();
        b.cursor_start_mut().splice_range(&mut a, 1..3);
        assert_eq!(a.to_vec(), vec![1, 4]);
        assert_eq!(b.to_vec(), vec![2, 3]);

        // Conservation: nothing lost, nothing duplicated.
        assert_eq!(a.len() + b.len(), 4);

        // Splicing into the middle keeps the relative order of both sides.
        let mut c = List::from_iter([10, 20]);
        c.cursor_mut(1).splice_range(&mut b, 0..2);
        assert_eq!(c.to_vec(), vec![10, 2, 3, 20]);
        assert!(b.is_empty());
    }

    #[test]
    fn cursor_splice_range_empty_is_noop() {
        let mut a = List::from_iter(0..4);
        let mut b = List::from_iter(10..13);
        for at in 0..=3_usize {
            b.cursor_mut(0).splice_range(&mut a, at..at);
            assert_eq!(a.to_vec(), (0..4).collect::<Vec<_>>());
            assert_eq!(b.to_vec(), (10..13).collect::<Vec<_>>());
        }
        // Even an out-of-bounds empty range is a no-op, not a panic.
        b.cursor_mut(0).splice_range(&mut a, 100..100);
        assert_eq!(a.len(), 4);
    }

    #[test]
    #[should_panic(expected = "Cannot splice a range outside of the source list bounds")]
    fn cursor_splice_range_out_of_bounds() {
        let mut a = List::from_iter(0..3);
        let mut b = List::<i32>::new();
        b.cursor_start_mut().splice_range(&mut a, 1..4);
    }

    #[test]
    fn cursor_mut_converts_one_way() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start_mut();
        assert!(cursor.move_next().is_ok());

        // The read-only view stands over the same node.
        let read_only = cursor.into_cursor();
        assert_eq!(read_only.current(), Some(&2));
        assert_eq!(read_only.previous(), Some(&1));
    }
}
