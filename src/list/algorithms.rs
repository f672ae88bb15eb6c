use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

pub(crate) mod drain;

use self::drain::{Drain, DrainFilter};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    /// Deep-copy every element in iteration order into a freshly built
    /// ring.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Build the complete copy first, then replace the receiver, so a
    /// failing element clone leaves `*self` untouched.
    fn clone_from(&mut self, other: &Self) {
        *self = other.clone();
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Copies the elements into a `Vec` in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the list into a `Vec` in iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.into_vec(), vec![1, 2, 3]);
    /// ```
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Creates an iterator that removes and yields the elements from front
    /// to back, leaving the list empty.
    ///
    /// Dropping the iterator removes the elements it did not yield.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let drained: Vec<_> = list.drain().collect();
    /// assert_eq!(drained, vec![1, 2, 3]);
    /// assert!(list.is_empty());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    /// Creates an iterator that removes and yields exactly the elements for
    /// which `filter` returns `true`, keeping the rest in place.
    ///
    /// Dropping the iterator keeps filtering the remainder of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..6);
    ///
    /// let evens: Vec<_> = list.drain_filter(|x| *x % 2 == 0).collect();
    /// assert_eq!(evens, vec![0, 2, 4]);
    /// assert_eq!(list.to_vec(), vec![1, 3, 5]);
    /// ```
    pub fn drain_filter<F>(&mut self, filter: F) -> DrainFilter<'_, T, F>
    where
        F: FnMut(&mut T) -> bool,
    {
        DrainFilter::new(self, filter)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn list_eq_and_ord() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        let c = List::from_iter([1, 2, 4]);
        let d = List::from_iter([1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert!(a < c);
        assert!(d < a);
    }

    #[test]
    fn list_hash_matches_equality() {
        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn list_clone_is_independent() {
        let mut a = List::from_iter(0..5);
        let mut b = a.clone();
        assert_eq!(a, b);

        // Mutating one must not change the other.
        a.push_back(5);
        a.remove(0);
        assert_eq!(b.to_vec(), (0..5).collect::<Vec<_>>());

        b.clear();
        assert_eq!(a.to_vec(), (1..6).collect::<Vec<_>>());
    }

    #[test]
    fn list_clone_from_replaces_contents() {
        let mut a = List::from_iter(0..3);
        let b = List::from_iter(10..15);
        a.clone_from(&b);
        assert_eq!(a, b);

        // Cloning from an empty list empties the receiver.
        a.clone_from(&List::new());
        assert!(a.is_empty());
    }

    /// An element whose clone panics after a set number of copies, and
    /// which records every drop.
    struct Fickle<'a> {
        value: i32,
        budget: &'a Cell<usize>,
        drops: &'a Cell<usize>,
    }

    impl<'a> Clone for Fickle<'a> {
        fn clone(&self) -> Self {
            if self.budget.get() == 0 {
                panic!("clone budget exhausted");
            }
            self.budget.set(self.budget.get() - 1);
            Fickle {
                value: self.value,
                budget: self.budget,
                drops: self.drops,
            }
        }
    }

    impl<'a> Drop for Fickle<'a> {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    // The k-th element copy fails mid-clone: the receiver keeps its old
    // contents, and the half-built copy is fully dropped.
    #[test]
    fn list_clone_from_strong_guarantee() {
        let budget = Cell::new(usize::MAX);
        let drops = Cell::new(0);
        let source: List<_> = (0..5)
            .map(|value| Fickle {
                value,
                budget: &budget,
                drops: &drops,
            })
            .collect();
        let mut receiver: List<_> = (10..13)
            .map(|value| Fickle {
                value,
                budget: &budget,
                drops: &drops,
            })
            .collect();

        budget.set(2);
        drops.set(0);
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            receiver.clone_from(&source);
        }));
        assert!(outcome.is_err());

        // The two successful copies were dropped during unwinding, and the
        // receiver still holds its original elements.
        assert_eq!(drops.get(), 2);
        let kept: Vec<_> = receiver.iter().map(|f| f.value).collect();
        assert_eq!(kept, vec![10, 11, 12]);

        budget.set(usize::MAX);
    }

    #[test]
    fn list_drain() {
        let mut list = List::from_iter(0..5);
        let mut drain = list.drain();
        assert_eq!(drain.next(), Some(0));
        assert_eq!(drain.next(), Some(1));
        // Dropping the drain removes the rest.
        drop(drain);
        assert!(list.is_empty());
    }

    #[test]
    fn list_drain_filter() {
        let mut list = List::from_iter(0..10);
        let drained: Vec<_> = list.drain_filter(|x| *x % 3 == 0).collect();
        assert_eq!(drained, vec![0, 3, 6, 9]);
        assert_eq!(list.to_vec(), vec![1, 2, 4, 5, 7, 8]);

        // A partially consumed filter keeps filtering on drop.
        let mut filter = list.drain_filter(|x| *x > 4);
        assert_eq!(filter.next(), Some(5));
        drop(filter);
        assert_eq!(list.to_vec(), vec![1, 2, 4]);
    }
}
