//! A compile-time-checked companion of [`List`](crate::List): the same
//! deque shape, built from branded cells and fractional ownership instead
//! of raw pointers and a sentinel. Kept in-tree as a testbed; not exported.
//!
//! Every node is owned by exactly two half-references: the one held in its
//! predecessor's `next` link, and the one held in its successor's `prev`
//! link. The deque itself stands in for the missing neighbor at each end.
//! Reads and writes go through a [`GhostToken`], so exclusive access is
//! enforced by the borrow checker instead of by link surgery.
//!
//! The deque has no way to reunite the halves without a token, so it must
//! be drained (or consumed with [`Deque::into_vec`]) before the token scope
//! ends; otherwise the remaining nodes leak.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;
type FullPtr<'id, T> = Full<GhostCell<'id, Node<'id, T>>>;

struct Node<'id, T> {
    prev: Option<NodePtr<'id, T>>,
    next: Option<NodePtr<'id, T>>,
    element: T,
}

impl<'id, T> Node<'id, T> {
    fn new(element: T) -> Self {
        Self {
            prev: None,
            next: None,
            element,
        }
    }
}

pub struct Deque<'id, T> {
    /// `Some((front, back))` when non-empty. For a single node, `front`
    /// and `back` are the two halves of that node.
    ends: Option<(NodePtr<'id, T>, NodePtr<'id, T>)>,
}

impl<'id, T> Default for Deque<'id, T> {
    fn default() -> Self {
        Self { ends: None }
    }
}

impl<'id, T> Deque<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_none()
    }

    /// Walk the `next` chain and count the nodes.
    pub fn len(&self, token: &GhostToken<'id>) -> usize {
        let mut count = 0;
        let mut cursor = self.ends.as_ref().map(|(front, _)| front);
        while let Some(node) = cursor {
            count += 1;
            cursor = node.deref().borrow(token).next.as_ref();
        }
        count
    }

    pub fn push_front(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (handle, twin) = Self::new_node(element);
        match self.ends.take() {
            None => self.ends = Some((handle, twin)),
            Some((front, back)) => {
                // The old front gains a predecessor; its own handle moves
                // into the new node's `next` link.
                front.deref().borrow_mut(token).prev = Some(twin);
                handle.deref().borrow_mut(token).next = Some(front);
                self.ends = Some((handle, back));
            }
        }
    }

    pub fn push_back(&mut self, element: T, token: &mut GhostToken<'id>) {
        let (handle, twin) = Self::new_node(element);
        match self.ends.take() {
            None => self.ends = Some((handle, twin)),
            Some((front, back)) => {
                back.deref().borrow_mut(token).next = Some(twin);
                handle.deref().borrow_mut(token).prev = Some(back);
                self.ends = Some((front, handle));
            }
        }
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let (front, back) = self.ends.take()?;
        let twin = match front.deref().borrow_mut(token).next.take() {
            Some(successor) => {
                // The successor's `prev` link holds the other half of the
                // node being removed.
                let twin = successor.deref().borrow_mut(token).prev.take().unwrap();
                self.ends = Some((successor, back));
                twin
            }
            None => back,
        };
        Some(Self::into_element(front, twin))
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let (front, back) = self.ends.take()?;
        let twin = match back.deref().borrow_mut(token).prev.take() {
            Some(predecessor) => {
                let twin = predecessor.deref().borrow_mut(token).next.take().unwrap();
                self.ends = Some((front, predecessor));
                twin
            }
            None => front,
        };
        Some(Self::into_element(back, twin))
    }

    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_front(token).is_some() {}
    }

    pub fn into_vec(mut self, token: &mut GhostToken<'id>) -> Vec<T> {
        let mut elements = Vec::new();
        while let Some(element) = self.pop_front(token) {
            elements.push(element);
        }
        elements
    }

    fn new_node(element: T) -> (NodePtr<'id, T>, NodePtr<'id, T>) {
        Full::split(FullPtr::new(GhostCell::new(Node::new(element))))
    }

    fn into_element(half: NodePtr<'id, T>, twin: NodePtr<'id, T>) -> T {
        Full::into_box(Full::join(half, twin)).into_inner().element
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::Deque;
    use ghost_cell::GhostToken;

    #[test]
    fn deque_push_pop() {
        GhostToken::new(|mut token| {
            let mut deque = Deque::new();
            assert!(deque.is_empty());
            deque.push_back(1, &mut token);
            deque.push_front(2, &mut token);
            assert!(!deque.is_empty());
            assert_eq!(deque.len(&token), 2);
            assert_eq!(deque.pop_back(&mut token), Some(1));
            assert_eq!(deque.pop_front(&mut token), Some(2));
            assert!(deque.is_empty());
        })
    }

    #[test]
    fn deque_orders_both_ends() {
        GhostToken::new(|mut token| {
            let mut deque = Deque::new();
            for i in 0..5 {
                deque.push_back(i, &mut token);
            }
            deque.push_front(-1, &mut token);
            assert_eq!(deque.len(&token), 6);
            assert_eq!(deque.into_vec(&mut token), vec![-1, 0, 1, 2, 3, 4]);
        })
    }

    #[test]
    fn deque_clear() {
        GhostToken::new(|mut token| {
            let mut deque = Deque::new();
            for i in 0..4 {
                deque.push_front(i, &mut token);
            }
            deque.clear(&mut token);
            assert!(deque.is_empty());
            assert_eq!(deque.len(&token), 0);
            // Still usable after clearing.
            deque.push_back(7, &mut token);
            assert_eq!(deque.pop_front(&mut token), Some(7));
        })
    }
}
