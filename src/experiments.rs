//! A prototype of the same container written without `unsafe`: every node is
//! kept alive by two half-ownerships, one reachable through its
//! predecessor's forward link and one through its successor's backward link,
//! with all cell access mediated by a ghost token.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

pub struct Chain<'id, T> {
    first: Option<NodeRef<'id, T>>,
    last: Option<NodeRef<'id, T>>,
}

struct Node<'id, T> {
    forward: Option<NodeRef<'id, T>>,
    backward: Option<NodeRef<'id, T>>,
    value: T,
}

type NodeRef<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> Node<'id, T> {
    fn new(value: T) -> Self {
        Self {
            forward: None,
            backward: None,
            value,
        }
    }
}

impl<'id, T> Default for Chain<'id, T> {
    fn default() -> Self {
        Self {
            first: None,
            last: None,
        }
    }
}

impl<'id, T> Chain<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn push_front(&mut self, value: T, token: &mut GhostToken<'id>) {
        let (back_half, front_half) = Full::split(Full::new(GhostCell::new(Node::new(value))));
        match self.first.take() {
            Some(first) => {
                first.deref().borrow_mut(token).backward = Some(back_half);
                front_half.deref().borrow_mut(token).forward = Some(first);
                self.first = Some(front_half);
            }
            None => {
                self.last = Some(back_half);
                self.first = Some(front_half);
            }
        }
    }

    pub fn push_back(&mut self, value: T, token: &mut GhostToken<'id>) {
        let (front_half, back_half) = Full::split(Full::new(GhostCell::new(Node::new(value))));
        match self.last.take() {
            Some(last) => {
                last.deref().borrow_mut(token).forward = Some(front_half);
                back_half.deref().borrow_mut(token).backward = Some(last);
                self.last = Some(back_half);
            }
            None => {
                self.first = Some(front_half);
                self.last = Some(back_half);
            }
        }
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let front_half = self.first.take()?;
        let back_half = match front_half.deref().borrow_mut(token).forward.take() {
            Some(next) => {
                let back_half = next.deref().borrow_mut(token).backward.take().unwrap();
                self.first = Some(next);
                back_half
            }
            None => self.last.take().unwrap(),
        };
        let node = Full::into_box(Full::join(front_half, back_half)).into_inner();
        Some(node.value)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let back_half = self.last.take()?;
        let front_half = match back_half.deref().borrow_mut(token).backward.take() {
            Some(prev) => {
                let front_half = prev.deref().borrow_mut(token).forward.take().unwrap();
                self.last = Some(prev);
                front_half
            }
            None => self.first.take().unwrap(),
        };
        let node = Full::into_box(Full::join(front_half, back_half)).into_inner();
        Some(node.value)
    }

    /// Counts the nodes by walking the forward links.
    pub fn len(&self, token: &GhostToken<'id>) -> usize {
        let mut len = 0;
        let mut cursor = self.first.as_deref();
        while let Some(cell) = cursor {
            len += 1;
            cursor = cell.borrow(token).forward.as_deref();
        }
        len
    }

    pub fn contains(&self, value: &T, token: &GhostToken<'id>) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = self.first.as_deref();
        while let Some(cell) = cursor {
            let node = cell.borrow(token);
            if node.value == *value {
                return true;
            }
            cursor = node.forward.as_deref();
        }
        false
    }

    pub fn to_vec(&self, token: &GhostToken<'id>) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::new();
        let mut cursor = self.first.as_deref();
        while let Some(cell) = cursor {
            let node = cell.borrow(token);
            values.push(node.value.clone());
            cursor = node.forward.as_deref();
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::Chain;
    use ghost_cell::GhostToken;

    #[test]
    fn chain_push_pop() {
        GhostToken::new(|mut token| {
            let mut chain = Chain::new();
            assert!(chain.is_empty());
            chain.push_back(1, &mut token);
            chain.push_front(2, &mut token);
            assert!(!chain.is_empty());
            assert_eq!(chain.len(&token), 2);
            assert_eq!(chain.pop_back(&mut token), Some(1));
            assert_eq!(chain.pop_front(&mut token), Some(2));
            assert!(chain.is_empty());
        })
    }

    #[test]
    fn chain_walks() {
        GhostToken::new(|mut token| {
            let mut chain = Chain::new();
            for i in 0..5 {
                chain.push_back(i, &mut token);
            }
            assert_eq!(chain.len(&token), 5);
            assert_eq!(chain.to_vec(&token), vec![0, 1, 2, 3, 4]);
            assert!(chain.contains(&3, &token));
            assert!(!chain.contains(&7, &token));

            assert_eq!(chain.pop_front(&mut token), Some(0));
            assert_eq!(chain.pop_back(&mut token), Some(4));
            assert_eq!(chain.to_vec(&token), vec![1, 2, 3]);

            while chain.pop_front(&mut token).is_some() {}
            assert_eq!(chain.len(&token), 0);
        })
    }
}
