//! # Singly-linked list
//!
//! A chain of heap allocated nodes starting at the head, with a pointer to the last node so that
//! values can be appended without walking the chain.
//!
//! All nodes are owned through raw pointers: a node is allocated by leaking a `Box` when a value is
//! pushed and freed with `Box::from_raw` when it is popped. Every reference handed out is
//! derived from those pointers, so the head chain and the tail pointer never invalidate each
//! other.
use std::fmt;
use std::fmt::{Debug, Display};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Move a new node to the heap and take ownership of it as a raw pointer.
    fn allocate(value: T) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, next: None })))
    }
}

/// A singly-linked list with constant time access to both ends.
///
/// Values can be added at the front and at the back, and removed from the front.
pub struct LinkedList<T> {
    /// First node, `None` iff the list is empty.
    head: Link<T>,
    /// Last node reached from `head`, `None` iff the list is empty.
    tail: Link<T>,
    len: usize,

    marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: the list owns its nodes exclusively, like a `Box` chain would; sending or sharing it
// sends or shares the values and nothing else.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: see above, `&LinkedList<T>` only hands out `&T`.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { head: None, tail: None, len: 0, marker: PhantomData }
    }

    /// Add a value before the first value.
    pub fn push_front(&mut self, value: T) {
        let mut node = Node::allocate(value);
        // SAFETY: `node` was just allocated and nothing else points to it yet.
        unsafe { node.as_mut().next = self.head };

        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Add a value after the last value.
    pub fn push_back(&mut self, value: T) {
        let node = Node::allocate(value);

        match self.tail {
            // SAFETY: `tail` is a live node owned by this list, and `&mut self` guarantees no
            // reference into the list is alive.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Remove the first value.
    ///
    /// # Return value
    ///
    /// `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: `head` was created by `Node::allocate` and is unlinked from the list below,
            // so ownership returns to this `Box` exactly once.
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.len -= 1;

            node.value
        })
    }

    /// Reference to the first value.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: the node is owned by the list and lives at least as long as `&self`.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Mutable reference to the first value.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the node is owned by the list, which is borrowed mutably for the lifetime of
        // the result.
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Reference to the last value.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: the node is owned by the list and lives at least as long as `&self`.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Mutable reference to the last value.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the node is owned by the list, which is borrowed mutably for the lifetime of
        // the result.
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    /// Number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Remove all values.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Whether the list contains a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Iterate over the values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head, remaining: self.len, marker: PhantomData }
    }

    /// Iterate mutably over the values from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut { next: self.head, remaining: self.len, marker: PhantomData }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    /// Every value followed by an arrow, ending in `NULL`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{} -> ", value)?;
        }
        f.write_str("NULL")
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

/// Borrowing iterator over a `LinkedList`.
pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the node is owned by a list that is borrowed shared for `'a`.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutably borrowing iterator over a `LinkedList`.
pub struct IterMut<'a, T> {
    next: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the node is owned by a list that is borrowed mutably for `'a`, and every
            // node is visited at most once, so the returned references don't alias.
            let node = unsafe { &mut *node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a `LinkedList`.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod test {
    use crate::data::list::LinkedList;

    #[test]
    fn push_both_ends() {
        let mut list = LinkedList::new();
        list.push_front(3);
        list.push_front(6);
        list.push_front(2);
        list.push_front(8);
        list.push_back(1);

        assert_eq!(list.len(), 5);
        assert_eq!(list.front(), Some(&8));
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.to_string(), "8 -> 2 -> 6 -> 3 -> 1 -> NULL");
    }

    #[test]
    fn empty() {
        let mut list = LinkedList::<i32>::default();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.to_string(), "NULL");
    }

    #[test]
    fn tail_after_pop() {
        let mut list = LinkedList::new();
        list.push_back(1);
        assert_eq!(list.front(), list.back());

        assert_eq!(list.pop_front(), Some(1));
        assert!(list.is_empty());
        assert_eq!(list.back(), None);

        // The tail must have been reset, or this would write through a dangling pointer
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn push_front_on_empty_sets_tail() {
        let mut list = LinkedList::new();
        list.push_front(1);
        list.push_back(2);
        list.push_front(0);
        assert_eq!(list.back(), Some(&2));
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn mutation() {
        let mut list = (1..=4).collect::<LinkedList<_>>();
        for value in &mut list {
            *value *= 10;
        }
        if let Some(front) = list.front_mut() {
            *front += 1;
        }
        if let Some(back) = list.back_mut() {
            *back += 2;
        }
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![11, 20, 30, 42]);
        assert!(list.contains(&30));
        assert!(!list.contains(&40));
    }

    #[test]
    fn mixed_ends_and_mutable_iteration() {
        let mut list = LinkedList::new();
        list.push_front(2);
        list.push_back(3);
        for value in list.iter_mut() {
            *value += 1;
        }
        list.push_back(5);
        if let Some(back) = list.back_mut() {
            *back *= 10;
        }

        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 4, 50]);
        assert_eq!(list.back(), Some(&50));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn append_after_mutable_iteration() {
        let mut list = LinkedList::new();
        list.push_back(1);
        list.push_back(2);
        for value in &mut list {
            *value = -*value;
        }
        list.push_back(3);

        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.to_string(), "-1 -> -2 -> 3 -> NULL");
        assert_eq!(list.pop_front(), Some(-1));
        assert_eq!(list.pop_front(), Some(-2));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.back(), None);
    }

    #[test]
    fn clear_and_reuse() {
        let mut list = (0..10).collect::<LinkedList<_>>();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.back(), None);

        list.extend(vec![5, 6]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.back(), Some(&6));
    }

    #[test]
    fn clone_eq_debug() {
        let list = vec!["a", "b"].into_iter().collect::<LinkedList<_>>();
        let mut copy = list.clone();
        assert_eq!(list, copy);
        copy.push_back("c");
        assert_ne!(list, copy);
        assert_eq!(format!("{:?}", copy), r#"["a", "b", "c"]"#);
        assert_eq!(copy.iter().len(), 3);
    }

    #[test]
    fn long_list_drops() {
        let list = (0..200_000).collect::<LinkedList<_>>();
        assert_eq!(list.len(), 200_000);
        drop(list);
    }
}
