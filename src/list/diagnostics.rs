//! Structural introspection of the link chain.
//!
//! Both walks bound themselves with a visited set keyed on node addresses,
//! so a corrupted chain is reported instead of iterated forever. The
//! mutating operations of [`List`] never produce such a chain; these
//! routines exist to prove that during development and testing.

use crate::list::{Error, List, Node};
use std::collections::HashSet;
use std::fmt::Debug;
use std::ptr::NonNull;

impl<T> List<T> {
    /// Sweeps the forward links from the head sentinel and returns `true`
    /// the moment a previously visited node is reached again.
    ///
    /// Returns `false` for every list built solely through the public API.
    /// Cheap enough to call frequently as a consistency check in tests.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert!(!list.has_cycle());
    /// ```
    pub fn has_cycle(&self) -> bool {
        let mut visited = HashSet::new();
        let mut node = self.head_node();
        loop {
            visited.insert(node.as_ptr());
            if node == self.tail_node() {
                return false;
            }
            // SAFETY: every `next` in the chain points at a live node; the
            // visited set keeps the walk finite even if the links are wrong.
            let next = unsafe { node.as_ref().next };
            if visited.contains(&next.as_ptr()) {
                return true;
            }
            node = next;
        }
    }

    /// Renders every node of the chain in head-to-tail order, one line per
    /// node, sentinels included and tagged. Each line shows the node's
    /// address, its stored value, and the addresses of its neighbors; the
    /// outward sentinel links are shown as `-` since they are never used.
    ///
    /// If a forward link reaches a node for the second time, the walk stops
    /// immediately and [`Error::Corrupted`] is returned instead of an
    /// unterminated listing.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([1, 2]);
    /// let dump = list.dump().unwrap();
    /// // two sentinels plus one line per element
    /// assert_eq!(dump.lines().count(), 4);
    /// assert!(dump.lines().next().unwrap().contains("[head sentinel]"));
    /// ```
    pub fn dump(&self) -> Result<String, Error>
    where
        T: Debug,
    {
        let mut visited = HashSet::new();
        let mut out = String::new();
        let mut node = self.head_node();
        let mut hops = 0;
        loop {
            visited.insert(node.as_ptr());
            self.dump_node(&mut out, node);
            if node == self.tail_node() {
                return Ok(out);
            }
            // SAFETY: as in `has_cycle`.
            let next = unsafe { node.as_ref().next };
            if visited.contains(&next.as_ptr()) {
                return Err(Error::Corrupted { hops });
            }
            node = next;
            hops += 1;
        }
    }

    fn dump_node(&self, out: &mut String, node: NonNull<Node<T>>)
    where
        T: Debug,
    {
        // SAFETY: `node` is a live node of this list; the element is only
        // read when the node is not a sentinel.
        let current = unsafe { node.as_ref() };
        let line = if node == self.head_node() {
            format!(
                "{:p} [head sentinel] prev=- next={:p}\n",
                node.as_ptr(),
                current.next.as_ptr(),
            )
        } else if node == self.tail_node() {
            format!(
                "{:p} [tail sentinel] prev={:p} next=-\n",
                node.as_ptr(),
                current.prev.as_ptr(),
            )
        } else {
            format!(
                "{:p} value={:?} prev={:p} next={:p}\n",
                node.as_ptr(),
                current.element,
                current.prev.as_ptr(),
                current.next.as_ptr(),
            )
        };
        out.push_str(&line);
    }
}

#[cfg(test)]
mod tests {
    use crate::list::{connect, Error, List};

    #[test]
    fn dump_lists_every_node() {
        let list = List::from([1, 2, 3]);
        let dump = list.dump().unwrap();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("[head sentinel]"));
        assert!(lines[4].contains("[tail sentinel]"));
        assert!(lines[1].contains("value=1"));
        assert!(lines[2].contains("value=2"));
        assert!(lines[3].contains("value=3"));
    }

    #[test]
    fn dump_empty_list() {
        let list = List::<i32>::new();
        let dump = list.dump().unwrap();
        assert_eq!(dump.lines().count(), 2);
    }

    #[test]
    fn no_cycle_through_public_api() {
        let mut list = List::new();
        assert!(!list.has_cycle());

        for i in 0..8 {
            list.push_back(i);
        }
        assert!(!list.has_cycle());

        list.insert(3, 99).unwrap();
        list.remove(0).unwrap();
        list.pop_back();
        assert!(!list.has_cycle());

        list.clear();
        assert!(!list.has_cycle());
    }

    #[test]
    fn forged_cycle_is_detected_and_reported() {
        let mut list = List::from([1, 2, 3, 4]);
        assert!(!list.has_cycle());

        let first = list.front_node();
        let second = unsafe { first.as_ref().next };
        let third = unsafe { second.as_ref().next };
        let fourth = unsafe { third.as_ref().next };

        // Forge a corrupted chain: point the third node's forward link back
        // at the first.
        unsafe { connect(third, first) };
        assert!(list.has_cycle());
        assert!(matches!(list.dump(), Err(Error::Corrupted { .. })));

        // Repair both clobbered links so the list can be dropped normally.
        unsafe { connect(third, fourth) };
        unsafe { connect(list.head_node(), first) };
        assert!(!list.has_cycle());
        assert_eq!(list.dump().unwrap().lines().count(), 6);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    }
}
