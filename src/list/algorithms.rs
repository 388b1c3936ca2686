use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Add;

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
    /// Deep-copies the node structure: the clone is fully independent of the
    /// original, and mutating one never changes the other.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
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
    /// value. The scan is lazy and stops at the first match; the sentinels
    /// carry no value and can never match.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
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

    /// Builds a new list holding all elements of `self` followed by all
    /// elements of `other`, in order. Neither operand is changed; the same
    /// operation is available as `&a + &b`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let ints = List::from([3, 1, 4]);
    /// let more = List::from([1, 6]);
    ///
    /// let combined = ints.concat(&more);
    /// assert_eq!(combined.to_string(), "(3, 1, 4, 1, 6)");
    /// assert_eq!(ints.len(), 3);
    /// assert_eq!(more.len(), 2);
    /// ```
    pub fn concat(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl<T: Clone> Add<&List<T>> for &List<T> {
    type Output = List<T>;

    /// Joins two lists together: `&a + &b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    ///
    /// let a = List::from([1, 2]);
    /// let b = List::from([3]);
    /// assert_eq!((&a + &b).to_vec(), vec![1, 2, 3]);
    /// ```
    fn add(self, other: &List<T>) -> List<T> {
        self.concat(other)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;

    #[test]
    fn list_eq_and_ord() {
        let a = List::from([1, 2, 3]);
        let b = List::from([1, 2, 3]);
        let c = List::from([1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a < c);
        assert!(List::<i32>::new() < a);
    }

    #[test]
    fn list_clone_is_independent() {
        let original = List::from([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.push_back(4);
        assert_eq!(copy.set(0, 9), Ok(1));
        assert_eq!(original.to_vec(), vec![1, 2, 3]);
        assert_eq!(copy.to_vec(), vec![9, 2, 3, 4]);
    }

    #[test]
    fn list_contains() {
        let list = List::from(["three", "point", "one"]);
        assert!(list.contains(&"three"));
        assert!(list.contains(&"one"));
        assert!(!list.contains(&"four"));
        assert!(!List::<&str>::new().contains(&"three"));
    }

    #[test]
    fn list_concat() {
        let ints = List::from(["3", ".", "1"]);
        let words = List::from(["four", "one", "six"]);

        let combined = ints.concat(&words);
        assert_eq!(combined.len(), ints.len() + words.len());
        assert_eq!(combined.to_string(), "(3, ., 1, four, one, six)");

        // neither operand is mutated
        assert_eq!(ints.to_string(), "(3, ., 1)");
        assert_eq!(words.to_string(), "(four, one, six)");

        assert_eq!(&ints + &words, combined);
        assert_eq!(
            (&List::<i32>::new() + &List::new()).to_string(),
            "()"
        );
    }
}
