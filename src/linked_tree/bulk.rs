use alloc::vec::Vec;

use tracing::{debug, warn};

use super::LinkedTree;
use crate::error::{Error, Result};
use crate::raw::RawLinkedTree;

impl<V> LinkedTree<V> {
    /// Builds a balanced tree from parallel key and payload vectors.
    ///
    /// `values[i]` is stored under `keys[i]`. The pairs are sorted by key and
    /// inserted median first, so the height is about log<sub>2</sub> n no
    /// matter how the input was ordered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the vectors differ in length; no
    /// tree is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_tree::LinkedTree;
    ///
    /// let keys = vec![10, 8, 4, 2, 15, 12, 7];
    /// let values = vec!["d10", "d8", "d4", "d2", "d15", "d12", "d7"];
    /// let tree = LinkedTree::from_parallel(keys, values)?;
    ///
    /// assert_eq!(tree.inorder_iter().collect::<Vec<_>>(), [2, 4, 7, 8, 10, 12, 15]);
    /// assert_eq!(tree.depth(8), Some(0));
    /// assert_eq!(tree.search(15).unwrap().first(), Some(&"d15"));
    /// # Ok::<(), linked_tree::Error>(())
    /// ```
    pub fn from_parallel(keys: Vec<i32>, values: Vec<V>) -> Result<Self> {
        if keys.len() != values.len() {
            warn!(keys = keys.len(), values = values.len(), "refusing to build tree from mismatched inputs");
            return Err(Error::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        Ok(Self::from_pairs(keys.into_iter().zip(values).collect()))
    }

    fn from_pairs(mut pairs: Vec<(i32, V)>) -> Self {
        // Stable, so payloads of a repeated key keep their relative order.
        pairs.sort_by_key(|&(key, _)| key);
        debug!(len = pairs.len(), "building balanced tree");

        let mut raw = RawLinkedTree::with_capacity(pairs.len());
        let mut slots: Vec<Option<(i32, V)>> = pairs.into_iter().map(Some).collect();
        insert_median_first(&mut raw, &mut slots);
        Self { raw }
    }
}

/// Inserts the middle entry of `slots`, then the middles of each half.
fn insert_median_first<V>(raw: &mut RawLinkedTree<V>, slots: &mut [Option<(i32, V)>]) {
    if slots.is_empty() {
        return;
    }
    let mid = (slots.len() - 1) / 2;
    if let Some((key, value)) = slots[mid].take() {
        raw.insert(key, value);
    }
    let (lower, upper) = slots.split_at_mut(mid);
    insert_median_first(raw, lower);
    insert_median_first(raw, &mut upper[1..]);
}

impl<V> FromIterator<(i32, V)> for LinkedTree<V> {
    /// Collects the pairs and builds a balanced tree from them.
    fn from_iter<I: IntoIterator<Item = (i32, V)>>(iter: I) -> Self {
        Self::from_pairs(iter.into_iter().collect())
    }
}

impl<V, const N: usize> From<[(i32, V); N]> for LinkedTree<V> {
    /// Builds a balanced tree from an array of pairs.
    ///
    /// ```
    /// use linked_tree::LinkedTree;
    ///
    /// let tree = LinkedTree::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    /// assert_eq!(tree.preorder_iter().collect::<Vec<_>>(), [2, 1, 3]);
    /// ```
    fn from(pairs: [(i32, V); N]) -> Self {
        Self::from_pairs(pairs.into_iter().collect())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use proptest::prelude::*;

    use super::*;

    fn height(tree: &LinkedTree<()>) -> usize {
        tree.inorder_iter().filter_map(|key| tree.depth(key)).max().map_or(0, |deepest| deepest + 1)
    }

    #[test]
    fn mismatched_lengths_build_nothing() {
        let result = LinkedTree::from_parallel(vec![1, 2, 3], vec!["a", "b"]);
        assert_eq!(result.err(), Some(Error::LengthMismatch { keys: 3, values: 2 }));
    }

    #[test]
    fn empty_input_builds_empty_tree() {
        let tree: LinkedTree<u8> = LinkedTree::from_parallel(Vec::new(), Vec::new()).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn payloads_follow_their_keys_through_the_sort() {
        let keys = vec![26, 37, -42, 13, 35, 56, -30, 47, 70];
        let values: Vec<_> = keys.iter().map(|key| key * 100).collect();
        let tree = LinkedTree::from_parallel(keys.clone(), values).unwrap();

        for key in keys {
            assert_eq!(tree.search(key).unwrap().as_slice(), &[key * 100]);
        }
        assert_eq!(tree.preorder_iter().next(), Some(35));
    }

    #[test]
    fn repeated_keys_merge() {
        let tree = LinkedTree::from_parallel(vec![5, 1, 5], vec!['x', 'y', 'z']).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.search(5).unwrap().len(), 2);
    }

    #[test]
    fn sorted_input_is_not_a_chain() {
        let tree: LinkedTree<()> = (0..1023).map(|key| (key, ())).collect();
        assert_eq!(height(&tree), 10);
    }

    proptest! {
        #[test]
        fn height_is_logarithmic(keys in prop::collection::hash_set(any::<i32>(), 1..300)) {
            let n = keys.len();
            let tree: LinkedTree<()> = keys.into_iter().map(|key| (key, ())).collect();
            let bound = (usize::BITS - n.leading_zeros()) as usize;
            prop_assert_eq!(tree.len(), n);
            prop_assert!(height(&tree) <= bound);
        }
    }
}
