//! Partial sorting helper used to order edges for Kruskal's algorithm.

use std::{cmp::Ordering, collections::BinaryHeap};

/// Returns references to the `k` smallest items of `items` in ascending
/// order.
///
/// Equal items keep their relative input order, so the output is
/// deterministic for a fixed input. Runs in `O(n log k)` using a bounded
/// max-heap.
///
/// # Examples
/// ```
/// use labyrinth_core::smallest_k;
///
/// let items = [5, 1, 4, 1, 3];
/// assert_eq!(smallest_k(3, &items), vec![&1, &1, &3]);
/// assert_eq!(smallest_k(10, &items).len(), 5);
/// ```
#[must_use]
pub fn smallest_k<T: Ord>(k: usize, items: &[T]) -> Vec<&T> {
    if k == 0 {
        return Vec::new();
    }

    let mut heap = BinaryHeap::with_capacity(k.min(items.len()));
    for (position, item) in items.iter().enumerate() {
        let ranked = Ranked { item, position };
        if heap.len() < k {
            heap.push(ranked);
        } else if let Some(mut largest) = heap.peek_mut()
            && ranked < *largest
        {
            *largest = ranked;
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|ranked| ranked.item)
        .collect()
}

/// An item paired with its input position so equal items stay stable.
struct Ranked<'a, T> {
    item: &'a T,
    position: usize,
}

impl<T: Ord> PartialEq for Ranked<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for Ranked<'_, T> {}

impl<T: Ord> Ord for Ranked<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.item
            .cmp(other.item)
            .then_with(|| self.position.cmp(&other.position))
    }
}

impl<T: Ord> PartialOrd for Ranked<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
