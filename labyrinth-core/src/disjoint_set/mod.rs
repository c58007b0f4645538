//! Union-find over arbitrary hashable elements.
//!
//! Elements are assigned dense integer ids on insertion and the forest lives
//! in a flat slot arena indexed by those ids. Each slot either points at its
//! parent or marks a root and records that root's rank. `find_set` performs
//! full path compression and `union` links by rank, giving amortised
//! near-constant operations.

use std::{
    borrow::Borrow,
    collections::{HashMap, hash_map::Entry},
    hash::Hash,
};

use crate::error::DisjointSetError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Slot {
    Parent(usize),
    Root { rank: u32 },
}

/// A partition of elements into disjoint sets.
///
/// Ids handed out by [`DisjointSet::make_set`] are stable and never reused.
/// A representative id returned by [`DisjointSet::find_set`] identifies a set
/// only until the next [`DisjointSet::union`] touching that set.
///
/// # Examples
/// ```
/// use labyrinth_core::DisjointSet;
///
/// let mut forest = DisjointSet::new();
/// for item in ["a", "b", "c"] {
///     forest.make_set(item)?;
/// }
/// forest.union("a", "b")?;
/// assert_eq!(forest.find_set("a")?, forest.find_set("b")?);
/// assert_ne!(forest.find_set("a")?, forest.find_set("c")?);
/// assert_eq!(forest.set_count(), 2);
/// # Ok::<(), labyrinth_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<T> {
    slots: Vec<Slot>,
    ids: HashMap<T, usize>,
    trail: Vec<usize>,
    sets: usize,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            ids: HashMap::new(),
            trail: Vec::new(),
            sets: 0,
        }
    }
}

impl<T: Eq + Hash> DisjointSet<T> {
    /// Creates an empty disjoint set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty disjoint set with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ids: HashMap::with_capacity(capacity),
            trail: Vec::new(),
            sets: 0,
        }
    }

    /// Returns the number of tracked elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.slots.len() }

    /// Returns `true` when no element has been inserted.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }

    /// Returns the current number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub fn set_count(&self) -> usize { self.sets }

    /// Returns `true` when `item` has been inserted.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ids.contains_key(item)
    }

    /// Inserts `item` as a new singleton set and returns its id.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::DuplicateElement`] if `item` is already
    /// tracked.
    pub fn make_set(&mut self, item: T) -> Result<usize, DisjointSetError> {
        let id = self.slots.len();
        match self.ids.entry(item) {
            Entry::Occupied(existing) => Err(DisjointSetError::DuplicateElement {
                id: *existing.get(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(id);
                self.slots.push(Slot::Root { rank: 0 });
                self.sets += 1;
                Ok(id)
            }
        }
    }

    /// Returns the representative id of the set containing `item`.
    ///
    /// Every slot visited on the way to the root is repointed directly at the
    /// root before returning.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] if `item` was never
    /// inserted.
    pub fn find_set<Q>(&mut self, item: &Q) -> Result<usize, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.id_of(item)?;
        Ok(self.find_root(id))
    }

    /// Returns `true` when both elements belong to the same set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] if either element was
    /// never inserted.
    pub fn same_set<Q>(&mut self, first: &Q, second: &Q) -> Result<bool, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Ok(self.find_set(first)? == self.find_set(second)?)
    }

    /// Merges the sets containing `first` and `second`, returning the
    /// representative id of the merged set.
    ///
    /// The root with the larger rank becomes the parent. When ranks are equal
    /// the root of `second` becomes the parent and its rank grows by one.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownElement`] if either element was
    /// never inserted, or [`DisjointSetError::SameSet`] if both elements
    /// already share a set.
    pub fn union<Q>(&mut self, first: &Q, second: &Q) -> Result<usize, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let first_id = self.id_of(first)?;
        let second_id = self.id_of(second)?;
        let first_root = self.find_root(first_id);
        let second_root = self.find_root(second_id);

        if first_root == second_root {
            return Err(DisjointSetError::SameSet {
                representative: first_root,
            });
        }

        let parent = self.link(first_root, second_root);
        self.sets -= 1;
        Ok(parent)
    }

    fn id_of<Q>(&self, item: &Q) -> Result<usize, DisjointSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.ids
            .get(item)
            .copied()
            .ok_or(DisjointSetError::UnknownElement)
    }

    fn find_root(&mut self, id: usize) -> usize {
        self.trail.clear();
        let mut current = id;
        while let Slot::Parent(parent) = self.slots[current] {
            self.trail.push(current);
            current = parent;
        }

        for &visited in &self.trail {
            self.slots[visited] = Slot::Parent(current);
        }
        current
    }

    fn link(&mut self, first_root: usize, second_root: usize) -> usize {
        let first_rank = rank(self.slots[first_root]);
        let second_rank = rank(self.slots[second_root]);
        let (parent, child) = choose_parent_child(first_root, second_root, first_rank, second_rank);

        self.slots[child] = Slot::Parent(parent);
        if first_rank == second_rank {
            self.slots[parent] = Slot::Root {
                rank: first_rank.saturating_add(1),
            };
        }
        parent
    }
}

fn rank(slot: Slot) -> u32 {
    match slot {
        Slot::Root { rank } => rank,
        Slot::Parent(_) => 0,
    }
}

fn choose_parent_child(
    first_root: usize,
    second_root: usize,
    first_rank: u32,
    second_rank: u32,
) -> (usize, usize) {
    if first_rank > second_rank {
        (first_root, second_root)
    } else {
        (second_root, first_root)
    }
}
