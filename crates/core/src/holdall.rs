//! Append-only ordered collection.
//!
//! A `Holdall` remembers the order in which values were put into it and can be
//! reordered afterwards with an arbitrary comparator. It never removes values:
//! its length only grows until the whole collection is dropped.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::error::{CapacityError, Result};

/// Capacity reserved by the first `put`.
const CAPACITY_MIN: usize = 4;

/// Factor applied to the capacity when the collection is full.
const CAPACITY_MUL: usize = 2;

#[derive(Debug, Clone)]
pub struct Holdall<T> {
    items: Vec<T>,
}

impl<T> Default for Holdall<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Holdall<T> {
    /// Creates an empty collection. Nothing is allocated until the first `put`.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends `value` after every value already stored.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when the storage cannot grow. The collection
    /// is left untouched and `value` is dropped.
    pub fn put(&mut self, value: T) -> Result<()> {
        self.reserve_one()?;
        self.items.push(value);
        Ok(())
    }

    /// Makes sure the next `put` will not need to allocate.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when the storage cannot grow.
    pub fn reserve_one(&mut self) -> Result<()> {
        let capacity = self.items.capacity();
        if self.items.len() < capacity {
            return Ok(());
        }
        let target = if capacity == 0 {
            CAPACITY_MIN
        } else {
            capacity
                .checked_mul(CAPACITY_MUL)
                .ok_or(CapacityError::Overflow)?
        };
        self.items.try_reserve_exact(target - self.items.len())?;
        Ok(())
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Calls `f` on every value in storage order.
    ///
    /// Stops at the first `Err` and returns it; the remaining values are not
    /// visited.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `f`.
    pub fn apply<E, F>(&self, mut f: F) -> core::result::Result<(), E>
    where
        F: FnMut(&T) -> core::result::Result<(), E>,
    {
        for item in &self.items {
            f(item)?;
        }
        Ok(())
    }

    /// Calls `consume(value, map(context, value))` on every value in storage
    /// order, stopping at the first `Err`.
    ///
    /// This lets a caller pair a lookup in some external structure with a
    /// final action on the value without the collection knowing either type.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `consume`.
    pub fn apply_context<C, M, E, F, G>(
        &self,
        context: &mut C,
        mut map: F,
        mut consume: G,
    ) -> core::result::Result<(), E>
    where
        F: FnMut(&mut C, &T) -> M,
        G: FnMut(&T, M) -> core::result::Result<(), E>,
    {
        for item in &self.items {
            let mapped = map(context, item);
            consume(item, mapped)?;
        }
        Ok(())
    }

    /// Same as [`Holdall::apply_context`] with a second context handed to
    /// `consume`.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `consume`.
    pub fn apply_context2<C1, C2, M, E, F, G>(
        &self,
        context1: &mut C1,
        mut map: F,
        context2: &mut C2,
        mut consume: G,
    ) -> core::result::Result<(), E>
    where
        F: FnMut(&mut C1, &T) -> M,
        G: FnMut(&mut C2, &T, M) -> core::result::Result<(), E>,
    {
        for item in &self.items {
            let mapped = map(context1, item);
            consume(context2, item, mapped)?;
        }
        Ok(())
    }

    /// Reorders the stored values according to `compare`.
    ///
    /// The sort is stable: values that compare equal keep their relative
    /// order. Any comparator is accepted. One that is not a total order yields
    /// an unspecified order, but every value is still present exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] when the scratch space cannot be allocated;
    /// the collection is then left in its previous order.
    pub fn sort_by<F>(&mut self, mut compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.items.len();
        if len < 2 {
            return Ok(());
        }
        let mut order = Vec::new();
        order.try_reserve_exact(len)?;
        order.extend(0..len);
        let mut scratch = Vec::new();
        scratch.try_reserve_exact(len)?;
        scratch.resize(len, 0);

        let items = &self.items;
        let mut width = 1;
        while width < len {
            let mut lo = 0;
            while lo < len {
                let mid = lo.saturating_add(width).min(len);
                let hi = mid.saturating_add(width).min(len);
                merge_runs(
                    &order[lo..mid],
                    &order[mid..hi],
                    &mut scratch[lo..hi],
                    |a, b| compare(&items[a], &items[b]),
                );
                lo = hi;
            }
            core::mem::swap(&mut order, &mut scratch);
            width = width.saturating_mul(2);
        }

        // `order[k]` is the old position of the value that belongs at `k`;
        // turn it into destinations and move values by swapping.
        for (new, &old) in order.iter().enumerate() {
            scratch[old] = new;
        }
        for i in 0..len {
            while scratch[i] != i {
                let j = scratch[i];
                self.items.swap(i, j);
                scratch.swap(i, j);
            }
        }
        Ok(())
    }
}

/// Merges two runs of positions into `out`, taking from `left` unless the
/// head of `right` is strictly smaller.
fn merge_runs<F>(left: &[usize], right: &[usize], out: &mut [usize], mut compare: F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_right = match (left.get(i), right.get(j)) {
            (Some(&l), Some(&r)) => compare(r, l) == Ordering::Less,
            (None, Some(_)) => true,
            _ => false,
        };
        if take_right {
            *slot = right[j];
            j += 1;
        } else if let Some(&l) = left.get(i) {
            *slot = l;
            i += 1;
        }
    }
}

impl<'a, T> IntoIterator for &'a Holdall<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
