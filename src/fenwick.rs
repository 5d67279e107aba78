use alloc::vec::Vec;

use crate::FenwickError;
use crate::bits::{highest_power_of_two_leq, lowbit};

/// A fixed-size Fenwick tree (binary indexed tree) over `i64` accumulators.
///
/// The public API is 1-indexed: logical elements live at `1..=len()`, and `query(0)` is the
/// empty prefix. Inputs may be any integer type that widens into `i64`; accumulators wrap on
/// overflow, which keeps `update` exactly additive.
///
/// The size is fixed at construction. To grow, read the logical values with [`Self::values`],
/// extend them, and rebuild with [`Self::from_values`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "alloc::vec::Vec<i64>", into = "alloc::vec::Vec<i64>")
)]
pub struct FenwickTree {
    tree: Vec<i64>, // 1-indexed, tree[0] == 0
}

impl FenwickTree {
    /// Creates a tree of `n` zeros.
    ///
    /// # Panics
    /// Panics with "capacity overflow" if `n + 1` slots cannot be addressed, as `Vec` does.
    pub fn new(n: usize) -> Self {
        let Some(slots) = n.checked_add(1) else {
            panic!("capacity overflow");
        };
        Self {
            tree: alloc::vec![0; slots],
        }
    }

    /// Creates a tree from 0-indexed `values`; logical element `k` is `values[k - 1]`.
    ///
    /// Runs in `O(n)`.
    pub fn from_values<T: Copy + Into<i64>>(values: &[T]) -> Self {
        let n = values.len();
        let mut tree = alloc::vec![0i64; n + 1];
        for (i, &v) in values.iter().enumerate() {
            tree[i + 1] = v.into();
        }
        propagate(&mut tree);
        fdebug!(n, "from_values");
        Self { tree }
    }

    /// Number of logical elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces the contents with the 1-indexed `values` (`values[0]` is ignored).
    ///
    /// `values.len()` must be `len() + 1`. Each node pushes its partial sum to its parent once,
    /// so this is `O(n)` rather than the `O(n log n)` of repeated [`Self::update`] calls.
    pub fn build<T: Copy + Into<i64>>(&mut self, values: &[T]) -> Result<(), FenwickError> {
        let expected = self.tree.len();
        if values.len() != expected {
            fwarn!(expected, actual = values.len(), "build: size mismatch");
            return Err(FenwickError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }

        self.tree[0] = 0;
        for (slot, &v) in self.tree.iter_mut().zip(values).skip(1) {
            *slot = v.into();
        }
        propagate(&mut self.tree);
        fdebug!(n = self.len(), "build");
        Ok(())
    }

    /// Adds `delta` to element `index` (`1 <= index <= len()`).
    pub fn update<D: Into<i64>>(&mut self, index: usize, delta: D) -> Result<(), FenwickError> {
        self.check_element(index)?;
        let delta = delta.into();
        ftrace!(index, delta, "update");
        self.add(index, delta);
        Ok(())
    }

    /// Applies `(index, delta)` pairs in order.
    ///
    /// All indexes are checked up front; if any is out of range nothing is applied.
    pub fn batch_update<D: Copy + Into<i64>>(
        &mut self,
        deltas: &[(usize, D)],
    ) -> Result<(), FenwickError> {
        for &(index, _) in deltas {
            self.check_element(index)?;
        }
        for &(index, delta) in deltas {
            self.add(index, delta.into());
        }
        fdebug!(count = deltas.len(), "batch_update");
        Ok(())
    }

    /// Sum of elements `1..=index`. `query(0)` is `0`.
    pub fn query(&self, index: usize) -> Result<i64, FenwickError> {
        let n = self.len();
        if index > n {
            fwarn!(index, n, "query: index out of range");
            return Err(FenwickError::IndexOutOfRange {
                index,
                min: 0,
                max: n,
            });
        }
        Ok(self.prefix(index))
    }

    /// Sum of elements `left..=right`.
    ///
    /// An empty range (`left > right`) sums to `0` and is not checked against the bounds.
    pub fn query_range(&self, left: usize, right: usize) -> Result<i64, FenwickError> {
        if left > right {
            return Ok(0);
        }
        self.check_element(left)?;
        self.check_element(right)?;
        Ok(self.prefix(right).wrapping_sub(self.prefix(left - 1)))
    }

    /// Current value of element `index`.
    pub fn point(&self, index: usize) -> Result<i64, FenwickError> {
        self.query_range(index, index)
    }

    /// Sum of all elements.
    pub fn total(&self) -> i64 {
        self.prefix(self.len())
    }

    /// Resets every element to zero, keeping the size.
    pub fn clear(&mut self) {
        self.tree.fill(0);
        fdebug!(n = self.len(), "clear");
    }

    /// Returns the largest `k` such that `query(k) <= target`, or `0` if there is none.
    ///
    /// Binary lifting over the tree, `O(log n)`. The answer is only meaningful when every element
    /// is non-negative, so that prefix sums are monotone.
    pub fn lower_bound(&self, mut target: i64) -> usize {
        let n = self.len();
        let mut idx = 0usize;
        let mut bit = highest_power_of_two_leq(n);
        while bit != 0 {
            let next = idx + bit;
            if next <= n && self.tree[next] <= target {
                target = target.wrapping_sub(self.tree[next]);
                idx = next;
            }
            bit >>= 1;
        }
        idx
    }

    /// All prefix sums `query(1)..=query(n)`, computed in `O(n)`.
    pub fn prefix_sums(&self) -> Vec<i64> {
        let n = self.len();
        let mut sums = alloc::vec![0i64; n + 1];
        for i in 1..=n {
            // i & (i - 1) == i - lowbit(i): the prefix right before tree[i]'s span.
            sums[i] = sums[i & (i - 1)].wrapping_add(self.tree[i]);
        }
        sums.remove(0);
        sums
    }

    /// The logical elements as a 0-indexed vector (`values()[k - 1] == point(k)`).
    pub fn values(&self) -> Vec<i64> {
        let mut prev = 0i64;
        self.prefix_sums()
            .into_iter()
            .map(|sum| {
                let v = sum.wrapping_sub(prev);
                prev = sum;
                v
            })
            .collect()
    }

    fn check_element(&self, index: usize) -> Result<(), FenwickError> {
        let n = self.len();
        if index == 0 || index > n {
            fwarn!(index, n, "index out of range");
            return Err(FenwickError::IndexOutOfRange {
                index,
                min: 1,
                max: n,
            });
        }
        Ok(())
    }

    fn add(&mut self, index: usize, delta: i64) {
        let n = self.len();
        let mut i = index;
        while i <= n {
            self.tree[i] = self.tree[i].wrapping_add(delta);
            i += lowbit(i);
        }
    }

    fn prefix(&self, count: usize) -> i64 {
        let mut i = count;
        let mut sum = 0i64;
        while i > 0 {
            sum = sum.wrapping_add(self.tree[i]);
            i -= lowbit(i);
        }
        sum
    }
}

impl Default for FenwickTree {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Turns raw values in `tree[1..]` into Fenwick accumulators.
fn propagate(tree: &mut [i64]) {
    let n = tree.len() - 1;
    for i in 1..=n {
        let parent = i + lowbit(i);
        if parent <= n {
            tree[parent] = tree[parent].wrapping_add(tree[i]);
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<Vec<i64>> for FenwickTree {
    type Error = FenwickError;

    fn try_from(tree: Vec<i64>) -> Result<Self, Self::Error> {
        match tree.first().copied() {
            Some(0) => Ok(Self { tree }),
            _ => Err(FenwickError::InvalidSnapshot),
        }
    }
}

#[cfg(feature = "serde")]
impl From<FenwickTree> for Vec<i64> {
    fn from(t: FenwickTree) -> Self {
        t.tree
    }
}
