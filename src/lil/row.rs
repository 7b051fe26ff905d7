use std::fmt::Display;
use std::ops::{Add, AddAssign};
use auto_impl_ops::auto_ops;
use itertools::Itertools;
use num_traits::Zero;
use crate::{Error, Result};

/// One row of a [`LilMat`](super::LilMat): entries sorted strictly
/// ascending by column, one entry per column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LilRow {
    ncols: usize,
    entries: Vec<(usize, i64)>,
}

impl LilRow {
    pub fn zero(ncols: usize) -> Self {
        Self { ncols, entries: vec![] }
    }

    pub fn from_entries<T>(ncols: usize, entries: T) -> Self
    where T: IntoIterator<Item = (usize, i64)> {
        let mut row = Self::zero(ncols);
        for (j, a) in entries {
            row.set(j, a);
        }
        row
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, a)| a.is_zero())
    }

    pub fn set(&mut self, j: usize, a: i64) {
        assert!(j < self.ncols, "col {j} out of range, ncols = {}", self.ncols);
        match self.entries.binary_search_by_key(&j, |e| e.0) {
            Ok(k) => self.entries[k].1 = a,
            Err(k) => self.entries.insert(k, (j, a)),
        }
    }

    pub fn get(&self, j: usize) -> i64 {
        assert!(j < self.ncols, "col {j} out of range, ncols = {}", self.ncols);
        match self.entries.binary_search_by_key(&j, |e| e.0) {
            Ok(k) => self.entries[k].1,
            Err(_) => 0,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &i64)> {
        self.entries.iter().map(|(j, a)| (*j, a))
    }

    pub fn iter_nz(&self) -> impl Iterator<Item = (usize, &i64)> {
        self.iter().filter(|(_, a)| !a.is_zero())
    }

    pub fn dense(&self) -> impl Iterator<Item = i64> + '_ {
        let mut entries = self.entries.iter().peekable();
        (0..self.ncols).map(move |j| match entries.next_if(|e| e.0 == j) {
            Some(&(_, a)) => a,
            None => 0,
        })
    }

    pub fn to_dense(&self) -> Vec<i64> {
        self.dense().collect()
    }

    pub fn add_from(&mut self, other: &LilRow) -> Result<()> {
        if self.ncols != other.ncols {
            return Err(Error::WidthMismatch { lhs: self.ncols, rhs: other.ncols });
        }
        self.merge(other);
        Ok(())
    }

    // Entries summing to 0 are kept, matching `set(j, 0)`.
    pub(crate) fn merge(&mut self, other: &LilRow) {
        for (j, &a) in other.iter() {
            match self.entries.binary_search_by_key(&j, |e| e.0) {
                Ok(k) => self.entries[k].1 += a,
                Err(k) => self.entries.insert(k, (j, a)),
            }
        }
    }
}

impl Default for LilRow {
    fn default() -> Self {
        Self::zero(0)
    }
}

#[auto_ops]
impl<'a, 'b> Add<&'b LilRow> for &'a LilRow {
    type Output = LilRow;
    fn add(self, rhs: &'b LilRow) -> Self::Output {
        assert_eq!(self.ncols, rhs.ncols);
        let mut res = self.clone();
        res.merge(rhs);
        res
    }
}

impl Display for LilRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dense().join(" "))
    }
}
