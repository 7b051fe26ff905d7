use std::fmt::Display;
use std::ops::{Add, AddAssign};
use auto_impl_ops::auto_ops;
use either::Either;
use itertools::{Itertools, repeat_n};
use log::trace;
use num_traits::ToPrimitive;
use crate::{Error, MatTrait, Result};
use super::row::LilRow;

/// Sparse matrix over `i64` in list-of-lists form. Only rows that were
/// ever written are stored, sorted strictly ascending by row index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LilMat {
    nrows: usize,
    ncols: usize,
    rows: Vec<(usize, LilRow)>,
}

impl MatTrait for LilMat {
    fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }
}

impl LilMat {
    pub fn zero(shape: (usize, usize)) -> Self {
        Self { nrows: shape.0, ncols: shape.1, rows: vec![] }
    }

    pub fn from_entries<T>(shape: (usize, usize), entries: T) -> Self
    where T: IntoIterator<Item = (usize, usize, i64)> {
        let mut mat = Self::zero(shape);
        for (i, j, a) in entries {
            mat.set(i, j, a);
        }
        mat
    }

    pub fn set(&mut self, i: usize, j: usize, a: i64) {
        assert!(self.contains(i, j), "({i}, {j}) out of range, shape = {:?}", self.shape());
        self.row_mut(i).set(j, a);
    }

    pub fn get(&self, i: usize, j: usize) -> i64 {
        assert!(self.contains(i, j), "({i}, {j}) out of range, shape = {:?}", self.shape());
        self.row(i).map_or(0, |r| r.get(j))
    }

    pub fn row(&self, i: usize) -> Option<&LilRow> {
        let k = self.rows.binary_search_by_key(&i, |r| r.0).ok()?;
        Some(&self.rows[k].1)
    }

    fn row_mut(&mut self, i: usize) -> &mut LilRow {
        let k = match self.rows.binary_search_by_key(&i, |r| r.0) {
            Ok(k) => k,
            Err(k) => {
                self.rows.insert(k, (i, LilRow::zero(self.ncols)));
                k
            }
        };
        &mut self.rows[k].1
    }

    pub fn rows(&self) -> impl Iterator<Item = (usize, &LilRow)> {
        self.rows.iter().map(|(i, r)| (*i, r))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &i64)> {
        self.rows().flat_map(|(i, r)|
            r.iter().map(move |(j, a)| (i, j, a))
        )
    }

    pub fn iter_nz(&self) -> impl Iterator<Item = (usize, usize, &i64)> {
        self.rows().flat_map(|(i, r)|
            r.iter_nz().map(move |(j, a)| (i, j, a))
        )
    }

    pub fn nnz(&self) -> usize {
        self.rows.iter().map(|(_, r)| r.nnz()).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.rows.iter().all(|(_, r)| r.is_zero())
    }

    pub fn density(&self) -> f64 {
        let (m, n) = self.shape();
        if m == 0 || n == 0 {
            return 0.0
        }

        let nnz = self.nnz().to_f64().unwrap();
        let total = (m * n).to_f64().unwrap();

        nnz / total
    }

    pub fn dense(&self) -> impl Iterator<Item = impl Iterator<Item = i64> + '_> + '_ {
        let n = self.ncols;
        let mut rows = self.rows.iter().peekable();
        (0..self.nrows).map(move |i| match rows.next_if(|r| r.0 == i) {
            Some((_, r)) => Either::Left(r.dense()),
            None => Either::Right(repeat_n(0, n)),
        })
    }

    pub fn to_dense(&self) -> Vec<Vec<i64>> {
        self.dense().map(|r| r.collect()).collect()
    }

    pub fn add_from(&mut self, other: &LilMat) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(Error::ShapeMismatch { lhs: self.shape(), rhs: other.shape() });
        }

        trace!("add {:?}, nnz: {} + {}", self.shape(), self.nnz(), other.nnz());

        for (i, r) in other.rows() {
            self.row_mut(i).merge(r);
        }
        Ok(())
    }
}

impl Default for LilMat {
    fn default() -> Self {
        Self::zero((0, 0))
    }
}

#[auto_ops]
impl<'a, 'b> Add<&'b LilMat> for &'a LilMat {
    type Output = LilMat;
    fn add(self, rhs: &'b LilMat) -> Self::Output {
        assert_eq!(self.shape(), rhs.shape());
        let mut res = self.clone();
        for (i, r) in rhs.rows() {
            res.row_mut(i).merge(r);
        }
        res
    }
}

impl Display for LilMat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.dense().map(|mut r| r.join(" ")).join("\n");
        write!(f, "{s}")
    }
}

#[cfg(test)]
impl LilMat {
    pub fn rand(shape: (usize, usize), density: f64) -> Self {
        use itertools::iproduct;
        use rand::Rng;

        let (m, n) = shape;
        let mut rng = rand::thread_rng();

        Self::from_entries(shape, iproduct!(0..m, 0..n).filter_map(|(i, j)|
            (rng.gen::<f64>() < density).then_some((i, j, 1))
        ))
    }
}
