//! Fixed-length bit vectors used as the universal solution encoding.
//!
//! There are two ways to copy a [`BitVector`], and they are deliberately
//! distinct:
//!
//! - [`Clone`] produces a deep copy with its own storage. Mutating the copy
//!   never affects the original.
//! - [`BitVector::view`] produces a [`BitView`] that borrows the original's
//!   storage read-only. The borrow checker guarantees the original cannot be
//!   mutated while a view is alive; promote the view with
//!   [`BitView::to_bit_vector`] to get an independent copy.

use crate::error::{Error, Result};
use fixedbitset::FixedBitSet;
use std::fmt;
use std::str::FromStr;

/// A fixed-size, zero-indexed sequence of booleans.
///
/// The length is fixed at construction.
///
/// # Examples
///
/// ```
/// use u_nphard::bits::BitVector;
///
/// let mut v = BitVector::zeros(4);
/// v.set(1, true);
/// v.toggle(3);
/// assert_eq!(v.to_string(), "0101");
/// assert_eq!(v.count_ones(), 2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitVector {
    bits: FixedBitSet,
}

impl BitVector {
    /// Creates an all-zero vector of `len` bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(len),
        }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the vector has zero length.
    pub fn is_empty(&self) -> bool {
        self.bits.len() == 0
    }

    /// Returns bit `index`. Out-of-range indices read as `false`.
    pub fn get(&self, index: usize) -> bool {
        self.bits.contains(index)
    }

    /// Sets bit `index` to `value`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, value: bool) {
        self.bits.set(index, value);
    }

    /// Flips bit `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn toggle(&mut self, index: usize) {
        self.bits.toggle(index);
    }

    /// Whether every bit is set. Vacuously true for an empty vector.
    pub fn all(&self) -> bool {
        self.view().all()
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Indices of set bits, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.ones()
    }

    /// Borrows the storage as a read-only view.
    pub fn view(&self) -> BitView<'_> {
        BitView { bits: &self.bits }
    }
}

/// A read-only view sharing a [`BitVector`]'s storage.
#[derive(Clone, Copy)]
pub struct BitView<'a> {
    bits: &'a FixedBitSet,
}

impl<'a> BitView<'a> {
    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the viewed vector has zero length.
    pub fn is_empty(&self) -> bool {
        self.bits.len() == 0
    }

    /// Returns bit `index`. Out-of-range indices read as `false`.
    pub fn get(&self, index: usize) -> bool {
        self.bits.contains(index)
    }

    /// Whether every bit is set.
    pub fn all(&self) -> bool {
        self.bits.count_ones(..) == self.bits.len()
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Indices of set bits, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + 'a {
        self.bits.ones()
    }

    /// Deep-copies the viewed bits into an independent vector.
    pub fn to_bit_vector(&self) -> BitVector {
        BitVector {
            bits: self.bits.clone(),
        }
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let values: Vec<bool> = iter.into_iter().collect();
        let mut v = BitVector::zeros(values.len());
        for (i, b) in values.into_iter().enumerate() {
            if b {
                v.set(i, true);
            }
        }
        v
    }
}

impl FromStr for BitVector {
    type Err = Error;

    /// Parses a string of `0` and `1` characters, index 0 first.
    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(index, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(Error::InvalidBit { index, found }),
            })
            .collect()
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len() {
            f.write_str(if self.get(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector(\"{self}\")")
    }
}
