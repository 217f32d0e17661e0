//! Cubes: sets of minterms describable by a single product term.
//!
//! A [`Cube`] is an immutable set of input combinations of a fixed width.
//! When the bits on which all of its terms agree are fixed and the remaining
//! bits run through every combination, the set is a *valid implicant* and can
//! be written as one product term, e.g. `0-1` for `{1, 3}` at width 3.
//! Unions of cubes which are not implicants only exist transiently while
//! looking for larger implicants.
//!
//! # Examples
//!
//! ```
//! use qm_rs::cube::Cube;
//! use qm_rs::types::Width;
//!
//! let w = Width::new(3);
//! let a = Cube::new(w, [0, 1]);
//! let b = Cube::new(w, [2, 3]);
//! assert!(a.combinable(&b));
//! assert_eq!(a.combine(&b).to_string(), "0--");
//!
//! let c = Cube::new(w, [1, 2]);
//! assert!(!c.is_implicant());
//! assert_eq!(c.to_string(), "[001, 010]");
//! ```

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::TieBreak;
use crate::cost::CostFunction;
use crate::error::{Error, Result};
use crate::types::{Minterm, Width};

/// An immutable set of minterms of a given width, with its derived properties.
///
/// Equality, hashing and ordering only look at the width and the terms; the
/// derived properties are computed once, on construction.
#[derive(Debug, Clone)]
pub struct Cube {
    width: Width,
    terms: BTreeSet<Minterm>,
    /// Bits on which all terms agree
    overlap_mask: Minterm,
    /// The shared value of the agreeing bits (other bits are zero)
    overlap_value: Minterm,
    /// Terms with the agreeing bits masked out
    differences: BTreeSet<Minterm>,
    is_implicant: bool,
}

impl Cube {
    /// Creates a cube from a non-empty set of terms.
    ///
    /// # Panics
    ///
    /// Panics if `terms` is empty or contains a value outside `[0, 2^width)`.
    pub fn new(width: Width, terms: impl IntoIterator<Item = Minterm>) -> Self {
        let terms: BTreeSet<Minterm> = terms.into_iter().collect();
        assert!(!terms.is_empty(), "Cube must contain at least one term");
        if let Some(&last) = terms.last() {
            assert!(width.contains(last), "Term {} does not fit into width {}", last, width);
        }

        let mut terms_iter = terms.iter();
        let first = *terms_iter.next().unwrap_or(&0);
        let mut overlap_mask = width.mask();
        for &term in terms_iter {
            overlap_mask &= !(first ^ term);
        }
        let overlap_value = first & overlap_mask;
        let differences: BTreeSet<Minterm> = terms.iter().map(|&t| t & !overlap_mask).collect();

        let free_bits = width.bits() - overlap_mask.count_ones();
        let is_implicant = differences.len() as u64 == 1u64 << free_bits;

        Self {
            width,
            terms,
            overlap_mask,
            overlap_value,
            differences,
            is_implicant,
        }
    }

    /// Creates the cube containing only `term`.
    pub fn singleton(width: Width, term: Minterm) -> Self {
        Self::new(width, [term])
    }

    /// Parses the textual encoding of an implicant, most-significant bit first.
    ///
    /// Each character is `0` or `1` for a fixed bit, or `-` for a free bit. The
    /// width of the cube is the length of the pattern.
    ///
    /// ```
    /// use qm_rs::cube::Cube;
    ///
    /// let cube = Cube::from_pattern("1-0").unwrap();
    /// assert_eq!(cube.terms().iter().copied().collect::<Vec<_>>(), vec![4, 6]);
    /// ```
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let bits = pattern.chars().count() as u32;
        let width = Width::try_new(bits).ok_or(Error::WidthTooLarge {
            width: bits,
            max: Width::MAX_WIDTH,
        })?;

        let mut fixed_value: Minterm = 0;
        let mut free_positions = Vec::new();
        for (position, c) in pattern.chars().enumerate() {
            let bit = bits - 1 - position as u32;
            match c {
                '0' => {}
                '1' => fixed_value |= 1 << bit,
                '-' => free_positions.push(bit),
                _ => {
                    return Err(Error::InvalidPattern {
                        pattern: pattern.to_string(),
                        position,
                    })
                }
            }
        }

        let terms = (0..1u64 << free_positions.len()).map(|combination| {
            free_positions
                .iter()
                .enumerate()
                .filter(|&(i, _)| combination >> i & 1 == 1)
                .fold(fixed_value, |term, (_, &bit)| term | 1 << bit)
        });
        Ok(Self::new(width, terms))
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn terms(&self) -> &BTreeSet<Minterm> {
        &self.terms
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false: a cube has at least one term.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = Minterm> + '_ {
        self.terms.iter().copied()
    }

    pub fn contains(&self, term: Minterm) -> bool {
        self.terms.contains(&term)
    }

    /// Bit positions on which all terms agree.
    pub fn overlap_mask(&self) -> Minterm {
        self.overlap_mask
    }

    /// Value of the agreeing bits; zero outside [`Cube::overlap_mask`].
    pub fn overlap_value(&self) -> Minterm {
        self.overlap_value
    }

    /// The distinct terms with the agreeing bits masked out.
    pub fn differences(&self) -> &BTreeSet<Minterm> {
        &self.differences
    }

    /// Whether the terms are exactly all combinations of the non-agreeing bits.
    pub fn is_implicant(&self) -> bool {
        self.is_implicant
    }

    /// Number of fixed bits, i.e. literals of the product term.
    pub fn literal_count(&self) -> u32 {
        self.overlap_mask.count_ones()
    }

    /// Number of free bits.
    pub fn free_count(&self) -> u32 {
        self.width.bits() - self.literal_count()
    }

    /// Returns the cube containing the terms of both cubes.
    ///
    /// The result is not necessarily a valid implicant.
    ///
    /// # Panics
    ///
    /// Panics if the widths differ.
    pub fn combine(&self, other: &Cube) -> Cube {
        assert_eq!(self.width, other.width, "Cannot combine cubes of different widths");
        Cube::new(self.width, self.terms.union(&other.terms).copied())
    }

    /// Checks whether two implicants merge into a larger valid implicant.
    ///
    /// # Panics
    ///
    /// Panics if either cube is not a valid implicant.
    pub fn combinable(&self, other: &Cube) -> bool {
        assert!(
            self.is_implicant && other.is_implicant,
            "Only valid implicants can be combined: {} and {}",
            self,
            other
        );
        self.combine(other).is_implicant
    }

    /// Checks whether every term of `self` is a term of `other` (same width).
    pub fn is_subset_of(&self, other: &Cube) -> bool {
        self.width == other.width && self.terms.is_subset(&other.terms)
    }

    /// Checks whether any term of `self` is in `terms`.
    pub fn covers_any(&self, terms: &BTreeSet<Minterm>) -> bool {
        if self.terms.len() <= terms.len() {
            self.terms.iter().any(|t| terms.contains(t))
        } else {
            terms.iter().any(|t| self.terms.contains(t))
        }
    }

    /// Checks whether `other` makes `self` redundant.
    ///
    /// With `restrict_to`, only the terms in that set matter: `self` is
    /// dominated if every such term of `self` is also a term of `other`, and
    /// `other` costs no more than `self`. Without it, `self` must be a subset
    /// of `other`.
    pub fn dominated_by(
        &self,
        other: &Cube,
        cost: &dyn CostFunction,
        restrict_to: Option<&BTreeSet<Minterm>>,
    ) -> bool {
        match restrict_to {
            Some(required) => {
                self.width == other.width
                    && self
                        .terms
                        .iter()
                        .filter(|t| required.contains(t))
                        .all(|t| other.terms.contains(t))
                    && cost.cost(self) >= cost.cost(other)
            }
            None => self.is_subset_of(other),
        }
    }

    /// Canonical ordering key of a valid implicant.
    ///
    /// Every bit position becomes a base-3 digit (bit `i` weighs `3^i`): a
    /// fixed 0 is digit 0, while a fixed 1 and a free bit take digits 1 and 2
    /// in the order chosen by `tie_break`. Non-implicants have no key.
    pub fn sort_key(&self, tie_break: TieBreak) -> Option<u128> {
        if !self.is_implicant {
            return None;
        }

        let (one_digit, free_digit) = match tie_break {
            TieBreak::FreeLast => (1, 2),
            TieBreak::FreeBetween => (2, 1),
        };

        let mut key: u128 = 0;
        let mut weight: u128 = 1;
        for bit in 0..self.width.bits() {
            let digit = if self.overlap_mask >> bit & 1 == 0 {
                free_digit
            } else if self.overlap_value >> bit & 1 == 1 {
                one_digit
            } else {
                0
            };
            key += digit * weight;
            weight *= 3;
        }
        Some(key)
    }

    /// Total order by canonical key first, then structurally.
    pub fn cmp_canonical(&self, other: &Cube, tie_break: TieBreak) -> Ordering {
        self.sort_key(tie_break)
            .cmp(&other.sort_key(tie_break))
            .then_with(|| self.cmp(other))
    }
}

impl PartialEq for Cube {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.terms == other.terms
    }
}

impl Eq for Cube {}

impl Hash for Cube {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.terms.hash(state);
    }
}

impl PartialOrd for Cube {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cube {
    fn cmp(&self, other: &Self) -> Ordering {
        self.width.cmp(&other.width).then_with(|| self.terms.cmp(&other.terms))
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.width.bits();
        if self.is_implicant {
            for bit in (0..bits).rev() {
                let c = if self.overlap_mask >> bit & 1 == 0 {
                    '-'
                } else if self.overlap_value >> bit & 1 == 1 {
                    '1'
                } else {
                    '0'
                };
                write!(f, "{}", c)?;
            }
            Ok(())
        } else {
            write!(f, "[")?;
            for (i, term) in self.terms.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:0width$b}", term, width = bits as usize)?;
            }
            write!(f, "]")
        }
    }
}

/// Renders cubes in canonical order as `[a, b, c]`, or `EMPTY` for no cubes.
pub fn format_sorted<'a>(cubes: impl IntoIterator<Item = &'a Cube>, tie_break: TieBreak) -> String {
    let mut cubes: Vec<&Cube> = cubes.into_iter().collect();
    if cubes.is_empty() {
        return "EMPTY".to_string();
    }
    cubes.sort_by(|a, b| a.cmp_canonical(b, tie_break));
    let items: Vec<String> = cubes.iter().map(|c| c.to_string()).collect();
    format!("[{}]", items.join(", "))
}
