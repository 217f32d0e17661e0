//! Prime implicant generation (the tabular Quine–McCluskey method).
//!
//! Starting from one singleton cube per minterm and don't-care, every level
//! merges all pairs of cubes whose union is again a valid implicant. A cube
//! that is not contained in any merged cube of its level cannot grow any
//! further and is kept as a candidate. The process stops when a level yields
//! no merges; the candidates not contained in another candidate are the prime
//! implicants.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use qm_rs::primes::prime_implicants;
//! use qm_rs::types::Width;
//!
//! let minterms: BTreeSet<u64> = [0, 1, 2, 3].into_iter().collect();
//! let primes = prime_implicants(Width::new(3), &minterms, &BTreeSet::new());
//! assert_eq!(primes.len(), 1);
//! assert_eq!(primes.iter().next().unwrap().to_string(), "0--");
//! ```

use std::collections::BTreeSet;

use log::{debug, trace};

use crate::cube::Cube;
use crate::types::{Minterm, Width};

/// Computes all prime implicants of the function given by `minterms`, using
/// `dont_cares` to enlarge them.
///
/// The sets are expected to be disjoint and within `[0, 2^width)`.
pub fn prime_implicants(width: Width, minterms: &BTreeSet<Minterm>, dont_cares: &BTreeSet<Minterm>) -> BTreeSet<Cube> {
    let mut level: Vec<Cube> = minterms
        .union(dont_cares)
        .map(|&term| Cube::singleton(width, term))
        .collect();
    let mut candidates = BTreeSet::new();
    let mut round = 0;

    while !level.is_empty() {
        let mut merged = BTreeSet::new();
        for (i, a) in level.iter().enumerate() {
            for b in &level[i + 1..] {
                if a.combinable(b) {
                    let union = a.combine(b);
                    trace!("level {}: {} + {} -> {}", round, a, b, union);
                    merged.insert(union);
                }
            }
        }

        let before = candidates.len();
        for cube in level {
            if !merged.iter().any(|m| cube.is_subset_of(m)) {
                candidates.insert(cube);
            }
        }
        debug!(
            "level {}: {} merged cubes, {} new candidates",
            round,
            merged.len(),
            candidates.len() - before
        );

        level = merged.into_iter().collect();
        round += 1;
    }

    let primes: BTreeSet<Cube> = candidates
        .iter()
        .filter(|&c| !candidates.iter().any(|other| other != c && c.is_subset_of(other)))
        .cloned()
        .collect();
    debug!("found {} prime implicants out of {} candidates", primes.len(), candidates.len());
    primes
}
