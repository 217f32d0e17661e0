//! Cost of implementing a product term.
//!
//! The minimizer compares candidate covers by the sum of the costs of their
//! cubes. A cost function is any [`CostFunction`]: the weighted
//! [`CostModel`] used by default, or a plain closure `Fn(&Cube) -> u64`.

use crate::cube::Cube;

/// Strategy assigning a cost to a single cube.
///
/// Costs of a cover are summed, so the function should be non-negative and
/// should not decrease when a cube gains literals.
pub trait CostFunction {
    fn cost(&self, cube: &Cube) -> u64;
}

impl<F> CostFunction for F
where
    F: Fn(&Cube) -> u64,
{
    fn cost(&self, cube: &Cube) -> u64 {
        self(cube)
    }
}

/// Literal and term weights.
///
/// `cost(cube) = literal_count(cube) * input_cost + output_cost`, where the
/// literal count is the number of fixed bits of the cube.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CostModel {
    /// Cost of each fixed (non-free) bit
    pub input_cost: u32,
    /// Flat cost of each product term
    pub output_cost: u32,
}

impl CostModel {
    pub fn new(input_cost: u32, output_cost: u32) -> Self {
        Self { input_cost, output_cost }
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            input_cost: 1,
            output_cost: 1,
        }
    }
}

impl CostFunction for CostModel {
    fn cost(&self, cube: &Cube) -> u64 {
        cube.literal_count() as u64 * self.input_cost as u64 + self.output_cost as u64
    }
}
