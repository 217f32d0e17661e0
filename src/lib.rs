//! # qm-rs: Two-level logic minimization in Rust
//!
//! **`qm-rs`** finds a minimum-cost sum-of-products cover of a boolean function
//! given as a set of minterms, with optional don't-care terms.
//! It implements the classical **Quine–McCluskey** procedure followed by an exact cover search.
//!
//! ## How it works
//!
//! 1. **Prime implicants** are generated by repeatedly merging cubes that differ in a single variable.
//! 2. **Essential** prime implicants, the unique cover of some minterm, are moved into the result.
//! 3. The remaining coverage table is shrunk by **column** and **row dominance**.
//! 4. Whatever is left is solved exactly with **Petrick's method**.
//!
//! Steps 2 and 3 repeat until nothing changes anymore.
//!
//! ## Key Features
//!
//! - **Pluggable cost**: any [`CostFunction`][crate::cost::CostFunction] (including a plain closure) ranks implicants. The default [`CostModel`][crate::cost::CostModel] charges per literal and per term.
//! - **Deterministic**: every tie is broken by a fixed canonical order over cubes, see [`Cube::cmp_canonical`][crate::cube::Cube::cmp_canonical].
//! - **Traceable**: a [`TraceObserver`][crate::trace::TraceObserver] receives the state after every stage.
//! - **Up to 63 variables**, each minterm is a plain `u64`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qm_rs::minimize::minimize;
//!
//! // f(a, b, c, d) = Σm(4, 8, 10, 11, 12, 15) + d(9, 14)
//! let solution = minimize(4, [4, 8, 10, 11, 12, 15], [9, 14]).unwrap();
//!
//! // Cubes print most significant variable first, '-' for a free variable
//! assert_eq!(solution.to_string(), "EPIs=[10--, 1-1-, -100], NEPIs=[1--0]");
//! assert_eq!(solution.total_cost(&qm_rs::cost::CostModel::default()), 10);
//! ```
//!
//! ## Core Components
//!
//! - **[`minimize`]**: The [`Minimizer`][crate::minimize::Minimizer] pipeline and its [`Problem`][crate::minimize::Problem] / [`Solution`][crate::minimize::Solution] types.
//! - **[`cube`]**: Implicant representation, merging and the canonical order.
//! - **[`primes`]**, **[`essential`]**, **[`reduce`]**, **[`petrick`]**: The individual stages.
//! - **[`trace`]**: Stage-by-stage observation.

pub mod bitset;
pub mod config;
pub mod cost;
pub mod cube;
pub mod error;
pub mod essential;
pub mod minimize;
pub mod petrick;
pub mod primes;
pub mod reduce;
pub mod trace;
pub mod types;
