//! DOUBLE Operator Implementations
//!
//! This module contains the operators organized by category:
//! - Arithmetic operators (add, subtract, multiply, divide, modulus, negate)
//! - Comparison operators (equal, less-than, between, ordering comparisons)
//! - Distinctness operators (is-distinct-from, indeterminate)
//! - Cast operators (to and from varchar, integral types, boolean, real)
//! - Hash operators (hash code, xxHash64) over canonical bits
//!
//! Every operator is a pure function of its arguments.

pub mod arithmetic;
pub mod canonical;
pub mod cast;
pub mod comparison;
pub mod distinct;
pub mod hash;

pub use arithmetic::*;
pub use canonical::*;
pub use cast::*;
pub use comparison::*;
pub use distinct::*;
pub use hash::*;
