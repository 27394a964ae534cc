//! Local arithmetic tools.
//!
//! These tools perform no I/O and answer with plain text:
//! - `add`: sum of two numbers
//! - `multiply`: labeled multiply, answers with the sum (see `multiply.rs`)
//! - `calculate`: add, subtract, multiply or divide

pub mod add;
pub mod calculate;
pub mod multiply;

pub use add::{AddParams, AddTool};
pub use calculate::{CalculateParams, CalculateTool, Operation};
pub use multiply::{MultiplyParams, MultiplyTool};
