pub mod ai;
pub mod bfhl;
pub mod math;
