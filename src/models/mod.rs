pub mod activity;
pub mod derived;
pub mod inputs;

pub use activity::ActivityLevel;
pub use derived::{BmrEstimate, Derived, FoodEquivalents, Formula, MacroGrams, TargetIntake};
pub use inputs::{Inputs, ValidInputs};
