//! Python client emission.
//!
//! [`FunctionPlanner`] turns each endpoint into a [`PyFunction`];
//! [`PythonGenerator`] assembles them into a module per component.

pub mod function;
pub mod generator;
pub mod planner;

pub use function::{PyFunction, PyParam};
pub use generator::{GeneratorOptions, PythonGenerator};
pub use planner::{API_KEY_PARAM, FunctionPlanner, OPTIONAL_MESSAGE};
