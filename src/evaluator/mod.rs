pub mod environment;
pub mod errors;
pub mod interpreter;
pub mod object;
pub mod values;

pub use environment::Environment;
pub use errors::{EvaluatorError, RuntimeResult};
pub use interpreter::Evaluator;
pub use object::{Entity, Object};
pub use values::EvaluatedValues;
