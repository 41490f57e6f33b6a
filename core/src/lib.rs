pub mod classifier;
pub mod controller;
pub mod engine;
pub mod error;
pub mod model;
pub mod modes;

pub use controller::{RequestController, SubmitOutcome};
pub use engine::{ExplanationEngine, RemoteEngine, TemplateEngine};
pub use error::{EngineError, ErrorKind};
