//! Prediction stub and model registry for the freelancer analytics service
//!
//! The provider's "models" are threshold-and-jitter stubs behind the
//! [`HighEarnerClassifier`] trait so that the serving implementation can be
//! swapped for a deterministic double in tests.

#![forbid(unsafe_code)]

pub mod classifier;
pub mod heuristic;
pub mod registry;
pub mod scripted;

pub use classifier::{DecisionBand, HighEarnerClassifier};
pub use heuristic::HeuristicClassifier;
pub use registry::{ModelKind, model_comparison, model_info};
pub use scripted::ScriptedClassifier;
