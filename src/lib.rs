//! shroomcheck: a small rule-based expert system that classifies a mushroom
//! as safe, poisonous or unknown from four observed traits.
//!
//! This is a demonstration rule engine, not a field guide. Never rely on it
//! to decide whether a wild mushroom is safe to eat.

pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod handler;
pub mod io;
pub mod labels;
pub mod traits;

// Re-export commonly used types
pub use crate::classifier::{diagnose, DiagnosisResult, KnowledgeBase, Rule, Specimen, Verdict};
pub use crate::errors::ShroomError;
pub use crate::handler::{handle, DiagnosisRequest, DiagnosisResponse};
pub use crate::labels::{Locale, TraitLabel};
pub use crate::traits::{GillColor, GillSize, Odor, StalkRoot, TraitKind, TraitValue};
