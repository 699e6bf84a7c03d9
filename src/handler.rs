//! Request/response cycle around the classifier.
//!
//! Every user action (a CLI invocation, one pass through the interactive
//! prompt) becomes exactly one `DiagnosisRequest` and one
//! `DiagnosisResponse`. Nothing is carried over between calls.

use serde::{Deserialize, Serialize};

use crate::classifier::{DiagnosisResult, Specimen};
use crate::errors::Result;
use crate::traits::parse_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    pub specimen: Specimen,
}

impl DiagnosisRequest {
    pub fn new(specimen: Specimen) -> Self {
        Self { specimen }
    }

    /// Build a request from four raw values (data set code or name).
    ///
    /// This is the only place trait input is validated; anything outside
    /// the enumerations is rejected here.
    pub fn from_codes(
        odor: &str,
        gill_size: &str,
        gill_color: &str,
        stalk_root: &str,
    ) -> Result<Self> {
        Ok(Self::new(Specimen::new(
            parse_trait(odor)?,
            parse_trait(gill_size)?,
            parse_trait(gill_color)?,
            parse_trait(stalk_root)?,
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosisResponse {
    pub specimen: Specimen,
    pub result: DiagnosisResult,
}

pub fn handle(request: &DiagnosisRequest) -> DiagnosisResponse {
    let result = request.specimen.diagnose();
    log::info!(
        "Diagnosed [{}] as {} (rule: {})",
        request.specimen.codes(),
        result.verdict(),
        result.rule().unwrap_or("none")
    );
    DiagnosisResponse {
        specimen: request.specimen,
        result,
    }
}
