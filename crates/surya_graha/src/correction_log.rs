//! Correction audit records.
//!
//! Every pipeline stage appends one record per correction it applies.
//! The records are ordinary data returned to the caller; persistence
//! (JSON-lines files and the like) belongs to an external collaborator.

use surya_core::CelestialBody;

/// A pipeline stage that can appear in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrectionStep {
    Ahargana,
    MeanMotion,
    Manda,
    Sighra,
}

impl CorrectionStep {
    /// Stable label for external log consumers.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ahargana => "ahargana",
            Self::MeanMotion => "mean_motion",
            Self::Manda => "manda",
            Self::Sighra => "sighra",
        }
    }
}

impl std::fmt::Display for CorrectionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// One applied correction: which body, which step, and the value it
/// transformed. Input and output are degrees except for the Ahargana
/// step, where they are days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionRecord {
    pub body: CelestialBody,
    pub step: CorrectionStep,
    pub input: f64,
    pub output: f64,
}
