use serde::Serialize;
use crate::footnote::{analysis_warnings, dpv_messages};
use crate::smarty::{CandidateAnalysis, DpvConfirmation};

/// After this many attempts the user may submit even an undeliverable address.
const TROUBLE_THRESHOLD: u32 = 3;
/// Once this many attempts were made, the next one submits the form as is.
const MAX_ATTEMPTS: u32 = 4;

/// What the user is shown after a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Guidance {
    /// the address matched; warnings describe what the service corrected
    Confirmed { warnings: Vec<&'static str> },
    /// the address matched except for its secondary (unit) information
    NeedsCorrection { messages: Vec<&'static str> },
    NotConfirmed,
}

impl Guidance {
    pub fn from_analysis(analysis: &CandidateAnalysis) -> Self {
        match analysis.confirmation {
            DpvConfirmation::Confirmed => Guidance::Confirmed {
                warnings: analysis_warnings(&analysis.footnotes),
            },
            DpvConfirmation::ConfirmedSecondaryIgnored | DpvConfirmation::ConfirmedMissingSecondary => {
                Guidance::NeedsCorrection {
                    messages: dpv_messages(&analysis.dpv_footnotes),
                }
            }
            DpvConfirmation::NotConfirmed => Guidance::NotConfirmed,
        }
    }

    pub fn messages(&self) -> &[&'static str] {
        match self {
            Guidance::Confirmed { warnings } => warnings,
            Guidance::NeedsCorrection { messages } => messages,
            Guidance::NotConfirmed => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// attempts are used up, submit what was entered
    ForceSubmit,
    Ready,
    NotReady,
}

/// Validation attempts for a single address form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationAttempts {
    count: u32,
}

impl ValidationAttempts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Record one validation of an address and decide whether it can be submitted.
    pub fn record(&mut self, deliverable: bool) -> SubmitDecision {
        if self.count >= MAX_ATTEMPTS {
            return SubmitDecision::ForceSubmit;
        }
        self.count += 1;
        if deliverable || self.count >= TROUBLE_THRESHOLD {
            SubmitDecision::Ready
        } else {
            SubmitDecision::NotReady
        }
    }

    /// The user took the standardized address. This is not a new attempt, so
    /// only deliverability decides.
    pub fn accept_standardized(&self, deliverable: bool) -> SubmitDecision {
        if deliverable {
            SubmitDecision::Ready
        } else {
            SubmitDecision::NotReady
        }
    }

    /// the user has struggled to get a valid address
    pub fn show_trouble_warning(&self) -> bool {
        self.count >= TROUBLE_THRESHOLD
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
