//! Lead draft construction and validation
//!
//! Builds the payload a quote request hands to the lead API. Submission is
//! somebody else's job.

use super::summary::render_summary;
use crate::types::{ContactDetails, EstimateResult, Language, LeadDraft, LeadFieldError};
use regex::Regex;
use std::sync::LazyLock;

/// Value of `source` for leads created here
pub const LEAD_SOURCE: &str = "price-calculator";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$").expect("valid phone regex")
});

// Letters from any script so accented names pass
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\s'-]{2,50}$").expect("valid name regex"));

impl LeadDraft {
    /// Draft a lead, pre-filling the message from `estimate` when present
    pub fn for_estimate(
        contact: ContactDetails,
        estimate: Option<&EstimateResult>,
        language: Language,
    ) -> Self {
        let address = contact
            .address
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        Self {
            name: contact.name.trim().to_string(),
            phone: contact.phone.trim().to_string(),
            email: contact.email.trim().to_string(),
            address,
            message: estimate
                .map(|e| render_summary(e, language))
                .unwrap_or_default(),
            sms_consent: contact.sms_consent,
            language,
            source: LEAD_SOURCE.to_string(),
            estimated_total: estimate.map(|e| e.total),
        }
    }

    /// All failing fields, in form order. Empty when the draft is valid.
    pub fn validate(&self) -> Vec<LeadFieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(LeadFieldError::Required("name"));
        } else if !NAME_RE.is_match(self.name.trim()) {
            errors.push(LeadFieldError::Name);
        }

        if self.phone.trim().is_empty() {
            errors.push(LeadFieldError::Required("phone"));
        } else if !PHONE_RE.is_match(self.phone.trim()) {
            errors.push(LeadFieldError::Phone);
        }

        if self.email.trim().is_empty() {
            errors.push(LeadFieldError::Required("email"));
        } else if !EMAIL_RE.is_match(self.email.trim()) {
            errors.push(LeadFieldError::Email);
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
