//! Estimate request/result types

use super::Frequency;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Current calculator selections.
///
/// Treated as an immutable value: every `with_*` call returns a new request
/// rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub service_id: Option<String>,
    pub square_feet: Option<u32>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub has_pets: bool,
    pub frequency: Frequency,
    pub add_ons: BTreeSet<String>,
}

impl EstimateRequest {
    pub fn new(service_id: impl Into<String>, square_feet: u32) -> Self {
        Self {
            service_id: Some(service_id.into()),
            square_feet: Some(square_feet),
            ..Default::default()
        }
    }

    pub fn with_service(&self, service_id: Option<String>) -> Self {
        Self {
            service_id,
            ..self.clone()
        }
    }

    pub fn with_square_feet(&self, square_feet: Option<u32>) -> Self {
        Self {
            square_feet,
            ..self.clone()
        }
    }

    pub fn with_rooms(&self, bedrooms: Option<u32>, bathrooms: Option<u32>) -> Self {
        Self {
            bedrooms,
            bathrooms,
            ..self.clone()
        }
    }

    pub fn with_pets(&self, has_pets: bool) -> Self {
        Self {
            has_pets,
            ..self.clone()
        }
    }

    pub fn with_frequency(&self, frequency: Frequency) -> Self {
        Self {
            frequency,
            ..self.clone()
        }
    }

    pub fn with_add_on(&self, id: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.add_ons.insert(id.into());
        next
    }

    /// Add the id if absent, remove it if present
    pub fn toggle_add_on(&self, id: &str) -> Self {
        let mut next = self.clone();
        if !next.add_ons.remove(id) {
            next.add_ons.insert(id.to_string());
        }
        next
    }

    /// Nothing has been entered yet
    pub fn is_blank(&self) -> bool {
        self.service_id.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.square_feet.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && !self.has_pets
            && self.frequency == Frequency::OneTime
            && self.add_ons.is_empty()
    }
}

/// Add-on as priced in a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedAddOn {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Computed estimate. Money fields other than `total` are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub service_id: String,
    pub service_name: String,
    pub square_feet: u32,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub has_pets: bool,
    pub frequency: Frequency,
    pub add_ons: Vec<SelectedAddOn>,
    pub base_price: f64,
    pub add_ons_total: f64,
    pub discount_rate: f64,
    pub discount_amount: f64,
    /// Whole currency units shown to the customer
    pub total: u64,
}

/// Required input that has not been provided yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingInput {
    Service,
    SquareFeet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Estimate {
    Ready(EstimateResult),
    Incomplete { missing: MissingInput },
}

impl Estimate {
    pub fn result(&self) -> Option<&EstimateResult> {
        match self {
            Estimate::Ready(result) => Some(result),
            Estimate::Incomplete { .. } => None,
        }
    }

    pub fn total(&self) -> Option<u64> {
        self.result().map(|r| r.total)
    }
}
