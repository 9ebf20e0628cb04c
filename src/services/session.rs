//! Calculator session
//!
//! Tracks the visitor's current selections and the estimate derived from
//! them. Every change replaces the request value and recomputes right away.

use super::estimator::compute_estimate;
use crate::types::{
    Estimate, EstimateRequest, EstimateResult, Frequency, MissingInput, PricingCatalog,
    ValidationError,
};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Nothing entered
    Empty,
    /// Some input, but a required field is missing
    PartiallyFilled(MissingInput),
    Ready(EstimateResult),
    /// A provided value was rejected; no price shown
    Invalid(ValidationError),
}

impl SessionState {
    pub fn estimate(&self) -> Option<&EstimateResult> {
        match self {
            SessionState::Ready(result) => Some(result),
            _ => None,
        }
    }
}

pub struct EstimateSession {
    catalog: Arc<PricingCatalog>,
    request: EstimateRequest,
    state: SessionState,
}

impl EstimateSession {
    pub fn new(catalog: Arc<PricingCatalog>) -> Self {
        Self {
            catalog,
            request: EstimateRequest::default(),
            state: SessionState::Empty,
        }
    }

    pub fn request(&self) -> &EstimateRequest {
        &self.request
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Replace the whole request and recompute
    pub fn apply(&mut self, request: EstimateRequest) -> &SessionState {
        self.request = request;
        self.state = Self::evaluate(&self.request, &self.catalog);
        debug!(state = state_name(&self.state), "estimate recomputed");
        &self.state
    }

    pub fn set_service(&mut self, service_id: Option<&str>) -> &SessionState {
        let next = self.request.with_service(service_id.map(str::to_string));
        self.apply(next)
    }

    pub fn set_square_feet(&mut self, square_feet: Option<u32>) -> &SessionState {
        let next = self.request.with_square_feet(square_feet);
        self.apply(next)
    }

    pub fn set_rooms(&mut self, bedrooms: Option<u32>, bathrooms: Option<u32>) -> &SessionState {
        let next = self.request.with_rooms(bedrooms, bathrooms);
        self.apply(next)
    }

    pub fn set_pets(&mut self, has_pets: bool) -> &SessionState {
        let next = self.request.with_pets(has_pets);
        self.apply(next)
    }

    pub fn set_frequency(&mut self, frequency: Frequency) -> &SessionState {
        let next = self.request.with_frequency(frequency);
        self.apply(next)
    }

    pub fn toggle_add_on(&mut self, id: &str) -> &SessionState {
        let next = self.request.toggle_add_on(id);
        self.apply(next)
    }

    pub fn reset(&mut self) -> &SessionState {
        self.apply(EstimateRequest::default())
    }

    fn evaluate(request: &EstimateRequest, catalog: &PricingCatalog) -> SessionState {
        if request.is_blank() {
            return SessionState::Empty;
        }
        match compute_estimate(request, catalog) {
            Ok(Estimate::Ready(result)) => SessionState::Ready(result),
            Ok(Estimate::Incomplete { missing }) => SessionState::PartiallyFilled(missing),
            Err(err) => SessionState::Invalid(err),
        }
    }
}

fn state_name(state: &SessionState) -> &'static str {
    match state {
        SessionState::Empty => "empty",
        SessionState::PartiallyFilled(_) => "partially_filled",
        SessionState::Ready(_) => "ready",
        SessionState::Invalid(_) => "invalid",
    }
}
