//! Services for catalog loading, pricing and quote preparation

pub mod catalog;
pub mod estimator;
pub mod form;
pub mod i18n;
pub mod lead;
pub mod session;
pub mod summary;

pub use catalog::{CatalogService, CatalogSource};
pub use estimator::compute_estimate;
pub use form::EstimateForm;
pub use session::{EstimateSession, SessionState};
pub use summary::render_summary;
