//! cleanquote: instant price estimates for residential cleaning services
//!
//! The pricing catalog (services, add-ons, frequency discounts, limits) is
//! loaded once; [`services::compute_estimate`] turns a request into a price.

pub mod cli;
pub mod services;
pub mod types;
