//! Price estimator
//!
//! Pure computation over an [`EstimateRequest`] and a [`PricingCatalog`]:
//!
//! ```text
//! base     = max(sqft × rate × room_factor × pet_factor, minimum)
//! add_ons  = Σ price(selected add-ons known to the catalog)
//! discount = min(base × frequency_rate, base)      (recurring only)
//! total    = round(base − discount) + add_ons
//! ```
//!
//! Add-on prices are whole currency units, so this is `round(base + add_ons
//! − discount)`. Only `total` is rounded. Intermediate values stay in `f64`.

use crate::types::{
    Estimate, EstimateRequest, EstimateResult, MissingInput, PricingCatalog, SelectedAddOn,
    ValidationError,
};
use tracing::debug;

/// Compute an estimate.
///
/// A request that is simply not filled in yet yields
/// `Ok(Estimate::Incomplete { .. })`. Values that were provided but cannot be
/// priced (unknown service, size or room counts out of range) yield
/// `Err(ValidationError)`.
///
/// # Examples
/// ```
/// use cleanquote::services::{compute_estimate, CatalogService};
/// use cleanquote::types::EstimateRequest;
///
/// let catalog = CatalogService::builtin().unwrap();
/// let estimate = compute_estimate(&EstimateRequest::new("regular", 2000), catalog.catalog()).unwrap();
/// assert_eq!(estimate.total(), Some(160));
/// ```
pub fn compute_estimate(
    request: &EstimateRequest,
    catalog: &PricingCatalog,
) -> Result<Estimate, ValidationError> {
    // Provided values are range-checked even while the form is incomplete
    let limits = &catalog.limits;
    if let Some(sqft) = request.square_feet {
        if sqft < limits.min_sqft || sqft > limits.max_sqft {
            return Err(ValidationError::SquareFeetOutOfRange {
                value: i64::from(sqft),
                min: limits.min_sqft,
                max: limits.max_sqft,
            });
        }
    }
    check_rooms("bedrooms", request.bedrooms, limits.min_bedrooms, limits.max_bedrooms)?;
    check_rooms(
        "bathrooms",
        request.bathrooms,
        limits.min_bathrooms,
        limits.max_bathrooms,
    )?;

    let service_id = match request.service_id.as_deref().map(str::trim) {
        None | Some("") => {
            return Ok(Estimate::Incomplete {
                missing: MissingInput::Service,
            })
        }
        Some(id) => id,
    };

    let service = catalog
        .service(service_id)
        .ok_or_else(|| ValidationError::UnknownService(service_id.to_string()))?;

    let square_feet = match request.square_feet {
        Some(sqft) => sqft,
        None => {
            return Ok(Estimate::Incomplete {
                missing: MissingInput::SquareFeet,
            })
        }
    };

    let adjustments = &catalog.adjustments;
    let mut base_price = f64::from(square_feet) * service.rate_per_sqft;

    if request.bedrooms.is_some() || request.bathrooms.is_some() {
        let rooms = f64::from(request.bedrooms.unwrap_or(0))
            + f64::from(request.bathrooms.unwrap_or(0));
        base_price *= (rooms / adjustments.rooms_per_base_unit).max(1.0);
    }
    if request.has_pets {
        base_price *= 1.0 + adjustments.pet_surcharge_rate;
    }
    base_price = base_price.max(service.minimum_price);

    let mut add_ons = Vec::with_capacity(request.add_ons.len());
    for id in &request.add_ons {
        match catalog.add_on(id) {
            Some(add_on) => add_ons.push(SelectedAddOn {
                id: add_on.id.clone(),
                name: add_on.name.clone(),
                price: add_on.price,
            }),
            None => debug!(add_on = %id, "ignoring unknown add-on"),
        }
    }
    let add_ons_total: f64 = add_ons.iter().map(|a| a.price).sum();

    let discount_rate = catalog.discount_rate(request.frequency);
    let discount_amount = (base_price * discount_rate).min(base_price);

    // Add-on prices are whole units, so rounding the discounted base alone
    // equals rounding the full sum and keeps each add-on's step exact.
    let total = ((base_price - discount_amount).round() + add_ons_total).max(0.0) as u64;

    Ok(Estimate::Ready(EstimateResult {
        service_id: service.id.clone(),
        service_name: service.name.clone(),
        square_feet,
        bedrooms: request.bedrooms,
        bathrooms: request.bathrooms,
        has_pets: request.has_pets,
        frequency: request.frequency,
        add_ons,
        base_price,
        add_ons_total,
        discount_rate,
        discount_amount,
        total,
    }))
}

fn check_rooms(
    field: &'static str,
    value: Option<u32>,
    min: u32,
    max: u32,
) -> Result<(), ValidationError> {
    match value {
        Some(v) if v < min || v > max => Err(ValidationError::RoomCountOutOfRange {
            field,
            value: i64::from(v),
            min,
            max,
        }),
        _ => Ok(()),
    }
}
