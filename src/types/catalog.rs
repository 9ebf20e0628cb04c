//! Pricing catalog types
//!
//! The catalog is the single source of every price the estimator uses.
//! It is loaded once and treated as read-only afterwards.

use super::{QuoteError, Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// One sellable cleaning service, priced per square foot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    pub id: String,
    pub name: String,
    pub rate_per_sqft: f64,
    pub minimum_price: f64,
}

/// Optional extra with a flat surcharge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Recurring-service cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    #[default]
    OneTime,
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 4] = [
        Frequency::OneTime,
        Frequency::Weekly,
        Frequency::Biweekly,
        Frequency::Monthly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::OneTime => "one-time",
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
        }
    }

    pub fn is_recurring(self) -> bool {
        self != Frequency::OneTime
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "one-time" | "onetime" | "one_time" => Ok(Frequency::OneTime),
            "weekly" => Ok(Frequency::Weekly),
            "biweekly" | "bi-weekly" => Ok(Frequency::Biweekly),
            "monthly" => Ok(Frequency::Monthly),
            _ => Err(ValidationError::UnknownFrequency(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyOption {
    pub discount_rate: f64,
}

/// Accepted input ranges (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub min_sqft: u32,
    pub max_sqft: u32,
    pub min_bedrooms: u32,
    pub max_bedrooms: u32,
    pub min_bathrooms: u32,
    pub max_bathrooms: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_sqft: 500,
            max_sqft: 10_000,
            min_bedrooms: 0,
            max_bedrooms: 10,
            min_bathrooms: 1,
            max_bathrooms: 8,
        }
    }
}

/// Multipliers layered on top of the per-square-foot price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustments {
    /// Bedrooms + bathrooms covered by the base rate
    pub rooms_per_base_unit: f64,
    /// Fractional surcharge when the home has pets
    pub pet_surcharge_rate: f64,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            rooms_per_base_unit: 6.0,
            pet_surcharge_rate: 0.10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingCatalog {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub services: Vec<ServiceDefinition>,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
    pub frequencies: BTreeMap<Frequency, FrequencyOption>,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub adjustments: Adjustments,
}

fn default_version() -> u32 {
    1
}

fn default_currency() -> String {
    "USD".to_string()
}

impl PricingCatalog {
    pub fn service(&self, id: &str) -> Option<&ServiceDefinition> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }

    /// Discount rate for a frequency; one-time never discounts
    pub fn discount_rate(&self, frequency: Frequency) -> f64 {
        if !frequency.is_recurring() {
            return 0.0;
        }
        self.frequencies
            .get(&frequency)
            .map(|f| f.discount_rate)
            .unwrap_or(0.0)
    }

    /// Check internal consistency. Called on every load.
    pub fn validate(&self) -> Result<()> {
        if self.services.is_empty() {
            return Err(invalid("catalog defines no services"));
        }

        let mut seen = HashSet::new();
        for service in &self.services {
            if service.id.trim().is_empty() {
                return Err(invalid("service with empty id"));
            }
            if !seen.insert(service.id.as_str()) {
                return Err(invalid(format!("duplicate service id '{}'", service.id)));
            }
            non_negative(&format!("service '{}' rate", service.id), service.rate_per_sqft)?;
            non_negative(
                &format!("service '{}' minimum price", service.id),
                service.minimum_price,
            )?;
        }

        let mut seen = HashSet::new();
        for add_on in &self.add_ons {
            if add_on.id.trim().is_empty() {
                return Err(invalid("add-on with empty id"));
            }
            if !seen.insert(add_on.id.as_str()) {
                return Err(invalid(format!("duplicate add-on id '{}'", add_on.id)));
            }
            non_negative(&format!("add-on '{}' price", add_on.id), add_on.price)?;
            if add_on.price.fract() != 0.0 {
                return Err(invalid(format!(
                    "add-on '{}' price must be a whole amount (got {})",
                    add_on.id, add_on.price
                )));
            }
        }

        for frequency in Frequency::ALL {
            let option = self
                .frequencies
                .get(&frequency)
                .ok_or_else(|| invalid(format!("missing frequency '{}'", frequency)))?;
            non_negative(
                &format!("frequency '{}' discount rate", frequency),
                option.discount_rate,
            )?;
        }

        let l = &self.limits;
        if l.min_sqft == 0 || l.min_sqft > l.max_sqft {
            return Err(invalid(format!(
                "invalid square footage limits {}-{}",
                l.min_sqft, l.max_sqft
            )));
        }
        if l.min_bedrooms > l.max_bedrooms {
            return Err(invalid("invalid bedroom limits"));
        }
        if l.min_bathrooms > l.max_bathrooms {
            return Err(invalid("invalid bathroom limits"));
        }

        let a = &self.adjustments;
        if !(a.rooms_per_base_unit.is_finite() && a.rooms_per_base_unit > 0.0) {
            return Err(invalid("roomsPerBaseUnit must be positive"));
        }
        non_negative("pet surcharge rate", a.pet_surcharge_rate)?;

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> QuoteError {
    QuoteError::Catalog(msg.into())
}

fn non_negative(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{} must be a non-negative number (got {})", what, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_catalog() -> PricingCatalog {
        let frequencies = Frequency::ALL
            .iter()
            .map(|f| (*f, FrequencyOption { discount_rate: 0.0 }))
            .collect();
        PricingCatalog {
            version: 1,
            currency: "USD".into(),
            services: vec![ServiceDefinition {
                id: "regular".into(),
                name: "Regular Cleaning".into(),
                rate_per_sqft: 0.08,
                minimum_price: 60.0,
            }],
            add_ons: vec![AddOn {
                id: "garage".into(),
                name: "Garage".into(),
                price: 50.0,
            }],
            frequencies,
            limits: Limits::default(),
            adjustments: Adjustments::default(),
        }
    }

    // ========== Frequency ==========

    #[test]
    fn test_frequency_parse_variants() {
        assert_eq!("one-time".parse::<Frequency>().unwrap(), Frequency::OneTime);
        assert_eq!("Weekly".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert_eq!("bi-weekly".parse::<Frequency>().unwrap(), Frequency::Biweekly);
        assert_eq!(" monthly ".parse::<Frequency>().unwrap(), Frequency::Monthly);
    }

    #[test]
    fn test_frequency_parse_unknown() {
        let err = "daily".parse::<Frequency>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownFrequency("daily".into()));
    }

    #[test]
    fn test_frequency_serde_kebab_case() {
        let json = serde_json::to_string(&Frequency::OneTime).unwrap();
        assert_eq!(json, "\"one-time\"");
        let back: Frequency = serde_json::from_str("\"biweekly\"").unwrap();
        assert_eq!(back, Frequency::Biweekly);
    }

    // ========== lookups ==========

    #[test]
    fn test_one_time_never_discounts() {
        let mut catalog = minimal_catalog();
        catalog
            .frequencies
            .insert(Frequency::OneTime, FrequencyOption { discount_rate: 0.5 });
        assert_eq!(catalog.discount_rate(Frequency::OneTime), 0.0);
    }

    #[test]
    fn test_service_and_add_on_lookup() {
        let catalog = minimal_catalog();
        assert!(catalog.service("regular").is_some());
        assert!(catalog.service("deep").is_none());
        assert_eq!(catalog.add_on("garage").map(|a| a.price), Some(50.0));
    }

    // ========== validate ==========

    #[test]
    fn test_validate_minimal_ok() {
        assert!(minimal_catalog().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_services() {
        let mut catalog = minimal_catalog();
        catalog.services.clear();
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_service() {
        let mut catalog = minimal_catalog();
        let dup = catalog.services[0].clone();
        catalog.services.push(dup);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate service id 'regular'"));
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let mut catalog = minimal_catalog();
        catalog.services[0].rate_per_sqft = -0.01;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_fractional_add_on_price() {
        let mut catalog = minimal_catalog();
        catalog.add_ons[0].price = 49.99;
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("whole amount"));
    }

    #[test]
    fn test_validate_rejects_missing_frequency() {
        let mut catalog = minimal_catalog();
        catalog.frequencies.remove(&Frequency::Monthly);
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("monthly"));
    }

    #[test]
    fn test_validate_rejects_inverted_limits() {
        let mut catalog = minimal_catalog();
        catalog.limits.min_sqft = 5000;
        catalog.limits.max_sqft = 1000;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_allows_discount_above_one() {
        // Clamped by the estimator, not rejected here
        let mut catalog = minimal_catalog();
        catalog
            .frequencies
            .insert(Frequency::Weekly, FrequencyOption { discount_rate: 1.5 });
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_deserialize_defaults_limits_and_adjustments() {
        let json = r#"{
            "services": [{"id": "deep", "name": "Deep", "ratePerSqft": 0.15, "minimumPrice": 120}],
            "frequencies": {
                "one-time": {"discountRate": 0},
                "weekly": {"discountRate": 0.15},
                "biweekly": {"discountRate": 0.10},
                "monthly": {"discountRate": 0.05}
            }
        }"#;
        let catalog: PricingCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.limits, Limits::default());
        assert_eq!(catalog.currency, "USD");
        assert!(catalog.add_ons.is_empty());
        assert!(catalog.validate().is_ok());
    }
}
