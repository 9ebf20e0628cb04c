//! Raw calculator form input
//!
//! Converts what a visitor typed into an [`EstimateRequest`]. Blank fields
//! mean "not provided yet"; anything else must parse.

use crate::types::{EstimateRequest, Frequency, Limits, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateForm {
    pub service: String,
    pub square_feet: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub has_pets: bool,
    pub frequency: String,
    pub add_ons: Vec<String>,
}

impl EstimateForm {
    /// Parse into a request. `limits` only supplies the bounds reported when
    /// a value cannot be represented at all (negative or huge); the range
    /// check proper happens in the estimator.
    pub fn parse(&self, limits: &Limits) -> Result<EstimateRequest, ValidationError> {
        let service_id = non_blank(&self.service).map(str::to_string);

        let square_feet = match non_blank(&self.square_feet) {
            None => None,
            Some(raw) => {
                let digits = strip_thousands(raw).ok_or_else(|| ValidationError::InvalidNumber {
                    field: "square_feet",
                    value: raw.to_string(),
                })?;
                let value = parse_whole("square_feet", &digits, raw)?;
                Some(u32::try_from(value).map_err(|_| {
                    ValidationError::SquareFeetOutOfRange {
                        value,
                        min: limits.min_sqft,
                        max: limits.max_sqft,
                    }
                })?)
            }
        };

        let bedrooms = parse_count(
            "bedrooms",
            &self.bedrooms,
            limits.min_bedrooms,
            limits.max_bedrooms,
        )?;
        let bathrooms = parse_count(
            "bathrooms",
            &self.bathrooms,
            limits.min_bathrooms,
            limits.max_bathrooms,
        )?;

        let frequency = match non_blank(&self.frequency) {
            None => Frequency::OneTime,
            Some(raw) => raw.parse()?,
        };

        let add_ons: BTreeSet<String> = self
            .add_ons
            .iter()
            .filter_map(|id| non_blank(id))
            .map(str::to_string)
            .collect();

        Ok(EstimateRequest {
            service_id,
            square_feet,
            bedrooms,
            bathrooms,
            has_pets: self.has_pets,
            frequency,
            add_ons,
        })
    }
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Drop comma thousands separators. `None` when a comma is misplaced.
fn strip_thousands(raw: &str) -> Option<String> {
    if !raw.contains(',') {
        return Some(raw.to_string());
    }
    let mut groups = raw.split(',');
    let head = groups.next()?;
    let head_digits = head.strip_prefix('-').unwrap_or(head);
    if head_digits.is_empty() || head_digits.len() > 3 {
        return None;
    }
    let mut out = head.to_string();
    for group in groups {
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        out.push_str(group);
    }
    Some(out)
}

fn parse_whole(field: &'static str, digits: &str, original: &str) -> Result<i64, ValidationError> {
    digits.parse::<i64>().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: original.to_string(),
    })
}

fn parse_count(
    field: &'static str,
    raw: &str,
    min: u32,
    max: u32,
) -> Result<Option<u32>, ValidationError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(None);
    };
    let value = parse_whole(field, raw, raw)?;
    u32::try_from(value)
        .map(Some)
        .map_err(|_| ValidationError::RoomCountOutOfRange {
            field,
            value,
            min,
            max,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(service: &str, sqft: &str) -> EstimateForm {
        EstimateForm {
            service: service.into(),
            square_feet: sqft.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_form_parses_to_blank_request() {
        let request = EstimateForm::default().parse(&Limits::default()).unwrap();
        assert!(request.is_blank());
    }

    #[test]
    fn test_basic_fields() {
        let request = EstimateForm {
            service: " deep ".into(),
            square_feet: "2500".into(),
            bedrooms: "3".into(),
            bathrooms: "2".into(),
            has_pets: true,
            frequency: "Bi-weekly".into(),
            add_ons: vec!["garage".into(), "  ".into(), "garage".into()],
        }
        .parse(&Limits::default())
        .unwrap();

        assert_eq!(request.service_id.as_deref(), Some("deep"));
        assert_eq!(request.square_feet, Some(2500));
        assert_eq!(request.bedrooms, Some(3));
        assert_eq!(request.bathrooms, Some(2));
        assert!(request.has_pets);
        assert_eq!(request.frequency, Frequency::Biweekly);
        assert_eq!(request.add_ons.len(), 1);
    }

    #[test]
    fn test_thousands_separator_accepted() {
        let request = form("regular", "2,500").parse(&Limits::default()).unwrap();
        assert_eq!(request.square_feet, Some(2500));
    }

    #[test]
    fn test_misplaced_commas_rejected() {
        for raw in [",,2,,500", "25,00", "2500,", ",2500", "1,2,500"] {
            let err = form("regular", raw).parse(&Limits::default()).unwrap_err();
            assert_eq!(
                err,
                ValidationError::InvalidNumber {
                    field: "square_feet",
                    value: raw.into()
                },
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_grouped_ten_thousand() {
        let request = form("regular", "10,000").parse(&Limits::default()).unwrap();
        assert_eq!(request.square_feet, Some(10000));
    }

    #[test]
    fn test_non_numeric_square_feet() {
        let err = form("regular", "big").parse(&Limits::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidNumber {
                field: "square_feet",
                value: "big".into()
            }
        );
    }

    #[test]
    fn test_fractional_square_feet_rejected() {
        assert!(form("regular", "1500.5").parse(&Limits::default()).is_err());
    }

    #[test]
    fn test_negative_square_feet_out_of_range() {
        let err = form("regular", "-200").parse(&Limits::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::SquareFeetOutOfRange {
                value: -200,
                min: 500,
                max: 10000
            }
        );
    }

    #[test]
    fn test_negative_bedrooms() {
        let mut f = form("regular", "1500");
        f.bedrooms = "-1".into();
        let err = f.parse(&Limits::default()).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::RoomCountOutOfRange { field: "bedrooms", value: -1, .. }
        ));
    }

    #[test]
    fn test_unknown_frequency() {
        let mut f = form("regular", "1500");
        f.frequency = "daily".into();
        assert_eq!(
            f.parse(&Limits::default()).unwrap_err(),
            ValidationError::UnknownFrequency("daily".into())
        );
    }

    #[test]
    fn test_blank_square_feet_is_not_an_error() {
        let request = form("regular", "   ").parse(&Limits::default()).unwrap();
        assert_eq!(request.square_feet, None);
    }
}
