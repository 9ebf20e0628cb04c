//! Human-readable quote summary
//!
//! Used both for terminal output and to pre-fill the lead message.
//! The total printed is always `EstimateResult::total`.

use super::i18n::{frequency_label, translate, yes_no};
use crate::types::{EstimateResult, Language};

/// Render the multi-line quote message for a computed estimate
pub fn render_summary(result: &EstimateResult, lang: Language) -> String {
    let t = |key: &str| translate(lang, key);
    let mut lines = vec![t("summary-greeting"), String::new()];

    lines.push(format!("{}: {}", t("summary-service"), result.service_name));
    lines.push(format!(
        "{}: {} sq ft",
        t("summary-size"),
        format_thousands(u64::from(result.square_feet))
    ));

    let rooms: Vec<String> = [
        ("summary-bedrooms", result.bedrooms),
        ("summary-bathrooms", result.bathrooms),
    ]
    .into_iter()
    .filter_map(|(key, count)| count.map(|n| format!("{}: {}", t(key), n)))
    .collect();
    if !rooms.is_empty() {
        lines.push(rooms.join(" | "));
    }

    lines.push(format!("{}: {}", t("summary-pets"), yes_no(lang, result.has_pets)));

    let mut frequency = frequency_label(lang, result.frequency);
    if result.discount_rate > 0.0 {
        frequency.push_str(&format!(" (-{}%)", format_percent(result.discount_rate)));
    }
    lines.push(format!("{}: {}", t("summary-frequency"), frequency));

    if !result.add_ons.is_empty() {
        let names: Vec<&str> = result.add_ons.iter().map(|a| a.name.as_str()).collect();
        lines.push(format!("{}: {}", t("summary-addons"), names.join(", ")));
    }

    let discount = result.discount_amount.round() as u64;
    if discount > 0 {
        lines.push(format!(
            "{}: -${}",
            t("summary-discount"),
            format_thousands(discount)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "{}: ${}",
        t("summary-total"),
        format_thousands(result.total)
    ));
    lines.push(String::new());
    lines.push(t("summary-closing"));

    lines.join("\n")
}

/// Format an integer with comma thousands separators
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 0.15 → "15", 0.125 → "12.5"
fn format_percent(rate: f64) -> String {
    let pct = (rate * 1000.0).round() / 10.0;
    if pct.fract() == 0.0 {
        format!("{}", pct as u64)
    } else {
        format!("{:.1}", pct)
    }
}
