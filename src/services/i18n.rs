//! Calculator strings for the supported site languages
//!
//! Plain key → string tables. Lookup falls back to English, then to the key
//! itself, so a missing translation never hides a line.

use crate::types::{Frequency, Language};

const EN: &[(&str, &str)] = &[
    ("estimate-title", "Your Estimate"),
    ("estimate-placeholder", "Fill in the data to see your estimate"),
    ("summary-greeting", "Hello! I would like a quote for:"),
    ("summary-service", "Service"),
    ("summary-size", "Home size"),
    ("summary-bedrooms", "Bedrooms"),
    ("summary-bathrooms", "Bathrooms"),
    ("summary-pets", "Pets"),
    ("summary-frequency", "Frequency"),
    ("summary-addons", "Add-ons"),
    ("summary-discount", "Frequency discount"),
    ("summary-total", "Estimated total"),
    ("summary-closing", "Please confirm the quote and schedule a visit. Thank you!"),
    ("yes", "Yes"),
    ("no", "No"),
    ("frequency-one-time", "One Time"),
    ("frequency-weekly", "Weekly"),
    ("frequency-biweekly", "Bi-weekly"),
    ("frequency-monthly", "Monthly"),
];

const ES: &[(&str, &str)] = &[
    ("estimate-title", "Su Estimación"),
    ("estimate-placeholder", "Complete los datos para ver su estimación"),
    ("summary-greeting", "¡Hola! Me gustaría una cotización para:"),
    ("summary-service", "Servicio"),
    ("summary-size", "Tamaño de la casa"),
    ("summary-bedrooms", "Habitaciones"),
    ("summary-bathrooms", "Baños"),
    ("summary-pets", "Mascotas"),
    ("summary-frequency", "Frecuencia"),
    ("summary-addons", "Adicionales"),
    ("summary-discount", "Descuento por frecuencia"),
    ("summary-total", "Total estimado"),
    ("summary-closing", "Por favor, confirme la cotización y agende una visita. ¡Gracias!"),
    ("yes", "Sí"),
    ("no", "No"),
    ("frequency-one-time", "Una vez"),
    ("frequency-weekly", "Semanal"),
    ("frequency-biweekly", "Quincenal"),
    ("frequency-monthly", "Mensual"),
];

const PT: &[(&str, &str)] = &[
    ("estimate-title", "Sua Estimativa"),
    ("estimate-placeholder", "Preencha os dados para ver sua estimativa"),
    ("summary-greeting", "Olá! Gostaria de um orçamento para:"),
    ("summary-service", "Serviço"),
    ("summary-size", "Metragem"),
    ("summary-bedrooms", "Quartos"),
    ("summary-bathrooms", "Banheiros"),
    ("summary-pets", "Pets"),
    ("summary-frequency", "Frequência"),
    ("summary-addons", "Adicionais"),
    ("summary-discount", "Desconto por frequência"),
    ("summary-total", "Estimativa Calculada"),
    ("summary-closing", "Por favor, confirme o orçamento e agende uma visita. Obrigado!"),
    ("yes", "Sim"),
    ("no", "Não"),
    ("frequency-one-time", "Uma vez"),
    ("frequency-weekly", "Semanal"),
    ("frequency-biweekly", "Quinzenal"),
    ("frequency-monthly", "Mensal"),
];

fn table(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::En => EN,
        Language::Es => ES,
        Language::Pt => PT,
    }
}

fn find(lang: Language, key: &str) -> Option<&'static str> {
    table(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Translate `key`, falling back to English and then to the key
pub fn translate(lang: Language, key: &str) -> String {
    find(lang, key)
        .or_else(|| find(Language::En, key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

pub fn frequency_label(lang: Language, frequency: Frequency) -> String {
    translate(lang, &format!("frequency-{}", frequency.as_str()))
}

pub fn yes_no(lang: Language, value: bool) -> String {
    translate(lang, if value { "yes" } else { "no" })
}
