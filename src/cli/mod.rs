use crate::services::i18n::{frequency_label, translate};
use crate::services::summary::format_thousands;
use crate::services::{
    compute_estimate, render_summary, CatalogService, CatalogSource, EstimateForm,
};
use crate::types::{
    ContactDetails, Estimate, EstimateResult, Language, LeadDraft, MissingInput, PricingCatalog,
    QuoteError,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV_VAR: &str = "CLEANQUOTE_LOG";

/// Instant price estimates for residential cleaning
#[derive(Parser)]
#[command(name = "cleanquote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pricing catalog JSON (overrides CLEANQUOTE_CATALOG and ~/.cleanquote/catalog.json)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the price of a cleaning
    Estimate {
        #[command(flatten)]
        input: EstimateArgs,

        /// Print the quote message instead of the price breakdown
        #[arg(long, conflicts_with = "json")]
        summary: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show services, add-ons and discounts (default)
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a quote request payload for the lead API
    Lead {
        #[command(flatten)]
        contact: ContactArgs,

        #[command(flatten)]
        input: EstimateArgs,
    },
}

#[derive(Args, Debug, Default)]
struct EstimateArgs {
    /// Service id (see `cleanquote catalog`)
    #[arg(short, long)]
    service: Option<String>,

    /// Home size in square feet
    #[arg(long = "sqft")]
    square_feet: Option<String>,

    #[arg(long)]
    bedrooms: Option<String>,

    #[arg(long)]
    bathrooms: Option<String>,

    /// The home has pets
    #[arg(long)]
    pets: bool,

    /// one-time, weekly, biweekly or monthly
    #[arg(short, long)]
    frequency: Option<String>,

    /// Add-on id; repeat or comma-separate for several
    #[arg(short, long = "add-on", value_delimiter = ',')]
    add_ons: Vec<String>,

    /// Language for labels and the quote message (en, es, pt)
    #[arg(long, default_value = "en")]
    lang: Language,
}

impl EstimateArgs {
    fn to_form(&self) -> EstimateForm {
        EstimateForm {
            service: self.service.clone().unwrap_or_default(),
            square_feet: self.square_feet.clone().unwrap_or_default(),
            bedrooms: self.bedrooms.clone().unwrap_or_default(),
            bathrooms: self.bathrooms.clone().unwrap_or_default(),
            has_pets: self.pets,
            frequency: self.frequency.clone().unwrap_or_default(),
            add_ons: self.add_ons.clone(),
        }
    }
}

#[derive(Args, Debug)]
struct ContactArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    phone: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    address: Option<String>,

    /// Customer agreed to receive SMS
    #[arg(long)]
    sms_consent: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        init_tracing(self.verbose);

        let service = CatalogService::resolve(self.catalog.as_deref())?;
        debug!(source = ?service.source(), "catalog resolved");

        match self.command {
            None => {
                print!("{}", render_catalog(&service));
                Ok(())
            }
            Some(Commands::Catalog { json }) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(service.catalog())?);
                } else {
                    print!("{}", render_catalog(&service));
                }
                Ok(())
            }
            Some(Commands::Estimate {
                input,
                summary,
                json,
            }) => {
                let catalog = service.catalog();
                let estimate = estimate_from_args(&input, catalog)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&estimate)?);
                    return Ok(());
                }
                match &estimate {
                    Estimate::Ready(result) if summary => {
                        println!("{}", render_summary(result, input.lang))
                    }
                    Estimate::Ready(result) => {
                        print!("{}", render_breakdown(result, input.lang))
                    }
                    Estimate::Incomplete { missing } => {
                        println!("{}", render_placeholder(*missing, input.lang))
                    }
                }
                Ok(())
            }
            Some(Commands::Lead { contact, input }) => {
                let estimate = estimate_from_args(&input, service.catalog())?;
                let lead = LeadDraft::for_estimate(
                    ContactDetails {
                        name: contact.name,
                        phone: contact.phone,
                        email: contact.email,
                        address: contact.address,
                        sms_consent: contact.sms_consent,
                    },
                    estimate.result(),
                    input.lang,
                );
                let errors = lead.validate();
                if !errors.is_empty() {
                    return Err(QuoteError::Lead(errors).into());
                }
                println!("{}", serde_json::to_string_pretty(&lead)?);
                Ok(())
            }
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));
    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn estimate_from_args(
    input: &EstimateArgs,
    catalog: &PricingCatalog,
) -> std::result::Result<Estimate, QuoteError> {
    let request = input.to_form().parse(&catalog.limits)?;
    Ok(compute_estimate(&request, catalog)?)
}

fn money(value: f64) -> String {
    let cents = (value * 100.0).round() as u64;
    format!("${}.{:02}", format_thousands(cents / 100), cents % 100)
}

fn render_breakdown(result: &EstimateResult, lang: Language) -> String {
    let mut out = format!(
        "{}: {} ({} sq ft)\n",
        translate(lang, "estimate-title"),
        result.service_name,
        format_thousands(u64::from(result.square_feet))
    );
    out.push_str(&format!("  {:<24}{:>12}\n", "Base price", money(result.base_price)));
    for add_on in &result.add_ons {
        out.push_str(&format!(
            "  {:<24}{:>12}\n",
            format!("+ {}", add_on.name),
            money(add_on.price)
        ));
    }
    if result.discount_amount > 0.0 {
        out.push_str(&format!(
            "  {:<24}{:>12}\n",
            format!("- {}", frequency_label(lang, result.frequency)),
            money(result.discount_amount)
        ));
    }
    out.push_str(&format!(
        "  {:<24}{:>12}\n",
        translate(lang, "summary-total"),
        format!("${}", format_thousands(result.total))
    ));
    out
}

fn render_placeholder(missing: MissingInput, lang: Language) -> String {
    let hint = match missing {
        MissingInput::Service => "--service",
        MissingInput::SquareFeet => "--sqft",
    };
    format!("{} ({})", translate(lang, "estimate-placeholder"), hint)
}

fn render_catalog(service: &CatalogService) -> String {
    let catalog = service.catalog();
    let source = match service.source() {
        CatalogSource::Builtin => "builtin".to_string(),
        CatalogSource::File(path) => path.display().to_string(),
    };

    let mut out = format!(
        "Catalog v{} ({}, {})\n\nServices:\n",
        catalog.version, catalog.currency, source
    );
    for s in &catalog.services {
        out.push_str(&format!(
            "  {:<12}{:<28}${}/sq ft, min {}\n",
            s.id,
            s.name,
            s.rate_per_sqft,
            money(s.minimum_price)
        ));
    }

    out.push_str("\nAdd-ons:\n");
    for a in &catalog.add_ons {
        out.push_str(&format!("  {:<18}{:<22}{}\n", a.id, a.name, money(a.price)));
    }

    out.push_str("\nFrequencies:\n");
    for (frequency, option) in &catalog.frequencies {
        out.push_str(&format!(
            "  {:<12}{}% off\n",
            frequency.as_str(),
            (option.discount_rate * 100.0).round()
        ));
    }

    let l = &catalog.limits;
    out.push_str(&format!(
        "\nLimits: {}-{} sq ft, bedrooms {}-{}, bathrooms {}-{}\n",
        l.min_sqft, l.max_sqft, l.min_bedrooms, l.max_bedrooms, l.min_bathrooms, l.max_bathrooms
    ));
    out
}
