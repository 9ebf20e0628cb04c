//! Catalog loading service
//!
//! Resolves which pricing catalog to use and loads it:
//! explicit path, then `CLEANQUOTE_CATALOG`, then `~/.cleanquote/catalog.json`,
//! then the catalog compiled into the binary.

use crate::types::{PricingCatalog, QuoteError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Environment variable overriding the catalog location
pub const CATALOG_ENV_VAR: &str = "CLEANQUOTE_CATALOG";

/// Catalog shipped with the binary
const DEFAULT_CATALOG_JSON: &str = include_str!("../../catalog/default.json");

/// Where the active catalog came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

/// Holds a loaded, validated catalog shared between sessions
pub struct CatalogService {
    catalog: Arc<PricingCatalog>,
    source: CatalogSource,
}

impl CatalogService {
    /// Resolve and load a catalog; `explicit` wins over every other source
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        if let Some(path) = std::env::var_os(CATALOG_ENV_VAR).filter(|v| !v.is_empty()) {
            debug!(var = CATALOG_ENV_VAR, "catalog path taken from environment");
            return Self::from_path(Path::new(&path));
        }

        if let Ok(path) = Self::default_catalog_path() {
            if path.exists() {
                return Self::from_path(&path);
            }
            debug!(path = %path.display(), "no user catalog, using builtin");
        }

        Self::builtin()
    }

    /// Catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        let catalog = Self::parse(DEFAULT_CATALOG_JSON)?;
        Ok(Self {
            catalog: Arc::new(catalog),
            source: CatalogSource::Builtin,
        })
    }

    /// Load from a specific file
    pub fn from_path(path: &Path) -> Result<Self> {
        let catalog = Self::load_catalog(path)?;
        info!(
            path = %path.display(),
            services = catalog.services.len(),
            add_ons = catalog.add_ons.len(),
            "loaded pricing catalog"
        );
        Ok(Self {
            catalog: Arc::new(catalog),
            source: CatalogSource::File(path.to_path_buf()),
        })
    }

    /// Wrap an already-built catalog (validated here)
    pub fn from_catalog(catalog: PricingCatalog) -> Result<Self> {
        catalog.validate()?;
        Ok(Self {
            catalog: Arc::new(catalog),
            source: CatalogSource::Builtin,
        })
    }

    /// Get the default catalog path (~/.cleanquote/catalog.json)
    pub fn default_catalog_path() -> Result<PathBuf> {
        let home = directories::UserDirs::new()
            .ok_or_else(|| QuoteError::Config("Failed to get home directory".into()))?
            .home_dir()
            .to_path_buf();
        Ok(home.join(".cleanquote").join("catalog.json"))
    }

    fn load_catalog(path: &Path) -> Result<PricingCatalog> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<PricingCatalog> {
        let catalog: PricingCatalog = serde_json::from_str(content)
            .map_err(|e| QuoteError::Parse(format!("Invalid catalog format: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Write a catalog as pretty JSON, creating parent directories
    pub fn save_catalog(path: &Path, catalog: &PricingCatalog) -> Result<()> {
        catalog.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(catalog)
            .map_err(|e| QuoteError::Parse(format!("Serialization failed: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    /// Cheap handle for sessions
    pub fn shared(&self) -> Arc<PricingCatalog> {
        Arc::clone(&self.catalog)
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Frequency;
    use tempfile::TempDir;

    // ========== builtin ==========

    #[test]
    fn test_builtin_catalog_is_valid() {
        let service = CatalogService::builtin().unwrap();
        let catalog = service.catalog();

        assert_eq!(service.source(), &CatalogSource::Builtin);
        assert_eq!(catalog.services.len(), 3);
        assert_eq!(catalog.add_ons.len(), 6);
        assert!((catalog.discount_rate(Frequency::Weekly) - 0.15).abs() < f64::EPSILON);
        assert!((catalog.discount_rate(Frequency::Biweekly) - 0.10).abs() < f64::EPSILON);
        assert!((catalog.discount_rate(Frequency::Monthly) - 0.05).abs() < f64::EPSILON);
        assert_eq!(catalog.limits.min_sqft, 500);
        assert_eq!(catalog.limits.max_sqft, 10_000);
    }

    #[test]
    fn test_builtin_discount_schedule_is_monotone() {
        let service = CatalogService::builtin().unwrap();
        let c = service.catalog();
        assert!(c.discount_rate(Frequency::Weekly) >= c.discount_rate(Frequency::Biweekly));
        assert!(c.discount_rate(Frequency::Biweekly) >= c.discount_rate(Frequency::Monthly));
        assert!(c.discount_rate(Frequency::Monthly) >= c.discount_rate(Frequency::OneTime));
    }

    // ========== file loading ==========

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("catalog.json");

        let builtin = CatalogService::builtin().unwrap();
        CatalogService::save_catalog(&path, builtin.catalog()).unwrap();

        let loaded = CatalogService::from_path(&path).unwrap();
        assert_eq!(loaded.catalog(), builtin.catalog());
        assert_eq!(loaded.source(), &CatalogSource::File(path));
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");

        let mut catalog = CatalogService::builtin().unwrap().catalog().clone();
        catalog.services.truncate(1);
        CatalogService::save_catalog(&path, &catalog).unwrap();

        let service = CatalogService::resolve(Some(&path)).unwrap();
        assert_eq!(service.catalog().services.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let err = CatalogService::from_path(&path).err().unwrap();
        assert!(matches!(err, QuoteError::Io(_)));
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(&path, "not valid json{{{").unwrap();

        let err = CatalogService::from_path(&path).err().unwrap();
        assert!(matches!(err, QuoteError::Parse(_)));
    }

    #[test]
    fn test_inconsistent_file_is_catalog_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"services": [], "frequencies": {}}"#,
        )
        .unwrap();

        let err = CatalogService::from_path(&path).err().unwrap();
        assert!(matches!(err, QuoteError::Catalog(_)));
    }

    #[test]
    fn test_from_catalog_validates() {
        let mut catalog = CatalogService::builtin().unwrap().catalog().clone();
        catalog.add_ons[0].price = -5.0;
        assert!(CatalogService::from_catalog(catalog).is_err());
    }

    #[test]
    fn test_default_catalog_path_format() {
        if let Ok(path) = CatalogService::default_catalog_path() {
            assert!(path.ends_with(".cleanquote/catalog.json"));
        }
    }
}
