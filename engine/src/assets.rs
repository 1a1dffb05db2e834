//! The portfolio content compiled into the binary.

use serde::Deserialize;
use thiserror::Error;

use folio_types::{CatalogError, Profile, ProjectCatalog, ProjectRecord};

const PORTFOLIO_RAW: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/portfolio.toml"));

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("portfolio asset is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("portfolio asset has an invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Deserialize)]
struct PortfolioFile {
    profile: Profile,
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

/// Profile plus catalog. Built once before the first frame and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    profile: Profile,
    catalog: ProjectCatalog,
}

impl Portfolio {
    #[must_use]
    pub fn new(profile: Profile, catalog: ProjectCatalog) -> Self {
        Self { profile, catalog }
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }
}

pub fn parse_portfolio(raw: &str) -> Result<Portfolio, AssetError> {
    let file: PortfolioFile = toml::from_str(raw)?;
    let catalog = ProjectCatalog::new(file.projects)?;
    tracing::debug!(projects = catalog.len(), "Portfolio parsed");
    Ok(Portfolio::new(file.profile, catalog))
}

/// Parse the portfolio embedded at build time.
///
/// Failure here means the shipped asset is broken, not that user input was bad.
pub fn embedded_portfolio() -> Result<Portfolio, AssetError> {
    parse_portfolio(PORTFOLIO_RAW)
}
