//! Manifest types for grdbrand.toml
//!
//! ```toml
//! [browser]
//! name = "Acme Browser"
//! company = "Acme"
//! path_component = "acme-browser"
//! schema = "acme"
//!
//! [resources]
//! grd_file = "chrome/app/generated_resources.grd"
//! output_path = "out/branded"
//! grdp_files = ["chrome/app/settings_strings.grdp"]
//! ```

use crate::branding::BrandProfile;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The full manifest (grdbrand.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandManifest {
    #[serde(default)]
    pub browser: BrowserSettings,
    #[serde(default)]
    pub resources: ResourceSettings,
}

/// Distributor names
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrowserSettings {
    pub name: Option<String>,
    pub company: Option<String>,
    pub path_component: Option<String>,
    pub schema: Option<String>,
}

impl BrowserSettings {
    /// Build a profile from the four names.
    ///
    /// # Errors
    /// Returns [`Error::MissingSetting`] for the first name that is not set.
    pub fn profile(&self) -> Result<BrandProfile> {
        Ok(BrandProfile::new(
            require(self.name.as_deref(), "browser name")?,
            require(self.company.as_deref(), "browser company")?,
            require(self.path_component.as_deref(), "browser path component")?,
            require(self.schema.as_deref(), "browser schema")?,
        ))
    }
}

fn require<'a>(value: Option<&'a str>, setting: &'static str) -> Result<&'a str> {
    value.ok_or(Error::MissingSetting(setting))
}

/// Files to brand and where to put them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceSettings {
    pub grd_file: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub xtb_relative_path: Option<PathBuf>,
    #[serde(default)]
    pub grdp_files: Vec<PathBuf>,
    #[serde(default)]
    pub grdp_extras: Vec<String>,
    #[serde(default)]
    pub xtb_extras: Vec<String>,
}

impl BrandManifest {
    /// Load a manifest from disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse manifest text
    ///
    /// # Errors
    /// Returns an error if the text is not valid TOML for a manifest.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
