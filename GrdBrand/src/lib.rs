//! # grdbrand
//!
//! Rebrands GRIT resource files for a downstream browser distribution while
//! keeping the existing translations attached.
//!
//! GRIT identifies every translation by a fingerprint of the source text, so
//! changing "Chromium" to "Acme Browser" in a message changes its ID and
//! orphans every translation of it. grdbrand brands the GRD and GRDP files,
//! records each message's ID before and after branding, and writes XTB
//! bundles whose (equally branded) translations are keyed by the new IDs.
//!
//! ## Quick Start
//!
//! ### Branding a resource group
//!
//! ```no_run
//! use grdbrand::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! let profile = BrandProfile::new("Acme Browser", "Acme", "acme-browser", "acme");
//! let group = ResourceGroup::for_grd_path(
//!     Path::new("chrome/app/generated_resources.grd"),
//!     &[PathBuf::from("chrome/app/settings_strings.grdp")],
//!     vec![],
//!     vec![],
//! )?;
//! let layout = OutputLayout {
//!     output_path: PathBuf::from("out/branded"),
//!     xtb_relative_path: None,
//! };
//!
//! let summary = brand_resource_group(&profile, &GritFingerprint, &group, &layout, &|_| {})?;
//! println!("{} messages re-keyed", summary.messages_remapped);
//! # Ok::<(), grdbrand::Error>(())
//! ```
//!
//! ### Branding a single string
//!
//! ```
//! use grdbrand::branding::{BrandProfile, rewrite};
//!
//! let profile = BrandProfile::new("Acme Browser", "Acme", "acme-browser", "acme");
//! let (text, provider) = rewrite(&profile, Some("Send feedback to Google"), false, true);
//! assert_eq!(text.as_deref(), Some("Send feedback to Acme"));
//! assert!(provider);
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `grdbrand` command-line binary

pub mod branding;
pub mod error;
pub mod formats;
pub mod manifest;
pub mod rebrand;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::formats::{
        TranslationBundle, XmlElement, ResourceMessage, parse_xml, read_grd, read_xtb,
    };

    pub use crate::branding::{
        BrandProfile, GritFingerprint, IdentifierFunction, MessageId, rewrite, rewrite_element,
    };

    pub use crate::rebrand::{
        BrandPhase, BrandProgress, BrandSummary, IdentifierRemap, OutputLayout, ResourceGroup,
        brand_resource_group, relocate, walk_document,
    };

    pub use crate::manifest::BrandManifest;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
