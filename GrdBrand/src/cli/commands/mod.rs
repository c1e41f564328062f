use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::manifest::BrowserSettings;

pub mod brand;
pub mod execute;
pub mod inspect;

#[derive(Subcommand)]
pub enum Commands {
    /// Brand a GRD file, its GRDP parts and its XTB translations
    Brand(BrandArgs),

    /// Print the translation ID of a message text
    Fingerprint {
        /// Message text, with placeholders already replaced by their uppercased names
        text: String,

        /// The message's `meaning` attribute
        #[arg(short, long)]
        meaning: Option<String>,
    },

    /// Print the branded form of a single string
    Rewrite {
        /// Text to brand
        text: String,

        #[command(flatten)]
        browser: BrowserArgs,

        /// Replace the provider name even without a trigger phrase
        #[arg(long)]
        force_provider: bool,
    },
}

/// Distributor names
#[derive(Args, Debug, Default)]
pub struct BrowserArgs {
    /// The name of the branded browser
    #[arg(short = 'n', long)]
    pub browser_name: Option<String>,

    /// The name of the company owning the branded browser
    #[arg(short = 'c', long)]
    pub browser_company: Option<String>,

    /// The path-component of the branded browser
    #[arg(short = 'p', long)]
    pub browser_path_component: Option<String>,

    /// The internal WebUI schema of the branded browser
    #[arg(short = 's', long)]
    pub browser_schema: Option<String>,
}

impl BrowserArgs {
    /// Flags given on the command line, falling back to `manifest`.
    #[must_use]
    pub fn merged_with(&self, manifest: &BrowserSettings) -> BrowserSettings {
        BrowserSettings {
            name: self.browser_name.clone().or_else(|| manifest.name.clone()),
            company: self.browser_company.clone().or_else(|| manifest.company.clone()),
            path_component: self
                .browser_path_component
                .clone()
                .or_else(|| manifest.path_component.clone()),
            schema: self.browser_schema.clone().or_else(|| manifest.schema.clone()),
        }
    }
}

/// Arguments of `grdbrand brand`
#[derive(Args, Debug, Default)]
pub struct BrandArgs {
    #[command(flatten)]
    pub browser: BrowserArgs,

    /// The directory to generate the branded files
    #[arg(short = 'o', long)]
    pub output_path: Option<PathBuf>,

    /// The path relative to --output-path to generate XTB files
    #[arg(short = 'x', long)]
    pub xtb_relative_path: Option<PathBuf>,

    /// The path to the GRD file to brand
    #[arg(short = 'g', long)]
    pub grd_file: Option<PathBuf>,

    /// GRDP files to brand
    #[arg(short = 'r', long, num_args = 0..)]
    pub grdp_files: Vec<PathBuf>,

    /// Distributor-owned GRDP files to insert
    #[arg(short = 'e', long, num_args = 0..)]
    pub grdp_extras: Vec<String>,

    /// Distributor-owned XTB files to insert, relative to the GRD's directory
    #[arg(short = 't', long, num_args = 0..)]
    pub xtb_extras: Vec<String>,

    /// Read settings from a grdbrand.toml manifest; flags override it
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}
