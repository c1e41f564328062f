//! CLI commands for checking single strings

use super::BrowserArgs;
use crate::branding::{BrandProfile, GritFingerprint, IdentifierFunction, rewrite};

/// Print the translation ID of a text
pub fn fingerprint(text: &str, meaning: Option<&str>) {
    println!("{}", GritFingerprint.compute_identifier(text, meaning));
}

/// Print the branded form of a text and whether the provider name was replaced
pub fn rewrite_text(text: &str, browser: &BrowserArgs, force_provider: bool) -> anyhow::Result<()> {
    let required = |value: &Option<String>, flag: &str| {
        value
            .clone()
            .ok_or_else(|| anyhow::anyhow!("--{flag} is required"))
    };
    let profile = BrandProfile::new(
        required(&browser.browser_name, "browser-name")?,
        required(&browser.browser_company, "browser-company")?,
        browser.browser_path_component.clone().unwrap_or_default(),
        required(&browser.browser_schema, "browser-schema")?,
    );

    let (branded, provider_substitution) = rewrite(&profile, Some(text), force_provider, true);
    println!("{}", branded.unwrap_or_default());
    if provider_substitution {
        println!("(provider name replaced)");
    }
    Ok(())
}
