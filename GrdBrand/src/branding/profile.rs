//! Distributor branding profile

/// Placeholders that are never branded.
///
/// Their tails are left untouched by the rewriter.
pub const PROTECTED_PLACEHOLDERS: &[&str] = &["BEGIN_LINK_CHROMIUM"];

/// The provider name replaced by the distributor's company name.
///
/// "Google" cannot be replaced everywhere ("Google Docs" must stay), so the
/// replacement only happens in messages matching [`PROVIDER_TRIGGERS`].
pub const PROVIDER_TOKEN: &str = "Google";

/// Lowercase substrings marking a message for provider substitution.
///
/// Substrings rather than whole messages, to catch minor variants of the
/// same string.
pub const PROVIDER_TRIGGERS: &[&str] = &[
    "send feedback to google",
    "file will be sent to google for debugging",
    "usage statistics and crash reports to google",
    "google terms of service",
    "google privacy policy",
];

/// Replace every source string with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandRule {
    pub sources: Vec<String>,
    pub replacement: String,
}

/// Undo a branding replacement that hit a vendor product name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnbrandRule {
    pub branded: String,
    pub vendor: String,
}

impl BrandRule {
    fn new(sources: &[&str], replacement: impl Into<String>) -> Self {
        BrandRule {
            sources: sources.iter().map(|s| (*s).to_owned()).collect(),
            replacement: replacement.into(),
        }
    }
}

impl UnbrandRule {
    fn new(branded: String, vendor: &str) -> Self {
        UnbrandRule {
            branded,
            vendor: vendor.to_owned(),
        }
    }
}

/// Everything needed to rebrand resources for one distributor.
///
/// Rule lists are ordered: each rule sees the output of the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandProfile {
    product_name: String,
    company_name: String,
    path_component: String,
    internal_scheme_name: String,
    brand_rules: Vec<BrandRule>,
    unbrand_rules: Vec<UnbrandRule>,
}

impl BrandProfile {
    /// Build a profile and derive its rule lists.
    pub fn new(
        product_name: impl Into<String>,
        company_name: impl Into<String>,
        path_component: impl Into<String>,
        internal_scheme_name: impl Into<String>,
    ) -> Self {
        let product_name = product_name.into();
        let company_name = company_name.into();
        let internal_scheme_name = internal_scheme_name.into();

        BrandProfile {
            brand_rules: brand_rules(&product_name, &company_name, &internal_scheme_name),
            unbrand_rules: unbrand_rules(&product_name),
            product_name,
            company_name,
            path_component: path_component.into(),
            internal_scheme_name,
        }
    }

    /// The same profile under a different product name, with rules re-derived.
    #[must_use]
    pub fn with_product_name(&self, product_name: impl Into<String>) -> Self {
        BrandProfile::new(
            product_name,
            self.company_name.clone(),
            self.path_component.clone(),
            self.internal_scheme_name.clone(),
        )
    }

    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    #[must_use]
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    #[must_use]
    pub fn path_component(&self) -> &str {
        &self.path_component
    }

    #[must_use]
    pub fn internal_scheme_name(&self) -> &str {
        &self.internal_scheme_name
    }

    #[must_use]
    pub fn brand_rules(&self) -> &[BrandRule] {
        &self.brand_rules
    }

    #[must_use]
    pub fn unbrand_rules(&self) -> &[UnbrandRule] {
        &self.unbrand_rules
    }
}

fn brand_rules(product: &str, company: &str, scheme: &str) -> Vec<BrandRule> {
    vec![
        BrandRule::new(&["Chromium", "Google Chrome", "Chrome"], product),
        BrandRule::new(&["Google LLC"], company),
        BrandRule::new(&["chrome://"], format!("{scheme}://")),
        BrandRule::new(&["You and Google"], "You"),
        BrandRule::new(&["Sync and Google services", "Other Google services"], "Services"),
    ]
}

fn unbrand_rules(product: &str) -> Vec<UnbrandRule> {
    vec![
        UnbrandRule::new(format!("{product} OS"), "Chrome OS"),
        UnbrandRule::new(format!("{product} Web Store"), "Chrome Web Store"),
        UnbrandRule::new(format!("{product}book"), "Chromebook"),
        UnbrandRule::new(format!("{product}OS"), "ChromeOS"),
        UnbrandRule::new(format!("{product}Vox"), "ChromeVox"),
    ]
}
