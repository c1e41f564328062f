//! Progress reporting for a branding run

/// Receives a [`BrandProgress`] at every step of a run.
pub type BrandProgressCallback<'a> = &'a dyn Fn(&BrandProgress);

/// Where a branding run is.
///
/// `current` counts documents while branding and bundles while writing;
/// relocation reports once, with `current` at 0 and `total` the number of locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandProgress {
    pub phase: BrandPhase,
    pub current: usize,
    pub total: usize,
}

impl BrandProgress {
    #[must_use]
    pub fn new(phase: BrandPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
        }
    }
}

/// The stages of a run, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandPhase {
    /// The GRD, then each GRDP part
    BrandingDocuments,
    /// Re-keying XTB translations to branded IDs
    RelocatingTranslations,
    /// Writing one XTB per locale
    WritingBundles,
    Complete,
}

impl BrandPhase {
    /// Status line shown by the CLI.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BrandingDocuments => "Branding resource documents",
            Self::RelocatingTranslations => "Relocating translations",
            Self::WritingBundles => "Writing translation bundles",
            Self::Complete => "Complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_phase_status_lines() {
        let lines: Vec<_> = [
            BrandPhase::BrandingDocuments,
            BrandPhase::RelocatingTranslations,
            BrandPhase::WritingBundles,
            BrandPhase::Complete,
        ]
        .into_iter()
        .map(BrandPhase::as_str)
        .collect();

        assert_eq!(
            lines,
            vec![
                "Branding resource documents",
                "Relocating translations",
                "Writing translation bundles",
                "Complete",
            ]
        );
    }
}
