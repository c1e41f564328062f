//! Resource groups and the full branding run

use super::emitter::{emit_bundle, emit_document};
use super::relocator::relocate;
use super::remap::IdentifierRemap;
use super::types::{BrandPhase, BrandProgress, BrandProgressCallback};
use super::walker::{DocumentExtras, ExtraBundle, WalkContext, walk_document};
use crate::branding::{BrandProfile, IdentifierFunction};
use crate::error::{Error, Result};
use crate::formats::grd::read_grd;
use crate::formats::xtb::{LANG_ATTR, TRANSLATION_BUNDLE_TAG, read_xtb};
use std::fs;
use std::path::{Path, PathBuf};

/// A GRD file, the GRDP files it includes and the distributor-owned extras
/// to add to it.
///
/// Construction checks that every input exists, so a run never starts with
/// a file missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    base_path: PathBuf,
    grd_file: String,
    grdp_files: Vec<String>,
    grdp_extras: Vec<String>,
    xtb_extras: Vec<String>,
}

impl ResourceGroup {
    /// Create a group rooted at `base_path`.
    ///
    /// `grd_file` and `grdp_files` are relative to `base_path`, as are
    /// `xtb_extras`. `grdp_extras` are written into the branded GRD as given
    /// and checked relative to the working directory.
    ///
    /// # Errors
    /// Returns [`Error::MissingInput`] for the first input that does not exist.
    pub fn new(
        base_path: impl Into<PathBuf>,
        grd_file: impl Into<String>,
        grdp_files: Vec<String>,
        grdp_extras: Vec<String>,
        xtb_extras: Vec<String>,
    ) -> Result<Self> {
        let group = Self {
            base_path: base_path.into(),
            grd_file: grd_file.into(),
            grdp_files,
            grdp_extras,
            xtb_extras,
        };
        group.validate()?;
        Ok(group)
    }

    /// Create a group from a GRD path; its directory becomes the base path
    /// and only the file names of `grdp_files` are kept.
    ///
    /// # Errors
    /// Returns [`Error::MissingInput`] for the first input that does not exist.
    pub fn for_grd_path(
        grd_path: &Path,
        grdp_files: &[PathBuf],
        grdp_extras: Vec<String>,
        xtb_extras: Vec<String>,
    ) -> Result<Self> {
        let base_path = grd_path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        let grdp_files = grdp_files.iter().map(|path| file_name(path)).collect();
        Self::new(base_path, file_name(grd_path), grdp_files, grdp_extras, xtb_extras)
    }

    fn validate(&self) -> Result<()> {
        fn require(path: PathBuf, is_dir: bool) -> Result<()> {
            let exists = if is_dir { path.is_dir() } else { path.is_file() };
            if exists { Ok(()) } else { Err(Error::MissingInput { path }) }
        }

        // An empty base path means the working directory
        if !self.base_path.as_os_str().is_empty() {
            require(self.base_path.clone(), true)?;
        }
        require(self.base_path.join(&self.grd_file), false)?;
        for grdp in &self.grdp_files {
            require(self.base_path.join(grdp), false)?;
        }
        for extra in &self.grdp_extras {
            require(PathBuf::from(extra), false)?;
        }
        for extra in &self.xtb_extras {
            require(self.base_path.join(extra), false)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    #[must_use]
    pub fn grd_file(&self) -> &str {
        &self.grd_file
    }

    #[must_use]
    pub fn grdp_files(&self) -> &[String] {
        &self.grdp_files
    }

    #[must_use]
    pub fn grdp_extras(&self) -> &[String] {
        &self.grdp_extras
    }

    #[must_use]
    pub fn xtb_extras(&self) -> &[String] {
        &self.xtb_extras
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
        .into_owned()
}

/// Where branded files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    /// Directory for branded GRD/GRDP files; XTB files go to their original
    /// relative path below it.
    pub output_path: PathBuf,
    /// Directory below `output_path` created up front for XTB files.
    pub xtb_relative_path: Option<PathBuf>,
}

/// What a branding run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandSummary {
    /// Branded GRD and GRDP files.
    pub documents_written: Vec<PathBuf>,
    /// Branded XTB files.
    pub bundles_written: Vec<PathBuf>,
    /// Size of the merged remap.
    pub messages_remapped: usize,
    /// Translations written across all bundles.
    pub translations_relocated: usize,
    /// Translations left out because their ID is not in the remap.
    pub translations_dropped: usize,
}

/// Brand a resource group: the GRD, then each GRDP, then every locale
/// bundle the GRD declares.
///
/// The remaps of all documents are merged before any bundle is relocated.
///
/// # Errors
/// Returns an error on the first configuration, parse or write failure.
pub fn brand_resource_group(
    profile: &BrandProfile,
    identifiers: &dyn IdentifierFunction,
    group: &ResourceGroup,
    layout: &OutputLayout,
    progress: BrandProgressCallback,
) -> Result<BrandSummary> {
    let output_path = layout.output_path.as_path();
    fs::create_dir_all(output_path)?;
    if let Some(xtb_relative_path) = &layout.xtb_relative_path {
        fs::create_dir_all(output_path.join(xtb_relative_path))?;
    }

    let ctx = WalkContext {
        profile,
        identifiers,
        base_path: &group.base_path,
        output_path,
        declared_parts: &group.grdp_files,
    };
    let mut summary = BrandSummary::default();
    let document_total = 1 + group.grdp_files.len();

    // The GRD, with extras
    progress(&BrandProgress::new(BrandPhase::BrandingDocuments, 1, document_total));
    let extras = DocumentExtras {
        grdp_files: group.grdp_extras.clone(),
        xtb_bundles: resolve_xtb_extras(group)?,
    };
    let grd = read_grd(group.base_path.join(&group.grd_file))?;
    let primary = walk_document(&ctx, grd, &extras)?;
    let grd_output = output_path.join(&group.grd_file);
    emit_document(&primary.document, &grd_output)?;
    summary.documents_written.push(grd_output);

    let mut remap: IdentifierRemap = primary.remap;

    // Each GRDP, without extras
    for (index, grdp_file) in group.grdp_files.iter().enumerate() {
        progress(&BrandProgress::new(BrandPhase::BrandingDocuments, index + 2, document_total));
        let grdp = read_grd(group.base_path.join(grdp_file))?;
        let walked = walk_document(&ctx, grdp, &DocumentExtras::default())?;
        let grdp_output = output_path.join(grdp_file);
        emit_document(&walked.document, &grdp_output)?;
        summary.documents_written.push(grdp_output);
        remap.merge(walked.remap);
    }
    summary.messages_remapped = remap.len();
    tracing::info!("{} translation IDs remapped", remap.len());

    let locale_total = primary.file_inclusions.len();
    progress(&BrandProgress::new(BrandPhase::RelocatingTranslations, 0, locale_total));
    let relocation = relocate(profile, &primary.file_inclusions, &remap)?;
    summary.translations_dropped = relocation.dropped;

    let bundle_total = relocation.locales.len();
    for (index, (key, locale)) in relocation.locales.iter().enumerate() {
        progress(&BrandProgress::new(BrandPhase::WritingBundles, index + 1, bundle_total));
        summary.bundles_written.push(emit_bundle(output_path, key, locale)?);
        summary.translations_relocated += locale.translations.len();
    }

    progress(&BrandProgress::new(BrandPhase::Complete, bundle_total, bundle_total));
    Ok(summary)
}

/// Read the language of each distributor XTB file.
fn resolve_xtb_extras(group: &ResourceGroup) -> Result<Vec<ExtraBundle>> {
    group
        .xtb_extras
        .iter()
        .map(|extra| {
            let bundle = read_xtb(group.base_path.join(extra))?;
            let language = bundle.language.ok_or(Error::MissingAttribute {
                tag: TRANSLATION_BUNDLE_TAG,
                attribute: LANG_ATTR,
            })?;
            Ok(ExtraBundle {
                path: extra.clone(),
                language,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_inputs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.grd"), "<grit />").unwrap();

        assert!(ResourceGroup::new(dir.path(), "app.grd", vec![], vec![], vec![]).is_ok());

        let missing_grdp = ResourceGroup::new(
            dir.path(),
            "app.grd",
            vec!["settings.grdp".to_string()],
            vec![],
            vec![],
        );
        assert!(matches!(
            missing_grdp,
            Err(Error::MissingInput { path }) if path == dir.path().join("settings.grdp")
        ));

        let missing_base = ResourceGroup::new(dir.path().join("nope"), "app.grd", vec![], vec![], vec![]);
        assert!(matches!(missing_base, Err(Error::MissingInput { .. })));
    }

    #[test]
    fn test_for_grd_path_keeps_file_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.grd"), "<grit />").unwrap();
        fs::write(dir.path().join("settings.grdp"), "<grit-part />").unwrap();

        let group = ResourceGroup::for_grd_path(
            &dir.path().join("app.grd"),
            &[PathBuf::from("somewhere/else/settings.grdp")],
            vec![],
            vec![],
        )
        .unwrap();

        assert_eq!(group.base_path(), dir.path());
        assert_eq!(group.grd_file(), "app.grd");
        assert_eq!(group.grdp_files(), ["settings.grdp".to_string()]);
    }
}
