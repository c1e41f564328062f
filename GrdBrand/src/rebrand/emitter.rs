//! Document emitter: writes branded GRD/GRDP and XTB files

use super::relocator::{LocaleKey, RelocatedLocale};
use crate::error::Result;
use crate::formats::grd::write_grd;
use crate::formats::xml::XmlElement;
use crate::formats::xtb::write_xtb;
use std::fs;
use std::path::{Path, PathBuf};

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Write a branded GRD or GRDP document, creating parent directories.
///
/// # Errors
/// Returns an error if serialization or writing fails.
pub fn emit_document(document: &XmlElement, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    write_grd(document, path)?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

/// Write one relocated locale to `output_path/<relative path>`.
///
/// Returns the path written.
///
/// # Errors
/// Returns an error if the file or its parent directories cannot be written.
pub fn emit_bundle(output_path: &Path, key: &LocaleKey, locale: &RelocatedLocale) -> Result<PathBuf> {
    let path = output_path.join(&locale.relative_path);
    ensure_parent(&path)?;
    write_xtb(&path, key.output_language(), &locale.translations)?;
    tracing::info!(
        "Wrote {} ({} translations)",
        path.display(),
        locale.translations.len()
    );
    Ok(path)
}
