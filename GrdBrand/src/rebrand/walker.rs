//! Resource walker: brands one GRD/GRDP tree and records its translation IDs

use super::remap::{IdentifierRemap, RemapEntry};
use crate::branding::{BrandProfile, IdentifierFunction, MessageId, rewrite_element};
use crate::error::{Error, Result};
use crate::formats::grd::{
    FILE_ATTR, FILE_TAG, LANG_ATTR, MESSAGE_TAG, MESSAGES_TAG, PART_TAG, PATH_ATTR,
    ResourceMessage, TRANSLATIONS_TAG,
};
use crate::formats::xml::XmlElement;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// A locale XTB file declared by a `<file lang="…">` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFile {
    /// Where to read the vendor bundle from.
    pub input_path: PathBuf,
    /// The `path` attribute as written in the document; output goes to the
    /// same relative path under the output directory.
    pub relative_path: String,
}

/// Declared language to locale file, in document order.
pub type FileInclusions = IndexMap<String, LocaleFile>;

/// A distributor-owned XTB file to reference from the branded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraBundle {
    /// Path written into the `<file>` element.
    pub path: String,
    /// The bundle's own `lang`.
    pub language: String,
}

/// Distributor-owned files appended to a branded document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentExtras {
    /// Each becomes a `<part file="…"/>` under `<messages>`.
    pub grdp_files: Vec<String>,
    /// Each becomes a `<file path="…" lang="…"/>` under `<translations>`.
    pub xtb_bundles: Vec<ExtraBundle>,
}

impl DocumentExtras {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grdp_files.is_empty() && self.xtb_bundles.is_empty()
    }
}

/// Everything the walker needs besides the document itself.
#[derive(Clone, Copy)]
pub struct WalkContext<'a> {
    pub profile: &'a BrandProfile,
    pub identifiers: &'a dyn IdentifierFunction,
    /// Directory locale `path` attributes are relative to.
    pub base_path: &'a Path,
    /// Directory branded GRDP files are written to.
    pub output_path: &'a Path,
    /// GRDP file names a `<part>` may reference.
    pub declared_parts: &'a [String],
}

/// Result of walking one document.
#[derive(Debug, Clone)]
pub struct WalkedDocument {
    /// The branded tree, ready to serialize.
    pub document: XmlElement,
    /// Vendor ID to branded ID for this document's messages.
    pub remap: IdentifierRemap,
    /// Locale bundles the document declares.
    pub file_inclusions: FileInclusions,
}

/// Brand every message of a document, rewrite its `<part>` references and
/// collect its locale files, then append `extras`.
///
/// Elements are visited in document order.
///
/// # Errors
/// Returns [`Error::UndeclaredPart`] for a `<part>` not in
/// `ctx.declared_parts`, [`Error::MissingContainer`] when extras are given but
/// their container element is missing, and structural errors for malformed
/// messages or file entries.
pub fn walk_document(
    ctx: &WalkContext<'_>,
    root: XmlElement,
    extras: &DocumentExtras,
) -> Result<WalkedDocument> {
    let mut walker = Walker {
        ctx,
        remap: IdentifierRemap::new(),
        file_inclusions: FileInclusions::new(),
    };

    let mut document = root;
    walker.visit(&mut document)?;
    inject_extras(&mut document, extras)?;

    tracing::debug!(
        "Walked <{}>: {} IDs remapped, {} locale files",
        document.tag,
        walker.remap.len(),
        walker.file_inclusions.len()
    );

    Ok(WalkedDocument {
        document,
        remap: walker.remap,
        file_inclusions: walker.file_inclusions,
    })
}

struct Walker<'c, 'a> {
    ctx: &'c WalkContext<'a>,
    remap: IdentifierRemap,
    file_inclusions: FileInclusions,
}

impl Walker<'_, '_> {
    fn visit(&mut self, element: &mut XmlElement) -> Result<()> {
        match element.tag.as_str() {
            PART_TAG => self.visit_part(element)?,
            FILE_TAG if element.get(LANG_ATTR).is_some() => self.visit_locale_file(element)?,
            MESSAGE_TAG => self.visit_message(element)?,
            _ => {}
        }

        for child in &mut element.children {
            self.visit(child)?;
        }
        Ok(())
    }

    fn visit_part(&mut self, element: &mut XmlElement) -> Result<()> {
        let file = element.get(FILE_ATTR).ok_or(Error::MissingAttribute {
            tag: PART_TAG,
            attribute: FILE_ATTR,
        })?;

        if !self.ctx.declared_parts.iter().any(|declared| declared == file) {
            return Err(Error::UndeclaredPart {
                file: file.to_owned(),
            });
        }

        let branded = self.ctx.output_path.join(file).to_string_lossy().into_owned();
        tracing::debug!("Part {file} -> {branded}");
        element.set(FILE_ATTR, branded);
        Ok(())
    }

    fn visit_locale_file(&mut self, element: &XmlElement) -> Result<()> {
        let (Some(language), Some(path)) = (element.get(LANG_ATTR), element.get(PATH_ATTR)) else {
            return Err(Error::MissingAttribute {
                tag: FILE_TAG,
                attribute: PATH_ATTR,
            });
        };

        self.file_inclusions.insert(
            language.to_owned(),
            LocaleFile {
                input_path: self.ctx.base_path.join(path),
                relative_path: path.to_owned(),
            },
        );
        Ok(())
    }

    fn visit_message(&mut self, element: &mut XmlElement) -> Result<()> {
        let vendor = ResourceMessage::from_element(element)?;
        let (branded_element, provider_substitution) =
            rewrite_element(self.ctx.profile, element, false);
        let branded = ResourceMessage::from_element(&branded_element)?;

        let old_id = self.identifier(&vendor);
        let new_id = self.identifier(&branded);

        match (vendor.translatable, old_id, new_id) {
            (true, Some(old_id), Some(new_id)) => {
                tracing::debug!(
                    "{}: {old_id} -> {new_id} (provider: {provider_substitution})",
                    vendor.name.as_deref().unwrap_or("<unnamed>")
                );
                self.remap.insert(
                    old_id,
                    RemapEntry {
                        new_id,
                        provider_substitution,
                    },
                );
            }
            _ => tracing::debug!(
                "{}: not remapped",
                vendor.name.as_deref().unwrap_or("<unnamed>")
            ),
        }

        *element = branded_element;
        Ok(())
    }

    fn identifier(&self, message: &ResourceMessage) -> Option<MessageId> {
        let text = message.identifier_text()?;
        Some(
            self.ctx
                .identifiers
                .compute_identifier(&text, message.disambiguation_tag.as_deref()),
        )
    }
}

fn inject_extras(document: &mut XmlElement, extras: &DocumentExtras) -> Result<()> {
    if !extras.grdp_files.is_empty() {
        let messages = document
            .find_descendant_mut(MESSAGES_TAG)
            .ok_or(Error::MissingContainer { tag: MESSAGES_TAG })?;
        for grdp in &extras.grdp_files {
            tracing::debug!("Injecting part {grdp}");
            messages
                .children
                .push(XmlElement::new(PART_TAG).with_attribute(FILE_ATTR, grdp));
        }
    }

    if !extras.xtb_bundles.is_empty() {
        let translations = document
            .find_descendant_mut(TRANSLATIONS_TAG)
            .ok_or(Error::MissingContainer {
                tag: TRANSLATIONS_TAG,
            })?;
        for bundle in &extras.xtb_bundles {
            tracing::debug!("Injecting {} bundle {}", bundle.language, bundle.path);
            translations.children.push(
                XmlElement::new(FILE_TAG)
                    .with_attribute(PATH_ATTR, &bundle.path)
                    .with_attribute(LANG_ATTR, &bundle.language),
            );
        }
    }

    Ok(())
}
