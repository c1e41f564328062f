//! XTB file reading

use super::{ID_ATTR, LANG_ATTR, TRANSLATION_TAG, TranslationBundle};
use crate::error::Result;
use crate::formats::xml::{XmlElement, parse_xml};
use std::fs;
use std::path::Path;

/// Read an XTB file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid XML.
pub fn read_xtb<P: AsRef<Path>>(path: P) -> Result<TranslationBundle> {
    let content = fs::read_to_string(path)?;
    parse_xtb(&content)
}

/// Parse XTB content
///
/// Every `<translation>` in the document is collected; a later duplicate ID
/// replaces the earlier element.
///
/// # Errors
/// Returns an error if the XML is malformed.
pub fn parse_xtb(content: &str) -> Result<TranslationBundle> {
    let root = parse_xml(content)?;
    Ok(bundle_from_root(&root))
}

fn bundle_from_root(root: &XmlElement) -> TranslationBundle {
    let mut bundle = TranslationBundle {
        language: root.get(LANG_ATTR).map(str::to_owned),
        ..TranslationBundle::default()
    };

    for element in root.descendants_named(TRANSLATION_TAG) {
        let Some(id) = element.get(ID_ATTR) else {
            tracing::debug!("Skipping <translation> without an id");
            continue;
        };
        bundle.translations.insert(id.to_owned(), element.clone());
    }

    bundle
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" ?>
<!DOCTYPE translationbundle>
<translationbundle lang="iw">
<translation id="100">שלום</translation>
<translation id="200">פתח <ph name="URL" /></translation>
<translation>orphan</translation>
</translationbundle>"#;

    #[test]
    fn test_parse_xtb() {
        let bundle = parse_xtb(SAMPLE).unwrap();
        assert_eq!(bundle.language.as_deref(), Some("iw"));
        assert_eq!(bundle.len(), 2);
        assert_eq!(bundle.translations["100"].text.as_deref(), Some("שלום"));
        assert_eq!(bundle.translations["200"].children[0].get("name"), Some("URL"));
    }

    #[test]
    fn test_duplicate_ids_keep_last() {
        let bundle = parse_xtb(
            r#"<translationbundle lang="es"><translation id="1">a</translation><translation id="1">b</translation></translationbundle>"#,
        )
        .unwrap();
        assert_eq!(bundle.len(), 1);
        assert_eq!(bundle.translations["1"].text.as_deref(), Some("b"));
    }
}
