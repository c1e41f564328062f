//! XTB translation bundles
//!
//! One XTB file per locale maps GRIT translation IDs to translated message
//! content:
//!
//! ```xml
//! <translationbundle lang="es">
//! <translation id="1234567890">Enviar comentarios a <ph name="COMPANY"/></translation>
//! </translationbundle>
//! ```

mod reader;
mod writer;

pub use reader::{read_xtb, parse_xtb};
pub use writer::{serialize_xtb, write_xtb};

use crate::formats::xml::XmlElement;
use indexmap::IndexMap;

/// Root element of an XTB file
pub const TRANSLATION_BUNDLE_TAG: &str = "translationbundle";
/// One translated message
pub const TRANSLATION_TAG: &str = "translation";
pub const ID_ATTR: &str = "id";
pub const LANG_ATTR: &str = "lang";

/// A parsed XTB file.
#[derive(Debug, Clone, Default)]
pub struct TranslationBundle {
    /// The `lang` attribute of the bundle root.
    ///
    /// May differ from the language the GRD declares for the same file
    /// (e.g. `iw` vs `he`); both are needed downstream.
    pub language: Option<String>,
    /// Translation ID (as written in the file) to `<translation>` element.
    pub translations: IndexMap<String, XmlElement>,
}

impl TranslationBundle {
    #[must_use]
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}
