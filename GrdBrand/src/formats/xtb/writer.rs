//! XTB file writing

use crate::error::Result;
use std::fmt::{Display, Write as _};
use std::fs;
use std::path::Path;

/// Serialize translations into an XTB document
///
/// `translations` yields `(id, inner markup)` pairs and is written in the
/// order given; the markup is inserted verbatim.
pub fn serialize_xtb<I, K, V>(language: &str, translations: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: AsRef<str>,
{
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" ?>\n");
    output.push_str("<!DOCTYPE translationbundle>\n");
    let _ = writeln!(output, "<translationbundle lang=\"{language}\">");

    for (id, markup) in translations {
        let _ = writeln!(output, "<translation id=\"{id}\">{}</translation>", markup.as_ref());
    }

    output.push_str("</translationbundle>");
    output
}

/// Write translations to an XTB file
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_xtb<P, I, K, V>(path: P, language: &str, translations: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: AsRef<str>,
{
    fs::write(path, serialize_xtb(language, translations))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_xtb() {
        let xtb = serialize_xtb("es", [(12_u64, "Hola"), (345, r#"Abrir <ph name="URL" />"#)]);
        assert_eq!(
            xtb,
            "<?xml version=\"1.0\" ?>\n\
             <!DOCTYPE translationbundle>\n\
             <translationbundle lang=\"es\">\n\
             <translation id=\"12\">Hola</translation>\n\
             <translation id=\"345\">Abrir <ph name=\"URL\" /></translation>\n\
             </translationbundle>"
        );
    }

    #[test]
    fn test_serialize_empty_bundle() {
        let xtb = serialize_xtb("fr", Vec::<(u64, String)>::new());
        assert!(xtb.ends_with("<translationbundle lang=\"fr\">\n</translationbundle>"));
    }
}
