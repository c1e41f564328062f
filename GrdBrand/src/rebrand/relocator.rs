//! Translation relocator: re-keys vendor XTB translations to branded IDs

use super::remap::IdentifierRemap;
use super::walker::FileInclusions;
use crate::branding::{BrandProfile, MessageId, rewrite_element};
use crate::error::Result;
use crate::formats::grd::strip_triple_quotes;
use crate::formats::xml::inner_markup;
use crate::formats::xtb::{TranslationBundle, read_xtb};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Identifies one locale's output.
///
/// The GRD and the XTB sometimes name the same language differently (`he`
/// in the GRD, `iw` in the bundle); both are kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleKey {
    /// Language from the GRD `<file lang>`.
    pub declared_language: String,
    /// Language from the bundle's own `lang`.
    pub bundle_language: Option<String>,
}

impl LocaleKey {
    /// Language to write into the output bundle.
    #[must_use]
    pub fn output_language(&self) -> &str {
        self.bundle_language.as_deref().unwrap_or(&self.declared_language)
    }
}

/// Branded translations for one locale.
///
/// Keyed by the decimal ID, so bundles list IDs in text order (`"1000"`
/// before `"900"`), as GRIT-generated XTB files do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelocatedLocale {
    /// The locale file's path relative to the GRD, reused for output.
    pub relative_path: String,
    pub translations: BTreeMap<String, String>,
}

/// All relocated locales plus how many translations were left behind.
#[derive(Debug, Clone, Default)]
pub struct Relocation {
    pub locales: IndexMap<LocaleKey, RelocatedLocale>,
    /// Translations whose ID is not in the remap.
    pub dropped: usize,
}

/// Relocate every declared locale bundle.
///
/// # Errors
/// Returns an error if a bundle cannot be read or parsed.
pub fn relocate(
    profile: &BrandProfile,
    file_inclusions: &FileInclusions,
    remap: &IdentifierRemap,
) -> Result<Relocation> {
    let mut relocation = Relocation::default();

    for (declared_language, locale_file) in file_inclusions {
        let bundle = read_xtb(&locale_file.input_path)?;

        if bundle
            .language
            .as_deref()
            .is_some_and(|lang| lang != declared_language)
        {
            tracing::info!(
                "{} declared as {declared_language} but bundle says {}",
                locale_file.relative_path,
                bundle.language.as_deref().unwrap_or_default()
            );
        }

        let key = LocaleKey {
            declared_language: declared_language.clone(),
            bundle_language: bundle.language.clone(),
        };
        let (translations, dropped) = relocate_bundle(profile, &bundle, remap)?;

        tracing::info!(
            "Relocated {} translations for {declared_language} ({dropped} dropped)",
            translations.len()
        );

        relocation.dropped += dropped;
        relocation.locales.insert(
            key,
            RelocatedLocale {
                relative_path: locale_file.relative_path.clone(),
                translations,
            },
        );
    }

    Ok(relocation)
}

/// Brand and re-key the translations of one bundle.
///
/// Each translation is branded with the provider decision of its source
/// message. Returns the translations by branded ID and the number dropped
/// because their ID is not in `remap`.
///
/// # Errors
/// Returns an error if a translation cannot be serialized.
pub fn relocate_bundle(
    profile: &BrandProfile,
    bundle: &TranslationBundle,
    remap: &IdentifierRemap,
) -> Result<(BTreeMap<String, String>, usize)> {
    let mut translations = BTreeMap::new();
    let mut dropped = 0;

    for (id, element) in &bundle.translations {
        let Some(entry) = id.parse::<MessageId>().ok().and_then(|id| remap.get(id)) else {
            tracing::debug!("Dropping translation {id}: not in remap");
            dropped += 1;
            continue;
        };

        let (branded, _) = rewrite_element(profile, element, entry.provider_substitution);
        let markup = inner_markup(&branded)?;
        translations.insert(entry.new_id.to_string(), strip_triple_quotes(&markup).to_owned());
    }

    Ok((translations, dropped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::xtb::parse_xtb;
    use crate::rebrand::remap::RemapEntry;
    use pretty_assertions::assert_eq;

    fn acme() -> BrandProfile {
        BrandProfile::new("Acme Browser", "Acme", "acme-browser", "acme")
    }

    fn remap(entries: &[(u64, u64, bool)]) -> IdentifierRemap {
        let mut remap = IdentifierRemap::new();
        for &(old, new, provider) in entries {
            remap.insert(
                MessageId(old),
                RemapEntry {
                    new_id: MessageId(new),
                    provider_substitution: provider,
                },
            );
        }
        remap
    }

    #[test]
    fn test_provider_decision_is_inherited() {
        let bundle = parse_xtb(
            r#"<translationbundle lang="es"><translation id="10">Comentarios a Google</translation></translationbundle>"#,
        )
        .unwrap();

        let (forced, _) = relocate_bundle(&acme(), &bundle, &remap(&[(10, 11, true)])).unwrap();
        assert_eq!(forced["11"], "Comentarios a Acme");

        let (kept, _) = relocate_bundle(&acme(), &bundle, &remap(&[(10, 11, false)])).unwrap();
        assert_eq!(kept["11"], "Comentarios a Google");
    }

    #[test]
    fn test_unknown_ids_are_dropped() {
        let bundle = parse_xtb(
            r#"<translationbundle lang="es">
<translation id="1">uno</translation>
<translation id="2">dos</translation>
<translation id="not-a-number">tres</translation>
</translationbundle>"#,
        )
        .unwrap();

        let (translations, dropped) =
            relocate_bundle(&acme(), &bundle, &remap(&[(2, 20, false)])).unwrap();

        assert_eq!(dropped, 2);
        assert_eq!(translations.len(), 1);
        assert_eq!(translations["20"], "dos");
    }

    #[test]
    fn test_output_is_sorted_by_new_id_text() {
        let bundle = parse_xtb(
            r#"<translationbundle lang="fr"><translation id="1">a</translation><translation id="2">b</translation><translation id="3">c</translation></translationbundle>"#,
        )
        .unwrap();

        let (translations, _) = relocate_bundle(
            &acme(),
            &bundle,
            &remap(&[(1, 900, false), (2, 1000, false), (3, 70, false)]),
        )
        .unwrap();

        let order: Vec<_> = translations.iter().map(|(id, t)| (id.as_str(), t.as_str())).collect();
        assert_eq!(order, vec![("1000", "b"), ("70", "c"), ("900", "a")]);
    }

    #[test]
    fn test_non_canonical_ids_are_dropped() {
        let bundle = parse_xtb(
            r#"<translationbundle lang="es"><translation id="05">a</translation><translation id="+5">b</translation><translation id="5">c</translation></translationbundle>"#,
        )
        .unwrap();

        let (translations, dropped) =
            relocate_bundle(&acme(), &bundle, &remap(&[(5, 50, false)])).unwrap();

        assert_eq!(dropped, 2);
        assert_eq!(translations["50"], "c");
    }

    #[test]
    fn test_markup_is_kept_and_branded() {
        let bundle = parse_xtb(
            r#"<translationbundle lang="de"><translation id="7">'''  Chromium öffnen <ph name="URL"/> in Chromium  '''</translation></translationbundle>"#,
        )
        .unwrap();

        let (translations, _) = relocate_bundle(&acme(), &bundle, &remap(&[(7, 8, false)])).unwrap();
        assert_eq!(
            translations["8"],
            r#"Acme Browser öffnen <ph name="URL" /> in Acme Browser"#
        );
    }

    #[test]
    fn test_output_language_falls_back_to_declared() {
        let key = LocaleKey {
            declared_language: "he".to_string(),
            bundle_language: Some("iw".to_string()),
        };
        assert_eq!(key.output_language(), "iw");

        let key = LocaleKey {
            bundle_language: None,
            ..key
        };
        assert_eq!(key.output_language(), "he");
    }
}
