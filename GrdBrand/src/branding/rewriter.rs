//! Branding substitutions on message text

use super::profile::{BrandProfile, PROTECTED_PLACEHOLDERS, PROVIDER_TOKEN, PROVIDER_TRIGGERS};
use crate::formats::grd::{NAME_ATTR, PLACEHOLDER_TAG};
use crate::formats::xml::XmlElement;
use regex::Regex;
use std::sync::LazyLock;

/// One or more `$` followed by digits: a positional placeholder reference.
static PLACEHOLDER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$+(\d+)").expect("valid regex"));

/// Fullwidth dollar sign (U+FF04).
///
/// Parsing decodes `&#36;` to a plain `$`, and GRIT rejects a `$1` outside a
/// `<ph>` tag. Re-encoding the entity is not possible since the serializer
/// would escape its ampersand, so the fullwidth sign stands in.
const FULLWIDTH_MARKER: &str = "\u{FF04}";

/// Apply branding to a single string.
///
/// Returns the rewritten text and whether the provider name was replaced.
/// `force_provider_substitution` replaces the provider name even when the
/// text contains none of the trigger phrases; translations use it to follow
/// the decision made for their source message.
pub fn rewrite(
    profile: &BrandProfile,
    text: Option<&str>,
    force_provider_substitution: bool,
    escape_placeholder_markers: bool,
) -> (Option<String>, bool) {
    let Some(text) = text else {
        return (None, false);
    };

    let mut message = text.to_owned();
    let mut provider_substitution = false;

    for trigger in PROVIDER_TRIGGERS {
        let lowercase = message.trim().to_lowercase();
        if force_provider_substitution || lowercase.contains(trigger) {
            message = message.replace(PROVIDER_TOKEN, profile.company_name());
            provider_substitution = true;
        }
    }

    for rule in profile.brand_rules() {
        for source in &rule.sources {
            message = message.replace(source.as_str(), &rule.replacement);
        }
    }

    for rule in profile.unbrand_rules() {
        message = message.replace(rule.branded.as_str(), &rule.vendor);
    }

    if escape_placeholder_markers {
        message = PLACEHOLDER_MARKER
            .replace_all(&message, format!("{FULLWIDTH_MARKER}${{1}}").as_str())
            .into_owned();
    }

    (Some(message), provider_substitution)
}

/// Whether a `<ph>` is exempt from branding.
#[must_use]
pub fn is_protected_placeholder(placeholder: &XmlElement) -> bool {
    placeholder
        .get(NAME_ATTR)
        .is_some_and(|name| PROTECTED_PLACEHOLDERS.contains(&name))
}

/// Apply branding to a `<message>` or `<translation>` element.
///
/// The element's text and tail are rewritten with marker escaping; the tails
/// of its unprotected `<ph>` children without. Returns the new element and
/// whether any part needed provider substitution.
pub fn rewrite_element(
    profile: &BrandProfile,
    element: &XmlElement,
    force_provider_substitution: bool,
) -> (XmlElement, bool) {
    let mut branded = element.clone();

    let (text, text_provider) =
        rewrite(profile, element.text.as_deref(), force_provider_substitution, true);
    let (tail, tail_provider) =
        rewrite(profile, element.tail.as_deref(), force_provider_substitution, true);
    branded.text = text;
    branded.tail = tail;
    let mut provider_substitution = text_provider || tail_provider;

    for placeholder in &mut branded.children {
        if placeholder.tag != PLACEHOLDER_TAG || is_protected_placeholder(placeholder) {
            continue;
        }
        let (tail, ph_provider) = rewrite(
            profile,
            placeholder.tail.as_deref(),
            force_provider_substitution,
            false,
        );
        placeholder.tail = tail;
        provider_substitution |= ph_provider;
    }

    (branded, provider_substitution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::xml::parse_xml;

    fn acme() -> BrandProfile {
        BrandProfile::new("Acme Browser", "Acme", "acme-browser", "acme")
    }

    fn branded(text: &str) -> (String, bool) {
        let (text, provider) = rewrite(&acme(), Some(text), false, true);
        (text.unwrap(), provider)
    }

    #[test]
    fn test_absent_text() {
        assert_eq!(rewrite(&acme(), None, true, true), (None, false));
    }

    #[test]
    fn test_identity_when_nothing_matches() {
        for text in ["Open a new tab", "", "Google Docs", "  spaced  "] {
            assert_eq!(branded(text), (text.to_string(), false));
        }
    }

    #[test]
    fn test_brand_rules() {
        assert_eq!(branded("Chromium is up to date").0, "Acme Browser is up to date");
        assert_eq!(branded("Google Chrome").0, "Acme Browser");
        assert_eq!(branded("© Google LLC").0, "© Acme");
        assert_eq!(branded("Visit chrome://settings").0, "Visit acme://settings");
        assert_eq!(branded("You and Google").0, "You");
        assert_eq!(branded("Other Google services").0, "Services");
    }

    #[test]
    fn test_provider_substitution() {
        let (text, provider) = branded("Send feedback to Google");
        assert_eq!(text, "Send feedback to Acme");
        assert!(provider);

        let (text, provider) = branded("  Read the GOOGLE PRIVACY POLICY. Google!  ");
        assert_eq!(text, "  Read the GOOGLE PRIVACY POLICY. Acme!  ");
        assert!(provider);
        assert!(!text.contains(PROVIDER_TOKEN));
    }

    #[test]
    fn test_forced_provider_substitution() {
        let (text, provider) = rewrite(&acme(), Some("Comentarios a Google"), true, true);
        assert_eq!(text.as_deref(), Some("Comentarios a Acme"));
        assert!(provider);
    }

    #[test]
    fn test_unbrand_overrides_brand() {
        let profile = BrandProfile::new("Zen", "Zen Corp", "zen", "zen");
        let (text, _) = rewrite(&profile, Some("Zen OS"), false, true);
        assert_eq!(text.as_deref(), Some("Chrome OS"));

        // Brand rules turn these into "Zen ...", unbrand rules restore them
        let (text, _) = rewrite(&profile, Some("Chrome OS, Chrome Web Store, ChromeVox"), false, true);
        assert_eq!(text.as_deref(), Some("Chrome OS, Chrome Web Store, ChromeVox"));
    }

    #[test]
    fn test_rule_order_dependency() {
        // "Chromium" -> "Acme Browser" creates "Acme Browserbook", which the
        // unbrand pass then maps to "Chromebook"
        assert_eq!(branded("Chromiumbook setup").0, "Chromebook setup");
    }

    #[test]
    fn test_placeholder_marker_escaping() {
        assert_eq!(branded("Costs $1 or $$23").0, "Costs \u{FF04}1 or \u{FF04}23");
        assert_eq!(branded("Costs $ 5").0, "Costs $ 5");

        let (text, _) = rewrite(&acme(), Some("Costs $1"), false, false);
        assert_eq!(text.as_deref(), Some("Costs $1"));
    }

    #[test]
    fn test_rewrite_element_skips_protected_placeholders() {
        let element = parse_xml(
            r#"<message>Chrome <ph name="BEGIN_LINK_CHROMIUM">x</ph>Chromium $1<ph name="END_LINK"/> Chrome $2</message>"#,
        )
        .unwrap();

        let (rewritten, provider) = rewrite_element(&acme(), &element, false);

        assert!(!provider);
        assert_eq!(rewritten.text.as_deref(), Some("Acme Browser "));
        assert_eq!(rewritten.children[0].tail.as_deref(), Some("Chromium $1"));
        assert_eq!(rewritten.children[1].tail.as_deref(), Some(" Acme Browser $2"));
        // The input element is left as it was
        assert_eq!(element.text.as_deref(), Some("Chrome "));
    }

    #[test]
    fn test_rewrite_element_provider_from_placeholder_tail() {
        let element =
            parse_xml(r#"<message>Read the <ph name="TOS"/> Google Terms of Service</message>"#).unwrap();
        let (rewritten, provider) = rewrite_element(&acme(), &element, false);
        assert!(provider);
        assert_eq!(rewritten.children[0].tail.as_deref(), Some(" Acme Terms of Service"));
    }
}
