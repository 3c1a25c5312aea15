//! Localized-string codec.
//!
//! Builds, inspects, and reads localized-string values. All functions are
//! total over their documented domain: malformed or partial inputs degrade
//! to empty strings rather than erroring.

use crate::survey::{LocalizedString, TextValue, DEFAULT_LANGUAGE_CODE};
use serde_json::Value;

/// Build a localized string from a text value.
///
/// For a plain string, the text is anchored under `target_code` (the
/// `"default"` sentinel when not given) and every other code in
/// `language_codes` is initialized with an empty string.
///
/// For an already-localized value, the entries are copied, missing codes
/// from `language_codes` are backfilled with empty strings, and stale keys
/// that are neither the target code nor enabled are pruned. Pruning is what
/// keeps documents consistent when a survey's enabled-language set shrinks.
pub fn create_i18n_string(
    text: &TextValue,
    language_codes: &[String],
    target_code: Option<&str>,
) -> LocalizedString {
    let target = target_code.unwrap_or(DEFAULT_LANGUAGE_CODE);

    match text {
        TextValue::Localized(existing) => {
            let mut localized = existing.clone();

            // Backfill codes that are not present yet.
            for code in language_codes {
                if !localized.contains_code(code) {
                    localized.insert(code.clone(), String::new());
                }
            }

            // Prune keys outside the enabled set, keeping the target anchor.
            localized.retain(|code| code == target || language_codes.iter().any(|c| c == code));

            localized
        }
        TextValue::Plain(text) => {
            let mut localized = LocalizedString::new();
            localized.insert(target.to_string(), text.clone());
            for code in language_codes {
                if code != target {
                    localized.insert(code.clone(), String::new());
                }
            }
            localized
        }
    }
}

/// Heuristic discriminator for raw JSON: a value is treated as a localized
/// string iff it is an object containing the `"default"` key.
///
/// This is not a full schema check. An unrelated object that happens to
/// carry a `"default"` key is misclassified, so callers must only apply it
/// to known candidate fields. The typed pipeline uses [`TextValue`]
/// instead, where the shape is decided once at deserialization.
pub fn is_localized_string(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.contains_key(DEFAULT_LANGUAGE_CODE))
}

/// Check that a label carries non-blank text for every given language code.
///
/// Used as a completeness check before publishing a survey; translation
/// itself never calls this.
pub fn is_label_valid_for_all_languages(label: &LocalizedString, language_codes: &[String]) -> bool {
    language_codes
        .iter()
        .all(|code| label.get(code).is_some_and(|text| !text.trim().is_empty()))
}

/// Read the text for a language code out of an optional text value.
///
/// Returns the entry for `language_code` when the value is localized and
/// the entry is present; an empty string in every other case (value absent,
/// value still a plain string, or code missing). Never fails.
pub fn get_localized_value(value: Option<&TextValue>, language_code: &str) -> String {
    match value {
        Some(TextValue::Localized(localized)) => {
            localized.get(language_code).unwrap_or("").to_string()
        }
        _ => String::new(),
    }
}
