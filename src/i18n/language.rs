//! Language-code resolution helpers.
//!
//! Maps between a survey's language list and the codes used as keys in
//! localized strings. The survey's default language is always addressed by
//! the `"default"` sentinel, never by its actual code.

use crate::survey::{Language, SurveyLanguage, DEFAULT_LANGUAGE_CODE};
use regex::Regex;
use std::sync::OnceLock;

static LANGUAGE_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Project a survey language list to the localized-string keys it implies.
///
/// The default entry yields `"default"`, every other entry its language
/// code. Order is preserved; an empty list yields an empty result.
pub fn extract_language_codes(survey_languages: &[SurveyLanguage]) -> Vec<String> {
    survey_languages
        .iter()
        .map(|survey_language| {
            if survey_language.default {
                DEFAULT_LANGUAGE_CODE.to_string()
            } else {
                survey_language.language.code.clone()
            }
        })
        .collect()
}

/// Filter a survey language list down to the enabled entries, in order.
pub fn get_enabled_languages(survey_languages: &[SurveyLanguage]) -> Vec<SurveyLanguage> {
    survey_languages
        .iter()
        .filter(|survey_language| survey_language.enabled)
        .cloned()
        .collect()
}

/// Project a list of languages to their codes, 1:1, order preserved.
pub fn extract_language_ids(languages: &[Language]) -> Vec<String> {
    languages
        .iter()
        .map(|language| language.code.clone())
        .collect()
}

/// Resolve a caller-facing language selection to the localized-string key.
///
/// Returns `"default"` when the survey has no language list or no language
/// was selected. Otherwise looks the selection up in the list: the default
/// entry resolves to `"default"`, a non-default entry to its code, and an
/// unknown selection falls back to `"default"`.
///
/// This is the single resolution point between user-facing language
/// selections and internal localized-string keys.
pub fn get_language_code(
    survey_languages: &[SurveyLanguage],
    language_code: Option<&str>,
) -> String {
    let Some(code) = language_code else {
        return DEFAULT_LANGUAGE_CODE.to_string();
    };
    if survey_languages.is_empty() {
        return DEFAULT_LANGUAGE_CODE.to_string();
    }

    match survey_languages
        .iter()
        .find(|survey_language| survey_language.language.code == code)
    {
        Some(survey_language) if survey_language.default => DEFAULT_LANGUAGE_CODE.to_string(),
        Some(survey_language) => survey_language.language.code.clone(),
        None => DEFAULT_LANGUAGE_CODE.to_string(),
    }
}

/// Check whether a string looks like a usable language code.
///
/// Accepts ISO 639-1-style codes with an optional region suffix ("en",
/// "pt-BR") and the `"default"` sentinel. Meant for validating incoming
/// selections before they reach [`get_language_code`].
pub fn is_valid_language_code(code: &str) -> bool {
    if code == DEFAULT_LANGUAGE_CODE {
        return true;
    }
    let regex = LANGUAGE_CODE_REGEX
        .get_or_init(|| Regex::new(r"^[a-z]{2,3}(-[A-Z]{2})?$").unwrap());
    regex.is_match(code)
}
