//! Survey document model.
//!
//! Serde types for the JSON survey documents handed to the translation
//! core by the service layer. Field names follow the wire format
//! (camelCase); unknown fields are preserved through flattened maps so a
//! document survives a translate round trip without losing data the core
//! does not interpret.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Reserved language-code key anchoring the legacy/default value of a
/// localized string. Not a real language code.
pub const DEFAULT_LANGUAGE_CODE: &str = "default";

/// A mapping from language code to translated text.
///
/// The `"default"` key holds the anchor value: either the legacy
/// single-string text of a pre-multi-language document, or the text of the
/// survey's default language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedString {
    entries: BTreeMap<String, String>,
}

impl LocalizedString {
    /// Create an empty localized string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text for a language code, if present.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Insert or replace the text for a language code.
    pub fn insert(&mut self, code: String, text: String) {
        self.entries.insert(code, text);
    }

    /// Check whether a language code is present.
    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Keep only the entries whose code satisfies the predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.entries.retain(|code, _| keep(code));
    }

    /// Iterate over the language codes present.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(code, text)` entries.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Number of language entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no language entries are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for LocalizedString {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A localizable text value as it appears on the wire.
///
/// Legacy documents carry plain strings; multi-language documents carry
/// code-keyed maps. The variant is decided at deserialization time, so the
/// rest of the pipeline never has to guess at a value's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    /// Localized map keyed by language code.
    Localized(LocalizedString),
    /// Legacy single-string value, implicitly the default-language text.
    Plain(String),
}

impl TextValue {
    /// The localized map, if this value is localized.
    pub fn as_localized(&self) -> Option<&LocalizedString> {
        match self {
            TextValue::Localized(localized) => Some(localized),
            TextValue::Plain(_) => None,
        }
    }

    /// Whether this value is still a legacy plain string.
    pub fn is_plain(&self) -> bool {
        matches!(self, TextValue::Plain(_))
    }
}

impl From<&str> for TextValue {
    fn from(text: &str) -> Self {
        TextValue::Plain(text.to_string())
    }
}

impl From<LocalizedString> for TextValue {
    fn from(localized: LocalizedString) -> Self {
        TextValue::Localized(localized)
    }
}

/// Question variant tag.
///
/// Closed enumeration of the known question types; tags this core does not
/// recognize are preserved verbatim in `Other` and validated against the
/// generic question rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    OpenText,
    MultipleChoiceSingle,
    MultipleChoiceMulti,
    Cta,
    Consent,
    Nps,
    Rating,
    FileUpload,
    PictureSelection,
    Cal,
    /// Unrecognized question type, kept as-is.
    Other(String),
}

impl QuestionType {
    /// The wire tag for this question type.
    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::OpenText => "openText",
            QuestionType::MultipleChoiceSingle => "multipleChoiceSingle",
            QuestionType::MultipleChoiceMulti => "multipleChoiceMulti",
            QuestionType::Cta => "cta",
            QuestionType::Consent => "consent",
            QuestionType::Nps => "nps",
            QuestionType::Rating => "rating",
            QuestionType::FileUpload => "fileUpload",
            QuestionType::PictureSelection => "pictureSelection",
            QuestionType::Cal => "cal",
            QuestionType::Other(tag) => tag,
        }
    }
}

impl From<String> for QuestionType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "openText" => QuestionType::OpenText,
            "multipleChoiceSingle" => QuestionType::MultipleChoiceSingle,
            "multipleChoiceMulti" => QuestionType::MultipleChoiceMulti,
            "cta" => QuestionType::Cta,
            "consent" => QuestionType::Consent,
            "nps" => QuestionType::Nps,
            "rating" => QuestionType::Rating,
            "fileUpload" => QuestionType::FileUpload,
            "pictureSelection" => QuestionType::PictureSelection,
            "cal" => QuestionType::Cal,
            _ => QuestionType::Other(tag),
        }
    }
}

impl From<QuestionType> for String {
    fn from(kind: QuestionType) -> Self {
        match kind {
            QuestionType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An answer option of a multiple-choice-family question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<TextValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The card shown before the first question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<TextValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<TextValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label: Option<TextValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The card shown after the last question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThankYouCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<TextValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheader: Option<TextValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label: Option<TextValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A survey question.
///
/// All question variants share one struct; the `type` tag decides which of
/// the optional type-specific fields are meaningful. Non-localizable
/// variant fields (`required`, `range`, logic, and so on) ride along in
/// `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,

    // Fields common to every question type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<TextValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheader: Option<TextValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_label: Option<TextValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_button_label: Option<TextValue>,

    // openText
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextValue>,

    // multipleChoiceSingle / multipleChoiceMulti
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_option_placeholder: Option<TextValue>,

    // cta
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dismiss_button_label: Option<TextValue>,

    // cta / consent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<TextValue>,

    // consent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<TextValue>,

    // nps / rating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_label: Option<TextValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_label: Option<TextValue>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A language known to the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// A language's enablement state within one survey.
///
/// Exactly one entry per survey may be marked `default`; that entry's
/// localized-string key is the `"default"` sentinel, not its actual code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyLanguage {
    pub language: Language,
    pub enabled: bool,
    pub default: bool,
}

/// The slice of a survey document the translation core operates on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub questions: Vec<Question>,
    pub welcome_card: WelcomeCard,
    pub thank_you_card: ThankYouCard,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==================== TextValue Tests ====================

    #[test]
    fn test_text_value_deserializes_plain_string() {
        let value: TextValue = serde_json::from_value(json!("Hello")).unwrap();
        assert_eq!(value, TextValue::Plain("Hello".to_string()));
        assert!(value.is_plain());
    }

    #[test]
    fn test_text_value_deserializes_localized_map() {
        let value: TextValue =
            serde_json::from_value(json!({"default": "Hello", "de": "Hallo"})).unwrap();
        let localized = value.as_localized().expect("should be localized");
        assert_eq!(localized.get("default"), Some("Hello"));
        assert_eq!(localized.get("de"), Some("Hallo"));
    }

    #[test]
    fn test_text_value_serializes_back_to_same_shape() {
        let plain = TextValue::Plain("Hi".to_string());
        assert_eq!(serde_json::to_value(&plain).unwrap(), json!("Hi"));

        let localized: TextValue = serde_json::from_value(json!({"default": "Hi"})).unwrap();
        assert_eq!(
            serde_json::to_value(&localized).unwrap(),
            json!({"default": "Hi"})
        );
    }

    // ==================== QuestionType Tests ====================

    #[test]
    fn test_question_type_known_tags_round_trip() {
        for tag in [
            "openText",
            "multipleChoiceSingle",
            "multipleChoiceMulti",
            "cta",
            "consent",
            "nps",
            "rating",
            "fileUpload",
            "pictureSelection",
            "cal",
        ] {
            let kind = QuestionType::from(tag.to_string());
            assert!(!matches!(kind, QuestionType::Other(_)), "tag {tag}");
            assert_eq!(kind.as_str(), tag);
            assert_eq!(String::from(kind), tag);
        }
    }

    #[test]
    fn test_question_type_unknown_tag_is_preserved() {
        let kind = QuestionType::from("matrix".to_string());
        assert_eq!(kind, QuestionType::Other("matrix".to_string()));
        assert_eq!(kind.as_str(), "matrix");
        assert_eq!(String::from(kind), "matrix");
    }

    #[test]
    fn test_question_type_display() {
        assert_eq!(QuestionType::OpenText.to_string(), "openText");
        assert_eq!(
            QuestionType::Other("ranking".to_string()).to_string(),
            "ranking"
        );
    }

    // ==================== Document Round-Trip Tests ====================

    #[test]
    fn test_question_round_trip_preserves_unknown_fields() {
        let doc = json!({
            "id": "q1",
            "type": "rating",
            "headline": "How did we do?",
            "lowerLabel": "Bad",
            "upperLabel": "Great",
            "required": true,
            "range": 5,
            "scale": "star"
        });

        let question: Question = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(question.kind, QuestionType::Rating);
        assert_eq!(question.extra.get("range"), Some(&json!(5)));
        assert_eq!(question.extra.get("scale"), Some(&json!("star")));

        let back = serde_json::to_value(&question).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_survey_round_trip_preserves_unknown_fields() {
        let doc = json!({
            "name": "Churn survey",
            "status": "inProgress",
            "questions": [{"id": "q1", "type": "openText", "headline": "Why?"}],
            "welcomeCard": {"enabled": true, "headline": "Welcome"},
            "thankYouCard": {"enabled": false}
        });

        let survey: Survey = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(survey.extra.get("name"), Some(&json!("Churn survey")));
        assert_eq!(
            survey.welcome_card.extra.get("enabled"),
            Some(&json!(true))
        );

        let back = serde_json::to_value(&survey).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_survey_language_deserializes() {
        let doc = json!({
            "language": {"id": "lang-1", "code": "en"},
            "enabled": true,
            "default": false
        });
        let survey_language: SurveyLanguage = serde_json::from_value(doc).unwrap();
        assert_eq!(survey_language.language.code, "en");
        assert!(survey_language.enabled);
        assert!(!survey_language.default);
    }

    // ==================== LocalizedString Tests ====================

    #[test]
    fn test_localized_string_basic_operations() {
        let mut localized = LocalizedString::new();
        assert!(localized.is_empty());

        localized.insert("default".to_string(), "Hi".to_string());
        localized.insert("de".to_string(), "Hallo".to_string());
        assert_eq!(localized.len(), 2);
        assert!(localized.contains_code("de"));
        assert_eq!(localized.get("de"), Some("Hallo"));
        assert_eq!(localized.get("fr"), None);

        localized.retain(|code| code == "default");
        assert_eq!(localized.len(), 1);
        assert!(!localized.contains_code("de"));
    }

    #[test]
    fn test_localized_string_from_iterator() {
        let localized: LocalizedString = [
            ("default".to_string(), "Hi".to_string()),
            ("en".to_string(), "Hi".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(localized.codes().collect::<Vec<_>>(), vec!["default", "en"]);
    }
}
