//! Structural validators for translated survey fragments.
//!
//! Every translation ends here: a transformed card or question is checked
//! against the rules registered for its variant before it is handed back.
//! Validation is a pure pass over an already-built value — it never
//! mutates, coerces, or strips anything. All violations found in one call
//! are accumulated into a single [`SchemaError`].

use crate::survey::{Question, QuestionType, TextValue, ThankYouCard, WelcomeCard};
use crate::survey::DEFAULT_LANGUAGE_CODE;
use std::fmt;
use thiserror::Error;
use tracing::warn;

/// A single field-level schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Path of the offending field, in wire-format naming (e.g.
    /// `choices[2].label`).
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A transformed document fragment was rejected by its schema.
///
/// Carries every field-level violation found in the fragment. The core
/// never recovers from this error; it propagates to the caller of the
/// translators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("schema validation failed for {scope}: {}", format_violations(.violations))]
pub struct SchemaError {
    /// What was being validated (e.g. `question 'q1' (openText)`).
    pub scope: String,
    pub violations: Vec<FieldViolation>,
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Violation accumulator for one validator call.
struct Checker {
    scope: String,
    violations: Vec<FieldViolation>,
}

impl Checker {
    fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            violations: Vec::new(),
        }
    }

    fn violation(&mut self, field: &str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// A localizable field, when present, must be a localized string
    /// carrying the `"default"` anchor entry.
    fn check_localized(&mut self, field: &str, value: Option<&TextValue>) {
        match value {
            None => {}
            Some(TextValue::Plain(_)) => {
                self.violation(field, "expected a localized string, found a plain string");
            }
            Some(TextValue::Localized(localized)) => {
                if !localized.contains_code(DEFAULT_LANGUAGE_CODE) {
                    self.violation(field, "localized string is missing the \"default\" entry");
                }
            }
        }
    }

    /// Like `check_localized`, but the field must also be present.
    fn require_localized(&mut self, field: &str, value: Option<&TextValue>) {
        if value.is_none() {
            self.violation(field, "required field is missing");
            return;
        }
        self.check_localized(field, value);
    }

    fn finish(self) -> Result<(), SchemaError> {
        if self.violations.is_empty() {
            return Ok(());
        }
        warn!(
            scope = %self.scope,
            violations = self.violations.len(),
            "document rejected by schema validation"
        );
        Err(SchemaError {
            scope: self.scope,
            violations: self.violations,
        })
    }
}

/// Validate a translated question against the rules for its type.
///
/// Types without dedicated rules (`fileUpload`, `pictureSelection`, `cal`,
/// unrecognized tags) are checked against the generic question rules only.
pub fn validate_question(question: &Question) -> Result<(), SchemaError> {
    let mut checker = Checker::new(format!(
        "question '{}' ({})",
        question.id, question.kind
    ));

    if question.id.trim().is_empty() {
        checker.violation("id", "must not be empty");
    }

    // Generic rules shared by every question type.
    checker.require_localized("headline", question.headline.as_ref());
    checker.check_localized("subheader", question.subheader.as_ref());
    checker.check_localized("buttonLabel", question.button_label.as_ref());
    checker.check_localized("backButtonLabel", question.back_button_label.as_ref());

    match &question.kind {
        QuestionType::OpenText => {
            checker.check_localized("placeholder", question.placeholder.as_ref());
        }
        QuestionType::MultipleChoiceSingle | QuestionType::MultipleChoiceMulti => {
            match question.choices.as_deref() {
                None | Some([]) => {
                    checker.violation("choices", "at least one choice is required");
                }
                Some(choices) => {
                    for (index, choice) in choices.iter().enumerate() {
                        if choice.id.trim().is_empty() {
                            checker.violation(
                                &format!("choices[{index}].id"),
                                "must not be empty",
                            );
                        }
                        checker.require_localized(
                            &format!("choices[{index}].label"),
                            choice.label.as_ref(),
                        );
                    }
                }
            }
            checker.check_localized(
                "otherOptionPlaceholder",
                question.other_option_placeholder.as_ref(),
            );
        }
        QuestionType::Cta => {
            checker.check_localized("dismissButtonLabel", question.dismiss_button_label.as_ref());
            checker.check_localized("html", question.html.as_ref());
        }
        QuestionType::Consent => {
            checker.check_localized("html", question.html.as_ref());
            checker.require_localized("label", question.label.as_ref());
        }
        QuestionType::Nps | QuestionType::Rating => {
            checker.check_localized("lowerLabel", question.lower_label.as_ref());
            checker.check_localized("upperLabel", question.upper_label.as_ref());
        }
        QuestionType::FileUpload
        | QuestionType::PictureSelection
        | QuestionType::Cal
        | QuestionType::Other(_) => {}
    }

    checker.finish()
}

/// Validate a translated welcome card.
pub fn validate_welcome_card(card: &WelcomeCard) -> Result<(), SchemaError> {
    let mut checker = Checker::new("welcome card");
    checker.check_localized("headline", card.headline.as_ref());
    checker.check_localized("html", card.html.as_ref());
    checker.check_localized("buttonLabel", card.button_label.as_ref());
    checker.finish()
}

/// Validate a translated thank-you card.
pub fn validate_thank_you_card(card: &ThankYouCard) -> Result<(), SchemaError> {
    let mut checker = Checker::new("thank-you card");
    checker.check_localized("headline", card.headline.as_ref());
    checker.check_localized("subheader", card.subheader.as_ref());
    checker.check_localized("buttonLabel", card.button_label.as_ref());
    checker.finish()
}
