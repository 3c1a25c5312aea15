//! Element and survey translators.
//!
//! Converts legacy single-string survey content into the localized-string
//! representation for a given set of language codes. Translators borrow
//! their input and build a new value field by field; the caller's document
//! is never touched. Every translated card and question is passed through
//! its schema validator before being returned, and the first rejection
//! aborts the whole call.

use crate::i18n::localized::create_i18n_string;
use crate::schema::{self, SchemaError};
use crate::survey::{
    Choice, Question, QuestionType, Survey, TextValue, ThankYouCard, WelcomeCard,
};
use tracing::debug;

fn localize_field(value: &Option<TextValue>, language_codes: &[String]) -> Option<TextValue> {
    value
        .as_ref()
        .map(|text| TextValue::Localized(create_i18n_string(text, language_codes, None)))
}

/// Localize a choice's label when present; a choice without a label passes
/// through unchanged.
pub fn translate_choice(choice: &Choice, language_codes: &[String]) -> Choice {
    Choice {
        id: choice.id.clone(),
        label: localize_field(&choice.label, language_codes),
        extra: choice.extra.clone(),
    }
}

/// Localize a welcome card's text fields and validate the result.
///
/// Fields absent on the input stay absent. A schema rejection propagates
/// to the caller.
pub fn translate_welcome_card(
    card: &WelcomeCard,
    language_codes: &[String],
) -> Result<WelcomeCard, SchemaError> {
    let translated = WelcomeCard {
        headline: localize_field(&card.headline, language_codes),
        html: localize_field(&card.html, language_codes),
        button_label: localize_field(&card.button_label, language_codes),
        extra: card.extra.clone(),
    };
    schema::validate_welcome_card(&translated)?;
    Ok(translated)
}

/// Localize a thank-you card's text fields and validate the result.
pub fn translate_thank_you_card(
    card: &ThankYouCard,
    language_codes: &[String],
) -> Result<ThankYouCard, SchemaError> {
    let translated = ThankYouCard {
        headline: localize_field(&card.headline, language_codes),
        subheader: localize_field(&card.subheader, language_codes),
        button_label: localize_field(&card.button_label, language_codes),
        extra: card.extra.clone(),
    };
    schema::validate_thank_you_card(&translated)?;
    Ok(translated)
}

/// Localize a question and validate it against the rules for its type.
///
/// The four common fields are localized for every type; the match below
/// adds the type-specific fields. A field is translated exactly when it is
/// present on the input document. Types without dedicated rules
/// (`fileUpload`, `pictureSelection`, `cal`, unrecognized tags) carry no
/// extra localizable fields and are checked against the generic rules.
pub fn translate_question(
    question: &Question,
    language_codes: &[String],
) -> Result<Question, SchemaError> {
    let common = Question {
        headline: localize_field(&question.headline, language_codes),
        subheader: localize_field(&question.subheader, language_codes),
        button_label: localize_field(&question.button_label, language_codes),
        back_button_label: localize_field(&question.back_button_label, language_codes),
        ..question.clone()
    };

    let translated = match &question.kind {
        QuestionType::OpenText => Question {
            placeholder: localize_field(&question.placeholder, language_codes),
            ..common
        },
        QuestionType::MultipleChoiceSingle | QuestionType::MultipleChoiceMulti => Question {
            choices: question.choices.as_ref().map(|choices| {
                choices
                    .iter()
                    .map(|choice| translate_choice(choice, language_codes))
                    .collect()
            }),
            other_option_placeholder: localize_field(
                &question.other_option_placeholder,
                language_codes,
            ),
            ..common
        },
        QuestionType::Cta => Question {
            dismiss_button_label: localize_field(&question.dismiss_button_label, language_codes),
            html: localize_field(&question.html, language_codes),
            ..common
        },
        QuestionType::Consent => Question {
            html: localize_field(&question.html, language_codes),
            label: localize_field(&question.label, language_codes),
            ..common
        },
        QuestionType::Nps | QuestionType::Rating => Question {
            lower_label: localize_field(&question.lower_label, language_codes),
            upper_label: localize_field(&question.upper_label, language_codes),
            ..common
        },
        QuestionType::FileUpload
        | QuestionType::PictureSelection
        | QuestionType::Cal
        | QuestionType::Other(_) => common,
    };

    schema::validate_question(&translated)?;
    Ok(translated)
}

/// Localize an entire survey document.
///
/// Questions are translated in order, 1:1, with no filtering; both cards
/// once; the remaining survey fields are copied untouched. Fails fast: the
/// first schema rejection aborts the call and no partial survey is
/// returned.
pub fn translate_survey(
    survey: &Survey,
    language_codes: &[String],
) -> Result<Survey, SchemaError> {
    debug!(
        questions = survey.questions.len(),
        codes = ?language_codes,
        "translating survey"
    );

    let questions = survey
        .questions
        .iter()
        .map(|question| translate_question(question, language_codes))
        .collect::<Result<Vec<_>, _>>()?;
    let welcome_card = translate_welcome_card(&survey.welcome_card, language_codes)?;
    let thank_you_card = translate_thank_you_card(&survey.thank_you_card, language_codes)?;

    Ok(Survey {
        questions,
        welcome_card,
        thank_you_card,
        extra: survey.extra.clone(),
    })
}
