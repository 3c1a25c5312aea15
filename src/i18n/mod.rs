//! Internationalization (i18n) module for survey documents.
//!
//! This module converts survey content between the legacy single-string
//! representation and the localized-string representation keyed by
//! language code, while keeping documents schema-valid. Everything here is
//! pure and synchronous: documents in, documents out, the caller's input
//! is never mutated.
//!
//! # Architecture
//!
//! - `localized`: codec for localized-string values (wrap, inspect, read)
//! - `language`: resolution between survey language lists and the codes
//!   used as localized-string keys
//! - `translate`: per-element and whole-survey translators
//!
//! # Example
//!
//! ```rust,ignore
//! use survey_i18n::i18n::{extract_language_codes, translate_survey};
//!
//! let codes = extract_language_codes(&survey_languages);
//! let translated = translate_survey(&survey, &codes)?;
//! ```

mod language;
mod localized;
mod translate;

pub use language::{
    extract_language_codes, extract_language_ids, get_enabled_languages, get_language_code,
    is_valid_language_code,
};
pub use localized::{
    create_i18n_string, get_localized_value, is_label_valid_for_all_languages,
    is_localized_string,
};
pub use translate::{
    translate_choice, translate_question, translate_survey, translate_thank_you_card,
    translate_welcome_card,
};
