//! Preview binary - translates a survey document and prints the result
//!
//! Usage:
//!   cargo run --bin preview -- survey.json en,de      # Translate for en + de
//!   cargo run --bin preview -- survey.json default    # Normalize legacy survey
//!
//! Reads a survey JSON document from the given file, localizes it for the
//! comma-separated language codes, and prints the normalized document as
//! pretty JSON on stdout. Set RUST_LOG for diagnostics.

use anyhow::{bail, Context, Result};
use survey_i18n::i18n::{is_valid_language_code, translate_survey};
use survey_i18n::survey::Survey;
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("survey_i18n=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        bail!("usage: preview <survey.json> <code>[,<code>...]");
    }

    let raw = std::fs::read_to_string(&args[0])
        .with_context(|| format!("Failed to read survey file {}", args[0]))?;
    let survey: Survey =
        serde_json::from_str(&raw).context("Failed to parse survey document")?;

    let language_codes: Vec<String> = args[1]
        .split(',')
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
        .collect();
    for code in &language_codes {
        if !is_valid_language_code(code) {
            bail!("'{}' is not a valid language code", code);
        }
    }

    info!(
        questions = survey.questions.len(),
        codes = ?language_codes,
        "translating survey"
    );

    let translated = translate_survey(&survey, &language_codes)
        .context("Survey was rejected by schema validation")?;

    println!("{}", serde_json::to_string_pretty(&translated)?);
    Ok(())
}
