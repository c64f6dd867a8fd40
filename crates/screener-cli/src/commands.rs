//! Subcommand implementations.

use anyhow::{Context, Result};
use screener_core::messages::exclusion_label;
use screener_core::wizard::{missing_for_step, steps};
use screener_core::{Evaluator, Locale, RawAnswers, ScreeningReport, EXCLUSION_CRITERIA};
use tracing::{debug, info};

use crate::cli::{CheckArgs, CriteriaArgs, EvaluateArgs, OutputFormatArg};

/// Exit status when `--fail-on-ineligible` is set and the verdict is ineligible.
pub const EXIT_INELIGIBLE: i32 = 2;

pub fn run_evaluate(args: &EvaluateArgs) -> Result<i32> {
    let locale = Locale::from(args.locale);
    debug!(path = %args.file.display(), "Loading answers");

    let answers = RawAnswers::from_path(&args.file)
        .with_context(|| format!("failed to load answers from {}", args.file.display()))?;
    let record = answers
        .into_record()
        .with_context(|| format!("answers in {} are incomplete", args.file.display()))?;

    let result = Evaluator::with_locale(locale)
        .evaluate(&record)
        .context("evaluation failed")?;
    let report = ScreeningReport::new(result, locale);

    info!(
        verdict = ?report.summary.verdict,
        passed = report.summary.passed,
        warnings = report.summary.warnings,
        issues = report.summary.issues,
        "Screening complete"
    );

    match args.format {
        OutputFormatArg::Text => print!("{}", report.render_text()),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
            println!("{}", json);
        }
    }

    if args.fail_on_ineligible && report.summary.verdict.is_ineligible() {
        return Ok(EXIT_INELIGIBLE);
    }
    Ok(0)
}

pub fn run_check(args: &CheckArgs) -> Result<i32> {
    let locale = Locale::from(args.locale);
    let answers = RawAnswers::from_path(&args.file)
        .with_context(|| format!("failed to load answers from {}", args.file.display()))?;

    let mut incomplete = false;
    for step in steps() {
        let missing = missing_for_step(step.number, &answers);
        if missing.is_empty() {
            println!("[{}] {}: complete", step.number, step.label(locale));
        } else {
            incomplete = true;
            println!(
                "[{}] {}: missing {}",
                step.number,
                step.label(locale),
                missing.join(", ")
            );
        }
    }

    Ok(if incomplete { 1 } else { 0 })
}

pub fn run_criteria(args: &CriteriaArgs) -> Result<i32> {
    let locale = Locale::from(args.locale);
    for (index, criterion) in EXCLUSION_CRITERIA.iter().enumerate() {
        println!(
            "{:>2}. {:<12} {}",
            index + 1,
            criterion.id,
            exclusion_label(criterion, locale)
        );
    }
    Ok(0)
}
