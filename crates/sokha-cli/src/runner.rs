use std::io::{self, BufRead, Write};

use eyre::Result;

use sokha_core::{Locale, QuestionnaireKind, SessionIdentity};
use sokha_flow::backend::Backend;
use sokha_flow::context::AppContext;
use sokha_flow::rules::FieldEffects;
use sokha_flow::session::{SessionFlow, StepOutcome};
use sokha_i18n::Catalog;
use sokha_schema::fields::{FieldKind, FieldSpec};

/// Walk one respondent through the questionnaire, section by section,
/// until the server redirects to the thank page.
pub fn run(
    backend: &dyn Backend,
    kind: QuestionnaireKind,
    token: &str,
    locale: Locale,
) -> Result<()> {
    AppContext::init(locale, false);
    let catalog = Catalog::embedded();
    let mut flow = SessionFlow::new(kind);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let start = SessionIdentity::entry(kind, token, locale);
    let mut outcome = flow.navigate(backend, start)?;

    loop {
        match outcome {
            StepOutcome::Section => {
                let descriptor = match flow.active() {
                    Some(active) => active.descriptor.clone(),
                    None => eyre::bail!("navigation reported a section but none is active"),
                };

                println!();
                for field in &descriptor.fields {
                    prompt_field(&mut flow, &catalog, kind, locale, field, &mut input)?;
                }

                // Submission errors are inline and the answers are kept, so
                // the respondent just retries.
                let redirect = loop {
                    match flow.submit_active(backend) {
                        Ok(route) => break route,
                        Err(err) => {
                            println!("{err}");
                            read_line(&mut input, "press enter to retry ")?;
                        }
                    }
                };
                outcome = flow.navigate(backend, redirect.identity())?;
            }
            StepOutcome::SiteSelection(_) => {
                println!("This device has no site token. Run with --token from the site's registration sheet.");
                return Ok(());
            }
            StepOutcome::Thank(identity) => {
                println!();
                println!("{}", catalog.resolve(identity.locale, kind, "thank"));
                return Ok(());
            }
            StepOutcome::NotFound(_) => {
                println!("This page is not available. Please ask a staff member for help.");
                return Ok(());
            }
            StepOutcome::Superseded => return Ok(()),
        }
    }
}

fn prompt_field(
    flow: &mut SessionFlow,
    catalog: &Catalog,
    kind: QuestionnaireKind,
    locale: Locale,
    field: &FieldSpec,
    input: &mut impl BufRead,
) -> Result<()> {
    if field.kind == FieldKind::Hidden {
        return Ok(());
    }

    let effects: FieldEffects = flow
        .active()
        .and_then(|a| a.effects.get(field.name.as_str()).copied())
        .unwrap_or_default();
    if effects.disabled {
        return Ok(());
    }

    println!("{}", catalog.resolve(locale, kind, &field.name));

    match field.kind {
        FieldKind::Radio | FieldKind::Text => {
            for option in &field.options {
                println!(
                    "  [{}] {}",
                    option.value,
                    catalog.resolve(locale, kind, &option.translation_key)
                );
            }
            loop {
                let answer = read_line(input, "> ")?;
                if answer.is_empty() {
                    if !effects.required {
                        break;
                    }
                    println!("an answer is required");
                    continue;
                }
                if field.kind == FieldKind::Radio
                    && !field.options.iter().any(|o| o.value == answer)
                {
                    println!("please answer with one of the listed values");
                    continue;
                }
                flow.set_answer(&field.name, answer.as_str())?;
                break;
            }
        }
        FieldKind::CheckboxGroup => {
            for option in &field.options {
                println!(
                    "  [{}] {}",
                    option.value,
                    catalog.resolve(locale, kind, &option.translation_key)
                );
            }
            loop {
                let answer = read_line(input, "choose one or more, separated by spaces > ")?;
                let picks: Vec<&str> = answer.split_whitespace().collect();
                if picks.is_empty() && field.at_least_one {
                    println!("at least one answer is needed");
                    continue;
                }
                if !picks
                    .iter()
                    .all(|p| field.options.iter().any(|o| o.value == *p))
                {
                    println!("please answer with the listed values");
                    continue;
                }
                for option in &field.options {
                    let checked = picks.contains(&option.value.as_str());
                    flow.set_checked(&field.name, &option.value, checked)?;
                }
                break;
            }
        }
        FieldKind::Hidden => {}
    }
    Ok(())
}

fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
