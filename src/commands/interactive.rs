//! Prompt-driven front end, one specimen per run.
//!
//! Mirrors a form: each trait is asked for in turn with its choices listed
//! as `code - label`, then the classifier runs once.

use anyhow::{bail, Result};
use std::io::{BufRead, Write};

use crate::classifier::{Specimen, Verdict};
use crate::cli::RenderSettings;
use crate::commands::diagnose::handle_diagnose;
use crate::handler::DiagnosisRequest;
use crate::labels::{choices, Locale, Phrase, TraitLabel};
use crate::traits::{parse_trait, GillColor, GillSize, Odor, StalkRoot, TraitValue};

pub fn handle_interactive(settings: &RenderSettings) -> Result<Verdict> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut prompts = std::io::stderr();
    let specimen = prompt_specimen(&mut input, &mut prompts, settings.options.locale)?;
    handle_diagnose(&DiagnosisRequest::new(specimen), settings)
}

/// Ask for all four traits, re-asking on invalid input.
pub fn prompt_specimen<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    locale: Locale,
) -> Result<Specimen> {
    writeln!(out, "{}", Phrase::Title.text(locale))?;
    writeln!(out)?;
    Ok(Specimen::new(
        prompt_for::<Odor, _, _>(input, out, locale, 1)?,
        prompt_for::<GillSize, _, _>(input, out, locale, 2)?,
        prompt_for::<GillColor, _, _>(input, out, locale, 3)?,
        prompt_for::<StalkRoot, _, _>(input, out, locale, 4)?,
    ))
}

fn prompt_for<T, R, W>(input: &mut R, out: &mut W, locale: Locale, step: usize) -> Result<T>
where
    T: TraitValue + TraitLabel,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}. {}", step, T::KIND.label(locale))?;
    for choice in choices::<T>(locale) {
        writeln!(out, "   {}", choice.display())?;
    }

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("Input ended before a {} was chosen", T::KIND);
        }

        match parse_trait::<T>(line.trim()) {
            Ok(value) => {
                writeln!(out)?;
                return Ok(value);
            }
            Err(e) => writeln!(out, "   {}", e)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(answers: &str) -> (Result<Specimen>, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = prompt_specimen(&mut input, &mut out, Locale::En);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn reads_one_answer_per_trait() {
        let (specimen, transcript) = run("n\nbroad\nk\n?\n");
        assert_eq!(
            specimen.unwrap(),
            Specimen::new(Odor::None, GillSize::Broad, GillColor::Black, StalkRoot::Missing)
        );
        assert!(transcript.contains("1. Odor"));
        assert!(transcript.contains("   s - Spicy"));
        assert!(transcript.contains("4. Stalk Root"));
    }

    #[test]
    fn reprompts_on_invalid_answer() {
        let (specimen, transcript) = run("q\nf\nb\nk\nb\n");
        assert_eq!(specimen.unwrap().odor, Odor::Foul);
        assert!(transcript.contains("unknown odor 'q'"), "{transcript}");
    }

    #[test]
    fn end_of_input_is_an_error() {
        let (specimen, _) = run("a\nb\n");
        let err = specimen.unwrap_err();
        assert!(err.to_string().contains("gill color"), "{err}");
    }

    #[test]
    fn indonesian_prompts_use_bilingual_labels() {
        let mut input = Cursor::new(b"a\nb\nk\nb\n".to_vec());
        let mut out = Vec::new();
        prompt_specimen(&mut input, &mut out, Locale::Id).unwrap();
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("1. Bau Jamur (Odor)"));
        assert!(transcript.contains("? - Missing (Tidak Ada)"));
    }
}
