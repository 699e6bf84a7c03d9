use crate::classifier::Verdict;
use crate::formatting::{formatter_for, verdict_symbols, FormattingConfig, OutputFormatter};
use crate::handler::DiagnosisResponse;
use crate::labels::{Locale, Phrase, TraitLabel};
use crate::traits::{TraitKind, TraitValue};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// Presentation options shared by every writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub locale: Locale,
    pub show_disclaimer: bool,
    /// Also print which rule decided the verdict.
    pub explain: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            show_disclaimer: true,
            explain: false,
        }
    }
}

pub trait OutputWriter {
    fn write_response(&mut self, response: &DiagnosisResponse) -> anyhow::Result<()>;
}

/// `(kind, code, label)` rows for the four traits of a response.
fn trait_rows(response: &DiagnosisResponse, locale: Locale) -> [(TraitKind, char, &'static str); 4] {
    let s = &response.specimen;
    [
        (TraitKind::Odor, s.odor.code(), s.odor.label(locale)),
        (TraitKind::GillSize, s.gill_size.code(), s.gill_size.label(locale)),
        (TraitKind::GillColor, s.gill_color.code(), s.gill_color.label(locale)),
        (TraitKind::StalkRoot, s.stalk_root.code(), s.stalk_root.label(locale)),
    ]
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    response: &'a DiagnosisResponse,
    verdict_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    disclaimer: Option<&'static str>,
}

pub struct JsonWriter<W: Write> {
    writer: W,
    options: ReportOptions,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W, options: ReportOptions) -> Self {
        Self { writer, options }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_response(&mut self, response: &DiagnosisResponse) -> anyhow::Result<()> {
        let report = JsonReport {
            response,
            verdict_label: response.result.verdict().label(self.options.locale),
            disclaimer: self
                .options
                .show_disclaimer
                .then(|| Phrase::Disclaimer.text(self.options.locale)),
        };
        let json = serde_json::to_string_pretty(&report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    options: ReportOptions,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, options: ReportOptions) -> Self {
        Self { writer, options }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_response(&mut self, response: &DiagnosisResponse) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_traits(response)?;
        self.write_result(response)?;
        self.write_disclaimer()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", Phrase::Title.text(self.options.locale))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_traits(&mut self, response: &DiagnosisResponse) -> anyhow::Result<()> {
        let locale = self.options.locale;
        writeln!(self.writer, "| Trait | Code | Value |")?;
        writeln!(self.writer, "|-------|------|-------|")?;
        for (kind, code, label) in trait_rows(response, locale) {
            writeln!(self.writer, "| {} | `{}` | {} |", kind.label(locale), code, label)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_result(&mut self, response: &DiagnosisResponse) -> anyhow::Result<()> {
        let locale = self.options.locale;
        let verdict = response.result.verdict();
        writeln!(self.writer, "## {}", Phrase::ResultHeading.text(locale))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{}:** {} {}",
            Phrase::Status.text(locale),
            verdict_marker(verdict),
            verdict.label(locale)
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{}:** {}",
            Phrase::Reason.text(locale),
            response.result.reason()
        )?;
        if self.options.explain {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "**{}:** `{}`",
                Phrase::Rule.text(locale),
                response.result.rule().unwrap_or("none")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_disclaimer(&mut self) -> anyhow::Result<()> {
        if self.options.show_disclaimer {
            writeln!(self.writer, "---")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "_{}_", Phrase::Disclaimer.text(self.options.locale))?;
        }
        Ok(())
    }
}

fn verdict_marker(verdict: Verdict) -> &'static str {
    verdict_symbols(verdict).0
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    options: ReportOptions,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, options: ReportOptions, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            options,
            formatter: formatter_for(formatting),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_response(&mut self, response: &DiagnosisResponse) -> anyhow::Result<()> {
        self.print_traits(response)?;
        self.print_result(response)?;
        self.print_disclaimer()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_traits(&mut self, response: &DiagnosisResponse) -> anyhow::Result<()> {
        let locale = self.options.locale;
        let title = Phrase::Title.text(locale);
        writeln!(self.writer, "{}", self.formatter.header(title))?;
        writeln!(self.writer, "{}", self.formatter.header(&"=".repeat(title.chars().count())))?;
        for (kind, code, label) in trait_rows(response, locale) {
            writeln!(self.writer, "  {:<28} {} - {}", kind.label(locale), code, label)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_result(&mut self, response: &DiagnosisResponse) -> anyhow::Result<()> {
        let locale = self.options.locale;
        let verdict = response.result.verdict();
        let f = &self.formatter;

        writeln!(self.writer, "{}", f.bold(&format!("{}:", Phrase::ResultHeading.text(locale))))?;
        writeln!(
            self.writer,
            "  {} {}: {}",
            f.verdict_symbol(verdict),
            Phrase::Status.text(locale),
            f.verdict(verdict, verdict.label(locale))
        )?;
        writeln!(
            self.writer,
            "  {}: {}",
            Phrase::Reason.text(locale),
            response.result.reason()
        )?;
        if self.options.explain {
            writeln!(
                self.writer,
                "  {}",
                f.dim(&format!(
                    "{}: {}",
                    Phrase::Rule.text(locale),
                    response.result.rule().unwrap_or("none (no rule matched)")
                ))
            )?;
        }
        Ok(())
    }

    fn print_disclaimer(&mut self) -> anyhow::Result<()> {
        if self.options.show_disclaimer {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{}",
                self.formatter.dim(Phrase::Disclaimer.text(self.options.locale))
            )?;
        }
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    destination: Box<dyn Write + 'a>,
    options: ReportOptions,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination, options)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination, options)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination, options, formatting)),
    }
}
