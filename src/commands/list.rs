use anyhow::Result;
use std::io::Write;

use crate::classifier::{KnowledgeBase, Verdict, UNKNOWN_REASON};
use crate::labels::{choices_for, Locale, TraitLabel};
use crate::traits::TraitKind;

/// Print every trait kind with its accepted codes and labels.
pub fn list_traits<W: Write>(out: &mut W, locale: Locale) -> Result<()> {
    for kind in TraitKind::ALL {
        writeln!(out, "{}:", kind.label(locale))?;
        for choice in choices_for(kind, locale) {
            writeln!(out, "  {}", choice.display())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print the standard knowledge base, first rule first.
pub fn list_rules<W: Write>(out: &mut W) -> Result<()> {
    let kb = KnowledgeBase::standard();
    for (i, rule) in kb.rules().iter().enumerate() {
        writeln!(out, "{}. {} -> {}", i + 1, rule.id, rule.verdict)?;
        writeln!(out, "   when:   {}", rule.summary)?;
        writeln!(out, "   reason: {}", rule.reason.template())?;
    }
    writeln!(out, "*. (no match) -> {}", Verdict::Unknown)?;
    writeln!(out, "   reason: {}", UNKNOWN_REASON)?;
    Ok(())
}
