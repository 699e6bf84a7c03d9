//! Rule-based mushroom classifier.
//!
//! A specimen is classified by walking an ordered list of rules and taking
//! the first one whose condition holds. Rule order is the only tie-break:
//! there is no scoring, and later rules are never consulted once one
//! matches.
//!
//! The standard knowledge base:
//!
//! 1. Almond or Anise odor: safe.
//! 2. Creosote, Fishy, Foul, Musty, Pungent or Spicy odor: poisonous.
//! 3. No odor, then in order: narrow gills, buff gill color, or a missing
//!    stalk root mean poisonous; otherwise safe.
//! 4. Nothing matched: unknown.
//!
//! # Examples
//!
//! ```
//! use shroomcheck::classifier::{diagnose, Verdict};
//! use shroomcheck::traits::{GillColor, GillSize, Odor, StalkRoot};
//!
//! let result = diagnose(Odor::Foul, GillSize::Broad, GillColor::Black, StalkRoot::Bulbous);
//! assert_eq!(result.verdict(), Verdict::Poisonous);
//! assert!(result.reason().contains("Foul"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::traits::{GillColor, GillSize, Odor, StalkRoot, TraitValue};

/// Final outcome of a diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Safe,
    Poisonous,
    /// No rule in the knowledge base matched. A normal result, not a fault.
    Unknown,
}

impl Verdict {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Poisonous => "POISONOUS",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four observed traits of one mushroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Specimen {
    pub odor: Odor,
    pub gill_size: GillSize,
    pub gill_color: GillColor,
    pub stalk_root: StalkRoot,
}

impl Specimen {
    pub fn new(odor: Odor, gill_size: GillSize, gill_color: GillColor, stalk_root: StalkRoot) -> Self {
        Self {
            odor,
            gill_size,
            gill_color,
            stalk_root,
        }
    }

    /// Data set codes in trait order, e.g. `n,b,k,?`.
    pub fn codes(&self) -> String {
        format!(
            "{},{},{},{}",
            self.odor.code(),
            self.gill_size.code(),
            self.gill_color.code(),
            self.stalk_root.code()
        )
    }

    pub fn diagnose(&self) -> DiagnosisResult {
        KnowledgeBase::standard().evaluate(self)
    }
}

impl fmt::Display for Specimen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "odor={} gill_size={} gill_color={} stalk_root={}",
            self.odor, self.gill_size, self.gill_color, self.stalk_root
        )
    }
}

/// Verdict plus the justification for it.
///
/// Created fresh by every evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosisResult {
    verdict: Verdict,
    reason: String,
    /// Identifier of the rule that fired; `None` for the unknown fallback.
    rule: Option<&'static str>,
}

impl DiagnosisResult {
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn rule(&self) -> Option<&'static str> {
        self.rule
    }

    fn unknown() -> Self {
        Self {
            verdict: Verdict::Unknown,
            reason: UNKNOWN_REASON.to_string(),
            rule: None,
        }
    }
}

pub const UNKNOWN_REASON: &str = "This combination of traits is not in the knowledge base.";

/// How a rule phrases its justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasonTemplate {
    Fixed(&'static str),
    /// `{odor}` is replaced by the specimen's odor name.
    CitesOdor(&'static str),
}

impl ReasonTemplate {
    pub fn render(self, specimen: &Specimen) -> String {
        match self {
            Self::Fixed(text) => text.to_string(),
            Self::CitesOdor(template) => template.replace("{odor}", specimen.odor.name()),
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            Self::Fixed(text) | Self::CitesOdor(text) => text,
        }
    }
}

/// One entry of the knowledge base.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub summary: &'static str,
    pub verdict: Verdict,
    pub reason: ReasonTemplate,
    condition: fn(&Specimen) -> bool,
}

impl Rule {
    pub const fn new(
        id: &'static str,
        summary: &'static str,
        verdict: Verdict,
        reason: ReasonTemplate,
        condition: fn(&Specimen) -> bool,
    ) -> Self {
        Self {
            id,
            summary,
            verdict,
            reason,
            condition,
        }
    }

    pub fn matches(&self, specimen: &Specimen) -> bool {
        (self.condition)(specimen)
    }

    fn apply(&self, specimen: &Specimen) -> DiagnosisResult {
        DiagnosisResult {
            verdict: self.verdict,
            reason: self.reason.render(specimen),
            rule: Some(self.id),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("summary", &self.summary)
            .field("verdict", &self.verdict)
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

/// How strongly an odor alone decides the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OdorClass {
    Benign,
    Toxic,
    Odorless,
}

// No wildcard arm: every Odor member must be given a class here.
fn odor_class(odor: Odor) -> OdorClass {
    match odor {
        Odor::Almond | Odor::Anise => OdorClass::Benign,
        Odor::Creosote | Odor::Fishy | Odor::Foul | Odor::Musty | Odor::Pungent | Odor::Spicy => {
            OdorClass::Toxic
        }
        Odor::None => OdorClass::Odorless,
    }
}

fn has_benign_odor(s: &Specimen) -> bool {
    odor_class(s.odor) == OdorClass::Benign
}

fn has_toxic_odor(s: &Specimen) -> bool {
    odor_class(s.odor) == OdorClass::Toxic
}

fn is_odorless(s: &Specimen) -> bool {
    odor_class(s.odor) == OdorClass::Odorless
}

fn odorless_narrow_gill(s: &Specimen) -> bool {
    is_odorless(s) && s.gill_size == GillSize::Narrow
}

fn odorless_buff_gill(s: &Specimen) -> bool {
    is_odorless(s) && s.gill_color == GillColor::Buff
}

fn odorless_missing_root(s: &Specimen) -> bool {
    is_odorless(s) && s.stalk_root == StalkRoot::Missing
}

static STANDARD_RULES: [Rule; 6] = [
    Rule::new(
        "benign-odor",
        "odor is almond or anise",
        Verdict::Safe,
        ReasonTemplate::CitesOdor(
            "A '{odor}' odor is a strong indicator of an edible mushroom; \
             almond- and anise-scented mushrooms are almost always safe.",
        ),
        has_benign_odor,
    ),
    Rule::new(
        "toxic-odor",
        "odor is creosote, fishy, foul, musty, pungent or spicy",
        Verdict::Poisonous,
        ReasonTemplate::CitesOdor("A '{odor}' odor is a strong indicator of a poisonous mushroom."),
        has_toxic_odor,
    ),
    Rule::new(
        "odorless-narrow-gill",
        "no odor and narrow gills",
        Verdict::Poisonous,
        ReasonTemplate::Fixed("Odorless mushrooms with narrow gills are often poisonous."),
        odorless_narrow_gill,
    ),
    Rule::new(
        "odorless-buff-gill",
        "no odor and buff gill color",
        Verdict::Poisonous,
        ReasonTemplate::Fixed("Odorless mushrooms with buff-colored gills are often poisonous."),
        odorless_buff_gill,
    ),
    Rule::new(
        "odorless-missing-root",
        "no odor and no clear stalk root",
        Verdict::Poisonous,
        ReasonTemplate::Fixed(
            "Odorless mushrooms without a clear stalk root (missing) tend to be poisonous.",
        ),
        odorless_missing_root,
    ),
    Rule::new(
        "odorless-benign",
        "no odor and none of the above",
        Verdict::Safe,
        ReasonTemplate::Fixed(
            "Odorless mushroom with an otherwise benign combination of traits \
             (broad gills, non-buff gill color, visible stalk root); likely safe.",
        ),
        is_odorless,
    ),
];

/// An ordered, immutable rule list evaluated first-match-wins.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase<'a> {
    rules: &'a [Rule],
}

impl KnowledgeBase<'static> {
    pub fn standard() -> Self {
        Self {
            rules: &STANDARD_RULES,
        }
    }
}

impl<'a> KnowledgeBase<'a> {
    pub fn from_rules(rules: &'a [Rule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'a [Rule] {
        self.rules
    }

    /// Rule that decides `specimen`, if any.
    pub fn first_match(&self, specimen: &Specimen) -> Option<&'a Rule> {
        self.rules.iter().find(|rule| rule.matches(specimen))
    }

    pub fn evaluate(&self, specimen: &Specimen) -> DiagnosisResult {
        match self.first_match(specimen) {
            Some(rule) => {
                log::debug!("Rule '{}' matched {}", rule.id, specimen);
                rule.apply(specimen)
            }
            None => {
                log::debug!("No rule matched {}", specimen);
                DiagnosisResult::unknown()
            }
        }
    }
}

/// Classify a mushroom from its four observed traits.
///
/// Total over the declared enumerations: always returns a result with a
/// non-empty reason and never fails.
pub fn diagnose(
    odor: Odor,
    gill_size: GillSize,
    gill_color: GillColor,
    stalk_root: StalkRoot,
) -> DiagnosisResult {
    Specimen::new(odor, gill_size, gill_color, stalk_root).diagnose()
}
