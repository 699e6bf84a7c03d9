//! Display labels for trait values and verdicts.
//!
//! Purely presentational: the classifier never reads these. English labels
//! are the default; Indonesian labels follow the wording of the bilingual
//! form the rules were first published with.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::classifier::Verdict;
use crate::traits::{GillColor, GillSize, Odor, StalkRoot, TraitKind, TraitValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Bahasa Indonesia
    Id,
}

impl Locale {
    fn pick(self, en: &'static str, id: &'static str) -> &'static str {
        match self {
            Self::En => en,
            Self::Id => id,
        }
    }
}

/// Display label for a value in a given locale.
pub trait TraitLabel {
    fn label(self, locale: Locale) -> &'static str;
}

impl TraitLabel for Odor {
    fn label(self, locale: Locale) -> &'static str {
        let (en, id) = match self {
            Self::Almond => ("Almond", "Almond"),
            Self::Anise => ("Anise (licorice-like)", "Anise (Jintan Manis)"),
            Self::Creosote => (
                "Creosote (like a tarred utility pole)",
                "Creosote (seperti bau tiang listrik)",
            ),
            Self::Fishy => ("Fishy", "Fishy (Amis)"),
            Self::Foul => ("Foul", "Foul (Busuk)"),
            Self::Musty => ("Musty", "Musty (Apek)"),
            Self::None => ("None (odorless)", "None (Tidak Berbau)"),
            Self::Pungent => ("Pungent (sharp, stinging)", "Pungent (Pedas/Menyengat)"),
            Self::Spicy => ("Spicy", "Spicy (Rempah)"),
        };
        locale.pick(en, id)
    }
}

impl TraitLabel for GillSize {
    fn label(self, locale: Locale) -> &'static str {
        let (en, id) = match self {
            Self::Broad => ("Broad", "Broad (Lebar)"),
            Self::Narrow => ("Narrow", "Narrow (Sempit)"),
        };
        locale.pick(en, id)
    }
}

impl TraitLabel for GillColor {
    fn label(self, locale: Locale) -> &'static str {
        let (en, id) = match self {
            Self::Black => ("Black", "Black (Hitam)"),
            Self::Brown => ("Brown", "Brown (Coklat)"),
            Self::Buff => ("Buff (pale yellow-brown)", "Buff (Krem)"),
            Self::Chocolate => ("Chocolate (dark brown)", "Chocolate (Coklat Tua)"),
            Self::Gray => ("Gray", "Gray (Abu-abu)"),
            Self::Green => ("Green", "Green (Hijau)"),
            Self::Orange => ("Orange", "Orange (Oranye)"),
            Self::Pink => ("Pink", "Pink"),
            Self::Purple => ("Purple", "Purple (Ungu)"),
            Self::Red => ("Red", "Red (Merah)"),
            Self::White => ("White", "White (Putih)"),
            Self::Yellow => ("Yellow", "Yellow (Kuning)"),
        };
        locale.pick(en, id)
    }
}

impl TraitLabel for StalkRoot {
    fn label(self, locale: Locale) -> &'static str {
        let (en, id) = match self {
            Self::Bulbous => ("Bulbous (swollen at the base)", "Bulbous (Membesar di pangkal)"),
            Self::Club => ("Club (club-shaped)", "Club (Seperti Gada)"),
            Self::Cup => ("Cup (cup-shaped)", "Cup (Seperti Cangkir)"),
            Self::Equal => ("Equal (even width)", "Equal (Sama Rata)"),
            Self::Rhizomorphs => ("Rhizomorphs (root-like strands)", "Rhizomorphs (Seperti Akar)"),
            Self::Rooted => ("Rooted", "Rooted (Berakar)"),
            Self::Missing => ("Missing (no visible root)", "Missing (Tidak Ada)"),
        };
        locale.pick(en, id)
    }
}

impl TraitLabel for Verdict {
    fn label(self, locale: Locale) -> &'static str {
        let (en, id) = match self {
            Self::Safe => ("SAFE", "AMAN"),
            Self::Poisonous => ("POISONOUS", "BERACUN"),
            Self::Unknown => ("UNKNOWN", "TIDAK DIKETAHUI"),
        };
        locale.pick(en, id)
    }
}

impl TraitLabel for TraitKind {
    fn label(self, locale: Locale) -> &'static str {
        let (en, id) = match self {
            Self::Odor => ("Odor", "Bau Jamur (Odor)"),
            Self::GillSize => ("Gill Size", "Ukuran Insang (Gill Size)"),
            Self::GillColor => ("Gill Color", "Warna Insang (Gill Color)"),
            Self::StalkRoot => ("Stalk Root", "Bentuk Akar (Stalk Root)"),
        };
        locale.pick(en, id)
    }
}

/// Fixed strings used by the report writers and prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    Title,
    ResultHeading,
    Status,
    Reason,
    Rule,
    Disclaimer,
}

impl Phrase {
    pub fn text(self, locale: Locale) -> &'static str {
        match self {
            Self::Title => locale.pick(
                "Mushroom Identification Expert System",
                "Sistem Pakar Identifikasi Jamur",
            ),
            Self::ResultHeading => locale.pick("Diagnosis Result", "Hasil Diagnosis"),
            Self::Status => locale.pick("Status", "Status"),
            Self::Reason => locale.pick("Reason", "Alasan"),
            Self::Rule => locale.pick("Rule", "Aturan"),
            Self::Disclaimer => locale.pick(
                "Disclaimer: this is a demonstration project. Do not use it to decide \
                 whether a wild mushroom is safe to eat.",
                "Disclaimer: Ini adalah proyek demo. Jangan gunakan aplikasi ini untuk \
                 menentukan apakah jamur liar aman untuk dimakan.",
            ),
        }
    }
}

/// One selectable option, as shown in a prompt or listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub code: char,
    pub name: &'static str,
    pub label: &'static str,
}

impl Choice {
    /// `code - label`, the format used by every choice listing.
    pub fn display(&self) -> String {
        format!("{} - {}", self.code, self.label)
    }
}

pub fn choices<T: TraitValue + TraitLabel>(locale: Locale) -> Vec<Choice> {
    T::ALL
        .iter()
        .map(|&value| Choice {
            code: value.code(),
            name: value.name(),
            label: value.label(locale),
        })
        .collect()
}

pub fn choices_for(kind: TraitKind, locale: Locale) -> Vec<Choice> {
    match kind {
        TraitKind::Odor => choices::<Odor>(locale),
        TraitKind::GillSize => choices::<GillSize>(locale),
        TraitKind::GillColor => choices::<GillColor>(locale),
        TraitKind::StalkRoot => choices::<StalkRoot>(locale),
    }
}
