use std::fmt;

use ratatui::style::Color;
use serde::Serialize;

use crate::constants::SEED_COLORS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SeedType {
    #[serde(rename = "milho")]
    Corn,
    #[serde(rename = "soja")]
    Soy,
    #[serde(rename = "trigo")]
    Wheat,
    #[serde(rename = "feijao")]
    Bean,
    #[serde(rename = "outro")]
    Other,
}

/// How a falling seed of a given type is drawn on the terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedStyle {
    pub small_glyph: char,
    pub large_glyph: char,
    pub color: Color,
}

// Checked in order; the first keyword contained in the crop name wins.
const KEYWORDS: &[(&[&str], SeedType)] = &[
    (&["milho"], SeedType::Corn),
    (&["soja"], SeedType::Soy),
    (&["trigo"], SeedType::Wheat),
    (&["feijão", "feijao"], SeedType::Bean),
];

impl SeedType {
    pub fn classify(crop: &str) -> Self {
        let lower = crop.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(words, _)| words.iter().any(|word| lower.contains(word)))
            .map_or(SeedType::Other, |(_, seed)| *seed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeedType::Corn => "milho",
            SeedType::Soy => "soja",
            SeedType::Wheat => "trigo",
            SeedType::Bean => "feijao",
            SeedType::Other => "outro",
        }
    }

    pub fn style(self) -> SeedStyle {
        match self {
            SeedType::Corn => SeedStyle {
                small_glyph: '•',
                large_glyph: '⬮',
                color: SEED_COLORS.corn,
            },
            SeedType::Soy => SeedStyle {
                small_glyph: '•',
                large_glyph: '●',
                color: SEED_COLORS.soy,
            },
            SeedType::Wheat => SeedStyle {
                small_glyph: '⬩',
                large_glyph: '◆',
                color: SEED_COLORS.wheat,
            },
            SeedType::Bean => SeedStyle {
                small_glyph: '•',
                large_glyph: '◉',
                color: SEED_COLORS.bean,
            },
            SeedType::Other => SeedStyle {
                small_glyph: '·',
                large_glyph: '•',
                color: SEED_COLORS.other,
            },
        }
    }
}

impl fmt::Display for SeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
