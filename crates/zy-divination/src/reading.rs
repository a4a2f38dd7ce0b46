//! Reading assembly and text rendering.

use serde::{Deserialize, Serialize};

use zy_core::Hexagram;

use crate::cast::{CastResult, cast};
use crate::method::Method;
use crate::source::RandomSource;

/// A full reading: a cast plus the hexagrams it resolves to.
///
/// The hexagrams are derived from the cast on demand, so a `Reading` is
/// just the cast and the method that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// The method used for the cast.
    pub method: Method,
    /// The cast result.
    pub cast: CastResult,
}

impl Reading {
    /// Cast six lines and assemble a reading.
    pub fn perform(method: Method, source: &mut dyn RandomSource) -> Self {
        Self {
            method,
            cast: cast(method, source),
        }
    }

    /// The primary hexagram.
    pub fn primary(&self) -> Hexagram {
        self.cast.primary()
    }

    /// The transformed (relating) hexagram, if any line is changing.
    pub fn transformed(&self) -> Option<Hexagram> {
        self.cast.transformed()
    }

    /// Render the line diagram, top line first, in the traditional glyphs.
    pub fn diagram(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.cast.lines.iter().enumerate().rev() {
            out.push_str(&format!("Line {}: {}\n", i + 1, line));
        }
        out
    }
}

impl std::fmt::Display for Reading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let primary = self.primary();
        let info = primary.info();

        writeln!(f, "Hexagram {} — {} ({}, {})", primary.number(), info.name, info.chinese, info.pinyin)?;
        writeln!(f, "Method: {}", self.method)?;
        writeln!(f, "Upper trigram: {}", primary.upper())?;
        writeln!(f, "Lower trigram: {}", primary.lower())?;
        writeln!(f)?;
        write!(f, "{}", self.diagram())?;

        match self.transformed() {
            Some(transformed) => {
                let positions: Vec<String> = self
                    .cast
                    .changing_line_indices
                    .iter()
                    .map(|p| p.to_string())
                    .collect();
                writeln!(f)?;
                writeln!(f, "Changing lines: {}", positions.join(", "))?;
                let t_info = transformed.info();
                write!(
                    f,
                    "Transforms into {} — {} ({}, {})",
                    transformed.number(),
                    t_info.name,
                    t_info.chinese,
                    t_info.pinyin
                )
            }
            None => {
                writeln!(f)?;
                write!(f, "No changing lines.")
            }
        }
    }
}
