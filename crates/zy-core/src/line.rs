//! Line values produced by a cast.
//!
//! Each line of a hexagram is one of four ritual values: 6 (old yin),
//! 7 (young yang), 8 (young yin), or 9 (old yang). Old lines are "changing":
//! when the hexagram transforms, an old yin settles into young yang and an
//! old yang settles into young yin.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A single cast line, serialized as its ritual number (6, 7, 8, or 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum LineValue {
    /// 6 — old yin: broken, changing.
    OldYin,
    /// 7 — young yang: solid, stable.
    YoungYang,
    /// 8 — young yin: broken, stable.
    YoungYin,
    /// 9 — old yang: solid, changing.
    OldYang,
}

impl LineValue {
    /// The ritual number of this line (6, 7, 8, or 9).
    pub fn value(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// Whether this line is solid (yang) in the cast hexagram.
    pub fn is_yang(self) -> bool {
        matches!(self, Self::YoungYang | Self::OldYang)
    }

    /// Whether this line is changing (old yin or old yang).
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// The value this line settles into in the transformed hexagram.
    ///
    /// Old yin becomes young yang, old yang becomes young yin, and young
    /// lines are unchanged.
    pub fn settled(self) -> Self {
        match self {
            Self::OldYin => Self::YoungYang,
            Self::OldYang => Self::YoungYin,
            stable => stable,
        }
    }

    /// The traditional name of this line.
    pub fn name(self) -> &'static str {
        match self {
            Self::OldYin => "Old Yin",
            Self::YoungYang => "Young Yang",
            Self::YoungYin => "Young Yin",
            Self::OldYang => "Old Yang",
        }
    }

    /// The diagram glyph for this line: `---X---`, `-------`, `--- ---`,
    /// or `---O---`.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::OldYin => "---X---",
            Self::YoungYang => "-------",
            Self::YoungYin => "--- ---",
            Self::OldYang => "---O---",
        }
    }

    /// All four line values in ritual-number order.
    pub fn all() -> &'static [Self] {
        &[Self::OldYin, Self::YoungYang, Self::YoungYin, Self::OldYang]
    }
}

impl From<LineValue> for u8 {
    fn from(line: LineValue) -> Self {
        line.value()
    }
}

impl TryFrom<u8> for LineValue {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(Self::OldYin),
            7 => Ok(Self::YoungYang),
            8 => Ok(Self::YoungYin),
            9 => Ok(Self::OldYang),
            other => Err(CoreError::InvalidLineValue(other)),
        }
    }
}

impl std::fmt::Display for LineValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.glyph(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ritual_numbers_round_trip() {
        for line in LineValue::all() {
            assert_eq!(LineValue::try_from(line.value()).unwrap(), *line);
        }
    }

    #[test]
    fn invalid_values_rejected() {
        for v in [0u8, 5, 10, 255] {
            assert!(LineValue::try_from(v).is_err());
        }
    }

    #[test]
    fn changing_lines_are_old() {
        assert!(LineValue::OldYin.is_changing());
        assert!(LineValue::OldYang.is_changing());
        assert!(!LineValue::YoungYang.is_changing());
        assert!(!LineValue::YoungYin.is_changing());
    }

    #[test]
    fn yang_lines_are_solid() {
        assert!(LineValue::YoungYang.is_yang());
        assert!(LineValue::OldYang.is_yang());
        assert!(!LineValue::OldYin.is_yang());
        assert!(!LineValue::YoungYin.is_yang());
    }

    #[test]
    fn settling_flips_polarity_of_old_lines() {
        assert_eq!(LineValue::OldYin.settled(), LineValue::YoungYang);
        assert_eq!(LineValue::OldYang.settled(), LineValue::YoungYin);
        assert_eq!(LineValue::YoungYang.settled(), LineValue::YoungYang);
        assert_eq!(LineValue::YoungYin.settled(), LineValue::YoungYin);
    }

    #[test]
    fn settled_lines_are_stable() {
        for line in LineValue::all() {
            assert!(!line.settled().is_changing());
        }
    }

    #[test]
    fn serde_as_integer() {
        let json = serde_json::to_string(&LineValue::OldYang).unwrap();
        assert_eq!(json, "9");
        let line: LineValue = serde_json::from_str("6").unwrap();
        assert_eq!(line, LineValue::OldYin);
        assert!(serde_json::from_str::<LineValue>("5").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(LineValue::OldYin.to_string(), "---X--- (Old Yin)");
        assert_eq!(LineValue::YoungYang.to_string(), "------- (Young Yang)");
    }
}
