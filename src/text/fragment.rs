/*!
 * Displayable text fragments and pivot letter selection.
 *
 * A fragment is one unit shown by the reader: a word, the punctuation glued to
 * its end, and the delimiter that terminated it. The pivot letter is the
 * character highlighted to anchor the reader's gaze.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Classification of whatever terminated a fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiter {
    #[default]
    None,
    Space,
    Newline,
    Dash,
    Bracket,
    Quote,
    Comma,
    Colon,
    Semicolon,
    Period,
    Ellipsis,
    ExclamationMark,
    QuestionMark,
}

impl Delimiter {
    /// Every delimiter, in declaration order
    pub const ALL: [Delimiter; 13] = [
        Self::None,
        Self::Space,
        Self::Newline,
        Self::Dash,
        Self::Bracket,
        Self::Quote,
        Self::Comma,
        Self::Colon,
        Self::Semicolon,
        Self::Period,
        Self::Ellipsis,
        Self::ExclamationMark,
        Self::QuestionMark,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::None => "No delimiter",
            Self::Space => "Space",
            Self::Newline => "Newline",
            Self::Dash => "Dash",
            Self::Bracket => "Bracket",
            Self::Quote => "Quote",
            Self::Comma => "Comma",
            Self::Colon => "Colon",
            Self::Semicolon => "Semicolon",
            Self::Period => "Period",
            Self::Ellipsis => "Ellipsis",
            Self::ExclamationMark => "Exclamation mark",
            Self::QuestionMark => "Question mark",
        }
    }

    /// Whether a fragment ending with this delimiter closes a sentence
    pub fn ends_sentence(&self) -> bool {
        matches!(
            self,
            Self::Period | Self::QuestionMark | Self::ExclamationMark | Self::Newline | Self::Ellipsis
        )
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Strategy for picking the pivot letter of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotCalculationMethod {
    /// Length-bucketed heuristic
    #[default]
    Magic,
    Middle,
    Quarter,
    SquareRoot,
    CubicRoot,
    Logarithm,
    /// Integer half of the length, no rounding
    HalfTruncated,
}

impl PivotCalculationMethod {
    /// Every method, in declaration order
    pub const ALL: [PivotCalculationMethod; 7] = [
        Self::Magic,
        Self::Middle,
        Self::Quarter,
        Self::SquareRoot,
        Self::CubicRoot,
        Self::Logarithm,
        Self::HalfTruncated,
    ];

    /// Identifier used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Magic => "magic",
            Self::Middle => "middle",
            Self::Quarter => "quarter",
            Self::SquareRoot => "square_root",
            Self::CubicRoot => "cubic_root",
            Self::Logarithm => "logarithm",
            Self::HalfTruncated => "half_truncated",
        }
    }

    /// Offset of the pivot from the first alphanumeric character.
    ///
    /// `None` when the word has no letters or digits at all.
    pub fn pivot_offset(&self, word_length: usize) -> Option<usize> {
        if word_length == 0 {
            return None;
        }

        let length = word_length as f64;
        let offset = match self {
            Self::Magic => match word_length {
                1 => 0,
                2..=5 => 1,
                6..=9 => 2,
                10..=13 => 3,
                _ => 4,
            },
            Self::Middle => rounded_offset(length / 2.0),
            Self::Quarter => rounded_offset(length / 4.0),
            Self::SquareRoot => rounded_offset(length.sqrt()),
            Self::CubicRoot => rounded_offset(length.cbrt()),
            Self::Logarithm => rounded_offset(length.log2()),
            Self::HalfTruncated => (word_length / 2).saturating_sub(1),
        };

        Some(offset)
    }
}

// round() is half-away-from-zero; inputs are finite and non-negative here
fn rounded_offset(value: f64) -> usize {
    (value.round() as usize).saturating_sub(1)
}

impl fmt::Display for PivotCalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PivotCalculationMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownPivotMethod(s.to_string()))
    }
}

/// One displayable unit: a word with its trailing punctuation
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fragment {
    word: String,
    punctuation: String,
    delimiter: Delimiter,
}

impl Fragment {
    pub fn new(word: impl Into<String>, punctuation: impl Into<String>, delimiter: Delimiter) -> Self {
        Self {
            word: word.into(),
            punctuation: punctuation.into(),
            delimiter,
        }
    }

    /// A bare word with no punctuation and no delimiter
    pub fn word_only(word: impl Into<String>) -> Self {
        Self::new(word, "", Delimiter::None)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn punctuation(&self) -> &str {
        &self.punctuation
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Word followed by its punctuation
    pub fn text(&self) -> String {
        format!("{}{}", self.word, self.punctuation)
    }

    pub fn is_end_of_sentence(&self) -> bool {
        self.delimiter.ends_sentence()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty() && self.punctuation.is_empty()
    }

    /// Character index (not byte index) of the pivot letter within the word.
    ///
    /// Leading characters that are neither letters nor digits (opening quotes,
    /// brackets) are skipped before the method is applied. Returns `None` when
    /// there is nothing to highlight.
    pub fn pivot_letter_index(&self, method: PivotCalculationMethod) -> Option<usize> {
        let chars: Vec<char> = self.word.chars().collect();

        let mut word_start_index = 0;
        let mut word_length = 0;
        let mut word_started = false;
        for ch in &chars {
            if ch.is_alphanumeric() {
                word_started = true;
                word_length += 1;
            } else if !word_started {
                word_start_index += 1;
            }
        }

        let pivot_index = word_start_index + method.pivot_offset(word_length)?;

        let lands_on_letter = chars.get(pivot_index).is_some_and(|ch| ch.is_alphanumeric());
        if word_length > 1 && !lands_on_letter {
            // Pivot hit punctuation inside the word, nudge once towards the middle
            let half = word_length / 2;
            if pivot_index < half {
                Some(pivot_index + 1)
            } else {
                Some(pivot_index.saturating_sub(1))
            }
        } else {
            Some(pivot_index)
        }
    }

    /// Word split around its pivot letter: `(before, pivot, after)`
    pub fn split_at_pivot(&self, method: PivotCalculationMethod) -> Option<(String, char, String)> {
        let pivot = self.pivot_letter_index(method)?;
        let mut chars = self.word.chars();
        let before: String = chars.by_ref().take(pivot).collect();
        let letter = chars.next()?;
        let after: String = chars.collect();
        Some((before, letter, after))
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.word, self.punctuation)
    }
}
