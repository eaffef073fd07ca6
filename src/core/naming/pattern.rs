use super::errors::PatternError;
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Highest column an increment pattern generates before moving to the next row
pub const INCREMENT_COLUMN_CEILING: u32 = 999;

const ROW_MARKER: &str = "{row}";
const COL_MARKER: &str = "{col}";

static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\p{Alphabetic}+)(\d+)/(\d+)\s*-\s*(\d+)/(\d+)$").expect("range regex is valid")
});

static INCREMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\p{Alphabetic}+)(\d+)/(\d+)$").expect("increment regex is valid")
});

/// One-based row/column coordinate as written in a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: u32,
    pub col: u32,
}

impl Coordinate {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// A classified batch naming pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePattern {
    /// `E{row}/{col}`: markers replaced by each port's 1-based position
    Template(String),
    /// `E1/1 - 2/24`: names walk the range and stop once it is exhausted
    Range {
        prefix: String,
        start: Coordinate,
        end: Coordinate,
    },
    /// `E1/1`: names increment by column for every port
    Increment { prefix: String, start: Coordinate },
}

impl NamePattern {
    /// Classify a pattern string.
    ///
    /// Template markers are checked first, so a string carrying both `{row}`/`{col}`
    /// and range syntax is a template. Numbers that do not fit in `u32` fail recognition.
    pub fn parse(input: &str) -> Result<Self, PatternError> {
        let pattern = input.trim();
        if pattern.is_empty() {
            return Err(PatternError::EmptyPattern);
        }

        if pattern.contains(ROW_MARKER) || pattern.contains(COL_MARKER) {
            return Ok(NamePattern::Template(pattern.to_string()));
        }

        let not_recognized = || PatternError::PatternNotRecognized {
            pattern: input.to_string(),
        };

        if let Some(caps) = RANGE_PATTERN.captures(pattern) {
            let number = |i: usize| caps[i].parse::<u32>().map_err(|_| not_recognized());
            return Ok(NamePattern::Range {
                prefix: caps[1].to_string(),
                start: Coordinate::new(number(2)?, number(3)?),
                end: Coordinate::new(number(4)?, number(5)?),
            });
        }

        if let Some(caps) = INCREMENT_PATTERN.captures(pattern) {
            let number = |i: usize| caps[i].parse::<u32>().map_err(|_| not_recognized());
            return Ok(NamePattern::Increment {
                prefix: caps[1].to_string(),
                start: Coordinate::new(number(2)?, number(3)?),
            });
        }

        Err(not_recognized())
    }

    /// Render a template for a zero-based grid position
    pub(crate) fn render_template(template: &str, row: u32, col: u32) -> String {
        template
            .replace(ROW_MARKER, &(u64::from(row) + 1).to_string())
            .replace(COL_MARKER, &(u64::from(col) + 1).to_string())
    }
}

impl FromStr for NamePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamePattern::parse(s)
    }
}
