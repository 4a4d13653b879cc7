//! Display models derived from domain data.
//!
//! Output formats are fixed:
//!
//! - height/mass: label + `"{height} / {mass}"`, values verbatim
//! - first flight: `yyyy-MM-dd` re-emitted as `dd.MM.yyyy`
//! - cost: label + digits grouped in threes with `.` (`1234567` → `1.234.567`)
//! - position: label + `"({x},{y})"`

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Detail, Position};
use crate::strings::{StringKey, StringProvider};
use crate::text::StyledText;

const SOURCE_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";
const GROUP_SEPARATOR: char = '.';
const MISSING: &str = "-";

/// Presentation-ready projection of a [`Detail`]. Built once per
/// successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailViewModel {
    pub name: String,
    pub height_mass: StyledText,
    pub first_flight: String,
    pub cost: StyledText,
}

impl DetailViewModel {
    pub fn build(detail: &Detail, strings: &dyn StringProvider) -> Self {
        Self {
            name: detail.name.clone().unwrap_or_default(),
            height_mass: height_mass(detail.height, detail.mass, strings),
            first_flight: format_date(detail.first_flight.as_deref()),
            cost: cost(detail.cost_per_launch, strings),
        }
    }
}

/// Presentation-ready projection of one sampled [`Position`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionDisplay {
    pub position: Position,
    pub text: StyledText,
}

impl PositionDisplay {
    pub fn build(position: Position, strings: &dyn StringProvider) -> Self {
        let text = StyledText::new()
            .bold(strings.get(StringKey::LastPosition))
            .plain(format!("({:?},{:?})", position.pos_x, position.pos_y));
        Self { position, text }
    }
}

pub fn height_mass(
    height: Option<i64>,
    mass: Option<i64>,
    strings: &dyn StringProvider,
) -> StyledText {
    StyledText::new()
        .bold(strings.get(StringKey::HeightMass))
        .plain(format!("{} / {}", or_missing(height), or_missing(mass)))
}

pub fn cost(cost: Option<i64>, strings: &dyn StringProvider) -> StyledText {
    let text = StyledText::new().bold(strings.get(StringKey::Cost));
    match cost {
        Some(c) => text.plain(group_thousands(c)),
        None => text,
    }
}

/// Re-emit a `yyyy-MM-dd` date as `dd.MM.yyyy`.
///
/// Input that is not a calendar date in the source format is returned
/// unchanged; a missing date renders as an empty string.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    NaiveDate::parse_from_str(raw.trim(), SOURCE_DATE_FORMAT).map_or_else(
        |_| raw.to_owned(),
        |date| date.format(DISPLAY_DATE_FORMAT).to_string(),
    )
}

/// Group the digits of `value` in threes with `.`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

fn or_missing(value: Option<i64>) -> String {
    value.map_or_else(|| MISSING.to_owned(), |v| v.to_string())
}
