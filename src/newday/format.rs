//! Text produced by newday: the date key, the heading line, the note skeleton
//! and the index directives.
//!
//! Everything here is pure. The only clock read is [`DateKey::today`], which
//! the binary calls once per run and hands down to the commands.

use crate::error::{NewDayError, Result};
use chrono::{Local, NaiveDate};
use std::fmt;

pub const PAGE_BREAK: &str = "#pagebreak(weak: true)";
pub const SUBHEADING: &str = "== ";

/// A calendar day, rendered as `MM-DD-YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today in local time.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Accepts `YYYY-MM-DD` or `YYYYMMDD`.
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() == 8 {
            if let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d") {
                return Ok(Self(d));
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| NewDayError::InvalidDate {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%m-%d-%Y"))
    }
}

/// Joins titles as natural language: `A`, `A & B`, `A, B & C`.
pub fn join_titles<S: AsRef<str>>(titles: &[S]) -> String {
    match titles {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|s| s.as_ref()).collect();
            format!("{} & {}", head.join(", "), last.as_ref())
        }
    }
}

/// `= *<date>* _<titles>_`, or `= *<date>* ` when there are no titles.
pub fn heading_line<S: AsRef<str>>(date: DateKey, titles: &[S]) -> String {
    let joined = join_titles(titles);
    if joined.is_empty() {
        format!("= *{}* ", date)
    } else {
        format!("= *{}* _{}_", date, joined)
    }
}

pub fn note_body<S: AsRef<str>>(date: DateKey, titles: &[S], subheadings: u32) -> String {
    let mut body = heading_line(date, titles);
    body.push_str("\n\n");
    for _ in 0..subheadings {
        body.push_str(SUBHEADING);
        body.push_str("\n\n");
    }
    body
}

pub fn include_line(filename: &str) -> String {
    format!("#include \"{}\"", filename)
}
