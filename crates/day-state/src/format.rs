//! Moment-style date patterns, used to build marked-date lookup keys.
//!
//! Supported tokens: `YYYY`, `YY`, `MMMM`, `MMM`, `MM`, `M`, `DDDD`, `DDD`,
//! `DD`, `D`, `Do`, `dddd`, `ddd`, `d`. Text inside `[...]` is copied
//! literally, as is any character that does not start a token.

use std::fmt::Write as _;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;

pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Year,
    YearShort,
    MonthName,
    MonthNameShort,
    MonthPadded,
    Month,
    DayOfYearPadded,
    DayOfYear,
    DayPadded,
    Day,
    DayOrdinal,
    WeekdayName,
    WeekdayNameShort,
    Weekday,
}

// Longest patterns first so `YYYY` is not read as two `YY`.
const TOKENS: &[(&str, Token)] = &[
    ("YYYY", Token::Year),
    ("MMMM", Token::MonthName),
    ("DDDD", Token::DayOfYearPadded),
    ("dddd", Token::WeekdayName),
    ("MMM", Token::MonthNameShort),
    ("DDD", Token::DayOfYear),
    ("ddd", Token::WeekdayNameShort),
    ("YY", Token::YearShort),
    ("MM", Token::MonthPadded),
    ("DD", Token::DayPadded),
    ("Do", Token::DayOrdinal),
    ("M", Token::Month),
    ("D", Token::Day),
    ("d", Token::Weekday),
];

/// A compiled date pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DateFormat {
    pattern: String,
    tokens: Vec<Token>,
}

impl DateFormat {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            tokens: tokenize(pattern),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self, date: CalendarDate) -> String {
        let naive = date.naive();
        let mut out = String::with_capacity(self.pattern.len() + 8);
        for token in &self.tokens {
            // Writing into a String cannot fail.
            let _ = match token {
                Token::Literal(text) => {
                    out.push_str(text);
                    Ok(())
                }
                Token::Year => write!(out, "{:04}", naive.year()),
                Token::YearShort => write!(out, "{:02}", naive.year().rem_euclid(100)),
                Token::MonthName => write!(out, "{}", naive.format("%B")),
                Token::MonthNameShort => write!(out, "{}", naive.format("%b")),
                Token::MonthPadded => write!(out, "{:02}", naive.month()),
                Token::Month => write!(out, "{}", naive.month()),
                Token::DayOfYearPadded => write!(out, "{:03}", naive.ordinal()),
                Token::DayOfYear => write!(out, "{}", naive.ordinal()),
                Token::DayPadded => write!(out, "{:02}", naive.day()),
                Token::Day => write!(out, "{}", naive.day()),
                Token::DayOrdinal => write!(out, "{}{}", naive.day(), ordinal_suffix(naive.day())),
                Token::WeekdayName => write!(out, "{}", naive.format("%A")),
                Token::WeekdayNameShort => write!(out, "{}", naive.format("%a")),
                Token::Weekday => write!(out, "{}", naive.weekday().num_days_from_sunday()),
            };
        }
        out
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

impl From<String> for DateFormat {
    fn from(pattern: String) -> Self {
        Self::new(&pattern)
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.pattern
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn push_literal(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Literal(last)) = tokens.last_mut() {
        last.push_str(text);
    } else {
        tokens.push(Token::Literal(text.to_string()));
    }
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = pattern;

    'outer: while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(close) = rest.find(']') {
                push_literal(&mut tokens, &rest[1..close]);
                rest = &rest[close + 1..];
                continue;
            }
            // Unterminated escape: the bracket is plain text.
        }
        for (text, token) in TOKENS {
            if let Some(tail) = rest.strip_prefix(text) {
                tokens.push(token.clone());
                rest = tail;
                continue 'outer;
            }
        }
        let width = c.len_utf8();
        push_literal(&mut tokens, &rest[..width]);
        rest = &rest[width..];
    }

    tokens
}
