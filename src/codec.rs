//! Line-oriented import format and the paginated report.
//!
//! A record is `<phrase>:<count>`. The report writes its body rows in the
//! same format and everything else as `#` comment lines, so an exported
//! report can be fed straight back into the importer. Phrases are escaped
//! on export (`\\`, `\:`, a leading `\#`, and `\n`/`\r` for line breaks) so
//! colons and newlines survive the trip.

use crate::errors::CounterError;
use crate::store::CounterEntry;
use chrono::NaiveDateTime;
use std::collections::HashSet;

pub const REPORT_TITLE: &str = "JannahWay Dhikr Report";
pub const NO_DATA_ROW: &str = "No dhikr recorded yet";
pub const DEFAULT_PAGE_ROWS: usize = 40;

const PHRASE_HEADER: &str = "Dhikr";
const COUNT_HEADER: &str = "Count";
const PAGE_BREAK: &str = "\u{c}";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportBatch {
    pub records: Vec<(String, u64)>,
}

impl ImportBatch {
    pub fn lines(&self) -> usize {
        self.records.len()
    }

    /// Distinct phrases in the batch; this is what a merge reports.
    pub fn distinct_phrases(&self) -> usize {
        self.records
            .iter()
            .map(|(phrase, _)| phrase.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Parses a whole import. Blank lines, `#` comments and lines without a
/// colon are skipped. A bad count or an empty phrase fails the entire batch.
pub fn parse_import(text: &str) -> Result<ImportBatch, CounterError> {
    let mut records = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((phrase, count)) = split_record(trimmed) else {
            continue;
        };
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return Err(CounterError::FormatError(line.to_string()));
        }
        let count = count
            .trim()
            .parse::<u64>()
            .map_err(|_| CounterError::FormatError(line.to_string()))?;
        records.push((phrase.to_string(), count));
    }
    Ok(ImportBatch { records })
}

pub fn escape_phrase(phrase: &str) -> String {
    let mut escaped = String::with_capacity(phrase.len());
    for (position, ch) in phrase.chars().enumerate() {
        match ch {
            '\\' | ':' => escaped.push('\\'),
            '#' if position == 0 => escaped.push('\\'),
            '\n' => {
                escaped.push_str("\\n");
                continue;
            }
            '\r' => {
                escaped.push_str("\\r");
                continue;
            }
            _ => {}
        }
        escaped.push(ch);
    }
    escaped
}

/// Splits on the first unescaped colon, unescaping the phrase half.
fn split_record(line: &str) -> Option<(String, &str)> {
    let mut phrase = String::new();
    let mut chars = line.char_indices().peekable();
    while let Some((at, ch)) = chars.next() {
        match ch {
            '\\' => match chars.peek() {
                Some(&(_, next @ ('\\' | ':' | '#'))) => {
                    phrase.push(next);
                    chars.next();
                }
                Some(&(_, 'n')) => {
                    phrase.push('\n');
                    chars.next();
                }
                Some(&(_, 'r')) => {
                    phrase.push('\r');
                    chars.next();
                }
                _ => phrase.push('\\'),
            },
            ':' => return Some((phrase, &line[at + 1..])),
            _ => phrase.push(ch),
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub generated_at: NaiveDateTime,
    /// Non-zero rows, highest count first.
    pub rows: Vec<CounterEntry>,
    /// Sum over every entry, zero counts included.
    pub total: u64,
}

impl ReportDocument {
    pub fn from_entries(entries: &[CounterEntry], generated_at: NaiveDateTime) -> Self {
        let mut rows: Vec<CounterEntry> = entries
            .iter()
            .filter(|entry| entry.count > 0)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        let total = entries
            .iter()
            .fold(0u64, |sum, entry| sum.saturating_add(entry.count));

        Self {
            generated_at,
            rows,
            total,
        }
    }

    pub fn has_data(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn page_count(&self, rows_per_page: usize) -> usize {
        self.rows.len().div_ceil(rows_per_page.max(1)).max(1)
    }

    pub fn render(&self, rows_per_page: usize) -> Vec<u8> {
        let generated = format!("Generated {}", self.generated_at.format("%Y-%m-%d %H:%M:%S"));

        if !self.has_data() {
            let lines = [
                comment(REPORT_TITLE),
                comment(&generated),
                comment(NO_DATA_ROW),
            ];
            return finish(&lines);
        }

        let phrases: Vec<String> = self.rows.iter().map(|row| escape_phrase(&row.phrase)).collect();
        let width = phrases
            .iter()
            .map(|phrase| phrase.chars().count())
            .chain(std::iter::once(PHRASE_HEADER.len()))
            .max()
            .unwrap_or(0);

        let per_page = rows_per_page.max(1);
        let pages = self.page_count(per_page);
        let mut lines = Vec::with_capacity(self.rows.len() + pages * 5 + 1);

        for (page, chunk) in self.rows.chunks(per_page).enumerate() {
            if page > 0 {
                lines.push(PAGE_BREAK.to_string());
            }
            lines.push(comment(REPORT_TITLE));
            lines.push(comment(&generated));
            lines.push(comment(&format!("Page {} of {}", page + 1, pages)));
            lines.push(comment(&format!("{}{} : {}", PHRASE_HEADER, pad(PHRASE_HEADER, width), COUNT_HEADER)));

            let offset = page * per_page;
            for (index, row) in chunk.iter().enumerate() {
                let phrase = &phrases[offset + index];
                lines.push(format!("  {}{} : {}", phrase, pad(phrase, width), row.count));
            }
        }
        lines.push(comment(&format!("Total: {}", self.total)));

        finish(&lines)
    }
}

fn comment(text: &str) -> String {
    format!("# {text}")
}

fn pad(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.chars().count()))
}

fn finish(lines: &[String]) -> Vec<u8> {
    let mut document = lines.join("\n");
    document.push('\n');
    document.into_bytes()
}
