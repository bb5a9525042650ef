//! Row Delta Renderer
//!
//! Builds the history table rows: the newest records first, each annotated
//! with the change in souls and fragments since the next older record.

use crate::domain::Record;
use crate::number::parse_leading_int;

/// Sign class of a delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Positive => "diff-pos",
            Tone::Negative => "diff-neg",
            Tone::Neutral => "diff-neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    pub value: i64,
    pub tone: Tone,
}

impl Delta {
    pub fn new(value: i64) -> Self {
        let tone = match value {
            v if v > 0 => Tone::Positive,
            v if v < 0 => Tone::Negative,
            _ => Tone::Neutral,
        };
        Self { value, tone }
    }

    /// `[+20]`, `[-5]` or `[0]`
    pub fn label(&self) -> String {
        match self.tone {
            Tone::Positive => format!("[+{}]", self.value),
            _ => format!("[{}]", self.value),
        }
    }
}

/// Difference between two stored quantities.
///
/// `None` when either side has no leading integer (e.g. the `-` placeholder).
pub fn compute_delta(current: &str, previous: &str) -> Option<Delta> {
    let current = parse_leading_int(current)?;
    let previous = parse_leading_int(previous)?;
    current.checked_sub(previous).map(Delta::new)
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub id: String,
    pub date: String,
    pub time: String,
    pub soul: String,
    pub fragment: String,
    pub soul_delta: Option<Delta>,
    pub fragment_delta: Option<Delta>,
}

/// Render model of the history table, rebuilt from each snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryView {
    pub rows: Vec<HistoryRow>,
}

impl HistoryView {
    /// Rows for the newest `display_limit` records (all when `None`).
    ///
    /// `records` must be ordered newest first; records past the display
    /// limit still serve as the comparison base for the last shown row.
    pub fn render(records: &[Record], display_limit: Option<usize>) -> Self {
        let shown = display_limit.unwrap_or(records.len()).min(records.len());
        let rows = records[..shown]
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let previous = records.get(index + 1);
                HistoryRow {
                    id: record.id.clone(),
                    date: record.date.clone(),
                    time: record.time.clone(),
                    soul: record.soul.clone(),
                    fragment: record.fragment.clone(),
                    soul_delta: previous.and_then(|p| compute_delta(&record.soul, &p.soul)),
                    fragment_delta: previous.and_then(|p| compute_delta(&record.fragment, &p.fragment)),
                }
            })
            .collect();
        Self { rows }
    }

    pub fn show_placeholder(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, soul: &str, fragment: &str) -> Record {
        Record {
            id: id.to_string(),
            date: "2024/03/05".to_string(),
            time: "10:00".to_string(),
            soul: soul.to_string(),
            fragment: fragment.to_string(),
            timestamp: None,
        }
    }

    #[test]
    fn test_delta_labels() {
        let up = compute_delta("100", "80").unwrap();
        assert_eq!(up.label(), "[+20]");
        assert_eq!(up.tone, Tone::Positive);
        assert_eq!(up.tone.css_class(), "diff-pos");

        let down = compute_delta("75", "80").unwrap();
        assert_eq!(down.label(), "[-5]");
        assert_eq!(down.tone.css_class(), "diff-neg");

        let flat = compute_delta("80", "80").unwrap();
        assert_eq!(flat.label(), "[0]");
        assert_eq!(flat.tone.css_class(), "diff-neutral");
    }

    #[test]
    fn test_placeholder_skips_delta() {
        assert_eq!(compute_delta("-", "80"), None);
        assert_eq!(compute_delta("80", ""), None);
    }

    #[test]
    fn test_two_records() {
        let view = HistoryView::render(&[record("new", "100", "10"), record("old", "80", "10")], Some(7));
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].soul_delta.map(|d| d.label()), Some("[+20]".to_string()));
        assert_eq!(view.rows[0].fragment_delta.map(|d| d.tone), Some(Tone::Neutral));
        assert_eq!(view.rows[1].soul_delta, None);
        assert_eq!(view.rows[1].fragment_delta, None);
    }

    #[test]
    fn test_rows_keep_order() {
        let records = [record("c", "3", "3"), record("b", "2", "2"), record("a", "1", "1")];
        let view = HistoryView::render(&records, Some(7));
        let ids: Vec<_> = view.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["c", "b", "a"]);
        assert!(!view.show_placeholder());
    }

    #[test]
    fn test_display_limit_uses_buffered_base() {
        let records: Vec<_> = (0..10)
            .map(|i| record(&i.to_string(), &(100 - i * 10).to_string(), "0"))
            .collect();
        let view = HistoryView::render(&records, Some(7));
        assert_eq!(view.rows.len(), 7);
        // Last shown row (index 6) compares against buffered record 7
        assert_eq!(view.rows[6].soul_delta.map(|d| d.value), Some(10));
    }

    #[test]
    fn test_empty_snapshot() {
        let view = HistoryView::render(&[], Some(7));
        assert!(view.rows.is_empty());
        assert!(view.show_placeholder());
    }
}
