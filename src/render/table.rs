//! Boxed table presentation of a `RenderResult`.
//!
//! ```text
//! ┌────  Flagged items by age ─────┐
//! │ base 0, bin width 7            │
//! │  0 -  6 2 ++++++++++---------- │
//! │  7 - 13 1 ##########           │
//! └────────────────────────────────┘
//! ```

use std::io::{self, Write};

use crate::core::{
    bounds::{format_label, label_width},
    constants::COLUMN_GUTTER,
    histogram::RenderResult,
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";

/// Write centred text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  "); // 2-char left padding
    buf.push_str(text);
    buf.push(' '); // 1-char right padding
    buf.push_str(&H.repeat(pad_right));
}

/// Pad `text` to `width` display columns inside the side borders.
fn push_boxed(buf: &mut String, text: &str, width: usize) {
    let len = text.chars().count();
    buf.push_str(V);
    buf.push(' ');
    buf.push_str(text);
    buf.push_str(&" ".repeat(width.saturating_sub(len + 2)));
    buf.push(' ');
    buf.push_str(V);
    buf.push('\n');
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    pub title: String,
    pub footer: Option<String>,
}

impl Table {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            footer: None,
        }
    }

    #[must_use]
    pub fn footer(mut self, footer: Option<String>) -> Self {
        self.footer = footer;
        self
    }

    /// Lay out every row as `low - high value bar`.
    #[must_use]
    pub fn format(&self, result: &RenderResult) -> String {
        let (lw, vw) = column_widths(result);
        let gutter = " ".repeat(COLUMN_GUTTER);

        let rows: Vec<String> = result
            .rows
            .iter()
            .map(|r| {
                format!(
                    "{:>lw$} - {:>lw$}{gutter}{:>vw$}{gutter}{}",
                    format_label(r.low),
                    format_label(r.high),
                    r.value,
                    r.bar,
                )
            })
            .collect();
        let header = format!(
            "base {}, bin width {}",
            format_label(result.base),
            format_label(result.bin_size)
        );

        // inner width between the two borders
        let inner = rows
            .iter()
            .chain(std::iter::once(&header))
            .map(|r| r.chars().count() + 2)
            .chain(std::iter::once(self.title.chars().count() + TITLE_PADDING))
            .chain(self.footer.iter().map(|f| f.chars().count() + TITLE_PADDING))
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        out.push_str(TL);
        push_centered(&mut out, &self.title, inner);
        out.push_str(TR);
        out.push('\n');

        push_boxed(&mut out, &header, inner);
        for row in &rows {
            push_boxed(&mut out, row, inner);
        }

        out.push_str(BL);
        match &self.footer {
            Some(f) => push_centered(&mut out, f, inner),
            None => out.push_str(&H.repeat(inner)),
        }
        out.push_str(BR);
        out.push('\n');
        out
    }

    pub fn write_to<W: Write>(&self, out: &mut W, result: &RenderResult) -> io::Result<()> {
        out.write_all(self.format(result).as_bytes())?;
        out.flush()
    }
}

/// `(label column, value column)` widths for `result`.
#[must_use]
pub fn column_widths(result: &RenderResult) -> (usize, usize) {
    let lw = result
        .rows
        .iter()
        .map(|r| label_width(r.low, r.high))
        .max()
        .unwrap_or(1);
    let vw = result
        .rows
        .iter()
        .map(|r| r.value.to_string().len())
        .max()
        .unwrap_or(1);
    (lw, vw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::histogram::BinRow;

    fn result() -> RenderResult {
        RenderResult {
            base: 0.0,
            bin_size: 7.0,
            bin_count: 2,
            scale: 10.0,
            rows: vec![
                BinRow {
                    low: 0.0,
                    high: 6.0,
                    value: 2,
                    bar: "++++++++++----------".into(),
                },
                BinRow {
                    low: 7.0,
                    high: 13.0,
                    value: -1,
                    bar: "##########".into(),
                },
            ],
        }
    }

    #[test]
    fn rows_are_aligned() {
        let text = Table::new("ages").format(&result());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("base 0, bin width 7"));
        assert!(lines[2].starts_with("│  0 -  6  2 ++++++++++----------"));
        assert!(lines[3].starts_with("│  7 - 13 -1 ##########"));
    }

    #[test]
    fn every_line_has_equal_width() {
        let text = Table::new("Flagged items by age")
            .footer(Some("scale 10".into()))
            .format(&result());
        let widths: Vec<usize> = text.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
        assert!(text.contains("Flagged items by age"));
        assert!(text.contains("scale 10"));
    }

    #[test]
    fn column_widths_cover_negatives() {
        assert_eq!(column_widths(&result()), (2, 2));
    }
}
