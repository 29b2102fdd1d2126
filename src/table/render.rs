//! Cell rendering
//!
//! Renderers turn a raw [`Value`] into display text for one cell. The layout
//! engine calls them once per cell on every redraw, so they must be pure.
//! Truncation and padding to the column width are helpers used by the layout
//! engine after rendering.

use std::fmt;
use std::rc::Rc;

use super::column::Alignment;
use super::model::Value;

/// Marker appended to truncated cell text
pub const ELLIPSIS: &str = "...";

/// Position of the cell being rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellContext {
    pub row: usize,
    /// Display column (not the model column)
    pub col: usize,
}

impl CellContext {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Anything that can format a value for display
pub trait CellRenderer: fmt::Debug {
    fn render(&self, value: &Value, ctx: CellContext) -> String;
}

/// Default renderer: the value's display form
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl CellRenderer for TextRenderer {
    fn render(&self, value: &Value, _ctx: CellContext) -> String {
        value.to_string()
    }
}

/// Numeric renderer with fixed precision and optional digit grouping
///
/// Values without a numeric view fall back to their display form.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberRenderer {
    /// Digits after the decimal point (None keeps the value's own form)
    pub precision: Option<usize>,
    /// Group integer digits in threes with this separator
    pub thousands_separator: Option<char>,
}

impl NumberRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the decimal precision (builder pattern)
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the thousands separator (builder pattern)
    pub fn with_thousands_separator(mut self, separator: char) -> Self {
        self.thousands_separator = Some(separator);
        self
    }

    fn format_number(&self, value: &Value) -> Option<String> {
        let formatted = match (value, self.precision) {
            (Value::Integer(n), None) => n.to_string(),
            (Value::Float(x), None) => x.to_string(),
            (Value::Text(s), None) => {
                s.trim().parse::<f64>().ok()?;
                s.trim().to_string()
            }
            (Value::Empty | Value::Bool(_), None) => return None,
            (_, Some(precision)) => format!("{:.*}", precision, value.as_f64()?),
        };

        Some(match self.thousands_separator {
            Some(sep) => group_digits(&formatted, sep),
            None => formatted,
        })
    }
}

impl CellRenderer for NumberRenderer {
    fn render(&self, value: &Value, _ctx: CellContext) -> String {
        self.format_number(value)
            .unwrap_or_else(|| value.to_string())
    }
}

/// Insert `sep` between groups of three integer digits: "-1234567.5" -> "-1,234,567.5"
fn group_digits(number: &str, sep: char) -> String {
    let (sign, rest) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match rest.find('.') {
        Some(dot) => rest.split_at(dot),
        None => (rest, ""),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(number.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(*ch);
    }
    grouped.push_str(frac_part);
    grouped
}

/// Renderer backed by a closure
#[derive(Clone)]
pub struct FnRenderer {
    func: Rc<dyn Fn(&Value, CellContext) -> String>,
}

impl FnRenderer {
    pub fn new(func: impl Fn(&Value, CellContext) -> String + 'static) -> Self {
        Self {
            func: Rc::new(func),
        }
    }
}

impl fmt::Debug for FnRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRenderer").finish_non_exhaustive()
    }
}

impl CellRenderer for FnRenderer {
    fn render(&self, value: &Value, ctx: CellContext) -> String {
        (self.func)(value, ctx)
    }
}

/// Truncate text to `width` characters, ending in [`ELLIPSIS`] when cut
///
/// Columns narrower than the marker get a plain cut with no marker.
pub fn truncate_text(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len <= width {
        return s.to_string();
    }

    let marker_len = ELLIPSIS.chars().count();
    if width < marker_len {
        return s.chars().take(width).collect();
    }

    let mut result: String = s.chars().take(width - marker_len).collect();
    result.push_str(ELLIPSIS);
    result
}

/// Pad text with spaces to exactly `width` characters
///
/// Text already at or over `width` is returned unchanged; callers truncate first.
pub fn pad_text(s: &str, width: usize, alignment: Alignment) -> String {
    let len = s.chars().count();
    let extra = width.saturating_sub(len);
    let (left, right) = match alignment {
        Alignment::Left => (0, extra),
        Alignment::Right => (extra, 0),
        Alignment::Center => (extra.div_ceil(2), extra / 2),
    };

    let mut padded = String::with_capacity(s.len() + extra);
    padded.extend(std::iter::repeat(' ').take(left));
    padded.push_str(s);
    padded.extend(std::iter::repeat(' ').take(right));
    padded
}

/// Truncate then pad: the exact text a cell occupies in the grid
pub fn fit_cell(s: &str, width: usize, alignment: Alignment) -> String {
    pad_text(&truncate_text(s, width), width, alignment)
}
