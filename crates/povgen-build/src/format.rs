//! String helpers for laying out generated source.

use thiserror::Error as ThisError;

/// Default indentation unit.
pub const INDENT: &str = "    ";

/// Default width of a divider line.
pub const DIVIDER_WIDTH: usize = 80;

/// Default column at which header comments wrap.
pub const WRAP_WIDTH: usize = 77;

/// Length of the divider template the rule is cut from.
pub const DIVIDER_TEMPLATE_LEN: usize = 132;

///
/// FormatError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FormatError {
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

///
/// Divider
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Divider {
    Single,
    Double,
}

impl Divider {
    #[must_use]
    pub const fn rule_char(self) -> char {
        match self {
            Self::Single => '-',
            Self::Double => '=',
        }
    }

    /// `//` followed by the rule character out to the template length.
    fn template(self) -> String {
        let mut line = String::with_capacity(DIVIDER_TEMPLATE_LEN);
        line.push_str("//");
        line.extend(std::iter::repeat_n(
            self.rule_char(),
            DIVIDER_TEMPLATE_LEN - 2,
        ));

        line
    }
}

///
/// Side
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

#[must_use]
pub fn tab(stops: usize, unit: &str) -> String {
    unit.repeat(stops)
}

/// Comment rule exactly `max_len` characters wide, indented by `stops`
/// default units. Capped at the template length.
#[must_use]
pub fn divider(stops: usize, style: Divider, max_len: usize) -> String {
    divider_with(INDENT, stops, style, max_len)
}

/// [`divider`] with a custom indentation unit.
#[must_use]
pub fn divider_with(unit: &str, stops: usize, style: Divider, max_len: usize) -> String {
    let tabs = tab(stops, unit);
    let rule_len = max_len.saturating_sub(tabs.chars().count());

    let mut line = tabs;
    line.extend(style.template().chars().take(rule_len));

    line
}

#[must_use]
pub fn pad(text: &str, count: usize, ch: char, side: Side) -> String {
    let padding: String = std::iter::repeat_n(ch, count).collect();

    match side {
        Side::Left => padding + text,
        Side::Right => format!("{text}{padding}"),
    }
}

/// Right-pad every cell to its column's widest entry, then join cells
/// directly and rows with newlines.
pub fn align<R, S>(rows: &[R]) -> Result<String, FormatError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let Some(first) = rows.first() else {
        return Ok(String::new());
    };
    let expected = first.as_ref().len();

    let mut widths = vec![0; expected];
    for (row, cells) in rows.iter().enumerate() {
        let cells = cells.as_ref();
        if cells.len() != expected {
            return Err(FormatError::RaggedRows {
                row,
                expected,
                found: cells.len(),
            });
        }

        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.as_ref().chars().count());
        }
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|cells| {
            cells
                .as_ref()
                .iter()
                .zip(&widths)
                .map(|(cell, width)| {
                    let cell = cell.as_ref();
                    pad(cell, width - cell.chars().count(), ' ', Side::Right)
                })
                .collect()
        })
        .collect();

    Ok(lines.join("\n"))
}

/// Greedy word wrap. Each line holds at most `width` characters of text
/// (a longer word sits alone) and starts with `prefix`.
#[must_use]
pub fn wrap(text: &str, prefix: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let len = line.chars().count();

        if len > 0 && len + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
        .iter()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn divider_is_exactly_max_len() {
        let line = divider(0, Divider::Single, 80);
        assert_eq!(line.len(), 80);
        assert!(line.starts_with("//---"));

        let line = divider(2, Divider::Double, 80);
        assert_eq!(line.len(), 80);
        assert!(line.starts_with("        //==="));
    }

    #[test]
    fn divider_is_capped_by_the_template() {
        assert_eq!(divider(0, Divider::Single, 200).len(), DIVIDER_TEMPLATE_LEN);
    }

    #[test]
    fn divider_with_custom_unit() {
        let line = divider_with("\t", 1, Divider::Single, 10);
        assert_eq!(line, "\t//-------");
    }

    #[test]
    fn pad_both_sides() {
        assert_eq!(pad("ab", 3, '.', Side::Left), "...ab");
        assert_eq!(pad("ab", 2, ' ', Side::Right), "ab  ");
        assert_eq!(pad("ab", 0, '*', Side::Right), "ab");
    }

    #[test]
    fn align_lines_up_columns() {
        let rows = [
            ["finite:", " ", "Some(Value::Bool(true)),"],
            ["csgOperand:", " ", "None,"],
        ];

        let out = align(&rows).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "finite:     Some(Value::Bool(true)),");
        assert_eq!(lines[1].trim_end(), "csgOperand: None,");
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn align_empty_is_empty() {
        let rows: [[&str; 0]; 0] = [];
        assert_eq!(align(&rows).unwrap(), "");
    }

    #[test]
    fn align_rejects_ragged_rows() {
        let rows = vec![vec!["a", "b"], vec!["c"]];

        assert_eq!(
            align(&rows),
            Err(FormatError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn wrap_breaks_on_words() {
        let out = wrap("aaa bbb ccc", "// ", 7);
        assert_eq!(out, "// aaa bbb\n// ccc");
    }

    #[test]
    fn wrap_keeps_long_words_whole() {
        let out = wrap("tiny enormousword tiny", "", 5);
        assert_eq!(out, "tiny\nenormousword\ntiny");
    }

    proptest! {
        #[test]
        fn divider_width_is_fixed(stops in 0usize..8, max_len in 40usize..=132) {
            let line = divider(stops, Divider::Single, max_len);

            prop_assert_eq!(line.chars().count(), max_len);
            prop_assert!(line.starts_with(&tab(stops, INDENT)));
        }

        #[test]
        fn aligned_columns_share_offsets(
            rows in prop::collection::vec(prop::collection::vec("[a-z]{0,6}", 3), 1..6)
        ) {
            let out = align(&rows).unwrap();
            let lines: Vec<&str> = out.split('\n').collect();
            prop_assert_eq!(lines.len(), rows.len());

            let width = lines[0].len();
            for line in &lines {
                prop_assert_eq!(line.len(), width);
            }

            // every cell starts at the same offset on every line
            let mut offset = 0;
            for col in 0..3 {
                for (line, row) in lines.iter().zip(&rows) {
                    prop_assert!(line[offset..].starts_with(row[col].as_str()));
                }
                offset += rows.iter().map(|r| r[col].len()).max().unwrap_or(0);
            }
        }

        #[test]
        fn wrapped_lines_fit(words in prop::collection::vec("[a-z]{1,8}", 0..30), width in 8usize..40) {
            let text = words.join(" ");
            let out = wrap(&text, "// ", width);

            for line in out.lines() {
                let body = line.strip_prefix("// ").unwrap();
                prop_assert!(body.len() <= width);
            }

            let rejoined: Vec<&str> = out
                .lines()
                .flat_map(|l| l.trim_start_matches("// ").split(' '))
                .filter(|w| !w.is_empty())
                .collect();
            prop_assert_eq!(rejoined, words);
        }
    }
}
