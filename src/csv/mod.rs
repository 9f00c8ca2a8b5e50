//! Quote-aware CSV tokenizer.
//!
//! Converts raw text into a matrix of string cells. Quoted fields may contain
//! commas, line breaks and doubled quotes. The tokenizer never fails: any input
//! produces some matrix, and stray quotes simply toggle the quoted state.

/// A single tokenized row.
pub type Row = Vec<String>;

/// Splits `text` into rows of fields.
///
/// Scans left to right with a single "inside quotes" flag:
/// - `""` inside quotes emits one literal quote
/// - any other `"` toggles quoting
/// - `,` outside quotes ends the field
/// - `\n`, `\r` or `\r\n` outside quotes ends the field and the row
///
/// A trailing field or row without a final terminator is flushed at end of input.
///
/// # Examples
///
/// ```
/// use bible_journey::csv::tokenize;
///
/// let rows = tokenize("number,reference\n7,\"Gen 1:7, KJV\"\n");
/// assert_eq!(rows, vec![
///     vec!["number".to_string(), "reference".to_string()],
///     vec!["7".to_string(), "Gen 1:7, KJV".to_string()],
/// ]);
/// ```
pub fn tokenize(text: &str) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut row: Row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(std::mem::take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Returns true when every cell of `row` is empty after trimming.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Removes rows that hold no visible content.
pub fn drop_blank_rows(rows: Vec<Row>) -> Vec<Row> {
    rows.into_iter().filter(|row| !is_blank_row(row)).collect()
}

/// Quotes a value for CSV output when it contains a delimiter, quote or line break.
///
/// Internal quotes are doubled. Values that need no quoting are returned as-is,
/// so the output always tokenizes back to the original string.
///
/// # Examples
///
/// ```
/// use bible_journey::csv::quote_field;
///
/// assert_eq!(quote_field("plain"), "plain");
/// assert_eq!(quote_field("a,b"), "\"a,b\"");
/// assert_eq!(quote_field("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
pub fn quote_field(value: &str) -> String {
    let escaped = value.replace('"', "\"\"");
    if escaped.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_simple_rows() {
        let rows = tokenize("a,b,c\n1,2,3\n");
        assert_eq!(rows, vec![row(&["a", "b", "c"]), row(&["1", "2", "3"])]);
    }

    #[test]
    fn test_trailing_row_without_terminator() {
        let rows = tokenize("a,b\n1,2");
        assert_eq!(rows, vec![row(&["a", "b"]), row(&["1", "2"])]);
    }

    #[test]
    fn test_trailing_empty_field_is_flushed() {
        // "1," leaves an empty pending field after the comma
        let rows = tokenize("a,b\n1,");
        assert_eq!(rows, vec![row(&["a", "b"]), row(&["1", ""])]);
    }

    #[test]
    fn test_crlf_counts_as_single_terminator() {
        let rows = tokenize("a,b\r\n1,2\r\n");
        assert_eq!(rows, vec![row(&["a", "b"]), row(&["1", "2"])]);
    }

    #[test]
    fn test_bare_carriage_return_terminates_row() {
        let rows = tokenize("a\r1\r");
        assert_eq!(rows, vec![row(&["a"]), row(&["1"])]);
    }

    #[test]
    fn test_quoted_field_with_comma_and_newline() {
        let rows = tokenize("ref,text\n\"Gen 1:1\",\"In the beginning,\nGod\"\n");
        assert_eq!(
            rows,
            vec![row(&["ref", "text"]), row(&["Gen 1:1", "In the beginning,\nGod"])]
        );
    }

    #[test]
    fn test_escaped_quotes_round_trip() {
        // Literal field: a,"b""c"<newline>d
        let literal = "a,\"b\"\"c\"\nd";
        let quoted = "\"a,\"\"b\"\"\"\"c\"\"\nd\"";
        let rows = tokenize(quoted);
        assert_eq!(rows, vec![row(&[literal])]);
        assert_eq!(quote_field(literal), quoted);
    }

    #[test]
    fn test_quote_in_middle_of_field_toggles() {
        // Unbalanced quoting keeps the comma inside the field
        let rows = tokenize("ab\"c,d\"e\n");
        assert_eq!(rows, vec![row(&["abc,de"])]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_blank_lines_yield_blank_rows() {
        let rows = tokenize("a\n\n  ,\t\nb\n");
        assert_eq!(rows.len(), 4);
        let kept = drop_blank_rows(rows);
        assert_eq!(kept, vec![row(&["a"]), row(&["b"])]);
    }

    #[test]
    fn test_quote_field_line_breaks() {
        assert_eq!(quote_field("line1\nline2"), "\"line1\nline2\"");
        assert_eq!(quote_field("line1\rline2"), "\"line1\rline2\"");
        assert_eq!(quote_field(""), "");
    }

    #[test]
    fn test_quote_field_output_tokenizes_back() {
        let originals = ["He said, \"Let there be light\"", "plain", "x\r\ny", "\"\""];
        let line = originals
            .iter()
            .map(|v| quote_field(v))
            .collect::<Vec<_>>()
            .join(",");
        let rows = tokenize(&line);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], row(&originals));
    }
}
