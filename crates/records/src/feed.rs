use crate::error::{RecordsError, Result};
use crate::record::RawRow;

/// Parses CSV text into header-keyed rows.
///
/// The first record is the header; every following record becomes one
/// `RawRow` keyed by the trimmed header names. Quoted fields with `""`
/// escapes and CRLF line endings are handled; records that are entirely
/// empty are skipped. A stray quote inside an unquoted field is kept
/// literally rather than rejected, since the feed is hand-authored.
pub fn parse_csv(text: &str) -> Result<Vec<RawRow>> {
    let mut table = parse_table(text)?;
    if table.is_empty() {
        return Ok(Vec::new());
    }

    let header: Vec<String> = table
        .remove(0)
        .into_iter()
        .map(|name| name.trim().to_string())
        .collect();

    let mut rows = Vec::with_capacity(table.len());
    for fields in table {
        if fields.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let row: RawRow = header
            .iter()
            .cloned()
            .zip(fields)
            .filter(|(key, _)| !key.is_empty())
            .collect();
        rows.push(row);
    }

    log::debug!("parsed {} feed rows ({} columns)", rows.len(), header.len());
    Ok(rows)
}

fn parse_table(text: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\n' => {
                    field.push(ch);
                    line += 1;
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                end_record(&mut records, &mut fields, &mut field);
                line += 1;
            }
            '\n' => {
                end_record(&mut records, &mut fields, &mut field);
                line += 1;
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(RecordsError::Csv {
            line,
            message: "unterminated quoted field".to_string(),
        });
    }
    if !field.is_empty() || !fields.is_empty() {
        end_record(&mut records, &mut fields, &mut field);
    }

    Ok(records)
}

fn end_record(records: &mut Vec<Vec<String>>, fields: &mut Vec<String>, field: &mut String) {
    fields.push(std::mem::take(field));
    records.push(std::mem::take(fields));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_keys_each_row() {
        let text = "ID,Questions,Answer\n1,When is the wedding?,Jan 17\n2,Where?,Cibinong\n";
        let rows = parse_csv(text).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Questions"], "When is the wedding?");
        assert_eq!(rows[1]["Answer"], "Cibinong");
    }

    #[test]
    fn quoted_fields_keep_commas_and_newlines() {
        let text = "Questions,Answer\n\"What, exactly?\",\"Line one\nline two\"\n";
        let rows = parse_csv(text).unwrap();

        assert_eq!(rows[0]["Questions"], "What, exactly?");
        assert_eq!(rows[0]["Answer"], "Line one\nline two");
    }

    #[test]
    fn doubled_quotes_are_unescaped() {
        let text = "Q,A\n\"say \"\"hi\"\"\",ok\n";
        let rows = parse_csv(text).unwrap();
        assert_eq!(rows[0]["Q"], "say \"hi\"");
    }

    #[test]
    fn crlf_and_blank_records_are_tolerated() {
        let text = "Q,A\r\nfirst,1\r\n,\r\nsecond,2\r\n";
        let rows = parse_csv(text).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["Q"], "second");
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        let err = parse_csv("Q,A\n\"open,1\n").unwrap_err();
        assert!(matches!(err, RecordsError::Csv { .. }));
    }

    #[test]
    fn empty_text_yields_no_rows() {
        assert!(parse_csv("").unwrap().is_empty());
        assert!(parse_csv("Q,A\n").unwrap().is_empty());
    }

    #[test]
    fn short_records_simply_omit_trailing_columns() {
        let text = "Q,A,Extra\nonly-q\n";
        let rows = parse_csv(text).unwrap();

        assert_eq!(rows[0].get("Q").map(String::as_str), Some("only-q"));
        assert_eq!(rows[0].get("A"), None);
    }
}
