use crate::domain::model::UserRecord;
use crate::utils::error::{ImportError, Result};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

pub const FIELD_DELIMITER: u8 = b';';
const FIELDS_PER_ROW: usize = 5;

/// Reads every user row of `path`. The first row is always a header.
pub fn read_users(path: &Path) -> Result<Vec<UserRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ImportError::InputFileNotFound {
            path: path.display().to_string(),
        },
        _ => ImportError::IoError(e),
    })?;

    let users = parse_users(file)?;
    tracing::debug!("Read {} users from {}", users.len(), path.display());
    Ok(users)
}

pub fn parse_users<R: Read>(mut reader: R) -> Result<Vec<UserRecord>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    check_quotes(content.as_bytes())?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut users = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();

        if row.len() != FIELDS_PER_ROW {
            return Err(ImportError::MalformedRow {
                line,
                found: row.len(),
            });
        }

        users.push(UserRecord {
            first_name: row[0].to_string(),
            last_name: row[1].to_string(),
            email: row[2].to_string(),
            username: row[3].to_string(),
            password: row[4].trim().to_string(),
            line,
        });
    }

    Ok(users)
}

/// The csv reader accepts stray and unterminated quotes as data. Reject
/// them instead: a quote may only open a field, and a quoted field must be
/// closed right before a delimiter, a line break or the end of input.
fn check_quotes(input: &[u8]) -> Result<()> {
    let mut line: u64 = 1;
    let mut quote_line = line;
    let mut in_quotes = false;
    let mut field_start = true;
    let mut i = 0;

    while i < input.len() {
        let byte = input[i];
        if in_quotes {
            match byte {
                b'"' if input.get(i + 1) == Some(&b'"') => i += 1,
                b'"' => {
                    in_quotes = false;
                    match input.get(i + 1) {
                        None | Some(b'\n') | Some(b'\r') => {}
                        Some(&next) if next == FIELD_DELIMITER => {}
                        Some(_) => return Err(ImportError::MalformedQuote { line }),
                    }
                }
                b'\n' => line += 1,
                _ => {}
            }
        } else {
            match byte {
                b'"' if field_start => {
                    in_quotes = true;
                    quote_line = line;
                }
                b'"' => return Err(ImportError::MalformedQuote { line }),
                b'\n' => line += 1,
                _ => {}
            }
            field_start = byte == FIELD_DELIMITER || byte == b'\n';
        }
        i += 1;
    }

    if in_quotes {
        return Err(ImportError::MalformedQuote { line: quote_line });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "first_name;last_name;email;username;password\n";

    #[test]
    fn test_header_is_skipped_and_order_kept() {
        let input = format!(
            "{HEADER}Jane;Doe;jane@x.com;jdoe;pw1\nJohn;Roe;john@x.com;jroe;pw2\nAda;Byron;ada@x.com;ada;pw3\n"
        );
        let users = parse_users(input.as_bytes()).unwrap();

        assert_eq!(users.len(), 3);
        let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["jdoe", "jroe", "ada"]);
        assert_eq!(users[0].line, 2);
        assert_eq!(users[2].line, 4);
    }

    #[test]
    fn test_header_contents_never_become_a_record() {
        // A header that looks like data is still dropped.
        let input = "Jane;Doe;jane@x.com;jdoe;pw\nJohn;Roe;john@x.com;jroe;pw2\n";
        let users = parse_users(input.as_bytes()).unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "jroe");
    }

    #[test]
    fn test_password_is_trimmed_other_fields_are_not() {
        let input = format!("{HEADER}Jane;Doe;jane@x.com;jdoe;  secret123  \n");
        let users = parse_users(input.as_bytes()).unwrap();

        assert_eq!(users[0].password, "secret123");
        assert_eq!(users[0].username, "jdoe");
        assert_eq!(users[0].first_name, "Jane");
        assert_eq!(users[0].email, "jane@x.com");
    }

    #[test]
    fn test_header_only_and_empty_input() {
        assert!(parse_users(HEADER.as_bytes()).unwrap().is_empty());
        assert!(parse_users("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_quoted_field_may_contain_delimiter() {
        let input = format!("{HEADER}\"Mary;Ann\";Lee;mary@x.com;mlee;pw\n");
        let users = parse_users(input.as_bytes()).unwrap();
        assert_eq!(users[0].first_name, "Mary;Ann");
    }

    #[test]
    fn test_unterminated_quote_is_rejected() {
        let input = format!("{HEADER}Jane;Doe;jane@x.com;jdoe;\"secret\nJohn;Roe;john@x.com;jroe;pw\n");
        assert!(matches!(
            parse_users(input.as_bytes()),
            Err(ImportError::MalformedQuote { line: 2 })
        ));
    }

    #[test]
    fn test_stray_quote_in_unquoted_field_is_rejected() {
        let input = format!("{HEADER}Jane;Doe;jane@x.com;jdoe;pw\nJa\"ne;Doe;jane@x.com;jdoe;pw\n");
        assert!(matches!(
            parse_users(input.as_bytes()),
            Err(ImportError::MalformedQuote { line: 3 })
        ));
    }

    #[test]
    fn test_text_after_closing_quote_is_rejected() {
        let input = format!("{HEADER}\"Jane\"x;Doe;jane@x.com;jdoe;pw\n");
        assert!(matches!(
            parse_users(input.as_bytes()),
            Err(ImportError::MalformedQuote { line: 2 })
        ));
    }

    #[test]
    fn test_escaped_quotes_and_multiline_fields_are_accepted() {
        let input = format!(
            "{HEADER}\"Jane \"\"JJ\"\"\";Doe;jane@x.com;jdoe;\"pw\"\r\n\"Mary\nAnn\";Lee;mary@x.com;mlee;pw\n"
        );
        let users = parse_users(input.as_bytes()).unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].first_name, "Jane \"JJ\"");
        assert_eq!(users[0].password, "pw");
        assert_eq!(users[1].first_name, "Mary\nAnn");
    }

    #[test]
    fn test_short_row_is_reported_with_line() {
        let input = format!("{HEADER}Jane;Doe;jane@x.com;jdoe;pw\nJohn;Roe;john@x.com\n");
        let err = parse_users(input.as_bytes()).unwrap_err();

        match err {
            ImportError::MalformedRow { line, found } => {
                assert_eq!(line, 3);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_long_row_is_rejected() {
        let input = format!("{HEADER}Jane;Doe;jane@x.com;jdoe;pw;extra\n");
        assert!(matches!(
            parse_users(input.as_bytes()),
            Err(ImportError::MalformedRow { found: 6, .. })
        ));
    }

    #[test]
    fn test_read_users_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{HEADER}Jane;Doe;jane@x.com;jdoe;pw\n").unwrap();

        let users = read_users(file.path()).unwrap();
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn test_read_users_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_users(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, ImportError::InputFileNotFound { .. }));
    }
}
