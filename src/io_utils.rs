//! CSV loading for label input files.
//!
//! Label files carry no header row and every record is data. Records are
//! read flexibly so rows of differing lengths reach the label constructor,
//! which owns the field-count rule and reports the offending count.
//!
//! The whole file is read into memory before parsing and the handle is closed
//! as soon as the bytes are in. Quoting is checked strictly on the raw bytes
//! first: the `csv` reader accepts stray and unterminated quotes, and such a
//! file must fail instead of producing a garbled label.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use anyhow::{Context, Result};
use log::debug;
use thiserror::Error;

pub const DEFAULT_CSV_DELIMITER: u8 = b',';

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuoteError {
    #[error("line {line}: bare \" in non-quoted field")]
    BareQuote { line: usize },
    #[error("line {line}: extraneous or missing \" in quoted field")]
    StrayQuote { line: usize },
    #[error("line {line}: quoted field is never closed")]
    Unterminated { line: usize },
}

#[derive(Debug, Clone, Copy)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// Checks that quotes only open a field, close it, or escape another quote.
pub fn check_quoting(input: &[u8]) -> Result<(), QuoteError> {
    let mut state = QuoteState::FieldStart;
    let mut line = 1;
    let mut opened_at = 1;
    for (idx, &byte) in input.iter().enumerate() {
        state = match (state, byte) {
            (QuoteState::FieldStart, b'"') => {
                opened_at = line;
                QuoteState::Quoted
            }
            (QuoteState::Unquoted, b'"') => return Err(QuoteError::BareQuote { line }),
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'\r') if input.get(idx + 1) == Some(&b'\n') => {
                QuoteState::QuoteInQuoted
            }
            (_, b',' | b'\n') => QuoteState::FieldStart,
            (QuoteState::QuoteInQuoted, _) => return Err(QuoteError::StrayQuote { line }),
            (QuoteState::FieldStart | QuoteState::Unquoted, _) => QuoteState::Unquoted,
        };
        if byte == b'\n' {
            line += 1;
        }
    }
    match state {
        QuoteState::Quoted => Err(QuoteError::Unterminated { line: opened_at }),
        _ => Ok(()),
    }
}

pub fn open_csv_reader<R>(reader: R) -> csv::Reader<R>
where
    R: Read,
{
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .delimiter(DEFAULT_CSV_DELIMITER)
        .double_quote(true)
        .flexible(true);
    builder.from_reader(reader)
}

pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).with_context(|| format!("Opening input file {path:?}"))?;
    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .with_context(|| format!("Reading input file {path:?}"))?;
    Ok(bytes)
}

/// Reads every remaining record, failing on the first malformed one.
pub fn read_records<R>(reader: &mut csv::Reader<R>) -> Result<Vec<Vec<String>>>
where
    R: Read,
{
    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Reading record {}", idx + 1))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

pub fn parse_records(input: &[u8]) -> Result<Vec<Vec<String>>> {
    check_quoting(input)?;
    let mut reader = open_csv_reader(input);
    read_records(&mut reader)
}

pub fn read_csv(path: &Path) -> Result<Vec<Vec<String>>> {
    let bytes = read_input(path)?;
    let rows = parse_records(&bytes).with_context(|| format!("Parsing CSV {path:?}"))?;
    debug!("Read {} record(s) from {:?}", rows.len(), path);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_from(input: &[u8]) -> Result<Vec<Vec<String>>> {
        parse_records(input)
    }

    #[test]
    fn first_row_is_data_not_header() {
        let rows = rows_from(b"a,b,c,d,e,f\ng,h,i,j,k,l\n").expect("rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "a");
    }

    #[test]
    fn quoted_fields_keep_commas_and_newlines() {
        let rows = rows_from(b"\"Doe, Jane\",\"1 Main\nRear\",,X,Y,Z\n").expect("rows");
        assert_eq!(rows[0][0], "Doe, Jane");
        assert_eq!(rows[0][1], "1 Main\nRear");
        assert_eq!(rows[0][2], "");
    }

    #[test]
    fn uneven_rows_are_returned_as_is() {
        let rows = rows_from(b"a,b,c,d,e,f\na,b,c\n").expect("rows");
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn blank_lines_are_not_rows() {
        let rows = rows_from(b"a,b,c,d,e,f\n\n\ng,h,i,j,k,l\n").expect("rows");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn invalid_utf8_names_the_record() {
        let err = rows_from(b"a,b,c,d,e,f\n\xff,b,c,d,e,f\n").expect_err("invalid utf-8");
        assert!(format!("{err:#}").contains("Reading record 2"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_csv(Path::new("definitely/not/here.csv")).expect_err("missing file");
        let message = format!("{err:#}");
        assert!(message.contains("Opening input file"));
        assert!(message.contains("here.csv"));
    }

    #[test]
    fn escaped_quotes_and_crlf_endings_pass_the_quote_check() {
        let input = b"\"Jane \"\"JD\"\" Doe\",\"1 Main\"\r\n\"\",b,,c,d,e\r\n";
        assert_eq!(check_quoting(input), Ok(()));
        let rows = rows_from(input).expect("rows");
        assert_eq!(rows[0][0], "Jane \"JD\" Doe");
        assert_eq!(rows[1][0], "");
    }

    #[test]
    fn quote_inside_unquoted_field_is_rejected() {
        assert_eq!(
            check_quoting(b"a,b,c,d,e,f\nJa\"ne,b,,c,d,e\n"),
            Err(QuoteError::BareQuote { line: 2 })
        );
    }

    #[test]
    fn text_after_closing_quote_is_rejected() {
        assert_eq!(
            check_quoting(b"\"Jane\" Doe,b,,c,d,e\n"),
            Err(QuoteError::StrayQuote { line: 1 })
        );
    }

    #[test]
    fn unterminated_quote_reports_opening_line() {
        assert_eq!(
            check_quoting(b"a,b,,c,d,e\nJane,1 Main,,Town,IL,\"62704\n"),
            Err(QuoteError::Unterminated { line: 2 })
        );
        let err = rows_from(b"Jane,1 Main,,Town,IL,\"62704\n").expect_err("unterminated");
        assert!(format!("{err:#}").contains("quoted field is never closed"));
    }
}
