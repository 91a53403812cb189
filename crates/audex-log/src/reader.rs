use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use audex_types::{AuditRecord, Error, Result};

use crate::quote::normalize_escaped_quotes;

/// Streaming reader over an audit log file.
///
/// Yields one `AuditRecord` per non-empty line, in input order, tracking
/// 1-based line numbers for error reporting. Each line is quote-normalized
/// and then tokenized with a single-quote CSV parser, so query text with
/// embedded commas and quotes lands in one field. A record with fewer than
/// `AuditRecord::MIN_FIELDS` fields is a hard error, as is any IO failure;
/// consumers propagate both and abort the run.
pub struct AuditLogReader<R> {
    lines: Lines<R>,
    line_no: u64,
}

impl AuditLogReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> AuditLogReader<R> {
    pub fn new(reader: R) -> Self {
        AuditLogReader {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for AuditLogReader<R> {
    type Item = Result<AuditRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err.into())),
            };
            self.line_no += 1;

            // Tolerate CRLF input; skip blank lines (trailing newline at EOF)
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }

            return Some(parse_record(line, self.line_no));
        }
    }
}

/// Parse one raw audit log line into a record
pub fn parse_record(line: &str, line_no: u64) -> Result<AuditRecord> {
    let normalized = normalize_escaped_quotes(line);
    let fields = split_fields(&normalized, line_no)?;

    if fields.len() < AuditRecord::MIN_FIELDS {
        return Err(Error::malformed(
            line_no,
            format!(
                "expected at least {} fields, got {}",
                AuditRecord::MIN_FIELDS,
                fields.len()
            ),
        ));
    }

    Ok(AuditRecord::new(line_no, fields))
}

/// Tokenize one line with quote character `'` and doubling as the escape.
///
/// A reader is built per line, as the normalization rewrite must run before
/// field boundaries exist; there is no intermediate file.
fn split_fields(line: &str, line_no: u64) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .quote(b'\'')
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    let got = reader
        .read_record(&mut record)
        .map_err(|err| Error::malformed(line_no, err.to_string()))?;
    if !got {
        return Err(Error::malformed(line_no, "empty record"));
    }

    Ok(record.iter().map(|field| field.to_string()).collect())
}
