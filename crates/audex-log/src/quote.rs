/// Rewrite backslash-escaped single quotes into doubled single quotes.
///
/// Query text in the audit log escapes embedded quotes as `\'`, which a
/// quote-doubling tokenizer cannot see past. The rewrite runs over the whole
/// raw line because field boundaries are not known before splitting.
pub fn normalize_escaped_quotes(line: &str) -> String {
    line.replace("\\'", "''")
}
