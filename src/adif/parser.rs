// ADIF Parser
// Handles ADI files with or without a header, in any tag case
//
// Parsing never fails on bad data: malformed tags, unknown fields and invalid
// values are logged and dropped, and whatever can be salvaged is returned.

use std::borrow::Cow;

use super::record::{Field, Record};
use super::types::DataType;
use super::validate::is_valid;

/// End-of-header marker
const EOH: &[u8] = b"<eoh>";
/// End-of-record marker
const EOR: &[u8] = b"<eor>";

/// Separator placed between NOTES and a merged COMMENT
pub const COMMENT_SEPARATOR: &str = "\\n";

/// Where the parser is relative to the header and record terminators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Before the first `<eoh>`
    PreHeader,
    /// After the header, or from the start if there is no header
    InRecords,
    /// After the final `<eor>`
    Terminal,
}

/// A data specifier exactly as it appears in the file
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawField<'a> {
    name: &'a str,
    length: usize,
    type_tag: Option<&'a str>,
    value: Cow<'a, str>,
}

/// Parse ADI text into records, in source order.
///
/// When `merge_comment` is set, a COMMENT value is folded into NOTES.
pub fn parse_adif(content: &str, merge_comment: bool) -> Vec<Record> {
    parse_adif_bytes(content.as_bytes(), merge_comment)
}

/// Parse raw ADI bytes. Lengths count raw bytes; each value is decoded on its
/// own, with invalid UTF-8 sequences replaced.
pub fn parse_adif_bytes(bytes: &[u8], merge_comment: bool) -> Vec<Record> {
    let (body, chunks) = split_records(bytes);

    let mut records = Vec::with_capacity(chunks.len());
    let mut empty = 0;
    for chunk in chunks {
        let record = build_record(chunk, merge_comment);
        if record.is_empty() {
            log::debug!("Dropping record with no usable fields");
            empty += 1;
            continue;
        }
        log::trace!("Parsed record: {:?}", record);
        records.push(record);
    }

    debug_assert_eq!(
        count_markers(body, EOR),
        records.len() + empty,
        "every <eor> must produce exactly one record or one dropped empty record"
    );

    records
}

/// Find a marker such as `<eor>` case-insensitively, returning its byte offset
fn find_marker(haystack: &[u8], marker: &[u8]) -> Option<usize> {
    haystack
        .windows(marker.len())
        .position(|w| w.eq_ignore_ascii_case(marker))
}

fn count_markers(haystack: &[u8], marker: &[u8]) -> usize {
    let mut count = 0;
    let mut rest = haystack;
    while let Some(i) = find_marker(rest, marker) {
        count += 1;
        rest = &rest[i + marker.len()..];
    }
    count
}

/// Split the input into the record section and its `<eor>`-terminated chunks.
/// Everything up to the first `<eoh>` and everything after the final `<eor>` is dropped.
fn split_records(content: &[u8]) -> (&[u8], Vec<&[u8]>) {
    let mut state = if find_marker(content, EOH).is_some() {
        ParseState::PreHeader
    } else {
        ParseState::InRecords
    };

    let mut body = content;
    let mut rest = content;
    let mut chunks = Vec::new();

    loop {
        match state {
            ParseState::PreHeader => {
                if let Some(i) = find_marker(rest, EOH) {
                    log::trace!("Skipping {} byte header", i);
                    rest = &rest[i + EOH.len()..];
                    body = rest;
                }
                state = ParseState::InRecords;
            }
            ParseState::InRecords => match find_marker(rest, EOR) {
                Some(i) => {
                    chunks.push(&rest[..i]);
                    rest = &rest[i + EOR.len()..];
                }
                None => state = ParseState::Terminal,
            },
            ParseState::Terminal => {
                if !rest.iter().all(u8::is_ascii_whitespace) {
                    log::debug!("Ignoring {} bytes after the final <eor>", rest.len());
                }
                break;
            }
        }
    }

    (body, chunks)
}

/// Characters that end a field value early
fn is_value_boundary(b: u8) -> bool {
    matches!(b, b'<' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// UTF-8 continuation byte (`10xxxxxx`)
fn is_continuation(b: u8) -> bool {
    b & 0xc0 == 0x80
}

/// Extract every `<NAME:LEN[:TYPE]>VALUE` data specifier from a record chunk
fn scan_fields(bytes: &[u8]) -> Vec<RawField<'_>> {
    let mut fields = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let open = match bytes[pos..].iter().position(|&b| b == b'<') {
            Some(offset) => pos + offset,
            None => break,
        };
        let close = match bytes[open + 1..].iter().position(|&b| b == b'>') {
            Some(offset) => open + 1 + offset,
            None => break,
        };

        let tag = &bytes[open + 1..close];

        // A '<' inside the tag means the first one was stray text; restart there
        if let Some(inner) = tag.iter().rposition(|&b| b == b'<') {
            pos = open + 1 + inner;
            continue;
        }
        pos = close + 1;

        let tag = match std::str::from_utf8(tag) {
            Ok(t) => t,
            Err(_) => {
                log::debug!("Skipping tag with non-UTF-8 bytes");
                continue;
            }
        };

        let mut parts = tag.split(':');
        let name = parts.next().unwrap_or_default();
        let length = parts.next().and_then(parse_length);
        let type_tag = parts.next();

        if name.is_empty() || name.chars().any(char::is_whitespace) {
            log::debug!("Skipping malformed tag <{}>", tag);
            continue;
        }
        let length = match length {
            Some(l) => l,
            None => {
                log::debug!("Skipping tag <{}> without a length", tag);
                continue;
            }
        };

        // The value runs for `length` bytes, or up to the first boundary character
        let boundary = bytes[pos..]
            .iter()
            .position(|&b| is_value_boundary(b))
            .map_or(bytes.len(), |offset| pos + offset);
        let mut end = (pos + length).min(boundary);
        // Don't split a UTF-8 character that continues past the declared length
        let mut steps = 0;
        while steps < 3 && end > pos && end < bytes.len() && is_continuation(bytes[end]) {
            end -= 1;
            steps += 1;
        }
        if end - pos < length {
            log::debug!(
                "Field {} declares {} bytes but only {} are available",
                name,
                length,
                end - pos
            );
        }

        fields.push(RawField {
            name,
            length,
            type_tag,
            value: String::from_utf8_lossy(&bytes[pos..end]),
        });
        pos = end;
    }

    fields
}

fn parse_length(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Apply the per-field case rules
fn normalize_value(field: Field, value: &str) -> String {
    match field {
        Field::Call | Field::Mode | Field::Submode => value.to_uppercase(),
        Field::Band => value.to_lowercase(),
        _ => value.to_string(),
    }
}

/// Turn one record chunk into a record of recognized, valid fields
fn build_record(chunk: &[u8], merge_comment: bool) -> Record {
    let mut record = Record::new();
    let mut comment: Option<Cow<'_, str>> = None;

    for raw in scan_fields(chunk) {
        if let Some(tag) = raw.type_tag {
            if DataType::from_tag(tag).is_none() {
                log::debug!("Field {} has unrecognized type indicator '{}'", raw.name, tag);
            }
        }

        if raw.name.eq_ignore_ascii_case("COMMENT") {
            comment = Some(raw.value);
            continue;
        }

        let field = match Field::from_name(raw.name) {
            Some(f) => f,
            None => {
                log::debug!("Dropping unrecognized field {}", raw.name.to_uppercase());
                continue;
            }
        };

        let value = normalize_value(field, &raw.value);
        if value.is_empty() {
            continue;
        }
        if !is_valid(field.name(), &value, field.data_type()) {
            log::warn!(
                "Dropping invalid {} value '{}' (declared {} bytes)",
                field,
                value,
                raw.length
            );
            continue;
        }
        if let Some(previous) = record.set(field, value) {
            log::debug!("Duplicate {} field replaces '{}'", field, previous);
        }
    }

    if merge_comment {
        if let Some(comment) = comment.filter(|c| !c.is_empty()) {
            let notes = match record.remove(Field::Notes) {
                Some(notes) => format!("{}{}{}", notes, COMMENT_SEPARATOR, comment),
                None => comment.to_string(),
            };
            record.set(Field::Notes, notes);
        }
    }

    record
}
