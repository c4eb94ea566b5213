//! Line/column positioning over source text.
//!
//! This is deliberately not a parser: markers are found by first match and
//! brackets are balanced by character, so `{` or `}` inside strings or
//! comments will confuse [`match_bracket`].

use regex::Regex;

/// A position inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number
    pub line: usize,
    /// 0-based byte offset within the line
    pub column: usize,
}

/// Something to search for in a text.
#[derive(Debug, Clone)]
pub enum Pattern {
    Literal(String),
    Regex(Regex),
}

impl Pattern {
    pub fn literal(text: impl Into<String>) -> Self {
        Pattern::Literal(text.into())
    }

    /// Byte offset of the first match in `content`.
    pub fn find(&self, content: &str) -> Option<usize> {
        match self {
            Pattern::Literal(text) => content.find(text.as_str()),
            Pattern::Regex(re) => re.find(content).map(|m| m.start()),
        }
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Pattern::Regex(re)
    }
}

/// Convert a byte offset into a [`Position`].
pub fn position_of(content: &str, offset: usize) -> Position {
    let before = &content[..offset];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    Position {
        line: before.matches('\n').count() + 1,
        column: offset - line_start,
    }
}

/// Byte offset at which a [`Position`] points, if it lies inside `content`.
fn offset_of(content: &str, pos: Position) -> Option<usize> {
    if pos.line == 0 {
        return None;
    }
    let line_start = if pos.line == 1 {
        0
    } else {
        content.match_indices('\n').nth(pos.line - 2).map(|(i, _)| i + 1)?
    };
    let offset = line_start + pos.column;
    (offset < content.len()).then_some(offset)
}

/// Find the first occurrence of `marker` in `content`.
pub fn find_marker(content: &str, marker: &Pattern) -> Option<Position> {
    marker.find(content).map(|offset| position_of(content, offset))
}

/// Find the `}` that closes the `{` at `open`.
///
/// Returns `None` if `open` does not point at a `{` or the bracket is never closed.
pub fn match_bracket(content: &str, open: Position) -> Option<Position> {
    let start = offset_of(content, open)?;
    if content.as_bytes()[start] != b'{' {
        return None;
    }

    let mut depth = 0usize;
    for (i, byte) in content.bytes().enumerate().skip(start) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(position_of(content, i));
                }
            }
            _ => {}
        }
    }
    None
}

/// The bracketed block of an index file that lists exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportZone {
    /// Line holding the marker and the opening bracket
    pub begin_line: usize,
    /// Line holding the matching closing bracket
    pub end_line: usize,
}

impl ExportZone {
    /// A zone is empty when nothing sits between the marker and the closing bracket.
    pub fn is_empty(&self) -> bool {
        self.end_line == self.begin_line + 1
    }
}

/// Locate the export zone introduced by `marker`, which must contain the opening `{`.
///
/// A zone that opens and closes on the marker line is not locatable: there is
/// no line to insert before.
pub fn locate_export_zone(content: &str, marker: &str) -> Option<ExportZone> {
    let bracket = marker.find('{')?;
    let begin = find_marker(content, &Pattern::literal(marker))?;
    let end = match_bracket(
        content,
        Position {
            line: begin.line,
            column: begin.column + bracket,
        },
    )?;

    (end.line > begin.line).then_some(ExportZone {
        begin_line: begin.line,
        end_line: end.line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_marker_literal() {
        let content = "import A from './a';\n\nexport {\n  A\n};\n";
        let pos = find_marker(content, &Pattern::literal("export {")).unwrap();
        assert_eq!(pos, Position { line: 3, column: 0 });
    }

    #[test]
    fn test_find_marker_reports_column() {
        let content = "first\n  second {\n";
        let pos = find_marker(content, &Pattern::literal("second")).unwrap();
        assert_eq!(pos, Position { line: 2, column: 2 });
    }

    #[test]
    fn test_find_marker_regex_uses_first_match() {
        let content = "a1\nb22\nc333\n";
        let re = Regex::new(r"[a-z]\d{2}").unwrap();
        let pos = find_marker(content, &re.into()).unwrap();
        assert_eq!(pos.line, 2);
    }

    #[test]
    fn test_find_marker_not_found() {
        assert!(find_marker("nothing here", &Pattern::literal("export {")).is_none());
    }

    #[test]
    fn test_match_bracket_simple_block() {
        let content = "{\n  User,\n  Posts\n}";
        let open = find_marker(content, &Pattern::literal("{")).unwrap();
        let close = match_bracket(content, open).unwrap();
        assert_eq!(close, Position { line: 4, column: 0 });
    }

    #[test]
    fn test_match_bracket_skips_nested_pairs() {
        let content = "export {\n  a: { b: {} },\n  c\n};\n";
        let close = match_bracket(content, Position { line: 1, column: 7 }).unwrap();
        assert_eq!(close, Position { line: 4, column: 0 });
    }

    #[test]
    fn test_match_bracket_requires_opening_bracket() {
        let content = "export {\n}\n";
        assert!(match_bracket(content, Position { line: 1, column: 0 }).is_none());
        assert!(match_bracket(content, Position { line: 9, column: 0 }).is_none());
    }

    #[test]
    fn test_match_bracket_unbalanced() {
        let content = "export {\n  a,\n";
        assert!(match_bracket(content, Position { line: 1, column: 7 }).is_none());
    }

    #[test]
    fn test_export_zone_non_empty() {
        let zone = locate_export_zone("{\n  User,\n  Posts\n}", "{").unwrap();
        assert_eq!(zone.begin_line, 1);
        assert_eq!(zone.end_line, 4);
        assert!(!zone.is_empty());
    }

    #[test]
    fn test_export_zone_empty() {
        let zone = locate_export_zone("import A from './a';\nexport {\n};\n", "export {").unwrap();
        assert_eq!(zone, ExportZone { begin_line: 2, end_line: 3 });
        assert!(zone.is_empty());
    }

    #[test]
    fn test_export_zone_on_one_line_is_not_locatable() {
        assert!(locate_export_zone("export {};\n", "export {").is_none());
    }

    #[test]
    fn test_export_zone_marker_without_bracket() {
        assert!(locate_export_zone("export default app;\n", "export default").is_none());
    }
}
