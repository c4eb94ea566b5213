//! Index (barrel) file patching.
//!
//! An index file has an import zone at the top and a single bracketed export
//! zone introduced by a marker line:
//!
//! ```text
//! import CommentList from './components/CommentList';
//! import PostContainer from './containers/PostContainer';
//!
//! export {
//!   CommentList,
//!   PostContainer
//! };
//! ```
//!
//! Edits are computed on the in-memory content and written back once, so a
//! failed step never leaves a half-patched file behind.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use bija_core::FileSystem;
use regex::Regex;

use crate::{
    Error, Result,
    locate::{ExportZone, Pattern, find_marker, locate_export_zone},
};

static IMPORT_STATEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^import\s").expect("import statement regex is valid"));

/// One import line and, optionally, one export-zone entry to add or remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPatch {
    /// Full import statement, without line break
    pub import: String,
    /// Export-zone entry; `None` leaves the export zone untouched
    pub export: Option<ExportEntry>,
}

/// An entry inside the export zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportEntry {
    /// Text of the line that opens the export zone, including the `{`
    pub marker: String,
    /// Exported identifier
    pub identifier: String,
    /// Whether entries in the zone are separated by commas
    pub comma_delimited: bool,
}

impl ExportEntry {
    /// The line inserted into the zone.
    pub fn line(&self) -> String {
        format!("  {}", self.identifier)
    }

    /// Pattern matching the entry's whole line, with or without a trailing comma.
    pub fn pattern(&self) -> Result<Pattern> {
        let re = format!(r"(?m)^[ \t]*{},?[ \t]*\r?$", regex::escape(&self.identifier));
        let regex = Regex::new(&re).map_err(|source| {
            Box::new(Error::InvalidPattern {
                pattern: re.clone(),
                source,
            })
        })?;
        Ok(Pattern::Regex(regex))
    }
}

/// Outcome of patching an index file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The file was rewritten
    Updated,
    /// The file already had (or already lacked) the lines; nothing was written
    Unchanged,
    /// There is no index file at the path
    Missing,
}

/// An index file's content, edited in memory.
#[derive(Debug, Clone)]
pub struct IndexFile {
    path: PathBuf,
    content: String,
}

impl IndexFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read the index file at `path`, or `None` if there is none.
    pub fn open(fs: &dyn FileSystem, path: &Path) -> Result<Option<Self>> {
        if !fs.exists(path) {
            return Ok(None);
        }
        let content = fs.read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Some(Self::new(path, content)))
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the current content back through `fs`.
    pub fn save(&self, fs: &dyn FileSystem) -> Result<()> {
        fs.write(&self.path, &self.content)
            .map_err(|e| Error::io(&self.path, e))
    }

    /// Whether `line` appears as a whole line.
    pub fn has_line(&self, line: &str) -> bool {
        self.content.lines().any(|l| l.trim_end() == line)
    }

    /// Locate the export zone introduced by `marker`.
    pub fn export_zone(&self, marker: &str) -> Result<ExportZone> {
        locate_export_zone(&self.content, marker).ok_or_else(|| {
            Box::new(Error::UnlocatableMarker {
                path: self.path.clone(),
                marker: marker.to_string(),
            })
        })
    }

    /// Insert `import` after the last import statement, or at the top if there is none.
    pub fn insert_import(&mut self, import: &str) {
        let last_import = self
            .content
            .split_inclusive('\n')
            .enumerate()
            .filter(|(_, line)| IMPORT_STATEMENT.is_match(line))
            .last()
            .map(|(i, _)| i);

        let index = last_import.map_or(0, |i| i + 1);
        self.content = insert_line(&self.content, index, import);
    }

    /// Insert an entry just before the closing bracket of the export zone.
    pub fn insert_export(&mut self, entry: &ExportEntry) -> Result<()> {
        let zone = self.export_zone(&entry.marker)?;
        let mut lines = split_lines(&self.content);

        let mut line = entry.line();
        if !zone.is_empty() && entry.comma_delimited {
            let last_entry = &mut lines[zone.end_line - 2];
            let (body, ending) = split_line_ending(last_entry);
            if body.trim_end().ends_with(',') {
                // The zone uses trailing commas; keep that style for the new entry
                line.push(',');
            } else {
                *last_entry = format!("{},{}", body.trim_end(), ending);
            }
        }

        self.content = insert_line(&lines.concat(), zone.end_line - 1, &line);
        Ok(())
    }

    /// Remove the whole line on which `pattern` first matches. Returns whether a line was removed.
    pub fn remove_line(&mut self, pattern: &Pattern) -> bool {
        match pattern.find(&self.content) {
            Some(offset) => {
                self.content = remove_line_at(&self.content, offset);
                true
            }
            None => false,
        }
    }

    /// Remove an export entry, keeping the zone's comma delimiting consistent.
    pub fn remove_export(&mut self, entry: &ExportEntry) -> Result<bool> {
        let pattern = entry.pattern()?;
        let Some(pos) = find_marker(&self.content, &pattern) else {
            return Ok(false);
        };
        let zone = locate_export_zone(&self.content, &entry.marker);
        let had_comma = self
            .content
            .lines()
            .nth(pos.line - 1)
            .is_some_and(|line| line.trim_end().ends_with(','));

        self.remove_line(&pattern);

        // The entry closed a list without trailing commas, so its predecessor
        // must not keep a dangling one
        if let Some(zone) = zone
            && entry.comma_delimited
            && !had_comma
            && zone.end_line == pos.line + 1
            && pos.line > zone.begin_line + 1
        {
            let mut lines = split_lines(&self.content);
            let previous = &mut lines[pos.line - 2];
            let (body, ending) = split_line_ending(previous);
            if let Some(stripped) = body.trim_end().strip_suffix(',') {
                *previous = format!("{stripped}{ending}");
                self.content = lines.concat();
            }
        }
        Ok(true)
    }
}

/// Add the import line and export entry described by `patch` to the index file at `path`.
///
/// A missing index file is not an error. Lines already present are not added twice.
pub fn update_index_file(
    fs: &dyn FileSystem,
    path: &Path,
    patch: &IndexPatch,
) -> Result<PatchOutcome> {
    let Some(mut index) = IndexFile::open(fs, path)? else {
        return Ok(PatchOutcome::Missing);
    };
    let original = index.content.clone();

    if !index.has_line(&patch.import) {
        index.insert_import(&patch.import);
    }

    if let Some(entry) = &patch.export
        && find_marker(index.content(), &entry.pattern()?).is_none()
    {
        index.insert_export(entry)?;
    }

    if index.content == original {
        return Ok(PatchOutcome::Unchanged);
    }
    index.save(fs)?;
    Ok(PatchOutcome::Updated)
}

/// Remove the import line and export entry described by `patch` from the index file at `path`.
pub fn remove_from_index_file(
    fs: &dyn FileSystem,
    path: &Path,
    patch: &IndexPatch,
) -> Result<PatchOutcome> {
    let Some(mut index) = IndexFile::open(fs, path)? else {
        return Ok(PatchOutcome::Missing);
    };

    let mut changed = index.remove_line(&Pattern::literal(patch.import.as_str()));
    if let Some(entry) = &patch.export {
        changed |= index.remove_export(entry)?;
    }

    if !changed {
        return Ok(PatchOutcome::Unchanged);
    }
    index.save(fs)?;
    Ok(PatchOutcome::Updated)
}

/// Remove the whole line on which `pattern` first matches; `content` is returned as-is on no match.
pub fn remove_whole_line(content: &str, pattern: &Pattern) -> String {
    match pattern.find(content) {
        Some(offset) => remove_line_at(content, offset),
        None => content.to_string(),
    }
}

fn remove_line_at(content: &str, offset: usize) -> String {
    let start = content[..offset].rfind('\n').map_or(0, |i| i + 1);
    match content[offset..].find('\n') {
        Some(i) => format!("{}{}", &content[..start], &content[offset + i + 1..]),
        // Last line without a line break: drop the break that precedes it instead
        None => content[..start.saturating_sub(1)].to_string(),
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

fn split_line_ending(line: &str) -> (&str, &str) {
    let body = line.trim_end_matches(['\n', '\r']);
    (body, &line[body.len()..])
}

/// Insert `line` so that it becomes the 0-based line `index`.
fn insert_line(content: &str, index: usize, line: &str) -> String {
    let mut lines = split_lines(content);
    let index = index.min(lines.len());

    if index == lines.len()
        && let Some(last) = lines.last_mut()
        && !last.ends_with('\n')
    {
        last.push('\n');
    }

    lines.insert(index, format!("{line}\n"));
    lines.concat()
}
