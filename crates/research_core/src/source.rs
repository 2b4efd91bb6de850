use std::fmt;

use url::Url;

/// Monotonic version of a [`SourceList`]; bumped on every clear or append.
pub type Revision = u64;

/// One web source suggested by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub title: String,
    pub url: String,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceField {
    Title,
    Url,
    Summary,
}

impl SourceField {
    pub const ALL: [SourceField; 3] = [SourceField::Title, SourceField::Url, SourceField::Summary];

    /// Key of the field in structured backend replies.
    pub fn name(self) -> &'static str {
        match self {
            SourceField::Title => "title",
            SourceField::Url => "url",
            SourceField::Summary => "summary",
        }
    }
}

impl fmt::Display for SourceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a record does not hold up as a usable source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDefect {
    Blank(SourceField),
    NotAbsoluteUrl { url: String, reason: String },
}

impl fmt::Display for RecordDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDefect::Blank(field) => write!(f, "{field} is empty"),
            RecordDefect::NotAbsoluteUrl { url, reason } => {
                write!(f, "url {url:?} is not an absolute URL ({reason})")
            }
        }
    }
}

impl SourceRecord {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            summary: summary.into(),
        }
    }

    /// Checks the record invariants: non-blank title and summary, absolute URL.
    pub fn check(&self) -> Result<(), RecordDefect> {
        if self.title.trim().is_empty() {
            return Err(RecordDefect::Blank(SourceField::Title));
        }
        if self.url.trim().is_empty() {
            return Err(RecordDefect::Blank(SourceField::Url));
        }
        // `Url::parse` only accepts absolute URLs; relative input fails with
        // `RelativeUrlWithoutBase`.
        Url::parse(self.url.trim()).map_err(|err| RecordDefect::NotAbsoluteUrl {
            url: self.url.clone(),
            reason: err.to_string(),
        })?;
        if self.summary.trim().is_empty() {
            return Err(RecordDefect::Blank(SourceField::Summary));
        }
        Ok(())
    }
}

/// Ordered, append-only list of sources for one search.
///
/// Duplicates are kept: every page is an independent request and may overlap
/// with earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceList {
    records: Vec<SourceRecord>,
    revision: Revision,
}

impl SourceList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SourceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn append(&mut self, batch: Vec<SourceRecord>) {
        self.records.extend(batch);
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.revision += 1;
    }
}

/// A generated script, pinned to the list revision it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptText {
    text: String,
    revision: Revision,
}

impl ScriptText {
    pub fn new(text: impl Into<String>, revision: Revision) -> Self {
        Self {
            text: text.into(),
            revision,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn is_current_for(&self, sources: &SourceList) -> bool {
        self.revision == sources.revision()
    }
}
