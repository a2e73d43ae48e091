//! Raw table shape shared by the loader and the sheet models.
//!
//! A [`RawTable`] is the loader's contract: header names plus rows of
//! optional cells, along with flags recording whether the backing file was
//! found and read. Sheet models consume this shape; nothing here knows about
//! any particular sheet's schema.

/// How many header rows the sheet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// One header row of column names (every sheet but the proportionality matrix).
    Single,
    /// Two header rows: parent columns over per-parent sub-columns.
    Double,
}

/// A loaded sheet before any schema interpretation.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Whether a file for this sheet was found at all.
    pub exists: bool,
    /// Whether the file parsed without a read error.
    pub read_succeeded: bool,
    pub header_kind: HeaderKind,
    /// First header row. Empty header cells are kept as empty strings.
    pub columns: Vec<String>,
    /// Second header row; empty unless `header_kind` is [`HeaderKind::Double`].
    pub sub_columns: Vec<String>,
    /// Data rows. Empty cells are `None`.
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Table for a sheet whose file was not found.
    pub fn absent() -> Self {
        RawTable {
            exists: false,
            read_succeeded: false,
            header_kind: HeaderKind::Single,
            columns: Vec::new(),
            sub_columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Table for a sheet whose file exists but could not be read.
    pub fn unreadable(header_kind: HeaderKind) -> Self {
        RawTable {
            exists: true,
            read_succeeded: false,
            header_kind,
            columns: Vec::new(),
            sub_columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// True when the sheet carries no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// True when the named column exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// All cells of a named column, row by row. `None` per row when the cell
    /// is empty or the row is shorter than the header.
    pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).and_then(|c| c.as_deref()))
                .collect(),
        )
    }

    /// Count of non-empty cells in a row.
    pub fn filled_cells(row: &[Option<String>]) -> usize {
        row.iter().filter(|c| c.is_some()).count()
    }
}
