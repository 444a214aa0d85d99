//! Partition types
//!
//! Display columns, projected rows and the two-group partition result.

/// One of the seven display columns shared by every output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayField {
    Name,
    Alias,
    EnvType,
    CloudPlatform,
    AccountType,
    Region,
    DisplayName,
}

impl DisplayField {
    /// All display fields in column order
    pub const ALL: [DisplayField; 7] = [
        DisplayField::Name,
        DisplayField::Alias,
        DisplayField::EnvType,
        DisplayField::CloudPlatform,
        DisplayField::AccountType,
        DisplayField::Region,
        DisplayField::DisplayName,
    ];

    /// Key read from the input record
    pub fn key(self) -> &'static str {
        match self {
            DisplayField::Name => "name",
            DisplayField::Alias => "alias",
            DisplayField::EnvType => "envType",
            DisplayField::CloudPlatform => "cloudPlatform",
            DisplayField::AccountType => "accountType",
            DisplayField::Region => "region",
            DisplayField::DisplayName => "displayName",
        }
    }

    /// Column header used in CSV and table output
    pub fn header(self) -> &'static str {
        match self {
            DisplayField::Name => "Name",
            DisplayField::Alias => "Alias",
            DisplayField::EnvType => "Env Type",
            DisplayField::CloudPlatform => "Cloud Platform",
            DisplayField::AccountType => "Account Type",
            DisplayField::Region => "Region",
            DisplayField::DisplayName => "Display Name",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Header of the count column attached to the "with" group
pub const RELEASE_WINDOWS_COUNT_HEADER: &str = "Release Windows Count";

/// Display-ready form of one environment record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRow {
    /// Values indexed by `DisplayField` order, never empty
    values: [String; 7],
    /// Number of release windows; `None` when the record had none
    pub release_windows_count: Option<usize>,
}

impl ProjectedRow {
    /// Create a row from values in `DisplayField::ALL` order
    pub fn new(values: [String; 7], release_windows_count: Option<usize>) -> Self {
        Self {
            values,
            release_windows_count,
        }
    }

    /// Get the value of a display field
    pub fn get(&self, field: DisplayField) -> &str {
        &self.values[field.index()]
    }

    /// Display values in column order, without the count
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Whether this row belongs to the "with release windows" group
    pub fn has_release_windows(&self) -> bool {
        self.release_windows_count.is_some()
    }

    /// Values as written to a CSV record, count last when present
    pub fn to_record(&self) -> Vec<String> {
        let mut record: Vec<String> = self.values.to_vec();
        if let Some(count) = self.release_windows_count {
            record.push(count.to_string());
        }
        record
    }
}

/// Result of splitting the input by release-window presence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partitioned {
    /// Rows whose record carried a non-null `releaseWindows`
    pub with_windows: Vec<ProjectedRow>,
    /// Rows whose `releaseWindows` was null or absent
    pub without_windows: Vec<ProjectedRow>,
    /// Number of input records
    pub total: usize,
}

impl Partitioned {
    /// Number of rows in the "with" group
    pub fn with_count(&self) -> usize {
        self.with_windows.len()
    }

    /// Number of rows in the "without" group
    pub fn without_count(&self) -> usize {
        self.without_windows.len()
    }
}
