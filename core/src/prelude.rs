use serde::{Deserialize, Serialize};

/// Pi as written in the first published table. Using it keeps the emitted text
/// byte-identical with copies of that table.
#[allow(clippy::approx_constant)]
pub const TABLE_PI: f64 = 3.14159265453;

/// Fixed shape of the generated table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Indices per full sine cycle.
    pub period: usize,
    /// First sampled index (inclusive).
    pub start: usize,
    /// Last sampled index (exclusive).
    pub end: usize,
    pub amplitude: f64,
    pub offset: i32,
    pub pi: f64,
    pub values_per_line: usize,
    pub element_type: String,
    pub name: String,
    /// Size written between the brackets. Not derived from `end - start`.
    pub declared_len: usize,
}

impl TableConfig {
    pub const PERIOD: usize = 1024;
    pub const START: usize = 256;
    pub const END: usize = 768;
    pub const AMPLITUDE: f64 = 127.0;
    pub const OFFSET: i32 = 128;
    pub const VALUES_PER_LINE: usize = 8;
    pub const DECLARED_LEN: usize = 256;

    /// Number of samples covered by `[start, end)`.
    pub fn sample_count(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            period: Self::PERIOD,
            start: Self::START,
            end: Self::END,
            amplitude: Self::AMPLITUDE,
            offset: Self::OFFSET,
            pi: TABLE_PI,
            values_per_line: Self::VALUES_PER_LINE,
            element_type: "byte".into(),
            name: "sinbytes".into(),
            declared_len: Self::DECLARED_LEN,
        }
    }
}

/// Min/max summary of a generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleStats {
    pub count: usize,
    pub min: i32,
    pub max: i32,
}

/// Outcome of a single render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub samples: usize,
    pub lines: usize,
    pub stats: SampleStats,
}

/// Common error type for table generation.
#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("writing table: {0}")]
    Io(#[from] std::io::Error),
    #[error("encoding table config: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type TableResult<T> = Result<T, TableError>;
