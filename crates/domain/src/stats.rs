// crates/domain/src/stats.rs
use serde::{Deserialize, Serialize};

/// Opening tag of a serialized test plan. Its attribute order and length
/// vary between serializer versions, so the line carrying it is exempt
/// from size accounting. Exact prefix match; configurable via
/// [`StatsComputer::with_volatile_prefix`].
pub const DEFAULT_VOLATILE_PREFIX: &str = "<jmeterTestPlan";

/// Content fingerprint of a serialized document: accumulated character
/// size and line count. `(-1, -1)` is the reserved "no file / not
/// computed" sentinel ([`FileStats::NO_STATS`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    pub size: i64,
    pub lines: i64,
}

impl FileStats {
    /// Sentinel for an absent or unreadable file.
    pub const NO_STATS: FileStats = FileStats { size: -1, lines: -1 };

    pub fn new(size: i64, lines: i64) -> Self {
        Self { size, lines }
    }

    /// True when this value is the absent sentinel.
    pub fn is_absent(&self) -> bool {
        *self == Self::NO_STATS
    }

    /// Exact size equality. False when `other` is missing or when either
    /// operand is the absent sentinel.
    pub fn same_size(&self, other: Option<&FileStats>) -> bool {
        match other {
            None => false,
            Some(o) => !self.is_absent() && !o.is_absent() && self.size == o.size,
        }
    }

    /// Exact line-count equality, with the same missing/sentinel rules as
    /// [`FileStats::same_size`].
    pub fn same_line_count(&self, other: Option<&FileStats>) -> bool {
        match other {
            None => false,
            Some(o) => !self.is_absent() && !o.is_absent() && self.lines == o.lines,
        }
    }
}

/// Computes [`FileStats`] from a sequence of text lines.
///
/// Every line counts toward `lines`; a line starting with the volatile
/// prefix contributes nothing to `size`. Line terminators are never
/// counted (callers feed terminator-stripped lines, e.g. `str::lines`).
#[derive(Debug, Clone)]
pub struct StatsComputer {
    volatile_prefix: String,
}

impl Default for StatsComputer {
    fn default() -> Self {
        Self {
            volatile_prefix: DEFAULT_VOLATILE_PREFIX.to_string(),
        }
    }
}

impl StatsComputer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different volatile opening-tag prefix.
    pub fn with_volatile_prefix(prefix: impl Into<String>) -> Self {
        Self {
            volatile_prefix: prefix.into(),
        }
    }

    pub fn volatile_prefix(&self) -> &str {
        &self.volatile_prefix
    }

    /// Accumulate size and line count over `lines`. Empty input yields
    /// `{0, 0}`, never the absent sentinel.
    pub fn compute<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> FileStats {
        let mut size: i64 = 0;
        let mut count: i64 = 0;
        for line in lines {
            count += 1;
            if !line.starts_with(&self.volatile_prefix) {
                size += line.chars().count() as i64;
            }
        }
        FileStats::new(size, count)
    }

    /// Convenience for whole-document text (splits on line terminators).
    pub fn compute_text(&self, text: &str) -> FileStats {
        self.compute(text.lines())
    }
}
