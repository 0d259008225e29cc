//! Copy report model and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;

/// Counters for one `copy` call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportCopy {
    /// Files visited by the traversal (1 for a single-file copy).
    pub cnt_scanned: u64,
    /// Files whose name matched the pattern.
    pub cnt_matched: u64,
    /// Files copied successfully.
    pub cnt_copied: u64,
    /// Destination directories created on the way.
    pub cnt_dirs_created: u64,
}

impl ReportCopy {
    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_scanned".to_string(), self.cnt_scanned);
        dict_counts.insert("cnt_matched".to_string(), self.cnt_matched);
        dict_counts.insert("cnt_copied".to_string(), self.cnt_copied);
        dict_counts.insert("cnt_dirs_created".to_string(), self.cnt_dirs_created);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} scanned={} matched={} copied={} dirs_created={}",
            self.cnt_scanned, self.cnt_matched, self.cnt_copied, self.cnt_dirs_created
        )
    }
}

impl fmt::Display for ReportCopy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[COPY]"))
    }
}

/// Mutable accumulator used while a copy runs.
#[derive(Debug, Default, Clone)]
pub struct ReportCopyBuilder {
    report: ReportCopy,
}

impl ReportCopyBuilder {
    /// Increment scanned count by one.
    pub fn add_scanned(&mut self) {
        self.report.cnt_scanned += 1;
    }

    /// Increment matched count by one.
    pub fn add_matched(&mut self) {
        self.report.cnt_matched += 1;
    }

    /// Increment copied count by one.
    pub fn add_copied(&mut self) {
        self.report.cnt_copied += 1;
    }

    /// Add folders created for one copied file.
    pub fn add_dirs_created(&mut self, n_dirs: usize) {
        self.report.cnt_dirs_created += n_dirs as u64;
    }

    /// Finish and return the report.
    pub fn build(self) -> ReportCopy {
        self.report
    }
}
