/// Best-effort extraction of a labeled field from the model summary.
///
/// Scans line by line for the first line whose trimmed form starts with
/// `label` and returns whatever follows the first colon, trimmed. Matching is
/// case-sensitive; a matching line without a colon yields the whole line.
pub fn extract_field(summary: &str, label: &str) -> Option<String> {
    summary.lines().find_map(|line| {
        let trimmed = line.trim();
        if trimmed.starts_with(label) {
            let value = trimmed
                .split_once(':')
                .map(|(_, rest)| rest)
                .unwrap_or(trimmed);
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

/// Structured view of the five fields the prompt asks the model to emit.
///
/// The root cause and solution lookups use the labels `"Root cause"` and
/// `"Solution"`, which do not match the uppercase labels the prompt requests,
/// so they usually come back empty. The report is surfaced in debug logs only
/// and never feeds the rendered output.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub testname: Option<String>,
    pub device: Option<String>,
    pub status: Option<String>,
    pub root_cause: Option<String>,
    pub solution: Option<String>,
}

impl SummaryReport {
    pub fn from_summary(summary: &str) -> Self {
        Self {
            testname: extract_field(summary, "TESTNAME"),
            device: extract_field(summary, "DEVICE"),
            status: extract_field(summary, "STATUS"),
            root_cause: extract_field(summary, "Root cause"),
            solution: extract_field(summary, "Solution"),
        }
    }
}
