use std::{io::Write, path::Path};

use anyhow::Context as _;

use crate::{
    check::{minimum::Minimum, walker::Violation},
    foundation::error::CheckResult,
};

/// First diagnostic line: `Found <count> < <min> in <path>`.
pub fn summary_line(violation: &Violation<'_>, minimum: &Minimum, document: &Path) -> String {
    format!(
        "Found {} < {} in {}",
        violation.count,
        minimum,
        document.display()
    )
}

/// Write the two-line violation report: the summary, then the offending
/// feature as compact JSON.
pub fn write_violation(
    mut out: impl Write,
    violation: &Violation<'_>,
    minimum: &Minimum,
    document: &Path,
) -> CheckResult<()> {
    writeln!(out, "{}", summary_line(violation, minimum, document))
        .context("write violation summary")?;
    serde_json::to_writer(&mut out, violation.feature).context("serialize offending feature")?;
    writeln!(out).context("write violation feature")?;
    out.flush().context("flush violation report")?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/report/diagnostic.rs"]
mod tests;
