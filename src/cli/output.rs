//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use archivist::{MigrationError, MigrationReport, RepositoryLocator};

fn io_error(error: &io::Error) -> MigrationError {
    MigrationError::Io {
        message: error.to_string(),
    }
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// Writes a summary of a completed migration to the given writer.
///
/// # Errors
///
/// Returns [`MigrationError::Io`] when the writer fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    locator: &RepositoryLocator,
    report: &MigrationReport,
) -> Result<(), MigrationError> {
    let database = &report.database;
    writeln!(writer, "Target database: {} ({})", database.title, database.id)
        .map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Processed {} pull request{} from {}/{}",
        report.processed,
        plural(report.processed),
        locator.owner().as_str(),
        locator.repository().as_str()
    )
    .map_err(|e| io_error(&e))?;

    if report.dry_run {
        writeln!(
            writer,
            "Dry run: no pages were created (pass --write-pages to create them)"
        )
        .map_err(|e| io_error(&e))?;
        return Ok(());
    }

    let count = report.created.len();
    writeln!(writer, "Created {count} page{}:", plural(count)).map_err(|e| io_error(&e))?;
    for page in &report.created {
        let location = page.url.as_deref().unwrap_or(page.id.as_str());
        writeln!(writer, "  {location}").map_err(|e| io_error(&e))?;
    }

    Ok(())
}
