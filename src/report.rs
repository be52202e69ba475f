use crate::error::Error;
use crate::verify::MissingItem;
use std::path::Path;

/// Write the missing-items report: one `Album,Directory,File` row per item,
/// for a spreadsheet or re-import tool.
pub fn write_missing_report(path: &Path, items: &[MissingItem]) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for item in items {
        writer.serialize(item)?;
    }
    writer.flush()?;
    Ok(())
}
