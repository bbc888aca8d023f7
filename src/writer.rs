use cle::{Result, SummaryReport};

use csv::Writer;

/// Renders `report` as a CSV document with a header row
pub fn render_report(report: &SummaryReport) -> Result<String> {
    let mut writer = Writer::from_writer(vec![]);

    writer.serialize(report)?;

    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;

    Ok(string)
}
