//! CSV export of the selected source's event log.

use std::collections::VecDeque;
use std::io::Write;
use std::path::Path;

use crate::transport::MessengerEvent;

/// Default export file name, timestamped so repeated exports don't collide.
pub fn default_file_name() -> String {
    format!(
        "messenger_events_{}.csv",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Quote a CSV field if it contains a delimiter, quote, or newline.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Write the event log (newest first, as displayed) to a CSV file.
pub fn save_events_csv(
    path: &Path,
    events: &VecDeque<MessengerEvent>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut f = std::fs::File::create(path)?;
    writeln!(f, "type,sender,receiver,method,id,size,error")?;
    for e in events {
        writeln!(
            f,
            "{},{},{},{},{},{},{}",
            e.kind.label(),
            csv_field(&e.sender),
            csv_field(&e.receiver),
            csv_field(&e.method),
            csv_field(e.correlation_id.as_deref().unwrap_or("")),
            e.size,
            csv_field(e.error.as_deref().unwrap_or("")),
        )?;
    }
    Ok(())
}
