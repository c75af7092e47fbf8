use anyhow::Result;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Log file name
const OPERATION_LOG_FILE: &str = "operation_log.txt";

/// Get the full path to the operation log file
fn log_path() -> PathBuf {
    crate::user_settings::app_data_dir().join(OPERATION_LOG_FILE)
}

/// Get the full path to the operation log file as a string for display
pub fn log_file_path() -> String {
    log_path().display().to_string()
}

/// Append a structured log entry describing a wallet action.
pub fn append_log(operation: &str, chain_id: u64, details: impl AsRef<str>) -> Result<()> {
    append_log_at(&log_path(), operation, chain_id, details.as_ref())
}

fn append_log_at(path: &Path, operation: &str, chain_id: u64, details: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write!(file, "{}", format_entry(&Utc::now().to_rfc3339(), operation, chain_id, details))?;
    Ok(())
}

fn format_entry(timestamp: &str, operation: &str, chain_id: u64, details: &str) -> String {
    let mut entry = format!("[{}] chain_id={} operation={}\n", timestamp, chain_id, operation);
    if details.trim().is_empty() {
        entry.push_str("  (no additional details)\n");
    } else {
        for line in details.lines() {
            if line.trim().is_empty() {
                entry.push('\n');
            } else {
                entry.push_str("  ");
                entry.push_str(line);
                entry.push('\n');
            }
        }
    }
    entry.push('\n');
    entry
}

/// Last `max_lines` lines of the log, oldest first. Empty if there is no log yet.
pub fn read_log_tail(max_lines: usize) -> Result<String> {
    read_tail_at(&log_path(), max_lines)
}

fn read_tail_at(path: &Path, max_lines: usize) -> Result<String> {
    if !path.exists() {
        return Ok(String::new());
    }
    let content = fs::read_to_string(path)?;
    let lines: Vec<&str> = content.trim_end().lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    Ok(lines[start..].join("\n"))
}
