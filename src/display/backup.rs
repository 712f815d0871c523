//! Backup display formatting

use crate::backup::BackupInfo;

/// Format a list of backups, newest first, one per line
pub fn format_backup_list(backups: &[BackupInfo]) -> String {
    if backups.is_empty() {
        return "No backups found.".to_string();
    }

    let mut output = String::new();
    for (i, backup) in backups.iter().enumerate() {
        output.push_str(&format!(
            "  {}. {} ({}, {})\n",
            i + 1,
            backup.filename,
            backup.created_at.format("%Y-%m-%d %H:%M:%S"),
            format_size(backup.size_bytes),
        ));
    }
    output.push_str(&format!("Total: {} backup(s)", backups.len()));
    output
}

/// Format a file size in human-readable form
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
