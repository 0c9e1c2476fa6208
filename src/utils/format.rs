//! Output formatting utilities

/// Truncate a display label to a maximum length
pub fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        return label.to_string();
    }
    if max_len < 3 {
        return "...".to_string();
    }
    let kept: String = label.chars().take(max_len - 3).collect();
    format!("{kept}...")
}

/// Format a foreground duration in human-readable form
pub fn format_duration_ms(ms: u64) -> String {
    let secs = ms / 1000;
    if secs >= 3600 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{secs}s")
    } else {
        format!("{ms}ms")
    }
}
