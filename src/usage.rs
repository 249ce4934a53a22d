//! Storage-usage formatting for the dashboard views.
//!
//! A usage sample arrives from the backend as the literal string
//! `"<usedBytes>,<totalBytes>"`. Formatting is pure: the same input
//! always yields the same output, and a malformed sample falls back to
//! the raw string rather than failing the view.

use tracing::error;

/// Formats a byte count for display.
///
/// The unit switch compares the kilobyte value against 1000, not 1024,
/// so KB readings stay below 1000 before promoting to MB. This matches
/// the dashboard's historical display output exactly.
pub fn format_bytes(bytes: f64) -> String {
    if bytes == 0.0 {
        return "0 Bytes".to_string();
    }

    let kilobytes = bytes / 1024.0;
    if kilobytes < 1000.0 {
        return format!("{kilobytes:.2} KB");
    }

    let megabytes = kilobytes / 1024.0;
    format!("{megabytes:.2} MB")
}

/// Formats a hosted file size for display.
///
/// Unlike [`format_bytes`] there is no zero special-case: the hosted
/// listing has always rendered an empty file as `"0.00 KB"`.
pub fn format_file_size(bytes: f64) -> String {
    let kilobytes = bytes / 1024.0;
    if kilobytes < 1000.0 {
        return format!("{kilobytes:.2} KB");
    }

    let megabytes = kilobytes / 1024.0;
    format!("{megabytes:.2} MB")
}

/// Renders a raw usage sample as `"<used> / <total> (<pct>%)"`.
///
/// A sample that does not split into exactly two finite numeric fields
/// is returned unchanged, with a diagnostic log. Never panics.
pub fn format_usage(raw: &str) -> String {
    let fields: Vec<&str> = raw.split(',').collect();
    let parsed = match fields.as_slice() {
        [used, total] => match (used.trim().parse::<f64>(), total.trim().parse::<f64>()) {
            (Ok(used), Ok(total)) if used.is_finite() && total.is_finite() => {
                Some((used, total))
            }
            _ => None,
        },
        _ => None,
    };

    let Some((used, total)) = parsed else {
        error!(raw = %raw, "Malformed usage sample, falling back to raw value.");
        return raw.to_string();
    };

    let percentage = if total > 0.0 {
        used / total * 100.0
    } else {
        0.0
    };

    format!(
        "{} / {} ({percentage:.2}%)",
        format_bytes(used),
        format_bytes(total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes_literal() {
        assert_eq!(format_usage("0,0"), "0 Bytes / 0 Bytes (0.00%)");
    }

    #[test]
    fn kilobyte_range() {
        assert_eq!(format_usage("512,2048"), "0.50 KB / 2.00 KB (25.00%)");
    }

    #[test]
    fn megabyte_range() {
        assert_eq!(format_usage("2097152,4194304"), "2.00 MB / 4.00 MB (50.00%)");
    }

    #[test]
    fn unit_switch_is_at_1000_kilobytes_not_1024() {
        // 1023999 bytes is just under 1000 KB and stays in KB.
        assert_eq!(format_bytes(1023999.0), "1000.00 KB");
        // 1024000 bytes is exactly 1000 KB and promotes to MB.
        assert_eq!(format_bytes(1024000.0), "0.98 MB");
        // 1 MiB would pass a power-of-1024 boundary but is still "1024 KB".
        assert_eq!(format_bytes(1048576.0), "1.00 MB");
    }

    #[test]
    fn hosted_file_size_has_no_zero_special_case() {
        assert_eq!(format_file_size(0.0), "0.00 KB");
        assert_eq!(format_file_size(524288.0), "512.00 KB");
        assert_eq!(format_file_size(2097152.0), "2.00 MB");
    }

    #[test]
    fn malformed_sample_falls_back_to_raw() {
        assert_eq!(format_usage("abc,def"), "abc,def");
        assert_eq!(format_usage("notausage"), "notausage");
        assert_eq!(format_usage("1,2,3"), "1,2,3");
        assert_eq!(format_usage(""), "");
    }

    #[test]
    fn zero_total_guards_division() {
        assert_eq!(format_usage("100,0"), "0.10 KB / 0 Bytes (0.00%)");
    }

    #[test]
    fn formatting_is_idempotent_across_calls() {
        let first = format_usage("512,2048");
        let second = format_usage("512,2048");
        assert_eq!(first, second);
    }
}
