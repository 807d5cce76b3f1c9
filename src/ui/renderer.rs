// Renderer module - formatting utilities
// Most rendering logic is in layout.rs, but this module can contain
// additional formatting utilities if needed

use crate::calendar_core::Impact;

/// Format an impact tier for the table column, e.g. "3 (high)"
pub fn format_impact(impact: Impact) -> String {
    format!("{} ({})", impact.weight(), impact.as_str())
}

/// Truncate an event name to the available column width
pub fn truncate_name(name: &str, width: usize) -> String {
    if width == 0 || name.chars().count() <= width {
        return name.to_string();
    }
    let kept: String = name.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_impact() {
        assert_eq!(format_impact(Impact::High), "3 (high)");
        assert_eq!(format_impact(Impact::Unclassified), "0 (unclassified)");
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("CPI", 10), "CPI");
        assert_eq!(truncate_name("Nonfarm Payrolls", 8), "Nonfarm…");
        assert_eq!(truncate_name("CPI", 0), "CPI");
    }
}
