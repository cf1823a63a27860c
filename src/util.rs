pub fn short_name(id: &str) -> &str {
    id.rsplit_once('/').map(|(_, rest)| rest).unwrap_or(id)
}

pub fn format_millis(millis: u64) -> String {
    if millis < 1_000 {
        format!("{millis} ms")
    } else if millis < 60_000 {
        format!("{:.1} s", millis as f64 / 1_000.0)
    } else {
        let total_secs = millis / 1_000;
        format!("{}m {:02}s", total_secs / 60, total_secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_strips_namespace() {
        assert_eq!(short_name("ingest/load_users"), "load_users");
        assert_eq!(short_name("load_users"), "load_users");
        assert_eq!(short_name("a/b/c"), "c");
    }

    #[test]
    fn format_millis_picks_unit() {
        assert_eq!(format_millis(750), "750 ms");
        assert_eq!(format_millis(1_500), "1.5 s");
        assert_eq!(format_millis(125_000), "2m 05s");
    }
}
