use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

pub const QUIET_ENV: &str = "DISTRO_ICONS_QUIET";

/// Whether decorative human output (headers, banners) is suppressed
pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| parse_quiet(std::env::var(QUIET_ENV).ok().as_deref()))
}

fn parse_quiet(value: Option<&str>) -> bool {
    value
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
