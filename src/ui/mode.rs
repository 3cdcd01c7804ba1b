//! How much the CLI prints

/// Environment switch that silences decorative human output
pub const QUIET_ENV: &str = "GROOM_QUIET";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Tables plus headers, empty-collection notes and summaries
    Human,
    /// Tables and errors only
    Quiet,
    /// Machine-readable JSON on stdout
    Json,
}

impl OutputMode {
    pub fn detect(json: bool) -> Self {
        if json {
            Self::Json
        } else if quiet_requested(std::env::var(QUIET_ENV).ok().as_deref()) {
            Self::Quiet
        } else {
            Self::Human
        }
    }

    pub fn is_human(self) -> bool {
        self == Self::Human
    }
}

fn quiet_requested(value: Option<&str>) -> bool {
    matches!(value, Some(v) if v == "1" || v.eq_ignore_ascii_case("true"))
}
