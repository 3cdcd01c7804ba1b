use crate::ui::theme::{paint, Theme};
use crate::ui::{theme, Icons};

pub fn header(theme: &Theme, icon: &str, text: &str) -> String {
    format!("{} {}", icon, paint(theme.header, text))
}

pub fn section(theme: &Theme, icon: &str, title: &str) -> String {
    format!("\n━ {} {} ━", icon, paint(theme.header, title))
}

pub fn empty(theme: &Theme, text: &str) -> String {
    format!("{} {}", Icons::EMPTY, paint(theme.dim, text))
}

pub fn summary_row(theme: &Theme, label: &str, value: &str) -> String {
    format!("  {} {}", paint(theme.dim, label), value)
}

pub fn success(theme: &Theme, label: &str) -> String {
    format!("{} {}", Icons::CHECK, paint(theme.success, label))
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, paint(theme().error, label));
}
