pub mod icons;
pub mod mode;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use mode::OutputMode;
pub use output::{empty, error, header, section, success, summary_row};
pub use table::{packages_table, plugins_table};
pub use theme::{theme, Theme};
