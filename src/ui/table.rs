use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tabled::{settings::Style, Table, Tabled};

use crate::record::{Package, Plugin};
use crate::ui::theme::{paint, Theme};

#[derive(Tabled)]
pub struct PackageRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Version")]
    pub version: String,
    #[tabled(rename = "Checksum")]
    pub checksum: String,
    #[tabled(rename = "Path")]
    pub path: String,
    #[tabled(rename = "Installed")]
    pub installed: String,
}

#[derive(Tabled)]
pub struct PluginRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Path")]
    pub path: String,
    #[tabled(rename = "Installed")]
    pub installed: String,
}

fn short_checksum(checksum: &str) -> String {
    checksum.chars().take(12).collect()
}

fn installed(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn render<R: Tabled>(rows: Vec<R>) -> String {
    if rows.is_empty() {
        return String::new();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn packages_table(theme: &Theme, packages: &BTreeMap<String, Package>) -> String {
    render(
        packages
            .iter()
            .map(|(name, package)| PackageRow {
                name: paint(theme.package, name),
                version: paint(theme.version, &package.version),
                checksum: paint(theme.checksum, &short_checksum(&package.checksum)),
                path: paint(theme.path, &package.path),
                installed: installed(&package.installed),
            })
            .collect(),
    )
}

pub fn plugins_table(theme: &Theme, plugins: &BTreeMap<String, Plugin>) -> String {
    render(
        plugins
            .iter()
            .map(|(name, plugin)| PluginRow {
                name: paint(theme.plugin, name),
                description: plugin.description.clone(),
                path: paint(theme.path, &plugin.path),
                installed: installed(&plugin.installed),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_table_renders_nothing() {
        let theme = Theme::default();
        assert_eq!(packages_table(&theme, &BTreeMap::new()), "");
        assert_eq!(plugins_table(&theme, &BTreeMap::new()), "");
    }

    #[test]
    fn test_package_table_shortens_checksum() {
        let mut packages = BTreeMap::new();
        packages.insert(
            "foo".to_string(),
            Package::new("foo", "0123456789abcdef0123", "1.0.0", "/opt/foo")
                .installed_at(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
        );

        let table = packages_table(&Theme::default(), &packages);

        assert!(table.contains("0123456789ab"));
        assert!(!table.contains("0123456789abc"));
        assert!(table.contains("2024-01-02 03:04:05 UTC"));
        assert!(!table.contains('\x1b'));
    }

    #[test]
    fn test_colored_theme_styles_names_and_checksums() {
        let theme = Theme::colored();
        let mut packages = BTreeMap::new();
        packages.insert(
            "foo".to_string(),
            Package::new("foo", "deadbeef", "1.0.0", "/opt/foo"),
        );

        let table = packages_table(&theme, &packages);

        assert!(table.contains(&paint(theme.package, "foo")));
        assert!(table.contains(&paint(theme.checksum, "deadbeef")));
    }

    #[test]
    fn test_plugin_table_styles_plugin_names() {
        let theme = Theme::colored();
        let mut plugins = BTreeMap::new();
        plugins.insert(
            "lint".to_string(),
            Plugin::new("lint", "Run linters", "/opt/plugins/lint"),
        );

        let table = plugins_table(&theme, &plugins);

        assert!(table.contains(&paint(theme.plugin, "lint")));
        assert!(table.contains("Run linters"));
    }
}
