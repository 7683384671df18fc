use crate::error::Result;
use crate::model::{Aggregate, Contributor};
use console::style;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Toml,
    Json,
}

impl Format {
    /// `.yaml`/`.yml` and `.toml` pick their format; everything else is JSON.
    ///
    /// The suffix after the last dot of the file name is matched as-is, so
    /// `.yaml` alone selects YAML and `A.YML` does not.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.rfind('.').map(|i| &n[i..]))
            .unwrap_or("");
        match extension {
            ".yaml" | ".yml" => Format::Yaml,
            ".toml" => Format::Toml,
            _ => Format::Json,
        }
    }

    pub fn encode(self, data: &Aggregate) -> Result<String> {
        Ok(match self {
            Format::Yaml => serde_yaml::to_string(data)?,
            Format::Toml => toml::to_string(data)?,
            Format::Json => serde_json::to_string_pretty(data)?,
        })
    }
}

/// Encodes `data` by the extension of `path` and writes it, creating parent
/// directories first. An existing file is replaced.
pub fn write_aggregate(data: &Aggregate, path: &Path) -> Result<Format> {
    let format = Format::from_path(path);
    let encoded = format.encode(data)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, encoded)?;
    Ok(format)
}

pub fn print_leaderboard(data: &Aggregate, top: usize) {
    let mut ranked: Vec<&Contributor> = data.values().collect();
    ranked.sort_by(|a, b| {
        b.contributions
            .cmp(&a.contributions)
            .then_with(|| a.login.cmp(&b.login))
    });

    println!(
        "{:>4} {:<39} {:>13} {:>6}",
        style("#").bold(),
        style("Login").bold(),
        style("Contributions").bold(),
        style("Repos").bold()
    );
    println!("{}", "─".repeat(65));
    for (rank, c) in ranked.iter().take(top).enumerate() {
        println!(
            "{:>4} {:<39} {:>13} {:>6}",
            rank + 1,
            c.login,
            style(c.contributions).cyan(),
            c.repos
        );
    }
    if ranked.len() > top {
        println!("\n... and {} more contributors", ranked.len() - top);
    }
}
