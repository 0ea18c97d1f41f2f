//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DebtbookError, DebtbookResult};

use super::types::{ColorMode, Config};

/// Overrides the ledger document location.
pub const DATA_PATH_VAR: &str = "DEBTBOOK_DATA_PATH";

/// Overrides `output.color` (`auto`, `always`, `never`).
pub const COLOR_VAR: &str = "DEBTBOOK_COLOR";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DebtbookResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DebtbookError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the user config or defaults, then apply environment overrides.
pub fn load_or_default() -> Config {
    let mut config = Config::default();

    if let Some(path) = Config::user_config_path().filter(|p| p.exists()) {
        match load_with_warnings(&path) {
            Ok((loaded, warnings)) => {
                for w in warnings {
                    tracing::warn!(
                        key = %w.key,
                        file = %w.file.display(),
                        suggestion = w.suggestion.as_deref().unwrap_or(""),
                        "unknown config key"
                    );
                }
                config = loaded;
            }
            Err(e) => tracing::warn!("ignoring config at {}: {}", path.display(), e),
        }
    }

    match with_env_overrides(config.clone(), |k| std::env::var(k).ok()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}", e);
            config
        }
    }
}

/// Apply environment variable overrides (DEBTBOOK_* prefix)
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> DebtbookResult<Config> {
    if let Some(path) = get_env(DATA_PATH_VAR).filter(|p| !p.is_empty()) {
        config.data.path = Some(PathBuf::from(path));
    }

    if let Some(color) = get_env(COLOR_VAR) {
        config.output.color = match color.to_lowercase().as_str() {
            "auto" => ColorMode::Auto,
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => {
                return Err(DebtbookError::InvalidEnvValue {
                    var: COLOR_VAR.to_string(),
                    value: color,
                })
            }
        };
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["data", "path", "output", "color", "unicode"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
