use crate::error::{Result, RiskLabError};
use crate::types::config::ScoringConfig;
use std::path::{Path, PathBuf};
use toml::Value;
use tracing::info;

pub const BUILTIN_CONFIG: &str = include_str!("../config/default.toml");
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/risk-lab/config.toml";

/// Reference configuration shipped with the binary, unvalidated.
#[cfg(test)]
pub fn builtin_config() -> Result<ScoringConfig> {
    Ok(builtin_value()?.try_into()?)
}

/// Layers built-in defaults, the user-global file and an explicit file,
/// later layers winning, then validates the merged result.
pub fn load_config(explicit: Option<&Path>) -> Result<ScoringConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<ScoringConfig> {
    let mut merged = builtin_value()?;
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(RiskLabError::ConfigNotFound(path.display().to_string()));
        }
        merge_file_if_exists(&mut merged, path)?;
    }

    let cfg: ScoringConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| RiskLabError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Embedded at compile time; parse errors carry no path.
fn builtin_value() -> Result<Value> {
    Ok(toml::from_str(BUILTIN_CONFIG)?)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    clear_overridden_weight_tables(merged, &value);
    merge_toml(merged, value);
    info!(path = %path.display(), "merged config layer");
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RiskLabError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Per-layer attribute weights are replaced as a whole so a layer can drop
/// an attribute; `weights.layer` still merges key by key.
fn clear_overridden_weight_tables(base: &mut Value, overlay: &Value) {
    let (Some(base_weights), Some(overlay_weights)) = (
        base.get_mut("weights").and_then(Value::as_table_mut),
        overlay.get("weights").and_then(Value::as_table),
    ) else {
        return;
    };
    for layer in overlay_weights.keys().filter(|key| key.as_str() != "layer") {
        base_weights.remove(layer);
    }
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
