use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use turnstat_aggregate::Scale;
use turnstat_export::OutputFormat;

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "turnstat.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_dir: PathBuf,
    pub pretty: bool,
    pub scale: Scale,
    pub text_file: String,
    pub json_file: String,
    pub chat_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            pretty: true,
            scale: Scale::default(),
            text_file: OutputFormat::Text.default_file_name().to_string(),
            json_file: OutputFormat::Records.default_file_name().to_string(),
            chat_file: OutputFormat::Chat.default_file_name().to_string(),
        }
    }
}

impl Config {
    pub fn file_name(&self, format: OutputFormat) -> &str {
        match format {
            OutputFormat::Text => &self.text_file,
            OutputFormat::Records => &self.json_file,
            OutputFormat::Chat => &self.chat_file,
        }
    }
}

/// `--config` if given, else `turnstat.json` under `cwd`.
pub fn config_path(cwd: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(p) => p.to_path_buf(),
        None => cwd.join(CONFIG_FILE),
    }
}

/// Defaults, then the config file (if present), then `TURNSTAT_*` env vars.
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let config = read_file(path)?;
    Ok(apply_env(config, |key| std::env::var(key).ok()))
}

fn read_file(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn apply_env(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(dir) = lookup("TURNSTAT_OUTPUT_DIR").filter(|v| !v.is_empty()) {
        config.output_dir = PathBuf::from(dir);
    }
    if let Some(raw) = lookup("TURNSTAT_PRETTY") {
        match parse_bool(&raw) {
            Some(v) => config.pretty = v,
            None => tracing::warn!(value = %raw, "ignoring unparsable TURNSTAT_PRETTY"),
        }
    }
    config
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = read_file(&tmp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.file_name(OutputFormat::Chat), "dialogues_chat_format.json");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"pretty": false, "scale": {"new_max": 10}}"#).unwrap();
        let cfg = read_file(&path).unwrap();
        assert!(!cfg.pretty);
        assert_eq!(cfg.scale.new_max, 10.0);
        assert_eq!(cfg.scale.old_max, 5.0);
        assert_eq!(cfg.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn invalid_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        std::fs::write(&path, "{not json").unwrap();
        let err = read_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }

    #[test]
    fn env_overrides_file_values() {
        let cfg = apply_env(
            Config::default(),
            env(&[("TURNSTAT_OUTPUT_DIR", "/tmp/out"), ("TURNSTAT_PRETTY", "off")]),
        );
        assert_eq!(cfg.output_dir, PathBuf::from("/tmp/out"));
        assert!(!cfg.pretty);
    }

    #[test]
    fn bad_env_bool_is_ignored() {
        let cfg = apply_env(Config::default(), env(&[("TURNSTAT_PRETTY", "maybe")]));
        assert!(cfg.pretty);
    }

    #[test]
    fn explicit_config_path_wins() {
        let cwd = Path::new("/work");
        assert_eq!(config_path(cwd, None), cwd.join(CONFIG_FILE));
        assert_eq!(
            config_path(cwd, Some(Path::new("/etc/ts.json"))),
            PathBuf::from("/etc/ts.json")
        );
    }
}
