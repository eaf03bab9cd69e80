use crate::config::Config;
use anyhow::Context;
use clap::Subcommand;
use serde_json::{Map, Value};
use std::path::Path;

// ── CLI Schema ──

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Set a config value (nested keys use a dot, e.g. scale.new_max)
    Set {
        /// Config key
        key: String,
        /// Config value (true/false/number/string)
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List effective config values (defaults filled in)
    List,
}

// ── Dispatch ──

pub fn run(cmd: ConfigCmd, config_path: &Path) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Set { key, value } => set(config_path, &key, &value),
        ConfigCmd::Get { key } => get(config_path, &key),
        ConfigCmd::List => list(config_path),
    }
}

// ── Command Implementations ──

/// Read the raw config object. Returns an empty map if the file doesn't exist.
fn read_config(path: &Path) -> anyhow::Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let val: Value =
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    match val {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

fn write_config(path: &Path, config: &Map<String, Value>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    turnstat_store::write_atomic(path, json.as_bytes())
}

/// Parse a string value into an appropriate JSON value (bool/number/string).
fn parse_value(s: &str) -> Value {
    match s {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => {
            if let Ok(n) = s.parse::<i64>() {
                Value::Number(n.into())
            } else if let Ok(f) = s.parse::<f64>() {
                serde_json::json!(f)
            } else {
                Value::String(s.to_string())
            }
        }
    }
}

/// Insert `value` at a dotted key, creating intermediate objects.
fn insert_dotted(map: &mut Map<String, Value>, key: &str, value: Value) -> anyhow::Result<()> {
    match key.split_once('.') {
        None => {
            map.insert(key.to_string(), value);
            Ok(())
        }
        Some((head, rest)) => {
            let child = map
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            match child {
                Value::Object(inner) => insert_dotted(inner, rest, value),
                _ => anyhow::bail!("config key {head} is not an object"),
            }
        }
    }
}

fn lookup_dotted<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(value, |v, part| v.get(part))
}

/// Effective config as a JSON object: file values over defaults.
fn effective(path: &Path) -> anyhow::Result<Value> {
    let raw = Value::Object(read_config(path)?);
    let config: Config = serde_json::from_value(raw)
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(serde_json::to_value(config)?)
}

/// `turnstat config set <key> <value>`
pub fn set(path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = read_config(path)?;
    insert_dotted(&mut config, key, parse_value(value))?;

    // Reject values that would make the file unloadable.
    serde_json::from_value::<Config>(Value::Object(config.clone()))
        .with_context(|| format!("invalid value for {key}: {value}"))?;

    write_config(path, &config)?;
    println!("{key} = {value}");
    Ok(())
}

/// `turnstat config get <key>`
pub fn get(path: &Path, key: &str) -> anyhow::Result<()> {
    let config = effective(path)?;
    match lookup_dotted(&config, key) {
        Some(val) => println!("{val}"),
        None => println!("(not set)"),
    }
    Ok(())
}

/// `turnstat config list`
pub fn list(path: &Path) -> anyhow::Result<()> {
    let config = effective(path)?;
    if let Value::Object(map) = config {
        for (k, v) in &map {
            match v {
                Value::Object(inner) => {
                    for (ik, iv) in inner {
                        println!("{k}.{ik} = {iv}");
                    }
                }
                _ => println!("{k} = {v}"),
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE;

    #[test]
    fn parse_value_types() {
        assert_eq!(parse_value("true"), Value::Bool(true));
        assert_eq!(parse_value("42"), serde_json::json!(42));
        assert_eq!(parse_value("2.5"), serde_json::json!(2.5));
        assert_eq!(parse_value("out/dir"), Value::String("out/dir".into()));
    }

    #[test]
    fn set_then_effective_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        set(&path, "pretty", "false").unwrap();
        set(&path, "scale.new_max", "10").unwrap();

        let eff = effective(&path).unwrap();
        assert_eq!(eff["pretty"], false);
        assert_eq!(eff["scale"]["new_max"], 10.0);
        assert_eq!(eff["scale"]["old_max"], 5.0);

        let loaded = crate::config::load(&path).unwrap();
        assert_eq!(loaded.scale.new_max, 10.0);
    }

    #[test]
    fn set_rejects_wrong_type() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        assert!(set(&path, "pretty", "sometimes").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn set_through_scalar_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        set(&path, "pretty", "true").unwrap();
        assert!(set(&path, "pretty.inner", "1").is_err());
    }

    #[test]
    fn lookup_dotted_walks_objects() {
        let v = serde_json::json!({"scale": {"new_min": 1.0}});
        assert_eq!(lookup_dotted(&v, "scale.new_min"), Some(&serde_json::json!(1.0)));
        assert_eq!(lookup_dotted(&v, "scale.missing"), None);
    }
}
