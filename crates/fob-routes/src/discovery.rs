//! File-based option discovery.
//!
//! Routing options live in the `[routes]` table of `fob.toml`, or under
//! `fob.routes` in `package.json`. Environment variables prefixed with
//! `FOB_ROUTES_` override file values.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Toml};
use serde_json::{Map, Value};

use crate::error::{Result, RoutesError};
use crate::options::PluginOptions;

const TOML_FILE: &str = "fob.toml";
const PACKAGE_JSON: &str = "package.json";
const ENV_PREFIX: &str = "FOB_ROUTES_";
const KNOWN_KEYS: &[&str] = &["routesDir", "baseUrl", "basePathname", "trailingSlash", "mdx"];
const STRING_KEYS: &[&str] = &["routesDir", "baseUrl", "basePathname"];

/// Loads [`PluginOptions`] for a project root.
///
/// # Example
///
/// ```no_run
/// use fob_routes::{OptionsDiscovery, create_build_context};
///
/// let discovery = OptionsDiscovery::new(".");
/// let opts = discovery.load().unwrap();
/// let ctx = create_build_context(".", Some(&opts), None);
/// ```
pub struct OptionsDiscovery {
    root: PathBuf,
}

impl OptionsDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find the file options are read from.
    ///
    /// Searches in this order:
    /// 1. fob.toml
    /// 2. package.json (only when it has a `fob.routes` object)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(TOML_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed: Value = serde_json::from_str(&content).ok()?;
        parsed
            .pointer("/fob/routes")
            .is_some_and(Value::is_object)
            .then_some(pkg_path)
    }

    /// Load options from the discovered file, then the environment.
    ///
    /// A project without any config file yields empty options. Option keys
    /// may be written in camelCase or snake_case.
    pub fn load(&self) -> Result<PluginOptions> {
        let mut merged = match self.find() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading routing options");
                self.load_file(&path)?
            }
            None => {
                tracing::debug!(root = %self.root.display(), "no routing options file");
                Map::new()
            }
        };

        let env: Map<String, Value> = Figment::from(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| RoutesError::invalid("environment", e))?;
        for (key, value) in env {
            let key = canonical_key(&key.to_ascii_lowercase());
            let value = restore_env_string(&key, value);
            merged.insert(key, value);
        }

        PluginOptions::from_value(Value::Object(merged))
    }

    fn load_file(&self, path: &Path) -> Result<Map<String, Value>> {
        let (document, section): (Value, _) = if path.file_name() == Some(OsStr::new(PACKAGE_JSON))
        {
            let document = Figment::from(Json::file(path))
                .extract()
                .map_err(|e| RoutesError::invalid(PACKAGE_JSON, e))?;
            (document, "/fob/routes")
        } else {
            let document = Figment::from(Toml::file(path))
                .extract()
                .map_err(|e| RoutesError::invalid(TOML_FILE, e))?;
            (document, "/routes")
        };

        match document.pointer(section) {
            None => Ok(Map::new()),
            Some(Value::Object(table)) => Ok(table
                .iter()
                .map(|(key, value)| (canonical_key(key), value.clone()))
                .collect()),
            Some(_) => Err(RoutesError::invalid(
                section.trim_start_matches('/').replace('/', "."),
                "expected a table of routing options",
            )),
        }
    }
}

/// Figment parses env values (`2024` becomes an integer). Path-like options
/// are always strings, so scalars are turned back into their text.
fn restore_env_string(key: &str, value: Value) -> Value {
    if !STRING_KEYS.contains(&key) {
        return value;
    }
    match value {
        Value::Number(n) => Value::String(n.to_string()),
        Value::Bool(b) => Value::String(b.to_string()),
        other => other,
    }
}

/// Map snake_case spellings (`base_pathname`) of known options to camelCase.
fn canonical_key(key: &str) -> String {
    let mut camel = String::with_capacity(key.len());
    let mut upper = false;
    for ch in key.chars() {
        match ch {
            '_' => upper = true,
            c if upper => {
                camel.extend(c.to_uppercase());
                upper = false;
            }
            c => camel.push(c),
        }
    }

    if KNOWN_KEYS.contains(&camel.as_str()) {
        camel
    } else {
        key.to_string()
    }
}
