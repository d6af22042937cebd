//! User-facing plugin options and their normalized form.

mod base_pathname;
mod mdx;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, RoutesError};
use crate::paths::{normalize_path, resolve};

pub use base_pathname::normalize_base_pathname;
pub use mdx::MdxOptions;

/// Options as supplied by the user. Every field may be missing.
///
/// Values of the wrong type (a number for `routesDir`, a string for
/// `trailingSlash`) are read as missing rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    /// Directory scanned for route files, relative to the project root or absolute
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub routes_dir: Option<String>,

    /// Deprecated alias of `base_pathname`
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// URL path prefix the application is served under
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub base_pathname: Option<String>,

    /// Whether generated route URLs end with `/`
    #[serde(default, deserialize_with = "lenient_bool", skip_serializing_if = "Option::is_none")]
    pub trailing_slash: Option<bool>,

    #[serde(default, deserialize_with = "lenient_mdx", skip_serializing_if = "Option::is_none")]
    pub mdx: Option<MdxOptions>,

    /// Fields this crate doesn't interpret, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PluginOptions {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use fob_routes::PluginOptions;
    /// use serde_json::json;
    ///
    /// let opts = PluginOptions::from_value(json!({
    ///     "routesDir": "app/routes",
    ///     "trailingSlash": true
    /// }))
    /// .unwrap();
    /// assert_eq!(opts.routes_dir.as_deref(), Some("app/routes"));
    /// assert_eq!(opts.trailing_slash, Some(true));
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| RoutesError::invalid("routes", e))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| RoutesError::invalid("routes", e))
    }
}

/// Fully populated options derived from [`PluginOptions`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPluginOptions {
    routes_dir: PathBuf,
    base_pathname: String,
    trailing_slash: bool,
    mdx: MdxOptions,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl NormalizedPluginOptions {
    /// Absolute, normalized routes directory.
    pub fn routes_dir(&self) -> &Path {
        &self.routes_dir
    }

    /// Base pathname, always starting and ending with `/`.
    pub fn base_pathname(&self) -> &str {
        &self.base_pathname
    }

    pub fn trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    pub fn mdx(&self) -> &MdxOptions {
        &self.mdx
    }

    /// Pass-through fields carried over from the user options.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// Normalize user options against the project root.
///
/// - `routes_dir` defaults to `<root>/src/routes`; relative values resolve
///   against `root_dir`.
/// - `base_url` (deprecated) replaces `base_pathname` when present.
/// - `base_pathname` defaults to `/` and always gains a trailing `/`.
/// - `trailing_slash` defaults to `false`, `mdx` to the empty object.
///
/// Never fails: malformed values fall back to defaults.
pub fn normalize_options(
    root_dir: impl AsRef<Path>,
    user_opts: Option<&PluginOptions>,
) -> NormalizedPluginOptions {
    let root_dir = root_dir.as_ref();
    let opts = user_opts.cloned().unwrap_or_default();

    let routes_dir = match opts.routes_dir.as_deref() {
        Some(dir) => resolve(root_dir, dir),
        None => resolve(root_dir, Path::new("src").join("routes")),
    };

    let mut base_pathname = opts.base_pathname;
    if let Some(base_url) = opts.base_url {
        tracing::warn!(base_url = %base_url, "`baseUrl` is deprecated, use `basePathname`");
        base_pathname = Some(base_url);
    }

    NormalizedPluginOptions {
        routes_dir: normalize_path(routes_dir),
        base_pathname: normalize_base_pathname(base_pathname.as_deref()),
        trailing_slash: opts.trailing_slash.unwrap_or(false),
        mdx: opts.mdx.unwrap_or_default(),
        extra: opts.extra,
    }
}

pub(super) fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

pub(super) fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        _ => None,
    })
}

fn lenient_mdx<'de, D>(deserializer: D) -> std::result::Result<Option<MdxOptions>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
