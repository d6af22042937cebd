use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{lenient_bool, lenient_string};

/// MDX compilation settings forwarded to the MDX plugin.
///
/// Every field is optional. The default is the empty object; anything the
/// plugin understands but this crate doesn't name is kept in `extra`.
/// A wrongly typed value reads as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MdxOptions {
    /// Enable GFM (tables, strikethrough, task lists)
    #[serde(default, deserialize_with = "lenient_bool", skip_serializing_if = "Option::is_none")]
    pub gfm: Option<bool>,

    #[serde(default, deserialize_with = "lenient_bool", skip_serializing_if = "Option::is_none")]
    pub footnotes: Option<bool>,

    #[serde(default, deserialize_with = "lenient_bool", skip_serializing_if = "Option::is_none")]
    pub math: Option<bool>,

    /// JSX runtime module, e.g. `react/jsx-runtime`
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub jsx_runtime: Option<String>,

    #[serde(default, deserialize_with = "lenient_bool", skip_serializing_if = "Option::is_none")]
    pub use_default_plugins: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MdxOptions {
    /// True when no setting has been supplied.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
