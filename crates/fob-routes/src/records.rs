//! Records pushed into a [`BuildContext`](crate::BuildContext) by route scanners.
//!
//! The context only stores these; producing them is the scanner's job.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A page or endpoint discovered under the routes directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRoute {
    /// Identifier derived from the route's path, unique within a build
    pub id: String,
    /// URL pathname, e.g. `/blog/[slug]/`
    pub pathname: String,
    /// Source file defining the route
    pub file_path: PathBuf,
    /// Ids of the layouts wrapping this route, outermost first
    #[serde(default)]
    pub layouts: Vec<String>,
    /// Dynamic segment names, in path order
    #[serde(default)]
    pub param_names: Vec<String>,
}

/// Error page route (`404`, `500`, ...). Shares the route shape.
pub type BuildError = BuildRoute;

/// How a layout composes with the layouts above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    /// Wrapped by the layouts of parent directories
    #[default]
    Nested,
    /// Stops layout inheritance (`layout!.tsx`)
    Top,
}

/// A `layout.tsx` (or named layout) wrapping the routes below it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildLayout {
    pub id: String,
    pub file_path: PathBuf,
    /// Named layout (`layout-name.tsx`); empty for the default layout
    #[serde(default)]
    pub layout_name: String,
    #[serde(default)]
    pub layout_type: LayoutType,
}

/// Extra bundle entry point that is not a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildEntry {
    pub id: String,
    /// Output file name of the generated chunk
    pub chunk_file_name: String,
    pub file_path: PathBuf,
}

/// Service worker source found under the routes directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildServiceWorker {
    pub id: String,
    /// Output file name, e.g. `service-worker.js`
    pub chunk_file_name: String,
    pub file_path: PathBuf,
}

/// A `menu.md` describing navigation for the routes under `pathname`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildMenu {
    pub pathname: String,
    pub file_path: PathBuf,
}

/// Severity of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    Error,
    Warn,
}

/// A problem found while scanning routes, reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// File the diagnostic points at, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
}

impl Diagnostic {
    /// An error diagnostic without a file.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Error,
            message: message.into(),
            file_path: None,
        }
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Warn,
            message: message.into(),
            file_path: None,
        }
    }

    pub fn with_file(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }
}
