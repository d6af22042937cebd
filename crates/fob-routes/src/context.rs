//! Mutable state for one build or dev-server session.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::build_id::BuildId;
use crate::options::{NormalizedPluginOptions, PluginOptions, normalize_options};
use crate::paths::normalize_path;
use crate::records::{
    BuildEntry, BuildError, BuildLayout, BuildMenu, BuildRoute, BuildServiceWorker, Diagnostic,
};

/// Frontmatter attributes keyed by document path.
pub type Frontmatter = IndexMap<String, IndexMap<String, Value>>;

/// Which bundle the build produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    #[default]
    Ssr,
    Client,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildContext {
    pub build_id: BuildId,
    pub root_dir: PathBuf,
    pub opts: NormalizedPluginOptions,
    pub routes: Vec<BuildRoute>,
    pub errors: Vec<BuildError>,
    pub layouts: Vec<BuildLayout>,
    pub entries: Vec<BuildEntry>,
    pub service_workers: Vec<BuildServiceWorker>,
    pub menus: Vec<BuildMenu>,
    pub diagnostics: Vec<Diagnostic>,
    pub frontmatter: Frontmatter,
    pub target: BuildTarget,
    pub is_dev_server: bool,
    pub is_dev_server_client_only: bool,
    pub is_dirty: bool,
}

impl BuildContext {
    /// Create a context for a build rooted at `root_dir`.
    ///
    /// `target` defaults to [`BuildTarget::Ssr`]. The new context is dirty.
    pub fn new(
        root_dir: impl AsRef<Path>,
        user_opts: Option<&PluginOptions>,
        target: Option<BuildTarget>,
    ) -> Self {
        let root_dir = root_dir.as_ref();
        let ctx = Self {
            build_id: BuildId::generate(),
            root_dir: normalize_path(root_dir),
            opts: normalize_options(root_dir, user_opts),
            routes: Vec::new(),
            errors: Vec::new(),
            layouts: Vec::new(),
            entries: Vec::new(),
            service_workers: Vec::new(),
            menus: Vec::new(),
            diagnostics: Vec::new(),
            frontmatter: Frontmatter::default(),
            target: target.unwrap_or_default(),
            is_dev_server: false,
            is_dev_server_client_only: false,
            is_dirty: true,
        };

        tracing::debug!(
            build_id = %ctx.build_id,
            root_dir = %ctx.root_dir.display(),
            target = ?ctx.target,
            "created build context"
        );
        ctx
    }

    /// Clear everything collected since the last build and issue a new id.
    ///
    /// Options and root directory are kept.
    pub fn reset(&mut self) {
        self.build_id = BuildId::generate();
        self.routes.clear();
        self.errors.clear();
        self.layouts.clear();
        self.entries.clear();
        self.service_workers.clear();
        self.menus.clear();
        self.diagnostics.clear();
        self.frontmatter.clear();
        self.is_dirty = true;

        tracing::debug!(build_id = %self.build_id, "reset build context");
    }

    /// Record that downstream consumers have observed the current output.
    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    /// True when any scanner has recorded an error diagnostic.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.kind == crate::records::DiagnosticKind::Error)
    }
}

/// Create a fresh [`BuildContext`]. See [`BuildContext::new`].
pub fn create_build_context(
    root_dir: impl AsRef<Path>,
    user_opts: Option<&PluginOptions>,
    target: Option<BuildTarget>,
) -> BuildContext {
    BuildContext::new(root_dir, user_opts, target)
}

/// Reset `ctx` in place; does nothing when there is no context yet.
pub fn reset_build_context(ctx: Option<&mut BuildContext>) {
    if let Some(ctx) = ctx {
        ctx.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> BuildContext {
        let mut ctx = create_build_context("/app", None, None);
        ctx.routes.push(BuildRoute {
            id: "Index".into(),
            pathname: "/".into(),
            file_path: "/app/src/routes/index.tsx".into(),
            layouts: vec![],
            param_names: vec![],
        });
        ctx.menus.push(BuildMenu {
            pathname: "/docs/".into(),
            file_path: "/app/src/routes/docs/menu.md".into(),
        });
        ctx.diagnostics.push(Diagnostic::error("duplicate route"));
        ctx.frontmatter
            .entry("/app/src/routes/index.mdx".into())
            .or_default()
            .insert("title".into(), Value::String("Home".into()));
        ctx
    }

    #[test]
    fn new_context_defaults() {
        let ctx = create_build_context("/app/", None, None);
        assert_eq!(ctx.root_dir, PathBuf::from("/app"));
        assert_eq!(ctx.target, BuildTarget::Ssr);
        assert!(!ctx.is_dev_server);
        assert!(!ctx.is_dev_server_client_only);
        assert!(ctx.is_dirty);
        assert!(ctx.routes.is_empty());
        assert!(ctx.frontmatter.is_empty());
    }

    #[test]
    fn explicit_target_is_kept() {
        let ctx = create_build_context("/app", None, Some(BuildTarget::Client));
        assert_eq!(ctx.target, BuildTarget::Client);
    }

    #[test]
    fn reset_clears_collected_state() {
        let mut ctx = populated();
        ctx.mark_clean();
        let id = ctx.build_id.clone();
        let opts = ctx.opts.clone();

        ctx.reset();

        assert!(ctx.routes.is_empty());
        assert!(ctx.menus.is_empty());
        assert!(ctx.diagnostics.is_empty());
        assert!(ctx.frontmatter.is_empty());
        assert!(ctx.is_dirty);
        assert_ne!(ctx.build_id, id);
        assert_eq!(ctx.opts, opts);
        assert_eq!(ctx.root_dir, PathBuf::from("/app"));
    }

    #[test]
    fn reset_none_is_a_no_op() {
        reset_build_context(None);
    }

    #[test]
    fn has_errors_looks_at_diagnostics() {
        let mut ctx = create_build_context("/app", None, None);
        ctx.diagnostics.push(Diagnostic::warn("unused layout"));
        assert!(!ctx.has_errors());
        ctx.diagnostics.push(Diagnostic::error("bad route"));
        assert!(ctx.has_errors());
    }
}
