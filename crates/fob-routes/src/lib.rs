//! Build context for the fob routing plugin.
//!
//! A [`BuildContext`] holds the state accumulated during one build or
//! dev-server session: normalized plugin options plus the routes, layouts,
//! entries and diagnostics that route scanners push into it. Between
//! incremental rebuilds the context is reset in place.
//!
//! ```
//! use fob_routes::{BuildTarget, PluginOptions, create_build_context, reset_build_context};
//!
//! let opts = PluginOptions {
//!     base_pathname: Some("docs".into()),
//!     ..Default::default()
//! };
//! let mut ctx = create_build_context("/app", Some(&opts), Some(BuildTarget::Client));
//! assert_eq!(ctx.opts.base_pathname(), "/docs/");
//!
//! let previous = ctx.build_id.clone();
//! reset_build_context(Some(&mut ctx));
//! assert_ne!(ctx.build_id, previous);
//! ```

pub mod build_id;
pub mod context;
pub mod discovery;
pub mod error;
pub mod options;
pub mod paths;
pub mod records;

pub use build_id::BuildId;
pub use context::{BuildContext, BuildTarget, Frontmatter, create_build_context, reset_build_context};
pub use discovery::OptionsDiscovery;
pub use error::{Result, RoutesError};
pub use options::{MdxOptions, NormalizedPluginOptions, PluginOptions, normalize_options};
pub use records::*;
