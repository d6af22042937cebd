//! Environment overrides for routing options.
//!
//! Kept in its own test binary: the variables set here are process-wide.

use figment::Jail;
use fob_routes::paths::normalize_path;
use fob_routes::{OptionsDiscovery, create_build_context};

#[test]
fn environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "fob.toml",
            "[routes]\nbasePathname = \"/from-file/\"\nroutesDir = \"pages\"\n",
        )?;
        jail.set_env("FOB_ROUTES_BASE_PATHNAME", "/from-env");
        jail.set_env("FOB_ROUTES_TRAILING_SLASH", "true");

        let opts = OptionsDiscovery::new(jail.directory())
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(opts.base_pathname.as_deref(), Some("/from-env"));
        assert_eq!(opts.routes_dir.as_deref(), Some("pages"));
        assert_eq!(opts.trailing_slash, Some(true));

        let ctx = create_build_context(jail.directory(), Some(&opts), None);
        assert_eq!(ctx.opts.base_pathname(), "/from-env/");
        assert_eq!(
            ctx.opts.routes_dir(),
            normalize_path(jail.directory().join("pages"))
        );
        assert!(ctx.opts.routes_dir().is_absolute());
        Ok(())
    });
}

#[test]
fn environment_alone_is_enough() {
    Jail::expect_with(|jail| {
        jail.set_env("FOB_ROUTES_ROUTES_DIR", "/srv/routes");

        let opts = OptionsDiscovery::new(jail.directory())
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(opts.routes_dir.as_deref(), Some("/srv/routes"));
        Ok(())
    });
}

#[test]
fn numeric_env_values_stay_strings() {
    Jail::expect_with(|jail| {
        jail.set_env("FOB_ROUTES_BASE_PATHNAME", "2024");
        jail.set_env("FOB_ROUTES_ROUTES_DIR", "2024");

        let opts = OptionsDiscovery::new(jail.directory())
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(opts.base_pathname.as_deref(), Some("2024"));
        assert_eq!(opts.routes_dir.as_deref(), Some("2024"));

        let ctx = create_build_context(jail.directory(), Some(&opts), None);
        assert_eq!(ctx.opts.base_pathname(), "/2024/");
        assert_eq!(ctx.opts.routes_dir(), normalize_path(jail.directory().join("2024")));
        Ok(())
    });
}

#[test]
fn non_boolean_trailing_slash_from_env_reads_as_missing() {
    Jail::expect_with(|jail| {
        jail.set_env("FOB_ROUTES_TRAILING_SLASH", "sometimes");

        let opts = OptionsDiscovery::new(jail.directory())
            .load()
            .map_err(|e| e.to_string())?;
        assert_eq!(opts.trailing_slash, None);
        Ok(())
    });
}
