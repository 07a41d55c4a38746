use tracing_subscriber::EnvFilter;

/// Value of `DEBUG` that switches on debug logging. Anything else is ignored.
pub const DEBUG_ENV: &str = "DEBUG";

pub fn debug_requested(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_directives(debug: bool) -> &'static str {
    if debug {
        "jira_user_import=debug,info"
    } else {
        "jira_user_import=info"
    }
}

pub fn init_cli_logger(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(debug)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    if debug {
        tracing::warn!("DEBUG MODE ENABLED");
    }
}
