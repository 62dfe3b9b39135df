//! Logging for the `ori` binary.
//!
//! Enable with `ORI_LOG=ori_parse=trace` (any `EnvFilter` directives) or
//! `--verbose`. Set `ORI_LOG_TREE=1` for indented span output.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

const VERBOSE_DIRECTIVES: &str = "ori_lexer=debug,ori_parse=debug,oric=debug";

fn filter(verbose: bool) -> Option<EnvFilter> {
    match EnvFilter::try_from_env("ORI_LOG") {
        Ok(filter) => Some(filter),
        Err(_) if verbose => Some(EnvFilter::new(VERBOSE_DIRECTIVES)),
        Err(_) => None,
    }
}

/// Install the global subscriber. Later calls do nothing.
///
/// Output goes to stderr; stdout is reserved for token listings and dumps.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let Some(filter) = filter(verbose) else {
            return;
        };

        let (tree, flat) = if std::env::var_os("ORI_LOG_TREE").is_some() {
            let tree = HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true);
            (Some(tree), None)
        } else {
            let flat = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true);
            (None, Some(flat))
        };

        // Another subscriber may already be set, e.g. by a test harness.
        let _ = tracing_subscriber::registry()
            .with(tree)
            .with(flat)
            .with(filter)
            .try_init();
    });
}
