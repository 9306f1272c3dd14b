// curlicue-cli/src/trace.rs

use tracing::Level;

/// Initializes the global subscriber. Diagnostics go to stderr so stdout
/// carries nothing but the converted document. `CURLICUE_SILENT=1` drops
/// the level to warnings only.
pub fn init_tracing() {
    let silent = std::env::var("CURLICUE_SILENT")
        .ok()
        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    let level = if silent { Level::WARN } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
