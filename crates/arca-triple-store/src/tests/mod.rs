mod encoding;
mod integration_tests;

pub(super) fn require_graphdb() -> bool {
    if std::env::var("RUN_GRAPHDB_TESTS").ok().as_deref() == Some("1") {
        true
    } else {
        eprintln!("Skipping GraphDB tests (set RUN_GRAPHDB_TESTS=1)");
        false
    }
}
