//! Shared test fixtures for registry integration tests.

use registry_core::{Principal, Registry};

/// The fixed admin principal for test registries.
pub fn admin() -> Principal {
    Principal::new("ST1ADMIN")
}

/// Shorthand principal constructor.
pub fn principal(value: &str) -> Principal {
    Principal::new(value)
}

/// A fresh registry with the test admin, with tracing wired up.
pub fn registry() -> Registry {
    init_tracing();
    Registry::new(admin())
}

/// Initialize test logging once; later calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("registry_core=info")
        .with_test_writer()
        .try_init();
}
