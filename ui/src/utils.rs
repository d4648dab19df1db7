/// Display name of the application
pub fn app_name() -> &'static str {
    "Gadgets"
}

/// Package version baked in at build time
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
