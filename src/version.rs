// Build-time identity from Cargo.toml

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// One-line description (from Cargo.toml), shown on the index page.
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
