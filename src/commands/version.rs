//! Version command implementation

use crate::asset::CSS_VERSION;
use crate::error::Result;
use crate::transport::FALLBACK_NAME;

/// Run version command
pub fn run() -> Result<()> {
    println!("cssfirst {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!("  Notebook CSS: {CSS_VERSION}");
    println!("  Fallback transport: {}", fallback_transport());

    Ok(())
}

fn rustc_version() -> &'static str {
    // Minimum supported rustc declared in Cargo.toml
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn fallback_transport() -> &'static str {
    if cfg!(feature = "native-tls") {
        FALLBACK_NAME
    } else {
        "none"
    }
}
