//! Kodegen Bundler IzPack - installation descriptor generator.
//!
//! This binary turns a TOML installer manifest into an IzPack `install.xml`
//! plus its per-OS install directory side-car files.

use kodegen_bundler_izpack::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
