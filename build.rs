//! Build script for the Spotify OAuth server.
//!
//! Copies the `.env.example` template from the crate root into the user's
//! local data directory, next to the `.env` file the server reads at startup.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` to the platform data directory.
///
/// # File Operations
///
/// Templates are copied to:
/// - Linux: `~/.local/share/spotify-oauth/.env.example`
/// - macOS: `~/Library/Application Support/spotify-oauth/.env.example`
/// - Windows: `%LOCALAPPDATA%/spotify-oauth/.env.example`
///
/// A missing template only produces a cargo warning; directory and write
/// failures abort the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotify-oauth");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
