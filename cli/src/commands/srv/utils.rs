//! # ChatRS HTTP Server Utilities
//!
//! File: cli/src/commands/srv/utils.rs
//! Author: Christi Mahu
//!
//! Helpers for the widget server startup banner: the local network address
//! shown next to the localhost URL, and a debug listing of the extra asset
//! directory.
//!
use std::path::Path;
use tracing::{debug, info, warn};

/// # Log Directory Contents (`log_directory_contents`)
///
/// Logs the entries of the asset directory, marking each as file or directory.
/// Failures to read the directory or an entry's metadata are logged as warnings.
pub fn log_directory_contents(path: &Path) {
    info!("Extra assets in {}:", path.display());

    match std::fs::read_dir(path) {
        Ok(entries) => {
            let mut entry_count = 0;
            for entry in entries.filter_map(Result::ok) {
                entry_count += 1;
                match entry.metadata() {
                    Ok(metadata) => {
                        let file_type = if metadata.is_dir() { "DIR " } else { "FILE" };
                        info!("  - {} : {}", file_type, entry.file_name().to_string_lossy());
                    }
                    Err(_) => warn!("  - Could not read metadata for: {}", entry.path().display()),
                }
            }
            if entry_count == 0 {
                info!("  (Empty directory)");
            }
        }
        Err(e) => warn!(
            "Could not read directory contents for '{}': {}",
            path.display(),
            e
        ),
    }
}

/// # Get Local IP Address (`get_local_ip`)
///
/// Tries a few platform commands (`ipconfig`, `ip addr`, `ifconfig`) and returns
/// the first non-loopback address one of them prints. Falls back to `"localhost"`.
pub fn get_local_ip() -> String {
    debug!("Attempting to detect local network IP address");

    let commands = [
        // macOS / BSD
        "ipconfig getifaddr en0",
        "ipconfig getifaddr en1",
        // Linux
        "ip addr show | grep 'inet ' | grep -v '127.0.0.1' | head -n 1 | awk '{print $2}' | cut -d/ -f1",
        "ifconfig | grep 'inet ' | grep -v '127.0.0.1' | head -n 1 | awk '{print $2}'",
    ];

    for cmd_str in commands {
        match std::process::Command::new("sh").arg("-c").arg(cmd_str).output() {
            Ok(output) if output.status.success() => {
                let ip = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !ip.is_empty() && ip != "localhost" {
                    debug!("Found local IP: {}", ip);
                    return ip;
                }
            }
            Ok(output) => debug!(
                "Command '{}' failed or returned empty: status={:?}",
                cmd_str,
                output.status.code()
            ),
            Err(e) => debug!("Error executing command '{}': {}", cmd_str, e),
        }
    }

    warn!("Could not detect local network IP, falling back to 'localhost'");
    "localhost".to_string()
}
