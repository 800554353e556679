//! Small utility helpers for launching external viewers and formatting time.

use chrono::{DateTime, Utc};

/// What: Open a local file with the default application (cross-platform).
///
/// Inputs:
/// - `path`: File path to open.
///
/// Output:
/// - No return value; spawns a background process to open the file.
///
/// Details:
/// - On Windows, uses `cmd /c start`.
/// - On Unix-like systems, uses `xdg-open` (Linux) or `open` (macOS).
/// - Spawns the command in a background thread and ignores errors.
/// - During tests, this is a no-op.
#[cfg_attr(test, allow(unused_variables))]
pub fn open_file(path: &std::path::Path) {
    #[cfg(not(test))]
    spawn_opener(path.display().to_string());
}

/// What: Open a URL (for example a landmark photo) in the default browser.
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Details:
/// - Same launch strategy as [`open_file`]; a no-op during tests.
#[cfg_attr(test, allow(unused_variables))]
pub fn open_url(url: &str) {
    #[cfg(not(test))]
    spawn_opener(url.to_string());
}

#[cfg(not(test))]
fn spawn_opener(target: String) {
    use std::process::{Command, Stdio};
    std::thread::spawn(move || {
        #[cfg(target_os = "windows")]
        {
            let _ = Command::new("cmd")
                .args(["/c", "start", "", &target])
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Try xdg-open first (Linux), then open (macOS)
            let _ = Command::new("xdg-open")
                .arg(&target)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .or_else(|_| {
                    Command::new("open")
                        .arg(&target)
                        .stdin(Stdio::null())
                        .stdout(Stdio::null())
                        .stderr(Stdio::null())
                        .spawn()
                });
        }
    });
}

/// What: Format a timestamp for log lines.
///
/// Inputs:
/// - `at`: Instant to format
///
/// Output:
/// - `"YYYY-MM-DD-T HH:MM:SS"` in UTC
#[must_use]
pub fn log_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d-T %H:%M:%S").to_string()
}

/// What: Short human label for an image reference.
///
/// Output:
/// - The last path or URL segment, without query string; the input when it has none
#[must_use]
pub fn image_label(image: &str) -> &str {
    let no_query = image.split(['?', '#']).next().unwrap_or(image);
    no_query
        .rsplit(['/', '\\'])
        .find(|s| !s.is_empty())
        .unwrap_or(image)
}
