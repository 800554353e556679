use std::fs;
use std::io;
use std::path::Path;

use super::parsing::normalize_key;

/// Skeleton settings file written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# linotour settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments.\n\
#\n\
# ---------- Language ----------\n\
# UI language code (e.g. pt-PT, en-GB). Written when changed in Settings.\n\
language =\n\
#\n\
# ---------- Documents ----------\n\
# Directory holding localization.json and dados_raulLino.json.\n\
# data_dir = /usr/share/linotour\n\
# Per-document overrides: a path or an http(s) URL.\n\
# localization = https://example.org/localization.json\n\
# pois = https://example.org/dados_raulLino.json\n\
#\n\
# ---------- Location ----------\n\
# Seconds between user-marker refreshes while the map is shown.\n\
refresh_interval_secs = 5\n\
# Watch polling period and per-request timeout (milliseconds).\n\
watch_maximum_age_ms = 1000\n\
watch_timeout_ms = 2000\n\
# Location backend: static | file\n\
location_provider = static\n\
static_lat = 39.4636\n\
static_lng = -8.1977\n\
# File with one 'lat,lng[,accuracy]' line, re-read on every poll (file backend).\n\
# location_file = /tmp/linotour-gps.txt\n\
# Permission answer: granted | when_in_use | denied | denied_always\n\
location_permission = granted\n\
location_enabled = true\n\
#\n\
# ---------- Colours ----------\n\
# Palette overrides as #RRGGBB or R,G,B.\n\
# color_divisor = #f9e2af\n\
# color_accent = #74c7ec\n";

/// What: Write `key = value` into the settings file at `path`, preserving other content.
///
/// Inputs:
/// - `path`: Settings file (created from the skeleton when missing or empty)
/// - `key_norm`: Normalised key to replace or append
/// - `value`: New value
///
/// Output:
/// - `Ok(())` once written; the I/O error otherwise
fn save_string_key_to(path: &Path, key_norm: &str, value: &str) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let existing = fs::read_to_string(path).unwrap_or_default();
    let source = if existing.trim().is_empty() {
        SETTINGS_SKELETON_CONTENT
    } else {
        existing.as_str()
    };
    let mut lines: Vec<String> = source.lines().map(str::to_string).collect();
    let mut replaced = false;
    for line in &mut lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        if let Some((kraw, _)) = trimmed.split_once('=')
            && normalize_key(kraw) == key_norm
        {
            *line = format!("{key_norm} = {value}");
            replaced = true;
        }
    }
    if !replaced {
        lines.push(format!("{key_norm} = {value}"));
    }
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content)
}

/// Persist the language preference into the settings file at `path`.
///
/// # Errors
/// Returns the I/O error when the file cannot be read or written.
pub fn save_language_to(path: &Path, language: &str) -> io::Result<()> {
    save_string_key_to(path, "language", language)?;
    tracing::debug!(path = %path.display(), language, "[Config] language saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_replaces_existing_key_and_keeps_comments() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        fs::write(&path, "# keep me\nLanguage = pt-PT\nrefresh_interval_secs = 9\n").expect("write");
        save_language_to(&path, "en-GB").expect("save");
        let content = fs::read_to_string(&path).expect("read");
        assert_eq!(
            content,
            "# keep me\nlanguage = en-GB\nrefresh_interval_secs = 9\n"
        );
    }

    #[test]
    fn save_into_missing_file_starts_from_skeleton() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cfg").join("settings.conf");
        save_language_to(&path, "pt-PT").expect("save");
        let content = fs::read_to_string(&path).expect("read");
        assert!(content.starts_with("# linotour settings"));
        assert_eq!(content.matches("language = pt-PT").count(), 1);
        assert!(!content.contains("language =\n"));
    }
}
