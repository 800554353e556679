use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::config::SETTINGS_SKELETON_CONTENT;
use super::parsing::{parse_bool, parse_color_value, split_assignment};
use super::types::{ProviderKind, Settings, Theme};
use crate::location::PermissionStatus;

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: Content of the settings file
/// - `settings`: Mutable reference to `Settings` to populate
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unknown keys and unparsable values are ignored, keeping the defaults.
/// - `color_*` keys override single palette entries.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let Some((key, val)) = split_assignment(line) else {
            continue;
        };
        match key.as_str() {
            "language" | "lang" | "locale" => {
                settings.language = val.to_string();
            }
            "data_dir" | "data_directory" => {
                settings.data_dir = non_empty(val).map(PathBuf::from);
            }
            "localization" | "localization_source" => {
                settings.localization_source = non_empty(val).map(str::to_string);
            }
            "pois" | "pois_source" | "points_of_interest" => {
                settings.pois_source = non_empty(val).map(str::to_string);
            }
            "refresh_interval_secs" | "refresh_interval" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.refresh_interval_secs = v;
                }
            }
            "watch_maximum_age_ms" | "maximum_age_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.watch_maximum_age_ms = v;
                }
            }
            "watch_timeout_ms" | "timeout_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.watch_timeout_ms = v;
                }
            }
            "location_provider" => {
                if let Some(kind) = ProviderKind::from_config_key(val) {
                    settings.location_provider = kind;
                }
            }
            "static_lat" => {
                if let Ok(v) = val.parse::<f64>() {
                    settings.static_lat = v;
                }
            }
            "static_lng" | "static_lon" => {
                if let Ok(v) = val.parse::<f64>() {
                    settings.static_lng = v;
                }
            }
            "location_file" => {
                settings.location_file = non_empty(val).map(PathBuf::from);
            }
            "location_permission" => {
                if let Some(p) = PermissionStatus::from_config_key(val) {
                    settings.location_permission = p;
                }
            }
            "location_enabled" => {
                settings.location_enabled = parse_bool(val);
            }
            k if k.starts_with("color_") => {
                apply_color(&mut settings.theme, &k["color_".len()..], val);
            }
            _ => {}
        }
    }
    normalize(settings);
}

fn non_empty(val: &str) -> Option<&str> {
    let t = val.trim();
    (!t.is_empty()).then_some(t)
}

fn apply_color(theme: &mut Theme, name: &str, val: &str) {
    let Some(c) = parse_color_value(val) else {
        warn!(key = name, value = val, "[Config] invalid colour value");
        return;
    };
    let slot = match name {
        "base" | "background" => &mut theme.base,
        "mantle" => &mut theme.mantle,
        "overlay" | "border" => &mut theme.overlay,
        "text" => &mut theme.text,
        "subtext" => &mut theme.subtext,
        "accent" => &mut theme.accent,
        "divisor" => &mut theme.divisor,
        "green" => &mut theme.green,
        "yellow" => &mut theme.yellow,
        "red" => &mut theme.red,
        _ => {
            debug!(key = name, "[Config] unknown colour key");
            return;
        }
    };
    *slot = c;
}

/// Clamp timing values to sane minimums.
fn normalize(settings: &mut Settings) {
    if settings.refresh_interval_secs == 0 {
        settings.refresh_interval_secs = 1;
    }
    if settings.watch_maximum_age_ms < 100 {
        settings.watch_maximum_age_ms = 100;
    }
    if settings.watch_timeout_ms < 100 {
        settings.watch_timeout_ms = 100;
    }
}

/// What: Load settings from `path`, writing the skeleton first when the file is missing or empty.
///
/// Inputs:
/// - `path`: Settings file location
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    let empty = fs::metadata(path).map_or(true, |m| m.len() == 0);
    if empty {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        match fs::write(path, SETTINGS_SKELETON_CONTENT) {
            Ok(()) => debug!(path = %path.display(), "[Config] wrote settings skeleton"),
            Err(e) => warn!(path = %path.display(), error = %e, "[Config] cannot write settings skeleton"),
        }
    }
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            parse_settings(&content, &mut out);
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "[Config] settings.conf missing or unreadable, using defaults"
            );
        }
    }
    out
}
