use ratatui::style::Color;

/// What: Normalise a config key: lowercase, with `.`, `-` and spaces turned into `_`.
///
/// Inputs:
/// - `raw`: Key text left of the `=`
///
/// Output:
/// - Canonical key used for matching
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Split a `key = value` line into a normalised key and a comment-free value.
///
/// Inputs:
/// - `line`: One raw line of a config file
///
/// Output:
/// - `Some((key, value))` for assignments; `None` for blanks, comments and other lines
pub(crate) fn split_assignment(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    Some((normalize_key(raw_key), strip_inline_comment(raw_val.trim())))
}

/// What: Interpret common truthy spellings.
///
/// Output:
/// - `true` for `true`, `1`, `yes`, `on` (any case); `false` otherwise
pub(crate) fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// What: Parse a colour value from configuration.
///
/// Inputs:
/// - `s`: Raw value, already stripped of inline comments
///
/// Output:
/// - `Some(Color)` for `#RRGGBB`/`RRGGBB` hex or `R,G,B` decimal triplets; `None` otherwise.
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').map(str::trim).collect();
    if let [r, g, b] = parts.as_slice()
        && let (Ok(r), Ok(g), Ok(b)) = (r.parse::<u8>(), g.parse::<u8>(), b.parse::<u8>())
    {
        return Some(Color::Rgb(r, g, b));
    }
    None
}

/// What: Remove trailing inline comments from a configuration value.
///
/// Inputs:
/// - `s`: Raw value possibly containing `//` or `#` comments.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - Strips trailing `//` sections and secondary `#` characters without harming leading `#RRGGBB` values.
/// - A `//` that belongs to a URL scheme (`http://`, `https://`) is kept.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    let scheme_end = s.find("://").map_or(0, |i| i + 3);
    if let Some(i) = s[scheme_end..].find("//") {
        s = &s[..scheme_end + i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}
