//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// linotour - a terminal guide to the Raul Lino itinerary in Abrantes
#[derive(Parser, Debug, Default)]
#[command(name = "linotour")]
#[command(version)]
#[command(about = "A terminal guide to the Raul Lino itinerary in Abrantes", long_about = None)]
pub struct Args {
    /// UI language code for this session (e.g. pt-PT, en-GB); persisted when valid
    #[arg(long)]
    pub lang: Option<String>,

    /// Directory holding localization.json and dados_raulLino.json
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Path or http(s) URL of the localization document
    #[arg(long)]
    pub localization: Option<String>,

    /// Path or http(s) URL of the points-of-interest document
    #[arg(long)]
    pub pois: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_document_overrides_and_language() {
        let args = Args::parse_from([
            "linotour",
            "--lang",
            "en-GB",
            "--data-dir",
            "/srv/linotour",
            "--pois",
            "https://example.org/pois.json",
            "-v",
        ]);
        assert_eq!(args.lang.as_deref(), Some("en-GB"));
        assert_eq!(args.data_dir, Some(PathBuf::from("/srv/linotour")));
        assert_eq!(args.pois.as_deref(), Some("https://example.org/pois.json"));
        assert_eq!(args.localization, None);
        assert_eq!(args.log_level, "info");
        assert!(args.verbose);
    }
}
