use anyhow::{Context, Result};
use clap::Parser;
use petscout::config::{
    pair_credentials, FacebookCredentials, GoogleCredentials, SearchConfig, DEFAULT_LOCATIONS_FILE,
    DEFAULT_NUM_RESULTS, DEFAULT_RADIUS_KM, DEFAULT_SEARCH_TERM,
};
use petscout::location::{self, format_coords, ReferencePoint};
use petscout::report::{self, render_text};
use petscout::search::{FacebookGroupFeed, GoogleSearch, PostFeed, SearchBackend};
use std::path::PathBuf;

/// petscout: search for posts about a lost pet in nearby suburbs.
///
/// Loads suburbs from a CSV table, keeps those within a radius of the
/// reference point, and searches for the term restricted to those suburbs.
/// Every option can also be set in the environment or a .env file.
///
/// Examples:
///   petscout --reference-lat -33.8688 --reference-lon 151.2093
///   petscout --radius-km 15 --term "missing greyhound" --site facebook.com
///   petscout --dry-run --locations data/suburbs.csv
#[derive(Parser)]
#[command(name = "petscout", version, about, long_about = None)]
struct Cli {
    /// CSV with name (or suburb), latitude and longitude columns.
    #[arg(long, env = "LOCATIONS_CSV", default_value = DEFAULT_LOCATIONS_FILE)]
    locations: PathBuf,

    /// Reference latitude (-90 to 90).
    #[arg(long, env = "REFERENCE_LAT", allow_hyphen_values = true)]
    reference_lat: f64,

    /// Reference longitude (-180 to 180).
    #[arg(long, env = "REFERENCE_LON", allow_hyphen_values = true)]
    reference_lon: f64,

    /// Search radius around the reference point, in km.
    #[arg(long, env = "RADIUS_KM", default_value_t = DEFAULT_RADIUS_KM)]
    radius_km: f64,

    /// Base search term.
    #[arg(long, env = "SEARCH_TERM", default_value = DEFAULT_SEARCH_TERM)]
    term: String,

    /// Restrict results to this domain (e.g. facebook.com).
    #[arg(long, env = "SITE_FILTER", default_value = "")]
    site: String,

    /// Number of results to request.
    #[arg(long, env = "NUM_RESULTS", default_value_t = DEFAULT_NUM_RESULTS)]
    num_results: usize,

    /// Custom Search API key.
    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Custom Search engine id (cx).
    #[arg(long, env = "GOOGLE_CSE_ID")]
    search_engine_id: Option<String>,

    /// Facebook group whose feed should be read.
    #[arg(long, env = "FACEBOOK_GROUP_ID")]
    facebook_group_id: Option<String>,

    /// Graph API access token for the group feed.
    #[arg(long, env = "FACEBOOK_ACCESS_TOKEN", hide_env_values = true)]
    facebook_access_token: Option<String>,

    /// Only filter and print the query; make no network calls.
    #[arg(long)]
    dry_run: bool,

    /// Print the report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> SearchConfig {
        let mut config = SearchConfig::new(ReferencePoint::new(self.reference_lat, self.reference_lon));
        config.locations_file = self.locations;
        config.radius_km = self.radius_km;
        config.search_term = self.term;
        config.site_filter = self.site;
        config.num_results = self.num_results;
        config.google = pair_credentials(self.api_key, self.search_engine_id).map(
            |(api_key, search_engine_id)| GoogleCredentials {
                api_key,
                search_engine_id,
            },
        );
        config.facebook = pair_credentials(self.facebook_group_id, self.facebook_access_token).map(
            |(group_id, access_token)| FacebookCredentials {
                group_id,
                access_token,
            },
        );
        config
    }
}

fn main() -> Result<()> {
    // .env is optional
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let dry_run = cli.dry_run;
    let json = cli.json;

    // ── Configuration ───────────────────────────────────────────

    let config = cli.into_config();
    config.validate().context("Invalid configuration")?;

    eprintln!(
        "  Searching within {} km of {}",
        config.radius_km,
        format_coords(config.reference.lat, config.reference.lon)
    );

    // ── Load locations ──────────────────────────────────────────

    let locations = location::load_from_path(&config.locations_file).with_context(|| {
        format!(
            "Could not load locations from {}",
            config.locations_file.display()
        )
    })?;

    // ── Collaborators ───────────────────────────────────────────

    let google = match (&config.google, dry_run) {
        (Some(creds), false) => Some(GoogleSearch::new(&creds.api_key, &creds.search_engine_id)),
        (None, false) => {
            log::warn!("GOOGLE_API_KEY / GOOGLE_CSE_ID not set, skipping web search");
            None
        }
        (_, true) => None,
    };
    let facebook = match (&config.facebook, dry_run) {
        (Some(creds), false) => Some(FacebookGroupFeed::new(&creds.group_id, &creds.access_token)),
        _ => None,
    };

    // ── Run ─────────────────────────────────────────────────────

    let report = report::run(
        &config,
        &locations,
        google.as_ref().map(|g| g as &dyn SearchBackend),
        facebook.as_ref().map(|f| f as &dyn PostFeed),
    );

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}
