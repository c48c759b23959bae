use anyhow::Result;
use clap::Parser;
use flickr_grid::utils::config::Config;
use flickr_grid::utils::logging;
use flickr_grid::{GridPhase, PhotoServices};
use tracing::{info, warn};

/// Print Flickr's recent photos, or search results, one line per photo.
#[derive(Debug, Parser)]
#[command(name = "flickr-grid", about = "Page through Flickr recent photos or a search")]
struct Cli {
    /// Number of pages to load
    #[arg(long, value_name = "N", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,

    /// Search terms, joined with spaces. Omit for recent photos.
    terms: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let cfg = Config::from_env();
    if cfg.api_key.is_empty() {
        warn!("FLICKR_API_KEY is not set; Flickr will reject requests");
    }
    info!(config = ?cfg, pages = cli.pages, "starting");

    let services = PhotoServices::from_config(cfg)?;
    let grid = services.grid_view_model();
    if cli.terms.is_empty() {
        grid.load_recent().await;
    } else {
        grid.search(&cli.terms.join(" ")).await;
    }

    for _ in 1..cli.pages {
        if !grid.state().has_more_pages() {
            break;
        }
        grid.load_next_page().await;
    }

    let state = grid.state();
    if let GridPhase::Error(_, message) = state.phase() {
        anyhow::bail!("{}", message);
    }

    for photo in &state.photos {
        println!("{}\t{}\t{}", photo.id, photo.title, photo.image_url);
    }
    info!(
        shown = state.photos.len(),
        page = state.current_page,
        total_pages = state.total_pages,
        "done"
    );
    Ok(())
}
