mod data;
mod state;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use data::export::write_export;
use data::filter::Criteria;
use data::loader::load_file;
use state::Session;

/// Analyze a short-term rental listings dataset: filter by price, rooms and
/// review score, report aggregate statistics, and rank hosts by listing
/// count.
#[derive(Debug, Parser)]
#[command(name = "stayscan", version)]
struct Args {
    /// Dataset file (.csv, .gz or .zip)
    input: PathBuf,

    /// Minimum nightly price
    #[arg(long)]
    min_price: Option<f64>,

    /// Maximum nightly price
    #[arg(long)]
    max_price: Option<f64>,

    /// Minimum number of bedrooms
    #[arg(long)]
    min_rooms: Option<f64>,

    /// Maximum number of bedrooms
    #[arg(long)]
    max_rooms: Option<f64>,

    /// Minimum review score
    #[arg(long)]
    min_score: Option<f64>,

    /// Maximum review score
    #[arg(long)]
    max_score: Option<f64>,

    /// Number of hosts to show in the ranking
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Write the full results (listings + statistics + ranking) to this
    /// JSON file
    #[arg(long)]
    export: Option<PathBuf>,
}

impl Args {
    fn criteria(&self) -> Criteria {
        Criteria {
            min_price: self.min_price,
            max_price: self.max_price,
            min_rooms: self.min_rooms,
            max_rooms: self.max_rooms,
            min_review_score: self.min_score,
            max_review_score: self.max_score,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let listings = load_file(&args.input)?;
    info!("loaded {} listings from {}", listings.len(), args.input.display());

    let mut session = Session::new(listings);
    session.apply_filter(&args.criteria());
    info!("{} listings match the criteria", session.filtered_listings().len());

    let stats = session.statistics().clone();
    println!("Listings matched:       {}", stats.total_listings);
    println!("Avg price per room:     {}", stats.average_price_per_room);

    let ranking = session.host_ranking().to_vec();
    if !ranking.is_empty() {
        println!();
        println!("Top hosts by listing count:");
        for entry in ranking.iter().take(args.top) {
            println!(
                "  {:<12} {:<24} {}",
                entry.host_id, entry.host_name, entry.listings_count
            );
        }
    }

    if let Some(path) = &args.export {
        let bundle = session.export_bundle();
        write_export(&bundle, path)?;
        println!();
        println!("Results written to {}", path.display());
    }

    Ok(())
}
