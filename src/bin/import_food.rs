//! Fetch a food from FoodData Central and add it to the store

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hffc::fetch::FdcClient;
use hffc::store::{resolve_foods_dir, FoodStore};
use hffc::tools::import::import_record;

#[derive(Parser, Debug)]
#[command(about = "Import a food record from USDA FoodData Central")]
struct Args {
    /// Foods directory (defaults to HFFC_FOODS_DIR, then ./Foods)
    #[arg(long, value_name = "DIR")]
    foods_dir: Option<PathBuf>,

    /// FoodData Central ID to fetch
    #[arg(long, value_name = "ID", conflicts_with = "query")]
    fdc_id: Option<u64>,

    /// Search FoodData Central and take the best hit
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,

    /// Display name for the stored record
    #[arg(long, value_name = "NAME")]
    name: String,

    /// FoodData Central API key (defaults to FDC_API_KEY)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hffc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let store = FoodStore::new(resolve_foods_dir(args.foods_dir));

    let api_key = match args.api_key.or_else(|| std::env::var("FDC_API_KEY").ok()) {
        Some(key) => key,
        None => return Err("an API key is required (--api-key or FDC_API_KEY)".into()),
    };
    let client = FdcClient::new(api_key)?;

    let record = if let Some(fdc_id) = args.fdc_id {
        eprintln!("Fetching FDC record {}...", fdc_id);
        client.fetch_by_id(fdc_id, &args.name)?
    } else if let Some(query) = &args.query {
        eprintln!("Searching FoodData Central for \"{}\"...", query);
        client.fetch_by_query(query, &args.name)?
    } else {
        return Err("either --fdc-id or --query is required".into());
    };

    let response = import_record(&store, record)?;
    println!("Imported {} as {}", response.name, response.file);
    println!("Attributes: [{}]", response.attributes.join(", "));

    Ok(())
}
