//! Remove cup unit options that carry no gram weight

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hffc::store::{resolve_foods_dir, FoodStore};
use hffc::tools::prune::prune_units;

#[derive(Parser, Debug)]
#[command(about = "Remove cup unit options with portionInGrams = 0")]
struct Args {
    /// Foods directory (defaults to HFFC_FOODS_DIR, then ./Foods)
    #[arg(long, value_name = "DIR")]
    foods_dir: Option<PathBuf>,

    /// Write the pruned records back to disk
    #[arg(long)]
    apply: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hffc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let store = FoodStore::new(resolve_foods_dir(args.foods_dir));

    let response = prune_units(&store, args.apply)?;
    println!("Foods checked: {} ({} skipped)", response.total, response.skipped);
    if response.pruned.is_empty() {
        println!("No zero-gram cup units found");
        return Ok(());
    }

    for item in &response.pruned {
        println!("~ {} ({}): {} unit option(s)", item.name, item.file, item.removed);
    }
    if response.applied {
        println!("\n{} foods rewritten", response.pruned.len());
    } else {
        println!(
            "\n{} foods would change (dry run, use --apply to write)",
            response.pruned.len()
        );
    }

    Ok(())
}
