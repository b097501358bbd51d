//! Compile the food store into a single export document

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hffc::store::{resolve_foods_dir, FoodStore};
use hffc::tools::compile::{compile_foods, food_names};

#[derive(Parser, Debug)]
#[command(about = "Aggregate every stored food into one JSON document")]
struct Args {
    /// Foods directory (defaults to HFFC_FOODS_DIR, then ./Foods)
    #[arg(long, value_name = "DIR")]
    foods_dir: Option<PathBuf>,

    /// Output file
    #[arg(long, value_name = "FILE", default_value = "FoodData.json")]
    output: PathBuf,

    /// Emit the bare-array shape older consumers expect
    #[arg(long)]
    legacy_array: bool,

    /// Also write the food-name list to this file
    #[arg(long, value_name = "FILE")]
    names_out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hffc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let store = FoodStore::new(resolve_foods_dir(args.foods_dir));

    let response = compile_foods(&store, args.legacy_array)?;
    std::fs::write(&args.output, &response.json)?;
    println!(
        "Compiled {} foods into {} ({} skipped)",
        response.foods,
        args.output.display(),
        response.skipped
    );

    if let Some(path) = &args.names_out {
        std::fs::write(path, food_names(&store)?)?;
        println!("Food names written to {}", path.display());
    }

    Ok(())
}
