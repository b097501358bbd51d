//! Validate every stored food and report findings

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hffc::store::{resolve_foods_dir, FoodStore};
use hffc::tools::validate::validate_foods;

#[derive(Parser, Debug)]
#[command(about = "Run the data-quality checks over every stored food")]
struct Args {
    /// Foods directory (defaults to HFFC_FOODS_DIR, then ./Foods)
    #[arg(long, value_name = "DIR")]
    foods_dir: Option<PathBuf>,

    /// Write the findings to a JSON report file
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,

    /// Show advisory findings as well
    #[arg(long)]
    verbose: bool,

    /// Also print the findings grouped per food file
    #[arg(long)]
    by_food: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hffc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let store = FoodStore::new(resolve_foods_dir(args.foods_dir));

    let report = validate_foods(&store)?;
    println!("{}", report.render(args.verbose));

    if args.by_food {
        println!("{}", report.render_by_file());
    }

    if let Some(path) = &args.export {
        std::fs::write(path, report.to_json()?)?;
        eprintln!("Report written to {}", path.display());
    }

    if report.has_blocking() {
        process::exit(1);
    }
    Ok(())
}
