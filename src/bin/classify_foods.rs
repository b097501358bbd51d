//! Batch attribute classification over the food store

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hffc::classify::ClassifyScope;
use hffc::store::{resolve_foods_dir, FoodStore};
use hffc::tools::classify::{analyze_groups, classify_foods};

#[derive(Parser, Debug)]
#[command(about = "Recompute dietary and food-group attributes for every stored food")]
struct Args {
    /// Foods directory (defaults to HFFC_FOODS_DIR, then ./Foods)
    #[arg(long, value_name = "DIR")]
    foods_dir: Option<PathBuf>,

    /// Write the recomputed attributes back to disk
    #[arg(long)]
    apply: bool,

    /// Report food-group coverage instead of classifying
    #[arg(long)]
    analyze: bool,

    /// Only recompute dietary restriction labels
    #[arg(long, conflicts_with = "groups_only")]
    dietary_only: bool,

    /// Only recompute food-group labels
    #[arg(long)]
    groups_only: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("hffc=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let store = FoodStore::new(resolve_foods_dir(args.foods_dir));

    if args.analyze {
        let report = analyze_groups(&store)?;
        println!("Foods checked: {} ({} skipped)", report.total, report.skipped);
        for (group, count) in &report.group_counts {
            println!("  {:<12} {}", group, count);
        }
        if report.unclassified.is_empty() {
            println!("All foods carry at least one food group");
        } else {
            println!("\n{} foods without a food group:", report.unclassified.len());
            for name in &report.unclassified {
                println!("  - {}", name);
            }
        }
        return Ok(());
    }

    let scope = if args.dietary_only {
        ClassifyScope::Dietary
    } else if args.groups_only {
        ClassifyScope::Groups
    } else {
        ClassifyScope::Full
    };

    let response = classify_foods(&store, scope, args.apply)?;
    println!("Foods checked: {} ({} skipped)", response.total, response.skipped);
    if response.changes.is_empty() {
        println!("All attributes already up to date");
        return Ok(());
    }

    for change in &response.changes {
        println!("~ {} ({})", change.name, change.file);
        println!("    before: [{}]", change.before.join(", "));
        println!("    after:  [{}]", change.after.join(", "));
    }
    if response.applied {
        println!("\n{} foods rewritten", response.changes.len());
    } else {
        println!(
            "\n{} foods would change (dry run, use --apply to write)",
            response.changes.len()
        );
    }

    Ok(())
}
