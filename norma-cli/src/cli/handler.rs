//! Run the full load → derive → write pipeline

use anyhow::Result;
use colored::*;

use super::Cli;
use crate::config::Config;
use crate::sheet::{read_table, write_posts, write_vacant_table};
use crate::staffing::derive_posts;

/// Handle a command-line invocation
pub fn handle(args: Cli) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load(args.config.as_deref())?;
    let output_path = args.output_path();
    let vacant_path = args.vacant_path();

    log::info!("Faculty {}, input {}", args.faculty, args.input.display());

    let table = read_table(&args.input)?;
    let staffing = derive_posts(&table, args.faculty, &config)?;

    write_vacant_table(&staffing.vacant, &vacant_path)?;
    write_posts(&staffing.posts, &output_path)?;

    println!(
        "{} {} rows, {} vacant, {} posts",
        args.faculty.to_string().bright_green().bold(),
        staffing.faculty_rows,
        staffing.vacant.len().to_string().yellow(),
        staffing.posts.len().to_string().cyan().bold()
    );
    println!("  vacant rows: {}", vacant_path.display().to_string().dimmed());
    println!("  posts:       {}", output_path.display().to_string().dimmed());

    Ok(())
}
