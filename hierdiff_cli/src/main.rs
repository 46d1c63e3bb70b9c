use std::fs;
use std::path::PathBuf;

use clap::Parser;
use hierdiff_engine::diff_configs;

#[derive(Debug, Parser)]
#[command(name = "hierdiff")]
#[command(about = "Diff two config files and reconstruct the hierarchical context of each change")]
struct Cli {
    old_file: PathBuf,
    new_file: PathBuf,

    /// Emit the structured result (annotated text plus both context trees)
    /// as pretty-printed JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let old_text = fs::read_to_string(&cli.old_file)?;
    let new_text = fs::read_to_string(&cli.new_file)?;

    let diff = diff_configs(&old_text, &new_text)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
    } else {
        print!("{}", diff.text);
    }

    Ok(())
}
