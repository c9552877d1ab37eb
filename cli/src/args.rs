use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "charsep")]
#[command(about = "Find the whitespace rows and columns of a scanned text image")]
pub struct Args {
    /// Path to the image to analyze
    pub image: PathBuf,

    /// Write a copy of the image with separators painted to this path
    #[arg(short = 'm', long, value_name = "PATH")]
    pub mark: Option<PathBuf>,

    /// Output results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show image info and statistics
    #[arg(short, long)]
    pub verbose: bool,
}
