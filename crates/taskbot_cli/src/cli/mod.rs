use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the save file location
    #[arg(long, value_name = "PATH")]
    pub store_path: Option<PathBuf>,

    /// Skip the greeting and goodbye banners
    #[arg(long)]
    pub no_banner: bool,
}
