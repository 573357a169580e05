use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "clarc")]
#[command(about = "Archive your clipboard, or recover archived clipboards.", long_about = None)]
pub struct Cli {
    /// Archive your current clipboard with specified key.
    #[arg(short, long, value_name = "key")]
    pub archive: Option<String>,

    /// Retrieve archived clipboard with specified key.
    #[arg(short, long, value_name = "key")]
    pub copy: Option<String>,

    /// Use this archive file instead of the configured one
    #[arg(long, value_name = "path")]
    pub store: Option<PathBuf>,
}
