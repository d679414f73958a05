use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use sprout::cli::commands;
use sprout::{config, server};

#[derive(Parser)]
#[command(name = "sprout")]
#[command(about = "Sprout - Plant Growth Measurement Log\nRecord, browse and share plant measurements")]
#[command(version)]
struct Cli {
  /// Path of the JSON store file
  #[arg(long, env = config::DATA_ENV, global = true)]
  data_file: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Start the web UI
  Serve {
    /// Address to listen on
    #[arg(long, env = "SPROUT_ADDR", default_value = "127.0.0.1:7420")]
    addr: SocketAddr,
    /// Public base URL encoded into QR links (defaults to http://<addr>)
    #[arg(long, env = "SPROUT_BASE_URL")]
    base_url: Option<String>,
  },
  /// Record a measurement from the terminal
  Add {
    /// Measurement date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<String>,
    /// Plant height in centimeters
    #[arg(long)]
    height: String,
    /// Chlorophyll content in mg/g
    #[arg(long)]
    chlorophyll: String,
    /// Nitrogen content in %
    #[arg(long)]
    nitrogen: String,
    /// Attach a thermal image file
    #[arg(long)]
    thermal_image: Option<PathBuf>,
    /// Attach a visible-light image file
    #[arg(long)]
    visible_image: Option<PathBuf>,
  },
  /// List all records, newest first
  List,
  /// Show one record by its index
  Show {
    /// Insertion-order index of the record
    index: String,
  },
  /// Export all records as CSV
  Export {
    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sprout=info")))
    .init();

  let cli = Cli::parse();
  let data_file = config::data_file_path(cli.data_file);

  match cli.command {
    Command::Serve { addr, base_url } => {
      let base_url = base_url.unwrap_or_else(|| format!("http://{addr}"));
      server::start_server(addr, data_file, base_url).await
    }
    Command::Add { date, height, chlorophyll, nitrogen, thermal_image, visible_image } => {
      commands::add(
        &data_file,
        date,
        height,
        chlorophyll,
        nitrogen,
        thermal_image.as_deref(),
        visible_image.as_deref(),
      )
    }
    Command::List => commands::list(&data_file),
    Command::Show { index } => commands::show(&data_file, &index),
    Command::Export { output } => commands::export(&data_file, output.as_deref()),
  }
}
