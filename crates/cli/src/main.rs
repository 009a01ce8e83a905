use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::{OwoColorize, Stream};
use tracing_subscriber::EnvFilter;

mod cmd;

/// fwhook - build hooks for the firmware pipeline
#[derive(Parser)]
#[command(name = "fwhook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the program name from source defines and set it in the build environment
    Name {
        /// Header file containing the defines
        #[arg(default_value = "src/GlobalVar.h")]
        header: PathBuf,

        /// Path to the build environment file
        #[arg(short, long, default_value = "build_env.toml")]
        env: PathBuf,

        /// Define holding the device name
        #[arg(long, default_value = "HOSTNAME")]
        name_define: String,

        /// Define holding the firmware version
        #[arg(long, default_value = "VERSION")]
        version_define: String,
    },

    /// Gzip-compress the firmware binary for OTA delivery
    Compress {
        /// Path to the build environment file
        #[arg(short, long, default_value = "build_env.toml")]
        env: PathBuf,

        /// Print the size report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .without_time()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Name {
            header,
            env,
            name_define,
            version_define,
        } => cmd::cmd_name(&env, &header, &name_define, &version_define),
        Commands::Compress { env, json } => cmd::cmd_compress(&env, json),
    };

    if let Err(e) = result {
        eprintln!(
            "{} {:#}",
            "error:".if_supports_color(Stream::Stderr, |s| s.red()),
            e
        );
        std::process::exit(1);
    }
}
