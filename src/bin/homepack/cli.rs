//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Homepack - build and packaging pipeline for the HomeBlocks native library
#[derive(Parser)]
#[command(name = "homepack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the configuration and write the generated files
    Generate(GenerateArgs),

    /// Show the resolved upstream requirement set
    Deps(DepsArgs),

    /// Generate, then configure, build, and test via CMake
    Build(BuildArgs),

    /// Copy build artifacts into a normalized package tree
    Package(PackageArgs),

    /// Emit the component manifest for consumers
    Export(ExportArgs),
}

/// Configuration inputs shared by every command.
#[derive(Args)]
pub struct ConfigArgs {
    /// Profile file seeding settings and options
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Set a settings axis (e.g. `-s build_type=Debug`)
    #[arg(short = 's', long = "setting", value_name = "KEY=VALUE")]
    pub settings: Vec<String>,

    /// Set an option (e.g. `-o sanitize=True`)
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

#[derive(Args)]
pub struct DepsArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print the requirement set as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Skip the test step
    #[arg(long)]
    pub skip_tests: bool,

    /// Number of parallel jobs
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

#[derive(Args)]
pub struct PackageArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Destination package tree
    #[arg(long, value_name = "DIR", default_value = "package")]
    pub package_folder: PathBuf,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print the manifest as JSON to stdout
    #[arg(long)]
    pub json: bool,

    /// Write the manifest to a file
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
