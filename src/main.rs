use catalog_cards::{config, generate, output, site};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "catalog-cards")]
#[command(about = "Render documentation catalogs as card grids")]
#[command(long_about = "\
Render documentation catalogs as card grids

Each catalog is an ordered table of resources (guides, crates). Entries are
validated when loaded and rendered in declaration order as cards with a title,
summary, and a call-to-action link.

Entry fields:

  identifier   unique within the catalog (rendering key)
  target       \"/root/relative\", \"https://...\", or \"#\" when not ready yet
  title        non-empty
  summary      optional

Configuration is read from catalog.toml in the --config directory.
Run 'catalog-cards gen-config' to print a documented default.")]
#[command(version)]
struct Cli {
    /// Directory containing catalog.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate every catalog and list the cards without writing anything
    Check,
    /// Write the rendered sections as HTML
    Build {
        /// Write a bare sections.html fragment instead of a full index.html
        #[arg(long)]
        fragment: bool,
    },
    /// Print the rendered sections as JSON
    Json,
    /// Print a stock catalog.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Check => {
            let site_config = config::load_config(&cli.config)?;
            println!("==> Checking {}", cli.config.join(config::CONFIG_FILE).display());
            let sections = site::build_sections(&site_config)?;
            output::print_check_output(&sections);
            println!("==> Catalogs are valid");
        }
        Command::Build { fragment } => {
            let site_config = config::load_config(&cli.config)?;
            println!("==> Building {}", cli.output.display());
            let result = generate::generate(&site_config, &cli.output, fragment)?;
            output::print_generate_output(&result);
        }
        Command::Json => {
            let site_config = config::load_config(&cli.config)?;
            let sections = site::build_sections(&site_config)?;
            println!("{}", serde_json::to_string_pretty(&sections)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
