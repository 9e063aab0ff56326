use clap::{Parser, Subcommand};
use pillar_pages::config::{self, SiteConfig};
use pillar_pages::generate::{self, GenerateError};
use pillar_pages::pillars::PillarTable;
use pillar_pages::{output, preflight};

#[derive(Parser)]
#[command(name = "pillar-pages")]
#[command(version)]
#[command(about = "Scaffold the multi-pillar analysis site for GitHub Pages")]
#[command(long_about = "\
Scaffold the multi-pillar analysis site for GitHub Pages

Run with no arguments from the root of the site's Git repository. Every run
rewrites all generated files:

  ./
  ├── index.html              # Navigation hub, one card per pillar
  ├── assets/css/style.css    # Shared stylesheet
  ├── assets/js/common.js     # Dashboard loader used by every pillar page
  ├── adoption/
  │   ├── index.html          # Pillar page
  │   └── data.json           # Metadata record fetched by the page
  └── ...                     # One directory per pillar

Nothing is written unless a .git entry exists in the current directory.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Check the precondition and list what a run would write
    Check,
    /// Print the built-in site settings and pillar table as TOML
    ShowConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let table = PillarTable::stock();
    let site = SiteConfig::default();
    let root = std::env::current_dir()?;

    match cli.command {
        None => {
            output::print_banner(&site);
            let now = chrono::Local::now();
            match generate::generate(&root, &table, &site, &now, output::print_event) {
                Ok(_) => output::print_summary(&site, &table),
                Err(GenerateError::Preflight(err)) => output::print_preflight_error(&err),
                Err(err) => return Err(err.into()),
            }
        }
        Some(Command::Check) => {
            if let Err(err) = preflight::check(&root) {
                output::print_preflight_error(&err);
                return Ok(());
            }
            site.validate()?;
            output::print_check(&table, &generate::planned_files(&table));
        }
        Some(Command::ShowConfig) => {
            print!("{}", config::render_effective_config(&site, &table)?);
        }
    }

    Ok(())
}
