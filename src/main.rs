use clap::{Parser, Subcommand};
use simple_gloss::{config, generate, output, parse, types};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-gloss")]
#[command(about = "Static glossary generator")]
#[command(long_about = "\
Static glossary generator

A flat text file is the data source: each record is a term line followed by
one or more definition lines, closed by a blank line.

Source format:

  terms.txt
  ┌──────────────────────────────────────────────
  │ book
  │ a printed or written literary work
  │
  │ glossary
  │ a list of difficult or specialized terms,
  │  usually near the end of a book
  └──────────────────────────────────────────────

Output: index.html listing every term alphabetically, plus one page per term
with any other glossary term mentioned in its definition hyperlinked to that
term's page.

An optional config.toml next to the source file controls the site title and
colors. Run 'simple-gloss gen-config' to print a documented stock config.")]
#[command(version)]
struct Cli {
    /// Glossary source file
    #[arg(long, default_value = "terms.txt", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".simple-gloss-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse the glossary source file into a manifest
    Parse,
    /// Produce the HTML site from a parsed manifest
    Generate,
    /// Run the full pipeline: parse → generate
    Build,
    /// Validate the glossary source file without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse => {
            let manifest = parse::parse_file(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(cli.temp_dir.join("manifest.json"), json)?;
            output::print_parse_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            generate::generate(&manifest_path, &cli.output)?;
            let manifest_content = std::fs::read_to_string(&manifest_path)?;
            let manifest: types::Manifest = serde_json::from_str(&manifest_content)?;
            output::print_generate_output(&manifest);
        }
        Command::Build => {
            println!("==> Stage 1: Parsing {}", cli.source.display());
            let manifest = parse::parse_file(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_parse_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML \u{2192} {}", cli.output.display());
            generate::generate_site(&manifest, &cli.output)?;
            output::print_generate_output(&manifest);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = parse::parse_file(&cli.source)?;
            output::print_parse_output(&manifest, &cli.source);
            println!("==> Glossary is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
