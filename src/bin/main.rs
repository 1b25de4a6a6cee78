use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

use line_collection::config::{load_settings, load_user_config, merge_all};
use line_collection::{LineCollection, PositionEncoding, PositionMapper, PositionNotFound};

/// Map between line/character positions and byte offsets in a text file
#[derive(Parser)]
#[command(name = "line-collection")]
#[command(version)]
#[command(about = "Map between line/character positions and byte offsets in a text file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Unit of the character field: utf-8, utf-16, utf-32 or grapheme
    #[arg(long, global = true)]
    encoding: Option<PositionEncoding>,

    /// Settings file layered over the user config
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the line table as JSON
    Lines {
        /// The document to read
        file: PathBuf,
    },
    /// Print the byte offset of a line/character position
    Offset {
        /// The document to read
        file: PathBuf,
        /// Zero-based line index
        line: usize,
        /// Zero-based character offset within the line
        character: usize,
    },
    /// Print the position of a byte offset as JSON
    Position {
        /// The document to read
        file: PathBuf,
        /// Byte offset into the document
        #[arg(allow_negative_numbers = true)]
        offset: i64,
    },
    /// Print the range covering LENGTH bytes from OFFSET as JSON
    Selection {
        /// The document to read
        file: PathBuf,
        /// Byte offset of the range start
        #[arg(allow_negative_numbers = true)]
        offset: i64,
        /// Length of the range in bytes
        length: usize,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let encoding = resolve_encoding(cli.encoding, cli.config)?;
    log::debug!("Using position encoding {}", encoding);

    match cli.command {
        Commands::Lines { file } => {
            let lines = LineCollection::from_path(&file, encoding)?;
            let table: Vec<_> = lines
                .lines()
                .iter()
                .enumerate()
                .map(|(line, range)| json!({ "line": line, "start": range.start, "end": range.end }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        Commands::Offset {
            file,
            line,
            character,
        } => {
            let lines = LineCollection::from_path(&file, encoding)?;
            let offset = lines.byte_offset(line_collection::Position::new(line, character))?;
            println!("{}", offset);
        }
        Commands::Position { file, offset } => {
            let lines = LineCollection::from_path(&file, encoding)?;
            let position = lines.position(non_negative(offset)?)?;
            println!("{}", serde_json::to_string(&position)?);
        }
        Commands::Selection {
            file,
            offset,
            length,
        } => {
            let lines = LineCollection::from_path(&file, encoding)?;
            let range = lines.selection(non_negative(offset)?, length)?;
            println!("{}", serde_json::to_string(&range)?);
        }
    }

    Ok(())
}

/// Encoding precedence: command line, then --config file, then user config, then UTF-16
fn resolve_encoding(
    cli_encoding: Option<PositionEncoding>,
    config_path: Option<PathBuf>,
) -> line_collection::Result<PositionEncoding> {
    if let Some(encoding) = cli_encoding {
        return Ok(encoding);
    }

    let user_config = load_user_config().unwrap_or_else(|err| {
        log::warn!("Failed to load user config: {}", err);
        None
    });
    let explicit = config_path.as_deref().map(load_settings).transpose()?;

    Ok(merge_all(&[user_config, explicit])
        .unwrap_or_default()
        .position_encoding())
}

/// Negative offsets never address a document location
fn non_negative(offset: i64) -> Result<usize, PositionNotFound> {
    usize::try_from(offset).map_err(|_| PositionNotFound::offset_out_of_range())
}
