mod cli;

use anyhow::Result;
use clap::Parser as ClapParser;
use cli::{Cli, Commands};
use serde::Deserialize;
use showforge_common::{Episode, Series};
use showforge_parser::{MemoryLookup, NoLookup, ParsedEpisodeInfo, Parser};
use std::path::Path;

/// On-disk shape of the optional library file.
#[derive(Debug, Default, Deserialize)]
struct LibraryFile {
    #[serde(default)]
    series: Vec<Series>,
    #[serde(default)]
    episodes: Vec<Episode>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on the
    // verbose flag.
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "showforge=trace,showforge_parser=trace,showforge_common=debug".to_string()
        } else {
            "showforge=info,showforge_parser=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let library = load_library(cli.library.as_deref())?;

    match cli.command {
        Commands::Parse { title, json } => {
            let result = with_library(&library, |parser| parser.parse_title(&title))?;
            report(&title, result, json)
        }
        Commands::ParsePath { path, json } => {
            let result = with_library(&library, |parser| parser.parse_path(&path))?;
            report(&path.display().to_string(), result, json)
        }
        Commands::Group { title } => {
            match showforge_parser::parse_release_group(&title) {
                Some(group) => println!("{group}"),
                None => println!("(no release group)"),
            }
            Ok(())
        }
        Commands::Language { title } => {
            println!("{}", showforge_parser::parse_language(&title));
            Ok(())
        }
        Commands::Version => {
            println!("showforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn load_library(path: Option<&Path>) -> Result<Option<MemoryLookup>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let raw = std::fs::read_to_string(path)?;
    let file: LibraryFile = serde_json::from_str(&raw)?;
    tracing::info!(
        series = file.series.len(),
        episodes = file.episodes.len(),
        "loaded library"
    );
    let mut lookup = MemoryLookup::new();
    for series in file.series {
        lookup.add_series(series);
    }
    for episode in file.episodes {
        lookup.add_episode(episode);
    }
    Ok(Some(lookup))
}

fn with_library<F>(library: &Option<MemoryLookup>, run: F) -> Result<Option<ParsedEpisodeInfo>>
where
    F: FnOnce(&Parser<'_>) -> showforge_parser::Result<Option<ParsedEpisodeInfo>>,
{
    let parsed = match library {
        Some(lookup) => run(&Parser::new(lookup, lookup))?,
        None => run(&Parser::new(&NoLookup, &NoLookup))?,
    };
    Ok(parsed)
}

fn report(input: &str, result: Option<ParsedEpisodeInfo>, json: bool) -> Result<()> {
    let Some(info) = result else {
        if json {
            println!("null");
        } else {
            println!("Not parseable as an episode: {input}");
        }
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Series:   {}", info.series_title);
    match &info.numbering {
        Some(showforge_parser::Numbering::Seasonal {
            season,
            episodes,
            full_season,
        }) => {
            if *full_season {
                println!("Season:   {season} (full season)");
            } else {
                let list = episodes
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("Season:   {season}");
                println!("Episodes: {list}");
            }
        }
        Some(showforge_parser::Numbering::Absolute { episodes }) => {
            let list = episodes
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!("Absolute: {list}");
        }
        Some(showforge_parser::Numbering::Daily { air_date }) => {
            println!("Air date: {air_date}");
        }
        None => println!("Numbering: none (special)"),
    }
    println!("Quality:  {}", info.quality);
    if info.revision.is_repack() || info.revision.real > 0 {
        println!(
            "Revision: v{} (real x{})",
            info.revision.version, info.revision.real
        );
    }
    println!("Language: {}", info.language);
    if let Some(group) = &info.release_group {
        println!("Group:    {group}");
    }
    if let Some(hash) = &info.release_hash {
        println!("Hash:     {hash}");
    }
    if info.special {
        println!("Special:  yes");
    }
    Ok(())
}
