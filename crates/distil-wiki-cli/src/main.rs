mod library;

use anyhow::{Context, Result, bail};
use distil_wiki_config::{Config, ConfigError};
use distil_wiki_engine::{
    DISPLAY_COLUMNS, LinkResolver, NoLinks, RenderOptions, TagSet, parse_blocks, render,
};
use library::{LibraryResolver, clean_note_text};
use std::{
    env,
    io::{self, Read},
    path::PathBuf,
    process,
};

const USAGE: &str = "\
Usage: distil-wiki [--library <path>] <command>

Commands:
  render [FILE]   Render a note (FILE or stdin) to HTML
  page KEY        Render the library's wiki page KEY to HTML
  fmt [FILE]      Print a note (FILE or stdin) as normalized wiki markup
  tags TAG...     Normalize tags and print them in columns";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Render { file: Option<PathBuf> },
    Page { key: String },
    Fmt { file: Option<PathBuf> },
    Tags { input: Vec<String> },
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    library: Option<PathBuf>,
    command: Command,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut library = None;
    let mut rest = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--library" => {
                let path = iter.next().context("--library needs a path")?;
                library = Some(PathBuf::from(path));
            }
            _ => rest.push(arg.as_str()),
        }
    }

    let command = match rest.as_slice() {
        ["render"] => Command::Render { file: None },
        ["render", file] => Command::Render {
            file: Some(PathBuf::from(file)),
        },
        ["page", key] => Command::Page {
            key: (*key).to_string(),
        },
        ["fmt"] => Command::Fmt { file: None },
        ["fmt", file] => Command::Fmt {
            file: Some(PathBuf::from(file)),
        },
        ["tags", input @ ..] if !input.is_empty() => Command::Tags {
            input: input.iter().map(|s| s.to_string()).collect(),
        },
        _ => bail!("unrecognized arguments: {}", rest.join(" ")),
    };

    Ok(Args { library, command })
}

fn read_note(file: Option<&PathBuf>) -> Result<String> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    Ok(clean_note_text(&text))
}

fn render_with<R>(text: &str, resolver: &R, options: &RenderOptions) -> Result<String>
where
    R: LinkResolver,
    R::Error: Send + Sync,
{
    let doc = parse_blocks(text);
    log::debug!("parsed {} blocks", doc.blocks.len());
    Ok(render(&doc, resolver, options)?)
}

/// Library path and render options for the rendering commands. A `--library`
/// flag wins over the config file, and an unreadable config is only fatal
/// when there is no flag to fall back on.
fn render_settings(
    library: Option<PathBuf>,
    load: impl FnOnce() -> Result<Option<Config>, ConfigError>,
) -> Result<(Option<PathBuf>, RenderOptions)> {
    let config = match load() {
        Ok(config) => config,
        Err(e) if library.is_some() => {
            log::warn!("{e}; using default render options");
            None
        }
        Err(e) => return Err(e).context("No usable library configuration"),
    };
    let options = config
        .as_ref()
        .map(Config::render_options)
        .unwrap_or_default();
    let library_path = library.or_else(|| config.map(|c| c.library_path));
    Ok((library_path, options))
}

/// Lays the sorted tags out as side-by-side columns.
fn format_tag_columns(tags: &TagSet) -> String {
    let columns = tags.columns(DISPLAY_COLUMNS);
    let width = tags.iter().map(|t| t.as_str().chars().count()).max().unwrap_or(0);
    let rows = columns.first().map_or(0, Vec::len);

    (0..rows)
        .map(|row| {
            columns
                .iter()
                .filter_map(|column| column.get(row))
                .map(|tag| format!("{tag:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let argv: Vec<String> = env::args().collect();
    let args = match parse_args(argv.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    match args.command {
        Command::Render { file } => {
            let (library_path, options) = render_settings(args.library, Config::load)?;
            let text = read_note(file.as_ref())?;
            let html = match &library_path {
                Some(path) => render_with(&text, &LibraryResolver::open(path, &options)?, &options)?,
                None => {
                    log::warn!(
                        "No library configured (use --library or {}); links will not resolve",
                        config_path.display()
                    );
                    render_with(&text, &NoLinks, &options)?
                }
            };
            print!("{html}");
        }
        Command::Page { key } => {
            let (library_path, options) = render_settings(args.library, Config::load)?;
            let Some(path) = &library_path else {
                bail!(
                    "No library path provided and no config file found at {}",
                    config_path.display()
                );
            };
            let resolver = LibraryResolver::open(path, &options)?;
            log::info!("Rendering page {key} from {}", resolver.root().display());
            let text = resolver.read_wiki_page(&key)?;
            print!("{}", render_with(&text, &resolver, &options)?);
        }
        Command::Fmt { file } => {
            let text = read_note(file.as_ref())?;
            println!("{}", parse_blocks(&text).to_markup());
        }
        Command::Tags { input } => {
            let mut tags = TagSet::new();
            for raw in &input {
                tags.extend_from_input(raw);
            }
            println!("{}", format_tag_columns(&tags));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_render_with_library() {
        let parsed = parse_args(&args(&["--library", "/srv/lib", "render", "note.wiki"])).unwrap();
        assert_eq!(
            parsed,
            Args {
                library: Some(PathBuf::from("/srv/lib")),
                command: Command::Render {
                    file: Some(PathBuf::from("note.wiki")),
                },
            }
        );
    }

    #[test]
    fn test_parse_library_flag_after_command() {
        let parsed = parse_args(&args(&["page", "reading-list", "--library", "/srv/lib"])).unwrap();
        assert_eq!(parsed.library, Some(PathBuf::from("/srv/lib")));
        assert_eq!(
            parsed.command,
            Command::Page {
                key: "reading-list".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["tags"])).is_err());
        assert!(parse_args(&args(&["render", "a", "b"])).is_err());
        assert!(parse_args(&args(&["render", "--library"])).is_err());
    }

    #[test]
    fn test_parse_tags() {
        let parsed = parse_args(&args(&["tags", "NLP,parsing", "theory"])).unwrap();
        assert_eq!(
            parsed.command,
            Command::Tags {
                input: args(&["NLP,parsing", "theory"]),
            }
        );
    }

    fn unreadable_config() -> Result<Option<Config>, ConfigError> {
        Err(ConfigError::ConfigReadError {
            config_path: PathBuf::from("/home/me/.config/distil-wiki/config.toml"),
            source: io::Error::other("permission denied"),
        })
    }

    #[test]
    fn test_library_flag_survives_broken_config() {
        let (library, options) =
            render_settings(Some(PathBuf::from("/srv/lib")), unreadable_config).unwrap();
        assert_eq!(library, Some(PathBuf::from("/srv/lib")));
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_broken_config_without_flag_is_an_error() {
        let err = render_settings(None, unreadable_config).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn test_flag_overrides_config_library() {
        let config = Config {
            heading_offset: 2,
            ..Config::new("/from/config")
        };
        let (library, options) =
            render_settings(Some(PathBuf::from("/srv/lib")), || Ok(Some(config))).unwrap();
        assert_eq!(library, Some(PathBuf::from("/srv/lib")));
        assert_eq!(options.heading_offset, 2);

        let (library, _) = render_settings(None, || Ok(None)).unwrap();
        assert_eq!(library, None);
    }

    #[test]
    fn test_format_tag_columns() {
        let mut tags = TagSet::new();
        tags.extend_from_input("nlp, parsing theory ml ai");
        // ai ml nlp parsing theory -> columns of 2
        assert_eq!(
            format_tag_columns(&tags),
            "ai       nlp      theory\nml       parsing"
        );
    }

    #[test]
    fn test_format_empty_tags() {
        assert_eq!(format_tag_columns(&TagSet::new()), "");
    }

    #[test]
    fn test_read_note_cleans_file_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.wiki");
        std::fs::write(&path, "= T =\r\nbody  \n\n").unwrap();

        assert_eq!(read_note(Some(&path)).unwrap(), "= T =\nbody");
    }

    #[test]
    fn test_read_note_missing_file() {
        let err = read_note(Some(&PathBuf::from("/no/such/note.wiki"))).unwrap_err();
        assert!(err.to_string().contains("/no/such/note.wiki"));
    }
}
