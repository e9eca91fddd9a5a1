//! eventmap - Find events near you and keep the ones you like
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use eventmap::api::{FeedClient, find_event};
use eventmap::{
    Config, EventId, FavoritesStore, Language, Message, Settings, SqliteStore, ThemeMode,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match parse_args()? {
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            print_version();
            Ok(())
        }
        command => run(command).await,
    }
}

/// CLI commands
enum Command {
    Events,
    Favorites,
    Add { id: EventId },
    Remove { id: EventId },
    Theme { change: Option<ThemeChange> },
    Language { language: Option<Language> },
    Help,
    Version,
}

enum ThemeChange {
    Set(ThemeMode),
    Toggle,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        return Ok(Command::Events);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-v" | "--version" | "version" => Ok(Command::Version),
        "events" | "ls" => Ok(Command::Events),
        "favorites" | "favs" => Ok(Command::Favorites),

        "add" | "remove" | "rm" => {
            let raw = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("Missing event id"))?;
            let id: EventId = raw.parse()?;
            if args[1] == "add" {
                Ok(Command::Add { id })
            } else {
                Ok(Command::Remove { id })
            }
        }

        "theme" => {
            let change = match args.get(2).map(String::as_str) {
                None => None,
                Some("toggle") => Some(ThemeChange::Toggle),
                Some(other) => Some(ThemeChange::Set(ThemeMode::from_str(other).ok_or_else(
                    || anyhow::anyhow!("Unknown theme: {other} (light, dark or toggle)"),
                )?)),
            };
            Ok(Command::Theme { change })
        }

        "language" | "lang" => {
            let language = match args.get(2) {
                None => None,
                Some(code) => Some(Language::from_code(code).ok_or_else(|| {
                    anyhow::anyhow!("Unsupported language: {code} (en, nl or de)")
                })?),
            };
            Ok(Command::Language { language })
        }

        other => Err(anyhow::anyhow!(
            "Unknown command: {other}\nRun 'eventmap --help' for usage"
        )),
    }
}

async fn run(command: Command) -> Result<()> {
    let config = Config::load()?;
    let db_path = config.database_path()?;
    let storage = Arc::new(
        SqliteStore::open_path(&db_path)
            .with_context(|| format!("Failed to open {}", db_path.display()))?,
    );

    let language = Settings::new(Arc::clone(&storage)).language().await;

    match command {
        Command::Events => list_events(&config, Arc::clone(&storage), language).await,
        Command::Favorites => list_favorites(Arc::clone(&storage), language).await,
        Command::Add { id } => add_favorite(&config, Arc::clone(&storage), &id, language).await,
        Command::Remove { id } => remove_favorite(Arc::clone(&storage), &id, language).await,
        Command::Theme { change } => theme_cli(Settings::new(storage), change).await,
        Command::Language { language } => language_cli(Settings::new(storage), language).await,
        Command::Help | Command::Version => Ok(()),
    }
}

fn feed_client(config: &Config) -> Result<FeedClient> {
    FeedClient::new(&config.feed_url, config.request_timeout())
}

async fn list_events(
    config: &Config,
    storage: Arc<SqliteStore>,
    language: Language,
) -> Result<()> {
    let favorites = FavoritesStore::open(storage).await;
    let events = feed_client(config)?.fetch_events().await?;

    if events.is_empty() {
        println!("{}", language.text(Message::NoEventsFound));
        return Ok(());
    }

    println!("Events\n{}", "─".repeat(60));
    for event in &events {
        let star = if favorites.is_favorite(&event.id) { "★" } else { " " };
        println!(
            "{} [{}] {}  ({:.4}, {:.4})",
            star, event.id, event.title, event.latitude, event.longitude
        );
        println!("      {}", event.preview(70));
    }

    Ok(())
}

async fn list_favorites(storage: Arc<SqliteStore>, language: Language) -> Result<()> {
    let favorites = FavoritesStore::open(storage).await;
    let events = favorites.list();

    if events.is_empty() {
        println!("{}", language.text(Message::NoFavoriteEvents));
        println!("\nAdd one with:");
        println!("  eventmap add <id>");
        return Ok(());
    }

    println!(
        "{} ({})\n{}",
        language.text(Message::Favorites),
        events.len(),
        "─".repeat(60)
    );
    for event in &events {
        println!("★ [{}] {}", event.id, event.title);
        println!("      {}", event.preview(70));
    }

    Ok(())
}

async fn add_favorite(
    config: &Config,
    storage: Arc<SqliteStore>,
    id: &EventId,
    language: Language,
) -> Result<()> {
    let favorites = FavoritesStore::open(storage).await;
    if favorites.is_favorite(id) {
        println!("Event {} is already a favorite", id);
        return Ok(());
    }

    let events = feed_client(config)?.fetch_events().await?;
    let event = find_event(&events, id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("No event with id {id} in the feed"))?;

    let title = event.title.clone();
    favorites.add(event).await?;
    println!("★ {}: {}", language.text(Message::AddedToFavorites), title);

    Ok(())
}

async fn remove_favorite(
    storage: Arc<SqliteStore>,
    id: &EventId,
    language: Language,
) -> Result<()> {
    let favorites = FavoritesStore::open(storage).await;
    if favorites.remove(id).await? {
        println!("{}: {}", language.text(Message::RemovedFromFavorites), id);
    } else {
        println!("Event {} was not a favorite", id);
    }
    Ok(())
}

async fn theme_cli(
    settings: Settings<Arc<SqliteStore>>,
    change: Option<ThemeChange>,
) -> Result<()> {
    let mode = match change {
        None => settings.theme().await,
        Some(ThemeChange::Toggle) => settings.toggle_theme().await?,
        Some(ThemeChange::Set(mode)) => {
            settings.set_theme(mode).await?;
            mode
        }
    };

    let colors = mode.colors();
    println!(
        "Theme: {} (background {}, text {})",
        mode, colors.background, colors.text
    );
    Ok(())
}

async fn language_cli(
    settings: Settings<Arc<SqliteStore>>,
    language: Option<Language>,
) -> Result<()> {
    if let Some(language) = language {
        settings.set_language(language).await?;
    }

    let current = settings.language().await;
    println!("Language: {} ({})", current, current.code());
    Ok(())
}

fn print_help() {
    let config_path = Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r#"eventmap - Find events near you and keep the ones you like

USAGE:
    eventmap                           List events from the feed
    eventmap [COMMAND]

COMMANDS:
    events                             List events (★ marks favorites)
    favorites                          List favorite events
    add <id>                           Add an event from the feed to favorites
    remove <id>                        Remove an event from favorites
    theme [light|dark|toggle]          Show or change the theme
    language [en|nl|de]                Show or change the language
                                       (used for list headings and notices)

OPTIONS:
    -h, --help                         Show this help message
    -v, --version                      Show version information

CONFIG:
    {}
"#,
        config_path
    );
}

fn print_version() {
    println!("eventmap {}", eventmap::VERSION);
}
