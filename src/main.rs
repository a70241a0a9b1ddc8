use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

use recipe_browser::config::load_config;
use recipe_browser::display;
use recipe_browser::{
    open_favorites, BrowserConfig, BrowserError, Fetched, Pager, RecipeDetail, RecipeSource,
    POPULAR_SEARCHES,
};

/// Search recipes, read them, and keep a list of favorites
#[derive(Parser, Debug)]
#[command(name = "recipe-browser", version)]
struct Args {
    /// Path to a TOML configuration file (default: ./recipe-browser.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the recipe catalog
    Search {
        /// Free-text query; leave empty to list suggestions from the local set
        #[arg(num_args = 0..)]
        query: Vec<String>,
        /// Page to show, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Results per page (overrides configuration)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show ingredients, instructions and nutrition for a recipe
    Show {
        id: u64,
        /// Number of nutrients to list
        #[arg(long, default_value_t = 12)]
        nutrients: usize,
    },
    /// Manage favorite recipes
    #[command(subcommand)]
    Favorites(FavoritesCommand),
    /// List suggested searches
    Popular,
}

#[derive(Subcommand, Debug)]
enum FavoritesCommand {
    /// List favorites, optionally filtered by title
    List {
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Fetch a recipe and save it as a favorite
    Add { id: u64 },
    /// Remove a favorite
    Remove { id: u64 },
    /// Save the recipe if it is not a favorite, remove it otherwise
    Toggle { id: u64 },
    /// Remove all favorites
    Clear,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn notice_if_degraded<T>(fetched: &Fetched<T>) {
    if let Fetched::Degraded { reason, .. } = fetched {
        eprintln!("Note: showing offline recipes ({})", reason);
    }
}

/// Fetches a recipe for a favorites command; a placeholder for another id is refused.
async fn resolve_recipe(source: &RecipeSource, id: u64) -> Result<RecipeDetail, BrowserError> {
    let fetched = source.get_details(id).await;
    let live = fetched.is_live();
    let detail = fetched.into_inner();
    if !live && detail.info.id != id {
        return Err(BrowserError::RecipeUnavailable(id));
    }
    Ok(detail)
}

fn unsaved(id: u64) -> BrowserError {
    BrowserError::FavoritesUnsaved(format!("recipe {} could not be updated", id))
}

async fn run(args: Args) -> Result<(), BrowserError> {
    let config: BrowserConfig = load_config(args.config.as_deref())?;
    debug!("Loaded configuration: base_url={}", config.base_url);

    match args.command {
        Command::Popular => {
            println!("Popular searches:");
            for term in POPULAR_SEARCHES {
                println!("  {}", term);
            }
        }

        Command::Search {
            query,
            page,
            page_size,
        } => {
            let source = RecipeSource::builder().from_config(config.clone()).build()?;
            let favorites = open_favorites(&config.favorites)?;
            let query = query.join(" ");
            let page_size = page_size.unwrap_or(source.page_size()).max(1);

            let fetched = source.search(&query, page, page_size).await;
            notice_if_degraded(&fetched);
            let results = fetched.into_inner();

            println!("{}\n", display::results_header(&query, results.total_results));
            println!(
                "{}",
                display::recipe_list(
                    &results.results,
                    |id| favorites.has(id),
                    "No recipes found. Try a different search term."
                )
            );

            let pager = Pager::from_results(page, results.total_results, page_size);
            let controls = display::page_controls(&pager);
            if !controls.is_empty() {
                println!("\n{}", controls);
            }
        }

        Command::Show { id, nutrients } => {
            let source = RecipeSource::builder().from_config(config.clone()).build()?;
            let favorites = open_favorites(&config.favorites)?;

            let fetched = source.get_details(id).await;
            notice_if_degraded(&fetched);
            let detail = fetched.into_inner();
            let favorite = favorites.has(detail.info.id);
            println!("{}", display::recipe_detail(&detail, favorite, nutrients));
        }

        Command::Favorites(command) => {
            let favorites = open_favorites(&config.favorites)?;
            match command {
                FavoritesCommand::List { filter } => {
                    let all = favorites.list();
                    if all.is_empty() {
                        println!("No favorites yet. Save recipes to find them quickly later.");
                        return Ok(());
                    }
                    let shown = favorites.matching(filter.as_deref().unwrap_or(""));
                    println!(
                        "{}",
                        display::recipe_list(
                            &shown,
                            |_| true,
                            "No recipes match your search. Try a different term."
                        )
                    );
                }
                FavoritesCommand::Add { id } => {
                    let source = RecipeSource::builder().from_config(config.clone()).build()?;
                    let detail = resolve_recipe(&source, id).await?;
                    if favorites.has(id) {
                        println!("\"{}\" is already a favorite", detail.info.title);
                    } else if favorites.add(&detail) {
                        println!("Saved \"{}\"", detail.info.title);
                    } else {
                        return Err(unsaved(id));
                    }
                }
                FavoritesCommand::Remove { id } => {
                    if !favorites.has(id) {
                        println!("Recipe {} is not a favorite", id);
                    } else if favorites.remove(id) {
                        println!("Removed recipe {}", id);
                    } else {
                        return Err(unsaved(id));
                    }
                }
                FavoritesCommand::Toggle { id } => {
                    let updated = if favorites.has(id) {
                        favorites.remove(id)
                    } else {
                        let source =
                            RecipeSource::builder().from_config(config.clone()).build()?;
                        let detail = resolve_recipe(&source, id).await?;
                        favorites.toggle(&detail)
                    };
                    if !updated {
                        return Err(unsaved(id));
                    }
                    let state = if favorites.has(id) { "saved" } else { "removed" };
                    println!("Recipe {} {}", id, state);
                }
                FavoritesCommand::Clear => {
                    if !favorites.clear() {
                        return Err(BrowserError::FavoritesUnsaved(
                            "clearing the list failed".to_string(),
                        ));
                    }
                    println!("Cleared all favorites");
                }
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
