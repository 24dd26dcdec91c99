use clap::{Parser, Subcommand};
use log::{debug, error};
use std::path::PathBuf;

use forkify::{
    AppConfig, Direction, Forkify, Recipe, Session, ShoppingListItem, RESULTS_PER_PAGE,
};

#[derive(Parser)]
#[command(name = "forkify", about = "Search recipes, scale servings and keep favorites")]
struct Cli {
    /// File holding liked recipes (overrides configuration)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the catalog
    Search {
        query: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show a recipe's ingredients
    Recipe {
        /// Recipe id, optionally as a location fragment (`#47746`)
        id: String,
        #[arg(long)]
        servings: Option<u32>,
        /// Step the servings up or down by one (`inc` or `dec`), repeatable
        #[arg(long = "step", value_name = "inc|dec")]
        steps: Vec<Direction>,
        /// Also print the shopping list built from the recipe
        #[arg(long)]
        add_to_list: bool,
    },
    /// Like a recipe, or unlike it if it is already liked
    Like { id: String },
    /// List liked recipes
    Likes,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    let mut builder = Forkify::builder().config(config);
    if let Some(path) = cli.storage {
        builder = builder.storage_path(path);
    }
    let mut session = builder.build()?;

    if let Err(e) = run(&mut session, cli.command).await {
        error!("{}", e);
        eprintln!("Something went wrong: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(session: &mut Session, command: Command) -> forkify::Result<()> {
    match command {
        Command::Search { query, page } => {
            session.search(&query).await?;
            for summary in session.results_page(page) {
                println!("{:>10}  {} ({})", summary.id, summary.title, summary.publisher);
            }
            if let Some(search) = session.search_results() {
                let pagination = search.pagination(page, RESULTS_PER_PAGE);
                println!(
                    "\npage {} of {}{}{}",
                    page,
                    search.num_pages(RESULTS_PER_PAGE),
                    pagination
                        .prev
                        .map(|p| format!("  [prev: {}]", p))
                        .unwrap_or_default(),
                    pagination
                        .next
                        .map(|p| format!("  [next: {}]", p))
                        .unwrap_or_default(),
                );
            }
        }
        Command::Recipe {
            id,
            servings,
            steps,
            add_to_list,
        } => {
            if session.load_recipe_from_hash(&id).await?.is_none() {
                return Err(forkify::ForkifyError::InvalidArgument(
                    "recipe id is empty".to_string(),
                ));
            }
            if let Some(servings) = servings {
                session.set_servings(servings)?;
            }
            for step in steps {
                debug!("Applying serving step '{}'", step);
                session.update_servings(step)?;
            }
            if let Some(recipe) = session.recipe() {
                print_recipe(recipe, session.is_current_recipe_liked());
            }
            if add_to_list {
                let items = session.add_recipe_to_list()?;
                println!("\nShopping list:");
                for item in &items {
                    print_item(item);
                }
            }
        }
        Command::Like { id } => {
            session.load_recipe_from_hash(&id).await?;
            let toggle = session.toggle_like()?;
            let verb = if toggle.liked { "Liked" } else { "Unliked" };
            println!("{} '{}' ({} liked)", verb, toggle.entry.title, toggle.num_likes);
        }
        Command::Likes => {
            let likes = session.likes();
            if likes.num_likes() == 0 {
                println!("No liked recipes yet");
            }
            for like in likes.likes() {
                println!("{:>10}  {} ({})", like.id, like.title, like.author);
            }
        }
    }
    Ok(())
}

fn print_recipe(recipe: &Recipe, liked: bool) {
    println!("{}{}", recipe.title, if liked { " ♥" } else { "" });
    println!("by {} - {}", recipe.author, recipe.source_url);
    println!(
        "{} servings, about {} minutes\n",
        recipe.servings, recipe.time
    );
    for ingredient in &recipe.ingredients {
        match ingredient.count {
            Some(count) => println!("  {} {}", format_count(count), ingredient.label()),
            None => println!("  {}", ingredient.label()),
        }
    }
}

fn print_item(item: &ShoppingListItem) {
    if item.unit.is_empty() {
        println!("  {} {}", format_count(item.count), item.ingredient);
    } else {
        println!(
            "  {} {} {}",
            format_count(item.count),
            item.unit,
            item.ingredient
        );
    }
}

fn format_count(count: f64) -> String {
    let rounded = (count * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_steps_parse_as_directions() {
        let cli = Cli::try_parse_from([
            "forkify", "recipe", "#47746", "--step", "inc", "--step", "inc", "--step", "dec",
        ])
        .unwrap();

        match cli.command {
            Command::Recipe { id, steps, .. } => {
                assert_eq!(id, "#47746");
                assert_eq!(steps, vec![Direction::Inc, Direction::Inc, Direction::Dec]);
            }
            _ => panic!("expected the recipe command"),
        }
    }

    #[test]
    fn test_unknown_step_is_rejected() {
        assert!(Cli::try_parse_from(["forkify", "recipe", "1", "--step", "up"]).is_err());
    }
}
