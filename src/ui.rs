use crate::corpus::Recipe;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

pub fn print_banner() {
    println!();
    println!(
        "   {}  {}",
        "PANTRY".green().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    println!("   {}", "Content-Based Recipe Recommender".white());
    println!();
}

pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn log_error(msg: &str) {
    println!("{} {}", "✖ Error:".red().bold(), msg);
}

pub fn log_success(msg: &str) {
    println!("{} {}", "✔".green().bold(), msg);
}

// Title placeholder is applied here, never inside the engine
pub fn print_recipe(recipe: &Recipe) {
    let title = recipe.title.as_deref().unwrap_or("No Title");

    println!("\n{}", title.cyan().bold());
    if !recipe.categories.is_empty() {
        println!("   {}", recipe.categories.join(" · ").dimmed());
    }

    println!("\n{}", "Ingredients:".bold());
    for ingredient in &recipe.ingredients {
        println!("   - {}", ingredient);
    }

    if !recipe.directions.is_empty() {
        println!("\n{}", "Directions:".bold());
        for (step, direction) in recipe.directions.iter().enumerate() {
            println!("   {}. {}", step + 1, direction);
        }
    }

    println!("\n{}", "-".repeat(40).dimmed());
}

pub fn print_recommendations(recipes: &[&Recipe]) {
    if recipes.is_empty() {
        println!("{}", "No recommendations found.".yellow());
        return;
    }

    println!(
        "\n{}",
        format!("Top {} picks for you:", recipes.len()).bold().underline()
    );
    for recipe in recipes {
        print_recipe(recipe);
    }
}
