use crate::corpus::PantryError;
use crate::engine::Recommender;
use crate::ui::{log_success, print_recommendations};
use console::Term;
use owo_colors::OwoColorize;

/// Sentinel ending multi-line ingredient/dish entry.
const DONE: &str = "done";

pub struct Shell<'a> {
    engine: &'a Recommender,
    term: Term,
}

impl<'a> Shell<'a> {
    pub fn new(engine: &'a Recommender) -> Self {
        Self {
            engine,
            term: Term::stdout(),
        }
    }

    pub fn run(&self) -> Result<(), PantryError> {
        loop {
            println!();
            println!("{}", "What are you in the mood for?".bold());
            println!("  1. Recommend by ingredients");
            println!("  2. Recommend by dishes you like");
            println!("  3. Quit");

            let choice = self.term.read_line()?;
            match choice.trim() {
                "1" => self.ingredients_round()?,
                "2" => self.dishes_round()?,
                "3" => break,
                _ => println!("{}", "Pick 1, 2 or 3.".yellow()),
            }
        }

        log_success("Bon appétit!");
        Ok(())
    }

    fn ingredients_round(&self) -> Result<(), PantryError> {
        println!(
            "Type one ingredient per line. Type '{}' when finished.",
            DONE.bold()
        );
        println!(
            "{}",
            "Tip: repeat an ingredient you really care about to give it more weight.".dimmed()
        );

        let items = self.read_items()?;
        if items.is_empty() {
            println!("{}", "Nothing entered.".yellow());
            return Ok(());
        }

        self.present(self.engine.by_ingredients(&items));
        Ok(())
    }

    fn dishes_round(&self) -> Result<(), PantryError> {
        println!(
            "Type one dish you like per line. Type '{}' when finished.",
            DONE.bold()
        );

        let names = self.read_items()?;
        if names.is_empty() {
            println!("{}", "Nothing entered.".yellow());
            return Ok(());
        }

        self.present(self.engine.by_dishes(&names));
        Ok(())
    }

    fn read_items(&self) -> Result<Vec<String>, PantryError> {
        let mut items = Vec::new();
        loop {
            let line = self.term.read_line()?;
            let line = line.trim();
            if line.eq_ignore_ascii_case(DONE) {
                break;
            }
            if !line.is_empty() {
                items.push(line.to_string());
            }
        }
        Ok(items)
    }

    fn present(&self, positions: Vec<usize>) {
        let picks: Vec<_> = positions
            .iter()
            .map(|&position| self.engine.recipe(position))
            .collect();
        print_recommendations(&picks);
    }
}
