use anyhow::Result;
use derive_more::Display;
use formcheck::config::Config;
use formcheck::presenter::{ConsolePresenter, FormField};
use formcheck::utils::card::luhn_checksum_valid;
use formcheck::utils::input_validation::{card_input_validation, email_input_validation};
use formcheck::validate_field;
use inquire::{Select, Text};
use log::info;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu
trait Menu {
    /// Runs the menu once. Returns None when the menu wants to quit,
    /// Some(()) to run it again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it quits, printing errors instead of stopping
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
            }
        }
    }
}

pub struct App {
    presenter: ConsolePresenter,
}

impl App {
    pub fn new(presenter: ConsolePresenter) -> Self {
        App { presenter }
    }

    pub fn start(&mut self) {
        println!("Order form checks. Submissions are checked locally and never sent.");
        self.enter_loop();
    }

    fn check(&mut self, field: FormField, message: &str) -> Result<()> {
        let value = Text::new(message).prompt()?;
        let outcome = validate_field(field, &value, &mut self.presenter);
        if outcome.prevent_submit {
            println!("[*] Submission of #{} held back", field.element_id());
        }
        Ok(())
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Check an email address")]
            CheckEmail,
            #[display("Check a card number")]
            CheckCard,
            #[display("Review billing details")]
            Review,
            #[display("Quit")]
            Exit,
        }

        let choice = Select::new("What do you want to do?", Choice::iter().collect()).prompt()?;

        match choice {
            Choice::CheckEmail => self.check(FormField::Email, "Email:")?,
            Choice::CheckCard => self.check(FormField::CardNumber, "Card number:")?,
            Choice::Review => {
                let email = email_input_validation("Billing email:")?;
                let card = card_input_validation("Visa card number:")?;
                let checksum = if luhn_checksum_valid(card.as_ref()) {
                    "ok"
                } else {
                    "failed"
                };
                println!("Email: {email}\nCard: {card}\nChecksum: {checksum}");
            }
            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

fn main() -> Result<()> {
    let config = Config::from_env()?;
    simple_logging::log_to_file(&config.log_file, config.log_level)?;
    info!("Starting with log level {}", config.log_level);

    App::new(ConsolePresenter).start();
    Ok(())
}
