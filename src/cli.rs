//! Command-line front end over the card store and scheduler.

use clap::{Parser, Subcommand};
use flashcards_srs::database::db;
use flashcards_srs::export::json::{export_json_to_path, import_json};
use flashcards_srs::models::{due, scheduler};
use flashcards_srs::{
    Clock, ConfidenceRating, Config, Database, Flashcard, ReviewStore, ReviewUpdate, StudySession,
    SystemClock,
};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flashcards", version, about = "Spaced-repetition flashcards")]
pub struct Cli {
    /// Database file (overrides FLASHCARDS_DB)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deck management
    Deck {
        #[command(subcommand)]
        action: DeckAction,
    },
    /// Card management
    Card {
        #[command(subcommand)]
        action: CardAction,
    },
    /// List cards due for review in a deck
    Due {
        deck: String,
        #[arg(long)]
        json: bool,
    },
    /// Record a rating (again, hard, good, easy) for one card
    Review { card_id: i64, rating: String },
    /// Study the due cards of a deck interactively
    Study { deck: String },
    /// Export a deck to JSON
    Export { deck: String, path: PathBuf },
    /// Import a deck from JSON
    Import { path: PathBuf },
}

#[derive(Subcommand)]
enum DeckAction {
    New { name: String },
    List,
    Delete { name: String },
}

#[derive(Subcommand)]
enum CardAction {
    Add {
        deck: String,
        front: String,
        back: String,
    },
    List {
        deck: String,
    },
}

type CliResult = Result<(), Box<dyn Error>>;

pub fn run(cli: Cli) -> CliResult {
    let config = Config::from_env().with_database_path(cli.db);
    let mut store = Database::open(&config.database_path)?;
    let clock = SystemClock;

    match cli.command {
        Commands::Deck { action } => run_deck(action, &store),
        Commands::Card { action } => run_card(action, &store, &clock),
        Commands::Due { deck, json } => run_due(&deck, json, &store, &clock),
        Commands::Review { card_id, rating } => run_review(card_id, &rating, &store, &clock),
        Commands::Study { deck } => run_study(&deck, &store, &clock),
        Commands::Export { deck, path } => {
            let deck = db::load_deck(&deck, store.conn())?;
            export_json_to_path(&deck, &path)?;
            println!("Exported '{}' ({} cards)", deck.name, deck.cards.len());
            Ok(())
        }
        Commands::Import { path } => {
            let deck = import_json(&path)?;
            let count = db::import_deck(&deck, store.conn_mut())?;
            println!("Imported {count} cards into '{}'", deck.name);
            Ok(())
        }
    }
}

fn run_deck(action: DeckAction, store: &Database) -> CliResult {
    match action {
        DeckAction::New { name } => {
            db::new_deck(&name, store.conn())?;
            println!("Deck created: {name}");
        }
        DeckAction::List => {
            for name in db::get_all_decks(store.conn())? {
                let count = db::get_cards_for_deck(&name, store.conn())?.len();
                println!("{name} ({count} cards)");
            }
        }
        DeckAction::Delete { name } => {
            db::delete_deck(&name, store.conn())?;
            println!("Deck deleted: {name}");
        }
    }
    Ok(())
}

fn run_card(action: CardAction, store: &Database, clock: &dyn Clock) -> CliResult {
    match action {
        CardAction::Add { deck, front, back } => {
            let id = db::add_card(&deck, &Flashcard::new(front, back), store.conn())?;
            println!("Card created: {id}");
        }
        CardAction::List { deck } => {
            let now = clock.now();
            for card in db::get_cards_for_deck(&deck, store.conn())? {
                let status = if !card.flashcard.has_content() {
                    "empty".to_string()
                } else if due::is_due(&card.schedule, now) {
                    "due".to_string()
                } else {
                    format!("{}d", due::days_left(&card.schedule, now))
                };
                println!(
                    "{:>5}  {:<6} {} | {}",
                    card.id, status, card.flashcard.front, card.flashcard.back
                );
            }
        }
    }
    Ok(())
}

fn run_due(deck: &str, json: bool, store: &Database, clock: &dyn Clock) -> CliResult {
    let cards = db::load_deck(deck, store.conn())?.studyable_cards();
    let due_cards = due::select_due_cards(&cards, clock.now());

    if json {
        println!("{}", serde_json::to_string_pretty(&due_cards)?);
    } else {
        println!("{} of {} cards due in '{deck}'", due_cards.len(), cards.len());
        for card in &due_cards {
            println!("{:>5}  {}", card.id, card.flashcard.front);
        }
    }
    Ok(())
}

fn run_review(card_id: i64, label: &str, store: &Database, clock: &dyn Clock) -> CliResult {
    let card = db::get_card(card_id, store.conn())?;
    let rating = ConfidenceRating::from_label(label);
    if rating.is_none() {
        log::warn!("Unknown rating {label:?}, scheduling with the default interval");
    }

    let now = clock.now();
    let outcome = scheduler::compute_next_review(rating, card.schedule.review_interval, now);
    let update = ReviewUpdate::from_outcome(&card, rating, &outcome, now);
    store.save_review(&update)?;

    println!(
        "Card {card_id}: interval {} days, next review {}",
        update.review_interval, update.next_review_date
    );
    Ok(())
}

fn run_study(deck: &str, store: &Database, clock: &dyn Clock) -> CliResult {
    let cards = db::get_cards_for_deck(deck, store.conn())?;
    let mut session = StudySession::new(deck, due::select_due_cards(&cards, clock.now()));
    if session.is_finished() {
        println!("Nothing due in '{deck}'");
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    while let Some(card) = session.current_card() {
        println!(
            "\n[{:.0}%] {}",
            session.progress_percent(),
            card.flashcard.front
        );
        print!("(enter to reveal) ");
        stdout.flush()?;
        if lines.next().transpose()?.is_none() {
            break;
        }
        session.reveal_answer();
        if let Some(card) = session.current_card() {
            println!("{}", card.flashcard.back);
        }

        let rating = loop {
            let prompt: Vec<String> = ConfidenceRating::ALL
                .iter()
                .map(|r| format!("{} ({})", r.label(), r.hint()))
                .collect();
            print!("{}: ", prompt.join(", "));
            stdout.flush()?;
            let Some(line) = lines.next().transpose()? else {
                println!();
                println!("{}", session.summary());
                return Ok(());
            };
            match ConfidenceRating::from_label(line.trim()) {
                Some(rating) => break rating,
                None => println!("Unknown rating '{}'", line.trim()),
            }
        };

        if let Err(err) = session.rate_current_card(rating, clock, store) {
            eprintln!("warning: rating not saved: {err}");
        }
    }

    println!();
    println!("{}", session.summary());
    Ok(())
}
