//! CLI Basra example.

use std::io::{self, Write};

use basra::{Card, Game, GameOptions, GameState, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Basra Game (type 'q' to quit)");

    let mut game = match Game::with_entropy(GameOptions::default()) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Deal error: {err}");
            return;
        }
    };

    loop {
        print_table(&game);

        if game.state() == GameState::HandsEmpty {
            println!("Both hands are empty.");
            break;
        }

        let Some(input) = prompt_line("Card Index: ") else {
            break;
        };
        if input == "q" || input == "quit" {
            break;
        }

        match game.submit(&input) {
            Ok(play) => {
                if play.captured_from_table() {
                    let taken: Vec<String> = play.captured.iter().map(format_card).collect();
                    println!("Captured {}", taken.join(" "));
                }
            }
            Err(err) => println!("{}", colorize(&err.to_string(), "33")),
        }
    }

    print_standings(&game);
}

/// Returns `None` on end of input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn print_table(game: &Game) {
    println!();
    println!(
        "{}'s Hand: {}",
        game.current_player_name(),
        format_hand(game.current_hand())
    );
    println!("Table: {}", format_cards(game.table()));
    println!("Player turn: {}", game.current_player_name());
}

fn print_standings(game: &Game) {
    for standing in game.standings() {
        println!(
            "{}: {} points ({} cards captured, {} in hand)",
            standing.name, standing.score, standing.captured, standing.hand_len
        );
    }
    println!("Stock: {} cards never dealt", game.stock_remaining());
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{}:{}", index + 1, format_card(card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.short().to_string(), color_code)
}
