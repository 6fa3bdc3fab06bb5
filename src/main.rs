//! Interactive console blackjack session.

use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Card, DealerHand, Game, GameState, GameStats, RoundOutcome, StatsError, Suit};

/// Statistics are saved next to the executable's working directory.
const STATS_FILE: &str = "game_stats.json";

const WELCOME: &str = "\
=============================================
               BLACKJACK (21)
=============================================
Get closer to 21 than the dealer without
going over. Number cards count face value,
J/Q/K count 10, and an Ace counts 11 or 1.
The dealer draws until reaching 17.
=============================================";

fn main() {
    println!("{WELCOME}\n");

    let mut stats = load_stats(Path::new(STATS_FILE));
    print_stats(&stats);

    println!("LET'S PLAY!\n");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(seed);

    loop {
        stats.start_round();

        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            game.clear_round();
            continue;
        }

        print_first_hands(&game);

        while game.state() == GameState::PlayerTurn {
            let choice = prompt_choice("Enter [H] to hit or [S] to stand: ", &['h', 's']);
            println!();

            let result = match choice {
                'h' => game.hit().map(|_| {
                    println!("Player's hand ({}):", game.player_hand().value());
                    print_hand(game.player_hand().cards());
                    println!();
                }),
                _ => game.stand(),
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        if game.state() == GameState::DealerTurn {
            println!("Dealer's hand ({}):", game.dealer_hand().value());
            print_hand(game.dealer_hand().cards());
            println!();

            match game.dealer_play() {
                Ok(drawn) => {
                    for card in &drawn {
                        println!("The dealer takes a new card: {}", format_card(*card));
                    }
                    if !drawn.is_empty() {
                        println!();
                        println!("Dealer's hand ({}):", game.dealer_hand().value());
                        print_hand(game.dealer_hand().cards());
                        println!();
                    }
                }
                Err(err) => println!("Dealer error: {err}"),
            }
        }

        match game.showdown() {
            Ok(result) => {
                if result.player_bust {
                    // The dealer's hand was never shown on the bust path.
                    println!("Dealer's hand ({}):", result.dealer_value);
                    print_hand(game.dealer_hand().cards());
                    println!();
                    println!("RESULT: Bust! You lose.\n");
                } else if result.dealer_bust {
                    println!("RESULT: The dealer bust. You win!\n");
                } else {
                    println!(
                        "SCORES: Player ({}), Dealer ({})",
                        result.player_value, result.dealer_value
                    );
                    match result.outcome {
                        RoundOutcome::Win => println!("RESULT: You win!\n"),
                        RoundOutcome::Lose => println!("RESULT: You lose! The dealer wins.\n"),
                        RoundOutcome::Push => println!("RESULT: It's a tie!\n"),
                    }
                }
                stats.record(&result);
            }
            Err(err) => println!("Showdown error: {err}"),
        }

        if let Err(err) = stats.save(Path::new(STATS_FILE)) {
            eprintln!("Warning: could not save statistics: {err}");
        }

        if prompt_choice("Enter [P] to play again or [Q] to quit: ", &['p', 'q']) == 'q' {
            break;
        }
        println!();
        game.clear_round();
    }

    println!("\nThanks for playing!");
}

fn load_stats(path: &Path) -> GameStats {
    match GameStats::load(path) {
        Ok(stats) => stats,
        Err(StatsError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            println!("No saved statistics found. Starting fresh.\n");
            GameStats::default()
        }
        Err(err) => {
            eprintln!("Warning: could not load statistics: {err}");
            GameStats::default()
        }
    }
}

fn print_stats(stats: &GameStats) {
    println!("--- Saved Game Statistics ---");
    println!("Total Games Played: {}", stats.total_games);
    println!("Total Wins: {}", stats.total_wins);
    println!("Total Losses: {}", stats.total_losses);
    println!("Total Ties: {}", stats.total_ties);
    println!("Player Busts: {}", stats.player_busts);
    println!("Dealer Busts: {}", stats.dealer_busts);
    println!("-----------------------------\n");
}

fn print_first_hands(game: &Game) {
    println!("Player's hand ({}):", game.player_hand().value());
    print_hand(game.player_hand().cards());
    println!();

    println!("Dealer's hand (X):");
    print_dealer(game.dealer_hand());
    println!();
}

fn print_hand(cards: &[Card]) {
    let line = cards
        .iter()
        .map(|c| format_card(*c))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{line}");
}

fn print_dealer(dealer: &DealerHand) {
    if dealer.is_hole_revealed() {
        print_hand(dealer.cards());
        return;
    }

    let mut parts = Vec::new();
    if let Some(card) = dealer.up_card() {
        parts.push(format_card(*card));
    }
    if dealer.len() > 1 {
        parts.push("??".to_string());
    }
    println!("{}", parts.join(" "));
}

fn format_card(card: Card) -> String {
    let code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

/// Prompts until the user enters one of the accepted characters
/// (case-insensitive). Invalid input is reported and re-prompted.
fn prompt_choice(prompt: &str, accepted: &[char]) -> char {
    loop {
        let input = prompt_line(prompt);
        let mut chars = input.chars();
        if let (Some(choice), None) = (chars.next(), chars.next()) {
            if accepted.contains(&choice) {
                return choice;
            }
        }
        println!("Invalid input!\n");
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        // stdin closed; treat as quit
        Ok(0) | Err(_) => {
            println!();
            std::process::exit(0);
        }
        Ok(_) => input.trim().to_lowercase(),
    }
}
