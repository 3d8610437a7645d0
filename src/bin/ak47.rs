//! AK47 Terminal Binary
//!
//! Plays a match against the computer on the terminal.
//! Collect A, K, 4 and 7 before the computer does.

use ak47::cards::Scoring;
use ak47::play::Config;
use ak47::play::Seat;
use ak47::play::Session;
use ak47::players::Human;
use clap::Parser;
use colored::Colorize;
use dialoguer::Confirm;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play AK47 against the computer", long_about = None)]
struct Args {
    /// Cards dealt to each seat
    #[arg(long, default_value_t = ak47::HAND_SIZE)]
    hand_size: usize,
    /// How the loser's hand is valued
    #[arg(long, value_enum, default_value_t = Scoring::Target)]
    scoring: Scoring,
    /// Cumulative points that end the match
    #[arg(long, default_value_t = ak47::THRESHOLD)]
    threshold: ak47::Points,
    /// Play a single round instead of a match
    #[arg(long)]
    single: bool,
    /// Seed the shuffle for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
    /// Let the computer take face-up discards it wants
    #[arg(long)]
    greedy: bool,
    /// Terminal log level (the log file always records DEBUG)
    #[arg(long, default_value_t = log::LevelFilter::Warn)]
    log_level: log::LevelFilter,
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        Self {
            hand_size: args.hand_size,
            scoring: args.scoring,
            threshold: (!args.single).then_some(args.threshold),
            seed: args.seed,
            greedy: args.greedy,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    ak47::log(args.log_level)?;
    banner();
    let ref mut human = Human;
    let mut session = Session::new(Config::from(&args))?;
    loop {
        while !session.is_round_over() {
            println!("\n{}", "*** Computer's cards are hidden. ***".dimmed());
            let (draw, discard) = session.pile_sizes();
            println!("Draw pile: {} cards, discard pile: {} cards", draw, discard);
            println!("\n{}", "#### Your cards ####".bold());
            print!("{}", session.current_hand(Seat::Human));
            let ply = session.play(Seat::Human, human)?;
            println!("\n>>> You drew {}", ply.drawn.to_string().green());
            println!(">>> You dropped {}", ply.discarded.to_string().yellow());
            if session.is_round_over() {
                break;
            }
            let ply = session.computer_take_turn()?;
            println!("\n{}", ply.to_string().cyan());
        }
        summary(&session);
        if let Some(seat) = session.match_winner() {
            println!("\n{}", format!("The {} wins the match!", seat).bold().green());
            break;
        }
        if args.single {
            break;
        }
        if !Confirm::new()
            .with_prompt("Play another round?")
            .default(true)
            .interact()?
        {
            break;
        }
        session.next_round()?;
    }
    Ok(())
}

fn banner() {
    println!("{}", "######################".red());
    println!("{}", "######## AK47 ########".red().bold());
    println!("{}", "######################".red());
    println!("\nWelcome to the card game AK47!");
    println!(
        "\n*** The goal is to get cards with values A, K, 4 and 7. \
         The first player to get the cards wins the hand. ***"
    );
}

fn summary(session: &Session) {
    println!("\n{}", "#### Hand over! ####".bold());
    if let (Some(winner), Some(points)) = (session.round_winner(), session.round_points()) {
        println!("\n{}'s cards:", winner.opponent());
        print!("{}", session.current_hand(winner.opponent()));
        println!(
            "\nThe {} wins the hand with {} points!",
            winner,
            points.to_string().bold()
        );
    }
    let [human, computer] = session.cumulative_scores();
    println!("Score: player {} - computer {}", human, computer);
}
