use crate::boarding::console_card_printer;
use crate::flight::{Flight, PassengerSeat};
use crate::scenario::Scenario;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tabled::settings::Style;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod aircraft;
mod boarding;
mod error;
mod flight;
mod scenario;
mod seat;

#[derive(Parser)]
struct Args {
    /// Path to a JSON scenario file. The sample AA123 flight is used when omitted.
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG
    #[arg(long, value_name = "FILTER", default_value = "airtravel=info")]
    log: String,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn paginate(content: String) -> std::io::Result<()> {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())?;

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    pager.wait().map(|_| ())
}

fn list_seats(flight: &Flight) {
    let seats = flight.passenger_seats().collect::<Vec<PassengerSeat>>();
    if seats.is_empty() {
        println!("No seats allocated.");
        return;
    }

    let mut table = tabled::Table::new(&seats);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if seats.len() > 20 {
        if let Err(e) = paginate(table.to_string()) {
            warn!(error = %e, "pager unavailable");
            println!("{}", table);
        }
    } else {
        println!("{}", table);
    }
}

fn report<E: std::fmt::Display>(result: Result<(), E>, ok: String) {
    match result {
        Ok(()) => println!("{}", ok.green()),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log)))
        .with_writer(std::io::stderr)
        .init();

    let scenario = match &args.scenario {
        Some(path) => Scenario::load_from_file(path)?,
        None => Scenario::demo(),
    };
    let mut flight = scenario.into_flight()?;
    println!(
        "Flight {} ({}) ready. {} seats available.",
        flight.number(),
        flight.aircraft_model(),
        flight.num_available_seats()
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["ls", "allocate", "relocate", "avail", "cards", "info", "help", "exit"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => list_seats(&flight),
                    "allocate" => {
                        if let (Some(seat), true) = (parts.get(1), parts.len() > 2) {
                            let passenger = parts[2..].join(" ");
                            let ok = format!("Seat {} allocated to {}.", seat, passenger);
                            report(flight.allocate_seat(seat, passenger), ok);
                        } else {
                            println!("Usage: allocate <seat> <passenger>");
                        }
                    },
                    "relocate" => {
                        if let (Some(from), Some(to)) = (parts.get(1), parts.get(2)) {
                            let ok = format!("Passenger moved from {} to {}.", from, to);
                            report(flight.relocate_passenger(from, to), ok);
                        } else {
                            println!("Usage: relocate <from> <to>");
                        }
                    },
                    "avail" => println!("{} seats available.", flight.num_available_seats()),
                    "cards" => flight.make_boarding_cards(console_card_printer),
                    "info" => {
                        let aircraft = flight.aircraft();
                        let plan = aircraft.seating_plan();
                        println!(
                            "Flight {} (airline {}, route {}) on {} {}: rows 1-{}, seats {}, {} in total",
                            flight.number(),
                            flight.airline(),
                            flight.route_number(),
                            aircraft.model(),
                            aircraft.registration(),
                            aircraft.num_rows(),
                            plan.letters,
                            plan.seat_count()
                        );
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls                  - List allocated seats in row order");
                        println!("  allocate <s> <name> - Give seat <s> (e.g. 12F) to passenger <name>");
                        println!("  relocate <s> <s>    - Move the passenger in the first seat to the second");
                        println!("  avail               - Show the number of empty seats");
                        println!("  cards               - Print boarding cards in passenger order");
                        println!("  info                - Show flight and aircraft details");
                        println!("  help / ?            - Show this help menu");
                        println!("  exit / quit         - Exit\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
