//! Terminal client for the matching game.

pub mod api;
pub mod board;
pub mod command;
pub mod config;
pub mod session;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::PairsClient;
use crate::command::{Command, HELP};
use crate::config::ClientConfig;
use crate::session::GameSession;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env()?;
    let client = PairsClient::new(&config.backend_url);

    if !client.check_connectivity().await.unwrap_or(false) {
        tracing::warn!(url = client.backend_url(), "backend not reachable yet");
    }

    let session = GameSession::new(client, config.category, config.mismatch_delay);
    if let Err(e) = session.load(config.category).await {
        println!("Could not load pairs: {}. Type `r` to retry.", e);
    }

    println!("Tech Match Flashcards (type `h` for help)");
    println!("{}", board::render(&session.snapshot().await));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{}", HELP);
                continue;
            }
            Command::Show => {}
            Command::Pick(number) => {
                let view = session.snapshot().await;
                match view.round.cards.get(number - 1) {
                    Some(card) => {
                        let outcome = session.click(&card.id).await;
                        if let Some(message) = board::pick_feedback(&view, card, &outcome) {
                            println!("{}", message);
                        }
                    }
                    None => println!("There is no card {}.", number),
                }
            }
            Command::Reset => {
                if let Err(e) = session.reset().await {
                    println!("Could not reload pairs: {}", e);
                }
            }
            Command::Category(category) => {
                if let Err(e) = session.change_category(category).await {
                    println!("Could not load {}: {}", category.label(), e);
                }
            }
            Command::Add(new_pair) => match session.add_pair(&new_pair).await {
                Ok(pair) => println!("Added {} / {}.", pair.term, pair.match_text),
                Err(e) => println!("Could not add pair: {}", e),
            },
        }

        println!("{}", board::render(&session.snapshot().await));
    }

    Ok(())
}
