//! gtd: review the inbound list of a kanban board, one card at a time.

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use gtd_cli::display::{self, Theme};
use gtd_cli::review::ReviewSession;
use gtd_core::filter::apply_filters;
use gtd_core::trello::{BoardApi, TrelloClient};
use gtd_core::{ConfigLoader, GtdError};
use log::LevelFilter;
use std::io;

#[derive(Parser, Debug)]
#[clap(name = "gtd", author, version, about = "Inbox review for your kanban board")]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,

    #[clap(
        long,
        short,
        default_value = "gtd.yaml",
        help = "Path to the YAML configuration file"
    )]
    config: String,

    #[clap(long, short, help = "Process the list of cards in reverse")]
    reverse: bool,

    #[clap(
        long,
        short,
        help = "Only include cards whose name matches this regex"
    )]
    r#match: Option<String>,

    #[clap(
        long,
        short,
        help = "Name of the list to review (defaults to the configured incoming list)"
    )]
    list: Option<String>,

    #[clap(long, default_value = "warn", help = "Log level filter")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print board contents without prompting or mutating anything
    Show {
        #[clap(value_enum)]
        target: ShowTarget,
    },
    /// Review each inbound card interactively (the default)
    Review,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ShowTarget {
    Lists,
    Cards,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    // An interrupt during a blocking prompt read still lands here: farewell,
    // then a clean exit.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!("\nQuitting!");
            std::process::exit(0);
        }
    });

    let config = ConfigLoader::from_file(&cli.config).await?;
    let client = TrelloClient::new(
        config.trello.api_key.clone(),
        config.trello.oauth_token.clone(),
    );

    let theme = Theme::default();
    println!("{}", theme.banner.color(theme.on_time));

    let board = client.find_board(&config.board_name).await?;
    log::info!("Connected to board '{}'", board.name);

    let open_lists = client.open_lists(&board.id).await?;
    let inbound_name = cli.list.as_deref().unwrap_or(&config.list_names.incoming);
    let inbound = open_lists
        .iter()
        .find(|l| l.name == inbound_name)
        .cloned()
        .ok_or_else(|| GtdError::NotFound {
            kind: "List",
            name: inbound_name.to_string(),
        })?;

    let cards = client.cards_in_list(&inbound.id).await?;
    let cards = apply_filters(cards, cli.r#match.as_deref(), cli.reverse)?;
    log::info!("{} cards under review in '{}'", cards.len(), inbound.name);

    match cli.command {
        Some(Commands::Show {
            target: ShowTarget::Lists,
        }) => {
            for list in &open_lists {
                println!("{}", list.name);
            }
        }
        Some(Commands::Show {
            target: ShowTarget::Cards,
        }) => {
            let mut stdout = io::stdout();
            for card in &cards {
                let attachments = client.attachments(&card.id).await?;
                display::print_card(&mut stdout, &theme, card, &attachments, Utc::now())?;
            }
        }
        // No subcommand falls through to a review run.
        Some(Commands::Review) | None => {
            let labels = client.labels(&board.id).await?;
            let mut session =
                ReviewSession::new(&client, &theme, io::stdin().lock(), io::stdout());
            let summary = session.run(&labels, &open_lists, &inbound, &cards).await?;
            log::info!(
                "Reviewed {} cards: {} kept, {} deleted",
                summary.reviewed,
                summary.kept,
                summary.deleted
            );
            println!("Good show, chap. Have a great day");
        }
    }

    Ok(())
}
