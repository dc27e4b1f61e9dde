use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use gallery_core::{
    dispatch, ActionOutcome, EventOutcome, FormOutcome, GalleryController, HttpGalleryApi,
    MarkupTemplates, UiEvent,
};
use tokio::{io::BufReader, sync::mpsc};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod input;
mod terminal_view;

use commands::{parse_command, Command, CommandContext, HELP};
use config::{load_settings, Settings, DEFAULT_CONFIG_FILE};
use terminal_view::TerminalView;

#[derive(Parser, Debug)]
#[command(about = "Browse a photo gallery server from the terminal")]
struct Args {
    /// Gallery server base URL; overrides config file and environment.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut settings = load_settings(&args.config);
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    let api = HttpGalleryApi::new(&settings.server_url)
        .with_context(|| format!("invalid server url `{}`", settings.server_url))?;
    info!(server_url = %api.base_url(), "loading gallery");
    let templates = MarkupTemplates::new(&settings.like_path, &settings.favorite_path);
    let mut controller = GalleryController::new(api, TerminalView::new(io::stdout()), templates);

    controller
        .main()
        .await
        .context("failed to initialize gallery")?;
    println!("{HELP}");

    let (line_tx, mut line_rx) = mpsc::channel::<String>(64);
    tokio::spawn(input::forward_lines(
        BufReader::new(tokio::io::stdin()),
        line_tx,
    ));

    while let Some(line) = line_rx.recv().await {
        let command = {
            let ctx = CommandContext {
                settings: &settings,
                information_id: controller.state().information_id,
            };
            parse_command(&line, &ctx)
        };
        match command {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => println!("{HELP}"),
            Ok(Some(Command::Show)) => show(&controller, &settings),
            Ok(Some(Command::Event(event))) => handle_event(&mut controller, event).await,
            Err(err) => println!("{err}"),
        }
    }

    info!("gallery closed");
    Ok(())
}

type CliController = GalleryController<HttpGalleryApi, TerminalView<io::Stdout>, MarkupTemplates>;

async fn handle_event(controller: &mut CliController, event: UiEvent) {
    match dispatch(controller, event).await {
        Ok(EventOutcome::Action(ActionOutcome::Rejected { status }))
        | Ok(EventOutcome::Form(FormOutcome::Rejected { status })) => {
            warn!(status, "server declined the request");
        }
        Ok(EventOutcome::Action(ActionOutcome::Ignored)) => {
            warn!("not an action button");
        }
        Ok(_) => {}
        Err(err) => error!(%err, "gallery event failed"),
    }
}

fn show(controller: &CliController, settings: &Settings) {
    let state = controller.state();
    let count = state.photos.as_ref().map_or(0, Vec::len);
    let shown = controller
        .view()
        .active_slide()
        .map_or_else(|| "-".to_string(), |index| (index + 1).to_string());
    println!(
        "server {} | slide {} of {} | panel photo {} | {} comments",
        settings.server_url,
        shown,
        count,
        state
            .information_id
            .map_or_else(|| "-".to_string(), |id| id.to_string()),
        state.comments.as_ref().map_or(0, Vec::len),
    );
    if let Some(photo) = controller.current_photo() {
        println!(
            "current photo id {} {}",
            photo.id,
            photo.title.as_deref().unwrap_or_default()
        );
    }
}
