use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use jobboard_core::{update, AppState, Msg, Route};
use jobboard_logging::{board_info, board_warn};

use super::config::{self, AppConfig, BASE_URL_ENV};
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{parse_command, Command, HELP};
use super::ui::render::render;

pub fn run_app() -> anyhow::Result<()> {
    let path = config::config_path();
    let loaded = config::read_config(&path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    }
    .with_base_url_override(std::env::var(BASE_URL_ENV).ok());

    logging::initialize(config.log_destination);
    match &loaded {
        Ok(Some(_)) => board_info!("Loaded config from {:?}", path),
        Ok(None) => board_info!("No config at {:?}; using defaults", path),
        Err(err) => board_warn!("{:#}; using defaults", err),
    }
    board_info!("API base URL: {}", config.api_base_url);

    let (inbox_tx, inbox_rx) = mpsc::channel::<Command>();
    let runner = EffectRunner::new(config.client_settings(), inbox_tx.clone())
        .context("failed to start HTTP client")?;
    spawn_stdin_reader(inbox_tx);

    println!("{HELP}");
    let mut state = AppState::new();
    dispatch(&mut state, &runner, Msg::Navigate(Route::Login));

    while let Ok(command) = inbox_rx.recv() {
        match command {
            Command::Dispatch(msg) => dispatch(&mut state, &runner, msg),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }

    board_info!("Exiting");
    Ok(())
}

fn dispatch(state: &mut AppState, runner: &EffectRunner, msg: Msg) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.run(effects);
    if state.consume_dirty() {
        println!();
        for line in render(&state.view()) {
            println!("{line}");
        }
    }
}

fn spawn_stdin_reader(inbox: mpsc::Sender<Command>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Ok(Some(command)) => {
                    if inbox.send(command).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(err) => println!("{err:#}"),
            }
        }
        // End of input behaves like `quit`.
        let _ = inbox.send(Command::Quit);
    });
}
