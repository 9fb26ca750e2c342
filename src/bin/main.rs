use std::{io, process};

use cluecard_core::app::{GameApp, Session, TickResult};
use embassy_executor::Spawner;
use embassy_time::{Instant, Timer};
use env_logger::Env;
use log::{error, info, warn};
use rand::{SeedableRng, rngs::StdRng};

use commands::ChannelInput;
use config::HostConfig;
use terminal::{HostCue, TerminalPresenter};

#[path = "main/commands.rs"]
mod commands;
#[path = "main/config.rs"]
mod config;
#[path = "main/loading.rs"]
mod loading;
#[path = "main/terminal.rs"]
mod terminal;

const TITLE: &str = "Clue Card";
const LOOP_INTERVAL_MS: u64 = 20;

fn exit_with_fatal(detail: &str) -> ! {
    if let Err(err) = terminal::render_fatal(&mut io::stdout(), TITLE, detail) {
        error!("display: fatal screen write failed: {}", err);
    }
    process::exit(1);
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = HostConfig::from_env();
    info!(
        "{} starting: mode={} batch={} words={} muted={}",
        TITLE,
        config.game.mode.as_str(),
        config.game.batch_size,
        config
            .word_list
            .as_ref()
            .map_or_else(|| "builtin".into(), |path| path.display().to_string()),
        config.muted
    );

    if let Err(err) = terminal::render_loading(&mut io::stdout(), TITLE) {
        warn!("display: loading screen write failed: {}", err);
    }

    let records = match loading::load_word_list(&config) {
        Ok(records) => records,
        Err(err) => {
            error!("loading: word list failed reason={}", err.reason());
            exit_with_fatal(&err.to_string());
        }
    };

    let session = match Session::new(records, config.game, StdRng::from_os_rng()) {
        Ok(session) => session,
        Err(err) => {
            error!("loading: session rejected word list: {}", err);
            exit_with_fatal(&err.to_string());
        }
    };

    let mut app = GameApp::new(
        session,
        ChannelInput::new(),
        TerminalPresenter::new(io::stdout(), TITLE, config.game.mode),
        HostCue::new(config.muted),
    );

    // Commands only flow once the word list is in place.
    if let Err(err) = commands::spawn_stdin_reader() {
        error!("input: could not start stdin reader: {}", err);
        exit_with_fatal("keyboard input is unavailable");
    }

    let loop_start = Instant::now();
    loop {
        if commands::quit_requested() {
            break;
        }

        let now_ms = loop_start.elapsed().as_millis();
        if app.tick(now_ms) == TickResult::RenderRequested
            && let Err(err) = app.presenter_mut().flush()
        {
            warn!("display: flush failed: {}", err);
        }

        Timer::after_millis(LOOP_INTERVAL_MS).await;
    }

    if let Err(err) = app.presenter_mut().finish() {
        warn!("display: final flush failed: {}", err);
    }
    info!(
        "{} exiting after {} rounds",
        TITLE,
        app.session().round_number()
    );
    process::exit(0);
}
