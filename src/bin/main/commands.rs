use std::{
    io::{self, BufRead, Write},
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use cluecard_core::input::{InputEvent, InputProvider};
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use log::{debug, info, warn};

use super::terminal;

const COMMAND_QUEUE_DEPTH: usize = 8;

static COMMANDS: Channel<CriticalSectionRawMutex, InputEvent, COMMAND_QUEUE_DEPTH> =
    Channel::new();
static QUIT_REQUESTED: AtomicBool = AtomicBool::new(false);

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum Command {
    Input(InputEvent),
    Help,
    Quit,
}

pub(super) fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word.to_ascii_lowercase().as_str() {
        "start" | "go" => Command::Input(InputEvent::start(rest)),
        "p" | "pause" | "resume" => Command::Input(InputEvent::PauseToggle),
        "s" | "stop" => Command::Input(InputEvent::Stop),
        "r" | "reveal" => Command::Input(InputEvent::Reveal),
        "c" | "next" | "continue" => Command::Input(InputEvent::Continue),
        "b" | "back" | "previous" => Command::Input(InputEvent::Previous),
        "n" | "new" => Command::Input(InputEvent::NewGame),
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ if rest.is_empty() && word.starts_with(|ch: char| ch.is_ascii_digit() || ch == '-') => {
            Command::Input(InputEvent::start(word))
        }
        _ => return None,
    };

    Some(command)
}

pub(super) fn quit_requested() -> bool {
    QUIT_REQUESTED.load(Ordering::Acquire)
}

/// Forward stdin lines to the game loop. End of input counts as quit.
pub(super) fn spawn_stdin_reader() -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin-commands".to_owned())
        .spawn(|| {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        warn!("input: stdin read failed: {}", err);
                        break;
                    }
                };
                if line.trim().is_empty() {
                    continue;
                }

                match parse_command(&line) {
                    Some(Command::Input(event)) => {
                        debug!("input: queued {}", event.name());
                        if COMMANDS.try_send(event).is_err() {
                            warn!("input: command queue full; dropping {:?}", line.trim());
                        }
                    }
                    Some(Command::Help) => {
                        show_help(&mut io::stdout());
                    }
                    Some(Command::Quit) => break,
                    None => {
                        println!("unknown command {:?}; `h` lists commands", line.trim());
                    }
                }
            }

            info!("input: stdin closed");
            QUIT_REQUESTED.store(true, Ordering::Release);
        })
}

fn show_help<W: Write>(out: &mut W) -> bool {
    match terminal::render_help(out) {
        Ok(()) => true,
        Err(err) => {
            warn!("display: help write failed: {}", err);
            false
        }
    }
}

/// Input provider fed by the stdin reader thread.
#[derive(Debug, Default, Clone, Copy)]
pub(super) struct ChannelInput;

impl ChannelInput {
    pub(super) const fn new() -> Self {
        Self
    }
}

impl InputProvider for ChannelInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(COMMANDS.try_receive().ok())
    }
}
