use std::io::{self, Stdout, Write};

use cluecard_core::{
    audio::{CuePlayer, PlaybackError, SilentCue},
    input::InvalidInput,
    render::{Controls, Presenter, RevealItem, RoundCard},
    settings::PlayMode,
};

const BELL: &[u8] = b"\x07";

/// Line-oriented terminal renderer.
///
/// The timer is redrawn in place with `\r`; anything else first closes that
/// line so output never lands on top of the clock.
pub(super) struct TerminalPresenter<W: Write> {
    out: W,
    title: &'static str,
    mode: PlayMode,
    timer_line_open: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub(super) fn new(out: W, title: &'static str, mode: PlayMode) -> Self {
        Self {
            out,
            title,
            mode,
            timer_line_open: false,
        }
    }

    pub(super) fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Close the timer line before exiting.
    pub(super) fn finish(&mut self) -> io::Result<()> {
        self.close_timer_line()?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn close_timer_line(&mut self) -> io::Result<()> {
        if self.timer_line_open {
            self.timer_line_open = false;
            writeln!(self.out)?;
        }
        Ok(())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    type Error = io::Error;

    fn show_setup(&mut self) -> Result<(), Self::Error> {
        self.close_timer_line()?;
        writeln!(self.out)?;
        writeln!(self.out, "== {} ({} mode) ==", self.title, self.mode.as_str())?;
        writeln!(
            self.out,
            "Type `start <seconds>` (or just the number) to begin. `h` for help, `q` quits."
        )
    }

    fn show_invalid_input(&mut self, error: InvalidInput) -> Result<(), Self::Error> {
        self.close_timer_line()?;
        writeln!(self.out, "! {}", error)
    }

    fn render_round(&mut self, round: u32, cards: &[RoundCard<'_>]) -> Result<(), Self::Error> {
        self.close_timer_line()?;
        writeln!(self.out)?;
        writeln!(self.out, "-- Round {} --", round)?;
        for (n, card) in cards.iter().enumerate() {
            if card.category.is_empty() {
                writeln!(self.out, "  {}. {}", n + 1, card.keyword)?;
            } else {
                writeln!(self.out, "  {}. {}  [{}]", n + 1, card.keyword, card.category)?;
            }
        }
        Ok(())
    }

    fn render_timer(&mut self, text: &str) -> Result<(), Self::Error> {
        self.timer_line_open = true;
        write!(self.out, "\r  {}  ", text)
    }

    fn render_reveal(&mut self, items: &[RevealItem<'_>]) -> Result<(), Self::Error> {
        self.close_timer_line()?;
        writeln!(self.out)?;
        writeln!(self.out, "-- Answers --")?;
        for item in items {
            if item.clues.is_empty() {
                writeln!(self.out, "  {}", item.keyword)?;
            } else {
                writeln!(self.out, "  {}: {}", item.keyword, item.clues.join(", "))?;
            }
        }
        writeln!(
            self.out,
            "`c` next round, `n` new game."
        )
    }

    fn set_controls(&mut self, controls: Controls) -> Result<(), Self::Error> {
        let mut hints = Vec::new();
        if controls.pause {
            hints.push(format!("`p` {}", controls.pause_label()));
        }
        if controls.stop {
            hints.push("`s` stop".to_owned());
        }
        if controls.reveal {
            hints.push("`r` reveal answers".to_owned());
        }
        if controls.previous {
            hints.push("`b` replay previous round".to_owned());
        }
        if controls.reveal {
            hints.push("`n` new game".to_owned());
        }
        if hints.is_empty() {
            return Ok(());
        }

        self.close_timer_line()?;
        writeln!(self.out, "[{}]", hints.join("  "))
    }
}

/// Full-screen message for errors that end the session.
pub(super) fn render_fatal<W: Write>(out: &mut W, title: &str, detail: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "== {} ==", title)?;
    writeln!(out, "Error: {}", detail)?;
    writeln!(
        out,
        "Check that the word list file exists and has entries, then start again."
    )?;
    out.flush()
}

pub(super) fn render_loading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}: loading words...", title)?;
    out.flush()
}

pub(super) fn render_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "commands:")?;
    writeln!(out, "  start <seconds> | <seconds>   begin a round")?;
    writeln!(out, "  p | pause | resume           pause or resume the clock")?;
    writeln!(out, "  s | stop                     end the round now")?;
    writeln!(out, "  r | reveal                   show the answers")?;
    writeln!(out, "  c | next | continue          next round, same length")?;
    writeln!(out, "  b | back | previous          replay the previous round")?;
    writeln!(out, "  n | new                      back to setup")?;
    writeln!(out, "  q | quit                     exit")?;
    out.flush()
}

/// Terminal bell as the countdown cue.
pub(super) struct BellCue<W: Write> {
    out: W,
}

impl<W: Write> BellCue<W> {
    pub(super) fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> CuePlayer for BellCue<W> {
    fn play_cue(&mut self) -> Result<(), PlaybackError> {
        self.out
            .write_all(BELL)
            .and_then(|()| self.out.flush())
            .map_err(|_| PlaybackError::DeviceUnavailable)
    }

    fn stop_cue(&mut self) -> Result<(), PlaybackError> {
        // A bell cannot be cut short.
        Ok(())
    }
}

pub(super) enum HostCue {
    Bell(BellCue<Stdout>),
    Silent(SilentCue),
}

impl HostCue {
    pub(super) fn new(muted: bool) -> Self {
        if muted {
            Self::Silent(SilentCue::new())
        } else {
            Self::Bell(BellCue::new(io::stdout()))
        }
    }
}

impl CuePlayer for HostCue {
    fn play_cue(&mut self) -> Result<(), PlaybackError> {
        match self {
            Self::Bell(bell) => bell.play_cue(),
            Self::Silent(silent) => silent.play_cue(),
        }
    }

    fn stop_cue(&mut self) -> Result<(), PlaybackError> {
        match self {
            Self::Bell(bell) => bell.stop_cue(),
            Self::Silent(silent) => silent.stop_cue(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(presenter: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn timer_redraws_in_place_and_round_starts_on_fresh_line() {
        let mut presenter = TerminalPresenter::new(Vec::new(), "Test", PlayMode::Clues);
        presenter.render_timer("00:02").unwrap();
        presenter.render_timer("00:01").unwrap();
        presenter
            .render_round(
                2,
                &[RoundCard {
                    category: "Food",
                    keyword: "Soup",
                }],
            )
            .unwrap();

        assert_eq!(
            rendered(presenter),
            "\r  00:02  \r  00:01  \n\n-- Round 2 --\n  1. Soup  [Food]\n"
        );
    }

    #[test]
    fn reveal_joins_clues() {
        let clues = ["hot".to_owned(), "spoon".to_owned()];
        let mut presenter = TerminalPresenter::new(Vec::new(), "Test", PlayMode::Clues);
        presenter
            .render_reveal(&[
                RevealItem {
                    category: "Food",
                    keyword: "Soup",
                    clues: &clues,
                },
                RevealItem {
                    category: "",
                    keyword: "Kite",
                    clues: &[],
                },
            ])
            .unwrap();

        let text = rendered(presenter);
        assert!(text.contains("  Soup: hot, spoon\n"));
        assert!(text.contains("  Kite\n"));
    }

    #[test]
    fn hidden_controls_print_nothing() {
        let mut presenter = TerminalPresenter::new(Vec::new(), "Test", PlayMode::Paging);
        presenter.set_controls(Controls::HIDDEN).unwrap();
        assert!(rendered(presenter).is_empty());
    }

    #[test]
    fn running_controls_show_pause_label() {
        let mut presenter = TerminalPresenter::new(Vec::new(), "Test", PlayMode::Clues);
        presenter
            .set_controls(Controls {
                pause: true,
                stop: true,
                reveal: false,
                previous: false,
                paused: true,
            })
            .unwrap();
        assert_eq!(rendered(presenter), "[`p` resume  `s` stop]\n");
    }

    #[test]
    fn replay_hint_follows_previous_flag() {
        let expired = Controls {
            reveal: true,
            ..Controls::HIDDEN
        };

        let mut presenter = TerminalPresenter::new(Vec::new(), "Test", PlayMode::Clues);
        presenter.set_controls(expired).unwrap();
        assert_eq!(
            rendered(presenter),
            "[`r` reveal answers  `n` new game]\n"
        );

        let mut presenter = TerminalPresenter::new(Vec::new(), "Test", PlayMode::Clues);
        presenter
            .set_controls(Controls {
                previous: true,
                ..expired
            })
            .unwrap();
        assert_eq!(
            rendered(presenter),
            "[`r` reveal answers  `b` replay previous round  `n` new game]\n"
        );
    }

    #[test]
    fn bell_writes_a_single_bel_byte() {
        let mut bell = BellCue::new(Vec::new());
        bell.play_cue().unwrap();
        bell.play_cue().unwrap();
        bell.stop_cue().unwrap();
        assert_eq!(bell.out, b"\x07\x07");
    }
}
