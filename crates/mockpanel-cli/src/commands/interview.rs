use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use mockpanel_application::{PanelEngine, PanelHandle, PanelRuntime};
use mockpanel_core::config::Pacing;
use mockpanel_core::i18n::{Language, Translator};
use mockpanel_core::role::{default_roles, find_role};
use mockpanel_core::session::{EngineEvent, SessionPhase};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tokio::sync::broadcast;
use tracing::{debug, info};

use super::{load_config, translator};
use crate::helper::CliHelper;

pub struct InterviewOptions {
    pub role: String,
    pub config: Option<PathBuf>,
    pub fast: bool,
    pub lang: Option<String>,
}

/// What the REPL should do with one input line.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Time,
    End,
    Restart,
    Reply(&'a str),
    Empty,
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        "" => Input::Empty,
        "quit" | "exit" => Input::Quit,
        "/time" => Input::Time,
        "/end" => Input::End,
        "/restart" => Input::Restart,
        reply => Input::Reply(reply),
    }
}

/// Zero-padded `(minutes, seconds)` for the countdown display.
fn split_clock(remaining_seconds: u32) -> (String, String) {
    (
        format!("{:02}", remaining_seconds / 60),
        format!("{:02}", remaining_seconds % 60),
    )
}

pub async fn run(options: InterviewOptions) -> Result<()> {
    let language = options
        .lang
        .as_deref()
        .map(str::parse::<Language>)
        .transpose()?;
    let t = translator(language);

    let mut config = load_config(options.config).await?;
    let roles = default_roles();
    let role = find_role(&roles, &options.role)?;
    config.role_title = role.title.clone();
    if options.fast {
        config.pacing = Pacing::immediate();
    }

    let speakers: HashMap<u32, String> = config
        .personas
        .iter()
        .map(|p| (p.id, p.display_label()))
        .collect();

    let engine = PanelEngine::with_thread_random(config)?;
    let (handle, runtime_task) = PanelRuntime::spawn(engine);
    info!(role = %role.id, "Starting interview");

    let printer = tokio::spawn(print_events(handle.subscribe(), speakers, t.clone()));

    // ===== REPL Setup =====
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", t.t("app.title", &[]).bright_magenta().bold());
    println!("{}", t.t("interview.hint", &[]).bright_black());
    println!();

    handle.start()?;

    // ===== Main REPL Loop =====
    loop {
        let readline = tokio::task::block_in_place(|| rl.readline(">> "));

        match readline {
            Ok(line) => match parse_input(&line) {
                Input::Empty => continue,
                Input::Quit => {
                    println!("{}", t.t("app.goodbye", &[]).bright_green());
                    break;
                }
                Input::Time => print_time(&handle, &t),
                Input::End => handle.complete()?,
                Input::Restart => {
                    handle.reset()?;
                    println!("{}", t.t("interview.restarted", &[]).yellow());
                    handle.start()?;
                }
                Input::Reply(reply) => {
                    let _ = rl.add_history_entry(reply);
                    if handle.snapshot().phase == SessionPhase::AwaitingAnswer {
                        handle.submit_reply(reply)?;
                    } else {
                        debug!("Reply typed outside of an open question");
                        println!("{}", t.t("interview.waiting", &[]).bright_black());
                    }
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", t.t("app.goodbye", &[]).bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    handle.shutdown();
    runtime_task.await?;
    printer.abort();
    Ok(())
}

fn print_time(handle: &PanelHandle, t: &Translator) {
    let (minutes, seconds) = split_clock(handle.snapshot().remaining_seconds);
    println!(
        "{}",
        t.t(
            "interview.time_left",
            &[("minutes", &minutes), ("seconds", &seconds)]
        )
        .bright_yellow()
    );
}

async fn print_events(
    mut events: broadcast::Receiver<EngineEvent>,
    speakers: HashMap<u32, String>,
    t: Translator,
) {
    let mut replies = 0usize;

    loop {
        let event = match events.recv().await {
            Ok(event) => event,
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                debug!(skipped, "Event printer lagged");
                continue;
            }
            Err(broadcast::error::RecvError::Closed) => break,
        };

        match event {
            EngineEvent::MessageAppended { message } if message.is_from_user => {
                replies += 1;
                let you = t.t("interview.you", &[]);
                println!("{}", format!("[{}] {}", you, message.content).green());
            }
            EngineEvent::MessageAppended { message } => {
                let speaker = speakers
                    .get(&message.sender_id)
                    .map(String::as_str)
                    .unwrap_or("Panel");
                println!("{}", format!("[{}]", speaker).bright_magenta());
                for line in message.content.lines() {
                    println!("{}", line.bright_blue());
                }
                println!();
            }
            EngineEvent::PhaseChanged {
                to: SessionPhase::Complete,
                ..
            } => {
                let count = replies.to_string();
                println!(
                    "{}",
                    t.t("interview.complete", &[("replies", &count)]).bright_green()
                );
            }
            EngineEvent::PhaseChanged {
                to: SessionPhase::NotStarted,
                ..
            } => replies = 0,
            EngineEvent::PhaseChanged { .. } | EngineEvent::TimerTick { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("  "), Input::Empty);
        assert_eq!(parse_input("quit"), Input::Quit);
        assert_eq!(parse_input(" /time "), Input::Time);
        assert_eq!(parse_input("/end"), Input::End);
        assert_eq!(parse_input("/restart"), Input::Restart);
        assert_eq!(parse_input("  my answer "), Input::Reply("my answer"));
    }

    #[test]
    fn test_split_clock() {
        assert_eq!(split_clock(600), ("10".to_string(), "00".to_string()));
        assert_eq!(split_clock(65), ("01".to_string(), "05".to_string()));
        assert_eq!(split_clock(0), ("00".to_string(), "00".to_string()));
    }
}
