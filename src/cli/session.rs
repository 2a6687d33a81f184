//! Session command - interactive recipe building.
//!
//! Reads one command per line from stdin and drives a [`Session`]. File
//! commands take an optional path; without one, the user is prompted when
//! stdin is a terminal and the action is cancelled otherwise.

use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::cli::{ops, output};
use crate::core::clipboard::SystemClipboard;
use crate::core::config::Config;
use crate::core::host::{FileFilter, Host, Severity};
use crate::core::operation::Operation;
use crate::core::registry;
use crate::core::session::Session;
use crate::core::types::Params;
use crate::error::Result;

const HELP: &[(&str, &str)] = &[
    ("ops", "list operations"),
    ("add <operation> [name=value]", "append a step, e.g. add Caesar Encrypt shift=3"),
    ("rm <n>", "remove step n"),
    ("set <n> <value>", "set the shift or key of step n"),
    ("clear", "remove every step"),
    ("show", "show the recipe, marking the last executed step"),
    ("input <text>", "replace the input"),
    ("paste", "replace the input with the clipboard"),
    ("open [path]", "replace the input with a file's contents"),
    ("step", "run the next step"),
    ("bake", "run the whole recipe"),
    ("output", "print the output"),
    ("copy", "copy the output to the clipboard"),
    ("save-output [path]", "write the output to a file"),
    ("save [path]", "save the recipe"),
    ("load [path]", "load a recipe, reversed and inverted"),
    ("clear-input", "empty the input"),
    ("clear-output", "empty the output"),
    ("help", "show this help"),
    ("quit", "leave the session"),
];

/// One parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Ops,
    Add(Operation, Params),
    Rm(usize),
    Set(usize, String),
    Clear,
    Show,
    Input(String),
    Paste,
    Open(Option<PathBuf>),
    Step,
    Bake,
    Output,
    Copy,
    SaveOutput(Option<PathBuf>),
    Save(Option<PathBuf>),
    Load(Option<PathBuf>),
    ClearInput,
    ClearOutput,
    Help,
    Quit,
    Blank,
}

fn position(arg: &str) -> std::result::Result<usize, String> {
    match arg.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a step number, got '{}'", arg.trim())),
    }
}

fn optional_path(arg: &str) -> Option<PathBuf> {
    let arg = arg.trim();
    (!arg.is_empty()).then(|| PathBuf::from(arg))
}

/// Split `add` arguments into an operation name and `name=value` params.
fn parse_add(args: &str) -> std::result::Result<(Operation, Params), String> {
    let mut name_words = Vec::new();
    let mut params = Params::new();
    for word in args.split_whitespace() {
        match word.split_once('=') {
            Some((k, v)) => {
                params.insert(k.to_string(), v.to_string());
            }
            None => name_words.push(word),
        }
    }
    let name = name_words.join(" ");
    let op = registry::lookup(&name).map_err(|e| e.to_string())?;
    Ok((op, params))
}

impl Line {
    fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));

        Ok(match word {
            "" => Line::Blank,
            "ops" => Line::Ops,
            "add" => {
                let (op, params) = parse_add(rest)?;
                Line::Add(op, params)
            }
            "rm" => Line::Rm(position(rest)?),
            "set" => {
                let rest = rest.trim_start();
                let (n, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Line::Set(position(n)?, value.trim().to_string())
            }
            "clear" => Line::Clear,
            "show" => Line::Show,
            // keep the text exactly as typed after the first space
            "input" => Line::Input(rest.to_string()),
            "paste" => Line::Paste,
            "open" => Line::Open(optional_path(rest)),
            "step" => Line::Step,
            "bake" => Line::Bake,
            "output" => Line::Output,
            "copy" => Line::Copy,
            "save-output" => Line::SaveOutput(optional_path(rest)),
            "save" => Line::Save(optional_path(rest)),
            "load" => Line::Load(optional_path(rest)),
            "clear-input" => Line::ClearInput,
            "clear-output" => Line::ClearOutput,
            "help" | "?" => Line::Help,
            "quit" | "exit" => Line::Quit,
            other => return Err(format!("unknown command '{}' (type help)", other)),
        })
    }
}

/// [`Host`] backed by the terminal, the file system and the system clipboard.
struct TerminalHost {
    clipboard: SystemClipboard,
    interactive: bool,
    /// Path given on the command line, answered in place of a dialog.
    pending_path: Option<PathBuf>,
}

impl TerminalHost {
    fn dialog(&mut self, title: &str, filters: &[FileFilter]) -> Result<Option<PathBuf>> {
        if let Some(path) = self.pending_path.take() {
            return Ok(Some(path));
        }
        if !self.interactive {
            output::dimmed(&format!("{}: no path given, cancelled", title));
            return Ok(None);
        }
        let patterns: Vec<&str> = filters.iter().map(|f| f.pattern).collect();
        let answer: String = Input::new()
            .with_prompt(format!("{} [{}]", title, patterns.join(", ")))
            .allow_empty(true)
            .interact_text()?;
        Ok(optional_path(&answer))
    }
}

impl Host for TerminalHost {
    fn read_clipboard(&mut self) -> Result<String> {
        self.clipboard.read()
    }

    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        self.clipboard.write(text)
    }

    fn open_file_dialog(&mut self, title: &str, filters: &[FileFilter]) -> Result<Option<PathBuf>> {
        self.dialog(title, filters)
    }

    fn save_file_dialog(&mut self, title: &str, filters: &[FileFilter]) -> Result<Option<PathBuf>> {
        self.dialog(title, filters)
    }

    fn notify(&mut self, title: &str, message: &str, severity: Severity) {
        let text = format!("{}: {}", title, message);
        match severity {
            Severity::Info => output::hint(&text),
            Severity::Warning => output::warn(&text),
            Severity::Error => output::error(&text),
        }
    }
}

fn print_help() {
    output::section("Commands");
    for (usage, what) in HELP {
        println!("  {:<30} {}", usage, what);
    }
}

fn step_id_at(session: &Session, position: usize) -> Option<crate::core::recipe::StepId> {
    session.recipe().steps().get(position - 1).map(|s| s.id())
}

/// Apply one parsed line. Returns false when the session should end.
fn apply(line: Line, session: &mut Session, host: &mut TerminalHost) -> bool {
    let before = session.status().to_string();
    match line {
        Line::Blank => {}
        Line::Quit => return false,
        Line::Help => print_help(),
        Line::Ops => ops::print_table(),
        Line::Add(op, params) => {
            session.add_step(op, params);
            output::success(&format!(
                "added {} as step {}",
                output::op(op.name()),
                session.recipe().len()
            ));
        }
        Line::Rm(n) => match step_id_at(session, n) {
            Some(id) => {
                session.remove_step(id);
                output::success(&format!("removed step {}", n));
            }
            None => output::error(&format!("no step at position {}", n)),
        },
        Line::Set(n, value) => {
            let target = session
                .recipe()
                .steps()
                .get(n - 1)
                .map(|s| (s.id(), s.operation()));
            match target {
                Some((id, op)) => match op.param_kind().param_name() {
                    Some(name) => {
                        session.set_param(id, name, &value);
                        output::success(&format!("step {} {} set", n, name));
                    }
                    None => output::error(&format!("{} takes no parameter", op)),
                },
                None => output::error(&format!("no step at position {}", n)),
            }
        }
        Line::Clear => session.clear_recipe(),
        Line::Show => {
            output::steps(session.recipe().steps(), session.highlighted());
        }
        Line::Input(text) => session.set_input(text),
        Line::Paste => session.paste_input(host),
        Line::Open(path) => {
            host.pending_path = path;
            session.open_input_file(host);
        }
        Line::Step => {
            if session.process_step(host) {
                output::dimmed(session.status());
                output::steps(session.recipe().steps(), session.highlighted());
                output::rule();
                println!("{}", session.output());
                return true;
            }
        }
        Line::Bake => {
            if session.bake(host) {
                output::dimmed(session.status());
                println!("{}", session.output());
                return true;
            }
        }
        Line::Output => println!("{}", session.output()),
        Line::Copy => session.copy_output(host),
        Line::SaveOutput(path) => {
            host.pending_path = path;
            session.save_output(host);
        }
        Line::Save(path) => {
            host.pending_path = path;
            session.save_recipe(host);
        }
        Line::Load(path) => {
            host.pending_path = path;
            if session.load_recipe(host) {
                host.pending_path = None;
                output::dimmed(session.status());
                output::steps(session.recipe().steps(), None);
                return true;
            }
        }
        Line::ClearInput => session.clear_input(),
        Line::ClearOutput => session.clear_output(),
    }
    host.pending_path = None;

    if session.status() != before {
        output::dimmed(session.status());
    }
    true
}

/// Run the session until `quit` or end of input.
pub fn execute(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut host = TerminalHost {
        clipboard: SystemClipboard::new(&config.clipboard),
        interactive,
        pending_path: None,
    };
    let mut session = Session::new();

    if interactive {
        output::header("ladle session");
        output::dimmed("type help for commands, quit to leave");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{} ", output::cmd("ladle>"));
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else { break };
        let line = line?;
        debug!(line = %redact(&line), "session command");

        match Line::parse(&line) {
            Ok(parsed) => {
                if !apply(parsed, &mut session, &mut host) {
                    break;
                }
            }
            Err(msg) => output::error(&msg),
        }
    }
    Ok(())
}

/// Keep parameter values, which may be AES keys, out of the logs.
fn redact(line: &str) -> String {
    let mut words = line.split_whitespace();
    match words.next() {
        Some("add") => std::iter::once("add")
            .chain(words.map(|w| match w.split_once('=') {
                Some((k, _)) if k == "key" => "key=****",
                _ => w,
            }))
            .collect::<Vec<_>>()
            .join(" "),
        Some("set") => format!("set {} ****", words.next().unwrap_or_default()),
        _ => line.to_string(),
    }
}
