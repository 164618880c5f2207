//! # Gum Backend
//!
//! Draws widgets by invoking `gum` subcommands as child processes:
//!
//! | Widget | Command | Result |
//! |--------|---------|--------|
//! | Text | `gum style` | - |
//! | Confirm | `gum confirm` | exit code 0 means yes |
//! | List | `gum choose` | selected items on stdout, one per line |
//! | Spinner | `gum spin -- <command>` | blocks until the command exits |
//!
//! Every child inherits stdin and stderr so gum can talk to the terminal
//! directly. Only `gum choose` has its stdout captured.
//!
//! Argument vectors are built by pure functions ([`style_args`],
//! [`confirm_args`], [`choose_args`], [`spin_args`]) so they can be tested
//! without gum installed.

use super::{Backend, Selection};
use crate::component::{Alignment, Confirm, List, Spinner, Style, Text};
use crate::error::{Error, Result};
use crate::render::canvas::Canvas;
use std::process::{Command, ExitStatus, Stdio};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock, PoisonError};

pub const DEFAULT_PROGRAM: &str = "gum";

/// Availability per program, checked once per process
static GUM_AVAILABLE: OnceLock<Mutex<HashMap<String, bool>>> = OnceLock::new();

/// Check if `program` is installed and runnable
pub fn is_gum_available(program: &str) -> bool {
    let cache = GUM_AVAILABLE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut cache = cache.lock().unwrap_or_else(PoisonError::into_inner);
    *cache.entry(program.to_string()).or_insert_with(|| {
        Command::new(program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    })
}

#[derive(Debug, Clone)]
pub struct GumBackend {
    program: String,
}

impl Default for GumBackend {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl GumBackend {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, args: &[String]) -> Command {
        tracing::trace!(program = %self.program, ?args, "invoking gum");
        let mut command = Command::new(&self.program);
        command.args(args).stdin(Stdio::inherit()).stderr(Stdio::inherit());
        command
    }

    fn spawn_error(&self, source: std::io::Error) -> Error {
        Error::Spawn {
            program: self.program.clone(),
            source,
        }
    }

    /// Run with stdout inherited so gum draws straight to the terminal.
    fn run(&self, args: &[String]) -> Result<ExitStatus> {
        self.command(args)
            .stdout(Stdio::inherit())
            .status()
            .map_err(|e| self.spawn_error(e))
    }

    /// Run with stdout captured.
    fn capture(&self, args: &[String]) -> Result<String> {
        let output = self
            .command(args)
            .stdout(Stdio::piped())
            .output()
            .map_err(|e| self.spawn_error(e))?;
        if !output.status.success() {
            tracing::debug!(code = ?output.status.code(), "gum exited without a selection");
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Backend for GumBackend {
    fn render_text(&mut self, text: &Text, canvas: &Canvas) -> Result<()> {
        self.run(&style_args(text, canvas))?;
        Ok(())
    }

    fn render_confirm(&mut self, confirm: &Confirm, canvas: &Canvas) -> Result<bool> {
        let status = self.run(&confirm_args(confirm, canvas))?;
        Ok(status.success())
    }

    fn render_list(&mut self, list: &List, canvas: &Canvas) -> Result<Selection> {
        if list.has_title() {
            self.render_text(&list_title(list), canvas)?;
        }
        self.render_empty_line(list.title.padding)?;
        let stdout = self.capture(&choose_args(list, canvas))?;
        Ok(parse_selection(&stdout, list.is_single_select()))
    }

    fn render_script(&mut self, spinner: &Spinner, canvas: &Canvas) -> Result<()> {
        if spinner.command.is_empty() {
            tracing::warn!(message = %spinner.message, "spinner has no command, skipping");
            return Ok(());
        }
        let status = self.run(&spin_args(spinner, canvas))?;
        if !status.success() {
            tracing::warn!(
                command = %spinner.command.join(" "),
                code = ?status.code(),
                "spinner command failed"
            );
        }
        Ok(())
    }

    fn render_empty_line(&mut self, count: usize) -> Result<()> {
        if count == 0 {
            return Ok(());
        }
        self.run(&empty_line_args(count))?;
        Ok(())
    }
}

/// `gum style` with one empty argument per line.
pub fn empty_line_args(count: usize) -> Vec<String> {
    let mut args = vec!["style".to_string()];
    args.extend(std::iter::repeat(String::new()).take(count));
    args
}

pub fn style_args(text: &Text, canvas: &Canvas) -> Vec<String> {
    let style = &text.style;
    let mut args = vec!["style".to_string()];
    if let Some(border) = &style.border {
        args.push(format!("--border={}", border.kind.as_str()));
        args.push(format!("--border-foreground={}", border.fg));
    }
    args.push(format!("--padding={} {}", style.padding.y, style.padding.x));
    args.push(format!("--margin={} {}", style.margin.y, style.margin.x));
    args.push(format!("--align={}", style.alignment.as_str()));
    if let Some(width) = style.resolved_width(canvas.width) {
        args.push(format!("--width={width}"));
    }
    push_emphasis(&mut args, style, "");
    if let Some(fg) = &style.fg {
        args.push(format!("--foreground={fg}"));
    }
    if let Some(bg) = &style.bg {
        args.push(format!("--background={bg}"));
    }
    args.push(text.text.clone());
    args
}

pub fn confirm_args(confirm: &Confirm, canvas: &Canvas) -> Vec<String> {
    let style = &confirm.style;
    let mut args = vec!["confirm".to_string(), confirm.prompt.clone()];
    args.push(format!("--affirmative={}", confirm.affirmative));
    args.push(format!("--negative={}", confirm.negative));
    args.push(format!("--prompt.align={}", style.alignment.as_str()));
    if let Some(fg) = &style.fg {
        args.push(format!("--prompt.foreground={fg}"));
    }
    if let Some(bg) = &style.bg {
        args.push(format!("--prompt.background={bg}"));
    }
    if let Some(width) = style.resolved_width(canvas.width) {
        args.push(format!("--prompt.width={width}"));
    }
    push_emphasis(&mut args, style, "prompt.");
    args.push(format!("--selected.background={}", confirm.selected_button.bg));
    args.push(format!("--selected.foreground={}", confirm.selected_button.fg));
    args.push(format!("--unselected.background={}", confirm.button.bg));
    args.push(format!("--unselected.foreground={}", confirm.button.fg));
    args
}

pub fn choose_args(list: &List, canvas: &Canvas) -> Vec<String> {
    let mut args = vec!["choose".to_string()];
    if list.limit == 0 {
        args.push("--no-limit".to_string());
    } else {
        args.push(format!("--limit={}", list.limit));
    }
    args.push(format!(
        "--height={}",
        list.height
            .filter(|h| *h != 0)
            .unwrap_or(list.items.len())
    ));
    args.push(format!("--cursor.foreground={}", list.cursor_fg));
    args.push(format!("--selected.foreground={}", list.selected_fg));
    if list.cursor_bold {
        args.push("--cursor.bold".to_string());
    }
    match list.style.alignment {
        Alignment::Center => {
            // gum choose cannot align items, so the cursor is left-padded instead.
            let padding = canvas.width.saturating_sub(list.widest_item()) / 2;
            let indent = " ".repeat(padding.saturating_sub(2));
            args.push(format!("--cursor={indent}{} ", list.cursor));
        }
        Alignment::Left => args.push(format!("--cursor={} ", list.cursor)),
        Alignment::Right => {
            tracing::debug!("gum choose has no right alignment, using left");
            args.push(format!("--cursor={} ", list.cursor));
        }
    }
    args.extend(list.items.iter().cloned());
    args
}

pub fn spin_args(spinner: &Spinner, canvas: &Canvas) -> Vec<String> {
    let style = &spinner.style;
    let mut args = vec!["spin".to_string()];
    args.push(format!("--spinner={}", spinner.spinner.as_str()));
    args.push(format!("--title={}", spinner.message));
    if let Some(fg) = &style.fg {
        args.push(format!("--title.foreground={fg}"));
    }
    args.push(format!("--spinner.foreground={}", spinner.spinner_fg));
    match style.alignment {
        Alignment::Center => {
            // Right-align the spinner in a box reaching the centre of the line.
            let padding = canvas.width.saturating_sub(spinner.size().width) / 2;
            args.push("--spinner.align=right".to_string());
            args.push(format!("--spinner.width={padding}"));
        }
        Alignment::Left => {}
        Alignment::Right => tracing::debug!("gum spin has no right alignment, using left"),
    }
    args.push("--".to_string());
    args.extend(spinner.command.iter().cloned());
    args
}

/// Single-select lists take the first line; multi-select lists take every
/// non-empty line in order.
pub fn parse_selection(stdout: &str, single: bool) -> Selection {
    if single {
        let first = stdout.lines().next().unwrap_or_default();
        return Selection::Single(first.to_string());
    }
    Selection::Multiple(
        stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// The title of a list, drawn as text with the list's alignment and width.
fn list_title(list: &List) -> Text {
    let style = Style {
        fg: list.title.fg.clone(),
        bg: list.title.bg.clone(),
        bold: list.title.bold,
        italic: list.title.italic,
        alignment: list.style.alignment,
        stretch: list.style.stretch,
        width: list.style.width,
        ..Style::default()
    };
    Text::new(list.title.text.clone()).with_style(style)
}

fn push_emphasis(args: &mut Vec<String>, style: &Style, prefix: &str) {
    if style.bold {
        args.push(format!("--{prefix}bold"));
    }
    if style.italic {
        args.push(format!("--{prefix}italic"));
    }
}
