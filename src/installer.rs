//! # Installer
//!
//! The wizard screens, built on the [`Renderer`]:
//!
//! 1. **Welcome** - what the installer does, a warning, and a confirm prompt
//! 2. **Platform** - confirm that the machine is Arch based
//! 3. **Components** - multi-select list of what to install
//! 4. **Install** - one spinner per selected component
//! 5. **Done** - summary
//!
//! Every screen keeps the header (title + credits) and replaces the body.

use crate::backend::{Backend, Response, Selection};
use crate::component::{Alignment, Border, Confirm, List, Spacing, Spinner, Style, Text};
use crate::config::ComponentConfig;
use crate::error::Result;
use crate::render::Renderer;
use crate::theme::Theme;

pub const TITLE: &str = "Nordic Installation Utility";
pub const CREDITS: &str = "@AlexvZyl (alexandervanzyl@protonmail.com)";

/// How a run of the wizard ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user backed out at a prompt.
    Declined,
    /// The named components were installed.
    Completed(Vec<String>),
}

pub struct Installer<B: Backend> {
    renderer: Renderer<B>,
    theme: &'static Theme,
}

impl<B: Backend> Installer<B> {
    pub fn new(renderer: Renderer<B>, theme: &'static Theme) -> Self {
        let mut installer = Self { renderer, theme };
        installer.setup_header();
        installer
    }

    pub fn renderer(&self) -> &Renderer<B> {
        &self.renderer
    }

    fn setup_header(&mut self) {
        let header = Text::new(TITLE).with_style(Style {
            border: Some(Border {
                fg: self.theme.cyan.clone(),
                ..Border::default()
            }),
            fg: Some(self.theme.white2.clone()),
            bold: true,
            padding: Spacing::new(0, 1),
            ..Style::default()
        });
        self.renderer.submit_header(header);

        let credits = Text::new(CREDITS).with_style(Style {
            fg: Some(self.theme.white0.clone()),
            italic: true,
            alignment: Alignment::Right,
            ..Style::default()
        });
        self.renderer.submit_header(credits);
    }

    fn body_text(&self, text: &str) -> Text {
        Text::new(text).with_style(Style {
            fg: Some(self.theme.white2.clone()),
            ..Style::default()
        })
    }

    fn confirm(&self, prompt: &str) -> Confirm {
        let mut confirm = Confirm::new(prompt).with_style(Style {
            fg: Some(self.theme.white2.clone()),
            ..Style::default()
        });
        confirm.selected_button.bg = self.theme.yellow.clone();
        confirm.selected_button.fg = self.theme.black.clone();
        confirm.button.fg = self.theme.white2.clone();
        confirm.button.bg = self.theme.black.clone();
        confirm
    }

    /// Render the current body and read a confirm answer from it.
    fn ask(&mut self) -> Result<bool> {
        Ok(matches!(self.renderer.render()?, Some(Response::Confirmed(true))))
    }

    pub fn welcome(&mut self) -> Result<bool> {
        self.renderer.clear()?;

        let greeting = self.body_text("Welcome to the Nordic installation utility!");
        let scope = self.body_text("I will help you install everything, or some specific components.");
        let mut warning = Text::new(
            "I will try to backup existing configs, but there is a chance that they will be ruined.",
        );
        warning.style.fg = Some(self.theme.yellow.clone());
        warning.style.italic = true;
        warning.update_dimensions();

        let proceed = self.confirm("Do you wish to continue?");
        self.renderer.submit(greeting);
        self.renderer.submit(scope);
        self.renderer.submit(warning);
        self.renderer.submit(proceed);
        self.ask()
    }

    pub fn query_arch(&mut self) -> Result<bool> {
        self.renderer.clear()?;
        let confirm = self.confirm("Are you on an Arch (btw) based platform?");
        self.renderer.submit(confirm);
        self.ask()
    }

    /// Let the user pick any number of components. Returns the picked names in
    /// list order.
    pub fn choose_components(&mut self, components: &[ComponentConfig]) -> Result<Vec<String>> {
        self.renderer.clear()?;

        let mut list = List::new(components.iter().map(|c| c.name.clone()))
            .with_limit(0)
            .with_title("Which components should I install?", 1);
        list.title.fg = Some(self.theme.white2.clone());
        list.title.bold = true;
        list.cursor_fg = self.theme.cyan.clone();
        list.selected_fg = self.theme.yellow.clone();
        self.renderer.submit(list);

        let picked = match self.renderer.render()? {
            Some(Response::Selection(Selection::Multiple(items))) => items,
            Some(Response::Selection(Selection::Single(item))) if !item.is_empty() => vec![item],
            _ => Vec::new(),
        };
        tracing::info!(?picked, "components selected");
        Ok(picked)
    }

    /// Run a command behind a spinner. Blocks until the command exits.
    pub fn exec(&mut self, command: &[String], title: &str) -> Result<()> {
        self.renderer.clear()?;
        let mut spinner = Spinner::with_message(command.iter().cloned(), title);
        spinner.spinner_fg = self.theme.yellow.clone();
        spinner.style.fg = Some(self.theme.white2.clone());
        self.renderer.submit(spinner);
        self.renderer.render()?;
        Ok(())
    }

    pub fn done(&mut self, installed: &[String]) -> Result<()> {
        self.renderer.clear()?;
        let summary = if installed.is_empty() {
            "Nothing was installed.".to_string()
        } else {
            format!("Installed: {}", installed.join(", "))
        };
        let title = self.body_text("All done!");
        self.renderer.submit(title);
        let mut summary = Text::new(summary);
        summary.style.fg = Some(self.theme.green.clone());
        summary.update_dimensions();
        self.renderer.submit(summary);
        self.renderer.render()?;
        Ok(())
    }

    /// Walk through every screen.
    pub fn run(&mut self, components: &[ComponentConfig]) -> Result<Outcome> {
        if !self.welcome()? {
            tracing::info!("declined at welcome screen");
            return Ok(Outcome::Declined);
        }
        if !self.query_arch()? {
            tracing::info!("declined at platform check");
            return Ok(Outcome::Declined);
        }

        let picked = self.choose_components(components)?;
        let mut installed = Vec::new();
        for name in &picked {
            let Some(component) = components.iter().find(|c| &c.name == name) else {
                tracing::warn!(%name, "selection does not match any component");
                continue;
            };
            tracing::info!(%name, command = ?component.command, "installing");
            self.exec(&component.command, &format!("Installing {name}..."))?;
            installed.push(name.clone());
        }

        self.done(&installed)?;
        Ok(Outcome::Completed(installed))
    }

    /// Text, a titled multi-select list and a spinner on a single screen.
    pub fn showcase(&mut self) -> Result<Option<Response>> {
        self.renderer.clear()?;

        let text = self.body_text("This is some text.");
        self.renderer.submit(text.clone());
        self.renderer.submit(text);

        let mut list = List::new(["Aasf", "B", "C", "D", "E", "F", "G", "H"])
            .with_limit(2)
            .with_title("This is the title:", 1);
        list.cursor_fg = self.theme.cyan.clone();
        self.renderer.submit(list);

        self.renderer.submit(Spinner::new(["sleep", "3"]));
        self.renderer.render()
    }
}
