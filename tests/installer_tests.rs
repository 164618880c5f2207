//! Installer flow tests
//!
//! Walks the wizard with a scripted backend standing in for gum: confirm
//! answers and list selections are queued up front, and every spinner command
//! is recorded instead of being run.

use nordic::backend::gum::parse_selection;
use nordic::backend::{Backend, Response, Selection};
use nordic::component::{Confirm, List, Spinner, Text, Widget};
use nordic::config::{ComponentConfig, Config};
use nordic::installer::{Installer, Outcome, CREDITS, TITLE};
use nordic::render::canvas::{Canvas, Screen};
use nordic::render::Renderer;
use nordic::theme::Theme;
use std::collections::VecDeque;
use std::io;

struct StaticScreen;

impl Screen for StaticScreen {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((100, 30))
    }

    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
struct ScriptedBackend {
    confirms: VecDeque<bool>,
    list_outputs: VecDeque<String>,
    texts: Vec<String>,
    prompts: Vec<String>,
    commands: Vec<(String, Vec<String>)>,
}

impl Backend for ScriptedBackend {
    fn render_text(&mut self, text: &Text, _canvas: &Canvas) -> nordic::Result<()> {
        self.texts.push(text.text.clone());
        Ok(())
    }

    fn render_confirm(&mut self, confirm: &Confirm, _canvas: &Canvas) -> nordic::Result<bool> {
        self.prompts.push(confirm.prompt.clone());
        Ok(self.confirms.pop_front().unwrap_or(false))
    }

    fn render_list(&mut self, list: &List, _canvas: &Canvas) -> nordic::Result<Selection> {
        let stdout = self.list_outputs.pop_front().unwrap_or_default();
        Ok(parse_selection(&stdout, list.is_single_select()))
    }

    fn render_script(&mut self, spinner: &Spinner, _canvas: &Canvas) -> nordic::Result<()> {
        self.commands
            .push((spinner.message.clone(), spinner.command.clone()));
        Ok(())
    }

    fn render_empty_line(&mut self, _count: usize) -> nordic::Result<()> {
        Ok(())
    }
}

fn create_installer(backend: ScriptedBackend) -> Installer<ScriptedBackend> {
    let renderer = Renderer::with_screen(backend, Box::new(StaticScreen));
    Installer::new(renderer, Theme::default_theme())
}

fn components() -> Vec<ComponentConfig> {
    vec![
        ComponentConfig {
            name: "Polybar".to_string(),
            command: vec!["true".to_string()],
        },
        ComponentConfig {
            name: "Fonts".to_string(),
            command: vec!["fc-cache".to_string(), "-f".to_string()],
        },
        ComponentConfig {
            name: "Kitty".to_string(),
            command: vec!["echo".to_string(), "kitty".to_string()],
        },
    ]
}

#[test]
fn test_header_has_title_and_credits() {
    let installer = create_installer(ScriptedBackend::default());
    let header = installer.renderer().header();

    assert_eq!(header.len(), 2);
    assert!(header[0].style().has_border());
    assert!(header[0].style().bold);
    assert!(header[1].style().italic);
}

#[test]
fn test_declining_welcome_stops_the_wizard() {
    let backend = ScriptedBackend {
        confirms: VecDeque::from([false]),
        ..ScriptedBackend::default()
    };
    let mut installer = create_installer(backend);

    let outcome = installer.run(&components()).unwrap();
    assert_eq!(outcome, Outcome::Declined);

    let backend = installer.renderer().backend();
    assert_eq!(backend.prompts, vec!["Do you wish to continue?"]);
    assert!(backend.commands.is_empty());
}

#[test]
fn test_welcome_body_is_one_line_per_widget() {
    let backend = ScriptedBackend {
        confirms: VecDeque::from([false]),
        ..ScriptedBackend::default()
    };
    let mut installer = create_installer(backend);
    assert!(!installer.welcome().unwrap());

    let body = installer.renderer().body();
    assert_eq!(body.len(), 4);
    for widget in &body[..3] {
        let Widget::Text(text) = widget else {
            panic!("expected text, got {}", widget.kind());
        };
        assert!(!text.text.contains('\n'), "{:?} spans lines", text.text);
        assert_eq!(widget.size().height, 1);
    }
}

#[test]
fn test_declining_platform_check_stops_the_wizard() {
    let backend = ScriptedBackend {
        confirms: VecDeque::from([true, false]),
        ..ScriptedBackend::default()
    };
    let mut installer = create_installer(backend);

    assert_eq!(installer.run(&components()).unwrap(), Outcome::Declined);
    assert_eq!(installer.renderer().backend().prompts.len(), 2);
}

#[test]
fn test_full_run_installs_selected_components_in_order() {
    let backend = ScriptedBackend {
        confirms: VecDeque::from([true, true]),
        list_outputs: VecDeque::from(["Polybar\nKitty\n".to_string()]),
        ..ScriptedBackend::default()
    };
    let mut installer = create_installer(backend);

    let outcome = installer.run(&components()).unwrap();
    assert_eq!(
        outcome,
        Outcome::Completed(vec!["Polybar".to_string(), "Kitty".to_string()])
    );

    let backend = installer.renderer().backend();
    assert_eq!(
        backend.commands,
        vec![
            ("Installing Polybar...".to_string(), vec!["true".to_string()]),
            (
                "Installing Kitty...".to_string(),
                vec!["echo".to_string(), "kitty".to_string()]
            ),
        ]
    );
    assert!(backend.texts.iter().any(|t| t == "Installed: Polybar, Kitty"));
}

#[test]
fn test_header_is_redrawn_on_every_screen() {
    let backend = ScriptedBackend {
        confirms: VecDeque::from([true, true]),
        list_outputs: VecDeque::from([String::new()]),
        ..ScriptedBackend::default()
    };
    let mut installer = create_installer(backend);
    installer.run(&components()).unwrap();

    let backend = installer.renderer().backend();
    // welcome, platform, components, done
    assert_eq!(backend.texts.iter().filter(|t| *t == TITLE).count(), 4);
    assert_eq!(backend.texts.iter().filter(|t| *t == CREDITS).count(), 4);
    assert!(backend.texts.iter().any(|t| t == "Nothing was installed."));
}

#[test]
fn test_unknown_selection_is_skipped() {
    let backend = ScriptedBackend {
        confirms: VecDeque::from([true, true]),
        list_outputs: VecDeque::from(["Emacs\nFonts\n".to_string()]),
        ..ScriptedBackend::default()
    };
    let mut installer = create_installer(backend);

    let outcome = installer.run(&components()).unwrap();
    assert_eq!(outcome, Outcome::Completed(vec!["Fonts".to_string()]));
    assert_eq!(installer.renderer().backend().commands.len(), 1);
}

#[test]
fn test_default_components_are_offered() {
    let backend = ScriptedBackend {
        list_outputs: VecDeque::from(["GNOME Shell extensions\n".to_string()]),
        ..ScriptedBackend::default()
    };
    let mut installer = create_installer(backend);

    let picked = installer
        .choose_components(&Config::default().components)
        .unwrap();
    assert_eq!(picked, vec!["GNOME Shell extensions"]);
}

#[test]
fn test_showcase_returns_list_selection() {
    let backend = ScriptedBackend {
        list_outputs: VecDeque::from(["Aasf\nC\n".to_string()]),
        ..ScriptedBackend::default()
    };
    let mut installer = create_installer(backend);

    let response = installer.showcase().unwrap();
    assert_eq!(
        response,
        Some(Response::Selection(Selection::Multiple(vec![
            "Aasf".to_string(),
            "C".to_string()
        ])))
    );
    let backend = installer.renderer().backend();
    assert_eq!(backend.commands.len(), 1);
    assert_eq!(
        backend
            .texts
            .iter()
            .filter(|t| *t == "This is some text.")
            .count(),
        2
    );
}
