//! # Renderer
//!
//! Collects widgets into three slots and draws them in one synchronous pass.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ header   (text only)         │
//! │                              │
//! │   padding                    │
//! │ body widget                  │
//! │   padding                    │
//! │ body widget                  │
//! │   ...                        │
//! │ footer   (text only)         │
//! └──────────────────────────────┘
//! ```
//!
//! Widgets are owned by the renderer once submitted; callers that want to
//! reuse a widget submit a clone, so later changes never reach the queued copy.

pub mod canvas;
pub mod layout;

use crate::backend::{check_read_only, Backend, BodyLayout, Response};
use crate::component::Widget;
use crate::error::{Result, Slot};
use canvas::{Canvas, Screen, TerminalScreen};

pub struct Renderer<B: Backend> {
    backend: B,
    screen: Box<dyn Screen>,
    canvas: Canvas,
    header: Vec<Widget>,
    body: Vec<Widget>,
    footer: Vec<Widget>,
    distribute_evenly: bool,
}

impl<B: Backend> Renderer<B> {
    /// Renderer drawing to the real terminal.
    pub fn new(backend: B) -> Self {
        Self::with_screen(backend, Box::new(TerminalScreen))
    }

    pub fn with_screen(backend: B, screen: Box<dyn Screen>) -> Self {
        Self {
            backend,
            screen,
            canvas: Canvas::default(),
            header: Vec::new(),
            body: Vec::new(),
            footer: Vec::new(),
            distribute_evenly: true,
        }
    }

    pub fn submit(&mut self, widget: impl Into<Widget>) {
        self.body.push(widget.into());
    }

    pub fn submit_header(&mut self, widget: impl Into<Widget>) {
        self.header.push(widget.into());
    }

    pub fn submit_footer(&mut self, widget: impl Into<Widget>) {
        self.footer.push(widget.into());
    }

    /// Clear the terminal and drop the body. Header and footer stay.
    pub fn clear(&mut self) -> Result<()> {
        self.screen.clear()?;
        self.body.clear();
        Ok(())
    }

    pub fn clear_header(&mut self) {
        self.header.clear();
    }

    pub fn clear_footer(&mut self) {
        self.footer.clear();
    }

    pub fn set_distribute_evenly(&mut self, distribute_evenly: bool) {
        self.distribute_evenly = distribute_evenly;
    }

    pub fn distribute_evenly(&self) -> bool {
        self.distribute_evenly
    }

    pub fn header(&self) -> &[Widget] {
        &self.header
    }

    pub fn body(&self) -> &[Widget] {
        &self.body
    }

    pub fn footer(&self) -> &[Widget] {
        &self.footer
    }

    /// Canvas as of the last render.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Blank lines inserted before each body widget on the current canvas.
    pub fn calculate_padding(&mut self) -> usize {
        let header = layout::header_height(&mut self.header);
        let body = layout::body_height(&mut self.body);
        let slots = layout::slot_count(&self.body);
        layout::slot_padding(self.canvas.height, header, body, slots)
    }

    /// Draw header, body and footer, returning the body's response.
    ///
    /// Fails before drawing anything if the header or footer holds an
    /// interactive widget.
    pub fn render(&mut self) -> Result<Option<Response>> {
        check_read_only(Slot::Header, &self.header)?;
        check_read_only(Slot::Footer, &self.footer)?;

        self.screen.clear()?;
        self.canvas.refresh(self.screen.as_ref())?;

        let padding = self.calculate_padding();
        tracing::debug!(
            width = self.canvas.width,
            height = self.canvas.height,
            header = self.header.len(),
            body = self.body.len(),
            footer = self.footer.len(),
            padding,
            "render pass"
        );

        let layout = BodyLayout {
            distribute_evenly: self.distribute_evenly,
            padding,
        };
        self.backend.render_header(&self.header, &self.canvas)?;
        let response = self.backend.render_body(&self.body, &self.canvas, layout)?;
        self.backend.render_footer(&self.footer, &self.canvas)?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Selection;
    use crate::component::{Confirm, List, Spinner, Text};
    use std::io;

    struct StubScreen;

    impl Screen for StubScreen {
        fn size(&self) -> io::Result<(u16, u16)> {
            Ok((82, 20))
        }

        fn clear(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingBackend {
        blank_lines: Vec<usize>,
        drawn: usize,
    }

    impl Backend for CountingBackend {
        fn render_text(&mut self, _: &Text, _: &Canvas) -> Result<()> {
            self.drawn += 1;
            Ok(())
        }

        fn render_confirm(&mut self, _: &Confirm, _: &Canvas) -> Result<bool> {
            self.drawn += 1;
            Ok(true)
        }

        fn render_list(&mut self, list: &List, _: &Canvas) -> Result<Selection> {
            self.drawn += 1;
            Ok(Selection::Multiple(list.items.clone()))
        }

        fn render_script(&mut self, _: &Spinner, _: &Canvas) -> Result<()> {
            self.drawn += 1;
            Ok(())
        }

        fn render_empty_line(&mut self, count: usize) -> Result<()> {
            self.blank_lines.push(count);
            Ok(())
        }
    }

    fn renderer() -> Renderer<CountingBackend> {
        Renderer::with_screen(CountingBackend::default(), Box::new(StubScreen))
    }

    #[test]
    fn test_lone_confirm_padding() {
        let mut r = renderer();
        r.submit(Confirm::new("Proceed?"));
        let response = r.render().unwrap();

        assert_eq!(r.canvas(), Canvas::new(80, 20));
        assert_eq!(r.backend().blank_lines, vec![7]);
        assert_eq!(response, Some(Response::Confirmed(true)));
    }

    #[test]
    fn test_clear_keeps_header_and_footer() {
        let mut r = renderer();
        r.submit_header(Text::new("head"));
        r.submit(Text::new("body"));
        r.submit_footer(Text::new("foot"));
        r.clear().unwrap();

        assert!(r.body().is_empty());
        assert_eq!(r.header().len(), 1);
        assert_eq!(r.footer().len(), 1);

        r.clear_header();
        r.clear_footer();
        assert!(r.header().is_empty());
        assert!(r.footer().is_empty());
    }

    #[test]
    fn test_distribution_can_be_disabled() {
        let mut r = renderer();
        r.set_distribute_evenly(false);
        r.submit(Text::new("a"));
        r.submit(Text::new("b"));
        r.render().unwrap();

        assert!(r.backend().blank_lines.is_empty());
        assert_eq!(r.backend().drawn, 2);
    }

    #[test]
    fn test_footer_spinner_is_rejected_before_drawing() {
        let mut r = renderer();
        r.submit(Text::new("a"));
        r.submit_footer(Spinner::new(["true"]));

        assert!(r.render().is_err());
        assert_eq!(r.backend().drawn, 0);
    }
}
