use crate::{
    config::Config,
    message::{Request, Update},
};
use crossbeam_channel::{Receiver, Sender};
use ophelp_types::{OperationKind, PromptExample};
use std::io::stdout;
use termion::{raw::IntoRawMode, screen::AlternateScreen};
use tui::{
    backend::{Backend, TermionBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};

mod fit;
mod help;
mod panel;

struct App<'a> {
    kind: OperationKind,
    draft: String,
    editing: bool,
    help_open: bool,
    cursor: usize,
    /// id of the block last copied, until its reset timer fires.
    copied: Option<&'static str>,
    info: Spans<'a>,
}

impl App<'_> {
    fn new(kind: OperationKind) -> Self {
        Self {
            kind,
            draft: String::new(),
            editing: false,
            help_open: false,
            cursor: 0,
            copied: None,
            info: Self::default_info(),
        }
    }

    /// derived from the kind on every call, never cached.
    fn examples(&self) -> &'static [PromptExample] {
        self.kind.help().map(|help| help.examples).unwrap_or(&[])
    }

    fn next(&mut self) {
        let max = self.examples().len();
        if max == 0 {
            return;
        }
        self.cursor += 1;
        if self.cursor >= max {
            self.cursor = 0;
        }
    }

    fn prev(&mut self) {
        let max = self.examples().len();
        if max == 0 {
            return;
        }
        if self.cursor == 0 {
            self.cursor = max;
        }
        self.cursor -= 1;
    }

    /// pure state transition. anything with a side effect comes back as a
    /// request for the run loop to send.
    fn apply(&mut self, ev: Update) -> Option<Request> {
        match ev {
            // the run loop exits on Quit before it gets here.
            Update::Quit => {}
            Update::ToggleHelp => {
                self.help_open = !self.help_open;
                self.cursor = 0;
                if self.help_open {
                    self.set_info("j/k to move, y to copy, ? to close".to_string());
                } else {
                    self.info = Self::default_info();
                }
            }
            Update::Kind(kind) => {
                self.kind = kind;
                self.cursor = 0;
                self.set_info(format!("drafting a {} prompt", self.kind.as_str()));
            }
            Update::Next => self.next(),
            Update::Prev => self.prev(),
            Update::Copy => {
                if self.help_open {
                    let example = self.examples().get(self.cursor)?;
                    return Some(Request::Copy {
                        id: example.id,
                        text: example.text,
                    });
                }
            }
            Update::Copied(id) => {
                self.copied = Some(id);
                self.set_info(format!("{} copied to clipboard", id));
            }
            Update::ResetCopied(id) => {
                // a stale timer may fire after a newer copy took the mark.
                if self.copied == Some(id) {
                    self.copied = None;
                }
            }
            Update::Edit(flag) => {
                self.editing = flag;
                if flag {
                    self.set_info("editing draft, ESC to finish".to_string());
                } else {
                    self.info = Self::default_info();
                }
            }
            Update::Input(ch) => {
                if self.editing {
                    self.draft.push(ch);
                }
            }
            Update::Backspace => {
                if self.editing {
                    self.draft.pop();
                }
            }
            Update::Err(e) => {
                self.set_info_err(e.to_string());
            }
        }
        None
    }

    fn default_info<'a>() -> Spans<'a> {
        Spans::from(vec![
            Span::from("press "),
            Span::styled("?", Style::default().fg(Color::LightRed)),
            Span::from(" for prompt help, "),
            Span::styled("m/f/r", Style::default().fg(Color::LightRed)),
            Span::from(" to pick the operator, "),
            Span::styled("i", Style::default().fg(Color::LightRed)),
            Span::from(" to edit, "),
            Span::styled("q", Style::default().fg(Color::LightRed)),
            Span::from(" to quit"),
        ])
    }

    fn set_info(&mut self, msg: String) {
        let info = Spans::from(vec![Span::from(msg)]);
        self.info = info;
    }

    fn set_info_err(&mut self, err: String) {
        let info = Spans::from(vec![Span::styled(err, Style::default().fg(Color::LightRed))]);
        self.info = info;
    }

    fn draw_draft<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let title = format!(" {} prompt ", self.kind.as_str());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)));
        let draft = Paragraph::new(self.draft.as_str())
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(draft, area);
    }

    fn draw_info<B: Backend>(&self, f: &mut Frame<B>, area: Rect) {
        let infomation_block = Block::default().borders(Borders::ALL);
        let info = Paragraph::new(self.info.clone())
            .block(infomation_block)
            .wrap(Wrap { trim: true });
        f.render_widget(info, area);
    }

    fn draw_help<B: Backend>(&self, f: &mut Frame<B>, bounds: Rect) {
        let area = panel::centered(bounds, 68, 22);
        let body = help::body(&self.kind, self.copied, self.cursor, area.width);
        panel::draw(f, area, " prompt help ", body);
    }

    fn draw<B: Backend>(&mut self, f: &mut Frame<B>) {
        // get layout
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(0)
            .constraints([Constraint::Max(size.height.saturating_sub(3)), Constraint::Max(3)].as_ref())
            .split(size);
        // draw
        self.draw_draft(f, chunks[0]);
        self.draw_info(f, chunks[1]);
        if self.help_open {
            self.draw_help(f, size);
        }
    }
}

pub(crate) fn run(config: Config, s: Sender<Request>, r: Receiver<Update>) -> anyhow::Result<()> {
    let stdout = stdout().into_raw_mode()?;
    let stdout = AlternateScreen::from(stdout);
    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    // set up app
    let mut app = App::new(OperationKind::parse(&config.kind));
    loop {
        terminal.draw(|f| app.draw(f))?;
        let event = r.recv()?;
        match event {
            Update::Quit => {
                // press 'q'
                let req = Request::Shutdown;
                // result is not important.
                req.send(&s).ok();
                break;
            }
            event => {
                if let Some(req) = app.apply(event) {
                    req.send(&s)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::message::{Request, Update};
    use ophelp_types::OperationKind;

    fn open_app(kind: OperationKind) -> App<'static> {
        let mut app = App::new(kind);
        app.apply(Update::ToggleHelp);
        app
    }

    #[test]
    fn copy_marks_until_reset() {
        let mut app = open_app(OperationKind::Map);
        let id = match app.apply(Update::Copy) {
            Some(Request::Copy { id, .. }) => id,
            other => panic!("unexpected request: {:?}", other),
        };
        assert_eq!("map-example", id);
        app.apply(Update::Copied(id));
        assert_eq!(Some(id), app.copied);
        app.apply(Update::ResetCopied(id));
        assert_eq!(None, app.copied);
    }

    #[test]
    fn copy_targets_the_selected_block() {
        let mut app = open_app(OperationKind::Map);
        app.apply(Update::Next);
        match app.apply(Update::Copy) {
            Some(Request::Copy { id, .. }) => assert_eq!("map-specific", id),
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn stale_reset_leaves_newer_mark() {
        let mut app = open_app(OperationKind::Filter);
        app.apply(Update::Copied("filter-example"));
        app.apply(Update::Copied("filter-specific"));
        // the first block's timer fires after the second copy.
        app.apply(Update::ResetCopied("filter-example"));
        assert_eq!(Some("filter-specific"), app.copied);
        app.apply(Update::ResetCopied("filter-specific"));
        assert_eq!(None, app.copied);
    }

    #[test]
    fn reopening_keeps_content_and_mark() {
        let mut app = open_app(OperationKind::Reduce);
        app.apply(Update::Copied("reduce-example"));
        let before: Vec<_> = app.examples().iter().map(|e| e.id).collect();
        app.apply(Update::ToggleHelp);
        app.apply(Update::ToggleHelp);
        let after: Vec<_> = app.examples().iter().map(|e| e.id).collect();
        assert_eq!(before, after);
        assert_eq!(Some("reduce-example"), app.copied);
    }

    #[test]
    fn unknown_kind_has_no_blocks() {
        let mut app = open_app(OperationKind::parse("sort"));
        assert!(app.examples().is_empty());
        assert!(app.apply(Update::Copy).is_none());
    }

    #[test]
    fn copy_needs_an_open_panel() {
        let mut app = App::new(OperationKind::Map);
        assert!(app.apply(Update::Copy).is_none());
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut app = open_app(OperationKind::Map);
        app.apply(Update::Prev);
        assert_eq!(1, app.cursor);
        app.apply(Update::Next);
        assert_eq!(0, app.cursor);
    }

    #[test]
    fn draft_edits_are_gated_on_edit_mode() {
        let mut app = App::new(OperationKind::Map);
        app.apply(Update::Input('x'));
        assert_eq!("", app.draft);
        app.apply(Update::Edit(true));
        app.apply(Update::Input('h'));
        app.apply(Update::Input('i'));
        app.apply(Update::Backspace);
        assert_eq!("h", app.draft);
    }
}
