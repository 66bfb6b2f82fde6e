use tui::{
    backend::Backend,
    layout::Rect,
    style::{Modifier, Style},
    text::{Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// center a popover inside `bounds`, shrunk to fit on small terminals.
pub(super) fn centered(bounds: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let x = bounds.x + (bounds.width - width) / 2;
    let y = bounds.y + (bounds.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// the generic disclosure container: whatever was under it is cleared,
/// the body goes into a bordered, titled block.
pub(super) fn draw<B: Backend>(f: &mut Frame<B>, area: Rect, title: &str, body: Text) {
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title.to_owned(), Style::default().add_modifier(Modifier::BOLD)));
    let body = Paragraph::new(body).block(block).wrap(Wrap { trim: false });
    f.render_widget(body, area);
}
