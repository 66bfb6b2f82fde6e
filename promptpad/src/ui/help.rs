use super::fit::Fit;
use ophelp_types::OperationKind;
use tui::{
    style::{Color, Modifier, Style},
    text::{Span, Spans, Text},
};

const HINT: &str = "Field names come from the sample shown in the dataset pane.";

fn block_title(id: &'static str, selected: bool, copied: bool) -> Spans<'static> {
    let marker = if copied { "[copied]" } else { "[copy]" };
    let marker_color = if copied { Color::LightGreen } else { Color::LightBlue };
    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if selected {
        style = style.bg(Color::Rgb(60, 60, 60));
    }
    Spans::from(vec![
        Span::styled(["# ", id].concat(), style),
        Span::from(" "),
        Span::styled(marker, Style::default().fg(marker_color)),
    ])
}

/// the popover body for one kind. pure, re-derived on every draw.
pub(super) fn body(
    kind: &OperationKind,
    copied: Option<&'static str>,
    cursor: usize,
    panel_width: u16,
) -> Text<'static> {
    let width = panel_width.saturating_sub(4).max(8) as usize;
    let mut lines: Vec<Spans> = Vec::new();
    if let Some(help) = kind.help() {
        for (n, example) in help.examples.iter().enumerate() {
            lines.push(block_title(example.id, n == cursor, copied == Some(example.id)));
            for raw in example.text.lines() {
                lines.push(Spans::from(Span::from(["  ", &raw.fit_width(width)].concat())));
            }
            lines.push(Spans::from(""));
        }
        for note in help.schema_notes {
            lines.push(Spans::from(Span::styled(*note, Style::default().fg(Color::LightCyan))));
        }
        lines.push(Spans::from(""));
    }
    lines.push(Spans::from(Span::styled(
        HINT,
        Style::default().add_modifier(Modifier::ITALIC),
    )));
    lines.push(Spans::from(vec![
        Span::from("docs: "),
        Span::styled(kind.doc_url(), Style::default().fg(Color::LightBlue)),
    ]));
    Text::from(lines)
}
