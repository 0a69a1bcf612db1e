use std::collections::HashSet;

use poem_notebook_engine::{
    MarkerId, Notebook, PoemView,
    notebook::{footer_label, toggle_label},
    parsing::{align::Row, markers::Segment},
    render::{Cell, DisplayLine, MarkerIndex, Stanza},
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

fn marker_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED)
}

/// Converts one display line to terminal spans.
///
/// Markers are underlined; the first fragment of each marker seen in a block
/// gets its note number.
pub fn display_line(
    line: &DisplayLine,
    index: &MarkerIndex,
    seen: &mut HashSet<MarkerId>,
) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .segments
        .iter()
        .flat_map(|seg| match seg {
            Segment::Text(t) => vec![Span::raw(t.clone())],
            Segment::Marker { id, text, .. } => {
                let mut spans = vec![Span::styled(text.clone(), marker_style())];
                if seen.insert(*id)
                    && let Some(n) = index.number(*id)
                {
                    spans.push(Span::styled(
                        format!("[{n}]"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                spans
            }
        })
        .collect();
    Line::from(spans)
}

fn block_lines(
    lines: &[DisplayLine],
    index: &MarkerIndex,
    seen: &mut HashSet<MarkerId>,
) -> Vec<Line<'static>> {
    lines.iter().map(|l| display_line(l, index, seen)).collect()
}

/// Continuous text with one empty line between stanzas.
pub fn stanza_lines(stanzas: &[Stanza], index: &MarkerIndex) -> Vec<Line<'static>> {
    let mut seen = HashSet::new();
    let mut out = vec![];
    for (i, stanza) in stanzas.iter().enumerate() {
        if i > 0 {
            out.push(Line::default());
        }
        out.extend(block_lines(stanza, index, &mut seen));
    }
    out
}

/// Two equal-height columns, one row per aligned unit.
pub fn grid_columns(
    rows: &[Row<Cell>],
    index: &MarkerIndex,
) -> (Vec<Line<'static>>, Vec<Line<'static>>) {
    let mut seen = HashSet::new();
    let mut left = vec![];
    let mut right = vec![];
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            left.push(Line::default());
            right.push(Line::default());
        }
        let mut l = block_lines(row.original.as_deref().unwrap_or(&[]), index, &mut seen);
        let mut r = block_lines(row.translation.as_deref().unwrap_or(&[]), index, &mut seen);
        let height = l.len().max(r.len());
        l.resize(height, Line::default());
        r.resize(height, Line::default());
        left.extend(l);
        right.extend(r);
    }
    (left, right)
}

fn note_lines(index: &MarkerIndex) -> Vec<Line<'static>> {
    index
        .iter()
        .map(|(_, entry)| {
            Line::from(vec![
                Span::styled(format!("[{}] ", entry.number), Style::default().fg(Color::DarkGray)),
                Span::raw(entry.hover.clone()),
            ])
        })
        .collect()
}

/// Appends the notes after one empty line, so they scroll with the body.
fn with_notes(mut body: Vec<Line<'static>>, notes: Vec<Line<'static>>) -> Vec<Line<'static>> {
    if !notes.is_empty() {
        body.push(Line::default());
        body.extend(notes);
    }
    body
}

/// Splits one scroll offset between the grid and the notes below it.
///
/// Returns the grid rows still on screen and the scroll of the notes
/// paragraph, which starts with its separator line.
fn grid_scroll(grid_len: usize, scroll: u16, height: u16) -> (u16, u16) {
    let grid_len = u16::try_from(grid_len).unwrap_or(u16::MAX);
    let visible = grid_len.saturating_sub(scroll).min(height);
    (visible, scroll.saturating_sub(grid_len))
}

fn title_lines(view: &PoemView) -> Vec<Line<'static>> {
    view.title_rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if i == 0 {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::ITALIC)
            };
            let mut spans = vec![Span::styled(row.original.clone().unwrap_or_default(), style)];
            if let Some(t) = &row.translation {
                spans.push(Span::raw(" / "));
                spans.push(Span::styled(t.clone(), Style::default().fg(Color::Gray)));
            }
            Line::from(spans)
        })
        .collect()
}

fn draw_cover(f: &mut Frame, area: Rect, page_count: usize) {
    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            "Poem Notebook",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("{page_count} poems")),
        Line::default(),
        Line::from("Press o to open"),
    ];
    let cover = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(cover, area);
}

fn draw_page(f: &mut Frame, area: Rect, view: &PoemView, notebook: &Notebook, scroll: u16) {
    let page = notebook.current_page();
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(footer_label(page, notebook.page_count()));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let title = title_lines(view);
    let notes = note_lines(&view.markers);
    let [title_area, body_area] = Layout::vertical([
        Constraint::Length(title.len() as u16),
        Constraint::Min(3),
    ])
    .areas(inner);

    f.render_widget(Paragraph::new(title), title_area);

    if notebook.translation_visible(page) {
        let (left, right) = grid_columns(&view.rows, &view.markers);
        let (grid_height, notes_scroll) = grid_scroll(left.len(), scroll, body_area.height);
        let [grid_area, notes_area] =
            Layout::vertical([Constraint::Length(grid_height), Constraint::Min(0)])
                .areas(body_area);
        let [l, r] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(grid_area);
        f.render_widget(Paragraph::new(left).scroll((scroll, 0)), l);
        f.render_widget(Paragraph::new(right).scroll((scroll, 0)), r);
        f.render_widget(
            Paragraph::new(with_notes(vec![], notes))
                .wrap(Wrap { trim: false })
                .scroll((notes_scroll, 0)),
            notes_area,
        );
    } else {
        let mut body = stanza_lines(&view.original.stanzas, &view.markers);
        if let Some(phonetic) = &view.phonetic {
            body.push(Line::default());
            body.extend(
                stanza_lines(&phonetic.stanzas, &view.markers)
                    .into_iter()
                    .map(|l| l.style(Style::default().add_modifier(Modifier::ITALIC))),
            );
        }
        f.render_widget(
            Paragraph::new(with_notes(body, notes))
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0)),
            body_area,
        );
    }
}

pub fn ui(f: &mut Frame, app: &App) {
    let [main, help_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(f.area());

    match app.current_view() {
        Some(view) if app.notebook.is_open() => {
            draw_page(f, main, view, &app.notebook, app.scroll);
        }
        _ => draw_cover(f, main, app.notebook.page_count()),
    }

    let toggle = toggle_label(app.notebook.translation_visible(app.notebook.current_page()));
    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("←/h: Previous | "),
        Span::raw("→/l: Next | "),
        Span::raw(format!("t: {toggle} | ")),
        Span::raw("↑↓/jk: Scroll"),
    ]);
    f.render_widget(Paragraph::new(help), help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use poem_notebook_engine::{Pairing, Poem, render_poem};
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn markers_are_numbered_once_per_block() {
        let poem = Poem::new("t", "a {b\nc} d", "x").with_hover_text(["note"]);
        let view = render_poem(&poem, Pairing::Stanza);
        let lines = stanza_lines(&view.original.stanzas, &view.markers);

        assert_eq!(plain(&lines), vec!["a b[1]", "c d"]);
        assert!(lines[1].spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn grid_columns_have_equal_height() {
        let poem = Poem::new("t", "a\nb\nc\n\nd", "x\n\ny\n\nz");
        let view = render_poem(&poem, Pairing::Stanza);
        let (left, right) = grid_columns(&view.rows, &view.markers);

        assert_eq!(left.len(), right.len());
        assert_eq!(plain(&left), vec!["a", "b", "c", "", "d", "", ""]);
        assert_eq!(plain(&right), vec!["x", "", "", "", "y", "", "z"]);
    }

    #[test]
    fn notes_list_every_marker() {
        let poem = Poem::new("t", "{a}", "{b}").with_hover_text(["one", "two"]);
        let view = render_poem(&poem, Pairing::Stanza);
        assert_eq!(plain(&note_lines(&view.markers)), vec!["[1] one", "[2] two"]);
    }

    fn many_notes_poem(count: usize) -> Poem {
        let original = (0..count).map(|i| format!("{{w{i}}}")).collect::<Vec<_>>().join("\n");
        Poem::new("t", &original, "x").with_hover_text((0..count).map(|i| format!("note {i}")))
    }

    fn screen_rows(backend: &TestBackend) -> Vec<String> {
        let buffer = backend.buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn every_note_follows_the_body() {
        let view = render_poem(&many_notes_poem(12), Pairing::Stanza);
        let body = stanza_lines(&view.original.stanzas, &view.markers);
        let lines = plain(&with_notes(body, note_lines(&view.markers)));

        assert_eq!(lines.len(), 12 + 1 + 12);
        assert_eq!(lines[12], "");
        assert_eq!(lines[13], "[1] note 0");
        assert_eq!(lines[24], "[12] note 11");
    }

    #[test]
    fn grid_scroll_hands_over_to_the_notes() {
        assert_eq!(grid_scroll(10, 0, 6), (6, 0));
        assert_eq!(grid_scroll(10, 7, 6), (3, 0));
        assert_eq!(grid_scroll(10, 12, 6), (0, 2));
    }

    #[rstest]
    #[case::continuous(false, 20)]
    #[case::grid(true, 30)]
    fn scrolling_reaches_the_last_note(#[case] translation: bool, #[case] presses: usize) {
        let poems = vec![many_notes_poem(12)];
        let mut app = App::new(&poems, Pairing::Line);
        app.handle_key(KeyCode::Char('o'));
        if translation {
            app.handle_key(KeyCode::Char('t'));
        }
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        terminal.draw(|f| ui(f, &app)).unwrap();
        let first = screen_rows(terminal.backend()).join("\n");
        assert!(!first.contains("[12] note 11"));

        for _ in 0..presses {
            app.handle_key(KeyCode::Down);
        }
        terminal.draw(|f| ui(f, &app)).unwrap();
        let last = screen_rows(terminal.backend()).join("\n");
        assert!(last.contains("[12] note 11"), "{last}");
    }
}
