//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
};
use strictly_gridtoe::{Cell, Dimensions, GameView, Mark, Status};

use super::app::App;
use super::input::Focus;

const DIAGONAL_NOTE: &str = "Win by diagonals is only for square boards";
const HELP: &str =
    "Arrows: move | Enter: play/jump | Tab: board/moves | o: order | r/R rows | c/C cols | q: quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Body
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new(format!("Strictly Gridtoe - {}", view.dims()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    draw_game(frame, body[0], app, &view);
    draw_moves(frame, body[1], app, &view);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let block = panel("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Status
            Constraint::Min(3),    // Grid
            Constraint::Length(1), // Diagonal note
            Constraint::Length(3), // Rows slider
            Constraint::Length(3), // Cols slider
        ])
        .split(inner);

    let status_style = match view.status() {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.status().to_string())
        .style(status_style)
        .alignment(Alignment::Center);
    frame.render_widget(status, rows[0]);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    let grid = Paragraph::new(board_lines(view, cursor)).alignment(Alignment::Center);
    frame.render_widget(grid, rows[1]);

    let note = Paragraph::new(DIAGONAL_NOTE)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(note, rows[2]);

    let dims = view.dims();
    frame.render_widget(slider("Rows", "rows", dims.rows()), rows[3]);
    frame.render_widget(slider("Cols", "cols", dims.cols()), rows[4]);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let focused = app.focus() == Focus::Moves;
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|entry| {
            let style = if *entry.current() {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label().clone(), style)))
        })
        .collect();

    let title = format!("Moves ({})", view.order().label());
    let list = List::new(items)
        .block(panel(&title, focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// One line per board row, with the cursor and winning line highlighted.
fn board_lines(view: &GameView, cursor: Option<(usize, usize)>) -> Vec<Line<'static>> {
    let dims = view.dims();
    let winning = view.winning_cells();
    let separator = vec!["───"; dims.cols()].join("┼");

    let mut lines = Vec::with_capacity(dims.rows() * 2);
    for row in 0..dims.rows() {
        if row > 0 {
            lines.push(Line::styled(
                separator.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let mut spans = Vec::with_capacity(dims.cols() * 2);
        for col in 0..dims.cols() {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let cell = view.board().cell(row, col).unwrap_or_default();
            let highlighted = dims
                .index(row, col)
                .is_some_and(|index| winning.contains(&index));
            spans.push(cell_span(cell, highlighted, cursor == Some((row, col))));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn cell_span(cell: Cell, winning: bool, under_cursor: bool) -> Span<'static> {
    let (symbol, mut style) = match cell {
        Cell::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Mark::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Mark::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if winning {
        style = style.bg(Color::Green);
    }
    if under_cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }
    Span::styled(symbol, style)
}

/// Gauge standing in for a range slider over the allowed side lengths.
fn slider(title: &str, noun: &str, value: usize) -> Gauge<'static> {
    Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(slider_ratio(value))
        .label(format!("Current # of {} is {}", noun, value))
}

fn slider_ratio(value: usize) -> f64 {
    let span = (Dimensions::MAX_SIDE - Dimensions::MIN_SIDE) as f64;
    let offset = value.saturating_sub(Dimensions::MIN_SIDE) as f64;
    (offset / span).clamp(0.0, 1.0)
}

fn panel(title: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title.to_string())
}
