//! Stateless UI rendering of the game view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{CellView, GameView, Player};

use super::app::App;
use super::input::Focus;

const HELP: &str = "1-9/Enter play  Tab log  [ ] step  a/d/s sort  r restart  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board + log
            Constraint::Length(3), // Message
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(view.status().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .centered()
        .block(Block::default().borders(Borders::ALL).title("Rewind Tic-Tac-Toe"));
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(34)])
        .split(chunks[1]);

    draw_board(frame, panes[0], app, &view);
    draw_move_log(frame, panes[1], app, &view);

    let message = Paragraph::new(app.message())
        .style(Style::default().fg(Color::Yellow))
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .centered();
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let focused = app.focus() == Focus::Board;
    let block = pane_block("Board", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, cells) in view.cells().chunks(3).enumerate() {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        draw_row(frame, rows[row * 2], app, cells, focused);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, cells: &[CellView], focused: bool) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, cell) in cells.iter().enumerate() {
        if col > 0 {
            draw_separator_vertical(frame, cols[col * 2 - 1]);
        }
        let is_cursor = focused && cell.position == app.cursor();
        let highlight = cell.highlighted && *app.settings().highlight_winning_line();
        draw_cell(frame, cols[col * 2], cell, is_cursor, highlight);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, is_cursor: bool, highlight: bool) {
    let (symbol, base_style) = match cell.mark {
        None => ("   ", Style::default().fg(Color::DarkGray)),
        Some(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Some(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if is_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if highlight {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    // Pad to the middle line of the 3-row cell.
    let text = vec![Line::default(), Line::from(Span::styled(symbol, style))];
    frame.render_widget(Paragraph::new(text).centered(), area);
}

fn draw_move_log(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let focused = app.focus() == Focus::MoveLog;
    let title = format!("Moves ({})", view.sort_order());

    let items: Vec<ListItem> = view
        .move_log()
        .iter()
        .map(|entry| {
            let mut spans = vec![Span::raw(entry.label.clone())];
            if *app.settings().show_coordinates() && !entry.coordinates.is_empty() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    entry.coordinates.clone(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let style = if entry.selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(pane_block(&title, focused))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(focused.then_some(app.log_row()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn pane_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title.to_string())
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
