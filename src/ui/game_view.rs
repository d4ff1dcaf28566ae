use crate::game::{Grid, Mark, Match, Side};
use crate::scoreboard::Scoreboard;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game: &Match,
    scoreboard: &Scoreboard,
    selected_column: usize,
    message: &Option<String>,
) {
    let board_height = u16::try_from(game.grid().rows())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game.grid(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, scoreboard, chunks[3]);
}

fn side_color(side: Side) -> Color {
    match side {
        Side::Red => Color::Red,
        Side::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game: &Match, area: ratatui::layout::Rect) {
    let current = game.current_agent();
    let [one, two] = game.agents();
    let matchup = format!(
        "{} ({}) vs {} ({})",
        one.side().name(),
        one.label(),
        two.side().name(),
        two.label()
    );

    let status = if game.is_over() {
        format!("Match Over  |  {matchup}")
    } else if current.is_automated() {
        format!("{} is thinking...  |  {matchup}", current.side().name())
    } else {
        format!("{} to move  |  {matchup}", current.side().name())
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(side_color(current.side()))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, grid: &Grid, selected_column: usize, area: ratatui::layout::Rect) {
    let cols = grid.cols();
    let border = "═".repeat(cols * 3 + 1);
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{border}╗")));

    for row in 0..grid.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..cols {
            let (symbol, color) = match grid.get(row, col) {
                Mark::Empty => (" . ", Color::DarkGray),
                Mark::Red => (" ● ", Color::Red),
                Mark::Yellow => (" ● ", Color::Yellow),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{border}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, scoreboard: &Scoreboard, area: ratatui::layout::Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  R: New match  |  Q: Quit");
    let line2 = Line::from(vec![
        Span::styled("Red", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(format!(": {}   ", scoreboard.red_wins)),
        Span::styled("Yellow", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::raw(format!(": {}   ", scoreboard.yellow_wins)),
        Span::raw(format!("Draws: {}", scoreboard.draws)),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
