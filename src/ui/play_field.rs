//! Sky, player, pipes and floor.

use super::viewport::Viewport;
use super::{BIRD_COLOR, FLOOR_COLOR, PIPE_COLOR, SKY_COLOR};
use crate::core::session::Session;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Paint the sky and, while a round is in play, the player and the pipes.
pub fn render_scene(frame: &mut Frame, viewport: &Viewport, session: &Session) {
    if viewport.is_empty() {
        return;
    }
    let width = viewport.area.width as usize;
    let height = viewport.area.height as usize;
    let mut grid = vec![vec![SKY_COLOR; width]; height];

    if session.is_active() {
        paint_player(&mut grid, viewport, session);
        paint_pipes(&mut grid, viewport, session);
    }

    let lines: Vec<Line> = grid.iter().map(|row| row_to_line(row)).collect();
    frame.render_widget(Paragraph::new(lines), viewport.area);
}

/// Paint the floor band over everything drawn before it.
pub fn render_floor(frame: &mut Frame, viewport: &Viewport, floor_y: f64) {
    if viewport.is_empty() {
        return;
    }
    let first = viewport.first_row_at_or_below(floor_y);
    if first >= viewport.area.height {
        return;
    }
    let area = Rect {
        y: viewport.area.y + first,
        height: viewport.area.height - first,
        ..viewport.area
    };
    let line = Line::from(Span::styled(
        " ".repeat(area.width as usize),
        Style::default().bg(FLOOR_COLOR),
    ));
    let lines = vec![line; area.height as usize];
    frame.render_widget(Paragraph::new(lines), area);
}

fn paint_player(grid: &mut [Vec<Color>], viewport: &Viewport, session: &Session) {
    let Some(cells) = viewport.cells_for(&session.player.rect()) else {
        return;
    };
    let row0 = (cells.y - viewport.area.y) as usize;
    let col0 = (cells.x - viewport.area.x) as usize;
    for row in grid.iter_mut().skip(row0).take(cells.height as usize) {
        for cell in row.iter_mut().skip(col0).take(cells.width as usize) {
            *cell = BIRD_COLOR;
        }
    }
}

fn paint_pipes(grid: &mut [Vec<Color>], viewport: &Viewport, session: &Session) {
    for (row_idx, row) in grid.iter_mut().enumerate() {
        let y = viewport.world_y(row_idx as u16);
        for (col_idx, cell) in row.iter_mut().enumerate() {
            let x = viewport.world_x(col_idx as u16);
            if session
                .field
                .iter()
                .any(|pipe| pipe.upper.contains(x, y) || pipe.lower.contains(x, y))
            {
                *cell = PIPE_COLOR;
            }
        }
    }
}

/// Collapse a row of colors into runs of blank cells.
fn row_to_line(row: &[Color]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut run_start = 0;
    for i in 1..=row.len() {
        if i == row.len() || row[i] != row[run_start] {
            spans.push(Span::styled(
                " ".repeat(i - run_start),
                Style::default().bg(row[run_start]),
            ));
            run_start = i;
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_line_merges_runs() {
        let row = [SKY_COLOR, SKY_COLOR, PIPE_COLOR, SKY_COLOR];
        let line = row_to_line(&row);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content, "  ");
        assert_eq!(line.spans[1].style.bg, Some(PIPE_COLOR));
    }

    #[test]
    fn test_row_to_line_empty() {
        assert!(row_to_line(&[]).spans.is_empty());
    }
}
