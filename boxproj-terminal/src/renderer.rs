/// ASCII wireframe plotter for projected cube points
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

use boxproj_core::{ProjectedPoint, CORNER_COUNT};

/// Cube edges as index pairs into the canonical corner order: front quad,
/// back quad, four connectors.
pub const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 3),
    (3, 2),
    (2, 0),
    (4, 5),
    (5, 7),
    (7, 6),
    (6, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

const CORNER_MARKER: char = 'o';
const EDGE_MARKER: char = '.';

/// Cells are roughly twice as tall as wide; stretch x to keep the cube square
const CELL_ASPECT: f64 = 2.0;

/// Plotter that maps projected screen coordinates to terminal cells and
/// draws the cube wireframe into a character buffer.
pub struct WireframePlot {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    /// Screen units spanned by the buffer height
    view_range: f64,
}

impl WireframePlot {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            char_buffer: vec![' '; width * height],
            view_range: 400.0,
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.char_buffer {
            *cell = ' ';
        }
    }

    /// Draw the 12 edges and 8 corner markers of one projected cube.
    ///
    /// `points` must be the full canonical corner sequence produced by
    /// `render_scene`; edges index into it positionally.
    pub fn plot(&mut self, points: &[ProjectedPoint]) {
        debug_assert_eq!(points.len(), CORNER_COUNT);

        for (start, end) in EDGES {
            if let (Some((c0, r0)), Some((c1, r1))) =
                (self.cell_of(&points[start]), self.cell_of(&points[end]))
            {
                self.draw_line(c0, r0, c1, r1);
            }
            // Edges with a far-offscreen endpoint are skipped
        }

        for point in points {
            if let Some((col, row)) = self.cell_of(point) {
                self.set_cell(col, row, CORNER_MARKER);
            }
        }
    }

    /// Map a projected point (origin at center, +y up) to a cell coordinate.
    ///
    /// Returns `None` when the point falls outside a generous margin around
    /// the buffer, which also bounds the work done per edge.
    fn cell_of(&self, point: &ProjectedPoint) -> Option<(i32, i32)> {
        let scale = self.height as f64 / self.view_range;
        let col = (self.width as f64 / 2.0 + point.x * scale * CELL_ASPECT).round();
        let row = (self.height as f64 / 2.0 - point.y * scale).round();

        let (w, h) = (self.width as f64, self.height as f64);
        if col < -w || col > 2.0 * w || row < -h || row > 2.0 * h {
            return None;
        }
        Some((col as i32, row as i32))
    }

    fn set_cell(&mut self, col: i32, row: i32, character: char) {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return;
        }
        self.char_buffer[row as usize * self.width + col as usize] = character;
    }

    /// Walk a straight line between two cells, one cell per major-axis step.
    fn draw_line(&mut self, c0: i32, r0: i32, c1: i32, r1: i32) {
        let steps = (c1 - c0).abs().max((r1 - r0).abs());
        if steps == 0 {
            self.set_cell(c0, r0, EDGE_MARKER);
            return;
        }

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let col = c0 + ((c1 - c0) as f64 * t).round() as i32;
            let row = r0 + ((r1 - r0) as f64 * t).round() as i32;
            self.set_cell(col, row, EDGE_MARKER);
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.char_buffer[y * self.width + x];

                let color = match c {
                    CORNER_MARKER => Color::Cyan,
                    EDGE_MARKER => Color::Grey,
                    _ => Color::DarkGrey,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64) -> ProjectedPoint {
        ProjectedPoint {
            x,
            y,
            depth: 300.0,
            label: "test",
        }
    }

    #[test]
    fn test_origin_maps_to_center_cell() {
        let plot = WireframePlot::new(80, 40);
        assert_eq!(plot.cell_of(&point(0.0, 0.0)), Some((40, 20)));
    }

    #[test]
    fn test_positive_y_maps_upward() {
        let plot = WireframePlot::new(80, 40);
        let (_, center_row) = plot.cell_of(&point(0.0, 0.0)).unwrap();
        let (_, raised_row) = plot.cell_of(&point(0.0, 50.0)).unwrap();
        assert!(raised_row < center_row);
    }

    #[test]
    fn test_far_offscreen_point_is_rejected() {
        let plot = WireframePlot::new(80, 40);
        assert_eq!(plot.cell_of(&point(1e9, 0.0)), None);
    }

    #[test]
    fn test_edges_cover_every_corner() {
        let mut seen = [false; CORNER_COUNT];
        for (a, b) in EDGES {
            seen[a] = true;
            seen[b] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
