use std::io;
use tui::backend::CrosstermBackend;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::symbols::Marker;
use tui::widgets::canvas::{Canvas, Points};
use tui::widgets::{Block, Borders};
use tui::Terminal;

/// display resolution in pixels
pub const WIDTH: usize = 64;
pub const HEIGHT: usize = 32;

/// The monochrome pixel grid the interpreter draws into: one cell per
/// pixel, row-major, 64 wide by 32 tall, each cell 0 or 1. Carries the
/// sticky redraw flag alongside; the flag stays raised until a caller
/// acknowledges it with [`FrameBuffer::take_dirty`].
pub struct FrameBuffer {
    cells: Box<[u8; WIDTH * HEIGHT]>,
    dirty: bool,
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            cells: Box::new([0u8; WIDTH * HEIGHT]),
            dirty: false,
        }
    }

    /// blank every pixel and request a redraw
    pub fn clear(&mut self) {
        self.cells.fill(0);
        self.dirty = true;
    }

    /// Toggle one pixel, wrapping both coordinates back onto the grid.
    /// Returns true if the pixel went set -> unset (a sprite collision).
    pub fn xor_pixel(&mut self, x: usize, y: usize) -> bool {
        let cell = &mut self.cells[(y % HEIGHT) * WIDTH + (x % WIDTH)];
        *cell ^= 1;
        *cell == 0
    }

    /// raise the redraw flag without touching any pixels
    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    /// the raw cell grid, for renderers
    pub fn cells(&self) -> &[u8] {
        &self.cells[..]
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.cells[(y % HEIGHT) * WIDTH + (x % WIDTH)]
    }

    /// has anything changed since the last acknowledgement?
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// read the redraw flag and acknowledge it
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

/// Display is used by the driver to present the frame buffer. It abstracts
/// the implementation details, so a variety of kinds of screen would work.
pub trait Display {
    /// present the current frame
    fn draw(&mut self, frame: &FrameBuffer) -> Result<(), io::Error>;
}

/// monochrome display in a terminal, rendered using TUI over crossterm
pub struct MonoTermDisplay {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl MonoTermDisplay {
    pub fn new() -> Result<MonoTermDisplay, io::Error> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(MonoTermDisplay { terminal })
    }
}

impl Display for MonoTermDisplay {
    fn draw(&mut self, frame: &FrameBuffer) -> Result<(), io::Error> {
        // 1:1 ratio between terminal cells and pixels, plus the border
        let size = Rect::new(0, 0, 2 + WIDTH as u16, 2 + HEIGHT as u16);
        let coords = lit_points(frame);

        self.terminal.draw(|f| {
            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title("chirp8")
                        .borders(Borders::ALL)
                        .style(Style::default().bg(Color::Black)),
                )
                .x_bounds([0.0, (WIDTH - 1) as f64])
                .y_bounds([-1.0 * (HEIGHT - 1) as f64, 0.0])
                .marker(Marker::Block)
                .paint(|ctx| {
                    ctx.draw(&Points {
                        coords: &coords,
                        color: Color::White,
                    });
                });
            f.render_widget(canvas, size);
        })?;
        Ok(())
    }
}

/// expand the lit cells into x, y float coords suitable for the TUI canvas,
/// which puts the origin bottom-left with y growing upward
fn lit_points(frame: &FrameBuffer) -> Vec<(f64, f64)> {
    frame
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, &cell)| cell != 0)
        .map(|(idx, _)| ((idx % WIDTH) as f64, -1.0 * (idx / WIDTH) as f64))
        .collect()
}

/// useful for testing non-display routines
pub struct DummyDisplay;

impl Display for DummyDisplay {
    fn draw(&mut self, _frame: &FrameBuffer) -> Result<(), io::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_blank_and_clean() {
        let fb = FrameBuffer::new();
        assert!(fb.cells().iter().all(|&c| c == 0));
        assert!(!fb.dirty());
    }

    #[test]
    fn test_clear_blanks_and_requests_redraw() {
        let mut fb = FrameBuffer::new();
        fb.xor_pixel(10, 10);
        fb.clear();
        assert!(fb.cells().iter().all(|&c| c == 0));
        assert!(fb.dirty());
    }

    #[test]
    fn test_xor_toggles_and_reports_collision() {
        let mut fb = FrameBuffer::new();
        assert!(!fb.xor_pixel(3, 4));
        assert_eq!(fb.pixel(3, 4), 1);
        // second application knocks it back out
        assert!(fb.xor_pixel(3, 4));
        assert_eq!(fb.pixel(3, 4), 0);
    }

    #[test]
    fn test_coordinates_wrap() {
        let mut fb = FrameBuffer::new();
        fb.xor_pixel(WIDTH + 3, HEIGHT + 1);
        assert_eq!(fb.pixel(3, 1), 1);
    }

    #[test]
    fn test_take_dirty_acknowledges() {
        let mut fb = FrameBuffer::new();
        fb.request_redraw();
        assert!(fb.take_dirty());
        assert!(!fb.dirty());
        assert!(!fb.take_dirty());
    }

    #[test]
    fn test_dummy_display_accepts_any_frame() -> Result<(), io::Error> {
        let mut fb = FrameBuffer::new();
        fb.xor_pixel(5, 5);
        DummyDisplay.draw(&fb)
    }

    #[test]
    fn test_lit_points_maps_row_major_cells() {
        let mut fb = FrameBuffer::new();
        fb.xor_pixel(0, 0);
        fb.xor_pixel(63, 31);
        let coords = lit_points(&fb);
        assert_eq!(coords, vec![(0.0, 0.0), (63.0, -31.0)]);
    }
}
