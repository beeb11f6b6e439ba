use crate::tui::app::App;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};

/// Live query line (`>` followed by the buffer)
pub const QUERY_ROW: u16 = 0;
/// Horizontal rule under the query
pub const SEPARATOR_ROW: u16 = 1;
/// `found: <n>`
pub const COUNT_ROW: u16 = 2;
/// First ranked result
pub const WORDS_ROW: u16 = 3;

/// Row/column addressed rendering target
pub trait Surface {
    /// Screen size as (columns, rows)
    fn size(&self) -> io::Result<(u16, u16)>;
    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()>;
    /// Clear from the cursor to the end of the line
    fn clear_line(&mut self) -> io::Result<()>;
    fn hline(&mut self, width: u16) -> io::Result<()>;
    fn write(&mut self, text: &str) -> io::Result<()>;
    fn refresh(&mut self) -> io::Result<()>;
}

/// Crossterm-backed surface. Commands are queued and flushed on refresh.
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        queue!(self.out, MoveTo(col, row))
    }

    fn clear_line(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::UntilNewLine))
    }

    fn hline(&mut self, width: u16) -> io::Result<()> {
        queue!(self.out, Print("─".repeat(width as usize)))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Draws the session layout, touching only the rows that changed
pub struct Renderer<S: Surface> {
    surface: S,
    /// Result rows drawn by the previous frame
    drawn_rows: usize,
    /// Width the separator was last drawn at
    rule_width: Option<u16>,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            drawn_rows: 0,
            rule_width: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Forget what is on screen so the next draw repaints every row
    pub fn invalidate(&mut self) {
        self.rule_width = None;
        self.drawn_rows = usize::MAX;
    }

    pub fn draw(&mut self, app: &App) -> io::Result<()> {
        let (cols, rows) = self.surface.size()?;

        if self.rule_width != Some(cols) {
            self.surface.move_to(SEPARATOR_ROW, 0)?;
            self.surface.clear_line()?;
            self.surface.hline(cols)?;
            self.rule_width = Some(cols);
        }

        self.surface.move_to(COUNT_ROW, 0)?;
        self.surface.clear_line()?;
        self.surface.write(&format!("found: {}", app.match_count()))?;

        let available = rows.saturating_sub(WORDS_ROW) as usize;
        let words = app.results().map(Vec::as_slice).unwrap_or_default();
        let visible = available.min(words.len());

        for (i, word) in words.iter().take(visible).enumerate() {
            self.surface.move_to(WORDS_ROW + i as u16, 0)?;
            self.surface.clear_line()?;
            self.surface.write(&format!("{} {}", word.text, word.frequency))?;
        }
        // Rows left over from a longer previous frame
        for i in visible..self.drawn_rows.min(available) {
            self.surface.move_to(WORDS_ROW + i as u16, 0)?;
            self.surface.clear_line()?;
        }
        self.drawn_rows = visible;

        // Query line last so the cursor rests after the typed prefix
        self.surface.move_to(QUERY_ROW, 0)?;
        self.surface.clear_line()?;
        self.surface.write(&format!(">{}", query_tail(app.query(), cols)))?;

        self.surface.refresh()
    }
}

/// End of the query that fits after the prompt, so it never wraps onto the rule
fn query_tail(query: &str, cols: u16) -> &str {
    let room = (cols as usize).saturating_sub(1);
    // Query bytes are ASCII letters
    &query[query.len().saturating_sub(room)..]
}


#[cfg(test)]
mod tests {
    use super::testing::MemorySurface;
    use super::*;
    use crate::index::{build_index, IndexConfig};
    use crate::tui::input::EditEvent;
    use std::io::Cursor;

    fn app_for(corpus: &str) -> App {
        let (trie, _) = build_index(Cursor::new(corpus), &IndexConfig::default()).unwrap();
        App::new(trie, 64)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.apply(EditEvent::Insert(c));
        }
    }

    #[test]
    fn test_idle_frame() {
        let app = app_for("alpha beta");
        let mut renderer = Renderer::new(MemorySurface::new(10, 6));
        renderer.draw(&app).unwrap();

        let lines = &renderer.surface().lines;
        assert_eq!(lines[0], ">");
        assert_eq!(lines[1], "----------");
        assert_eq!(lines[2], "found: 0");
        assert!(lines[3..].iter().all(String::is_empty));
    }

    #[test]
    fn test_results_frame() {
        let mut app = app_for("car cat cat cab");
        type_str(&mut app, "ca");

        let mut renderer = Renderer::new(MemorySurface::new(20, 8));
        renderer.draw(&app).unwrap();

        let lines = &renderer.surface().lines;
        assert_eq!(lines[0], ">ca");
        assert_eq!(lines[2], "found: 3");
        assert_eq!(lines[3], "cat 2");
        assert_eq!(lines[4], "car 1");
        assert_eq!(lines[5], "cab 1");
        assert_eq!(lines[6], "");
    }

    #[test]
    fn test_count_exceeds_visible_rows() {
        let mut app = app_for("aa ab ac ad ae af");
        type_str(&mut app, "a");

        // 5 rows: 3 header rows leave room for 2 results
        let mut renderer = Renderer::new(MemorySurface::new(20, 5));
        renderer.draw(&app).unwrap();

        let lines = &renderer.surface().lines;
        assert_eq!(lines[2], "found: 6");
        assert_eq!(lines[3], "aa 1");
        assert_eq!(lines[4], "ab 1");
    }

    #[test]
    fn test_shorter_frame_clears_stale_rows() {
        let mut app = app_for("ant bee bat");
        let mut renderer = Renderer::new(MemorySurface::new(20, 8));

        type_str(&mut app, "b");
        renderer.draw(&app).unwrap();
        assert_eq!(renderer.surface().lines[4], "bat 1");

        type_str(&mut app, "e");
        renderer.draw(&app).unwrap();

        let lines = &renderer.surface().lines;
        assert_eq!(lines[0], ">be");
        assert_eq!(lines[3], "bee 1");
        assert_eq!(lines[4], "");
    }

    #[test]
    fn test_long_query_keeps_its_tail_on_one_row() {
        let mut app = app_for("abcdefghijkl");
        type_str(&mut app, "abcdefghijkl");

        let mut renderer = Renderer::new(MemorySurface::new(8, 6));
        renderer.draw(&app).unwrap();

        let lines = &renderer.surface().lines;
        assert_eq!(lines[0], ">fghijkl");
        assert_eq!(lines[0].len(), 8);
        assert_eq!(lines[1], "--------");
    }

    #[test]
    fn test_invalidate_repaints_after_resize() {
        let mut app = app_for("car cat cab");
        type_str(&mut app, "ca");
        let mut renderer = Renderer::new(MemorySurface::new(20, 8));
        renderer.draw(&app).unwrap();

        // A resize leaves the screen in an unknown state
        let surface = &mut renderer.surface;
        surface.cols = 12;
        surface.lines.iter_mut().for_each(String::clear);

        renderer.invalidate();
        renderer.draw(&app).unwrap();

        let lines = &renderer.surface().lines;
        assert_eq!(lines[0], ">ca");
        assert_eq!(lines[1], "------------");
        assert_eq!(lines[2], "found: 3");
        assert_eq!(lines[3], "car 1");
        assert!(lines[6..].iter().all(String::is_empty));
    }

    #[test]
    fn test_tiny_screen_shows_no_rows() {
        let mut app = app_for("alpha");
        type_str(&mut app, "a");

        let mut renderer = Renderer::new(MemorySurface::new(10, 3));
        renderer.draw(&app).unwrap();
        assert_eq!(renderer.surface().lines[2], "found: 1");
    }
}
