//! Text renderings of a strip.
//!
//! Both renderers draw one cell per strip square from cell 0 through the
//! rightmost coin. Since positions are strictly increasing, the last
//! position is the maximum and bounds the drawing.

/// Turns coin positions into text.
///
/// `positions` is always a valid layout: non-empty and strictly increasing.
pub trait StripRenderer {
    /// Render the strip.
    fn render(&self, positions: &[usize]) -> String;
}

/// Labels for each cell up to the rightmost coin: `Some(index)` where a coin
/// sits, `None` for empty cells.
fn cells(positions: &[usize]) -> impl Iterator<Item = Option<usize>> + '_ {
    let last = positions.last().copied().unwrap_or(0);
    let mut coins = positions.iter().copied().enumerate().peekable();

    (0..=last).map(move |cell| match coins.peek() {
        Some(&(index, pos)) if pos == cell => {
            coins.next();
            Some(index)
        }
        _ => None,
    })
}

/// Bordered grid, three lines tall.
///
/// ```text
/// +---+---+---+
/// | 0 |   | 1 |
/// +---+---+---+
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxRenderer;

impl StripRenderer for BoxRenderer {
    fn render(&self, positions: &[usize]) -> String {
        let width = positions.last().map_or(0, |&last| last + 1);
        let border = format!("+{}", "---+".repeat(width));

        format!("{border}\n{}\n{border}", BarRenderer.render(positions))
    }
}

/// Single-line bar.
///
/// ```text
/// | 0 |   | 1 |
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BarRenderer;

impl StripRenderer for BarRenderer {
    fn render(&self, positions: &[usize]) -> String {
        let mut out = String::from("|");
        for cell in cells(positions) {
            match cell {
                Some(coin) => out.push_str(&format!(" {coin} |")),
                None => out.push_str("   |"),
            }
        }
        out
    }
}
