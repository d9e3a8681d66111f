//! Quad colors used by the breakout board.

/// Linear RGB, each component 0.0..=1.0.
pub type Rgb = [f32; 3];

pub const WHITE: Rgb = [0.84, 0.84, 0.84];

pub const RED: Rgb = [0.60, 0.0, 0.0];
pub const ORANGE: Rgb = [0.84, 0.60, 0.0];
pub const GREEN: Rgb = [0.0, 0.60, 0.0];
pub const YELLOW: Rgb = [0.80, 0.80, 0.0];

/// Stands out on purpose; marks quads nobody gave a color.
pub const OHNO_PINK: Rgb = [1.0, 0.0, 1.0];

/// Brick color for a board row, two rows per color from the top.
pub fn brick_row_color(row: u32) -> Rgb {
    match row {
        0..=1 => RED,
        2..=3 => ORANGE,
        4..=5 => GREEN,
        6..=7 => YELLOW,
        _ => OHNO_PINK,
    }
}
