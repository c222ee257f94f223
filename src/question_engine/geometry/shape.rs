//! Shape specifications: plain parameter sets, rendered by `render`.
//!
//! Two different specs can look the same once drawn (a square turned 90°,
//! a mirrored triangle with its point up).  Nothing in this module tries to
//! detect that; uniqueness is always decided on the rendered form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a composite shape carries its orientation dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// On the first vertex: the figure keeps one mirror axis.
    Vertex,
    /// A quarter of the way along the first edge: no symmetry at all.
    Edge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    /// Width `2·size`, height `1.2·size`.
    Rectangle,
    /// Regular polygon with `sides` vertices.
    Polygon,
    /// Regular polygon plus a small dot that makes turns and flips visible.
    Composite(Marker),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    Solid,
    Outline,
}

/// Fill colours as (hex, name).  Indices into this table are what specs store.
pub const PALETTE: [(&str, &str); 6] = [
    ("#d62728", "red"),
    ("#1f77b4", "blue"),
    ("#2ca02c", "green"),
    ("#ff7f0e", "orange"),
    ("#9467bd", "purple"),
    ("#17becf", "teal"),
];

pub const MIN_SIDES: u32 = 3;
pub const MAX_SIDES: u32 = 10;
pub const MIN_SIZE: u32 = 6;
pub const MAX_SIZE: u32 = 44;

/// Everything needed to draw one cell.
///
/// Angles are whole degrees, clockwise (SVG y points down).  `scale_x` and
/// `scale_y` are ±1 and mirror the figure about its own centre after rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    /// Circumradius in view-box units (the cell is 100 × 100).
    pub size: u32,
    pub rotation: i32,
    pub sides: u32,
    /// Index into [`PALETTE`].
    pub colour: usize,
    pub fill: Fill,
    /// Percent, `1..=100`.
    pub opacity: u8,
    /// Identical copies drawn side by side.
    pub count: u32,
    pub scale_x: i8,
    pub scale_y: i8,
}

impl ShapeSpec {
    pub fn new(kind: ShapeKind) -> Self {
        ShapeSpec {
            kind,
            size: 30,
            rotation: 0,
            sides: 4,
            colour: 0,
            fill: Fill::Solid,
            opacity: 100,
            count: 1,
            scale_x: 1,
            scale_y: 1,
        }
    }

    pub fn polygon(sides: u32) -> Self {
        ShapeSpec::new(ShapeKind::Polygon).with_sides(sides)
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size.clamp(MIN_SIZE, MAX_SIZE);
        self
    }

    /// Rotation is kept in `0..360`.
    pub fn with_rotation(mut self, degrees: i32) -> Self {
        self.rotation = degrees.rem_euclid(360);
        self
    }

    pub fn with_sides(mut self, sides: u32) -> Self {
        self.sides = sides.clamp(MIN_SIDES, MAX_SIDES);
        self
    }

    pub fn with_colour(mut self, colour: usize) -> Self {
        self.colour = colour % PALETTE.len();
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_opacity(mut self, percent: u8) -> Self {
        self.opacity = percent.clamp(1, 100);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count.max(1);
        self
    }

    pub fn mirrored(mut self, flip_x: bool, flip_y: bool) -> Self {
        if flip_x {
            self.scale_x = -self.scale_x;
        }
        if flip_y {
            self.scale_y = -self.scale_y;
        }
        self
    }

    pub fn colour_hex(&self) -> &'static str {
        PALETTE[self.colour % PALETTE.len()].0
    }

    pub fn colour_name(&self) -> &'static str {
        PALETTE[self.colour % PALETTE.len()].1
    }

    fn kind_name(&self) -> String {
        match self.kind {
            ShapeKind::Circle => "circle".to_string(),
            ShapeKind::Rectangle => "rectangle".to_string(),
            ShapeKind::Polygon | ShapeKind::Composite(_) => polygon_name(self.sides),
        }
    }
}

pub fn polygon_name(sides: u32) -> String {
    match sides {
        3 => "triangle".to_string(),
        4 => "square".to_string(),
        5 => "pentagon".to_string(),
        6 => "hexagon".to_string(),
        7 => "heptagon".to_string(),
        8 => "octagon".to_string(),
        9 => "nonagon".to_string(),
        10 => "decagon".to_string(),
        n => format!("{n}-sided shape"),
    }
}

fn size_word(size: u32) -> &'static str {
    match size {
        0..=15 => "small",
        16..=29 => "medium",
        _ => "large",
    }
}

/// Short description for explanations: "2 large outlined blue hexagons".
impl fmt::Display for ShapeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fill = match self.fill {
            Fill::Solid => "solid",
            Fill::Outline => "outlined",
        };
        let plural = if self.count > 1 { "s" } else { "" };
        if self.count > 1 {
            write!(f, "{} ", self.count)?;
        }
        write!(f, "{} {} {} {}{}", size_word(self.size), fill, self.colour_name(), self.kind_name(), plural)?;
        if self.opacity < 100 {
            write!(f, " at {}% opacity", self.opacity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_clamp_into_range() {
        let s = ShapeSpec::polygon(1).with_size(500).with_rotation(-90).with_opacity(0);
        assert_eq!(s.sides, MIN_SIDES);
        assert_eq!(s.size, MAX_SIZE);
        assert_eq!(s.rotation, 270);
        assert_eq!(s.opacity, 1);
    }

    #[test]
    fn mirroring_twice_is_identity() {
        let s = ShapeSpec::polygon(5);
        assert_eq!(s.mirrored(true, true).mirrored(true, true), s);
    }

    #[test]
    fn description_reads_naturally() {
        let s = ShapeSpec::polygon(6).with_colour(1).with_fill(Fill::Outline).with_count(2).with_size(35);
        assert_eq!(s.to_string(), "2 large outlined blue hexagons");
    }
}
