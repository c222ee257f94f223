//! Pure `ShapeSpec` → SVG rendering.
//!
//! Every transform is baked into coordinates: the output never carries a
//! `transform` attribute, so two specs that look the same produce the same
//! text.  Points are rounded to hundredths, negative zero is folded into
//! zero, and polygon point lists start at their smallest point with a fixed
//! winding.  Documents are self-contained (no ids, no external references).

use std::f64::consts::PI;

use crate::question_engine::geometry::shape::{Fill, Marker, ShapeKind, ShapeSpec};
use crate::question_engine::models::collapse_whitespace;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const CELL: i64 = 100;
const GAP: i64 = 10;
const CENTRE: f64 = 50.0;
const INK: &str = "#222222";
const FRAME: &str = "#999999";

/// Hundredths of a view-box unit.
type Point = (i64, i64);

fn to_fixed(v: f64) -> i64 {
    (v * 100.0).round() as i64
}

fn fmt_fixed(v: i64) -> String {
    let sign = if v < 0 { "-" } else { "" };
    let a = v.abs();
    format!("{sign}{}.{:02}", a / 100, a % 100)
}

fn fmt_point((x, y): Point) -> String {
    format!("{},{}", fmt_fixed(x), fmt_fixed(y))
}

/// Same polygon, same text: start at the smallest point and pick the
/// smaller of the two windings.
fn canonical(points: &[Point]) -> Vec<Point> {
    fn from_min(pts: &[Point]) -> Vec<Point> {
        let start = pts
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| **p)
            .map(|(i, _)| i)
            .unwrap_or(0);
        pts[start..].iter().chain(&pts[..start]).copied().collect()
    }
    let forward = from_min(points);
    let mut reversed = points.to_vec();
    reversed.reverse();
    let backward = from_min(&reversed);
    forward.min(backward)
}

/// Rotate by `rotation` degrees clockwise, then mirror, then translate.
fn place(spec: &ShapeSpec, cx: f64, cy: f64, dx: f64, dy: f64) -> (f64, f64) {
    let a = f64::from(spec.rotation).to_radians();
    let (s, c) = a.sin_cos();
    let rx = dx * c - dy * s;
    let ry = dx * s + dy * c;
    (cx + rx * f64::from(spec.scale_x), cy + ry * f64::from(spec.scale_y))
}

/// Regular polygon vertices: θ = rotation + 2πi/n − π/2, mirrored afterwards.
pub fn polygon_vertices(spec: &ShapeSpec, cx: f64, cy: f64, r: f64) -> Vec<(f64, f64)> {
    let n = spec.sides.max(3);
    let rot = f64::from(spec.rotation).to_radians();
    (0..n)
        .map(|i| {
            let theta = rot + 2.0 * PI * f64::from(i) / f64::from(n) - PI / 2.0;
            let dx = r * theta.cos() * f64::from(spec.scale_x);
            let dy = r * theta.sin() * f64::from(spec.scale_y);
            (cx + dx, cy + dy)
        })
        .collect()
}

fn paint(spec: &ShapeSpec) -> String {
    let mut attrs = match spec.fill {
        Fill::Solid => format!("fill=\"{}\" stroke=\"{INK}\" stroke-width=\"1.50\"", spec.colour_hex()),
        Fill::Outline => format!("fill=\"none\" stroke=\"{}\" stroke-width=\"3.00\"", spec.colour_hex()),
    };
    if spec.opacity < 100 {
        // Percent is hundredths of one.
        attrs.push_str(&format!(" opacity=\"{}\"", fmt_fixed(i64::from(spec.opacity))));
    }
    attrs
}

fn polygon_element(points: &[(f64, f64)], paint: &str) -> String {
    let fixed: Vec<Point> = points.iter().map(|&(x, y)| (to_fixed(x), to_fixed(y))).collect();
    let listed: Vec<String> = canonical(&fixed).into_iter().map(fmt_point).collect();
    format!("<polygon points=\"{}\" {paint}/>\n", listed.join(" "))
}

fn dot(x: f64, y: f64, r: f64) -> String {
    format!(
        "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{INK}\"/>\n",
        fmt_fixed(to_fixed(x)),
        fmt_fixed(to_fixed(y)),
        fmt_fixed(to_fixed(r))
    )
}

/// Centres and radius for `count` copies laid out in a row.
fn layout(spec: &ShapeSpec) -> (Vec<(f64, f64)>, f64) {
    let n = spec.count.max(1);
    let width = CELL as f64 / f64::from(n);
    let r = f64::from(spec.size).min(width * 0.42);
    let centres = (0..n).map(|i| (width * (f64::from(i) + 0.5), CENTRE)).collect();
    (centres, r)
}

/// The drawing elements of one 100 × 100 cell, without the document wrapper.
fn cell_body(spec: &ShapeSpec) -> String {
    let paint = paint(spec);
    let (centres, r) = layout(spec);
    let mut out = String::new();

    for (cx, cy) in centres {
        match spec.kind {
            ShapeKind::Circle => {
                out.push_str(&format!(
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {paint}/>\n",
                    fmt_fixed(to_fixed(cx)),
                    fmt_fixed(to_fixed(cy)),
                    fmt_fixed(to_fixed(r))
                ));
            }
            ShapeKind::Rectangle => {
                let (hw, hh) = (r, r * 0.6);
                let corners: Vec<(f64, f64)> = [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)]
                    .into_iter()
                    .map(|(dx, dy)| place(spec, cx, cy, dx, dy))
                    .collect();
                out.push_str(&polygon_element(&corners, &paint));
            }
            ShapeKind::Polygon => {
                out.push_str(&polygon_element(&polygon_vertices(spec, cx, cy, r), &paint));
            }
            ShapeKind::Composite(marker) => {
                let vertices = polygon_vertices(spec, cx, cy, r);
                out.push_str(&polygon_element(&vertices, &paint));
                let (x0, y0) = vertices[0];
                let (x1, y1) = vertices[1 % vertices.len()];
                let (mx, my) = match marker {
                    Marker::Vertex => (x0, y0),
                    Marker::Edge => (x0 + 0.25 * (x1 - x0), y0 + 0.25 * (y1 - y0)),
                };
                out.push_str(&dot(mx, my, (r * 0.14).max(1.5)));
            }
        }
    }
    out
}

/// Standalone SVG document for one shape (used for every visual option).
pub fn render(spec: &ShapeSpec) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"{SVG_NS}\" viewBox=\"0 0 {CELL} {CELL}\" width=\"{CELL}\" height=\"{CELL}\">\n"
    ));
    svg.push_str(&cell_body(spec));
    svg.push_str("</svg>\n");
    svg
}

/// Which way a mirror line runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// A vertical line: left and right swap.
    Vertical,
    /// A horizontal line: top and bottom swap.
    Horizontal,
}

/// The source shape with a dashed mirror line beside it.
pub fn render_with_mirror(spec: &ShapeSpec, axis: Axis) -> String {
    let (w, h, line) = match axis {
        Axis::Vertical => (CELL + 2 * GAP, CELL, format!("x1=\"{0}\" y1=\"0\" x2=\"{0}\" y2=\"{CELL}\"", CELL + GAP)),
        Axis::Horizontal => (CELL, CELL + 2 * GAP, format!("x1=\"0\" y1=\"{0}\" x2=\"{CELL}\" y2=\"{0}\"", CELL + GAP)),
    };
    let mut svg = String::new();
    svg.push_str(&format!("<svg xmlns=\"{SVG_NS}\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">\n"));
    svg.push_str(&format!("<svg x=\"0\" y=\"0\" width=\"{CELL}\" height=\"{CELL}\" viewBox=\"0 0 {CELL} {CELL}\">\n"));
    svg.push_str(&cell_body(spec));
    svg.push_str("</svg>\n");
    svg.push_str(&format!("<line {line} stroke=\"{INK}\" stroke-width=\"2\" stroke-dasharray=\"6 4\"/>\n"));
    svg.push_str("</svg>\n");
    svg
}

/// Framed cells in rows; `None` draws the "?" placeholder.
pub fn render_grid(rows: &[Vec<Option<ShapeSpec>>]) -> String {
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0) as i64;
    let width = GAP + cols * (CELL + GAP);
    let height = GAP + rows.len() as i64 * (CELL + GAP);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"{SVG_NS}\" viewBox=\"0 0 {width} {height}\" width=\"{width}\" height=\"{height}\">\n"
    ));
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let x = GAP + c as i64 * (CELL + GAP);
            let y = GAP + r as i64 * (CELL + GAP);
            svg.push_str(&format!(
                "<rect x=\"{x}\" y=\"{y}\" width=\"{CELL}\" height=\"{CELL}\" fill=\"none\" stroke=\"{FRAME}\"/>\n"
            ));
            match cell {
                Some(spec) => {
                    svg.push_str(&format!(
                        "<svg x=\"{x}\" y=\"{y}\" width=\"{CELL}\" height=\"{CELL}\" viewBox=\"0 0 {CELL} {CELL}\">\n"
                    ));
                    svg.push_str(&cell_body(spec));
                    svg.push_str("</svg>\n");
                }
                None => {
                    svg.push_str(&format!(
                        "<text x=\"{}\" y=\"{}\" font-size=\"40\" font-family=\"sans-serif\" text-anchor=\"middle\" fill=\"{INK}\">?</text>\n",
                        x + CELL / 2,
                        y + CELL / 2 + 14
                    ));
                }
            }
        }
    }
    svg.push_str("</svg>\n");
    svg
}

/// A single row of cells (series stems).
pub fn render_strip(cells: &[Option<ShapeSpec>]) -> String {
    render_grid(&[cells.to_vec()])
}

/// Whitespace-collapsed form with no whitespace between tags.  Two options
/// are the same to the learner exactly when these strings are equal.
pub fn normalize_svg(svg: &str) -> String {
    collapse_whitespace(svg).replace("> <", "><")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_engine::geometry::shape::ShapeKind;

    fn same(a: &ShapeSpec, b: &ShapeSpec) -> bool {
        normalize_svg(&render(a)) == normalize_svg(&render(b))
    }

    #[test]
    fn triangle_points_up_at_zero_rotation() {
        let svg = render(&ShapeSpec::polygon(3).with_size(30));
        assert!(svg.contains("24.02,65.00 50.00,20.00 75.98,65.00"), "{svg}");
    }

    #[test]
    fn document_is_self_contained() {
        let svg = render(&ShapeSpec::new(ShapeKind::Composite(Marker::Edge)));
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(!svg.contains("href"));
        assert!(!svg.contains("transform"));
        assert!(!svg.contains("-0.00"));
    }

    #[test]
    fn symmetric_turns_render_identically() {
        let square = ShapeSpec::polygon(4);
        assert!(same(&square, &square.with_rotation(90)));
        assert!(!same(&square, &square.with_rotation(45)));
        let rect = ShapeSpec::new(ShapeKind::Rectangle);
        assert!(same(&rect, &rect.with_rotation(180)));
        assert!(!same(&rect, &rect.with_rotation(90)));
    }

    #[test]
    fn half_turn_equals_double_reflection() {
        let s = ShapeSpec::new(ShapeKind::Composite(Marker::Edge)).with_sides(5).with_rotation(20);
        assert!(same(&s.with_rotation(200), &s.mirrored(true, true)));
    }

    #[test]
    fn vertex_marker_survives_a_vertical_mirror_but_edge_marker_does_not() {
        let v = ShapeSpec::new(ShapeKind::Composite(Marker::Vertex)).with_sides(3);
        assert!(same(&v, &v.mirrored(true, false)));
        let e = ShapeSpec::new(ShapeKind::Composite(Marker::Edge)).with_sides(3);
        assert!(!same(&e, &e.mirrored(true, false)));
        assert!(!same(&e, &e.mirrored(false, true)));
    }

    #[test]
    fn circles_ignore_rotation() {
        let c = ShapeSpec::new(ShapeKind::Circle);
        assert!(same(&c, &c.with_rotation(73).mirrored(true, false)));
    }

    #[test]
    fn normalization_strips_layout_whitespace() {
        let a = "<svg>\n  <rect  x=\"1\"/>\n</svg>\n";
        assert_eq!(normalize_svg(a), "<svg><rect x=\"1\"/></svg>");
    }

    #[test]
    fn grid_marks_the_missing_cell() {
        let s = ShapeSpec::polygon(5);
        let svg = render_grid(&[vec![Some(s), Some(s)], vec![Some(s), None]]);
        assert_eq!(svg.matches(">?</text>").count(), 1);
        assert_eq!(svg.matches("<polygon").count(), 3);
    }

    #[test]
    fn opacity_is_written_as_a_fraction() {
        let svg = render(&ShapeSpec::polygon(4).with_opacity(60));
        assert!(svg.contains("opacity=\"0.60\""), "{svg}");
        let svg = render(&ShapeSpec::polygon(4).with_opacity(5));
        assert!(svg.contains("opacity=\"0.05\""), "{svg}");
    }
}
