use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;

use crate::coords::SurfaceSize;
use crate::paint::{Color, PaintStyle, Pen};
use crate::scene::{DrawCmd, DrawList};

/// Serializes a draw list as a standalone SVG document.
///
/// Commands are emitted in paint order; coordinates are already absolute, so
/// only text keeps a `rotate(...)` attribute.
pub fn to_svg(list: &DrawList, size: SurfaceSize) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = size.width,
        h = size.height,
    );

    for cmd in list.items() {
        let _ = match cmd {
            DrawCmd::Circle(c) => writeln!(
                out,
                r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" {}/>"#,
                c.center.x,
                c.center.y,
                c.radius.max(0.0),
                pen_attrs(&c.pen),
            ),
            DrawCmd::Line(l) => writeln!(
                out,
                r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
                l.from.x,
                l.from.y,
                l.to.x,
                l.to.y,
                pen_attrs(&Pen { style: PaintStyle::Stroke, ..l.pen }),
            ),
            DrawCmd::Text(t) => writeln!(
                out,
                r#"  <text x="{x:.2}" y="{y:.2}" font-size="{:.1}" font-family="sans-serif" {} transform="rotate({:.2} {x:.2} {y:.2})">{}</text>"#,
                t.size,
                pen_attrs(&t.pen),
                t.rotation,
                escape(&t.text),
                x = t.origin.x,
                y = t.origin.y,
            ),
        };
    }

    out.push_str("</svg>\n");
    out
}

/// Writes [`to_svg`] output to `path`.
pub fn save_svg(list: &DrawList, size: SurfaceSize, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, to_svg(list, size))
        .with_context(|| format!("writing svg to {}", path.display()))
}

fn pen_attrs(pen: &Pen) -> String {
    match pen.style {
        PaintStyle::Fill => format!(r#"{} stroke="none""#, color_attrs("fill", pen.color)),
        PaintStyle::Stroke => format!(
            r#"fill="none" {} stroke-width="{:.2}" stroke-linecap="round""#,
            color_attrs("stroke", pen.color),
            pen.width.max(0.0),
        ),
    }
}

fn color_attrs(attr: &str, color: Color) -> String {
    let (_, _, _, a) = color.to_straight();
    if a >= 1.0 {
        format!(r#"{attr}="{}""#, color.to_hex_rgb())
    } else {
        format!(r#"{attr}="{}" {attr}-opacity="{:.3}""#, color.to_hex_rgb(), a)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
