use std::fmt::Write;

use crate::model::Point;
use crate::render::{FillStyle, StrokeStyle, Surface};

/// Surface that accumulates SVG elements; `finish` yields the document.
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
    caption: String,
}

fn path_data(pts: &[Point], closed: bool) -> String {
    let mut d = String::new();
    for (i, p) in pts.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{}{:.3},{:.3} ", cmd, p.x, p.y);
    }
    if closed && !pts.is_empty() {
        d.push('Z');
    }
    d.trim_end().to_string()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> SvgSurface {
        SvgSurface { width, height, body: String::new(), caption: String::new() }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn finish(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(out, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##);
        if !self.caption.is_empty() {
            let _ = writeln!(out, "<title>{}</title>", escape(&self.caption));
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.body.clear();
        self.caption.clear();
    }

    fn fill_polygon(&mut self, pts: &[Point], style: &FillStyle) {
        if pts.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"<path d="{}" fill="{}" fill-opacity="{}" stroke="none"/>"#,
            path_data(pts, true),
            style.color.css(),
            style.alpha
        );
    }

    fn stroke_polyline(&mut self, pts: &[Point], closed: bool, style: &StrokeStyle) {
        if pts.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            path_data(pts, closed),
            style.color.css(),
            style.width
        );
    }

    fn stroke_circles(&mut self, centers: &[Point], radius: f64, style: &StrokeStyle) {
        for c in centers {
            let _ = writeln!(
                self.body,
                r#"<circle cx="{:.3}" cy="{:.3}" r="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                c.x,
                c.y,
                radius,
                style.color.css(),
                style.width
            );
        }
    }

    fn set_caption(&mut self, text: &str) {
        self.caption = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{HOLE_STROKE, SKELETON_STROKE};

    #[test]
    fn closed_path_ends_with_z() {
        let pts = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
        assert_eq!(path_data(&pts, true), "M0.000,0.000 L1.000,0.000 L0.000,1.000 Z");
        assert_eq!(path_data(&pts[..2], false), "M0.000,0.000 L1.000,0.000");
    }

    #[test]
    fn document_escapes_caption() {
        let mut s = SvgSurface::new(10.0, 20.0);
        s.stroke_polyline(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)], false, &SKELETON_STROKE);
        s.stroke_polyline(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)], true, &HOLE_STROKE);
        s.set_caption("a<b & c (1/2)");
        let doc = s.finish();
        assert!(doc.starts_with("<svg "));
        assert!(doc.contains(r#"viewBox="0 0 10 20""#));
        assert!(doc.contains("<title>a&lt;b &amp; c (1/2)</title>"));
        assert!(doc.contains(r##"stroke="#aa0000""##));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn clear_drops_previous_frame() {
        let mut s = SvgSurface::new(10.0, 10.0);
        s.stroke_circles(&[Point::new(1.0, 1.0)], 2.0, &SKELETON_STROKE);
        s.clear();
        assert!(!s.finish().contains("<circle"));
    }
}
