//! SVG serialisation of a `Surface`.

use std::fmt::Write as _;

use super::surface::{Element, Surface};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Compact number formatting: at most three decimals, no trailing zeros,
/// no `-0`, non-finite values written as `0`.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    // Past 1e15 there are no fractional digits left to round, and scaling
    // could overflow to infinity.
    let r = if v.abs() < 1e15 {
        (v * 1000.0).round() / 1000.0
    } else {
        v
    };
    if r == 0.0 {
        "0".to_owned()
    } else {
        format!("{r}")
    }
}

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl Surface {
    /// Standalone `<svg>` document of `width × height` pixels.
    pub fn write_svg(&self, width: f64, height: f64) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(width),
            h = fmt_num(height),
        );
        for e in self.elements() {
            write_element(&mut out, e);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn write_element(out: &mut String, e: &Element) {
    let _ = write!(out, "  <{}", e.tag());
    if !e.classes().is_empty() {
        let _ = write!(out, r#" class="{}""#, escape_xml(&e.classes().join(" ")));
    }
    for (name, value) in e.attrs() {
        let _ = write!(out, r#" {name}="{}""#, escape_xml(value));
    }
    let style: Vec<String> = e.styles().map(|(k, v)| format!("{k}: {v}")).collect();
    if !style.is_empty() {
        let _ = write!(out, r#" style="{}""#, escape_xml(&style.join("; ")));
    }
    match e.text() {
        Some(text) => {
            let _ = writeln!(out, ">{}</{}>", escape_xml(text), e.tag());
        }
        None => out.push_str("/>\n"),
    }
}
