//! `<a:tbl>` writer

use quick_xml::escape::escape;

use crate::anchor::VerticalAnchor;
use crate::cell::{CellProperties, Side, TableCell};
use crate::color::Color;
use crate::fill::Fill;
use crate::options::XmlWriteOptions;
use crate::table::{TableFlag, TableTree};
use crate::text::TextBody;

use super::DRAWINGML_NS;

/// Serialize a table tree as a DrawingML `<a:tbl>` element
pub fn write_tbl(tree: &TableTree, options: &XmlWriteOptions) -> String {
    let mut out = XmlOut::new(options.indent);

    let mut tbl_attrs = Vec::new();
    if options.declare_namespace {
        tbl_attrs.push(("xmlns:a", DRAWINGML_NS.to_string()));
    }
    out.open("tbl", &tbl_attrs);

    let flags: Vec<_> = TableFlag::ALL
        .into_iter()
        .filter(|f| tree.properties.get(*f))
        .map(|f| (f.as_xml(), "1".to_string()))
        .collect();
    out.empty("tblPr", &flags);

    out.open("tblGrid", &[]);
    for col in &tree.grid {
        out.empty("gridCol", &[("w", col.width.as_emu().to_string())]);
    }
    out.close("tblGrid");

    for row in &tree.rows {
        out.open("tr", &[("h", row.height.as_emu().to_string())]);
        for tc in &row.cells {
            write_tc(&mut out, tc);
        }
        out.close("tr");
    }

    out.close("tbl");
    out.finish()
}

fn write_tc(out: &mut XmlOut, tc: &TableCell) {
    let mut attrs = Vec::new();
    if tc.grid_span > 1 {
        attrs.push(("gridSpan", tc.grid_span.to_string()));
    }
    if tc.row_span > 1 {
        attrs.push(("rowSpan", tc.row_span.to_string()));
    }
    if tc.h_merge {
        attrs.push(("hMerge", "1".to_string()));
    }
    if tc.v_merge {
        attrs.push(("vMerge", "1".to_string()));
    }

    let props = tc.properties.as_ref().filter(|p| !p.is_empty());
    if tc.text_body.is_none() && props.is_none() {
        out.empty("tc", &attrs);
        return;
    }

    out.open("tc", &attrs);
    if let Some(body) = &tc.text_body {
        write_tx_body(out, body);
    }
    if let Some(props) = props {
        write_tc_pr(out, props);
    }
    out.close("tc");
}

fn write_tx_body(out: &mut XmlOut, body: &TextBody) {
    out.open("txBody", &[]);
    let wrap: Vec<_> = body
        .word_wrap
        .map(|wrap| ("wrap", if wrap { "square" } else { "none" }.to_string()))
        .into_iter()
        .collect();
    out.empty("bodyPr", &wrap);
    out.empty("lstStyle", &[]);
    for paragraph in &body.paragraphs {
        if paragraph.runs.is_empty() {
            out.empty("p", &[]);
            continue;
        }
        out.open("p", &[]);
        for run in &paragraph.runs {
            out.open("r", &[]);
            out.text_element("t", &run.text);
            out.close("r");
        }
        out.close("p");
    }
    out.close("txBody");
}

fn write_tc_pr(out: &mut XmlOut, props: &CellProperties) {
    let mut attrs: Vec<_> = Side::ALL
        .iter()
        .filter_map(|side| {
            props
                .margin(*side)
                .map(|m| (side.margin_attr(), m.as_emu().to_string()))
        })
        .collect();
    if let Some(anchor) = props.anchor {
        attrs.push(("anchor", VerticalAnchor::as_xml(&anchor).to_string()));
    }

    match &props.fill {
        None => out.empty("tcPr", &attrs),
        Some(fill) => {
            out.open("tcPr", &attrs);
            write_fill(out, fill);
            out.close("tcPr");
        }
    }
}

fn write_fill(out: &mut XmlOut, fill: &Fill) {
    match fill {
        Fill::NoFill => out.empty("noFill", &[]),
        Fill::Solid { color } => {
            out.open("solidFill", &[]);
            write_color(out, color);
            out.close("solidFill");
        }
        Fill::Pattern {
            pattern,
            foreground,
            background,
        } => {
            out.open("pattFill", &[("prst", pattern.as_xml().to_string())]);
            out.open("fgClr", &[]);
            write_color(out, foreground);
            out.close("fgClr");
            out.open("bgClr", &[]);
            write_color(out, background);
            out.close("bgClr");
            out.close("pattFill");
        }
        Fill::Gradient { angle, stops } => {
            out.open("gradFill", &[("rotWithShape", "1".to_string())]);
            out.open("gsLst", &[]);
            for stop in stops {
                let pos = (stop.position * 100_000.0).round() as i64;
                out.open("gs", &[("pos", pos.to_string())]);
                write_color(out, &stop.color);
                out.close("gs");
            }
            out.close("gsLst");
            let ang = (angle * 60_000.0).round() as i64;
            out.empty("lin", &[("ang", ang.to_string()), ("scaled", "0".to_string())]);
            out.close("gradFill");
        }
    }
}

fn write_color(out: &mut XmlOut, color: &Color) {
    match color {
        Color::Rgb { .. } => {
            let hex = color.to_hex().unwrap_or_default();
            out.empty("srgbClr", &[("val", hex)]);
        }
        Color::Theme(theme) => out.empty("schemeClr", &[("val", theme.as_xml().to_string())]),
    }
}

/// String builder for `a:`-prefixed elements with optional indentation
struct XmlOut {
    buf: String,
    indent: Option<usize>,
    depth: usize,
}

impl XmlOut {
    fn new(indent: Option<usize>) -> Self {
        Self {
            buf: String::new(),
            indent,
            depth: 0,
        }
    }

    fn newline(&mut self) {
        if let Some(width) = self.indent {
            if !self.buf.is_empty() {
                self.buf.push('\n');
            }
            self.buf.push_str(&" ".repeat(width * self.depth));
        }
    }

    fn start_tag(&mut self, name: &str, attrs: &[(&str, String)]) {
        self.newline();
        self.buf.push_str("<a:");
        self.buf.push_str(name);
        for (key, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(key);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape(value.as_str()));
            self.buf.push('"');
        }
    }

    fn open(&mut self, name: &str, attrs: &[(&str, String)]) {
        self.start_tag(name, attrs);
        self.buf.push('>');
        self.depth += 1;
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, String)]) {
        self.start_tag(name, attrs);
        self.buf.push_str("/>");
    }

    fn close(&mut self, name: &str) {
        self.depth -= 1;
        self.newline();
        self.buf.push_str("</a:");
        self.buf.push_str(name);
        self.buf.push('>');
    }

    /// Element with text content, kept on one line so whitespace survives
    fn text_element(&mut self, name: &str, text: &str) {
        self.start_tag(name, &[]);
        self.buf.push('>');
        self.buf.push_str(&escape(text));
        self.buf.push_str("</a:");
        self.buf.push_str(name);
        self.buf.push('>');
    }

    fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Length;

    #[test]
    fn test_compact_output() {
        let tree = TableTree::new(1, 2, Length::emu(200), Length::emu(50)).unwrap();
        let xml = write_tbl(&tree, &XmlWriteOptions::compact());
        assert_eq!(
            xml,
            "<a:tbl><a:tblPr firstRow=\"1\" bandRow=\"1\"/><a:tblGrid>\
             <a:gridCol w=\"100\"/><a:gridCol w=\"100\"/></a:tblGrid>\
             <a:tr h=\"50\"><a:tc/><a:tc/></a:tr></a:tbl>"
        );
    }

    #[test]
    fn test_empty_properties_not_written() {
        let mut tree = TableTree::new(1, 2, Length::emu(2), Length::emu(1)).unwrap();
        tree.rows[0].cells[0].properties_or_insert();
        tree.rows[0].cells[1].properties_or_insert().anchor = Some(VerticalAnchor::Top);
        let xml = write_tbl(&tree, &XmlWriteOptions::compact());
        assert!(xml.contains("<a:tr h=\"1\"><a:tc/><a:tc><a:tcPr anchor=\"t\"/></a:tc>"));
    }

    #[test]
    fn test_escapes_text() {
        let mut tree = TableTree::new(1, 1, Length::emu(1), Length::emu(1)).unwrap();
        tree.rows[0].cells[0].text_body_or_insert().set_text("a < b & \"c\"");
        let xml = write_tbl(&tree, &XmlWriteOptions::compact());
        assert!(xml.contains("<a:t>a &lt; b &amp; &quot;c&quot;</a:t>"));
    }

    #[test]
    fn test_indented_output_declares_namespace() {
        let tree = TableTree::new(1, 1, Length::emu(1), Length::emu(1)).unwrap();
        let xml = write_tbl(&tree, &XmlWriteOptions::default());
        assert!(xml.starts_with(&format!("<a:tbl xmlns:a=\"{DRAWINGML_NS}\">\n  <a:tblPr")));
        assert!(xml.ends_with("\n</a:tbl>"));
    }
}
