//! `<a:tbl>` reader

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::anchor::VerticalAnchor;
use crate::cell::{Side, TableCell};
use crate::color::{Color, ThemeColor};
use crate::column::GridColumn;
use crate::error::{Error, Result};
use crate::fill::{Fill, GradientStop, PatternType};
use crate::row::TableRow;
use crate::table::{TableFlag, TableProperties, TableTree};
use crate::text::{Paragraph, Run, TextBody};
use crate::units::Length;

/// Parse the first `<a:tbl>` element found in `xml`
///
/// Anything before the table (a surrounding `<p:graphicFrame>`, for example)
/// is ignored, as are elements the tree does not model: borders, table style
/// references, paragraph and run properties, extension lists.
pub fn parse_tbl(xml: &str) -> Result<TableTree> {
    let mut reader = Reader::from_str(xml);
    let mut state = ParseState::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => state.open(&e)?,
            Event::Empty(e) => {
                state.open(&e)?;
                state.close(e.local_name().as_ref())?;
            }
            Event::End(e) => state.close(e.local_name().as_ref())?,
            Event::Text(e) if state.in_text && state.skip == 0 => {
                let text = e.unescape()?;
                if let Some(run) = state.run.as_mut() {
                    run.text.push_str(&text);
                }
            }
            Event::CData(e) if state.in_text && state.skip == 0 => {
                let text = reader.decoder().decode(&e)?;
                if let Some(run) = state.run.as_mut() {
                    run.text.push_str(&text);
                }
            }
            Event::CData(_) if state.in_tbl && state.skip == 0 => {
                log::debug!("dropping CDATA section outside <a:t>");
            }
            Event::Eof => break,
            _ => {}
        }
        if state.done {
            break;
        }
    }

    let tree = state.finish()?;
    tree.validate()?;
    Ok(tree)
}

#[derive(Default)]
struct ParseState {
    in_tbl: bool,
    done: bool,
    /// Depth inside an element whose content is ignored
    skip: usize,
    properties: TableProperties,
    grid: Vec<GridColumn>,
    rows: Vec<TableRow>,
    row: Option<TableRow>,
    cell: Option<TableCell>,
    body: Option<TextBody>,
    paragraph: Option<Paragraph>,
    run: Option<Run>,
    in_text: bool,
    in_tc_pr: bool,
    fill: Option<FillBuilder>,
}

impl ParseState {
    fn open(&mut self, e: &BytesStart<'_>) -> Result<()> {
        if self.skip > 0 {
            self.skip += 1;
            return Ok(());
        }
        let name = e.local_name();
        let name = name.as_ref();

        if !self.in_tbl {
            self.in_tbl = name == b"tbl";
            return Ok(());
        }

        match name {
            b"tblPr" => {
                for flag in TableFlag::ALL {
                    if let Some(value) = bool_attr(e, flag.as_xml())? {
                        self.properties.set(flag, value);
                    }
                }
                self.skip = 1;
            }
            b"tblGrid" => {}
            b"gridCol" => {
                let width = length_attr(e, "w")?.ok_or(Error::MissingElement("gridCol@w"))?;
                self.grid.push(GridColumn::new(width));
                self.skip = 1;
            }
            b"tr" => {
                let height = length_attr(e, "h")?.ok_or(Error::MissingElement("tr@h"))?;
                self.row = Some(TableRow {
                    height,
                    cells: Vec::new(),
                });
            }
            b"tc" if self.row.is_some() => {
                self.cell = Some(TableCell {
                    grid_span: u32_attr(e, "gridSpan")?.unwrap_or(1),
                    row_span: u32_attr(e, "rowSpan")?.unwrap_or(1),
                    h_merge: bool_attr(e, "hMerge")?.unwrap_or(false),
                    v_merge: bool_attr(e, "vMerge")?.unwrap_or(false),
                    properties: None,
                    text_body: None,
                });
            }
            b"txBody" if self.cell.is_some() => {
                self.body = Some(TextBody {
                    word_wrap: None,
                    paragraphs: Vec::new(),
                });
            }
            b"bodyPr" if self.body.is_some() => {
                if let Some(body) = self.body.as_mut() {
                    body.word_wrap = match attr(e, "wrap")?.as_deref() {
                        Some("square") => Some(true),
                        Some("none") => Some(false),
                        _ => None,
                    };
                }
                self.skip = 1;
            }
            b"p" if self.body.is_some() => self.paragraph = Some(Paragraph::default()),
            b"r" | b"fld" if self.paragraph.is_some() => self.run = Some(Run::default()),
            b"t" if self.run.is_some() => self.in_text = true,
            b"br" if self.paragraph.is_some() => {
                log::debug!("dropping <a:br> line break, paragraphs hold runs only");
                self.skip = 1;
            }
            b"tcPr" if self.cell.is_some() => {
                self.in_tc_pr = true;
                if let Some(cell) = self.cell.as_mut() {
                    let props = cell.properties_or_insert();
                    for side in Side::ALL {
                        props.set_margin(side, length_attr(e, side.margin_attr())?);
                    }
                    props.anchor = match attr(e, "anchor")? {
                        Some(token) => Some(VerticalAnchor::from_xml(&token).ok_or(
                            Error::InvalidAttribute {
                                name: "anchor",
                                value: token,
                            },
                        )?),
                        None => None,
                    };
                }
            }
            b"noFill" if self.in_tc_pr && self.fill.is_none() => self.set_fill(Fill::NoFill),
            b"solidFill" if self.in_tc_pr && self.fill.is_none() => {
                self.fill = Some(FillBuilder::Solid(None));
            }
            b"pattFill" if self.in_tc_pr && self.fill.is_none() => {
                let pattern = attr(e, "prst")?
                    .and_then(|p| PatternType::from_xml(&p))
                    .unwrap_or_default();
                self.fill = Some(FillBuilder::Pattern {
                    pattern,
                    foreground: None,
                    background: None,
                    slot: None,
                });
            }
            b"gradFill" if self.in_tc_pr && self.fill.is_none() => {
                self.fill = Some(FillBuilder::Gradient {
                    angle: 0.0,
                    stops: Vec::new(),
                    position: None,
                });
            }
            b"fgClr" | b"bgClr" => {
                if let Some(FillBuilder::Pattern { slot, .. }) = self.fill.as_mut() {
                    *slot = Some(if name == b"fgClr" {
                        PatternSlot::Foreground
                    } else {
                        PatternSlot::Background
                    });
                } else {
                    self.skip = 1;
                }
            }
            b"gsLst" if self.fill.is_some() => {}
            b"gs" => {
                if let Some(FillBuilder::Gradient { position, .. }) = self.fill.as_mut() {
                    *position = Some(i64_attr(e, "pos")?.unwrap_or(0) as f64 / 100_000.0);
                } else {
                    self.skip = 1;
                }
            }
            b"lin" => {
                if let Some(FillBuilder::Gradient { angle, .. }) = self.fill.as_mut() {
                    *angle = i64_attr(e, "ang")?.unwrap_or(0) as f64 / 60_000.0;
                }
                self.skip = 1;
            }
            b"srgbClr" | b"schemeClr" if self.fill.is_some() => {
                let color = parse_color(name, e)?;
                if let Some(fill) = self.fill.as_mut() {
                    fill.accept(color);
                }
                // color modifiers (lumMod, alpha, ...) are not modeled
                self.skip = 1;
            }
            other => {
                log::debug!(
                    "skipping <{}> inside table",
                    String::from_utf8_lossy(other)
                );
                self.skip = 1;
            }
        }
        Ok(())
    }

    fn close(&mut self, name: &[u8]) -> Result<()> {
        if self.skip > 0 {
            self.skip -= 1;
            return Ok(());
        }
        if !self.in_tbl {
            return Ok(());
        }

        match name {
            b"tbl" => self.done = true,
            b"tr" => {
                if let Some(row) = self.row.take() {
                    self.rows.push(row);
                }
            }
            b"tc" => {
                let cell = self.cell.take();
                if let (Some(row), Some(cell)) = (self.row.as_mut(), cell) {
                    row.cells.push(cell);
                }
            }
            b"txBody" => {
                if let Some(mut body) = self.body.take() {
                    if body.paragraphs.is_empty() {
                        body.paragraphs.push(Paragraph::default());
                    }
                    if let Some(cell) = self.cell.as_mut() {
                        cell.text_body = Some(body);
                    }
                }
            }
            b"p" => {
                if let (Some(body), Some(paragraph)) = (self.body.as_mut(), self.paragraph.take()) {
                    body.paragraphs.push(paragraph);
                }
            }
            b"r" | b"fld" => {
                if let (Some(paragraph), Some(run)) = (self.paragraph.as_mut(), self.run.take()) {
                    paragraph.runs.push(run);
                }
            }
            b"t" => self.in_text = false,
            b"tcPr" => self.in_tc_pr = false,
            b"solidFill" | b"pattFill" | b"gradFill" => {
                if let Some(fill) = self.fill.take().and_then(FillBuilder::build) {
                    self.set_fill(fill);
                }
            }
            b"fgClr" | b"bgClr" => {
                if let Some(FillBuilder::Pattern { slot, .. }) = self.fill.as_mut() {
                    *slot = None;
                }
            }
            b"gs" => {
                if let Some(FillBuilder::Gradient { position, .. }) = self.fill.as_mut() {
                    *position = None;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn set_fill(&mut self, fill: Fill) {
        if let Some(cell) = self.cell.as_mut() {
            cell.properties_or_insert().fill = Some(fill);
        }
    }

    fn finish(self) -> Result<TableTree> {
        if !self.in_tbl {
            return Err(Error::MissingElement("a:tbl"));
        }
        if !self.done {
            return Err(Error::Malformed("unterminated <a:tbl> element".into()));
        }
        Ok(TableTree {
            properties: self.properties,
            grid: self.grid,
            rows: self.rows,
        })
    }
}

enum PatternSlot {
    Foreground,
    Background,
}

/// Fill under construction while its children are read
enum FillBuilder {
    Solid(Option<Color>),
    Pattern {
        pattern: PatternType,
        foreground: Option<Color>,
        background: Option<Color>,
        slot: Option<PatternSlot>,
    },
    Gradient {
        angle: f64,
        stops: Vec<GradientStop>,
        position: Option<f64>,
    },
}

impl FillBuilder {
    fn accept(&mut self, color: Color) {
        match self {
            FillBuilder::Solid(slot) => *slot = Some(color),
            FillBuilder::Pattern {
                foreground,
                background,
                slot,
                ..
            } => match slot {
                Some(PatternSlot::Foreground) => *foreground = Some(color),
                Some(PatternSlot::Background) => *background = Some(color),
                None => {}
            },
            FillBuilder::Gradient {
                stops, position, ..
            } => {
                if let Some(position) = *position {
                    stops.push(GradientStop { position, color });
                }
            }
        }
    }

    fn build(self) -> Option<Fill> {
        match self {
            FillBuilder::Solid(Some(color)) => Some(Fill::Solid { color }),
            FillBuilder::Solid(None) => {
                log::warn!("solidFill without a supported color, dropped");
                None
            }
            FillBuilder::Pattern {
                pattern,
                foreground,
                background,
                ..
            } => Some(Fill::Pattern {
                pattern,
                foreground: foreground.unwrap_or(Color::BLACK),
                background: background.unwrap_or(Color::WHITE),
            }),
            FillBuilder::Gradient { angle, stops, .. } => Some(Fill::Gradient { angle, stops }),
        }
    }
}

fn parse_color(name: &[u8], e: &BytesStart<'_>) -> Result<Color> {
    let value = attr(e, "val")?.unwrap_or_default();
    let color = if name == b"srgbClr" {
        Color::from_hex(&value)
    } else {
        ThemeColor::from_xml(&value).map(Color::Theme)
    };
    color.ok_or(Error::InvalidAttribute { name: "val", value })
}

fn attr(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn bool_attr(e: &BytesStart<'_>, name: &'static str) -> Result<Option<bool>> {
    match attr(e, name)? {
        None => Ok(None),
        Some(v) => match v.as_str() {
            "1" | "true" => Ok(Some(true)),
            "0" | "false" => Ok(Some(false)),
            _ => Err(Error::InvalidAttribute { name, value: v }),
        },
    }
}

fn i64_attr(e: &BytesStart<'_>, name: &'static str) -> Result<Option<i64>> {
    match attr(e, name)? {
        None => Ok(None),
        Some(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidAttribute { name, value: v }),
    }
}

fn u32_attr(e: &BytesStart<'_>, name: &'static str) -> Result<Option<u32>> {
    match attr(e, name)? {
        None => Ok(None),
        Some(v) => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidAttribute { name, value: v }),
    }
}

fn length_attr(e: &BytesStart<'_>, name: &'static str) -> Result<Option<Length>> {
    Ok(i64_attr(e, name)?.map(Length::emu))
}
