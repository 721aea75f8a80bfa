//! slidegrid CLI - inspect and edit slide tables

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use slidegrid::prelude::*;
use slidegrid::{TableOptions, TableTree};
use slidegrid_oxml::xml::{parse_tbl, write_tbl};
use slidegrid_oxml::{TableFlag, XmlWriteOptions};
use std::cell::RefCell;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Parser)]
#[command(name = "slidegrid")]
#[command(author, version, about = "Inspect and edit tables embedded in slides")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a fresh table document
    New {
        /// Number of rows
        #[arg(short, long)]
        rows: usize,

        /// Number of columns
        #[arg(short, long)]
        cols: usize,

        /// Total width, e.g. 6in, 15cm, 5486400 (default: 6in)
        #[arg(long)]
        width: Option<Length>,

        /// Total height (default: 0.8in)
        #[arg(long)]
        height: Option<Length>,

        /// Output document (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize a table document
    Info {
        /// Input table document
        input: PathBuf,
    },

    /// Set a row height or column width and write the document back
    Resize {
        /// Input table document
        input: PathBuf,

        /// Row to resize (0-based)
        #[arg(long, allow_negative_numbers = true, requires = "height", conflicts_with = "column")]
        row: Option<isize>,

        /// New row height
        #[arg(long, requires = "row")]
        height: Option<Length>,

        /// Column to resize (0-based)
        #[arg(long, allow_negative_numbers = true, requires = "width")]
        column: Option<isize>,

        /// New column width
        #[arg(long, requires = "column")]
        width: Option<Length>,

        /// Output document (default: overwrite input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a table document to DrawingML `<a:tbl>` XML
    #[command(alias = "xml")]
    ToXml {
        /// Input table document
        input: PathBuf,

        /// Output XML file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write everything on one line
        #[arg(long)]
        compact: bool,
    },

    /// Build a table document from DrawingML `<a:tbl>` XML
    FromXml {
        /// Input XML file
        input: PathBuf,

        /// Output document (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// JSON document: a table tree and the frame that contains it
#[derive(Serialize, Deserialize)]
struct Document {
    x: Length,
    y: Length,
    width: Length,
    height: Length,
    table: TableTree,
}

impl Document {
    fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse table document '{}'", path.display()))
    }

    fn extents(&self) -> Extents {
        Extents::new(self.x, self.y, self.width, self.height)
    }

    fn from_table(table: &Table, frame: &Extents) -> Self {
        Self {
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
            table: table.accessor().snapshot(),
        }
    }

    /// Open the document as a table, sharing the frame with the caller
    fn open(self) -> Result<(Table, Rc<RefCell<Extents>>)> {
        let frame = Rc::new(RefCell::new(self.extents()));
        let table = Table::from_tree(self.table, frame.clone()).context("Invalid table")?;
        Ok((table, frame))
    }

    fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self).context("Failed to encode document")?;
        json.push('\n');
        Ok(json)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New {
            rows,
            cols,
            width,
            height,
            output,
        } => new_table(rows, cols, width, height, output.as_deref()),
        Commands::Info { input } => show_info(&input),
        Commands::Resize {
            input,
            row,
            height,
            column,
            width,
            output,
        } => {
            let target = match (row, height, column, width) {
                (Some(idx), Some(len), None, None) => Resize::Row(idx, len),
                (None, None, Some(idx), Some(len)) => Resize::Column(idx, len),
                _ => bail!("Pass either --row with --height or --column with --width"),
            };
            resize(&input, target, output.as_deref())
        }
        Commands::ToXml {
            input,
            output,
            compact,
        } => to_xml(&input, output.as_deref(), compact),
        Commands::FromXml { input, output } => from_xml(&input, output.as_deref()),
    }
}

enum Resize {
    Row(isize, Length),
    Column(isize, Length),
}

fn new_table(
    rows: usize,
    cols: usize,
    width: Option<Length>,
    height: Option<Length>,
    output: Option<&Path>,
) -> Result<()> {
    let mut options = TableOptions::default();
    if let Some(width) = width {
        options = options.with_width(width);
    }
    if let Some(height) = height {
        options = options.with_height(height);
    }

    let frame = Rc::new(RefCell::new(Extents::default()));
    let table = Table::with_options(rows, cols, &options, frame.clone())
        .with_context(|| format!("Cannot create a {rows}x{cols} table"))?;
    // even division may leave a remainder; size the frame to what the grid holds
    table.notify_width_changed();
    table.notify_height_changed();

    let frame = *frame.borrow();
    emit(output, &Document::from_table(&table, &frame).to_json()?)
}

fn show_info(input: &Path) -> Result<()> {
    let (table, frame) = Document::load(input)?.open()?;
    let frame = *frame.borrow();

    println!("File: {}", input.display());
    println!(
        "Size: {} rows x {} columns",
        table.rows().len(),
        table.columns().len()
    );
    println!(
        "Frame: {} x {} at ({}, {})",
        frame.width, frame.height, frame.x, frame.y
    );

    let tree = table.accessor().tree();
    let flags: Vec<_> = TableFlag::ALL
        .into_iter()
        .filter(|f| tree.properties.get(*f))
        .map(|f| f.as_xml())
        .collect();
    println!("Flags: {}", if flags.is_empty() { "none".to_string() } else { flags.join(" ") });

    let merged = tree.merged_regions();
    if merged.is_empty() {
        println!("Merged: none");
    } else {
        for span in merged {
            println!("Merged: {span}");
        }
    }
    if frame.width != tree.total_width() || frame.height != tree.total_height() {
        eprintln!(
            "Warning: frame does not match table total of {} x {}",
            tree.total_width(),
            tree.total_height()
        );
    }
    drop(tree);

    for row in table.rows() {
        println!("  Row {}: {}", row.index(), row.height());
    }
    for col in table.columns() {
        println!("  Column {}: {}", col.index(), col.width());
    }

    Ok(())
}

fn resize(input: &Path, target: Resize, output: Option<&Path>) -> Result<()> {
    let (table, frame) = Document::load(input)?.open()?;

    match target {
        Resize::Row(idx, height) => table.rows().get(idx)?.set_height(height),
        Resize::Column(idx, width) => table.columns().get(idx)?.set_width(width),
    }

    let frame = *frame.borrow();
    let path = output.unwrap_or(input);
    std::fs::write(path, Document::from_table(&table, &frame).to_json()?)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    eprintln!(
        "Table is now {} x {}, wrote '{}'",
        frame.width,
        frame.height,
        path.display()
    );

    Ok(())
}

fn to_xml(input: &Path, output: Option<&Path>, compact: bool) -> Result<()> {
    let doc = Document::load(input)?;
    let options = if compact {
        XmlWriteOptions::compact()
    } else {
        XmlWriteOptions::default()
    };

    let mut xml = write_tbl(&doc.table, &options);
    xml.push('\n');
    emit(output, &xml)
}

fn from_xml(input: &Path, output: Option<&Path>) -> Result<()> {
    let xml = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;
    let tree = parse_tbl(&xml)
        .with_context(|| format!("Failed to parse table XML in '{}'", input.display()))?;

    let doc = Document {
        x: Length::ZERO,
        y: Length::ZERO,
        width: tree.total_width(),
        height: tree.total_height(),
        table: tree,
    };
    emit(output, &doc.to_json()?)
}

/// Write to a file, or stdout when no path is given
fn emit(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write '{}'", path.display())),
        None => io::stdout()
            .write_all(text.as_bytes())
            .context("Failed to write to stdout"),
    }
}
