//! A small library for generating row-oriented PDF reports.
//!
//! A [Document] is a cursor-based drawing session: configure page format,
//! margins, and fonts, add pages, and place cells of text. On top of that,
//! [layout::Row] renders one table-like band of columns, each stacking a
//! title, a subtitle, and a text block with automatic word wrapping and a
//! shared, content-derived height.
//!
//! ```no_run
//! use pdf_rows::{Document, Orientation, PageSize, Unit};
//! use pdf_rows::layout::Row;
//!
//! let mut doc = Document::new(Orientation::Portrait, Unit::Mm, PageSize::A4, ".");
//! doc.add_page();
//!
//! let mut row = Row::new(60.0, 5.0);
//! row.cell_margin = 2.0;
//! row.draw_border = true;
//! row.render(
//!     &mut doc,
//!     10.0,
//!     10.0,
//!     &["Name", "Role"],
//!     &["", ""],
//!     &["Ada Lovelace", "Mathematician"],
//! )?;
//!
//! let out = std::fs::File::create("report.pdf")?;
//! doc.write(out)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod colour;
pub use colour::*;

mod corefont;
pub use corefont::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Utility functions and structures to lay out rows and text on pages
pub mod layout;

mod page;
pub use page::*;

mod pagesize;
pub use pagesize::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for inspecting generated output
pub use pdf_writer;
