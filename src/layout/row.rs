use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::error::Error;
use crate::font::FontStyle;
use crate::layout::Alignment;
use crate::page::RectStyle;
use log::trace;

/// Font and alignment settings for one of the three stacked blocks in a row
/// cell. The size is in points; the style's bold/italic flags select the
/// face variant and underline/strikeout add rules.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlockStyle {
    pub font_size: f32,
    pub font_style: FontStyle,
    pub align: Alignment,
}

impl BlockStyle {
    pub fn new(font_size: f32) -> BlockStyle {
        BlockStyle {
            font_size,
            font_style: FontStyle::REGULAR,
            align: Alignment::default(),
        }
    }

    pub fn with_style(mut self, style: FontStyle) -> BlockStyle {
        self.font_style = style;
        self
    }

    pub fn with_align(mut self, align: Alignment) -> BlockStyle {
        self.align = align;
        self
    }
}

/// One horizontal band of equally wide columns, each stacking a title, a
/// subtitle, and a text block inside a filled (and optionally outlined)
/// rectangle.
///
/// The row holds geometry and styling only; the per-column strings are
/// passed to [Row::render] so one configured row can stamp out many bands.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Width of every column, in document units
    pub column_width: f32,
    /// Vertical distance per wrapped line, also the minimum content height
    pub line_spacing: f32,
    /// Interior margin between a column's border and its text
    pub cell_margin: f32,
    /// Background colour of the whole band
    pub background: Colour,
    /// Stroke a border around each column with the document's draw colour
    pub draw_border: bool,
    /// Extra line break issued after the row, on top of one line spacing
    pub trailing_break: f32,
    pub title: BlockStyle,
    pub subtitle: BlockStyle,
    pub text: BlockStyle,
}

impl Row {
    pub fn new(column_width: f32, line_spacing: f32) -> Row {
        Row {
            column_width,
            line_spacing,
            cell_margin: 0.0,
            background: colours::WHITE,
            draw_border: false,
            trailing_break: 0.0,
            title: BlockStyle::new(12.0),
            subtitle: BlockStyle::new(10.0),
            text: BlockStyle::new(10.0),
        }
    }
}

struct MeasuredCell {
    lines: Vec<String>,
    height: f32,
}

impl Row {
    /// Render one row band with its top-left corner at `(x, y)`. The three
    /// slices hold one string per column and must have equal length.
    ///
    /// The row height is measured first: each block is wrapped against the
    /// column's interior width and the tallest stacked column determines the
    /// content height shared by every column, floored at one line spacing.
    /// Drawing then paints each column's rectangle and places the wrapped
    /// lines top to bottom, vertically offset so the stack is centred
    /// relative to the column's own text block height. Afterwards the cursor
    /// moves below the band plus `trailing_break` and one line spacing.
    ///
    /// On success the session's current font is the text block's font as
    /// left by the last column; it is not restored.
    pub fn render(
        &self,
        doc: &mut Document,
        x: f32,
        y: f32,
        titles: &[&str],
        subtitles: &[&str],
        texts: &[&str],
    ) -> Result<(), Error> {
        if titles.len() != subtitles.len() || titles.len() != texts.len() {
            return Err(Error::ColumnCountMismatch {
                titles: titles.len(),
                subtitles: subtitles.len(),
                texts: texts.len(),
            });
        }
        if self.column_width <= 0.0 {
            return Err(Error::InvalidGeometry {
                what: "column width",
                value: self.column_width,
            });
        }
        if self.line_spacing <= 0.0 {
            return Err(Error::InvalidGeometry {
                what: "line spacing",
                value: self.line_spacing,
            });
        }

        let columns = titles.len();
        let interior_width = self.column_width - 2.0 * self.cell_margin;

        let mut title_cells: Vec<MeasuredCell> = Vec::with_capacity(columns);
        let mut subtitle_cells: Vec<MeasuredCell> = Vec::with_capacity(columns);
        let mut text_cells: Vec<MeasuredCell> = Vec::with_capacity(columns);
        let mut row_height = self.line_spacing;

        for column in 0..columns {
            let title = self.measure(doc, &self.title, titles[column]);
            let subtitle = self.measure(doc, &self.subtitle, subtitles[column]);
            let text = self.measure(doc, &self.text, texts[column]);
            let stacked = title.height + subtitle.height + text.height;
            row_height = row_height.max(stacked);
            trace!(
                "column {column}: {} + {} + {} lines, stacked height {stacked}",
                title.lines.len(),
                subtitle.lines.len(),
                text.lines.len()
            );
            title_cells.push(title);
            subtitle_cells.push(subtitle);
            text_cells.push(text);
        }

        let band_height = 2.0 * self.line_spacing + row_height + 2.0 * self.cell_margin;
        let rect_style = if self.draw_border {
            RectStyle::FillOutline
        } else {
            RectStyle::Fill
        };

        let mut column_x = x;
        for column in 0..columns {
            doc.set_fill_colour(self.background);
            doc.rect(column_x, y, self.column_width, band_height, rect_style)?;

            let mut cell_y =
                y + self.cell_margin + (row_height - text_cells[column].height) / 2.0;
            let blocks = [
                (&self.title, &title_cells[column]),
                (&self.subtitle, &subtitle_cells[column]),
                (&self.text, &text_cells[column]),
            ];
            for (block, cell) in blocks {
                doc.set_font_size(block.font_size);
                doc.set_font_style(block.font_style);
                for line in &cell.lines {
                    doc.set_xy(column_x + self.cell_margin, cell_y);
                    doc.cell(
                        interior_width,
                        self.line_spacing,
                        line,
                        false,
                        block.align,
                        false,
                    )?;
                    cell_y += self.line_spacing;
                }
            }

            column_x += self.column_width;
        }

        doc.set_y(y + row_height + 2.0 * self.cell_margin);
        doc.line_break(self.trailing_break + self.line_spacing);
        Ok(())
    }

    fn measure(&self, doc: &mut Document, block: &BlockStyle, text: &str) -> MeasuredCell {
        doc.set_font_size(block.font_size);
        doc.set_font_style(block.font_style);
        let lines = doc.split_lines(text, self.column_width - 2.0 * self.cell_margin);
        let height = lines.len() as f32 * self.line_spacing;
        MeasuredCell { lines, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::{Orientation, PageSize};
    use crate::units::Unit;

    fn doc() -> Document {
        Document::new(Orientation::Portrait, Unit::Pt, PageSize::A4, ".")
    }

    #[test]
    fn mismatched_columns_fail_before_any_drawing() {
        // no page added: a mismatch must surface before NoPage could
        let mut d = doc();
        let row = Row::new(50.0, 5.0);
        let err = row
            .render(&mut d, 0.0, 0.0, &["a", "b"], &["x", "y", "z"], &["1", "2"])
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ColumnCountMismatch {
                titles: 2,
                subtitles: 3,
                texts: 2
            }
        ));
        assert!(d.page_order.is_empty());
    }

    #[test]
    fn non_positive_geometry_is_rejected() {
        let mut d = doc();
        d.add_page();
        let mut row = Row::new(0.0, 5.0);
        assert!(matches!(
            row.render(&mut d, 0.0, 0.0, &["a"], &["b"], &["c"]),
            Err(Error::InvalidGeometry { .. })
        ));
        row.column_width = 50.0;
        row.line_spacing = -1.0;
        assert!(matches!(
            row.render(&mut d, 0.0, 0.0, &["a"], &["b"], &["c"]),
            Err(Error::InvalidGeometry { .. })
        ));
        assert_eq!(d.pages[d.page_order[0]].rect_count(), 0);
    }
}
