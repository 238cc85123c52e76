use crate::colour::Colour;
use crate::error::Error;
use crate::font::Font;
use crate::rect::Rect;
use crate::refs::{ObjectIds, ObjectKind};
use crate::units::Pt;
use id_arena::{Arena, Id};
use pdf_writer::{Filter, Finish, Name, Pdf};
use std::io::Write;

/// The font a span is shown with: an id into the document's font arena plus
/// a size in points
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// One line of positioned text. Coordinates are the baseline start in PDF
/// page space (origin bottom-left).
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// How a rectangle is painted
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RectStyle {
    /// Fill the interior only
    Fill,
    /// Stroke the outline only
    Outline,
    /// Fill the interior and stroke the outline
    FillOutline,
}

/// A painted rectangle
#[derive(Clone, PartialEq, Debug)]
pub struct RectLayout {
    pub rect: Rect,
    pub style: RectStyle,
    pub fill: Colour,
    pub stroke: Colour,
}

/// A straight horizontal rule, used for underline and strikeout decorations
#[derive(Clone, PartialEq, Debug)]
pub struct RuleLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub thickness: Pt,
    pub colour: Colour,
}

/// Everything that can be laid out on a page
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(SpanLayout),
    Rect(RectLayout),
    Rule(RuleLayout),
}

/// One page of the document: a media box plus the display list accumulated
/// by the drawing operations. The list is kept in draw order and serialized
/// to a single compressed content stream at write time.
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// The laid out content, in draw order
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(width: Pt, height: Pt) -> Page {
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            contents: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(span));
    }

    pub fn add_rect(&mut self, rect: RectLayout) {
        self.contents.push(PageContents::Rect(rect));
    }

    pub fn add_rule(&mut self, rule: RuleLayout) {
        self.contents.push(PageContents::Rule(rule));
    }

    /// Number of text spans on the page
    pub fn span_count(&self) -> usize {
        self.contents
            .iter()
            .filter(|c| matches!(c, PageContents::Text(_)))
            .count()
    }

    /// Number of painted rectangles on the page
    pub fn rect_count(&self) -> usize {
        self.contents
            .iter()
            .filter(|c| matches!(c, PageContents::Rect(_)))
            .count()
    }

    /// Convert the display list into PDF content stream operators
    #[allow(clippy::write_with_newline)]
    fn render(&self, fonts: &Arena<Font>) -> Result<Vec<u8>, std::io::Error> {
        let mut content: Vec<u8> = Vec::default();

        for item in self.contents.iter() {
            match item {
                PageContents::Rect(rect) => render_rect(&mut content, rect)?,
                PageContents::Text(span) => render_span(&mut content, span, fonts)?,
                PageContents::Rule(rule) => render_rule(&mut content, rule)?,
            }
        }

        Ok(content)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectIds,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), Error> {
        let id = refs.entry(ObjectKind::Page(page_index));
        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(refs.entry(ObjectKind::PageTree));

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            resource_fonts.pair(
                Name(format!("F{}", font_id.index()).as_bytes()),
                refs.entry(ObjectKind::Font(font_id.index())),
            );
        }
        resource_fonts.finish();
        resources.finish();

        let content_id = refs.entry(ObjectKind::PageContent(page_index));
        page.contents(content_id);
        page.finish();

        let rendered = self.render(fonts)?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            rendered.as_slice(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}

#[allow(clippy::write_with_newline)]
fn render_rect(content: &mut Vec<u8>, rect: &RectLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    if rect.style != RectStyle::Outline {
        write_fill_colour(content, rect.fill)?;
    }
    if rect.style != RectStyle::Fill {
        write_stroke_colour(content, rect.stroke)?;
    }
    write!(
        content,
        "{} {} {} {} re\n",
        rect.rect.x1,
        rect.rect.y1,
        rect.rect.width(),
        rect.rect.height()
    )?;
    let op = match rect.style {
        RectStyle::Fill => "f",
        RectStyle::Outline => "S",
        RectStyle::FillOutline => "B",
    };
    write!(content, "{op}\nQ\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_span(
    content: &mut Vec<u8>,
    span: &SpanLayout,
    fonts: &Arena<Font>,
) -> Result<(), std::io::Error> {
    write!(content, "q\nBT\n")?;
    write!(content, "/F{} {} Tf\n", span.font.id.index(), span.font.size)?;
    write_fill_colour(content, span.colour)?;
    write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;

    let font = &fonts[span.font.id];
    if font.is_embedded() {
        // Identity-H encoded: two bytes per glyph id
        write!(content, "<")?;
        for ch in span.text.chars() {
            write!(content, "{:04x}", font.shown_glyph_id(ch))?;
        }
        write!(content, "> Tj\n")?;
    } else {
        // core fonts are WinAnsi encoded; the metric tables cover ASCII
        write!(content, "(")?;
        for ch in span.text.chars() {
            match ch {
                '(' | ')' | '\\' => {
                    content.push(b'\\');
                    content.push(ch as u8);
                }
                ' '..='~' => content.push(ch as u8),
                _ => content.push(b'?'),
            }
        }
        write!(content, ") Tj\n")?;
    }

    write!(content, "ET\nQ\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_rule(content: &mut Vec<u8>, rule: &RuleLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write_stroke_colour(content, rule.colour)?;
    write!(content, "{} w\n", rule.thickness)?;
    write!(content, "{} {} m\n", rule.from.0, rule.from.1)?;
    write!(content, "{} {} l\n", rule.to.0, rule.to.1)?;
    write!(content, "S\nQ\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::Rgb { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::Rgb { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}
