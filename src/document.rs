use crate::colour::{colours, Colour};
use crate::corefont::CoreFont;
use crate::error::Error;
use crate::font::{FaceSlot, Font, FontFamily, FontStyle};
use crate::info::Info;
use crate::layout::{wrap_lines, Alignment, HAlign, VAlign};
use crate::page::{Page, RectLayout, RectStyle, RuleLayout, SpanFont, SpanLayout};
use crate::pagesize::{Orientation, PageSize};
use crate::rect::Rect;
use crate::refs::{ObjectIds, ObjectKind};
use crate::units::{Cm, Pt, Unit};
use id_arena::{Arena, Id};
use log::debug;
use pdf_writer::{Finish, Pdf, Ref};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

/// Page margins in document units. The bottom margin is not tracked; the
/// cursor is free to run past the bottom of the page.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
}

struct CurrentFont {
    family: String,
    style: FontStyle,
    size: Pt,
    id: Id<Font>,
}

/// A cursor-oriented document session. All coordinates and sizes on this API
/// are expressed in the configured [Unit] with the y axis growing downward
/// from the top of the page; font sizes are always in points. Drawing
/// operations append to the current page's display list, and [Document::write]
/// serializes the collected pages into a PDF.
///
/// The session keeps mutable font, colour, and cursor state between calls.
/// It is not internally synchronized; callers running layouts from multiple
/// threads must serialize access themselves.
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    families: HashMap<String, FontFamily>,
    core_ids: HashMap<CoreFont, Id<Font>>,
    font_dir: PathBuf,
    unit: Unit,
    page_dims: (Pt, Pt),
    margins: Margins,
    cursor: (f32, f32),
    current: CurrentFont,
    fill_colour: Colour,
    draw_colour: Colour,
    text_colour: Colour,
    last_cell_height: f32,
    current_page: Option<Id<Page>>,
}

impl Document {
    /// Create a new session. The session starts with Helvetica regular at
    /// 12pt, 1cm margins, and no pages; call [Document::add_page] before
    /// drawing. `font_dir` is where [Document::add_font] looks for font
    /// files; it only needs to exist if a non-core font is registered.
    pub fn new<P: Into<PathBuf>>(
        orientation: Orientation,
        unit: Unit,
        page_size: PageSize,
        font_dir: P,
    ) -> Document {
        let mut fonts = Arena::new();
        let mut core_ids = HashMap::new();
        let default_id = fonts.alloc(Font::core(CoreFont::Helvetica));
        core_ids.insert(CoreFont::Helvetica, default_id);

        let page_dims = orientation.apply(page_size.dimensions());
        let default_margin = Pt::from(Cm(1.0)).0 / unit.scale();

        debug!(
            "new document: {:?} {:?} {:?}, page {} x {} pt",
            orientation, unit, page_size, page_dims.0, page_dims.1
        );

        Document {
            info: None,
            pages: Arena::new(),
            page_order: Vec::new(),
            fonts,
            families: core_families(),
            core_ids,
            font_dir: font_dir.into(),
            unit,
            page_dims,
            margins: Margins {
                left: default_margin,
                top: default_margin,
                right: default_margin,
            },
            cursor: (default_margin, default_margin),
            current: CurrentFont {
                family: "helvetica".to_string(),
                style: FontStyle::REGULAR,
                size: Pt(12.0),
                id: default_id,
            },
            fill_colour: colours::BLACK,
            draw_colour: colours::BLACK,
            text_colour: colours::BLACK,
            last_cell_height: 0.0,
            current_page: None,
        }
    }

    /// Sets information about the document. If not provided, no information
    /// block will be written to the PDF.
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Set the left, top, and right page margins, in document units
    pub fn set_margins(&mut self, left: f32, top: f32, right: f32) {
        self.margins = Margins { left, top, right };
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    /// The page dimensions in points, after orientation
    pub fn page_dimensions(&self) -> (Pt, Pt) {
        self.page_dims
    }

    /// The cursor position in document units, measured from the top-left
    /// corner of the page
    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    /// The current font size in points
    pub fn font_size(&self) -> f32 {
        self.current.size.0
    }

    /// The current font style
    pub fn font_style(&self) -> FontStyle {
        self.current.style
    }

    /// Register a font file from the font directory under a family name.
    /// The file is parsed and will be embedded in the output. Repeated calls
    /// with different styles fill in the family's variants.
    pub fn add_font(&mut self, family: &str, style: FontStyle, filename: &str) -> Result<(), Error> {
        let path = self.font_dir.join(filename);
        debug!("loading font {:?} for family {family:?}", path);
        let bytes = std::fs::read(&path)?;
        self.add_font_from_bytes(family, style, bytes)
    }

    /// Register an already-loaded font under a family name
    pub fn add_font_from_bytes(
        &mut self,
        family: &str,
        style: FontStyle,
        bytes: Vec<u8>,
    ) -> Result<(), Error> {
        let font = Font::load(bytes)?;
        let id = self.fonts.alloc(font);
        self.families
            .entry(family.to_ascii_lowercase())
            .or_default()
            .set(style, FaceSlot::Loaded(id));
        Ok(())
    }

    /// Select the current font. `family` must be one of the core families
    /// (courier, helvetica/arial, times, symbol, zapfdingbats) or a family
    /// registered through [Document::add_font]. `size` is in points. The
    /// selection persists for subsequent text operations.
    pub fn set_font(&mut self, family: &str, style: FontStyle, size: f32) -> Result<(), Error> {
        let name = family.to_ascii_lowercase();
        let slot = self
            .families
            .get(&name)
            .and_then(|f| f.resolve(style))
            .ok_or_else(|| Error::UnknownFont {
                name: family.to_string(),
            })?;
        self.current = CurrentFont {
            family: name,
            style,
            size: Pt(size),
            id: self.resolve_slot(slot),
        };
        Ok(())
    }

    /// Change the size of the current font, in points, keeping its family
    /// and style
    pub fn set_font_size(&mut self, size: f32) {
        self.current.size = Pt(size);
    }

    /// Change the style of the current font, keeping its family and size.
    /// Styles without a registered face variant fall back to the family's
    /// regular face.
    pub fn set_font_style(&mut self, style: FontStyle) {
        self.current.style = style;
        let slot = self
            .families
            .get(&self.current.family)
            .and_then(|f| f.resolve(style));
        if let Some(slot) = slot {
            self.current.id = self.resolve_slot(slot);
        }
    }

    fn resolve_slot(&mut self, slot: FaceSlot) -> Id<Font> {
        match slot {
            FaceSlot::Loaded(id) => id,
            FaceSlot::Core(core) => *self
                .core_ids
                .entry(core)
                .or_insert_with(|| self.fonts.alloc(Font::core(core))),
        }
    }

    /// Append a new page. The cursor moves to the top-left margin corner and
    /// subsequent drawing lands on this page.
    pub fn add_page(&mut self) {
        let page = Page::new(self.page_dims.0, self.page_dims.1);
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        self.current_page = Some(id);
        self.cursor = (self.margins.left, self.margins.top);
        debug!("added page {}", self.page_order.len());
    }

    /// Split `text` into lines no wider than `max_width` (document units)
    /// when rendered with the current font. Always yields at least one line,
    /// even for empty input.
    pub fn split_lines(&self, text: &str, max_width: f32) -> Vec<String> {
        wrap_lines(
            &self.fonts[self.current.id],
            self.current.size,
            text,
            self.unit.to_pt(max_width),
        )
    }

    /// Rendered width of `text` in document units with the current font
    pub fn text_width(&self, text: &str) -> f32 {
        self.fonts[self.current.id]
            .text_width(text, self.current.size)
            .0
            / self.unit.scale()
    }

    /// Colour used for filled areas (cell and rectangle backgrounds)
    pub fn set_fill_colour(&mut self, colour: Colour) {
        self.fill_colour = colour;
    }

    /// Colour used for outlines and rules
    pub fn set_draw_colour(&mut self, colour: Colour) {
        self.draw_colour = colour;
    }

    /// Colour used for text
    pub fn set_text_colour(&mut self, colour: Colour) {
        self.text_colour = colour;
    }

    /// Move the cursor, in document units from the top-left page corner
    pub fn set_xy(&mut self, x: f32, y: f32) {
        self.cursor = (x, y);
    }

    /// Move the cursor vertically, keeping x
    pub fn set_y(&mut self, y: f32) {
        self.cursor.1 = y;
    }

    /// Paint a rectangle at `(x, y)` (top-left, document units) of the given
    /// width and height
    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, style: RectStyle) -> Result<(), Error> {
        let layout = RectLayout {
            rect: self.page_rect(x, y, w, h),
            style,
            fill: self.fill_colour,
            stroke: self.draw_colour,
        };
        self.page_mut()?.add_rect(layout);
        Ok(())
    }

    /// Place one line of text inside a `w` x `h` box at the cursor, honoring
    /// the alignment. With `border` the box outline is stroked; with `fill`
    /// its background is painted with the fill colour. Underline and
    /// strikeout rules are drawn when the current style requests them. The
    /// cursor advances to the right edge of the box, and `h` is recorded as
    /// the height a negative [Document::line_break] consumes.
    pub fn cell(
        &mut self,
        w: f32,
        h: f32,
        text: &str,
        border: bool,
        align: Alignment,
        fill: bool,
    ) -> Result<(), Error> {
        let (x, y) = self.cursor;

        if fill || border {
            let style = match (fill, border) {
                (true, true) => RectStyle::FillOutline,
                (true, false) => RectStyle::Fill,
                _ => RectStyle::Outline,
            };
            let layout = RectLayout {
                rect: self.page_rect(x, y, w, h),
                style,
                fill: self.fill_colour,
                stroke: self.draw_colour,
            };
            self.page_mut()?.add_rect(layout);
        }

        if !text.is_empty() {
            let k = self.unit.scale();
            let (w_pt, h_pt) = (Pt(w * k), Pt(h * k));
            let size = self.current.size;
            let style = self.current.style;
            let font = &self.fonts[self.current.id];
            let text_width = font.text_width(text, size);
            let ascent = font.ascent(size);
            let descent = font.descent(size);
            let (underline_offset, rule_thickness) = font.underline_metrics(size);
            let strikeout_offset = font.strikeout_position(size);

            let tx = Pt(x * k)
                + match align.horizontal {
                    HAlign::Left => Pt(0.0),
                    HAlign::Centre => (w_pt - text_width) * 0.5,
                    HAlign::Right => w_pt - text_width,
                };
            let baseline_from_top = match align.vertical {
                VAlign::Top => ascent,
                VAlign::Middle => (h_pt + ascent + descent) * 0.5,
                VAlign::Bottom => h_pt + descent,
                VAlign::Baseline => h_pt,
            };
            let ty = self.page_dims.1 - Pt(y * k) - baseline_from_top;

            let span = SpanLayout {
                text: text.to_string(),
                font: SpanFont {
                    id: self.current.id,
                    size,
                },
                colour: self.text_colour,
                coords: (tx, ty),
            };
            let draw_colour = self.draw_colour;
            let page = self.page_mut()?;
            page.add_span(span);

            if style.underline {
                page.add_rule(RuleLayout {
                    from: (tx, ty + underline_offset),
                    to: (tx + text_width, ty + underline_offset),
                    thickness: rule_thickness,
                    colour: draw_colour,
                });
            }
            if style.strikeout {
                page.add_rule(RuleLayout {
                    from: (tx, ty + strikeout_offset),
                    to: (tx + text_width, ty + strikeout_offset),
                    thickness: rule_thickness,
                    colour: draw_colour,
                });
            }
        } else {
            // an empty cell still needs a page to draw on
            self.page_mut()?;
        }

        self.cursor.0 = x + w;
        self.last_cell_height = h;
        Ok(())
    }

    /// Line break: the cursor returns to the left margin and moves down by
    /// `h` document units. A negative `h` moves down by the height of the
    /// last placed cell.
    pub fn line_break(&mut self, h: f32) {
        self.cursor.0 = self.margins.left;
        self.cursor.1 += if h < 0.0 { self.last_cell_height } else { h };
    }

    fn page_mut(&mut self) -> Result<&mut Page, Error> {
        let id = self.current_page.ok_or(Error::NoPage)?;
        self.pages.get_mut(id).ok_or(Error::PageMissing)
    }

    /// Convert a top-down box in document units into a PDF-space rectangle
    fn page_rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        let k = self.unit.scale();
        let page_h = self.page_dims.1;
        Rect {
            x1: Pt(x * k),
            y1: page_h - Pt((y + h) * k),
            x2: Pt((x + w) * k),
            y2: page_h - Pt(y * k),
        }
    }

    /// Write the entire document to the writer. Note: although this can
    /// write to arbitrary streams, the document is rendered in memory first;
    /// very large documents allocate accordingly.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), Error> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            ..
        } = self;

        debug!(
            "writing document: {} pages, {} fonts",
            page_order.len(),
            fonts.len()
        );

        let mut refs = ObjectIds::new();
        let catalog_id = refs.entry(ObjectKind::Catalog);
        let page_tree_id = refs.entry(ObjectKind::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = page_order
            .iter()
            .enumerate()
            .map(|(i, _)| refs.entry(ObjectKind::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id, &mut writer);
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(Error::PageMissing)?;
            page.write(&mut refs, page_index, &fonts, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

fn core_families() -> HashMap<String, FontFamily> {
    use CoreFont::*;
    let helvetica = FontFamily::core([
        Some(Helvetica),
        Some(HelveticaBold),
        Some(HelveticaOblique),
        Some(HelveticaBoldOblique),
    ]);
    let mut families = HashMap::new();
    families.insert(
        "courier".to_string(),
        FontFamily::core([
            Some(Courier),
            Some(CourierBold),
            Some(CourierOblique),
            Some(CourierBoldOblique),
        ]),
    );
    families.insert("helvetica".to_string(), helvetica.clone());
    families.insert("arial".to_string(), helvetica);
    families.insert(
        "times".to_string(),
        FontFamily::core([
            Some(TimesRoman),
            Some(TimesBold),
            Some(TimesItalic),
            Some(TimesBoldItalic),
        ]),
    );
    families.insert(
        "symbol".to_string(),
        FontFamily::core([Some(Symbol), None, None, None]),
    );
    families.insert(
        "zapfdingbats".to_string(),
        FontFamily::core([Some(ZapfDingbats), None, None, None]),
    );
    families
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageContents;
    use pretty_assertions::assert_eq;

    fn doc() -> Document {
        Document::new(Orientation::Portrait, Unit::Pt, PageSize::A4, ".")
    }

    #[test]
    fn unknown_family_is_rejected() {
        let mut d = doc();
        assert!(matches!(
            d.set_font("papyrus", FontStyle::REGULAR, 12.0),
            Err(Error::UnknownFont { .. })
        ));
        // the current font is untouched by the failed selection
        assert!(d.set_font("Arial", FontStyle::BOLD, 10.0).is_ok());
    }

    #[test]
    fn style_change_switches_the_face() {
        let mut d = doc();
        d.set_font("helvetica", FontStyle::REGULAR, 10.0).unwrap();
        let regular = d.current.id;
        d.set_font_style(FontStyle::BOLD);
        assert_ne!(d.current.id, regular);
        d.set_font_style(FontStyle::REGULAR);
        assert_eq!(d.current.id, regular);
    }

    #[test]
    fn drawing_without_a_page_fails() {
        let mut d = doc();
        assert!(matches!(
            d.rect(0.0, 0.0, 10.0, 10.0, RectStyle::Fill),
            Err(Error::NoPage)
        ));
        d.add_page();
        assert!(d.rect(0.0, 0.0, 10.0, 10.0, RectStyle::Fill).is_ok());
    }

    #[test]
    fn cell_advances_the_cursor_and_records_height() {
        let mut d = doc();
        d.add_page();
        d.set_xy(10.0, 20.0);
        d.cell(50.0, 5.0, "hi", false, Alignment::default(), false)
            .unwrap();
        assert_eq!(d.cursor(), (60.0, 20.0));
        d.line_break(-1.0);
        assert_eq!(d.cursor(), (d.margins().left, 25.0));
        d.line_break(7.0);
        assert_eq!(d.cursor().1, 32.0);
    }

    #[test]
    fn cell_places_the_box_in_page_space() {
        let mut d = doc();
        d.add_page();
        d.set_xy(0.0, 0.0);
        d.cell(40.0, 10.0, "x", true, Alignment::default(), true)
            .unwrap();
        let page = &d.pages[d.page_order[0]];
        assert_eq!(page.rect_count(), 1);
        assert_eq!(page.span_count(), 1);
        let rect = page
            .contents
            .iter()
            .find_map(|c| match c {
                PageContents::Rect(r) => Some(r.clone()),
                _ => None,
            })
            .unwrap();
        let (_, page_h) = d.page_dimensions();
        assert_eq!(rect.style, RectStyle::FillOutline);
        assert_eq!(rect.rect.x1, Pt(0.0));
        assert_eq!(rect.rect.y2, page_h);
        assert!((rect.rect.height().0 - 10.0).abs() < 1e-4);
    }

    #[test]
    fn empty_cell_still_advances_but_places_nothing() {
        let mut d = doc();
        d.add_page();
        d.set_xy(5.0, 5.0);
        d.cell(20.0, 4.0, "", false, Alignment::default(), false)
            .unwrap();
        assert_eq!(d.cursor(), (25.0, 5.0));
        assert_eq!(d.pages[d.page_order[0]].span_count(), 0);
    }

    #[test]
    fn writes_a_pdf_header_and_trailer() {
        let mut d = doc();
        d.add_page();
        d.set_xy(10.0, 10.0);
        d.cell(100.0, 12.0, "hello", false, Alignment::default(), false)
            .unwrap();
        d.set_info(Info::new().with_title("test"));
        let mut bytes: Vec<u8> = Vec::new();
        d.write(&mut bytes).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len().saturating_sub(64)..]).to_string();
        assert!(tail.contains("%%EOF"));
    }
}
