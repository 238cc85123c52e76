use crate::corefont::CoreFont;
use crate::error::Error;
use crate::refs::{ObjectIds, ObjectKind};
use crate::units::Pt;
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Str,
};
use std::str::FromStr;

/// Style flags for the current font. Bold and italic select the face variant
/// within a family; underline and strikeout are drawn as rules by the cell
/// operation and apply to any face.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikeout: bool,
}

impl FontStyle {
    pub const REGULAR: FontStyle = FontStyle {
        bold: false,
        italic: false,
        underline: false,
        strikeout: false,
    };

    pub const BOLD: FontStyle = FontStyle {
        bold: true,
        italic: false,
        underline: false,
        strikeout: false,
    };

    pub const ITALIC: FontStyle = FontStyle {
        bold: false,
        italic: true,
        underline: false,
        strikeout: false,
    };

    /// Index of the face variant this style selects within a family:
    /// regular, bold, italic, bold-italic
    pub(crate) fn slot(self) -> usize {
        match (self.bold, self.italic) {
            (false, false) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (true, true) => 3,
        }
    }
}

impl FromStr for FontStyle {
    type Err = Error;

    /// Parses any combination of `B` (bold), `I` (italic), `U` (underline),
    /// and `S` (strikeout), case-insensitive. The empty string is regular.
    fn from_str(s: &str) -> Result<FontStyle, Error> {
        let mut style = FontStyle::REGULAR;
        for ch in s.chars() {
            match ch.to_ascii_uppercase() {
                'B' => style.bold = true,
                'I' => style.italic = true,
                'U' => style.underline = true,
                'S' => style.strikeout = true,
                _ => {
                    return Err(Error::InvalidFontStyle {
                        code: s.to_string(),
                    })
                }
            }
        }
        Ok(style)
    }
}

/// A font usable on the document: either one of the standard unembedded
/// Type1 fonts, or a TTF/OTF face that will be embedded in its entirety in
/// the generated PDF (so large faces may dramatically increase output size).
pub struct Font {
    pub(crate) source: FontSource,
}

pub(crate) enum FontSource {
    Core(CoreFont),
    Embedded(OwnedFace),
}

impl Font {
    /// Wrap one of the standard fonts
    pub fn core(core: CoreFont) -> Font {
        Font {
            source: FontSource::Core(core),
        }
    }

    /// Parse a TTF/OTF font from raw bytes
    pub fn load(bytes: Vec<u8>) -> Result<Font, Error> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font {
            source: FontSource::Embedded(face),
        })
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self.source, FontSource::Embedded(_))
    }

    /// Horizontal advance of one character at the given size
    pub fn char_width(&self, ch: char, size: Pt) -> Pt {
        match &self.source {
            FontSource::Core(core) => size * (core.char_width(ch) as f32 / 1000.0),
            FontSource::Embedded(face) => {
                let face = face.as_face_ref();
                let scaling = size / face.units_per_em() as f32;
                let gid = face
                    .glyph_index(ch)
                    .or_else(|| face.glyph_index('\u{FFFD}'))
                    .or_else(|| face.glyph_index('?'));
                match gid {
                    Some(gid) => scaling * face.glyph_hor_advance(gid).unwrap_or_default() as f32,
                    None => Pt(0.0),
                }
            }
        }
    }

    /// Rendered width of a string at the given size. Newlines measure as
    /// ordinary missing glyphs; wrap first if the text may contain them.
    pub fn text_width(&self, text: &str, size: Pt) -> Pt {
        text.chars().map(|ch| self.char_width(ch, size)).sum()
    }

    /// Distance from the baseline to the top of the face at the given size
    pub fn ascent(&self, size: Pt) -> Pt {
        match &self.source {
            FontSource::Core(core) => size * (core.ascender() as f32 / 1000.0),
            FontSource::Embedded(face) => {
                let face = face.as_face_ref();
                size / face.units_per_em() as f32 * face.ascender() as f32
            }
        }
    }

    /// Distance from the baseline to the bottom of the face at the given
    /// size. Usually negative.
    pub fn descent(&self, size: Pt) -> Pt {
        match &self.source {
            FontSource::Core(core) => size * (core.descender() as f32 / 1000.0),
            FontSource::Embedded(face) => {
                let face = face.as_face_ref();
                size / face.units_per_em() as f32 * face.descender() as f32
            }
        }
    }

    /// Vertical offset between consecutive baselines at the given size
    pub fn line_height(&self, size: Pt) -> Pt {
        match &self.source {
            FontSource::Core(_) => self.ascent(size) - self.descent(size),
            FontSource::Embedded(face) => {
                let face = face.as_face_ref();
                let scaling = size / face.units_per_em() as f32;
                let leading = scaling * face.line_gap() as f32;
                let ascent = scaling * face.ascender() as f32;
                let descent = scaling * face.descender() as f32;
                leading + ascent - descent
            }
        }
    }

    /// Offset of the underline rule relative to the baseline (negative is
    /// below), and its thickness
    pub(crate) fn underline_metrics(&self, size: Pt) -> (Pt, Pt) {
        if let FontSource::Embedded(face) = &self.source {
            if let Some(m) = face.as_face_ref().underline_metrics() {
                let scaling = size / face.as_face_ref().units_per_em() as f32;
                return (scaling * m.position as f32, scaling * m.thickness as f32);
            }
        }
        (size * -0.1, size * 0.05)
    }

    /// Offset of the strikeout rule relative to the baseline
    pub(crate) fn strikeout_position(&self, size: Pt) -> Pt {
        size * 0.25
    }

    pub(crate) fn glyph_id(&self, ch: char) -> Option<u16> {
        match &self.source {
            FontSource::Core(_) => None,
            FontSource::Embedded(face) => face.as_face_ref().glyph_index(ch).map(|i| i.0),
        }
    }

    /// Glyph id a character renders as, substituting the replacement glyph
    /// and finally `?` for characters the face does not cover
    pub(crate) fn shown_glyph_id(&self, ch: char) -> u16 {
        self.glyph_id(ch)
            .or_else(|| self.glyph_id('\u{FFFD}'))
            .or_else(|| self.glyph_id('?'))
            .unwrap_or(0)
    }

    pub(crate) fn write(&self, refs: &mut ObjectIds, id: Id<Font>, writer: &mut Pdf) {
        let index = id.index();
        match &self.source {
            FontSource::Core(core) => {
                let font_ref = refs.entry(ObjectKind::Font(index));
                let mut type1 = writer.type1_font(font_ref);
                type1.base_font(Name(core.postscript_name().as_bytes()));
                // Symbol and ZapfDingbats carry their own built-in encodings
                if !matches!(core, CoreFont::Symbol | CoreFont::ZapfDingbats) {
                    type1.encoding_predefined(Name(b"WinAnsiEncoding"));
                }
            }
            FontSource::Embedded(face) => {
                self.write_embedded(refs, index, face, writer);
            }
        }
    }

    fn write_embedded(
        &self,
        refs: &mut ObjectIds,
        index: usize,
        face: &OwnedFace,
        writer: &mut Pdf,
    ) {
        let descriptor_ref = self.write_descriptor(refs, index, face, writer);
        let to_unicode_ref = self.write_to_unicode(refs, index, face, writer);

        let face_ref = face.as_face_ref();
        let scaling = 1000.0 / face_ref.units_per_em() as f32;
        let glyphs = glyph_map(face);

        let cid_ref = refs.entry(ObjectKind::CidFont(index));
        let mut cid = writer.cid_font(cid_ref);
        cid.subtype(CidFontType::Type2);
        cid.base_font(Name(format!("F{index}").as_bytes()));
        cid.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid.font_descriptor(descriptor_ref);

        // glyph widths, emitted as runs of consecutive glyph ids
        let mut widths = cid.widths();
        let mut run_start: u16 = 0;
        let mut run: Vec<f32> = Vec::new();
        for &(gid, _) in glyphs.iter() {
            if !run.is_empty() && gid != run_start + run.len() as u16 {
                widths.consecutive(run_start, std::mem::take(&mut run));
            }
            if run.is_empty() {
                run_start = gid;
            }
            run.push(
                face_ref
                    .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                    .unwrap_or_default() as f32
                    * scaling,
            );
        }
        if !run.is_empty() {
            widths.consecutive(run_start, run);
        }
        widths.finish();

        cid.default_width(1000.0);
        cid.cid_to_gid_map_predefined(Name(b"Identity"));
        cid.finish();

        let font_ref = refs.entry(ObjectKind::Font(index));
        let mut type0 = writer.type0_font(font_ref);
        type0.base_font(Name(format!("F{index}").as_bytes()));
        type0.encoding_predefined(Name(b"Identity-H"));
        type0.descendant_font(cid_ref);
        type0.to_unicode(to_unicode_ref);
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectIds,
        index: usize,
        face: &OwnedFace,
        writer: &mut Pdf,
    ) -> pdf_writer::Ref {
        let data_ref = refs.entry(ObjectKind::FontData(index));
        writer
            .stream(data_ref, face.as_slice())
            .pair(Name(b"Length1"), face.as_slice().len() as i32);

        let face_ref = face.as_face_ref();
        let scaling = 1000.0 / face_ref.units_per_em() as f32;

        let descriptor_ref = refs.entry(ObjectKind::FontDescriptor(index));
        let mut descriptor = writer.font_descriptor(descriptor_ref);
        descriptor.name(Name(format!("F{index}").as_bytes()));

        let mut flags = FontFlags::empty();
        if face_ref.is_monospaced() {
            flags.set(FontFlags::FIXED_PITCH, true);
        }
        if face_ref.is_italic() {
            flags.set(FontFlags::ITALIC, true);
        }
        descriptor.flags(flags);

        let bbox = face_ref.global_bounding_box();
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(face_ref.italic_angle());
        descriptor.ascent(face_ref.ascender() as f32 * scaling);
        descriptor.descent(face_ref.descender() as f32 * scaling);
        descriptor.leading(face_ref.line_gap() as f32 * scaling);
        descriptor.cap_height(
            face_ref
                .capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(1000.0),
        );
        descriptor.x_height(face_ref.x_height().unwrap_or_default() as f32 * scaling);
        descriptor.stem_v(80.0);
        descriptor.font_file2(data_ref);

        descriptor_ref
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectIds,
        index: usize,
        face: &OwnedFace,
        writer: &mut Pdf,
    ) -> pdf_writer::Ref {
        let mut cmap = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo\n\
             << /Registry (Adobe)\n\
             /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        let glyphs = glyph_map(face);
        for block in glyphs.chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", block.len()));
            for &(gid, ch) in block {
                cmap.push_str(&format!("<{gid:04x}> <{:04x}>\n", ch as u32));
            }
            cmap.push_str("endbfchar\n");
        }
        cmap.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            cmap.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        let to_unicode_ref = refs.entry(ObjectKind::ToUnicode(index));
        writer
            .stream(to_unicode_ref, compressed.as_slice())
            .filter(Filter::FlateDecode);

        to_unicode_ref
    }
}

/// Glyph id to character mapping from the face's unicode cmap subtables,
/// sorted by glyph id
fn glyph_map(face: &OwnedFace) -> Vec<(u16, char)> {
    let mut map: Vec<(u16, char)> = Vec::new();
    if let Some(cmap) = face.as_face_ref().tables().cmap {
        for subtable in cmap.subtables.into_iter().filter(|t| t.is_unicode()) {
            subtable.codepoints(|codepoint| {
                if let Ok(ch) = char::try_from(codepoint) {
                    if let Some(gid) = subtable.glyph_index(codepoint).filter(|gid| gid.0 > 0) {
                        map.push((gid.0, ch));
                    }
                }
            });
        }
    }
    map.sort_by_key(|&(gid, _)| gid);
    map.dedup_by_key(|&mut (gid, _)| gid);
    map
}

/// The face variants registered under one family name. Styles with no
/// registered variant fall back to the regular face.
#[derive(Debug, Default, Clone)]
pub(crate) struct FontFamily {
    variants: [Option<FaceSlot>; 4],
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum FaceSlot {
    Core(CoreFont),
    Loaded(Id<Font>),
}

impl FontFamily {
    pub fn core(variants: [Option<CoreFont>; 4]) -> FontFamily {
        FontFamily {
            variants: variants.map(|v| v.map(FaceSlot::Core)),
        }
    }

    pub fn set(&mut self, style: FontStyle, slot: FaceSlot) {
        self.variants[style.slot()] = Some(slot);
    }

    pub fn resolve(&self, style: FontStyle) -> Option<FaceSlot> {
        self.variants[style.slot()].or(self.variants[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_style_codes() {
        assert_eq!("".parse::<FontStyle>().unwrap(), FontStyle::REGULAR);
        assert_eq!("B".parse::<FontStyle>().unwrap(), FontStyle::BOLD);
        let biu = "biU".parse::<FontStyle>().unwrap();
        assert!(biu.bold && biu.italic && biu.underline && !biu.strikeout);
        assert!("BX".parse::<FontStyle>().is_err());
    }

    #[test]
    fn style_slots_cover_the_four_variants() {
        assert_eq!(FontStyle::REGULAR.slot(), 0);
        assert_eq!(FontStyle::BOLD.slot(), 1);
        assert_eq!(FontStyle::ITALIC.slot(), 2);
        assert_eq!("BI".parse::<FontStyle>().unwrap().slot(), 3);
    }

    #[test]
    fn core_font_measures_through_the_table() {
        let font = Font::core(CoreFont::Helvetica);
        assert!((font.text_width("iW", Pt(10.0)).0 - 11.66).abs() < 1e-4);
        assert!((font.ascent(Pt(10.0)).0 - 7.18).abs() < 1e-4);
        assert!(font.descent(Pt(10.0)).0 < 0.0);
    }

    #[test]
    fn missing_family_variant_falls_back_to_regular() {
        let family = FontFamily::core([Some(CoreFont::Symbol), None, None, None]);
        assert_eq!(
            family.resolve(FontStyle::BOLD),
            Some(FaceSlot::Core(CoreFont::Symbol))
        );
    }
}
