//! The standard unembedded PDF Type1 fonts and their metrics.
//!
//! Width tables cover the printable ASCII range (0x20..=0x7E) at 1000 units
//! per em, taken from the Adobe core font metrics. Codepoints outside that
//! range measure as the face's fallback width and are shown as `?` in the
//! output. Courier is fixed-pitch at 600 for every glyph; Symbol and
//! ZapfDingbats are measured entirely at the fallback width.

/// One of the 14 standard PDF fonts. These never embed font data; viewers
/// supply the faces themselves.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CoreFont {
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Symbol,
    ZapfDingbats,
}

impl CoreFont {
    /// The PostScript name written into the font dictionary's `BaseFont`
    pub fn postscript_name(self) -> &'static str {
        use CoreFont::*;
        match self {
            Courier => "Courier",
            CourierBold => "Courier-Bold",
            CourierOblique => "Courier-Oblique",
            CourierBoldOblique => "Courier-BoldOblique",
            Helvetica => "Helvetica",
            HelveticaBold => "Helvetica-Bold",
            HelveticaOblique => "Helvetica-Oblique",
            HelveticaBoldOblique => "Helvetica-BoldOblique",
            TimesRoman => "Times-Roman",
            TimesBold => "Times-Bold",
            TimesItalic => "Times-Italic",
            TimesBoldItalic => "Times-BoldItalic",
            Symbol => "Symbol",
            ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Horizontal advance of `ch` in 1/1000 em
    pub fn char_width(self, ch: char) -> u16 {
        use CoreFont::*;
        match self {
            Courier | CourierBold | CourierOblique | CourierBoldOblique => COURIER_WIDTH,
            Symbol | ZapfDingbats => self.fallback_width(),
            Helvetica | HelveticaOblique => ascii_width(&HELVETICA, ch),
            HelveticaBold | HelveticaBoldOblique => ascii_width(&HELVETICA_BOLD, ch),
            TimesRoman => ascii_width(&TIMES_ROMAN, ch),
            TimesBold => ascii_width(&TIMES_BOLD, ch),
            TimesItalic => ascii_width(&TIMES_ITALIC, ch),
            TimesBoldItalic => ascii_width(&TIMES_BOLD_ITALIC, ch),
        }
    }

    /// Width used for codepoints the tables do not cover, in 1/1000 em
    pub fn fallback_width(self) -> u16 {
        use CoreFont::*;
        match self {
            Courier | CourierBold | CourierOblique | CourierBoldOblique => COURIER_WIDTH,
            Helvetica | HelveticaBold | HelveticaOblique | HelveticaBoldOblique => 556,
            TimesRoman | TimesBold | TimesItalic | TimesBoldItalic => 500,
            Symbol | ZapfDingbats => 600,
        }
    }

    /// Distance from the baseline to the top of the face, in 1/1000 em
    pub fn ascender(self) -> i16 {
        use CoreFont::*;
        match self {
            Courier | CourierBold | CourierOblique | CourierBoldOblique => 629,
            Helvetica | HelveticaBold | HelveticaOblique | HelveticaBoldOblique => 718,
            TimesRoman | TimesBold | TimesItalic | TimesBoldItalic => 683,
            Symbol | ZapfDingbats => 700,
        }
    }

    /// Distance from the baseline to the bottom of the face, in 1/1000 em.
    /// Negative, as the descender sits below the baseline.
    pub fn descender(self) -> i16 {
        use CoreFont::*;
        match self {
            Courier | CourierBold | CourierOblique | CourierBoldOblique => -157,
            Helvetica | HelveticaBold | HelveticaOblique | HelveticaBoldOblique => -207,
            TimesRoman | TimesBold | TimesItalic | TimesBoldItalic => -217,
            Symbol | ZapfDingbats => -200,
        }
    }
}

fn ascii_width(table: &AsciiWidths, ch: char) -> u16 {
    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) {
        table.widths[(code - 0x20) as usize]
    } else {
        table.fallback
    }
}

const COURIER_WIDTH: u16 = 600;

struct AsciiWidths {
    widths: [u16; 95],
    fallback: u16,
}

#[rustfmt::skip]
static HELVETICA: AsciiWidths = AsciiWidths {
    widths: [
        // 0x20 ' ' .. 0x2F '/'
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0x30 '0' .. 0x3F '?'
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
        // 0x40 '@' .. 0x4F 'O'
        1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
        // 0x50 'P' .. 0x5F '_'
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
        // 0x60 '`' .. 0x6F 'o'
        333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
        // 0x70 'p' .. 0x7E '~'
        556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
    ],
    fallback: 556,
};

#[rustfmt::skip]
static HELVETICA_BOLD: AsciiWidths = AsciiWidths {
    widths: [
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
        975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
        667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
        333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
        611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
    ],
    fallback: 556,
};

#[rustfmt::skip]
static TIMES_ROMAN: AsciiWidths = AsciiWidths {
    widths: [
        250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
        921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
        556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
        333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
        500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
    ],
    fallback: 500,
};

#[rustfmt::skip]
static TIMES_BOLD: AsciiWidths = AsciiWidths {
    widths: [
        250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
        930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
        611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
        333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
        556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
    ],
    fallback: 500,
};

#[rustfmt::skip]
static TIMES_ITALIC: AsciiWidths = AsciiWidths {
    widths: [
        250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
        920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
        611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
        333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
        500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
    ],
    fallback: 500,
};

#[rustfmt::skip]
static TIMES_BOLD_ITALIC: AsciiWidths = AsciiWidths {
    widths: [
        250, 389, 555, 500, 500, 833, 778, 278, 333, 333, 500, 570, 250, 333, 250, 278,
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
        832, 667, 667, 667, 722, 667, 667, 722, 778, 389, 500, 667, 611, 889, 722, 722,
        611, 722, 667, 556, 611, 722, 667, 889, 667, 611, 611, 333, 278, 333, 570, 500,
        333, 500, 500, 444, 500, 444, 333, 500, 556, 278, 278, 500, 278, 778, 556, 500,
        500, 500, 389, 389, 278, 556, 444, 667, 500, 444, 389, 348, 220, 348, 570,
    ],
    fallback: 500,
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn courier_is_fixed_pitch() {
        for ch in [' ', 'W', 'i', '~', 'Ü'] {
            assert_eq!(CoreFont::Courier.char_width(ch), 600);
            assert_eq!(CoreFont::CourierBoldOblique.char_width(ch), 600);
        }
    }

    #[test]
    fn helvetica_spot_widths() {
        assert_eq!(CoreFont::Helvetica.char_width(' '), 278);
        assert_eq!(CoreFont::Helvetica.char_width('W'), 944);
        assert_eq!(CoreFont::Helvetica.char_width('i'), 222);
        assert_eq!(CoreFont::HelveticaBold.char_width('i'), 278);
    }

    #[test]
    fn non_ascii_measures_as_fallback() {
        assert_eq!(
            CoreFont::TimesRoman.char_width('é'),
            CoreFont::TimesRoman.fallback_width()
        );
    }

    #[test]
    fn styles_share_a_family_fallback() {
        assert_eq!(
            CoreFont::Helvetica.fallback_width(),
            CoreFont::HelveticaOblique.fallback_width()
        );
    }
}
