//! Supported paper formats and page orientation.

use crate::units::Pt;
use std::str::FromStr;

use crate::error::Error;

const MM_TO_PT: f32 = 72.0 / 25.4;

/// A paper format. Dimensions are portrait-normalized (width <= height);
/// apply an [Orientation] to get the final page box.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum PageSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

impl PageSize {
    /// Portrait dimensions in points as (width, height)
    pub fn dimensions(self) -> (Pt, Pt) {
        match self {
            PageSize::A3 => (Pt(297.0 * MM_TO_PT), Pt(420.0 * MM_TO_PT)),
            PageSize::A4 => (Pt(210.0 * MM_TO_PT), Pt(297.0 * MM_TO_PT)),
            PageSize::A5 => (Pt(148.0 * MM_TO_PT), Pt(210.0 * MM_TO_PT)),
            PageSize::Letter => (Pt(8.5 * 72.0), Pt(11.0 * 72.0)),
            PageSize::Legal => (Pt(8.5 * 72.0), Pt(14.0 * 72.0)),
            PageSize::Tabloid => (Pt(11.0 * 72.0), Pt(17.0 * 72.0)),
        }
    }
}

impl FromStr for PageSize {
    type Err = Error;

    /// Parses a format name, case-insensitive. The empty string selects A4.
    fn from_str(s: &str) -> Result<PageSize, Error> {
        match s.to_ascii_lowercase().as_str() {
            "" | "a4" => Ok(PageSize::A4),
            "a3" => Ok(PageSize::A3),
            "a5" => Ok(PageSize::A5),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            "tabloid" => Ok(PageSize::Tabloid),
            _ => Err(Error::UnknownPageSize {
                size: s.to_string(),
            }),
        }
    }
}

/// Which way the page turns
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Apply the orientation to a portrait-normalized size
    pub fn apply(self, size: (Pt, Pt)) -> (Pt, Pt) {
        match self {
            Orientation::Portrait => size,
            Orientation::Landscape => (size.1, size.0),
        }
    }
}

impl FromStr for Orientation {
    type Err = Error;

    /// Parses `"P"`/`"Portrait"` or `"L"`/`"Landscape"`, case-insensitive.
    /// The empty string selects portrait.
    fn from_str(s: &str) -> Result<Orientation, Error> {
        match s.to_ascii_lowercase().as_str() {
            "" | "p" | "portrait" => Ok(Orientation::Portrait),
            "l" | "landscape" => Ok(Orientation::Landscape),
            _ => Err(Error::UnknownOrientation {
                orientation: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn a4_is_portrait_normalized() {
        let (w, h) = PageSize::A4.dimensions();
        assert!(w < h);
        assert!((w.0 - 595.276).abs() < 1e-2);
        assert!((h.0 - 841.89).abs() < 1e-2);
    }

    #[test]
    fn landscape_swaps_the_axes() {
        let portrait = PageSize::Letter.dimensions();
        let landscape = Orientation::Landscape.apply(portrait);
        assert_eq!(landscape, (portrait.1, portrait.0));
    }

    #[test]
    fn parses_names_with_defaults() {
        assert_eq!("".parse::<PageSize>().unwrap(), PageSize::A4);
        assert_eq!("LETTER".parse::<PageSize>().unwrap(), PageSize::Letter);
        assert!("b5".parse::<PageSize>().is_err());
        assert_eq!("".parse::<Orientation>().unwrap(), Orientation::Portrait);
        assert_eq!(
            "Landscape".parse::<Orientation>().unwrap(),
            Orientation::Landscape
        );
        assert!("sideways".parse::<Orientation>().is_err());
    }
}
