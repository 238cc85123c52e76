use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};
use std::str::FromStr;

use crate::error::Error;

/// A length in typographic points (1/72 inch). All geometry stored on pages
/// and all font metrics use this unit; user-facing APIs convert through the
/// document's configured [Unit].
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, Sum, From,
    Into, Display,
)]
pub struct Pt(pub f32);

impl Mul<f32> for Pt {
    type Output = Pt;
    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;
    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Pt {
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }
}

/// A length in millimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, From, Into, Display)]
pub struct Mm(pub f32);

/// A length in centimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, From, Into, Display)]
pub struct Cm(pub f32);

/// A length in inches
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, From, Into, Display)]
pub struct In(pub f32);

pub(crate) const MM_PER_INCH: f32 = 25.4;
pub(crate) const PT_PER_INCH: f32 = 72.0;

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt(mm.0 * PT_PER_INCH / MM_PER_INCH)
    }
}

impl From<Cm> for Pt {
    fn from(cm: Cm) -> Pt {
        Pt(cm.0 * 10.0 * PT_PER_INCH / MM_PER_INCH)
    }
}

impl From<In> for Pt {
    fn from(inches: In) -> Pt {
        Pt(inches.0 * PT_PER_INCH)
    }
}

/// The measurement unit for document coordinates and sizes. Font sizes are
/// always specified in points regardless of the document unit.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Unit {
    Pt,
    #[default]
    Mm,
    Cm,
    In,
}

impl Unit {
    /// The number of points that one of this unit spans
    pub fn scale(self) -> f32 {
        match self {
            Unit::Pt => 1.0,
            Unit::Mm => PT_PER_INCH / MM_PER_INCH,
            Unit::Cm => 10.0 * PT_PER_INCH / MM_PER_INCH,
            Unit::In => PT_PER_INCH,
        }
    }

    /// Convert a value expressed in this unit into points
    pub fn to_pt(self, value: f32) -> Pt {
        Pt(value * self.scale())
    }
}

impl FromStr for Unit {
    type Err = Error;

    /// Parses `"pt"`, `"mm"`, `"cm"`, or `"in"` (case-insensitive). An empty
    /// string selects millimetres.
    fn from_str(s: &str) -> Result<Unit, Error> {
        match s.to_ascii_lowercase().as_str() {
            "" | "mm" => Ok(Unit::Mm),
            "pt" => Ok(Unit::Pt),
            "cm" => Ok(Unit::Cm),
            "in" => Ok(Unit::In),
            _ => Err(Error::UnknownUnit {
                unit: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_between_units() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert!((Pt::from(Mm(25.4)).0 - 72.0).abs() < 1e-4);
        assert!((Pt::from(Cm(2.54)).0 - 72.0).abs() < 1e-4);
    }

    #[test]
    fn unit_scale_round_trips() {
        assert_eq!(Unit::Pt.to_pt(10.0), Pt(10.0));
        assert_eq!(Unit::In.to_pt(0.5), Pt(36.0));
        assert!((Unit::Mm.scale() - 2.834_645_7).abs() < 1e-4);
    }

    #[test]
    fn parses_unit_names() {
        assert_eq!("pt".parse::<Unit>().unwrap(), Unit::Pt);
        assert_eq!("MM".parse::<Unit>().unwrap(), Unit::Mm);
        assert_eq!("".parse::<Unit>().unwrap(), Unit::Mm);
        assert!("furlong".parse::<Unit>().is_err());
    }
}
