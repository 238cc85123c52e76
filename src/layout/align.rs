use crate::error::Error;
use std::str::FromStr;

/// Horizontal placement of text within a cell
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum HAlign {
    #[default]
    Left,
    Centre,
    Right,
}

/// Vertical placement of text within a cell
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum VAlign {
    Top,
    #[default]
    Middle,
    Bottom,
    /// The text baseline sits on the bottom edge of the cell
    Baseline,
}

/// How a cell positions its text. Defaults to left-middle.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

impl Alignment {
    pub fn new(horizontal: HAlign, vertical: VAlign) -> Alignment {
        Alignment {
            horizontal,
            vertical,
        }
    }
}

impl FromStr for Alignment {
    type Err = Error;

    /// Parses a code string combining at most one of `L`/`C`/`R` with at
    /// most one of `T`/`M`/`B`/`A`, case-insensitive and in either order.
    /// Omitted axes take the default (left, middle). Unknown characters and
    /// repeated axes are rejected.
    fn from_str(s: &str) -> Result<Alignment, Error> {
        let mut horizontal: Option<HAlign> = None;
        let mut vertical: Option<VAlign> = None;
        for ch in s.chars() {
            let code = ch.to_ascii_uppercase();
            let taken = match code {
                'L' => horizontal.replace(HAlign::Left).is_some(),
                'C' => horizontal.replace(HAlign::Centre).is_some(),
                'R' => horizontal.replace(HAlign::Right).is_some(),
                'T' => vertical.replace(VAlign::Top).is_some(),
                'M' => vertical.replace(VAlign::Middle).is_some(),
                'B' => vertical.replace(VAlign::Bottom).is_some(),
                'A' => vertical.replace(VAlign::Baseline).is_some(),
                _ => {
                    return Err(Error::InvalidAlignment {
                        code: s.to_string(),
                    })
                }
            };
            if taken {
                return Err(Error::InvalidAlignment {
                    code: s.to_string(),
                });
            }
        }
        Ok(Alignment {
            horizontal: horizontal.unwrap_or_default(),
            vertical: vertical.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_code_is_left_middle() {
        let a = "".parse::<Alignment>().unwrap();
        assert_eq!(a, Alignment::new(HAlign::Left, VAlign::Middle));
    }

    #[test]
    fn codes_combine_in_either_order() {
        assert_eq!(
            "CB".parse::<Alignment>().unwrap(),
            Alignment::new(HAlign::Centre, VAlign::Bottom)
        );
        assert_eq!(
            "tr".parse::<Alignment>().unwrap(),
            Alignment::new(HAlign::Right, VAlign::Top)
        );
        assert_eq!(
            "A".parse::<Alignment>().unwrap(),
            Alignment::new(HAlign::Left, VAlign::Baseline)
        );
    }

    #[test]
    fn rejects_unknown_and_repeated_codes() {
        assert!("X".parse::<Alignment>().is_err());
        assert!("LR".parse::<Alignment>().is_err());
        assert!("TMB".parse::<Alignment>().is_err());
    }
}
