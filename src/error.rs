use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse a font file
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    /// A font family that was never registered on the document was selected
    #[error("unknown font family {name:?}")]
    UnknownFont { name: String },

    /// A measurement unit string outside pt/mm/cm/in
    #[error("unknown measurement unit {unit:?}")]
    UnknownUnit { unit: String },

    /// A page size string outside the supported formats
    #[error("unknown page size {size:?}")]
    UnknownPageSize { size: String },

    /// A page orientation string outside P/Portrait/L/Landscape
    #[error("unknown page orientation {orientation:?}")]
    UnknownOrientation { orientation: String },

    /// An alignment code containing characters outside {L,C,R} x {T,M,B,A},
    /// or repeating an axis
    #[error("invalid alignment code {code:?}")]
    InvalidAlignment { code: String },

    /// A font style code containing characters outside B/I/U/S
    #[error("invalid font style code {code:?}")]
    InvalidFontStyle { code: String },

    /// The title, subtitle, and text slices passed to a row render differ in
    /// length. Raised before anything is drawn.
    #[error("row column counts differ: {titles} titles, {subtitles} subtitles, {texts} texts")]
    ColumnCountMismatch {
        titles: usize,
        subtitles: usize,
        texts: usize,
    },

    /// A geometric parameter that must be strictly positive was not
    #[error("{what} must be positive, got {value}")]
    InvalidGeometry { what: &'static str, value: f32 },

    /// A drawing operation was issued before any page was added
    #[error("no page to draw on; call add_page first")]
    NoPage,

    /// A page id present in the page order was missing from the page arena
    #[error("page listed in the page order is missing from the document")]
    PageMissing,
}
