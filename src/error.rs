use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum GridError {
    #[error("spacing must be a positive, finite number of inches")]
    /// A zero, negative or non-finite spacing was used as a divisor
    InvalidSpacing,

    #[error("`{0}` is not a 6-digit hex colour")]
    /// The colour string was not `#RRGGBB` (the `#` is optional)
    InvalidColorFormat(String),

    #[error("`{0}` must be a finite number in range")]
    /// A length was NaN, infinite or out of its allowed range
    InvalidNumericInput(&'static str),

    #[error("page count must be at least 1, got {0}")]
    /// Fewer than one page was requested
    InvalidPageCount(u32),

    #[error("paper width and height are fixed by the selected preset")]
    /// Width or height was edited while a non-custom preset is selected
    DimensionsLocked,

    #[error("unknown field `{0}`")]
    /// A form field name that doesn't map onto the layout
    UnknownField(String),

    #[error("unknown paper preset `{0}`")]
    /// A paper preset name that isn't in the table
    UnknownPreset(String),

    #[error("unknown pattern `{0}`")]
    /// A pattern name other than `Grid` or `Dot`
    UnknownPattern(String),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [serde_json] failed to read or write a configuration
    Config(#[from] serde_json::Error),

    #[error("document refers to an object that was never added to it")]
    /// A page, or a form placed on a page, isn't registered with the document
    MissingObject,

    #[error("download has already been released")]
    /// A blob handle that was revoked, expired or never issued
    BlobReleased,
}
