use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EgaspError {
    /// A token (concentration kind, property key) matched none of the
    /// accepted spellings.
    #[error("invalid {field}: {value:?}")]
    InvalidArgument { field: &'static str, value: String },

    /// A scalar input fell outside its closed interval.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Each input passed validation, but the combination lies outside
    /// the sampled interpolation envelope.
    #[error("{property} has no sampled data at {}: {detail}", point(.temperature, .volume_pct))]
    Domain {
        property: &'static str,
        /// Query temperature (°C); `None` for concentration-only lookups.
        temperature: Option<f64>,
        volume_pct: f64,
        detail: String,
    },

    /// The correlation dataset is missing or corrupt.  No query can be
    /// answered.
    #[error("correlation dataset error: {0}")]
    Dataset(String),
}

impl EgaspError {
    /// `true` when the whole session must stop (as opposed to a single
    /// rejected query).
    pub fn is_fatal(&self) -> bool {
        matches!(self, EgaspError::Dataset(_))
    }
}

fn point(temperature: &Option<f64>, volume_pct: &f64) -> String {
    match temperature {
        Some(t) => format!("T = {t} °C, {volume_pct} % volume"),
        None => format!("{volume_pct} % volume"),
    }
}

pub type Result<T> = std::result::Result<T, EgaspError>;
