use findex_model::Dimension;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("unknown {dimension} value {value:?}; run `findex choices` to list the values on offer")]
    UnknownChoice { dimension: Dimension, value: String },
}

impl QueryError {
    pub(crate) fn unknown(dimension: Dimension, value: impl Into<String>) -> Self {
        Self::UnknownChoice {
            dimension,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
