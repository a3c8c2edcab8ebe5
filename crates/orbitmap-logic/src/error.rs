use thiserror::Error;

/// Errors raised while building or querying an orbit map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrbitError {
    #[error("orbit `{0}` has no `)` separator")]
    MissingSeparator(String),

    #[error("orbit `{0}` has more than one `)` separator")]
    MalformedOrbit(String),

    #[error("orbit `{0}` has an empty body label")]
    EmptyLabel(String),

    /// A body can only orbit one parent.
    #[error("`{child}` already orbits `{existing}`, cannot also orbit `{attempted}`")]
    DuplicateParent {
        child: String,
        existing: String,
        attempted: String,
    },

    #[error("unknown body `{0}`")]
    UnknownNode(String),

    #[error("no path from `{src}` to `{dst}`")]
    NoPath { src: String, dst: String },

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<OrbitError>,
    },
}

impl OrbitError {
    /// Strip any line-number wrapping and return the underlying error.
    pub fn root_cause(&self) -> &OrbitError {
        match self {
            OrbitError::Line { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, OrbitError>;
