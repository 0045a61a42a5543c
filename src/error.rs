use thiserror::Error;

/// Every failure the crate reports.
///
/// Model math itself never fails; these come from the validation boundary
/// (batch shapes, parameter ranges, grids), from the optional finiteness check
/// on outputs, and from the I/O layers used by the binary.
#[derive(Debug, Error)]
pub enum WaveformError {
    #[error("batch shape mismatch: parameter `{name}` has length {len}, expected 1 or {expected}")]
    BatchShape {
        name: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("invalid parameter `{name}` at batch index {index}: {reason}")]
    InvalidParameter {
        name: &'static str,
        index: usize,
        reason: String,
    },

    #[error("invalid frequency grid: {0}")]
    InvalidFrequencyGrid(String),

    #[error("non-finite {polarization} output at batch index {index}, frequency index {bin}")]
    NonFinite {
        polarization: &'static str,
        index: usize,
        bin: usize,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Parse(String),

    #[error("{failed} of {total} reference fixture(s) outside tolerance")]
    ReferenceMismatch { failed: usize, total: usize },
}

impl WaveformError {
    pub fn invalid(name: &'static str, index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            index,
            reason: reason.into(),
        }
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Process exit code used by the `gwf` binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io { .. } => 2,
            Self::Parse(_) => 2,
            Self::BatchShape { .. } => 3,
            Self::InvalidParameter { .. } => 3,
            Self::InvalidFrequencyGrid(_) => 3,
            Self::NonFinite { .. } => 4,
            Self::ReferenceMismatch { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_group_by_failure_kind() {
        let io = WaveformError::io("read", std::io::Error::other("boom"));
        assert_eq!(io.exit_code(), 2);
        assert_eq!(WaveformError::invalid("chi1", 0, "spin above 1").exit_code(), 3);
        let nf = WaveformError::NonFinite {
            polarization: "plus",
            index: 1,
            bin: 2,
        };
        assert_eq!(nf.exit_code(), 4);
    }

    #[test]
    fn messages_name_the_offending_parameter() {
        let err = WaveformError::BatchShape {
            name: "distance",
            len: 3,
            expected: 4,
        };
        assert!(err.to_string().contains("distance"));
    }
}
