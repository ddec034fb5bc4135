use thiserror::Error;

/// Errors produced when reading through a cursor.
///
/// Cursors themselves never fail to advance; problems only surface once a
/// cursor is dereferenced against the adapter that produced it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("position {position} is past the end of source {slot} (length {len})")]
    PastEnd { slot: usize, position: usize, len: usize },
    #[error("running index overflowed its integer type")]
    IndexOverflow,
}

impl Error {
    pub(crate) fn past_end(slot: usize, position: usize, len: usize) -> Self {
        log::debug!(
            "dereferenced source {} at position {}, but it only has {} elements",
            slot,
            position,
            len,
        );
        Self::PastEnd { slot, position, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            Error::past_end(1, 2, 2).to_string(),
            "position 2 is past the end of source 1 (length 2)",
        );
        assert_eq!(
            Error::IndexOverflow.to_string(),
            "running index overflowed its integer type",
        );
    }
}
