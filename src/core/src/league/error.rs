use thiserror::Error;

pub type LeagueResult<T> = Result<T, LeagueError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    #[error("invalid league configuration: {0}")]
    Configuration(String),

    #[error("invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("match {match_id} not found")]
    NotFound { match_id: u32 },

    #[error("validation error: {0}")]
    Validation(String),
}

impl LeagueError {
    pub fn configuration(message: impl Into<String>) -> Self {
        LeagueError::Configuration(message.into())
    }

    pub fn invalid_transition(message: impl Into<String>) -> Self {
        LeagueError::InvalidStateTransition(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        LeagueError::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LeagueError::NotFound { match_id: 42 }.to_string(),
            "match 42 not found"
        );
        assert_eq!(
            LeagueError::configuration("odd team count").to_string(),
            "invalid league configuration: odd team count"
        );
    }
}
