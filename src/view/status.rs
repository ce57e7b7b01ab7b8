use std::fmt;

/// The single status line shown to the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Ready,
    LoadingBoundary,
    LoadingPoints,
    Loaded { total: usize },
    Showing { shown: usize, total: usize },
    Error(String),
}

impl Status {
    pub fn is_error(&self) -> bool { matches!(self, Status::Error(_)) }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => f.write_str("Ready"),
            Status::LoadingBoundary => f.write_str("Loading boundary…"),
            Status::LoadingPoints => f.write_str("Loading points…"),
            Status::Loaded { total } => write!(f, "Loaded {total} locations"),
            Status::Showing { shown, total } => write!(f, "Showing {shown} of {total} locations"),
            Status::Error(msg) => write!(f, "Error: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Status;

    #[test]
    fn messages() {
        assert_eq!(Status::Loaded { total: 3 }.to_string(), "Loaded 3 locations");
        assert_eq!(Status::Showing { shown: 1, total: 3 }.to_string(), "Showing 1 of 3 locations");
        assert_eq!(Status::Error("boom".into()).to_string(), "Error: boom");
        assert!(Status::Error(String::new()).is_error());
        assert!(!Status::LoadingPoints.is_error());
    }
}
