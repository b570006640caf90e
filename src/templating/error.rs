use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderingError {
    pub problem: String,
    pub details: String,
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl From<tinytemplate::error::Error> for RenderingError {
    fn from(error: tinytemplate::error::Error) -> Self {
        RenderingError {
            problem: "Template failed".to_string(),
            details: error.to_string(),
        }
    }
}
