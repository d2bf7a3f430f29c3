use std::fmt;

/// An expected read produced nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoDataError {
    pub message: String,
}

impl NoDataError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for NoDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for NoDataError {}

/// Creates an anyhow error wrapping a NoDataError, formatted like `format!`
#[macro_export]
macro_rules! no_data {
    ($($arg:tt)*) => {
        anyhow::Error::new($crate::error::NoDataError::new(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_message_verbatim() {
        let err = NoDataError::new("register 40002 returned nothing");
        assert_eq!(err.to_string(), "register 40002 returned nothing");
    }

    #[test]
    fn survives_anyhow_downcast() {
        let err = no_data!("register {} returned nothing", 40002);
        let inner = err.downcast_ref::<NoDataError>().unwrap();
        assert_eq!(inner.message, "register 40002 returned nothing");
    }
}
