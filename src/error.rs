// Copyright (C) 2020-2026 Andy Kurnia.

pub enum InputError {
    Lexicon(String),
    Board(String),
    Question(String),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Lexicon(s) => write!(f, "lexicon: {}", s),
            InputError::Board(s) => write!(f, "board: {}", s),
            InputError::Question(s) => write!(f, "question: {}", s),
        }
    }
}

impl std::fmt::Debug for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for InputError {}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($kind:ident, $error:expr) => {
        return Err($crate::error::InputError::$kind($error).into());
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails() -> Returns<()> {
        return_error!(Board, "too short".into());
    }

    #[test]
    fn return_error_names_the_input() {
        let err = fails().unwrap_err();
        assert_eq!(err.to_string(), "board: too short");
        assert_eq!(format!("{:?}", err), "board: too short");
    }
}
