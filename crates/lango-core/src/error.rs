#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("locale identifier is empty")]
    Empty,

    #[error("invalid locale identifier `{id}`: {message}")]
    Invalid { id: String, message: String },
}
