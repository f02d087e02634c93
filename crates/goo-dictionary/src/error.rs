/// Transport-level failure talking to the dictionary site
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("HTTP client setup failed: {0}")]
    Client(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Connection(e.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The site answered but has nothing for the word
    #[error("goo辞書で「{word}」に一致する情報は見つかりませんでした")]
    NoMatch { word: String },

    #[error(transparent)]
    Connection(#[from] FetchError),

    /// A fetched page lacks markup the site's templates always carry
    #[error("Malformed page: missing {what}")]
    MalformedPage { what: &'static str },
}

impl DictionaryError {
    pub(crate) fn malformed(what: &'static str) -> Self {
        DictionaryError::MalformedPage { what }
    }
}
