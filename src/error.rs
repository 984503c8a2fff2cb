#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} is empty")]
    Empty { name: &'static str },
    #[error("{name} is not a valid URL: {value:?}")]
    Invalid {
        name: &'static str,
        value: String,
        source: url::ParseError,
    },
    #[error("{name} is not an absolute http(s) URL: {value:?}")]
    NotAbsolute { name: &'static str, value: String },
    #[error("endpoint path {path:?} leaves the backend origin")]
    ForeignEndpoint { path: String },
}
