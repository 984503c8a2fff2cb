/// Base URL of the FAME backend. Edit per deployment; use
/// `http://localhost:5000` when running the backend locally.
pub const BACKEND_URL: &str = "https://fame-rkomi98.onrender.com";

/// Public source repository, used for links only.
pub const GITHUB_REPO_URL: &str = "https://github.com/rkomi98/FAME";

/// Export key for [`BACKEND_URL`].
pub const BACKEND_URL_KEY: &str = "BackendURL";
/// Export key for [`GITHUB_REPO_URL`].
pub const GITHUB_REPO_URL_KEY: &str = "GitHubRepoURL";

/// Keys published by [`crate::export_into`], in registration order.
pub const EXPORT_KEYS: [&str; 2] = [BACKEND_URL_KEY, GITHUB_REPO_URL_KEY];

pub(crate) const ENTRIES: [(&str, &str); 2] = [
    (BACKEND_URL_KEY, BACKEND_URL),
    (GITHUB_REPO_URL_KEY, GITHUB_REPO_URL),
];
