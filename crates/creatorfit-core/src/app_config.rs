use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Candidate roster file; JSON unless the extension is `.yaml`/`.yml`.
    pub roster_path: PathBuf,
    /// Hashtags shown in the ranked table.
    pub hashtag_table_limit: usize,
    /// Hashtags shown in the proportional (pie) view.
    pub hashtag_pie_limit: usize,
    /// Hashtags shown per post row before collapsing into `+N`.
    pub post_hashtag_preview: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("roster_path", &self.roster_path)
            .field("hashtag_table_limit", &self.hashtag_table_limit)
            .field("hashtag_pie_limit", &self.hashtag_pie_limit)
            .field("post_hashtag_preview", &self.post_hashtag_preview)
            .finish()
    }
}
