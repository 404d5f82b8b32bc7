use serde::{Deserialize, Serialize};

/// Title and body text of a fetched article.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleText {
    pub title: String,
    pub body: String,
}

impl ArticleText {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}
