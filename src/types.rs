use serde::{Deserialize, Serialize};

/// The whole backing document: `{"movies": [...]}`. Document order is
/// preserved, and it is the tie-break order for the "find maximum" queries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Movies {
    pub movies: Vec<Movie>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: i64,
    pub title: String,
    pub description: String,
    pub producer: String,
    pub available_in_3d: bool,
    pub age_rating: String,
    pub likes: i64,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Comment {
    pub user: String,
    pub message: String,
    /// epoch秒の文字列 ("1294012800" など)
    #[serde(rename = "dateCreated")]
    pub date_created: String,
    // スキーマ上は存在するが、どのクエリも参照しない
    pub like: i64,
}

/// Response body for the most-comments query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaxCommenter {
    pub user: String,
    pub comments: usize,
}
