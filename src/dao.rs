use std::path::PathBuf;

use crate::types::Movies;

/// Capability for fetching the whole movie collection, so a different backing
/// store can be swapped in without touching the query side.
pub trait MovieDao {
    fn fetch_all(&self) -> anyhow::Result<Movies>;
}

/// Reads the collection from a JSON document on disk. No caching: every call
/// re-reads the file, so each request sees a fresh snapshot.
pub struct JsonFileDao {
    path: PathBuf,
}

impl JsonFileDao {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MovieDao for JsonFileDao {
    fn fetch_all(&self) -> anyhow::Result<Movies> {
        // ファイルが無い・読めない・スキーマが合わない、はすべて同じ扱い
        let json_string = std::fs::read_to_string(&self.path)?;
        let movies = serde_json::from_str(json_string.as_str())?;
        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_json(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("movies-api-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).expect("テスト用ファイルを書き込めませんでした");
        path
    }

    #[test]
    fn test_fetch_all_parses_document_in_order() {
        let path = temp_json(
            "ok.json",
            r#"{"movies": [
                {"movie_id": 2, "title": "B", "description": "", "producer": "",
                 "available_in_3d": false, "age_rating": "PG", "likes": 3, "comments": []},
                {"movie_id": 1, "title": "A", "description": "", "producer": "",
                 "available_in_3d": true, "age_rating": "12", "likes": 7,
                 "comments": [{"user": "test1", "message": "m", "dateCreated": "1294012800", "like": 0}]}
            ]}"#,
        );

        let movies = JsonFileDao::new(&path).fetch_all().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(movies.movies.len(), 2);
        assert_eq!(movies.movies[0].movie_id, 2);
        assert_eq!(movies.movies[1].movie_id, 1);
        assert_eq!(movies.movies[1].comments[0].date_created, "1294012800");
    }

    #[test]
    fn test_fetch_all_fails_when_file_is_missing() {
        let dao = JsonFileDao::new("does-not-exist.json");
        assert!(dao.fetch_all().is_err());
    }

    #[test]
    fn test_fetch_all_fails_on_malformed_json() {
        let path = temp_json("broken.json", "{\"movies\": [");
        let result = JsonFileDao::new(&path).fetch_all();
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_fetch_all_fails_on_schema_mismatch() {
        let path = temp_json("mismatch.json", r#"{"movies": [{"movie_id": "not a number"}]}"#);
        let result = JsonFileDao::new(&path).fetch_all();
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
