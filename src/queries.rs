use std::collections::HashMap;

use crate::types::{MaxCommenter, Movie, Movies};

/// Identity passthrough: the canonical behavior of the list query is the
/// collection exactly as loaded, same order, same cardinality.
pub fn list_all(movies: Movies) -> Movies {
    movies
}

/// Linear scan in collection order; first movie with a matching id wins.
pub fn find_by_id(movies: &Movies, id: i64) -> Option<&Movie> {
    movies.movies.iter().find(|movie| movie.movie_id == id)
}

/// Counts every comment of every movie per user, then picks the user with the
/// strictly greatest count. Ties between equal maxima are undefined because
/// HashMap iteration order is unspecified. No comments at all gives the
/// zero-value result (empty user, count 0), not an error.
pub fn most_prolific_commenter(movies: &Movies) -> MaxCommenter {
    // 1. ユーザーごとのコメント数を数える
    let mut comment_count: HashMap<&str, usize> = HashMap::new();
    for movie in &movies.movies {
        for comment in &movie.comments {
            *comment_count.entry(comment.user.as_str()).or_insert(0) += 1;
        }
    }

    // 2. 最大のエントリを探す (同数では入れ替えない)
    let mut max = MaxCommenter::default();
    for (user, count) in comment_count {
        if count > max.comments {
            max.user = user.to_string();
            max.comments = count;
        }
    }
    max
}

/// Scan in collection order keeping the movie with the strictly greatest like
/// count; on ties the first occurrence is kept. An empty collection yields the
/// zero-value movie record rather than an error.
pub fn most_liked(movies: &Movies) -> Movie {
    let mut most_liked_movie = Movie::default();
    for movie in &movies.movies {
        if movie.likes > most_liked_movie.likes {
            most_liked_movie = movie.clone();
        }
    }
    most_liked_movie
}
