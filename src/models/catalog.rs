use std::collections::BTreeSet;

use serde::Serialize;

use super::MovieRecord;

/// Read-only, ordered table of movie records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    /// All records in load order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Builds the set of distinct genres, used to validate genre choices
    pub fn genre_index(&self) -> GenreIndex {
        GenreIndex::from_movies(&self.movies)
    }
}

/// Sorted set of every distinct genre in a catalog
///
/// Empty genres are left out, so a record without a genre never shows up as
/// a selectable choice.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GenreIndex(BTreeSet<String>);

impl GenreIndex {
    pub fn from_movies(movies: &[MovieRecord]) -> Self {
        Self(
            movies
                .iter()
                .flat_map(|m| m.genres.iter())
                .filter(|g| !g.is_empty())
                .cloned()
                .collect(),
        )
    }

    /// Exact membership, as used for caller-side input validation
    pub fn contains(&self, genre: &str) -> bool {
        self.0.contains(genre)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
