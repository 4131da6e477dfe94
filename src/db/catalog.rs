use std::{fs::File, io::Read, path::Path};

use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, MovieRecord},
};

/// Columns the catalog file must provide
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Series_Title",
    "Released_Year",
    "Genre",
    "IMDB_Rating",
    "Overview",
];

/// One CSV row as stored on disk; every cell may be missing
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Series_Title")]
    title: Option<String>,
    #[serde(rename = "Released_Year")]
    released_year: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "IMDB_Rating")]
    rating: Option<String>,
    #[serde(rename = "Overview")]
    overview: Option<String>,
}

impl CatalogRow {
    fn into_record(self, row: usize) -> MovieRecord {
        let title = self.title.unwrap_or_default();

        let released = self.released_year.unwrap_or_default().trim().to_string();
        let release_year = released.parse::<i32>().ok();

        let rating = match self.rating.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<f64>()
                .ok()
                .filter(|r| r.is_finite())
                .unwrap_or_else(|| {
                    tracing::warn!(row, title = %title, rating = %raw, "Unparseable rating, using 0");
                    0.0
                }),
            _ => {
                tracing::warn!(row, title = %title, "Missing rating, using 0");
                0.0
            }
        };

        MovieRecord::new(
            title,
            release_year,
            self.genre.unwrap_or_default(),
            rating,
            self.overview.unwrap_or_default(),
        )
        .with_released(released)
    }
}

/// Loads the movie catalog from a CSV file
///
/// A missing or unreadable file is a load error; the service cannot start
/// without a catalog.
pub fn load_catalog(path: impl AsRef<Path>) -> AppResult<Catalog> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "Loading movie catalog");

    let file = File::open(path).map_err(|e| {
        AppError::CatalogLoad(format!("cannot open {}: {}", path.display(), e))
    })?;

    read_catalog(file)
}

/// Parses a movie catalog from CSV data with a header row
///
/// Header names are trimmed before matching. Extra columns are ignored.
/// Empty cells are normalized to empty strings.
pub fn read_catalog<R: Read>(reader: R) -> AppResult<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::CatalogLoad(format!(
                "missing required column '{}'",
                column
            )));
        }
    }

    let mut movies = Vec::new();
    for result in reader.deserialize::<CatalogRow>() {
        let row = result.map_err(|e| {
            let position = e
                .position()
                .map(|p| format!("line {}", p.line()))
                .unwrap_or_else(|| "unknown position".to_string());
            AppError::CatalogLoad(format!("malformed record at {}: {}", position, e))
        })?;
        let row_number = movies.len() + 1;
        movies.push(row.into_record(row_number));
    }

    let catalog = Catalog::new(movies);
    tracing::info!(
        movies = catalog.len(),
        genres = catalog.genre_index().len(),
        "Movie catalog loaded"
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "Poster_Link,Series_Title,Released_Year,Certificate,Runtime,Genre,IMDB_Rating,Overview";

    #[test]
    fn test_read_catalog() {
        let data = format!(
            "{}\n\
             x,The Shawshank Redemption,1994,A,142 min,Drama,9.3,Two imprisoned men bond over a number of years.\n\
             x,The Dark Knight,2008,UA,152 min,\"Action, Crime, Drama\",9.0,Batman faces the Joker.\n",
            HEADER
        );

        let catalog = read_catalog(data.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        let dark_knight = &catalog.movies()[1];
        assert_eq!(dark_knight.title, "The Dark Knight");
        assert_eq!(dark_knight.release_year, Some(2008));
        assert_eq!(dark_knight.released, "2008");
        assert_eq!(dark_knight.genre, "Action, Crime, Drama");
        assert_eq!(dark_knight.genres, vec!["Action", "Crime", "Drama"]);
        assert_eq!(dark_knight.rating, 9.0);
        assert_eq!(dark_knight.overview, "Batman faces the Joker.");
    }

    #[test]
    fn test_missing_cells_are_normalized() {
        let data = format!("{}\nx,Mystery,,,,,,\n", HEADER);

        let catalog = read_catalog(data.as_bytes()).unwrap();

        let movie = &catalog.movies()[0];
        assert_eq!(movie.title, "Mystery");
        assert_eq!(movie.release_year, None);
        assert_eq!(movie.released, "");
        assert_eq!(movie.genre, "");
        assert_eq!(movie.genres, vec![""]);
        assert_eq!(movie.rating, 0.0);
        assert_eq!(movie.overview, "");
    }

    #[test]
    fn test_non_numeric_year_is_unknown() {
        let data = format!("{}\nx,Apollo 13,PG,U,140 min,\"Adventure, Drama\",7.6,Houston.\n", HEADER);

        let catalog = read_catalog(data.as_bytes()).unwrap();

        assert_eq!(catalog.movies()[0].release_year, None);
        assert_eq!(catalog.movies()[0].released, "PG");
        assert_eq!(catalog.movies()[0].rating, 7.6);
    }

    #[test]
    fn test_padded_header_names_are_matched() {
        let data = "Series_Title, Released_Year, Genre, IMDB_Rating, Overview\n\
                    Heat,1995,Crime,8.3,Cops.\n";

        let catalog = read_catalog(data.as_bytes()).unwrap();

        let heat = &catalog.movies()[0];
        assert_eq!(heat.release_year, Some(1995));
        assert_eq!(heat.genre, "Crime");
        assert_eq!(heat.rating, 8.3);
        assert_eq!(heat.overview, "Cops.");
        assert!(catalog.genre_index().contains("Crime"));
    }

    #[test]
    fn test_non_finite_rating_becomes_zero() {
        let data = format!(
            "{}\nx,Heat,1995,A,170 min,Crime,NaN,Cops.\nx,Ronin,1998,A,122 min,Crime,inf,Spies.\n",
            HEADER
        );

        let catalog = read_catalog(data.as_bytes()).unwrap();

        assert!(catalog.movies().iter().all(|m| m.rating == 0.0));
        let candidates = crate::services::recommendations::candidates(&catalog, "Crime", 0.0);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_missing_column_is_load_error() {
        let data = "Series_Title,Released_Year,Genre,Overview\nHeat,1995,Crime,Cops.\n";

        let err = read_catalog(data.as_bytes()).unwrap_err();

        assert!(matches!(err, AppError::CatalogLoad(ref msg) if msg.contains("IMDB_Rating")));
    }

    #[test]
    fn test_ragged_row_is_load_error() {
        let data = format!("{}\nx,Heat,1995\n", HEADER);

        let err = read_catalog(data.as_bytes()).unwrap_err();

        assert!(matches!(err, AppError::CatalogLoad(_)));
    }

    #[test]
    fn test_load_catalog_from_file() -> anyhow::Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", HEADER)?;
        writeln!(temp_file, "x,Up,2009,U,96 min,\"Animation, Adventure, Comedy\",8.2,A balloon house.")?;

        let catalog = load_catalog(temp_file.path())?;

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.genre_index().len(), 3);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load_catalog("/nonexistent/imdb_top_1000.csv").unwrap_err();
        assert!(matches!(err, AppError::CatalogLoad(_)));
    }
}
