#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A catalogued movie as stored and served.
///
/// `id` is assigned by the storage layer when the record is created and is
/// never changed afterwards. `imdb_id` is the natural key and is unique
/// across the catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Movie {
    pub id: i64,
    #[cfg_attr(feature = "serde", serde(rename = "imdbID"))]
    pub imdb_id: String,
    pub title: String,
    pub year: i32,
    pub rating: f64,
    /// Highlight flag; existing clients know it as `isSuperHero`.
    #[cfg_attr(feature = "serde", serde(rename = "isSuperHero"))]
    pub is_featured: bool,
}

/// Create payload: a movie that has not been assigned an id yet.
///
/// Any `id` key sent by a client is ignored during deserialization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NewMovie {
    #[cfg_attr(feature = "serde", serde(rename = "imdbID"))]
    pub imdb_id: String,
    pub title: String,
    pub year: i32,
    pub rating: f64,
    #[cfg_attr(feature = "serde", serde(rename = "isSuperHero"))]
    pub is_featured: bool,
}

impl NewMovie {
    /// Attach a storage-assigned id.
    pub fn into_movie(self, id: i64) -> Movie {
        Movie {
            id,
            imdb_id: self.imdb_id,
            title: self.title,
            year: self.year,
            rating: self.rating,
            is_featured: self.is_featured,
        }
    }
}

impl From<Movie> for NewMovie {
    fn from(movie: Movie) -> Self {
        Self {
            imdb_id: movie.imdb_id,
            title: movie.title,
            year: movie.year,
            rating: movie.rating,
            is_featured: movie.is_featured,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use serde_json::json;

    fn endgame() -> NewMovie {
        NewMovie {
            imdb_id: "tt4154796".into(),
            title: "Advanger: Endgame".into(),
            year: 2019,
            rating: 8.4,
            is_featured: true,
        }
    }

    #[test]
    fn movie_serializes_with_wire_names() {
        let value = serde_json::to_value(endgame().into_movie(7)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "imdbID": "tt4154796",
                "title": "Advanger: Endgame",
                "year": 2019,
                "rating": 8.4,
                "isSuperHero": true
            })
        );
    }

    #[test]
    fn new_movie_ignores_client_supplied_id() {
        let parsed: NewMovie = serde_json::from_value(json!({
            "id": 99,
            "imdbID": "tt4154796",
            "title": "Advanger: Endgame",
            "year": 2019,
            "rating": 8.4,
            "isSuperHero": true
        }))
        .unwrap();
        assert_eq!(parsed, endgame());
    }

    #[test]
    fn new_movie_rejects_missing_and_mistyped_fields() {
        let missing = serde_json::from_value::<NewMovie>(json!({
            "imdbID": "tt0133093",
            "title": "The Matrix",
            "rating": 8.7,
            "isSuperHero": false
        }));
        assert!(missing.is_err());

        let mistyped = serde_json::from_value::<NewMovie>(json!({
            "imdbID": "tt0133093",
            "title": "The Matrix",
            "year": "1999",
            "rating": 8.7,
            "isSuperHero": false
        }));
        assert!(mistyped.is_err());
    }
}
