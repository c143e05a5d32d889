//! Storage gateway, backends and request translation for the movie catalog.
//!
//! The [`MovieStore`] trait is the only seam between request handling and
//! persistence. [`MovieCatalogService`] turns raw request inputs into store
//! calls and classifies the results into [`CatalogError`] outcomes.

pub mod catalog;
pub mod error;
pub mod store;

pub use catalog::{
    CatalogError, MovieCatalogService, SeedReport, parse_year_filter,
};
pub use error::{Result, StoreError};
pub use store::{InMemoryMovieStore, MovieStore, SqlDialect, SqlMovieStore};

pub use marquee_model::{Movie, NewMovie};
