pub mod movie_service;
pub mod page_effects;

pub use movie_service::{HttpMovieService, MovieService};
pub use page_effects::PageEffects;
