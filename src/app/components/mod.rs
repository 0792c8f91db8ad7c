pub mod delete_movie;

pub use delete_movie::{DeleteMovieLink, DeleteMovieModal};
