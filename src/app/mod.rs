pub mod components;

pub use components::{DeleteMovieLink, DeleteMovieModal};
