pub mod errors;
pub mod logging;
pub mod services;

#[cfg(test)]
pub mod testing;
