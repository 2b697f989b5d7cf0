pub mod handlers;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use routes::routes;
