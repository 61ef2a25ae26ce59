pub mod endpoints;
pub mod handlers;
pub mod models;
pub mod requests;
pub mod responses;
#[cfg(test)]
pub mod tests;
