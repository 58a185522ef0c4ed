pub mod backend;
pub mod api_client;

#[cfg(test)]
pub mod fake_backend;

pub use backend::{AuthCallback, Backend};
pub use api_client::SupabaseClient;
