mod client;

pub use client::AuthenticatedClient;
