mod client;
mod retry;

pub use client::QueryClient;
pub use retry::{RetryController, RetryOutcome};
