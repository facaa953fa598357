pub mod query;

pub use query::{QueryClient, RetryController, RetryOutcome};
