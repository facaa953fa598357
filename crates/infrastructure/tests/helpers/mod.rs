mod samp_server_mock;

pub use samp_server_mock::*;
