//! Policy text adapters.

mod file_policy;

pub use file_policy::FilePolicyProvider;
