//! Store metadata.

/// Descriptor for the store running the registers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Store;

impl Store {
    /// Version of the register software.
    pub const VERSION: &'static str = "0.1";

    /// Returns the register software version.
    pub fn version(&self) -> &'static str {
        Self::VERSION
    }

    /// Greeting shown when a lane opens.
    pub fn hello_world(&self) -> String {
        "Hello world".to_string()
    }
}
