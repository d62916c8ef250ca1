pub mod browser;
pub mod kill;
pub mod process;
pub mod supervisor;
pub mod toolchain;

pub use supervisor::{StartOutcome, Supervisor};
