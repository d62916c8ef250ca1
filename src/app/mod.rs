pub mod init;
pub mod logs;
pub mod server;
pub mod state;

pub use state::App;
