pub mod browse;
pub mod console;
pub mod forms;
pub mod menu;
pub mod messages;
pub mod search;
pub mod session;
pub mod validate;

pub use console::Console;
pub use session::Session;
