pub mod activity;
pub mod session;
pub mod settings;
pub mod subject;
pub mod task;

pub use activity::*;
pub use session::*;
pub use settings::*;
pub use subject::*;
pub use task::*;
