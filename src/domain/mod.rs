pub mod announcement;
pub mod calendar;
pub mod catalog;
pub mod chat;
pub mod opportunity;
pub mod outpass;
pub mod profile;
pub mod session;

pub use announcement::*;
pub use calendar::*;
pub use catalog::*;
pub use chat::*;
pub use opportunity::*;
pub use outpass::*;
pub use profile::*;
pub use session::*;
