pub mod announcements;
pub mod auth;
pub mod calendar;
pub mod catalog;
pub mod chat;
pub mod opportunities;
pub mod outpass;
pub mod profile;
pub mod root;
