pub mod build;
pub mod catalog;
pub mod sections;
pub mod watch;
