pub mod build;
pub mod init;
pub mod style;
