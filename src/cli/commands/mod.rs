pub mod build;
pub mod check;
pub mod helper;
pub mod init;
