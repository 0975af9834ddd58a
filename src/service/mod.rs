pub mod embed;
pub mod init;
pub mod providers;
