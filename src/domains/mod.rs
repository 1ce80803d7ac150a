pub mod address;
pub mod mail;
