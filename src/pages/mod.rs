pub mod about;
pub mod contact;
pub mod home;
pub mod industries;
pub mod products;
pub mod resources;
pub mod solutions;
pub mod technology;
