pub mod audio;
pub mod extract;
pub mod health;
pub mod immersion;
