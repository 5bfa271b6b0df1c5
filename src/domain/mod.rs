pub mod episode;
pub mod immersion;
pub mod pipeline;
pub mod script;
pub mod voice;
