pub mod composite;
pub mod particles;
pub mod reveal;
