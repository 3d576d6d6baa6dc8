pub mod brightness;
pub mod event;
pub mod item;
pub mod power;
