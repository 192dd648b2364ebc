pub mod source;
pub mod timer;
