pub mod logs;
pub mod status;
pub mod text;
pub mod usage;
