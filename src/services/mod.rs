pub mod rows;
pub mod sheets;
