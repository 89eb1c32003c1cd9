pub mod inference;
pub mod insights;
pub mod settings;
pub mod upload;
pub mod visualizations;
