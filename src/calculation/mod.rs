pub mod balanced_field_length;
pub mod cancellation;
pub mod settings;
