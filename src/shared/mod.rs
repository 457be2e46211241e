pub mod api;
pub mod pagination;
pub mod patch_field;
