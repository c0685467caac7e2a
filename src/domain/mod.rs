pub mod edit_machine;
pub mod entities;
pub mod validate;
