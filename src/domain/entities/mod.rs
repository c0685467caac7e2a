pub mod edit;
pub mod record;
pub mod rows;
