pub mod columns;
pub mod data_table;
pub mod primary_table;
pub mod table_model;
