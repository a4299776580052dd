pub mod line_store;
