pub mod supersearch;
