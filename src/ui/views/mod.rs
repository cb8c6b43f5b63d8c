pub mod load_failed;
pub mod statistics;
pub mod tree;
