pub mod audit;
pub mod inject;
