pub mod bundled_dataset;
