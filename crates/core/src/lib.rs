pub mod analysis;
pub mod capture;
pub mod history;
pub mod shared;
