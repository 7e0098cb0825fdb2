pub mod home_tab;
pub mod info_tab;
pub mod overview_tab;
pub mod result_tab;
