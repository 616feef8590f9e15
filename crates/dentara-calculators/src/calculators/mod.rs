pub mod ald;
pub mod cephalometric;
pub mod diagnosis;
pub mod ohis;
pub mod profile;
pub mod recession;
pub mod smoking;
pub mod war;
