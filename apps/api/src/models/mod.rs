pub mod network;
pub mod opportunity;
pub mod profile;
pub mod skill;
