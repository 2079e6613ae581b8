pub mod device_info;
pub mod energy;
