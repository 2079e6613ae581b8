pub mod device_client;
