pub mod mirror;
pub mod navigator;
pub mod segmentation;
pub mod session;
pub mod throttle;
