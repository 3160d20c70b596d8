pub mod ports;
pub mod post_use_cases;
pub mod services;
