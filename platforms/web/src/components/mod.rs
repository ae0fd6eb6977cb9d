mod strict_mode;

pub use strict_mode::StrictMode;
