//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements     | Connects to                 |
//! |-------------|----------------|-----------------------------|
//! | `hardware`  | ActuatorPort   | any embedded-hal OutputPin  |
//! | `log_sink`  | EventSink      | `log` facade                |
//! | `serial`    | SerialLink     | USB-UART via `serialport`   |
//! | `rpi`       | EdgeSource     | Raspberry Pi GPIO (`rppal`) |
//! | `signal`    | —              | SIGINT / SIGTERM            |

pub mod hardware;
pub mod log_sink;
pub mod serial;

#[cfg(feature = "rpi")]
pub mod rpi;
#[cfg(feature = "rpi")]
pub mod signal;
