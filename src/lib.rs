//! Configuration schema and code-generation binding for the text-sensor
//! integration of a UART weather station, targeting a build-time
//! firmware code-generation framework.

pub mod codegen;
pub mod constants;
pub mod text_sensor;
pub mod weather_station;

pub use codegen::Codegen;
