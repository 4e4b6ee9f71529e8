//! Weather-station component
//!
//! Declares the station driver object the sensor platforms attach to.
//! The driver itself (packet handling, runtime behaviour) lives in the
//! firmware component headers; this module only generates its wiring.

pub mod config;
pub mod text_sensor;

use serde::Deserialize;

use crate::codegen::{Codegen, Expr, Ident, ObjectClass, ResolveError, Stmt};
use crate::text_sensor::ConfigError;

pub use config::{
    NorthCorrection, SensorKind, TextSensorPlatformConfig, WindDirectionConfig,
};

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherStationConfig {
    #[serde(default = "config::default_station_id")]
    pub id: Ident,
}

impl WeatherStationConfig {
    /// Pre-register the station identifier so platform tasks referencing
    /// it can wait for the definition instead of failing resolution.
    pub fn declare(&self, cg: &Codegen) -> Result<(), ResolveError> {
        cg.registry().declare(&self.id, ObjectClass::WeatherStation)
    }
}

pub fn validate(value: serde_json::Value) -> Result<WeatherStationConfig, ConfigError> {
    serde_json::from_value(value).map_err(Into::into)
}

/// Generate the station object itself.
pub async fn to_code(
    config: &WeatherStationConfig,
    cg: &Codegen,
) -> Result<Expr, ResolveError> {
    let station = cg.registry().define(&config.id, ObjectClass::WeatherStation)?;
    cg.add(Stmt::new_object(&station));
    log::debug!("generated weather station '{}'", station.ident());
    Ok(station)
}
