//! Text-sensor platform configuration
//!
//! Typed schema for the platform block, validated as a whole before any
//! code generation runs. The four sensor kinds form a closed table that
//! carries each kind's config key, default icon and driver setter, so no
//! call name is ever assembled at runtime.

use serde::Deserialize;
use thiserror::Error;

use crate::codegen::Ident;
use crate::constants::{icons, keys};
use crate::text_sensor::{ConfigError, TextSensorConfig};

/// The four string-valued readings the station driver can expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensorKind {
    WindSpeed,
    WindDirection,
    Light,
    PrecipitationIntensity,
}

impl SensorKind {
    /// Fixed emission order of the platform.
    pub const ALL: [SensorKind; 4] = [
        SensorKind::WindSpeed,
        SensorKind::WindDirection,
        SensorKind::Light,
        SensorKind::PrecipitationIntensity,
    ];

    /// Configuration key of this kind's sensor block.
    pub fn key(self) -> &'static str {
        match self {
            SensorKind::WindSpeed => "wind_speed",
            SensorKind::WindDirection => "wind_direction",
            SensorKind::Light => "light",
            SensorKind::PrecipitationIntensity => "precipitation_intensity",
        }
    }

    /// Driver method that attaches a sensor of this kind.
    pub fn setter(self) -> &'static str {
        match self {
            SensorKind::WindSpeed => "set_wind_speed_text_sensor",
            SensorKind::WindDirection => "set_wind_direction_text_sensor",
            SensorKind::Light => "set_light_text_sensor",
            SensorKind::PrecipitationIntensity => "set_precipitation_intensity_text_sensor",
        }
    }

    pub fn default_icon(self) -> &'static str {
        match self {
            SensorKind::WindSpeed => icons::ICON_WEATHER_WINDY,
            SensorKind::WindDirection => icons::ICON_SIGN_DIRECTION,
            SensorKind::Light => icons::ICON_WEATHER_SUNNY,
            SensorKind::PrecipitationIntensity => icons::ICON_WEATHER_POURING,
        }
    }
}

/// Angular offset applied to raw wind-direction readings, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NorthCorrection(i16);

impl NorthCorrection {
    pub const MIN: i16 = -180;
    pub const MAX: i16 = 180;

    pub fn degrees(self) -> i16 {
        self.0
    }
}

#[derive(Error, Debug)]
#[error("north_correction {0} is out of range [-180, 180]")]
pub struct OutOfRange(i64);

impl std::ops::Deref for NorthCorrection {
    type Target = i16;
    fn deref(&self) -> &i16 {
        &self.0
    }
}

impl TryFrom<i64> for NorthCorrection {
    type Error = OutOfRange;

    fn try_from(value: i64) -> Result<Self, OutOfRange> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as i16))
        } else {
            Err(OutOfRange(value))
        }
    }
}

impl<'de> serde::Deserialize<'de> for NorthCorrection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Self::try_from(i64::deserialize(deserializer)?)
            .map_err(|e| <D::Error as serde::de::Error>::custom(e.to_string()))
    }
}

/// The wind-direction block: a text-sensor block extended with the two
/// direction-formatting options of the driver.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindDirectionConfig {
    pub id: Option<Ident>,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub three_letter_direction: Option<bool>,
    pub north_correction: Option<NorthCorrection>,
}

impl WindDirectionConfig {
    /// The plain text-sensor part of the block.
    pub fn sensor(&self) -> TextSensorConfig {
        TextSensorConfig {
            id: self.id.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
        }
    }
}

/// The whole text-sensor platform block for one station.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextSensorPlatformConfig {
    #[serde(default = "default_station_id")]
    pub weather_station_id: Ident,
    pub wind_speed: Option<TextSensorConfig>,
    pub wind_direction: Option<WindDirectionConfig>,
    pub light: Option<TextSensorConfig>,
    pub precipitation_intensity: Option<TextSensorConfig>,
}

impl TextSensorPlatformConfig {
    /// Sensor block for the given kind, with the kind's default icon
    /// applied when the block did not choose one.
    pub fn sensor(&self, kind: SensorKind) -> Option<TextSensorConfig> {
        let base = match kind {
            SensorKind::WindSpeed => self.wind_speed.clone(),
            SensorKind::WindDirection => self.wind_direction.as_ref().map(|w| w.sensor()),
            SensorKind::Light => self.light.clone(),
            SensorKind::PrecipitationIntensity => self.precipitation_intensity.clone(),
        };
        base.map(|config| config.or_icon(kind.default_icon()))
    }
}

pub(crate) fn default_station_id() -> Ident {
    Ident::sanitized(keys::WEATHER_STATION_ID)
}

/// Validate a platform block. Pure: no code generation runs, and nothing
/// is generated later if any sub-block fails here.
pub fn validate(value: serde_json::Value) -> Result<TextSensorPlatformConfig, ConfigError> {
    serde_json::from_value(value).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_north_correction_full_range_validates() {
        for n in NorthCorrection::MIN..=NorthCorrection::MAX {
            let config = validate(json!({ "wind_direction": { "north_correction": n } }))
                .unwrap_or_else(|e| panic!("north_correction {} rejected: {}", n, e));
            let wind = config.wind_direction.unwrap();
            assert_eq!(wind.north_correction.map(|c| c.degrees()), Some(n));
        }
    }

    #[test]
    fn test_north_correction_out_of_range_fails() {
        for n in [-181, 181, i64::from(i16::MIN) - 1, 100_000] {
            let result = validate(json!({ "wind_direction": { "north_correction": n } }));
            let err = result.err().unwrap_or_else(|| panic!("{} accepted", n));
            assert!(err.to_string().contains("out of range"), "got: {}", err);
        }
    }

    #[test]
    fn test_empty_platform_block_validates() {
        let config = validate(json!({})).unwrap();
        assert_eq!(config.weather_station_id.as_str(), "weather_station");
        for kind in SensorKind::ALL {
            assert!(config.sensor(kind).is_none());
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(validate(json!({ "wind_gust": {} })).is_err());
        assert!(validate(json!({ "wind_direction": { "compass": true } })).is_err());
    }

    #[test]
    fn test_default_icons_per_kind() {
        let config = validate(json!({
            "wind_speed": {},
            "wind_direction": {},
            "light": { "icon": "mdi:brightness-5" },
            "precipitation_intensity": {}
        }))
        .unwrap();

        let icon = |kind: SensorKind| config.sensor(kind).unwrap().icon;
        assert_eq!(icon(SensorKind::WindSpeed).as_deref(), Some("mdi:weather-windy"));
        assert_eq!(icon(SensorKind::WindDirection).as_deref(), Some("mdi:sign-direction"));
        assert_eq!(icon(SensorKind::Light).as_deref(), Some("mdi:brightness-5"));
        assert_eq!(
            icon(SensorKind::PrecipitationIntensity).as_deref(),
            Some("mdi:weather-pouring")
        );
    }

    #[test]
    fn test_station_id_override() {
        let config = validate(json!({ "weather_station_id": "roof_station" })).unwrap();
        assert_eq!(config.weather_station_id.as_str(), "roof_station");
    }

    #[test]
    fn test_setter_table_is_exhaustive() {
        let setters: Vec<&str> = SensorKind::ALL.iter().map(|k| k.setter()).collect();
        assert_eq!(setters, vec![
            "set_wind_speed_text_sensor",
            "set_wind_direction_text_sensor",
            "set_light_text_sensor",
            "set_precipitation_intensity_text_sensor",
        ]);
    }
}
