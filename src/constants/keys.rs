// Well-known generated-variable identifiers
pub const WEATHER_STATION_ID: &str = "weather_station";
pub const TEXT_SENSOR_ID_PREFIX: &str = "text_sensor";
