pub const ICON_WEATHER_WINDY: &str = "mdi:weather-windy";
pub const ICON_SIGN_DIRECTION: &str = "mdi:sign-direction";
pub const ICON_WEATHER_SUNNY: &str = "mdi:weather-sunny";
pub const ICON_WEATHER_POURING: &str = "mdi:weather-pouring";
