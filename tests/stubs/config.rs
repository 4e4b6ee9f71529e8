#![allow(dead_code)]
// Each integration test crate compiles this module separately, so some
// of these payloads are unused in any given crate.

pub const VALID_PAYLOAD_FULL: &str = r#"
{
    "weather_station_id": "backyard_station",
    "wind_speed": {
        "name": "Wind speed"
    },
    "wind_direction": {
        "name": "Wind direction",
        "three_letter_direction": true,
        "north_correction": 12
    },
    "light": {
        "name": "Light level",
        "icon": "mdi:brightness-5"
    },
    "precipitation_intensity": {
        "name": "Rain intensity"
    }
}
"#;

pub const VALID_PAYLOAD_MINIMAL: &str = "{}";

pub const VALID_PAYLOAD_WIND_DIRECTION_ONLY: &str = r#"
{
    "wind_direction": {
        "three_letter_direction": true
    }
}
"#;

pub const BAD_PAYLOAD_CORRECTION_OUT_OF_RANGE: &str = r#"
{
    "wind_direction": {
        "north_correction": 181
    }
}
"#;

pub const BAD_PAYLOAD_UNKNOWN_FIELD: &str = r#"
{
    "wind_gust": {
        "name": "Wind gust"
    }
}
"#;

pub const BAD_PAYLOAD_WRONG_TYPE: &str = r#"
{
    "wind_direction": {
        "three_letter_direction": "yes"
    }
}
"#;

pub const STATION_PAYLOAD: &str = r#"
{
    "id": "backyard_station"
}
"#;
