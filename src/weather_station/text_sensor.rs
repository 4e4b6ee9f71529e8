//! Text-sensor platform binding
//!
//! Turns a validated platform block into the driver calls that attach
//! the configured sensors to the station object.

use crate::codegen::{Arg, Codegen, ObjectClass, ResolveError, Stmt};
use crate::text_sensor;

use super::config::{SensorKind, TextSensorPlatformConfig};

/// Generate the sensor wiring for one platform block.
///
/// Resolves the station first; a failed lookup aborts before anything is
/// emitted. Construction or registration failures propagate unmodified
/// to the host framework.
pub async fn to_code(
    config: &TextSensorPlatformConfig,
    cg: &Codegen,
) -> Result<(), ResolveError> {
    let station = cg
        .registry()
        .get_variable(&config.weather_station_id, ObjectClass::WeatherStation)
        .await?;

    let mut attached = 0;
    for kind in SensorKind::ALL {
        if let Some(sensor_config) = config.sensor(kind) {
            let sens = text_sensor::new_text_sensor(&sensor_config, cg).await?;
            log::debug!("attaching {} text sensor '{}'", kind.key(), sens.ident());
            cg.add(Stmt::method_call(&station, kind.setter(), vec![Arg::from(&sens)]));
            attached += 1;
        }
    }

    if let Some(wind) = &config.wind_direction {
        if let Some(correction) = wind.north_correction {
            cg.add(Stmt::method_call(
                &station,
                "set_north_correction",
                vec![Arg::Int(i64::from(correction.degrees()))],
            ));
        }
        if let Some(three_letter) = wind.three_letter_direction {
            cg.add(Stmt::method_call(
                &station,
                "set_three_letter_direction",
                vec![Arg::Bool(three_letter)],
            ));
        }
    }

    log::info!(
        "weather station '{}': attached {} text sensor(s)",
        station.ident(),
        attached
    );
    Ok(())
}
