//! Generic text-sensor component
//!
//! The configuration block shared by every platform that exposes
//! string-valued readings, plus the codegen factory that constructs the
//! sensor object and wires up its display options.

use serde::Deserialize;
use thiserror::Error;

use crate::codegen::{Arg, Codegen, Expr, Ident, ObjectClass, ResolveError, Stmt};
use crate::constants::keys;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One text-sensor block of a platform configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TextSensorConfig {
    pub id: Option<Ident>,
    pub name: Option<String>,
    pub icon: Option<String>,
}

impl TextSensorConfig {
    /// Validate a single sensor block, filling in the platform's default
    /// display icon when the user did not pick one.
    pub fn from_value(
        value: serde_json::Value,
        default_icon: &str,
    ) -> Result<Self, ConfigError> {
        let config: TextSensorConfig = serde_json::from_value(value)?;
        Ok(config.or_icon(default_icon))
    }

    /// Apply `default_icon` unless the block chose its own.
    pub fn or_icon(mut self, default_icon: &str) -> Self {
        if self.icon.is_none() {
            self.icon = Some(default_icon.to_string());
        }
        self
    }
}

/// Construct a new text-sensor object from a validated block.
///
/// Allocates an identifier if the block did not pin one, registers the
/// object, and emits its construction plus one setter call per display
/// option present.
pub async fn new_text_sensor(
    config: &TextSensorConfig,
    cg: &Codegen,
) -> Result<Expr, ResolveError> {
    let ident = match &config.id {
        Some(id) => id.clone(),
        None => cg.new_ident(keys::TEXT_SENSOR_ID_PREFIX),
    };
    let sens = cg.registry().define(&ident, ObjectClass::TextSensor)?;
    cg.add(Stmt::new_object(&sens));
    if let Some(name) = &config.name {
        cg.add(Stmt::method_call(&sens, "set_name", vec![Arg::from(name.as_str())]));
    }
    if let Some(icon) = &config.icon {
        cg.add(Stmt::method_call(&sens, "set_icon", vec![Arg::from(icon.as_str())]));
    }
    Ok(sens)
}
