//! Property-addressed firmware: `get_properties` / `set_properties` on the
//! light service.

use lumen_domain::action::{BRIGHTNESS_RANGE, COLOR_TEMPERATURE_RANGE};
use lumen_domain::protocol::{
    PropertyAddress, PropertyReading, PropertyWrite, PropertyWriteStatus, properties,
};

use super::{LampState, codes, int_in_range};

pub(super) fn read(state: &LampState, addresses: &[PropertyAddress]) -> Vec<PropertyReading> {
    addresses
        .iter()
        .map(|address| {
            let value = match *address {
                properties::POWER => Some(serde_json::json!(state.power)),
                properties::BRIGHTNESS => Some(serde_json::json!(state.brightness)),
                properties::COLOR_TEMPERATURE => Some(serde_json::json!(state.color_temperature)),
                _ => None,
            };
            PropertyReading {
                siid: address.siid,
                piid: address.piid,
                code: if value.is_some() {
                    codes::OK
                } else {
                    codes::PROPERTY_NOT_FOUND
                },
                value,
            }
        })
        .collect()
}

pub(super) fn write(state: &mut LampState, writes: &[PropertyWrite]) -> Vec<PropertyWriteStatus> {
    writes
        .iter()
        .map(|w| PropertyWriteStatus {
            siid: w.siid,
            piid: w.piid,
            code: apply(state, w),
        })
        .collect()
}

fn apply(state: &mut LampState, write: &PropertyWrite) -> i64 {
    match write.address() {
        properties::POWER => match write.value.as_bool() {
            Some(power) => {
                state.power = power;
                codes::OK
            }
            None => codes::INVALID_VALUE,
        },
        properties::BRIGHTNESS => match int_in_range(&write.value, &BRIGHTNESS_RANGE) {
            Some(brightness) => {
                state.brightness = brightness;
                codes::OK
            }
            None => codes::INVALID_VALUE,
        },
        properties::COLOR_TEMPERATURE => {
            match int_in_range(&write.value, &COLOR_TEMPERATURE_RANGE) {
                Some(kelvin) => {
                    state.color_temperature = kelvin;
                    codes::OK
                }
                None => codes::INVALID_VALUE,
            }
        }
        _ => codes::PROPERTY_NOT_FOUND,
    }
}
