//! Action-invocation firmware: named actions with positional arguments.

use lumen_domain::action::{BRIGHTNESS_RANGE, COLOR_TEMPERATURE_RANGE};
use lumen_domain::error::TransportError;
use lumen_domain::protocol::{ActionCall, actions};

use super::{LampState, codes, int_in_range, method_not_found};

pub(super) fn handle(
    state: &mut LampState,
    call: &ActionCall,
) -> Result<serde_json::Value, TransportError> {
    match call.name.as_str() {
        actions::TOGGLE => state.power = !state.power,
        actions::SET_BRIGHTNESS => {
            state.brightness = single_arg(call, &BRIGHTNESS_RANGE)?;
        }
        actions::SET_COLOR_TEMPERATURE => {
            state.color_temperature = single_arg(call, &COLOR_TEMPERATURE_RANGE)?;
        }
        other => return Err(method_not_found(other)),
    }
    Ok(serde_json::json!({ "code": codes::OK, "out": [] }))
}

fn single_arg(
    call: &ActionCall,
    range: &std::ops::RangeInclusive<u32>,
) -> Result<u32, TransportError> {
    let parsed = match call.args.as_slice() {
        [value] => int_in_range(value, range),
        _ => None,
    };
    parsed.ok_or_else(|| TransportError::Rejected {
        code: codes::INVALID_ARGS,
        message: format!("invalid arguments for {}", call.name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_flip_power_on_toggle() {
        let mut state = LampState::default();
        handle(&mut state, &ActionCall::new(actions::TOGGLE, vec![])).unwrap();
        assert!(state.power);
        handle(&mut state, &ActionCall::new(actions::TOGGLE, vec![])).unwrap();
        assert!(!state.power);
    }

    #[test]
    fn should_set_brightness_from_single_argument() {
        let mut state = LampState::default();
        let status = handle(
            &mut state,
            &ActionCall::new(actions::SET_BRIGHTNESS, vec![serde_json::json!(80)]),
        )
        .unwrap();
        assert_eq!(state.brightness, 80);
        assert_eq!(status["code"], 0);
    }

    #[test]
    fn should_set_color_temperature_from_single_argument() {
        let mut state = LampState::default();
        handle(
            &mut state,
            &ActionCall::new(actions::SET_COLOR_TEMPERATURE, vec![serde_json::json!(6000)]),
        )
        .unwrap();
        assert_eq!(state.color_temperature, 6000);
    }

    #[test]
    fn should_reject_out_of_range_argument() {
        let mut state = LampState::default();
        let result = handle(
            &mut state,
            &ActionCall::new(actions::SET_BRIGHTNESS, vec![serde_json::json!(0)]),
        );
        assert!(matches!(
            result,
            Err(TransportError::Rejected {
                code: codes::INVALID_ARGS,
                ..
            })
        ));
        assert_eq!(state.brightness, 50);
    }

    #[test]
    fn should_reject_missing_argument() {
        let mut state = LampState::default();
        let result = handle(&mut state, &ActionCall::new(actions::SET_BRIGHTNESS, vec![]));
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_unknown_action() {
        let mut state = LampState::default();
        let result = handle(&mut state, &ActionCall::new("light_flash_2_9", vec![]));
        assert!(matches!(
            result,
            Err(TransportError::Rejected {
                code: codes::METHOD_NOT_FOUND,
                ..
            })
        ));
    }
}
