//! Pre-flight checks for stream creation messages. These mirror the checks the
//! contracts run on-chain so a composed `CreateStream` can be rejected locally
//! before paying gas. Errors surfaced by the chain itself are still propagated
//! unchanged by the client helpers.

use cascade_types::controller::{CreateStreamMsg, Params, PoolConfig};
use cosmwasm_std::{Timestamp, Uint256};
use thiserror::Error;

/// Stream validation related constants
const MIN_NAME_LENGTH: usize = 2;
const MAX_NAME_LENGTH: usize = 64;
const MIN_URL_LENGTH: usize = 12;
const MAX_URL_LENGTH: usize = 128;

/// Special characters that are allowed in stream names and urls
const SAFE_TEXT_CHARS: &str = "<>$!&?#()*+'-./\"";
const SAFE_URL_CHARS: &str = "-_:/?#@!$&()*+,;=.~[]'%";

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Stream name too short")]
    StreamNameTooShort {},

    #[error("Stream name too long")]
    StreamNameTooLong {},

    #[error("Stream name is not in alphanumeric format")]
    InvalidStreamName {},

    #[error("Stream URL too short")]
    StreamUrlTooShort {},

    #[error("Stream URL too long")]
    StreamUrlTooLong {},

    #[error("Stream URL is not properly formatted or contains unsafe characters")]
    InvalidStreamUrl {},

    #[error("Stream bootstrapping start time is invalid")]
    StreamInvalidBootstrappingStartTime {},

    #[error("Invalid start time")]
    StreamInvalidStartTime {},

    #[error("Invalid end time")]
    StreamInvalidEndTime {},

    #[error("Stream duration is too short")]
    StreamDurationTooShort {},

    #[error("Stream bootstrapping duration is too short")]
    StreamBootstrappingDurationTooShort {},

    #[error("Stream waiting duration is too short")]
    StreamWaitingDurationTooShort {},

    #[error("In_denom does not match config")]
    InDenomIsNotAccepted {},

    #[error("Out_denom can not be the same as in_denom")]
    SameDenomOnEachSide {},

    #[error("Out supply must be greater than zero")]
    ZeroOutSupply {},

    #[error("Threshold must be greater than zero")]
    ThresholdZero {},

    #[error("Invalid pool out amount")]
    InvalidPoolOutAmount {},
}

pub fn check_name_and_url(name: &str, url: &Option<String>) -> Result<(), ValidationError> {
    if name.len() < MIN_NAME_LENGTH {
        return Err(ValidationError::StreamNameTooShort {});
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::StreamNameTooLong {});
    }
    if !name.chars().all(|c| {
        c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || SAFE_TEXT_CHARS.contains(c)
    }) {
        return Err(ValidationError::InvalidStreamName {});
    }

    if let Some(url) = url {
        if url.len() < MIN_URL_LENGTH {
            return Err(ValidationError::StreamUrlTooShort {});
        }
        if url.len() > MAX_URL_LENGTH {
            return Err(ValidationError::StreamUrlTooLong {});
        }
        if !url
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SAFE_URL_CHARS.contains(c))
        {
            return Err(ValidationError::InvalidStreamUrl {});
        }
    }
    Ok(())
}

pub fn validate_stream_times(
    now: Timestamp,
    bootstrapping_start_time: Timestamp,
    start_time: Timestamp,
    end_time: Timestamp,
    params: &Params,
) -> Result<(), ValidationError> {
    if now > bootstrapping_start_time {
        return Err(ValidationError::StreamInvalidBootstrappingStartTime {});
    }

    if bootstrapping_start_time > start_time {
        return Err(ValidationError::StreamInvalidBootstrappingStartTime {});
    }

    if start_time > end_time {
        return Err(ValidationError::StreamInvalidEndTime {});
    }
    let stream_duration = end_time
        .seconds()
        .checked_sub(start_time.seconds())
        .ok_or(ValidationError::StreamInvalidEndTime {})?;

    if stream_duration < params.min_stream_duration {
        return Err(ValidationError::StreamDurationTooShort {});
    }
    let bootstrapping_duration = start_time
        .seconds()
        .checked_sub(bootstrapping_start_time.seconds())
        .ok_or(ValidationError::StreamInvalidStartTime {})?;
    if bootstrapping_duration < params.min_bootstrapping_duration {
        return Err(ValidationError::StreamBootstrappingDurationTooShort {});
    }

    let waiting_duration = bootstrapping_start_time
        .seconds()
        .checked_sub(now.seconds())
        .ok_or(ValidationError::StreamInvalidBootstrappingStartTime {})?;
    if waiting_duration < params.min_waiting_duration {
        return Err(ValidationError::StreamWaitingDurationTooShort {});
    }
    Ok(())
}

/// Runs every check the controller runs on `CreateStream` against the
/// currently published params.
pub fn validate_create_stream(
    msg: &CreateStreamMsg,
    now: Timestamp,
    params: &Params,
) -> Result<(), ValidationError> {
    check_name_and_url(&msg.name, &msg.url)?;
    validate_stream_times(
        now,
        msg.bootstraping_start_time,
        msg.start_time,
        msg.end_time,
        params,
    )?;

    if !params.accepted_in_denoms.contains(&msg.in_denom) {
        return Err(ValidationError::InDenomIsNotAccepted {});
    }
    if msg.in_denom == msg.out_asset.denom {
        return Err(ValidationError::SameDenomOnEachSide {});
    }
    if msg.out_asset.amount.is_zero() {
        return Err(ValidationError::ZeroOutSupply {});
    }
    if let Some(threshold) = msg.threshold {
        if threshold.is_zero() {
            return Err(ValidationError::ThresholdZero {});
        }
    }
    if let Some(PoolConfig::ConcentratedLiquidity { out_amount_clp }) = &msg.pool_config {
        // pool cant be bigger than out_asset amount
        if *out_amount_clp > Uint256::from(msg.out_asset.amount) {
            return Err(ValidationError::InvalidPoolOutAmount {});
        }
        // pool out amount cant be zero
        if out_amount_clp.is_zero() {
            return Err(ValidationError::InvalidPoolOutAmount {});
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use cosmwasm_std::{coin, Addr, Binary, Decimal256};
    use std::str::FromStr;

    pub(crate) fn sample_params() -> Params {
        Params {
            protocol_admin: Addr::unchecked("admin"),
            fee_collector: Addr::unchecked("collector"),
            stream_creation_fee: coin(100, "uosmo"),
            exit_fee_percent: Decimal256::from_str("0.01").unwrap(),
            stream_contract_code_id: 2,
            vesting_code_id: 3,
            accepted_in_denoms: vec!["in_denom".to_string()],
            min_stream_duration: 100,
            min_bootstrapping_duration: 50,
            min_waiting_duration: 50,
            tos_version: "v1".to_string(),
        }
    }

    pub(crate) fn sample_create_stream() -> CreateStreamMsg {
        CreateStreamMsg {
            treasury: "treasury".to_string(),
            stream_admin: "stream_admin".to_string(),
            name: "stream".to_string(),
            url: Some("https://cascade.zone/stream".to_string()),
            out_asset: coin(1_000_000, "out_denom"),
            in_denom: "in_denom".to_string(),
            bootstraping_start_time: Timestamp::from_seconds(100),
            start_time: Timestamp::from_seconds(200),
            end_time: Timestamp::from_seconds(1_200),
            threshold: Some(Uint256::from(500u128)),
            pool_config: None,
            creator_vesting: None,
            subscriber_vesting: None,
            salt: Binary::from(b"salt".as_slice()),
            tos_version: "v1".to_string(),
        }
    }

    #[test]
    fn accepts_valid_create_stream() {
        let msg = sample_create_stream();
        validate_create_stream(&msg, Timestamp::from_seconds(0), &sample_params()).unwrap();
    }

    #[test]
    fn rejects_bad_names_and_urls() {
        assert_eq!(
            check_name_and_url("s", &None),
            Err(ValidationError::StreamNameTooShort {})
        );
        assert_eq!(
            check_name_and_url(&"a".repeat(65), &None),
            Err(ValidationError::StreamNameTooLong {})
        );
        assert_eq!(
            check_name_and_url("stream\u{1f980}", &None),
            Err(ValidationError::InvalidStreamName {})
        );
        assert_eq!(
            check_name_and_url("stream", &Some("short".to_string())),
            Err(ValidationError::StreamUrlTooShort {})
        );
        assert_eq!(
            check_name_and_url("stream", &Some("https://cascade.zone/{bad}".to_string())),
            Err(ValidationError::InvalidStreamUrl {})
        );
        check_name_and_url("stream", &Some("https://cascade.zone/ok".to_string())).unwrap();
    }

    #[test]
    fn rejects_out_of_order_times() {
        let params = sample_params();
        // bootstrapping start in the past
        assert_eq!(
            validate_stream_times(
                Timestamp::from_seconds(150),
                Timestamp::from_seconds(100),
                Timestamp::from_seconds(200),
                Timestamp::from_seconds(1_200),
                &params,
            ),
            Err(ValidationError::StreamInvalidBootstrappingStartTime {})
        );
        // stream shorter than min_stream_duration
        assert_eq!(
            validate_stream_times(
                Timestamp::from_seconds(0),
                Timestamp::from_seconds(100),
                Timestamp::from_seconds(200),
                Timestamp::from_seconds(250),
                &params,
            ),
            Err(ValidationError::StreamDurationTooShort {})
        );
        // bootstrapping window shorter than min_bootstrapping_duration
        assert_eq!(
            validate_stream_times(
                Timestamp::from_seconds(0),
                Timestamp::from_seconds(100),
                Timestamp::from_seconds(120),
                Timestamp::from_seconds(1_200),
                &params,
            ),
            Err(ValidationError::StreamBootstrappingDurationTooShort {})
        );
        // not enough waiting time before bootstrapping
        assert_eq!(
            validate_stream_times(
                Timestamp::from_seconds(80),
                Timestamp::from_seconds(100),
                Timestamp::from_seconds(200),
                Timestamp::from_seconds(1_200),
                &params,
            ),
            Err(ValidationError::StreamWaitingDurationTooShort {})
        );
    }

    #[test]
    fn rejects_denom_and_supply_violations() {
        let params = sample_params();
        let now = Timestamp::from_seconds(0);

        let mut msg = sample_create_stream();
        msg.in_denom = "unknown".to_string();
        assert_eq!(
            validate_create_stream(&msg, now, &params),
            Err(ValidationError::InDenomIsNotAccepted {})
        );

        let mut msg = sample_create_stream();
        msg.out_asset = coin(1_000_000, "in_denom");
        assert_eq!(
            validate_create_stream(&msg, now, &params),
            Err(ValidationError::SameDenomOnEachSide {})
        );

        let mut msg = sample_create_stream();
        msg.out_asset = coin(0, "out_denom");
        assert_eq!(
            validate_create_stream(&msg, now, &params),
            Err(ValidationError::ZeroOutSupply {})
        );

        let mut msg = sample_create_stream();
        msg.threshold = Some(Uint256::zero());
        assert_eq!(
            validate_create_stream(&msg, now, &params),
            Err(ValidationError::ThresholdZero {})
        );
    }

    #[test]
    fn rejects_pool_amount_out_of_bounds() {
        let params = sample_params();
        let now = Timestamp::from_seconds(0);

        let mut msg = sample_create_stream();
        msg.pool_config = Some(PoolConfig::ConcentratedLiquidity {
            out_amount_clp: Uint256::zero(),
        });
        assert_eq!(
            validate_create_stream(&msg, now, &params),
            Err(ValidationError::InvalidPoolOutAmount {})
        );

        let mut msg = sample_create_stream();
        msg.pool_config = Some(PoolConfig::ConcentratedLiquidity {
            out_amount_clp: Uint256::from(2_000_000u128),
        });
        assert_eq!(
            validate_create_stream(&msg, now, &params),
            Err(ValidationError::InvalidPoolOutAmount {})
        );

        let mut msg = sample_create_stream();
        msg.pool_config = Some(PoolConfig::ConcentratedLiquidity {
            out_amount_clp: Uint256::from(500_000u128),
        });
        validate_create_stream(&msg, now, &params).unwrap();
    }
}
