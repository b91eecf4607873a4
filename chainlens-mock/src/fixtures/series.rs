use chainlens_core::{ActionSeries, ChainLensError, actions_over_time_from_str};

/// One bucket, two actions: the canonical top-1 example.
pub const SINGLE_BUCKET: &str = r#"{"Actions": {"2021-01-01T00:00:00Z": {"Actions": [
    {"Name": "transfer", "Count": 10},
    {"Name": "vote", "Count": 2}
]}}}"#;

/// Four six-hour EOS buckets, keys deliberately out of order.
pub const EOS_DAY: &str = r#"{"Actions": {
    "2019-10-01T12:00:00Z": {"Actions": [
        {"Name": "transfer", "Count": 1200},
        {"Name": "mine", "Count": 300},
        {"Name": "bet", "Count": 45},
        {"Name": "unknownaction", "Count": 7}
    ]},
    "2019-10-01T00:00:00Z": {"Actions": [
        {"Name": "transfer", "Count": 1000},
        {"Name": "verifytrade2", "Count": 80},
        {"Name": "onblock", "Count": 7200}
    ]},
    "2019-10-01T18:00:00Z": {"Actions": []},
    "2019-10-01T06:00:00Z": {"Actions": [
        {"Name": "transfer", "Count": 900},
        {"Name": "transfer", "Count": 100},
        {"Name": "resolvebet", "Count": 60}
    ]}
}}"#;

/// Three daily Tezos buckets in the nested `Results` layout.
pub const TEZOS_DAYS: &str = r#"{"Results": {"GroupedActionsOverTime": {"Actions": {
    "2019-10-01T00:00:00Z": {"Actions": [
        {"Name": "endorsement", "Count": 1800},
        {"Name": "transaction", "Count": 950},
        {"Name": "delegation", "Count": 12},
        {"Name": "reveal", "Count": 30}
    ]},
    "2019-10-02T00:00:00Z": {"Actions": [
        {"Name": "transaction", "Count": 1100},
        {"Name": "endorsement", "Count": 1750},
        {"Name": "origination", "Count": 4}
    ]},
    "2019-10-03T00:00:00Z": {"Actions": [
        {"Name": "endorsement", "Count": 1790},
        {"Name": "reveal", "Count": 25}
    ]}
}}}}"#;

/// Raw JSON of a named fixture.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static str> {
    match name {
        "single-bucket" => Some(SINGLE_BUCKET),
        "eos-day" => Some(EOS_DAY),
        "tezos-days" => Some(TEZOS_DAYS),
        _ => None,
    }
}

/// Parsed [`ActionSeries`] of a named fixture.
///
/// # Errors
/// Returns `InvalidArg` for an unknown fixture name.
pub fn series(name: &str) -> Result<ActionSeries, ChainLensError> {
    let json = by_name(name)
        .ok_or_else(|| ChainLensError::InvalidArg(format!("no series fixture named `{name}`")))?;
    actions_over_time_from_str(json)
}
