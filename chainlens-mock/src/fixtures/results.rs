use serde_json::{Value, json};

/// `Results.ActionsByReceiver` for EOS, including a receiver with no dominant action.
#[must_use]
pub fn eos_receivers() -> Value {
    json!({"Results": {"ActionsByReceiver": {"TotalCount": 20000, "Actions": [
        {"Name": "eosio", "Count": 7200,
         "Senders": {"UniqueCount": 21},
         "Names": {"UniqueCount": 1, "Counts": [{"Name": "onblock", "Count": 7200}]}},
        {"Name": "eosio.token", "Count": 4000,
         "Senders": {"UniqueCount": 15321},
         "Names": {"UniqueCount": 4, "Counts": [
            {"Name": "issue", "Count": 200},
            {"Name": "transfer", "Count": 3500},
            {"Name": "open", "Count": 250},
            {"Name": "close", "Count": 50}
         ]}},
        {"Name": "betdicetasks", "Count": 2500,
         "Senders": {"UniqueCount": 3},
         "Names": {"UniqueCount": 5, "Counts": [
            {"Name": "removetask", "Count": 600},
            {"Name": "addtask", "Count": 600},
            {"Name": "resolve", "Count": 500},
            {"Name": "log", "Count": 450},
            {"Name": "ping", "Count": 350}
         ]}},
        {"Name": "spread_acct", "Count": 900,
         "Senders": {"UniqueCount": 900},
         "Names": {"UniqueCount": 12, "Counts": [
            {"Name": "a", "Count": 80}, {"Name": "b", "Count": 80}, {"Name": "c", "Count": 80},
            {"Name": "d", "Count": 80}, {"Name": "e", "Count": 80}, {"Name": "f", "Count": 80},
            {"Name": "g", "Count": 80}, {"Name": "h", "Count": 80}, {"Name": "i", "Count": 80},
            {"Name": "j", "Count": 80}, {"Name": "k", "Count": 50}, {"Name": "l", "Count": 50}
         ]}},
        {"Name": "pornhashbaby", "Count": 1200,
         "Senders": {"UniqueCount": 2},
         "Names": {"UniqueCount": 1, "Counts": [{"Name": "record", "Count": 1200}]}},
        {"Name": "smallfry", "Count": 10,
         "Senders": {"UniqueCount": 1},
         "Names": {"UniqueCount": 1, "Counts": [{"Name": "transfer", "Count": 10}]}}
    ]}}})
}

/// `Results.ActionsBySender` for Tezos.
#[must_use]
pub fn tezos_senders() -> Value {
    json!({"Results": {"ActionsBySender": {"Actions": [
        {"Name": "tz1aaa", "Count": 120000, "Receivers": {"UniqueCount": 3}},
        {"Name": "tz1bbb", "Count": 98765, "Receivers": {"UniqueCount": 98765}},
        {"Name": "KT1ccc", "Count": 4321, "Receivers": {"UniqueCount": 7}},
        {"Name": "tz1ddd", "Count": 1500000, "Receivers": {"UniqueCount": 2}},
        {"Name": "tz1eee", "Count": 10, "Receivers": {"UniqueCount": 4}},
        {"Name": "tz1fff", "Count": 9, "Receivers": {"UniqueCount": 1}}
    ]}}})
}

/// Named results fixture.
#[must_use]
pub fn by_name(name: &str) -> Option<Value> {
    match name {
        "eos-receivers" => Some(eos_receivers()),
        "tezos-senders" => Some(tezos_senders()),
        _ => None,
    }
}
