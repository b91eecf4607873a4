use chainlens_core::ChainLensError;
use chainlens_core::report::TOP_ENTITIES;
use chainlens_core::report::latex::{escape, row, tabular_body, thousands};
use chainlens_core::report::records::{EntityRecord, collection};
use serde_json::Value;

const COLLECTION: &str = "ActionsBySender";

fn sender_row(record: &EntityRecord) -> Result<String, ChainLensError> {
    let receivers = record
        .receivers
        .as_ref()
        .map(|r| r.unique_count)
        .ok_or_else(|| {
            ChainLensError::Data(format!("sender `{}` has no `Receivers`", record.name))
        })?;
    let average = match (record.count, receivers) {
        (0, _) => 0.0,
        (count, 0) => {
            return Err(ChainLensError::Data(format!(
                "sender `{}` sent {count} operations to zero receivers",
                record.name
            )));
        }
        (count, unique) => count as f64 / unique as f64,
    };
    Ok(row(&[
        format!("\\tezaddr{{{}}}", escape(&record.name)),
        thousands(record.count),
        thousands(receivers),
        format!("{average:.2}"),
    ]))
}

/// Accounts sending the most operations, with their receiver fan-out.
pub(crate) fn top_senders(data: &Value) -> Result<String, ChainLensError> {
    let senders = collection(data, COLLECTION)?;
    let rows = senders
        .top(TOP_ENTITIES)
        .into_iter()
        .map(sender_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!(
        r"\begin{{figure*}}[tbp]
    \footnotesize
    \centering
    \begin{{tabular}}{{l r r r}}
    \toprule
                   &                & \bf Unique     & \bf Avg. \# of transactions\\
    \bf Sender     & \bf Sent count & \bf receivers  & \bf per receiver\\
    \midrule
    {body}
    \bottomrule
    \end{{tabular}}
    \caption{{Tezos accounts with the highest number of sent transactions.}}
    \label{{tab:tezos-account-edges}}
\end{{figure*}}",
        body = tabular_body(&rows)
    ))
}
