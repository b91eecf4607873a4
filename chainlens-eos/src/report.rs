use chainlens_core::ChainLensError;
use chainlens_core::report::latex::{escape, percent, spanning_rows, tabular_body, thousands};
use chainlens_core::report::records::{EntityRecord, collection, dominant_items, ratio};
use chainlens_core::report::{SUB_ITEM_THRESHOLD, TOP_ENTITIES, TOP_SUB_ITEMS};
use serde_json::Value;

const COLLECTION: &str = "ActionsByReceiver";
const PLACEHOLDER: &[&str] = &["--", "--"];

fn entity_rows(record: &EntityRecord, total: u64) -> Vec<String> {
    let senders = record
        .senders
        .as_ref()
        .map_or_else(|| "--".to_string(), |s| thousands(s.unique_count));
    let entity = [
        format!("\\eosaddr{{{}}}", escape(&record.name)),
        thousands(record.count),
        percent(ratio(record.count, total)),
        senders,
    ];
    let names = record.names.as_ref().map(|n| n.counts.as_slice()).unwrap_or_default();
    let sub_items: Vec<Vec<String>> =
        dominant_items(names, record.count, TOP_SUB_ITEMS, SUB_ITEM_THRESHOLD)
            .into_iter()
            .map(|(item, share)| vec![format!("\\texttt{{{}}}", escape(&item.name)), percent(share)])
            .collect();
    spanning_rows(&entity, &sub_items, PLACEHOLDER)
}

/// Accounts receiving the most actions, with their dominant action names.
pub(crate) fn top_receivers(data: &Value) -> Result<String, ChainLensError> {
    let receivers = collection(data, COLLECTION)?;
    let total = receivers.total()?;
    let rows: Vec<String> = receivers
        .top(TOP_ENTITIES)
        .into_iter()
        .flat_map(|record| entity_rows(record, total))
        .collect();

    Ok(format!(
        r"\begin{{table}}[tbp]
    \footnotesize
    \centering
    \begin{{tabular}}{{l r r r l r}}
    \toprule
                 & \bf Actions & \bf \% of   & \bf Unique  & \bf Top         & \bf Action\\
    \bf Receiver & \bf count   & \bf actions & \bf senders & \bf actions     & \bf share\\
    \midrule
    {body}
    \bottomrule
    \end{{tabular}}
    \caption{{EOS accounts receiving the highest number of actions.}}
    \label{{tab:eos-top-receivers}}
\end{{table}}",
        body = tabular_body(&rows)
    ))
}
