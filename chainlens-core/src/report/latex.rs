/// Separator between tabular rows, indentation included.
pub const ROW_SEPARATOR: &str = "\\\\\n    ";

/// Format an integer with `,` thousands separators (`1234567` -> `1,234,567`).
#[must_use]
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a ratio as a percentage with two decimals and an escaped sign (`0.5` -> `50.00\%`).
#[must_use]
pub fn percent(ratio: f64) -> String {
    format!("{:.2}\\%", ratio * 100.0)
}

/// Escape characters with a special meaning in LaTeX text.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a cell so that it spans `rows` rows; a single row is returned as is.
#[must_use]
pub fn multirow(rows: usize, cell: &str) -> String {
    if rows > 1 {
        format!("\\multirow{{{rows}}}{{*}}{{{cell}}}")
    } else {
        cell.to_string()
    }
}

/// Join cells with the column separator.
#[must_use]
pub fn row<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" & ")
}

/// Join rows with [`ROW_SEPARATOR`].
#[must_use]
pub fn join_rows(rows: &[String]) -> String {
    rows.join(ROW_SEPARATOR)
}

/// Body of a tabular: rows joined with [`ROW_SEPARATOR`] and terminated by
/// `\\`, or nothing at all when there are no rows.
#[must_use]
pub fn tabular_body(rows: &[String]) -> String {
    if rows.is_empty() {
        String::new()
    } else {
        format!("{}\\\\", join_rows(rows))
    }
}

/// Rows for one entity whose own cells span its sub-item rows.
///
/// The first row carries every entity cell wrapped in [`multirow`]; later
/// rows leave those columns empty. Without sub-items a single row is emitted
/// with `placeholder` filling each sub-item column.
#[must_use]
pub fn spanning_rows(entity: &[String], sub_items: &[Vec<String>], placeholder: &[&str]) -> Vec<String> {
    let Some((first, rest)) = sub_items.split_first() else {
        let mut cells: Vec<String> = entity.to_vec();
        cells.extend(placeholder.iter().map(|p| (*p).to_string()));
        return vec![row(&cells)];
    };
    let span = sub_items.len();
    let mut out = Vec::with_capacity(span);
    let mut cells: Vec<String> = entity.iter().map(|c| multirow(span, c)).collect();
    cells.extend(first.iter().cloned());
    out.push(row(&cells));
    for sub in rest {
        let mut cells: Vec<String> = vec![String::new(); entity.len()];
        cells.extend(sub.iter().cloned());
        out.push(row(&cells));
    }
    out
}
