//! Header normalization and row/record mapping between the spreadsheet's
//! tabular layout and the API's named-field records.

use std::collections::HashMap;

use serde_json::Value;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A spreadsheet row keyed by normalized header name.
pub type Record = HashMap<String, String>;

/// Canonicalize a header or payload key: strip diacritics, trim, lowercase.
///
/// Total on any input; sheet headers like "Título" and client keys like
/// "Nome" both collapse onto the internal vocabulary ("titulo", "nome").
pub fn normalize_key(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// Convert raw sheet rows (first row = headers) into normalized-key records.
///
/// Rows shorter than the header row are padded with empty strings; rows that
/// are entirely blank after trimming are dropped.
pub fn to_records(rows: &[Vec<String>]) -> Vec<Record> {
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_row.iter().map(|h| normalize_key(h)).collect();

    data_rows
        .iter()
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .map(|row| {
            headers
                .iter()
                .enumerate()
                .map(|(i, key)| {
                    let cell = row.get(i).cloned().unwrap_or_default();
                    (key.clone(), cell)
                })
                .collect()
        })
        .collect()
}

/// Look a field up under an ordered list of accepted aliases, falling back
/// to `default` when none is present. Aliases must already be normalized.
pub fn field(record: &Record, aliases: &[&str], default: &str) -> String {
    for alias in aliases {
        if let Some(v) = record.get(*alias) {
            if !v.trim().is_empty() {
                return v.trim().to_string();
            }
        }
    }
    default.to_string()
}

/// Flatten a JSON body into a normalized-key record so that client-side
/// spelling drift ("Nome" vs "nome") resolves the same way sheet headers do.
/// Scalar values are stringified; nested values are ignored.
pub fn normalize_payload(payload: &Value) -> Record {
    let mut record = Record::new();
    if let Some(obj) = payload.as_object() {
        for (key, value) in obj {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                _ => continue,
            };
            record.entry(normalize_key(key)).or_insert(text);
        }
    }
    record
}

/// Next id for an append: highest existing integer id plus one.
pub fn next_id(records: &[Record]) -> String {
    let max = records
        .iter()
        .filter_map(|r| r.get("id"))
        .filter_map(|v| v.trim().parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn normalize_key_strips_diacritics_and_case() {
        assert_eq!(normalize_key("Título"), "titulo");
        assert_eq!(normalize_key("  Observações "), "observacoes");
        assert_eq!(normalize_key("Endereço"), "endereco");
        assert_eq!(normalize_key("nome"), "nome");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn to_records_pads_short_rows() {
        let rows = vec![row(&["ID", "Nome", "Status"]), row(&["1", "Maria"])];
        let records = to_records(&rows);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["id"], "1");
        assert_eq!(records[0]["nome"], "Maria");
        assert_eq!(records[0]["status"], "");
    }

    #[test]
    fn to_records_drops_blank_rows() {
        let rows = vec![
            row(&["ID", "Nome"]),
            row(&["", "  "]),
            row(&["2", "João"]),
            row(&[]),
        ];
        let records = to_records(&rows);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["nome"], "João");
    }

    #[test]
    fn to_records_empty_sheet() {
        assert!(to_records(&[]).is_empty());
        assert!(to_records(&[row(&["ID", "Nome"])]).is_empty());
    }

    #[test]
    fn field_walks_aliases_in_order() {
        let record = normalize_payload(&json!({ "conteudo": "corpo", "Autor": "Ana" }));
        assert_eq!(field(&record, &["mensagem", "conteudo"], ""), "corpo");
        assert_eq!(field(&record, &["autor"], ""), "Ana");
        assert_eq!(field(&record, &["status"], "Pendente"), "Pendente");
    }

    #[test]
    fn field_skips_blank_values() {
        let record = normalize_payload(&json!({ "mensagem": "  ", "conteudo": "corpo" }));
        assert_eq!(field(&record, &["mensagem", "conteudo"], ""), "corpo");
    }

    #[test]
    fn normalize_payload_stringifies_scalars() {
        let record = normalize_payload(&json!({
            "Nome": "X",
            "reservado": true,
            "prioridade": 2,
            "extra": {"nested": "ignored"}
        }));
        assert_eq!(record["nome"], "X");
        assert_eq!(record["reservado"], "true");
        assert_eq!(record["prioridade"], "2");
        assert!(!record.contains_key("extra"));
    }

    #[test]
    fn next_id_scans_existing_ids() {
        let rows = vec![
            row(&["ID", "Nome"]),
            row(&["3", "a"]),
            row(&["7", "b"]),
            row(&["x", "c"]),
        ];
        assert_eq!(next_id(&to_records(&rows)), "8");
        assert_eq!(next_id(&[]), "1");
    }
}
