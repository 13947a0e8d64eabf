use serde::{Deserialize, Serialize};

use crate::services::rows::{field, Record};

/// Praise song submission, one row of the "Louvores" tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Louvor {
    pub id: String,
    pub timestamp: String,
    pub nome: String,
    pub musica: String,
    pub artista: String,
    #[serde(rename = "linkYouTube")]
    pub link_youtube: String,
    pub observacoes: String,
    pub status: String,
}

pub const TAB: &str = "Louvores";
pub const HEADERS: [&str; 8] = [
    "ID",
    "Timestamp",
    "Nome",
    "Música",
    "Artista",
    "Link",
    "Observações",
    "Status",
];

pub const DEFAULT_STATUS: &str = "Pendente";

impl Louvor {
    pub fn from_record(r: &Record) -> Self {
        Self {
            id: field(r, &["id"], ""),
            timestamp: field(r, &["timestamp"], ""),
            nome: field(r, &["nome"], ""),
            musica: field(r, &["musica"], ""),
            artista: field(r, &["artista"], ""),
            link_youtube: field(r, &["linkyoutube", "link youtube", "link"], ""),
            observacoes: field(r, &["observacoes"], ""),
            status: field(r, &["status"], ""),
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.timestamp.clone(),
            self.nome.clone(),
            self.musica.clone(),
            self.artista.clone(),
            self.link_youtube.clone(),
            self.observacoes.clone(),
            self.status.clone(),
        ]
    }

    pub fn is_blank(&self) -> bool {
        self.to_row().iter().all(|v| v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::rows::normalize_payload;
    use serde_json::json;

    #[test]
    fn link_aliases_resolve() {
        let payload = normalize_payload(&json!({ "nome": "X", "linkYouTube": "https://y" }));
        assert_eq!(Louvor::from_record(&payload).link_youtube, "https://y");

        let payload = normalize_payload(&json!({ "Link": "https://z" }));
        assert_eq!(Louvor::from_record(&payload).link_youtube, "https://z");
    }

    #[test]
    fn serializes_link_as_camel_case() {
        let louvor = Louvor::from_record(&normalize_payload(&json!({ "link": "https://y" })));
        let value = serde_json::to_value(&louvor).unwrap();
        assert_eq!(value["linkYouTube"], "https://y");
        assert!(value.get("link_youtube").is_none());
    }
}
