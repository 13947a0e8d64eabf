use serde::{Deserialize, Serialize};

use crate::services::rows::{field, Record};

/// Announcement record, one row of the "Avisos" tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aviso {
    pub id: String,
    pub timestamp: String,
    pub titulo: String,
    pub mensagem: String,
    pub autor: String,
    pub prioridade: String,
    pub status: String,
}

pub const TAB: &str = "Avisos";
pub const HEADERS: [&str; 7] = [
    "ID",
    "Timestamp",
    "Título",
    "Conteúdo",
    "Autor",
    "Prioridade",
    "Status",
];

pub const DEFAULT_PRIORIDADE: &str = "Normal";
pub const DEFAULT_STATUS: &str = "Pendente";

impl Aviso {
    /// Map a normalized-key record (sheet row or client payload) to the
    /// API shape. The message column is headed "Conteúdo" in the sheet, so
    /// "conteudo" is accepted as an alias for "mensagem".
    pub fn from_record(r: &Record) -> Self {
        Self {
            id: field(r, &["id"], ""),
            timestamp: field(r, &["timestamp"], ""),
            titulo: field(r, &["titulo"], ""),
            mensagem: field(r, &["mensagem", "conteudo"], ""),
            autor: field(r, &["autor"], ""),
            prioridade: field(r, &["prioridade"], ""),
            status: field(r, &["status"], ""),
        }
    }

    /// Cell values in the tab's declared column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.timestamp.clone(),
            self.titulo.clone(),
            self.mensagem.clone(),
            self.autor.clone(),
            self.prioridade.clone(),
            self.status.clone(),
        ]
    }

    pub fn is_blank(&self) -> bool {
        self.to_row().iter().all(|v| v.trim().is_empty())
    }
}
