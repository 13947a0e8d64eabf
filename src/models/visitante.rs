use serde::{Deserialize, Serialize};

use crate::services::rows::{field, Record};

/// Visitor registration, one row of the "Visitantes" tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visitante {
    pub id: String,
    pub timestamp: String,
    pub nome: String,
    pub telefone: String,
    pub email: String,
    pub endereco: String,
    #[serde(rename = "comoConheceu")]
    pub como_conheceu: String,
    pub status: String,
}

pub const TAB: &str = "Visitantes";
pub const HEADERS: [&str; 8] = [
    "ID",
    "Timestamp",
    "Nome",
    "Telefone",
    "Email",
    "Endereço",
    "Como Conheceu",
    "Status",
];

pub const DEFAULT_STATUS: &str = "Novo";

impl Visitante {
    pub fn from_record(r: &Record) -> Self {
        Self {
            id: field(r, &["id"], ""),
            timestamp: field(r, &["timestamp"], ""),
            nome: field(r, &["nome"], ""),
            telefone: field(r, &["telefone"], ""),
            email: field(r, &["email"], ""),
            endereco: field(r, &["endereco"], ""),
            como_conheceu: field(r, &["comoconheceu", "como conheceu"], ""),
            status: field(r, &["status"], ""),
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.timestamp.clone(),
            self.nome.clone(),
            self.telefone.clone(),
            self.email.clone(),
            self.endereco.clone(),
            self.como_conheceu.clone(),
            self.status.clone(),
        ]
    }

    pub fn is_blank(&self) -> bool {
        self.to_row().iter().all(|v| v.trim().is_empty())
    }
}
