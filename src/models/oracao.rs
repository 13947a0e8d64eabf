use serde::{Deserialize, Serialize};

use crate::services::rows::{field, Record};

/// Prayer request, one row of the "Oracoes" tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Oracao {
    pub id: String,
    pub timestamp: String,
    pub nome: String,
    pub pedido: String,
    pub reservado: String,
    pub status: String,
}

pub const TAB: &str = "Oracoes";
pub const HEADERS: [&str; 6] = ["ID", "Timestamp", "Nome", "Pedido", "Reservado", "Status"];

pub const DEFAULT_STATUS: &str = "Pendente";

impl Oracao {
    pub fn from_record(r: &Record) -> Self {
        Self {
            id: field(r, &["id"], ""),
            timestamp: field(r, &["timestamp"], ""),
            nome: field(r, &["nome"], ""),
            pedido: field(r, &["pedido"], ""),
            reservado: field(r, &["reservado"], ""),
            status: field(r, &["status"], ""),
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.timestamp.clone(),
            self.nome.clone(),
            self.pedido.clone(),
            self.reservado.clone(),
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
    fn boolean_reservado_is_stringified() {
        let payload = normalize_payload(&json!({ "nome": "X", "reservado": true }));
        assert_eq!(Oracao::from_record(&payload).reservado, "true");
    }
}
