pub mod aviso;
pub mod louvor;
pub mod oracao;
pub mod visitante;
