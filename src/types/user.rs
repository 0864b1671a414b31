//! User records for the bank shell
//!
//! A user is a registered customer, identified by a national ID (CPF).
//! Users are created once through registration and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Registered customer
///
/// Field names on disk follow the `usuarios.json` layout so that files written
/// by earlier versions of the program load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Full name as typed at registration
    #[serde(rename = "nome")]
    pub full_name: String,

    /// Birth date in `dd-mm-aaaa` form
    ///
    /// Kept as free text; it is never parsed or validated as a calendar date.
    #[serde(rename = "data_nascimento")]
    pub birth_date: String,

    /// National ID (CPF), digits only by convention
    ///
    /// This is the lookup key and must be unique within the user directory.
    #[serde(rename = "cpf")]
    pub national_id: String,

    /// Free-text address (street, number - district - city/state)
    #[serde(rename = "endereco")]
    pub address: String,
}

impl User {
    /// Create a new user record
    pub fn new(
        full_name: impl Into<String>,
        birth_date: impl Into<String>,
        national_id: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        User {
            full_name: full_name.into(),
            birth_date: birth_date.into(),
            national_id: national_id.into(),
            address: address.into(),
        }
    }
}
