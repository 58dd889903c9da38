//! Academic-unit catalog model.
//!
//! Academic units (schools and faculties) come from an institutional
//! catalog. Course plans reference them by id; the public surface shows
//! their name and, when available, their abbreviation.

use serde::{Deserialize, Serialize};

/// An academic unit from the institutional catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnidadAcademica {
    /// Catalog identifier.
    pub id: i64,
    /// Full name, e.g. "Escuela Superior de Cómputo".
    pub nombre: String,
    /// Short form, e.g. "ESCOM".
    pub abreviatura: Option<String>,
}

impl UnidadAcademica {
    /// Creates a catalog entry without abbreviation.
    pub fn nueva(id: i64, nombre: impl Into<String>) -> Self {
        Self {
            id,
            nombre: nombre.into(),
            abreviatura: None,
        }
    }

    /// Sets the abbreviation.
    pub fn with_abreviatura(mut self, abreviatura: impl Into<String>) -> Self {
        self.abreviatura = Some(abreviatura.into());
        self
    }

    /// Abbreviation, or an empty string when the entry has none.
    #[inline]
    pub fn abreviatura_o_vacia(&self) -> &str {
        self.abreviatura.as_deref().unwrap_or("")
    }
}
