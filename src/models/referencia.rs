//! Bibliographic reference model.
//!
//! Section 4 of the form captures the course bibliography: an APA
//! citation, the thematic units it applies to, and whether it is part of
//! the basic or the complementary bibliography.

use serde::{Deserialize, Serialize};

/// Bibliography classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoReferencia {
    /// Required reading.
    #[serde(rename = "Básica")]
    Basica,
    /// Suggested reading.
    #[serde(rename = "Complementaria")]
    Complementaria,
}

impl Default for TipoReferencia {
    fn default() -> Self {
        TipoReferencia::Basica
    }
}

/// A bibliographic reference of the course plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referencia {
    /// APA-formatted citation (field 4.1).
    pub cita_apa: String,
    /// Numbers of the thematic units the reference applies to.
    pub unidades_aplica: Vec<u32>,
    /// Basic or complementary bibliography.
    pub tipo: TipoReferencia,
}

impl Referencia {
    /// Creates a basic-bibliography reference.
    pub fn nueva(cita_apa: impl Into<String>) -> Self {
        Self {
            cita_apa: cita_apa.into(),
            unidades_aplica: Vec::new(),
            tipo: TipoReferencia::Basica,
        }
    }

    /// Sets the units the reference applies to.
    pub fn with_unidades(mut self, unidades: Vec<u32>) -> Self {
        self.unidades_aplica = unidades;
        self
    }

    /// Sets the bibliography classification.
    pub fn with_tipo(mut self, tipo: TipoReferencia) -> Self {
        self.tipo = tipo;
        self
    }

    /// True when the citation text is blank after trimming.
    #[inline]
    pub fn en_blanco(&self) -> bool {
        self.cita_apa.trim().is_empty()
    }
}
