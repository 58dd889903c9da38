//! Session block model.
//!
//! A block represents one scheduled class session inside a thematic unit:
//! its topics, the three-phase activity description, didactic resources,
//! learning evidences, evaluation instruments, and a grading weight.
//!
//! Resource, evidence, and instrument lists travel as string arrays but
//! are edited as a single semicolon-delimited field; the conversion
//! helpers here keep both forms equivalent.

use serde::{Deserialize, Serialize};

/// One class session within a thematic unit.
///
/// Session numbers are 1-based and contiguous; they are reassigned by the
/// editor after every insert or delete rather than tracked reactively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bloque {
    /// Session number (1-based, matches position in the unit).
    pub numero_sesion: u32,
    /// Topics and subtopics covered in this session.
    pub temas_subtemas: String,
    /// Opening / development / closing activity descriptions.
    pub actividades: Actividades,
    /// Didactic resources.
    pub recursos: Vec<String>,
    /// Learning evidences.
    pub evidencias: Vec<String>,
    /// Evaluation instruments.
    pub instrumentos: Vec<String>,
    /// Grading weight in percent. The sum across one unit must not exceed 100.
    pub valor_porcentual: f64,
}

/// Three-phase activity description of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Actividades {
    /// Opening activities.
    #[serde(default)]
    pub inicio: String,
    /// Development activities.
    #[serde(default)]
    pub desarrollo: String,
    /// Closing activities.
    #[serde(default)]
    pub cierre: String,
}

impl Bloque {
    /// Creates an empty block with the given session number.
    ///
    /// Lists start with one blank entry so the editing form always has a
    /// visible row; blank entries are dropped when building a save payload.
    pub fn plantilla(numero_sesion: u32) -> Self {
        Self {
            numero_sesion,
            temas_subtemas: String::new(),
            actividades: Actividades::default(),
            recursos: vec![String::new()],
            evidencias: vec![String::new()],
            instrumentos: vec![String::new()],
            valor_porcentual: 0.0,
        }
    }

    /// Sets the topics text.
    pub fn with_temas(mut self, temas: impl Into<String>) -> Self {
        self.temas_subtemas = temas.into();
        self
    }

    /// Sets the three activity phases.
    pub fn with_actividades(
        mut self,
        inicio: impl Into<String>,
        desarrollo: impl Into<String>,
        cierre: impl Into<String>,
    ) -> Self {
        self.actividades = Actividades {
            inicio: inicio.into(),
            desarrollo: desarrollo.into(),
            cierre: cierre.into(),
        };
        self
    }

    /// Sets the resource list.
    pub fn with_recursos(mut self, recursos: Vec<String>) -> Self {
        self.recursos = recursos;
        self
    }

    /// Sets the evidence list.
    pub fn with_evidencias(mut self, evidencias: Vec<String>) -> Self {
        self.evidencias = evidencias;
        self
    }

    /// Sets the instrument list.
    pub fn with_instrumentos(mut self, instrumentos: Vec<String>) -> Self {
        self.instrumentos = instrumentos;
        self
    }

    /// Sets the grading weight.
    pub fn with_valor(mut self, valor: f64) -> Self {
        self.valor_porcentual = valor;
        self
    }
}

/// Joins list entries into a single semicolon-delimited field ("a; b; c").
pub fn lista_a_texto(items: &[String]) -> String {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Splits a semicolon-delimited field back into list entries.
///
/// Pieces are trimmed and blank pieces dropped, so the round trip through
/// [`lista_a_texto`] is stable.
pub fn texto_a_lista(texto: &str) -> Vec<String> {
    texto
        .split(';')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plantilla_tiene_filas_en_blanco() {
        let b = Bloque::plantilla(1);
        assert_eq!(b.numero_sesion, 1);
        assert_eq!(b.recursos, vec![String::new()]);
        assert_eq!(b.evidencias, vec![String::new()]);
        assert_eq!(b.instrumentos, vec![String::new()]);
        assert_eq!(b.valor_porcentual, 0.0);
    }

    #[test]
    fn test_lista_a_texto() {
        let items = vec![
            "Pizarrón".to_string(),
            "  Proyector ".to_string(),
            String::new(),
            "Rúbrica".to_string(),
        ];
        assert_eq!(lista_a_texto(&items), "Pizarrón; Proyector; Rúbrica");
    }

    #[test]
    fn test_texto_a_lista() {
        let items = texto_a_lista("Pizarrón; Proyector ;; Rúbrica");
        assert_eq!(items, vec!["Pizarrón", "Proyector", "Rúbrica"]);
    }

    #[test]
    fn test_conversion_estable() {
        let texto = "Lista de cotejo; Examen escrito";
        let ida = texto_a_lista(texto);
        assert_eq!(lista_a_texto(&ida), texto);
    }

    #[test]
    fn test_texto_vacio() {
        assert!(texto_a_lista("").is_empty());
        assert!(texto_a_lista(" ; ; ").is_empty());
    }
}
