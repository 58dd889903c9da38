//! Course plan document model.
//!
//! A [`Planeacion`] is the root document a teacher captures across the
//! five form sections: general data, relations with other courses,
//! organization by thematic unit, bibliographic references, and plagiarism
//! tooling. The document stays in `Borrador` status while it is being
//! edited and becomes `Finalizada` (read-only) once published.
//!
//! Numbered captions such as "1.11" refer to the official institutional
//! form fields and show up verbatim in progress and congruence messages.

use serde::{Deserialize, Serialize};

use super::{Referencia, UnidadTematica};

/// Lifecycle status of a course plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Editable draft (default).
    #[serde(rename = "borrador")]
    Borrador,
    /// Published, read-only.
    #[serde(rename = "finalizada")]
    Finalizada,
}

impl Default for Status {
    fn default() -> Self {
        Status::Borrador
    }
}

/// Curricular area the course belongs to (field 1.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaFormacion {
    #[serde(rename = "Institucional")]
    Institucional,
    #[serde(rename = "Científica básica")]
    CientificaBasica,
    #[serde(rename = "Profesional")]
    Profesional,
    #[serde(rename = "Terminal y de integración")]
    TerminalIntegracion,
}

/// Delivery modality of the course (field 1.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modalidad {
    #[serde(rename = "Escolarizada")]
    Escolarizada,
    #[serde(rename = "No escolarizada")]
    NoEscolarizada,
    #[serde(rename = "Mixta")]
    Mixta,
}

/// Credit values under the two institutional schemes (fields 1.9-1.10).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Creditos {
    pub tepic: f64,
    pub satca: f64,
}

/// Per-space distribution of the declared semester sessions (field 1.11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SesionesDetalle {
    pub aula: u32,
    pub laboratorio: u32,
    pub clinica: u32,
    pub otro: u32,
}

impl SesionesDetalle {
    /// Total sessions across the four spaces.
    #[inline]
    pub fn suma(&self) -> u32 {
        self.aula + self.laboratorio + self.clinica + self.otro
    }
}

/// Semester hour totals, by kind and by space (field 1.12).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HorasSemestre {
    pub total: f64,
    pub teoria: f64,
    pub practica: f64,
    pub aula: f64,
    pub laboratorio: f64,
    pub clinica: f64,
    pub otro: f64,
}

impl HorasSemestre {
    /// Hours by kind: theory plus practice.
    #[inline]
    pub fn suma_por_tipo(&self) -> f64 {
        self.teoria + self.practica
    }

    /// Hours by space: classroom, laboratory, clinic and other.
    #[inline]
    pub fn suma_por_espacio(&self) -> f64 {
        self.aula + self.laboratorio + self.clinica + self.otro
    }
}

/// Institutional transversal axes (fields 2.4-2.6).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ejes {
    pub compromiso_social_sustentabilidad: String,
    pub perspectiva_genero: String,
    pub internacionalizacion: String,
}

/// Didactic organization narrative (section 3 header fields).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Organizacion {
    pub proposito: String,
    pub estrategia: String,
    pub metodos: String,
}

/// Plagiarism-detection tooling declared for the course (section 5).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Plagio {
    pub ithenticate: bool,
    pub turnitin: bool,
    /// Free-text description of a tool outside the two checkboxes.
    pub otro: String,
}

impl Plagio {
    /// True when at least one tool is selected or described.
    #[inline]
    pub fn declarado(&self) -> bool {
        self.ithenticate || self.turnitin || !self.otro.trim().is_empty()
    }
}

/// Persisted completion flags, one per form section.
///
/// The keys mirror the five section identifiers and are stored alongside
/// the document so list views can show progress without recomputing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeccionesCompletas {
    pub datos: bool,
    pub relaciones: bool,
    pub organizacion: bool,
    pub referencias: bool,
    pub plagio: bool,
}

impl SeccionesCompletas {
    /// Number of completed sections, out of five.
    pub fn completadas(&self) -> usize {
        [
            self.datos,
            self.relaciones,
            self.organizacion,
            self.referencias,
            self.plagio,
        ]
        .iter()
        .filter(|c| **c)
        .count()
    }

    /// Overall completion percent, rounded to the nearest integer.
    pub fn porcentaje(&self) -> u8 {
        ((self.completadas() as f64 / 5.0) * 100.0).round() as u8
    }
}

/// A complete course plan document.
///
/// All text fields default to empty; "captured" means non-blank after
/// trimming. Optional fields (`plan_estudios_anio`, `area_formacion`,
/// `modalidad`) are `None` until the teacher picks a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planeacion {
    /// School term, e.g. "2025-2026/1" (field 1.1).
    pub periodo_escolar: String,
    /// Year of the study plan (field 1.2).
    pub plan_estudios_anio: Option<i32>,
    /// Semester or level (field 1.3).
    pub semestre_nivel: String,
    /// Academic program (field 1.4).
    pub programa_academico: String,
    /// Academy the course belongs to (field 1.5).
    pub academia: String,
    /// Learning-unit (course) name (field 1.6).
    pub unidad_aprendizaje_nombre: String,
    /// Group identifiers, free text (field 1.10).
    pub grupos: String,
    /// Curricular area (field 1.7).
    pub area_formacion: Option<AreaFormacion>,
    /// Delivery modality (field 1.8).
    pub modalidad: Option<Modalidad>,
    /// TEPIC / SATCA credits (fields 1.9-1.10).
    pub creditos: Creditos,
    /// Declared total sessions for the semester (field 1.11).
    pub sesiones_por_semestre: u32,
    /// Per-space distribution of the declared sessions (field 1.11).
    pub sesiones_detalle: SesionesDetalle,
    /// Semester hours, total and broken down (field 1.12).
    pub horas_semestre: HorasSemestre,
    /// Preceding courses (field 2.1).
    pub antecedentes: String,
    /// Concurrent courses (field 2.2).
    pub laterales: String,
    /// Subsequent courses (field 2.3).
    pub subsecuentes: String,
    /// Transversal axes (fields 2.4-2.6).
    pub ejes: Ejes,
    /// Didactic organization narrative (section 3).
    pub organizacion: Organizacion,
    /// Plagiarism tooling (section 5).
    pub plagio: Plagio,
    /// Thematic units, ordered by `numero` (section 3).
    pub unidades_tematicas: Vec<UnidadTematica>,
    /// Bibliographic references (section 4).
    pub referencias: Vec<Referencia>,
    /// Lifecycle status.
    pub status: Status,
}

impl Planeacion {
    /// Creates a blank draft with a single template unit, the same
    /// starting point the capture form offers.
    pub fn nueva() -> Self {
        Self {
            periodo_escolar: String::new(),
            plan_estudios_anio: None,
            semestre_nivel: String::new(),
            programa_academico: String::new(),
            academia: String::new(),
            unidad_aprendizaje_nombre: String::new(),
            grupos: String::new(),
            area_formacion: None,
            modalidad: None,
            creditos: Creditos::default(),
            sesiones_por_semestre: 0,
            sesiones_detalle: SesionesDetalle::default(),
            horas_semestre: HorasSemestre::default(),
            antecedentes: String::new(),
            laterales: String::new(),
            subsecuentes: String::new(),
            ejes: Ejes::default(),
            organizacion: Organizacion::default(),
            plagio: Plagio::default(),
            unidades_tematicas: vec![UnidadTematica::plantilla(1)],
            referencias: Vec::new(),
            status: Status::Borrador,
        }
    }

    /// Sets the school term.
    pub fn with_periodo_escolar(mut self, periodo: impl Into<String>) -> Self {
        self.periodo_escolar = periodo.into();
        self
    }

    /// Sets the study-plan year.
    pub fn with_plan_estudios_anio(mut self, anio: i32) -> Self {
        self.plan_estudios_anio = Some(anio);
        self
    }

    /// Sets the curricular area.
    pub fn with_area_formacion(mut self, area: AreaFormacion) -> Self {
        self.area_formacion = Some(area);
        self
    }

    /// Sets the delivery modality.
    pub fn with_modalidad(mut self, modalidad: Modalidad) -> Self {
        self.modalidad = Some(modalidad);
        self
    }

    /// Replaces the thematic units.
    pub fn with_unidades(mut self, unidades: Vec<UnidadTematica>) -> Self {
        self.unidades_tematicas = unidades;
        self
    }

    /// Replaces the references.
    pub fn with_referencias(mut self, referencias: Vec<Referencia>) -> Self {
        self.referencias = referencias;
        self
    }

    /// True once the document has been finalized.
    #[inline]
    pub fn finalizada(&self) -> bool {
        self.status == Status::Finalizada
    }
}

impl Default for Planeacion {
    fn default() -> Self {
        Self::nueva()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planeacion_nueva_es_borrador() {
        let p = Planeacion::nueva();
        assert_eq!(p.status, Status::Borrador);
        assert!(!p.finalizada());
        assert_eq!(p.unidades_tematicas.len(), 1);
        assert_eq!(p.unidades_tematicas[0].numero, 1);
        assert!(p.referencias.is_empty());
    }

    #[test]
    fn test_status_serializa_en_minusculas() {
        let json = serde_json::to_string(&Status::Finalizada).unwrap();
        assert_eq!(json, "\"finalizada\"");
        let json = serde_json::to_string(&Status::Borrador).unwrap();
        assert_eq!(json, "\"borrador\"");
    }

    #[test]
    fn test_area_formacion_conserva_acentos() {
        let json = serde_json::to_string(&AreaFormacion::CientificaBasica).unwrap();
        assert_eq!(json, "\"Científica básica\"");
        let json = serde_json::to_string(&AreaFormacion::TerminalIntegracion).unwrap();
        assert_eq!(json, "\"Terminal y de integración\"");
        let de: AreaFormacion = serde_json::from_str("\"Institucional\"").unwrap();
        assert_eq!(de, AreaFormacion::Institucional);
    }

    #[test]
    fn test_modalidad_nombres_de_catalogo() {
        let json = serde_json::to_string(&Modalidad::NoEscolarizada).unwrap();
        assert_eq!(json, "\"No escolarizada\"");
        let de: Modalidad = serde_json::from_str("\"Mixta\"").unwrap();
        assert_eq!(de, Modalidad::Mixta);
    }

    #[test]
    fn test_plagio_declarado() {
        let mut plagio = Plagio::default();
        assert!(!plagio.declarado());
        plagio.otro = "   ".into();
        assert!(!plagio.declarado());
        plagio.turnitin = true;
        assert!(plagio.declarado());
        plagio.turnitin = false;
        plagio.otro = "Revisión manual".into();
        assert!(plagio.declarado());
    }

    #[test]
    fn test_secciones_completas_porcentaje() {
        let mut sc = SeccionesCompletas::default();
        assert_eq!(sc.completadas(), 0);
        assert_eq!(sc.porcentaje(), 0);
        sc.datos = true;
        sc.plagio = true;
        assert_eq!(sc.completadas(), 2);
        assert_eq!(sc.porcentaje(), 40);
        sc.relaciones = true;
        sc.organizacion = true;
        sc.referencias = true;
        assert_eq!(sc.porcentaje(), 100);
    }

    #[test]
    fn test_horas_semestre_sumas() {
        let horas = HorasSemestre {
            total: 72.0,
            teoria: 40.0,
            practica: 32.0,
            aula: 40.0,
            laboratorio: 24.0,
            clinica: 0.0,
            otro: 8.0,
        };
        assert_eq!(horas.suma_por_tipo(), 72.0);
        assert_eq!(horas.suma_por_espacio(), 72.0);
    }
}
