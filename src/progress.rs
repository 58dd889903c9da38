//! Per-section capture progress.
//!
//! The capture form is split into five sections; each one reports the
//! list of captions still missing. A section is complete when its list
//! is empty. Progress never rejects a document: it only accumulates
//! what remains to be captured, in form order, so the sidebar and the
//! finalization flow can point the teacher at the right place.
//!
//! # Emptiness
//! A text field counts as missing when it is blank after trimming; an
//! optional field when it is absent. Numeric captions ask for a value
//! greater than zero (non-finite totals also count as missing).

use serde::{Deserialize, Serialize};

use crate::models::{Planeacion, SeccionesCompletas};

/// The five capture sections, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seccion {
    /// 1. General data.
    #[serde(rename = "datos")]
    Datos,
    /// 2. Relations with other courses and transversal axes.
    #[serde(rename = "relaciones")]
    Relaciones,
    /// 3. Didactic organization by thematic unit.
    #[serde(rename = "organizacion")]
    Organizacion,
    /// 4. Bibliographic references.
    #[serde(rename = "referencias")]
    Referencias,
    /// 5. Plagiarism tooling.
    #[serde(rename = "plagio")]
    Plagio,
}

impl Seccion {
    /// All sections in form order.
    pub const TODAS: [Seccion; 5] = [
        Seccion::Datos,
        Seccion::Relaciones,
        Seccion::Organizacion,
        Seccion::Referencias,
        Seccion::Plagio,
    ];

    /// Stable key used in persisted flags and URLs.
    pub fn clave(&self) -> &'static str {
        match self {
            Seccion::Datos => "datos",
            Seccion::Relaciones => "relaciones",
            Seccion::Organizacion => "organizacion",
            Seccion::Referencias => "referencias",
            Seccion::Plagio => "plagio",
        }
    }

    /// UI label shown on the section tab.
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Seccion::Datos => "1. Datos generales",
            Seccion::Relaciones => "2. Relaciones y ejes",
            Seccion::Organizacion => "3. Organización didáctica",
            Seccion::Referencias => "4. Referencias",
            Seccion::Plagio => "5. Plagio",
        }
    }
}

/// Progress of one section: the captions still missing, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeccionProgreso {
    pub faltantes: Vec<String>,
}

impl SeccionProgreso {
    /// True when nothing is missing.
    #[inline]
    pub fn completa(&self) -> bool {
        self.faltantes.is_empty()
    }
}

/// Progress of a whole document, one entry per section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgresoPlaneacion {
    pub datos: SeccionProgreso,
    pub relaciones: SeccionProgreso,
    pub organizacion: SeccionProgreso,
    pub referencias: SeccionProgreso,
    pub plagio: SeccionProgreso,
}

impl ProgresoPlaneacion {
    /// Progress of one section.
    pub fn seccion(&self, seccion: Seccion) -> &SeccionProgreso {
        match seccion {
            Seccion::Datos => &self.datos,
            Seccion::Relaciones => &self.relaciones,
            Seccion::Organizacion => &self.organizacion,
            Seccion::Referencias => &self.referencias,
            Seccion::Plagio => &self.plagio,
        }
    }

    /// True when the section has no missing captions.
    #[inline]
    pub fn completa(&self, seccion: Seccion) -> bool {
        self.seccion(seccion).completa()
    }

    /// First incomplete section in form order, if any.
    pub fn primera_incompleta(&self) -> Option<Seccion> {
        Seccion::TODAS.into_iter().find(|s| !self.completa(*s))
    }

    /// True when every section is complete.
    #[inline]
    pub fn todas_completas(&self) -> bool {
        self.primera_incompleta().is_none()
    }

    /// Number of complete sections, out of five.
    pub fn completadas(&self) -> usize {
        Seccion::TODAS.iter().filter(|s| self.completa(**s)).count()
    }

    /// Overall completion percent, rounded to the nearest integer.
    pub fn porcentaje(&self) -> u8 {
        ((self.completadas() as f64 / Seccion::TODAS.len() as f64) * 100.0).round() as u8
    }

    /// Persisted per-section flags derived from this progress.
    pub fn secciones_completas(&self) -> SeccionesCompletas {
        SeccionesCompletas {
            datos: self.datos.completa(),
            relaciones: self.relaciones.completa(),
            organizacion: self.organizacion.completa(),
            referencias: self.referencias.completa(),
            plagio: self.plagio.completa(),
        }
    }
}

#[inline]
fn vacio(s: &str) -> bool {
    s.trim().is_empty()
}

/// Computes the per-section progress of a document.
///
/// Missing captions are accumulated in form order and cite the official
/// field numbers, e.g. "Periodo escolar (1.1)". Unit and block captions
/// are numbered by position, which the editor keeps aligned with the
/// stored `numero` fields.
pub fn progreso_secciones(p: &Planeacion) -> ProgresoPlaneacion {
    let mut prog = ProgresoPlaneacion::default();

    // 1. Datos generales
    let datos = &mut prog.datos.faltantes;
    if vacio(&p.periodo_escolar) {
        datos.push("Periodo escolar (1.1)".into());
    }
    if p.plan_estudios_anio.is_none() {
        datos.push("Año del plan de estudios (1.2)".into());
    }
    if vacio(&p.semestre_nivel) {
        datos.push("Semestre / nivel (1.3)".into());
    }
    if vacio(&p.programa_academico) {
        datos.push("Programa académico (1.4)".into());
    }
    if vacio(&p.academia) {
        datos.push("Academia (1.5)".into());
    }
    if vacio(&p.unidad_aprendizaje_nombre) {
        datos.push("Unidad de aprendizaje (1.6)".into());
    }
    if p.area_formacion.is_none() {
        datos.push("Área de formación (1.7)".into());
    }
    if p.modalidad.is_none() {
        datos.push("Modalidad (1.8)".into());
    }
    if vacio(&p.grupos) {
        datos.push("Grupo(s) (1.10)".into());
    }

    let total_creditos = p.creditos.tepic + p.creditos.satca;
    if !total_creditos.is_finite() || total_creditos <= 0.0 {
        datos.push("Créditos TEPIC / SATCA (1.9–1.10): captura al menos un crédito".into());
    }

    if p.sesiones_por_semestre == 0 {
        datos.push("No. de sesiones por semestre (1.11)".into());
    }
    let sesiones_espacio = p.sesiones_detalle.suma();
    if sesiones_espacio == 0 {
        datos.push(
            "Distribuir No. de sesiones por semestre en aula / laboratorio / clínica / otro (1.11)"
                .into(),
        );
    } else if p.sesiones_por_semestre > 0 && sesiones_espacio != p.sesiones_por_semestre {
        datos.push(
            "La suma de aula/laboratorio/clínica/otro debe coincidir con el total de sesiones por semestre (1.11)"
                .into(),
        );
    }

    let horas = &p.horas_semestre;
    if !horas.total.is_finite() || horas.total <= 0.0 {
        datos.push("Total de horas por semestre (1.12)".into());
    }
    if horas.suma_por_tipo() <= 0.0 {
        datos.push("Horas por semestre — por tipo (teoría / práctica) (1.12)".into());
    }
    if horas.suma_por_espacio() <= 0.0 {
        datos.push(
            "Horas por semestre — por espacio (aula / laboratorio / clínica / otro) (1.12)".into(),
        );
    }

    // 2. Relaciones y ejes
    let relaciones = &mut prog.relaciones.faltantes;
    if vacio(&p.antecedentes) {
        relaciones.push("Antecedentes (2.1)".into());
    }
    if vacio(&p.laterales) {
        relaciones.push("Laterales (2.2)".into());
    }
    if vacio(&p.subsecuentes) {
        relaciones.push("Subsecuentes (2.3)".into());
    }
    if vacio(&p.ejes.compromiso_social_sustentabilidad) {
        relaciones.push("Compromiso social y sustentabilidad (2.4)".into());
    }
    if vacio(&p.ejes.perspectiva_genero) {
        relaciones.push("Perspectiva de género (2.5)".into());
    }
    if vacio(&p.ejes.internacionalizacion) {
        relaciones.push("Internacionalización (2.6)".into());
    }

    // 3. Organización didáctica
    let organizacion = &mut prog.organizacion.faltantes;
    for (idx, u) in p.unidades_tematicas.iter().enumerate() {
        let n = idx + 1;

        if vacio(&u.nombre_unidad_tematica) {
            organizacion.push(format!("Unidad temática {}: nombre", n));
        }
        if vacio(&u.unidad_competencia) {
            organizacion.push(format!("Unidad temática {}: unidad de competencia", n));
        }
        if u.periodo_desarrollo.del.is_none() || u.periodo_desarrollo.al.is_none() {
            organizacion.push(format!("Unidad temática {}: periodo de desarrollo", n));
        }
        if u.horas.suma() <= 0.0 {
            organizacion.push(format!(
                "Unidad temática {}: horas por espacio (aula / laboratorio / taller / clínica / otro)",
                n
            ));
        }
        if u.sesiones_por_espacio.suma() == 0 {
            organizacion.push(format!(
                "Unidad temática {}: sesiones por espacio (aula / laboratorio / taller / clínica / otro)",
                n
            ));
        }
        if !u.tiene_aprendizajes() {
            organizacion.push(format!("Unidad temática {}: aprendizajes esperados", n));
        }
        if u.bloques.is_empty() {
            organizacion.push(format!("Unidad temática {}: bloques de sesiones", n));
        }
        if vacio(&u.precisiones) {
            organizacion.push(format!("Unidad temática {}: precisiones de la unidad", n));
        }

        for (j, b) in u.bloques.iter().enumerate() {
            let prefijo = format!("Unidad temática {}, sesión {}:", n, j + 1);

            if vacio(&b.temas_subtemas) {
                organizacion.push(format!("{} temas y subtemas", prefijo));
            }
            if vacio(&b.actividades.inicio) {
                organizacion.push(format!("{} actividades de inicio", prefijo));
            }
            if vacio(&b.actividades.desarrollo) {
                organizacion.push(format!("{} actividades de desarrollo", prefijo));
            }
            if vacio(&b.actividades.cierre) {
                organizacion.push(format!("{} actividades de cierre", prefijo));
            }
            if !b.recursos.iter().any(|r| !vacio(r)) {
                organizacion.push(format!("{} recursos didácticos", prefijo));
            }
            if !b.evidencias.iter().any(|e| !vacio(e)) {
                organizacion.push(format!("{} evidencias de aprendizaje", prefijo));
            }
            if !b.instrumentos.iter().any(|i| !vacio(i)) {
                organizacion.push(format!("{} instrumentos de evaluación", prefijo));
            }
            if !b.valor_porcentual.is_finite() || b.valor_porcentual <= 0.0 {
                organizacion.push(format!("{} valor porcentual (> 0%)", prefijo));
            }
        }
    }

    // 4. Referencias
    if p.referencias.is_empty() {
        prog.referencias
            .faltantes
            .push("Agregar al menos una referencia (4.1)".into());
    }

    // 5. Plagio
    if !p.plagio.declarado() {
        prog.plagio
            .faltantes
            .push("Seleccionar al menos una herramienta o describir otra (5.1)".into());
    }

    prog
}
