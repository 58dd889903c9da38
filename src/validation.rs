//! Structural validation for course plan documents.
//!
//! Checks integrity of a document before it is persisted, independent of
//! the per-section progress rules. Detects:
//! - Blank required fields
//! - Numeric values out of range
//! - Empty required collections
//! - Broken unit or block numbering
//! - References pointing at units that do not exist
//! - Percentage budgets over 100
//! - Inverted development periods
//!
//! All issues are accumulated; validation never stops at the first error.

use std::collections::HashSet;

use crate::models::{Planeacion, UnidadAcademica, UnidadTematica};

/// Validation result.
pub type ResultadoValidacion = Result<(), Vec<ErrorValidacion>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorValidacion {
    /// Error category.
    pub kind: ErrorValidacionKind,
    /// Human-readable description.
    pub mensaje: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorValidacionKind {
    /// A required field is blank or absent.
    CampoRequerido,
    /// A numeric value falls outside its allowed range.
    RangoInvalido,
    /// A collection that must hold at least one entry is empty.
    ColeccionVacia,
    /// Unit or block numbers are not contiguous from 1.
    NumeracionRota,
    /// A reference points at a unit number that does not exist.
    ReferenciaInvalida,
    /// Block weights of a unit add up to more than 100.
    PorcentajeExcedido,
    /// A development period ends before it starts.
    PeriodoInvertido,
}

impl ErrorValidacion {
    fn new(kind: ErrorValidacionKind, mensaje: impl Into<String>) -> Self {
        Self {
            kind,
            mensaje: mensaje.into(),
        }
    }
}

impl std::fmt::Display for ErrorValidacion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mensaje)
    }
}

impl std::error::Error for ErrorValidacion {}

fn texto_vacio(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validates a course plan document.
///
/// Checks:
/// 1. Required identification fields are non-blank
/// 2. Study-plan year, credits and hours are in range
/// 3. At least one thematic unit exists
/// 4. Unit and block numbering is contiguous from 1
/// 5. Each unit has a name, a competence, outcomes and blocks
/// 6. Block weights are within `[0, 100]` and sum at most 100 per unit
/// 7. Development periods are not inverted
/// 8. References have a citation and point at existing units
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errores)` with all detected issues.
pub fn validar_planeacion(p: &Planeacion) -> ResultadoValidacion {
    let mut errores = Vec::new();

    let requeridos = [
        ("periodo_escolar", &p.periodo_escolar),
        ("semestre_nivel", &p.semestre_nivel),
        ("programa_academico", &p.programa_academico),
        ("academia", &p.academia),
        ("unidad_aprendizaje_nombre", &p.unidad_aprendizaje_nombre),
        ("grupos", &p.grupos),
    ];
    for (campo, valor) in requeridos {
        if texto_vacio(valor) {
            errores.push(ErrorValidacion::new(
                ErrorValidacionKind::CampoRequerido,
                format!("Campo requerido vacío: {}", campo),
            ));
        }
    }

    match p.plan_estudios_anio {
        None => errores.push(ErrorValidacion::new(
            ErrorValidacionKind::CampoRequerido,
            "Campo requerido vacío: plan_estudios_anio",
        )),
        Some(anio) if anio <= 0 => errores.push(ErrorValidacion::new(
            ErrorValidacionKind::RangoInvalido,
            format!("El año del plan de estudios debe ser positivo: {}", anio),
        )),
        Some(_) => {}
    }

    if !p.creditos.tepic.is_finite() || p.creditos.tepic < 0.0 {
        errores.push(ErrorValidacion::new(
            ErrorValidacionKind::RangoInvalido,
            "Los créditos TEPIC no pueden ser negativos",
        ));
    }
    if !p.creditos.satca.is_finite() || p.creditos.satca < 0.0 {
        errores.push(ErrorValidacion::new(
            ErrorValidacionKind::RangoInvalido,
            "Los créditos SATCA no pueden ser negativos",
        ));
    }

    let horas = [
        ("total", p.horas_semestre.total),
        ("teoria", p.horas_semestre.teoria),
        ("practica", p.horas_semestre.practica),
        ("aula", p.horas_semestre.aula),
        ("laboratorio", p.horas_semestre.laboratorio),
        ("clinica", p.horas_semestre.clinica),
        ("otro", p.horas_semestre.otro),
    ];
    for (campo, valor) in horas {
        if !valor.is_finite() || valor < 0.0 {
            errores.push(ErrorValidacion::new(
                ErrorValidacionKind::RangoInvalido,
                format!("Las horas por semestre ({}) no pueden ser negativas", campo),
            ));
        }
    }

    if p.unidades_tematicas.is_empty() {
        errores.push(ErrorValidacion::new(
            ErrorValidacionKind::ColeccionVacia,
            "Agrega al menos una unidad temática",
        ));
    }

    for (idx, unidad) in p.unidades_tematicas.iter().enumerate() {
        validar_unidad(idx, unidad, &mut errores);
    }

    let numeros: HashSet<u32> = p.unidades_tematicas.iter().map(|u| u.numero).collect();
    for (idx, referencia) in p.referencias.iter().enumerate() {
        if referencia.en_blanco() {
            errores.push(ErrorValidacion::new(
                ErrorValidacionKind::CampoRequerido,
                format!("Referencia {}: la cita APA está vacía", idx + 1),
            ));
        }
        if referencia.unidades_aplica.is_empty() {
            errores.push(ErrorValidacion::new(
                ErrorValidacionKind::ReferenciaInvalida,
                format!(
                    "Referencia {}: indica al menos una unidad donde aplica",
                    idx + 1
                ),
            ));
        }
        for n in &referencia.unidades_aplica {
            if !numeros.contains(n) {
                errores.push(ErrorValidacion::new(
                    ErrorValidacionKind::ReferenciaInvalida,
                    format!(
                        "Referencia {}: la unidad temática {} no existe",
                        idx + 1,
                        n
                    ),
                ));
            }
        }
    }

    if errores.is_empty() {
        Ok(())
    } else {
        Err(errores)
    }
}

fn validar_unidad(idx: usize, unidad: &UnidadTematica, errores: &mut Vec<ErrorValidacion>) {
    let esperado = (idx + 1) as u32;
    if unidad.numero != esperado {
        errores.push(ErrorValidacion::new(
            ErrorValidacionKind::NumeracionRota,
            format!(
                "Unidad temática en posición {} tiene número {}, se esperaba {}",
                idx + 1,
                unidad.numero,
                esperado
            ),
        ));
    }

    let n = unidad.numero;
    if texto_vacio(&unidad.nombre_unidad_tematica) {
        errores.push(ErrorValidacion::new(
            ErrorValidacionKind::CampoRequerido,
            format!("Unidad temática {}: falta el nombre", n),
        ));
    }
    if texto_vacio(&unidad.unidad_competencia) {
        errores.push(ErrorValidacion::new(
            ErrorValidacionKind::CampoRequerido,
            format!("Unidad temática {}: falta la unidad de competencia", n),
        ));
    }
    if !unidad.tiene_aprendizajes() {
        errores.push(ErrorValidacion::new(
            ErrorValidacionKind::ColeccionVacia,
            format!(
                "Unidad temática {}: agrega al menos un aprendizaje esperado",
                n
            ),
        ));
    }
    if unidad.bloques.is_empty() {
        errores.push(ErrorValidacion::new(
            ErrorValidacionKind::ColeccionVacia,
            format!("Unidad temática {}: agrega al menos una sesión", n),
        ));
    }
    if unidad.periodo_desarrollo.invertido() {
        errores.push(ErrorValidacion::new(
            ErrorValidacionKind::PeriodoInvertido,
            format!(
                "Unidad temática {}: la fecha inicial no puede ser posterior a la final",
                n
            ),
        ));
    }

    let espacios = [
        ("aula", unidad.horas.aula),
        ("laboratorio", unidad.horas.laboratorio),
        ("taller", unidad.horas.taller),
        ("clinica", unidad.horas.clinica),
        ("otro", unidad.horas.otro),
    ];
    for (campo, valor) in espacios {
        if !valor.is_finite() || valor < 0.0 {
            errores.push(ErrorValidacion::new(
                ErrorValidacionKind::RangoInvalido,
                format!(
                    "Unidad temática {}: las horas de {} no pueden ser negativas",
                    n, campo
                ),
            ));
        }
    }

    let mut suma_valor = 0.0;
    for (b_idx, bloque) in unidad.bloques.iter().enumerate() {
        let sesion_esperada = (b_idx + 1) as u32;
        if bloque.numero_sesion != sesion_esperada {
            errores.push(ErrorValidacion::new(
                ErrorValidacionKind::NumeracionRota,
                format!(
                    "Unidad temática {}: la sesión en posición {} tiene número {}, se esperaba {}",
                    n,
                    b_idx + 1,
                    bloque.numero_sesion,
                    sesion_esperada
                ),
            ));
        }
        let valor = bloque.valor_porcentual;
        if !valor.is_finite() || !(0.0..=100.0).contains(&valor) {
            errores.push(ErrorValidacion::new(
                ErrorValidacionKind::RangoInvalido,
                format!(
                    "Unidad temática {}, sesión {}: el valor porcentual debe estar entre 0 y 100",
                    n, bloque.numero_sesion
                ),
            ));
        } else {
            suma_valor += valor;
        }
    }
    if suma_valor > 100.0 {
        errores.push(ErrorValidacion::new(
            ErrorValidacionKind::PorcentajeExcedido,
            format!(
                "Unidad temática {}: la suma de valores porcentuales excede 100",
                n
            ),
        ));
    }
}

/// Validates an academic-unit catalog entry.
///
/// The name must have between 3 and 255 characters after trimming; the
/// abbreviation, when present, at most 50.
pub fn validar_unidad_academica(ua: &UnidadAcademica) -> ResultadoValidacion {
    let mut errores = Vec::new();

    let nombre = ua.nombre.trim();
    if nombre.chars().count() < 3 {
        errores.push(ErrorValidacion::new(
            ErrorValidacionKind::RangoInvalido,
            "El nombre de la unidad académica debe tener al menos 3 caracteres",
        ));
    } else if nombre.chars().count() > 255 {
        errores.push(ErrorValidacion::new(
            ErrorValidacionKind::RangoInvalido,
            "El nombre de la unidad académica no puede exceder 255 caracteres",
        ));
    }

    if let Some(abreviatura) = &ua.abreviatura {
        if abreviatura.chars().count() > 50 {
            errores.push(ErrorValidacion::new(
                ErrorValidacionKind::RangoInvalido,
                "La abreviatura no puede exceder 50 caracteres",
            ));
        }
    }

    if errores.is_empty() {
        Ok(())
    } else {
        Err(errores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bloque, Referencia, SesionesUnidad, UnidadTematica};

    fn sample_planeacion() -> Planeacion {
        let bloque = Bloque::plantilla(1)
            .with_temas("Introducción")
            .with_valor(20.0);
        let unidad = UnidadTematica::plantilla(1)
            .with_nombre("Fundamentos")
            .with_competencia("Analiza los fundamentos de la disciplina")
            .with_aprendizajes(vec!["Identifica los conceptos base".into()])
            .with_bloques(vec![bloque])
            .with_sesiones(SesionesUnidad {
                aula: 5,
                laboratorio: 0,
                taller: 0,
                clinica: 0,
                otro: 0,
            });
        let mut p = Planeacion::nueva()
            .with_periodo_escolar("2025-2026/1")
            .with_plan_estudios_anio(2023)
            .with_unidades(vec![unidad])
            .with_referencias(vec![
                Referencia::nueva("Pérez, J. (2021). Título. Editorial.").with_unidades(vec![1]),
            ]);
        p.semestre_nivel = "Tercer semestre".into();
        p.programa_academico = "Ingeniería en Sistemas".into();
        p.academia = "Ciencias Básicas".into();
        p.unidad_aprendizaje_nombre = "Estructuras de Datos".into();
        p.grupos = "3CM1".into();
        p
    }

    #[test]
    fn test_planeacion_valida() {
        let p = sample_planeacion();
        assert!(validar_planeacion(&p).is_ok());
    }

    #[test]
    fn test_campos_requeridos_en_blanco() {
        let mut p = sample_planeacion();
        p.periodo_escolar = "   ".into();
        p.academia = String::new();
        let errores = validar_planeacion(&p).unwrap_err();
        let requeridos: Vec<_> = errores
            .iter()
            .filter(|e| e.kind == ErrorValidacionKind::CampoRequerido)
            .collect();
        assert_eq!(requeridos.len(), 2);
        assert!(requeridos[0].mensaje.contains("periodo_escolar"));
        assert!(requeridos[1].mensaje.contains("academia"));
    }

    #[test]
    fn test_sin_unidades_tematicas() {
        let mut p = sample_planeacion();
        p.unidades_tematicas.clear();
        let errores = validar_planeacion(&p).unwrap_err();
        assert!(errores
            .iter()
            .any(|e| e.kind == ErrorValidacionKind::ColeccionVacia
                && e.mensaje.contains("unidad temática")));
    }

    #[test]
    fn test_numeracion_rota() {
        let mut p = sample_planeacion();
        p.unidades_tematicas[0].numero = 4;
        let errores = validar_planeacion(&p).unwrap_err();
        assert!(errores
            .iter()
            .any(|e| e.kind == ErrorValidacionKind::NumeracionRota));
        // La referencia apunta a la unidad 1, que ya no existe.
        assert!(errores
            .iter()
            .any(|e| e.kind == ErrorValidacionKind::ReferenciaInvalida));
    }

    #[test]
    fn test_referencia_a_unidad_inexistente() {
        let mut p = sample_planeacion();
        p.referencias[0].unidades_aplica = vec![1, 9];
        let errores = validar_planeacion(&p).unwrap_err();
        let invalidas: Vec<_> = errores
            .iter()
            .filter(|e| e.kind == ErrorValidacionKind::ReferenciaInvalida)
            .collect();
        assert_eq!(invalidas.len(), 1);
        assert!(invalidas[0].mensaje.contains('9'));
    }

    #[test]
    fn test_porcentaje_excedido() {
        let mut p = sample_planeacion();
        p.unidades_tematicas[0].bloques = vec![
            Bloque::plantilla(1).with_valor(60.0),
            Bloque::plantilla(2).with_valor(50.0),
        ];
        let errores = validar_planeacion(&p).unwrap_err();
        assert!(errores
            .iter()
            .any(|e| e.kind == ErrorValidacionKind::PorcentajeExcedido));
    }

    #[test]
    fn test_valor_porcentual_fuera_de_rango() {
        let mut p = sample_planeacion();
        p.unidades_tematicas[0].bloques[0].valor_porcentual = 130.0;
        let errores = validar_planeacion(&p).unwrap_err();
        assert!(errores
            .iter()
            .any(|e| e.kind == ErrorValidacionKind::RangoInvalido
                && e.mensaje.contains("valor porcentual")));
        // Un valor fuera de rango no entra a la suma del presupuesto.
        assert!(!errores
            .iter()
            .any(|e| e.kind == ErrorValidacionKind::PorcentajeExcedido));
    }

    #[test]
    fn test_periodo_invertido() {
        use chrono::NaiveDate;
        let mut p = sample_planeacion();
        p.unidades_tematicas[0].periodo_desarrollo = crate::models::PeriodoDesarrollo::new(
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        );
        let errores = validar_planeacion(&p).unwrap_err();
        assert!(errores
            .iter()
            .any(|e| e.kind == ErrorValidacionKind::PeriodoInvertido));
    }

    #[test]
    fn test_unidad_academica_nombre_corto() {
        let ua = UnidadAcademica::nueva(1, "ES");
        let errores = validar_unidad_academica(&ua).unwrap_err();
        assert_eq!(errores.len(), 1);
        assert_eq!(errores[0].kind, ErrorValidacionKind::RangoInvalido);
    }

    #[test]
    fn test_unidad_academica_abreviatura_larga() {
        let ua = UnidadAcademica::nueva(1, "Escuela Superior de Cómputo")
            .with_abreviatura("X".repeat(51));
        assert!(validar_unidad_academica(&ua).is_err());
        let ua = UnidadAcademica::nueva(1, "Escuela Superior de Cómputo")
            .with_abreviatura("X".repeat(50));
        assert!(validar_unidad_academica(&ua).is_ok());
    }
}
