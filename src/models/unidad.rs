//! Thematic unit model.
//!
//! A thematic unit (section 3 of the form) groups the session blocks of a
//! stretch of the course: competence statement, development period, hour
//! and session breakdown per learning space, expected outcomes, and the
//! blocks themselves.
//!
//! # Time model
//! Development periods are date-only and inclusive on both ends. A period
//! is *complete* when both endpoints are captured; helpers that need an
//! ordered range swap inverted endpoints instead of failing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Bloque;

/// Per-space breakdown over the five learning spaces.
///
/// The same shape is used for hours (`f64`) and for session counts
/// (`u32`); only the scalar type changes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DesglosePorEspacio<T> {
    pub aula: T,
    pub laboratorio: T,
    pub taller: T,
    pub clinica: T,
    pub otro: T,
}

/// Hours per learning space for one unit (field 3.8).
pub type HorasUnidad = DesglosePorEspacio<f64>;

/// Sessions per learning space for one unit (field 3.9).
pub type SesionesUnidad = DesglosePorEspacio<u32>;

impl<T: Copy + std::iter::Sum<T>> DesglosePorEspacio<T> {
    /// Sum over the five spaces.
    #[inline]
    pub fn suma(&self) -> T {
        [self.aula, self.laboratorio, self.taller, self.clinica, self.otro]
            .into_iter()
            .sum()
    }
}

/// Development period of a unit, date-only and inclusive (field 3.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeriodoDesarrollo {
    /// Start date.
    pub del: Option<NaiveDate>,
    /// End date.
    pub al: Option<NaiveDate>,
}

impl PeriodoDesarrollo {
    /// Creates a period with both endpoints set.
    pub fn new(del: NaiveDate, al: NaiveDate) -> Self {
        Self {
            del: Some(del),
            al: Some(al),
        }
    }

    /// True when both endpoints are captured.
    #[inline]
    pub fn completo(&self) -> bool {
        self.del.is_some() && self.al.is_some()
    }

    /// True when the endpoints are captured in reverse order.
    #[inline]
    pub fn invertido(&self) -> bool {
        match (self.del, self.al) {
            (Some(del), Some(al)) => del > al,
            _ => false,
        }
    }

    /// Ordered `(inicio, fin)` range, swapping inverted endpoints.
    /// `None` while the period is incomplete.
    pub fn rango_ordenado(&self) -> Option<(NaiveDate, NaiveDate)> {
        let (del, al) = (self.del?, self.al?);
        if del <= al {
            Some((del, al))
        } else {
            Some((al, del))
        }
    }

    /// True when `fecha` falls inside the period, both ends inclusive.
    /// Incomplete periods contain nothing.
    pub fn contiene(&self, fecha: NaiveDate) -> bool {
        match self.rango_ordenado() {
            Some((inicio, fin)) => inicio <= fecha && fecha <= fin,
            None => false,
        }
    }
}

/// A thematic unit of the course plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnidadTematica {
    /// 1-based position, kept contiguous by the editor.
    pub numero: u32,
    /// Unit name (field 3.2).
    pub nombre_unidad_tematica: String,
    /// Competence statement (field 3.3).
    pub unidad_competencia: String,
    /// Development period (field 3.5).
    pub periodo_desarrollo: PeriodoDesarrollo,
    /// Hours per learning space (field 3.8).
    pub horas: HorasUnidad,
    /// Sessions per learning space (field 3.9).
    pub sesiones_por_espacio: SesionesUnidad,
    /// Total sessions of the unit, kept in sync with field 3.9.
    pub sesiones_totales: u32,
    /// Evaluation registration period, free text (field 3.6).
    pub periodo_registro_eval: String,
    /// Expected learning outcomes (field 3.4).
    pub aprendizajes_esperados: Vec<String>,
    /// Session blocks, ordered by `numero_sesion`.
    pub bloques: Vec<Bloque>,
    /// Unit-level remarks (field 3.7).
    pub precisiones: String,
}

impl UnidadTematica {
    /// Creates the blank template unit the form starts from: one empty
    /// outcome row and one blank session block.
    pub fn plantilla(numero: u32) -> Self {
        Self {
            numero,
            nombre_unidad_tematica: String::new(),
            unidad_competencia: String::new(),
            periodo_desarrollo: PeriodoDesarrollo::default(),
            horas: HorasUnidad::default(),
            sesiones_por_espacio: SesionesUnidad::default(),
            sesiones_totales: 0,
            periodo_registro_eval: String::new(),
            aprendizajes_esperados: vec![String::new()],
            bloques: vec![Bloque::plantilla(1)],
            precisiones: String::new(),
        }
    }

    /// Sets the unit name.
    pub fn with_nombre(mut self, nombre: impl Into<String>) -> Self {
        self.nombre_unidad_tematica = nombre.into();
        self
    }

    /// Sets the competence statement.
    pub fn with_competencia(mut self, competencia: impl Into<String>) -> Self {
        self.unidad_competencia = competencia.into();
        self
    }

    /// Sets the development period.
    pub fn with_periodo(mut self, del: NaiveDate, al: NaiveDate) -> Self {
        self.periodo_desarrollo = PeriodoDesarrollo::new(del, al);
        self
    }

    /// Sets the hours per space.
    pub fn with_horas(mut self, horas: HorasUnidad) -> Self {
        self.horas = horas;
        self
    }

    /// Sets the sessions per space and the synced total.
    pub fn with_sesiones(mut self, sesiones: SesionesUnidad) -> Self {
        self.sesiones_totales = sesiones.suma();
        self.sesiones_por_espacio = sesiones;
        self
    }

    /// Replaces the expected outcomes.
    pub fn with_aprendizajes(mut self, aprendizajes: Vec<String>) -> Self {
        self.aprendizajes_esperados = aprendizajes;
        self
    }

    /// Replaces the session blocks.
    pub fn with_bloques(mut self, bloques: Vec<Bloque>) -> Self {
        self.bloques = bloques;
        self
    }

    /// Total hours of the unit across the five spaces.
    #[inline]
    pub fn suma_horas(&self) -> f64 {
        self.horas.suma()
    }

    /// Recomputes `sesiones_totales` from the per-space counts.
    pub fn sincronizar_sesiones(&mut self) {
        self.sesiones_totales = self.sesiones_por_espacio.suma();
    }

    /// True when at least one expected outcome is non-blank.
    pub fn tiene_aprendizajes(&self) -> bool {
        self.aprendizajes_esperados
            .iter()
            .any(|a| !a.trim().is_empty())
    }
}
