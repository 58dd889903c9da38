//! Congruence between declared semester totals and unit sums.
//!
//! The general-data section declares a semester-wide session total
//! (field 1.11) and an hour total (field 1.12); section 3 captures the
//! same figures per thematic unit. Saving is gated on both matching:
//! sessions are checked first, so a refusal carries exactly one reason,
//! and the teacher is pointed at the organization section.
//!
//! At finalization the declared totals are rewritten to match the unit
//! sums instead of refusing; see [`reconciliar_totales`].

use crate::models::{Planeacion, UnidadTematica};
use crate::progress::Seccion;

/// Sum of declared total sessions across units (field 3.9).
pub fn suma_sesiones(unidades: &[UnidadTematica]) -> u32 {
    unidades.iter().map(|u| u.sesiones_totales).sum()
}

/// Sum of hours across units and their five learning spaces (field 3.8).
pub fn suma_horas(unidades: &[UnidadTematica]) -> f64 {
    unidades.iter().map(|u| u.suma_horas()).sum()
}

/// Why a save was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotivoRechazo {
    /// Declared sessions (1.11) do not match the unit sum (3.9).
    Sesiones,
    /// Declared hours (1.12) do not match the unit sum (3.8).
    Horas,
}

/// A refused save: the reason, the message shown to the teacher, and
/// the section the form should focus.
#[derive(Debug, Clone, PartialEq)]
pub struct RechazoGuardado {
    pub motivo: MotivoRechazo,
    pub mensaje: String,
    pub seccion_foco: Seccion,
}

impl RechazoGuardado {
    fn new(motivo: MotivoRechazo, mensaje: &str) -> Self {
        Self {
            motivo,
            mensaje: mensaje.to_string(),
            seccion_foco: Seccion::Organizacion,
        }
    }
}

impl std::fmt::Display for RechazoGuardado {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mensaje)
    }
}

impl std::error::Error for RechazoGuardado {}

/// Checks declared totals against unit sums.
///
/// Sessions are checked before hours, so at most one reason is
/// reported. Hours compare for exact equality: both figures are
/// captured, never derived.
pub fn verificar_totales(
    sesiones_declaradas: u32,
    sesiones_unidades: u32,
    horas_declaradas: f64,
    horas_unidades: f64,
) -> Result<(), RechazoGuardado> {
    if sesiones_declaradas != sesiones_unidades {
        log::debug!(
            "guardado rechazado: sesiones declaradas {} vs suma de unidades {}",
            sesiones_declaradas,
            sesiones_unidades
        );
        return Err(RechazoGuardado::new(
            MotivoRechazo::Sesiones,
            "El total de sesiones (1.11) debe empatar con la suma de 3.9.",
        ));
    }
    if horas_declaradas != horas_unidades {
        log::debug!(
            "guardado rechazado: horas declaradas {} vs suma de unidades {}",
            horas_declaradas,
            horas_unidades
        );
        return Err(RechazoGuardado::new(
            MotivoRechazo::Horas,
            "El total de horas (1.12) debe empatar con la suma de 3.8.",
        ));
    }
    Ok(())
}

/// Gate applied before persisting a document.
pub fn verificar_congruencia(p: &Planeacion) -> Result<(), RechazoGuardado> {
    verificar_totales(
        p.sesiones_por_semestre,
        suma_sesiones(&p.unidades_tematicas),
        p.horas_semestre.total,
        suma_horas(&p.unidades_tematicas),
    )
}

/// Rewrites the declared totals (1.11 and 1.12) to match the unit sums.
///
/// Used by the finalization flow, where adjusting beats refusing.
/// Returns one warning message per adjusted total; each is also logged.
pub fn reconciliar_totales(p: &mut Planeacion) -> Vec<String> {
    let mut avisos = Vec::new();

    let sesiones = suma_sesiones(&p.unidades_tematicas);
    if p.sesiones_por_semestre != sesiones {
        p.sesiones_por_semestre = sesiones;
        let aviso =
            "Se ajustó el total de sesiones (1.11) para que coincida con la suma de las unidades (3.9).";
        log::warn!("{}", aviso);
        avisos.push(aviso.to_string());
    }

    let horas = suma_horas(&p.unidades_tematicas);
    if p.horas_semestre.total != horas {
        p.horas_semestre.total = horas;
        let aviso =
            "Se ajustó el total de horas (1.12) para que coincida con la suma de las unidades (3.8).";
        log::warn!("{}", aviso);
        avisos.push(aviso.to_string());
    }

    avisos
}
