//! Flat wire shapes of the persistence API.
//!
//! The editable document nests its collections, but the API exchanges
//! flat records: [`CargaGuardado`] is the save payload built from a
//! document (one key per stored column, normalized on build), and
//! [`DetallePublico`] is the full stored record as the public detail
//! endpoint returns it, with every joined field nullable. Field names
//! and order are preserved byte-for-byte.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bloque::{Actividades, Bloque};
use super::planeacion::{
    AreaFormacion, Modalidad, Planeacion, SeccionesCompletas, Status,
};
use super::referencia::{Referencia, TipoReferencia};
use super::unidad::{DesglosePorEspacio, PeriodoDesarrollo, UnidadTematica};

/// Blank strings travel as null; everything else as-is.
fn opcional(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/// Trims list entries and drops the blank ones.
fn lista_limpia(entradas: &[String]) -> Vec<String> {
    entradas
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}

/// Save payload sent to `POST/PUT /planeaciones`.
///
/// Identification fields are nullable (blank becomes null); numeric
/// fields always carry the captured value. `status` is only present
/// when the save finalizes the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargaGuardado {
    pub nombre_planeacion: Option<String>,
    pub periodo_escolar: Option<String>,
    pub plan_estudios_anio: Option<i32>,
    pub semestre_nivel: Option<String>,
    pub grupos: Option<String>,
    pub programa_academico: Option<String>,
    pub academia: Option<String>,
    pub unidad_aprendizaje_nombre: Option<String>,
    pub area_formacion: Option<AreaFormacion>,
    pub modalidad: Option<Modalidad>,
    pub sesiones_por_semestre: u32,
    pub sesiones_aula: u32,
    pub sesiones_laboratorio: u32,
    pub sesiones_clinica: u32,
    pub sesiones_otro: u32,
    pub horas_teoria: f64,
    pub horas_practica: f64,
    pub horas_aula: f64,
    pub horas_laboratorio: f64,
    pub horas_clinica: f64,
    pub horas_otro: f64,
    pub horas_total: f64,
    pub creditos_tepic: f64,
    pub creditos_satca: f64,
    pub antecedentes: String,
    pub laterales: String,
    pub subsecuentes: String,
    pub ejes_compromiso_social_sustentabilidad: String,
    pub ejes_perspectiva_genero: String,
    pub ejes_internacionalizacion: String,
    pub org_proposito: String,
    pub org_estrategia: String,
    pub org_metodos: String,
    pub plagio_ithenticate: bool,
    pub plagio_turnitin: bool,
    pub plagio_otro: String,
    pub referencias: Vec<Referencia>,
    pub unidades_tematicas: Vec<UnidadCarga>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

impl CargaGuardado {
    /// Builds the save payload from a document.
    ///
    /// Normalization: references with a blank citation are dropped and
    /// the kept citation is trimmed; outcome, resource, evidence and
    /// instrument lists are trimmed with blank entries dropped; blank
    /// `periodo_registro_eval` becomes null; unit and block numbers
    /// fall back to position + 1 when unset. `finalizar` adds
    /// `"status": "finalizada"`.
    pub fn desde_planeacion(p: &Planeacion, nombre: &str, finalizar: bool) -> Self {
        Self {
            nombre_planeacion: opcional(nombre),
            periodo_escolar: opcional(&p.periodo_escolar),
            plan_estudios_anio: p.plan_estudios_anio.filter(|a| *a != 0),
            semestre_nivel: opcional(&p.semestre_nivel),
            grupos: opcional(&p.grupos),
            programa_academico: opcional(&p.programa_academico),
            academia: opcional(&p.academia),
            unidad_aprendizaje_nombre: opcional(&p.unidad_aprendizaje_nombre),
            area_formacion: p.area_formacion,
            modalidad: p.modalidad,
            sesiones_por_semestre: p.sesiones_por_semestre,
            sesiones_aula: p.sesiones_detalle.aula,
            sesiones_laboratorio: p.sesiones_detalle.laboratorio,
            sesiones_clinica: p.sesiones_detalle.clinica,
            sesiones_otro: p.sesiones_detalle.otro,
            horas_teoria: p.horas_semestre.teoria,
            horas_practica: p.horas_semestre.practica,
            horas_aula: p.horas_semestre.aula,
            horas_laboratorio: p.horas_semestre.laboratorio,
            horas_clinica: p.horas_semestre.clinica,
            horas_otro: p.horas_semestre.otro,
            horas_total: p.horas_semestre.total,
            creditos_tepic: p.creditos.tepic,
            creditos_satca: p.creditos.satca,
            antecedentes: p.antecedentes.clone(),
            laterales: p.laterales.clone(),
            subsecuentes: p.subsecuentes.clone(),
            ejes_compromiso_social_sustentabilidad: p
                .ejes
                .compromiso_social_sustentabilidad
                .clone(),
            ejes_perspectiva_genero: p.ejes.perspectiva_genero.clone(),
            ejes_internacionalizacion: p.ejes.internacionalizacion.clone(),
            org_proposito: p.organizacion.proposito.clone(),
            org_estrategia: p.organizacion.estrategia.clone(),
            org_metodos: p.organizacion.metodos.clone(),
            plagio_ithenticate: p.plagio.ithenticate,
            plagio_turnitin: p.plagio.turnitin,
            plagio_otro: p.plagio.otro.clone(),
            referencias: p
                .referencias
                .iter()
                .filter(|r| !r.en_blanco())
                .map(|r| Referencia {
                    cita_apa: r.cita_apa.trim().to_string(),
                    unidades_aplica: r.unidades_aplica.clone(),
                    tipo: r.tipo,
                })
                .collect(),
            unidades_tematicas: p
                .unidades_tematicas
                .iter()
                .enumerate()
                .map(|(idx, u)| UnidadCarga::desde_unidad(u, idx))
                .collect(),
            status: if finalizar {
                Some(Status::Finalizada)
            } else {
                None
            },
        }
    }
}

/// Nested unit object of the save payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnidadCarga {
    pub numero: u32,
    pub nombre_unidad_tematica: String,
    pub unidad_competencia: String,
    pub periodo_desarrollo: PeriodoDesarrollo,
    pub horas: DesglosePorEspacio<f64>,
    pub sesiones_por_espacio: DesglosePorEspacio<u32>,
    pub sesiones_totales: u32,
    pub periodo_registro_eval: Option<String>,
    pub aprendizajes_esperados: Vec<String>,
    pub bloques: Vec<Bloque>,
    pub precisiones: String,
    /// Always null; the column is computed server-side.
    pub porcentaje: Option<f64>,
}

impl UnidadCarga {
    fn desde_unidad(u: &UnidadTematica, idx: usize) -> Self {
        Self {
            numero: if u.numero == 0 {
                (idx + 1) as u32
            } else {
                u.numero
            },
            nombre_unidad_tematica: u.nombre_unidad_tematica.clone(),
            unidad_competencia: u.unidad_competencia.clone(),
            periodo_desarrollo: u.periodo_desarrollo,
            horas: u.horas,
            sesiones_por_espacio: u.sesiones_por_espacio,
            sesiones_totales: u.sesiones_totales,
            periodo_registro_eval: if u.periodo_registro_eval.trim().is_empty() {
                None
            } else {
                Some(u.periodo_registro_eval.clone())
            },
            aprendizajes_esperados: lista_limpia(&u.aprendizajes_esperados),
            bloques: u
                .bloques
                .iter()
                .enumerate()
                .map(|(j, b)| bloque_limpio(b, j))
                .collect(),
            precisiones: u.precisiones.clone(),
            porcentaje: None,
        }
    }
}

fn bloque_limpio(b: &Bloque, idx: usize) -> Bloque {
    Bloque {
        numero_sesion: if b.numero_sesion == 0 {
            (idx + 1) as u32
        } else {
            b.numero_sesion
        },
        temas_subtemas: b.temas_subtemas.clone(),
        actividades: b.actividades.clone(),
        recursos: lista_limpia(&b.recursos),
        evidencias: lista_limpia(&b.evidencias),
        instrumentos: lista_limpia(&b.instrumentos),
        valor_porcentual: b.valor_porcentual,
    }
}

/// Full stored record as the public detail endpoint returns it.
///
/// Section tables are joined optionally, so every captured field is
/// nullable here; [`a_planeacion`](Self::a_planeacion) applies the
/// defaults the editor expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetallePublico {
    pub id: i64,
    pub docente_id: i64,
    pub unidad_academica_id: i64,
    #[serde(default)]
    pub nombre_planeacion: Option<String>,
    pub slug: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub secciones_completas: SeccionesCompletas,
    pub profesor: String,
    pub unidad_academica: String,
    #[serde(default)]
    pub unidad_academica_abreviatura: Option<String>,
    #[serde(default)]
    pub periodo_escolar: Option<String>,
    #[serde(default)]
    pub plan_estudios_anio: Option<i32>,
    #[serde(default)]
    pub semestre_nivel: Option<String>,
    #[serde(default)]
    pub grupos: Option<String>,
    #[serde(default)]
    pub programa_academico: Option<String>,
    #[serde(default)]
    pub academia: Option<String>,
    #[serde(default)]
    pub area_formacion: Option<AreaFormacion>,
    #[serde(default)]
    pub modalidad: Option<Modalidad>,
    #[serde(default)]
    pub sesiones_por_semestre: Option<u32>,
    #[serde(default)]
    pub sesiones_aula: Option<u32>,
    #[serde(default)]
    pub sesiones_laboratorio: Option<u32>,
    #[serde(default)]
    pub sesiones_clinica: Option<u32>,
    #[serde(default)]
    pub sesiones_otro: Option<u32>,
    #[serde(default)]
    pub horas_teoria: Option<f64>,
    #[serde(default)]
    pub horas_practica: Option<f64>,
    #[serde(default)]
    pub horas_aula: Option<f64>,
    #[serde(default)]
    pub horas_laboratorio: Option<f64>,
    #[serde(default)]
    pub horas_clinica: Option<f64>,
    #[serde(default)]
    pub horas_otro: Option<f64>,
    #[serde(default)]
    pub horas_total: Option<f64>,
    #[serde(default)]
    pub unidad_aprendizaje_nombre: Option<String>,
    #[serde(default)]
    pub creditos_tepic: Option<f64>,
    #[serde(default)]
    pub creditos_satca: Option<f64>,
    #[serde(default)]
    pub antecedentes: Option<String>,
    #[serde(default)]
    pub laterales: Option<String>,
    #[serde(default)]
    pub subsecuentes: Option<String>,
    #[serde(default)]
    pub ejes_compromiso_social_sustentabilidad: Option<String>,
    #[serde(default)]
    pub ejes_perspectiva_genero: Option<String>,
    #[serde(default)]
    pub ejes_internacionalizacion: Option<String>,
    #[serde(default)]
    pub org_proposito: Option<String>,
    #[serde(default)]
    pub org_estrategia: Option<String>,
    #[serde(default)]
    pub org_metodos: Option<String>,
    #[serde(default)]
    pub plagio_ithenticate: Option<bool>,
    #[serde(default)]
    pub plagio_turnitin: Option<bool>,
    #[serde(default)]
    pub plagio_otro: Option<String>,
    /// Ordered by id.
    #[serde(default)]
    pub referencias: Vec<ReferenciaDetalle>,
    /// Ordered by `numero`.
    #[serde(default)]
    pub unidades_tematicas: Vec<UnidadDetalle>,
}

/// Stored reference row of the detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenciaDetalle {
    pub id: i64,
    pub cita_apa: String,
    #[serde(default)]
    pub unidades_aplica: Option<Vec<u32>>,
    #[serde(default)]
    pub tipo: Option<TipoReferencia>,
}

/// Stored unit row of the detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnidadDetalle {
    pub id: i64,
    #[serde(default)]
    pub numero: Option<u32>,
    #[serde(default)]
    pub nombre_unidad_tematica: Option<String>,
    #[serde(default)]
    pub unidad_competencia: Option<String>,
    #[serde(default)]
    pub periodo_desarrollo: PeriodoDesarrollo,
    #[serde(default)]
    pub horas: DesglosePorEspacio<Option<f64>>,
    #[serde(default)]
    pub sesiones_por_espacio: DesglosePorEspacio<Option<u32>>,
    #[serde(default)]
    pub sesiones_totales: Option<u32>,
    #[serde(default)]
    pub porcentaje: Option<f64>,
    #[serde(default)]
    pub periodo_registro_eval: Option<String>,
    #[serde(default)]
    pub aprendizajes_esperados: Option<Vec<String>>,
    #[serde(default)]
    pub precisiones: Option<String>,
    /// Ordered by `numero_sesion`.
    #[serde(default)]
    pub bloques: Vec<BloqueDetalle>,
}

/// Stored session-block row of the detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloqueDetalle {
    pub id: i64,
    #[serde(default)]
    pub numero_sesion: Option<u32>,
    #[serde(default)]
    pub temas_subtemas: Option<String>,
    #[serde(default)]
    pub actividades: ActividadesDetalle,
    #[serde(default)]
    pub recursos: Option<Vec<String>>,
    #[serde(default)]
    pub evidencias: Option<Vec<String>>,
    #[serde(default)]
    pub instrumentos: Option<Vec<String>>,
    #[serde(default)]
    pub valor_porcentual: Option<f64>,
}

/// Nullable session activities of the detail record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActividadesDetalle {
    #[serde(default)]
    pub inicio: Option<String>,
    #[serde(default)]
    pub desarrollo: Option<String>,
    #[serde(default)]
    pub cierre: Option<String>,
}

impl DetallePublico {
    /// Reconstructs the editable document from the stored record.
    ///
    /// Missing scalars default to blank or zero, a missing modality
    /// defaults to `Escolarizada` while the curricular area stays
    /// unset, a missing reference type defaults to `Básica`, a unit
    /// with no blocks gets one blank block, and an empty unit list
    /// keeps the blank template unit.
    pub fn a_planeacion(&self) -> Planeacion {
        let mut p = Planeacion::nueva();
        p.periodo_escolar = self.periodo_escolar.clone().unwrap_or_default();
        p.plan_estudios_anio = self.plan_estudios_anio;
        p.semestre_nivel = self.semestre_nivel.clone().unwrap_or_default();
        p.programa_academico = self.programa_academico.clone().unwrap_or_default();
        p.academia = self.academia.clone().unwrap_or_default();
        p.unidad_aprendizaje_nombre = self.unidad_aprendizaje_nombre.clone().unwrap_or_default();
        p.grupos = self.grupos.clone().unwrap_or_default();
        p.area_formacion = self.area_formacion;
        p.modalidad = Some(self.modalidad.unwrap_or(Modalidad::Escolarizada));
        p.creditos.tepic = self.creditos_tepic.unwrap_or(0.0);
        p.creditos.satca = self.creditos_satca.unwrap_or(0.0);
        p.sesiones_por_semestre = self.sesiones_por_semestre.unwrap_or(0);
        p.sesiones_detalle.aula = self.sesiones_aula.unwrap_or(0);
        p.sesiones_detalle.laboratorio = self.sesiones_laboratorio.unwrap_or(0);
        p.sesiones_detalle.clinica = self.sesiones_clinica.unwrap_or(0);
        p.sesiones_detalle.otro = self.sesiones_otro.unwrap_or(0);
        p.horas_semestre.teoria = self.horas_teoria.unwrap_or(0.0);
        p.horas_semestre.practica = self.horas_practica.unwrap_or(0.0);
        p.horas_semestre.aula = self.horas_aula.unwrap_or(0.0);
        p.horas_semestre.laboratorio = self.horas_laboratorio.unwrap_or(0.0);
        p.horas_semestre.clinica = self.horas_clinica.unwrap_or(0.0);
        p.horas_semestre.otro = self.horas_otro.unwrap_or(0.0);
        p.horas_semestre.total = self.horas_total.unwrap_or(0.0);
        p.antecedentes = self.antecedentes.clone().unwrap_or_default();
        p.laterales = self.laterales.clone().unwrap_or_default();
        p.subsecuentes = self.subsecuentes.clone().unwrap_or_default();
        p.ejes.compromiso_social_sustentabilidad = self
            .ejes_compromiso_social_sustentabilidad
            .clone()
            .unwrap_or_default();
        p.ejes.perspectiva_genero = self.ejes_perspectiva_genero.clone().unwrap_or_default();
        p.ejes.internacionalizacion = self.ejes_internacionalizacion.clone().unwrap_or_default();
        p.organizacion.proposito = self.org_proposito.clone().unwrap_or_default();
        p.organizacion.estrategia = self.org_estrategia.clone().unwrap_or_default();
        p.organizacion.metodos = self.org_metodos.clone().unwrap_or_default();
        p.plagio.ithenticate = self.plagio_ithenticate.unwrap_or(false);
        p.plagio.turnitin = self.plagio_turnitin.unwrap_or(false);
        p.plagio.otro = self.plagio_otro.clone().unwrap_or_default();
        p.referencias = self
            .referencias
            .iter()
            .map(|r| Referencia {
                cita_apa: r.cita_apa.clone(),
                unidades_aplica: r.unidades_aplica.clone().unwrap_or_default(),
                tipo: r.tipo.unwrap_or_default(),
            })
            .collect();
        if !self.unidades_tematicas.is_empty() {
            p.unidades_tematicas = self
                .unidades_tematicas
                .iter()
                .enumerate()
                .map(|(idx, u)| u.a_unidad(idx))
                .collect();
        }
        p.status = self.status;
        p
    }
}

impl UnidadDetalle {
    fn a_unidad(&self, idx: usize) -> UnidadTematica {
        let bloques = if self.bloques.is_empty() {
            vec![Bloque::plantilla(1)]
        } else {
            self.bloques
                .iter()
                .enumerate()
                .map(|(j, b)| b.a_bloque(j))
                .collect()
        };
        UnidadTematica {
            numero: self.numero.unwrap_or((idx + 1) as u32),
            nombre_unidad_tematica: self.nombre_unidad_tematica.clone().unwrap_or_default(),
            unidad_competencia: self.unidad_competencia.clone().unwrap_or_default(),
            periodo_desarrollo: self.periodo_desarrollo,
            horas: DesglosePorEspacio {
                aula: self.horas.aula.unwrap_or(0.0),
                laboratorio: self.horas.laboratorio.unwrap_or(0.0),
                taller: self.horas.taller.unwrap_or(0.0),
                clinica: self.horas.clinica.unwrap_or(0.0),
                otro: self.horas.otro.unwrap_or(0.0),
            },
            sesiones_por_espacio: DesglosePorEspacio {
                aula: self.sesiones_por_espacio.aula.unwrap_or(0),
                laboratorio: self.sesiones_por_espacio.laboratorio.unwrap_or(0),
                taller: self.sesiones_por_espacio.taller.unwrap_or(0),
                clinica: self.sesiones_por_espacio.clinica.unwrap_or(0),
                otro: self.sesiones_por_espacio.otro.unwrap_or(0),
            },
            sesiones_totales: self.sesiones_totales.unwrap_or(0),
            periodo_registro_eval: self.periodo_registro_eval.clone().unwrap_or_default(),
            aprendizajes_esperados: match &self.aprendizajes_esperados {
                Some(lista) => lista.clone(),
                None => vec![String::new()],
            },
            bloques,
            precisiones: self.precisiones.clone().unwrap_or_default(),
        }
    }
}

impl BloqueDetalle {
    fn a_bloque(&self, idx: usize) -> Bloque {
        Bloque {
            numero_sesion: self.numero_sesion.unwrap_or((idx + 1) as u32),
            temas_subtemas: self.temas_subtemas.clone().unwrap_or_default(),
            actividades: Actividades {
                inicio: self.actividades.inicio.clone().unwrap_or_default(),
                desarrollo: self.actividades.desarrollo.clone().unwrap_or_default(),
                cierre: self.actividades.cierre.clone().unwrap_or_default(),
            },
            recursos: self.recursos.clone().unwrap_or_default(),
            evidencias: self.evidencias.clone().unwrap_or_default(),
            instrumentos: self.instrumentos.clone().unwrap_or_default(),
            valor_porcentual: self.valor_porcentual.unwrap_or(0.0),
        }
    }
}
