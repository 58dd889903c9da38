//! Public read-only surface over finalized course plans.
//!
//! Works over collections of [`DetallePublico`] records: filtered
//! search with pagination, detail lookup by slug, aggregate statistics,
//! and the helpers the public timeline needs (unit ordering, the active
//! unit, session and hour totals). Consumers race network responses, so
//! the module also provides [`RanuraSolicitud`], a ticket slot that
//! makes the last-request-wins rule explicit and testable.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{BloqueDetalle, DetallePublico, Status, UnidadDetalle};

/// Page size used when the query does not provide a valid one.
pub const LIMITE_PREDETERMINADO: i64 = 20;
/// Largest page size a query may request.
pub const LIMITE_MAXIMO: i64 = 100;

/// A refused public query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorConsulta {
    /// Human-readable description.
    pub mensaje: String,
}

impl ErrorConsulta {
    fn new(mensaje: impl Into<String>) -> Self {
        Self {
            mensaje: mensaje.into(),
        }
    }
}

impl std::fmt::Display for ErrorConsulta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mensaje)
    }
}

impl std::error::Error for ErrorConsulta {}

/// Search query of the public index.
///
/// At least one text filter must be non-blank; an unfiltered public
/// listing is refused. Out-of-range `limit`/`offset` values fall back
/// to the defaults instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsultaPublica {
    /// Filter over the teacher's full name.
    pub profesor: String,
    /// Filter over the learning-unit name.
    pub unidad: String,
    /// Filter over the academic-unit name or abbreviation.
    pub ua: String,
    /// Requested page size; honored only within 1..=100.
    pub limit: Option<i64>,
    /// Requested offset; honored only when non-negative.
    pub offset: Option<i64>,
}

impl ConsultaPublica {
    /// Creates an empty query.
    pub fn nueva() -> Self {
        Self::default()
    }

    /// Sets the teacher-name filter.
    pub fn with_profesor(mut self, profesor: impl Into<String>) -> Self {
        self.profesor = profesor.into();
        self
    }

    /// Sets the learning-unit filter.
    pub fn with_unidad(mut self, unidad: impl Into<String>) -> Self {
        self.unidad = unidad.into();
        self
    }

    /// Sets the academic-unit filter.
    pub fn with_ua(mut self, ua: impl Into<String>) -> Self {
        self.ua = ua.into();
        self
    }

    /// Sets the requested page size.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the requested offset.
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Refuses the query when all three text filters are blank.
    pub fn validar(&self) -> Result<(), ErrorConsulta> {
        if self.profesor.trim().is_empty()
            && self.unidad.trim().is_empty()
            && self.ua.trim().is_empty()
        {
            return Err(ErrorConsulta::new(
                "Debes enviar al menos un filtro: profesor, unidad o ua",
            ));
        }
        Ok(())
    }

    /// Effective page size.
    pub fn limite(&self) -> i64 {
        match self.limit {
            Some(n) if n > 0 && n <= LIMITE_MAXIMO => n,
            _ => LIMITE_PREDETERMINADO,
        }
    }

    /// Effective offset.
    pub fn desplazamiento(&self) -> i64 {
        match self.offset {
            Some(n) if n >= 0 => n,
            _ => 0,
        }
    }
}

/// One row of the public search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumenPublico {
    pub id: i64,
    pub nombre_planeacion: String,
    pub unidad_aprendizaje: String,
    pub profesor: String,
    pub unidad_academica: String,
    /// Empty string when the academic unit has no abbreviation.
    pub unidad_academica_abreviatura: String,
    pub updated_at: DateTime<Utc>,
    pub slug: String,
}

impl ResumenPublico {
    fn desde_detalle(d: &DetallePublico) -> Self {
        Self {
            id: d.id,
            nombre_planeacion: d.nombre_planeacion.clone().unwrap_or_default(),
            unidad_aprendizaje: d.unidad_aprendizaje_nombre.clone().unwrap_or_default(),
            profesor: d.profesor.clone(),
            unidad_academica: d.unidad_academica.clone(),
            unidad_academica_abreviatura: d
                .unidad_academica_abreviatura
                .clone()
                .unwrap_or_default(),
            updated_at: d.updated_at,
            slug: d.slug.clone(),
        }
    }
}

/// Paged public search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RespuestaBusqueda {
    pub items: Vec<ResumenPublico>,
    pub limit: i64,
    pub offset: i64,
}

/// Searches a collection of stored records.
///
/// Only finalized documents match. Each non-blank filter is a
/// case-insensitive substring match: `profesor` against the teacher
/// name, `unidad` against the learning-unit name, `ua` against the
/// academic-unit name or abbreviation. Matches are ordered by
/// `updated_at` descending before pagination.
pub fn buscar(
    registros: &[DetallePublico],
    consulta: &ConsultaPublica,
) -> Result<RespuestaBusqueda, ErrorConsulta> {
    consulta.validar()?;

    let profesor = consulta.profesor.trim().to_lowercase();
    let unidad = consulta.unidad.trim().to_lowercase();
    let ua = consulta.ua.trim().to_lowercase();

    let mut coincidencias: Vec<&DetallePublico> = registros
        .iter()
        .filter(|d| d.status == Status::Finalizada)
        .filter(|d| profesor.is_empty() || d.profesor.to_lowercase().contains(&profesor))
        .filter(|d| {
            unidad.is_empty()
                || d.unidad_aprendizaje_nombre
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&unidad)
        })
        .filter(|d| {
            ua.is_empty()
                || d.unidad_academica.to_lowercase().contains(&ua)
                || d.unidad_academica_abreviatura
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&ua)
        })
        .collect();
    coincidencias.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let limit = consulta.limite();
    let offset = consulta.desplazamiento();
    let items = coincidencias
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .map(ResumenPublico::desde_detalle)
        .collect();

    Ok(RespuestaBusqueda {
        items,
        limit,
        offset,
    })
}

/// Looks up one stored record by slug.
///
/// Drafts are not publicly visible, so only a finalized record matches.
pub fn detalle_por_slug<'a>(
    registros: &'a [DetallePublico],
    slug: &str,
) -> Option<&'a DetallePublico> {
    registros
        .iter()
        .find(|d| d.status == Status::Finalizada && d.slug == slug)
}

/// Ticket identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Boleto(u64);

/// Request slot enforcing last-request-wins.
///
/// Each logical concern (search, detail) keeps its own slot. Issuing a
/// ticket invalidates every predecessor, so a late response carrying an
/// old ticket is simply dropped.
#[derive(Debug, Default)]
pub struct RanuraSolicitud {
    actual: u64,
}

impl RanuraSolicitud {
    /// Creates a slot with no outstanding ticket.
    pub fn nueva() -> Self {
        Self::default()
    }

    /// Issues the next ticket, invalidating all previous ones.
    pub fn emitir(&mut self) -> Boleto {
        self.actual += 1;
        Boleto(self.actual)
    }

    /// True while the ticket is the most recently issued one.
    #[inline]
    pub fn vigente(&self, boleto: Boleto) -> bool {
        boleto.0 == self.actual
    }

    /// Invalidates the outstanding ticket without issuing a new one.
    pub fn cancelar(&mut self) {
        self.actual += 1;
    }
}

/// Aggregate figures of the public landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstadisticasPublicas {
    pub planeaciones_total: i64,
    pub planeaciones_finalizadas: i64,
    /// Distinct teachers with at least one document, any status.
    pub docentes_participantes: i64,
    pub unidades_tematicas_total: i64,
    pub sesiones_didacticas_total: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ultima_actualizacion: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ultima_publicacion: Option<DateTime<Utc>>,
}

/// Computes the aggregate statistics of a record collection.
///
/// Drafts count toward the totals and the distinct-teacher figure;
/// `ultima_publicacion` only looks at finalized documents. Both
/// timestamps are omitted from the serialized form when absent.
pub fn estadisticas(registros: &[DetallePublico]) -> EstadisticasPublicas {
    let docentes: HashSet<i64> = registros.iter().map(|d| d.docente_id).collect();
    EstadisticasPublicas {
        planeaciones_total: registros.len() as i64,
        planeaciones_finalizadas: registros
            .iter()
            .filter(|d| d.status == Status::Finalizada)
            .count() as i64,
        docentes_participantes: docentes.len() as i64,
        unidades_tematicas_total: registros
            .iter()
            .map(|d| d.unidades_tematicas.len() as i64)
            .sum(),
        sesiones_didacticas_total: registros
            .iter()
            .flat_map(|d| &d.unidades_tematicas)
            .map(|u| u.bloques.len() as i64)
            .sum(),
        ultima_actualizacion: registros.iter().map(|d| d.updated_at).max(),
        ultima_publicacion: registros
            .iter()
            .filter(|d| d.status == Status::Finalizada)
            .map(|d| d.updated_at)
            .max(),
    }
}

/// Units of a detail record in display order (`numero` ascending,
/// unset numbers first).
pub fn unidades_ordenadas(unidades: &[UnidadDetalle]) -> Vec<&UnidadDetalle> {
    let mut orden: Vec<&UnidadDetalle> = unidades.iter().collect();
    orden.sort_by_key(|u| u.numero.unwrap_or(0));
    orden
}

/// Blocks of a unit in display order (`numero_sesion` ascending).
pub fn bloques_ordenados(bloques: &[BloqueDetalle]) -> Vec<&BloqueDetalle> {
    let mut orden: Vec<&BloqueDetalle> = bloques.iter().collect();
    orden.sort_by_key(|b| b.numero_sesion.unwrap_or(0));
    orden
}

/// First unit (in display order) whose development period contains
/// `hoy`, inclusive on both ends. Units with an incomplete period are
/// never active.
pub fn unidad_vigente<'a>(
    unidades: &'a [UnidadDetalle],
    hoy: NaiveDate,
) -> Option<&'a UnidadDetalle> {
    unidades_ordenadas(unidades)
        .into_iter()
        .find(|u| u.periodo_desarrollo.contiene(hoy))
}

/// Session count of a unit: the declared total when positive, else the
/// block count when any, else the per-space sum.
pub fn sesiones_de_unidad(unidad: &UnidadDetalle) -> u32 {
    let declaradas = unidad.sesiones_totales.unwrap_or(0);
    if declaradas > 0 {
        return declaradas;
    }
    if !unidad.bloques.is_empty() {
        return unidad.bloques.len() as u32;
    }
    let s = &unidad.sesiones_por_espacio;
    s.aula.unwrap_or(0)
        + s.laboratorio.unwrap_or(0)
        + s.taller.unwrap_or(0)
        + s.clinica.unwrap_or(0)
        + s.otro.unwrap_or(0)
}

/// Hour total of a unit across its five spaces.
pub fn horas_de_unidad(unidad: &UnidadDetalle) -> f64 {
    let h = &unidad.horas;
    h.aula.unwrap_or(0.0)
        + h.laboratorio.unwrap_or(0.0)
        + h.taller.unwrap_or(0.0)
        + h.clinica.unwrap_or(0.0)
        + h.otro.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fecha(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_detalle(
        id: i64,
        docente_id: i64,
        profesor: &str,
        ua: &str,
        abreviatura: Option<&str>,
        status: &str,
        dia: u32,
    ) -> DetallePublico {
        serde_json::from_value(json!({
            "id": id,
            "docente_id": docente_id,
            "unidad_academica_id": 1,
            "nombre_planeacion": format!("Planeación {}", id),
            "slug": format!("plan-{}", id),
            "status": status,
            "created_at": "2025-08-01T09:00:00Z",
            "updated_at": format!("2025-08-{:02}T12:00:00Z", dia),
            "profesor": profesor,
            "unidad_academica": ua,
            "unidad_academica_abreviatura": abreviatura,
            "unidad_aprendizaje_nombre": "Estructuras de Datos",
        }))
        .unwrap()
    }

    fn sample_unidad(
        numero: u32,
        del: Option<&str>,
        al: Option<&str>,
        sesiones_totales: u32,
        bloques: usize,
    ) -> UnidadDetalle {
        let bloques: Vec<serde_json::Value> = (0..bloques)
            .map(|j| json!({"id": (j + 1) as i64, "numero_sesion": (j + 1) as u32}))
            .collect();
        serde_json::from_value(json!({
            "id": numero as i64,
            "numero": numero,
            "periodo_desarrollo": {"del": del, "al": al},
            "sesiones_totales": sesiones_totales,
            "bloques": bloques,
        }))
        .unwrap()
    }

    #[test]
    fn test_consulta_sin_filtros_se_rechaza() {
        let consulta = ConsultaPublica::nueva().with_profesor("   ");
        let err = consulta.validar().unwrap_err();
        assert_eq!(
            err.mensaje,
            "Debes enviar al menos un filtro: profesor, unidad o ua"
        );
        assert!(buscar(&[], &consulta).is_err());
    }

    #[test]
    fn test_limite_y_desplazamiento_efectivos() {
        let consulta = ConsultaPublica::nueva();
        assert_eq!(consulta.limite(), 20);
        assert_eq!(consulta.desplazamiento(), 0);

        assert_eq!(ConsultaPublica::nueva().with_limit(100).limite(), 100);
        assert_eq!(ConsultaPublica::nueva().with_limit(1).limite(), 1);
        assert_eq!(ConsultaPublica::nueva().with_limit(0).limite(), 20);
        assert_eq!(ConsultaPublica::nueva().with_limit(101).limite(), 20);
        assert_eq!(ConsultaPublica::nueva().with_limit(-5).limite(), 20);

        assert_eq!(ConsultaPublica::nueva().with_offset(7).desplazamiento(), 7);
        assert_eq!(ConsultaPublica::nueva().with_offset(-1).desplazamiento(), 0);
    }

    #[test]
    fn test_buscar_solo_finalizadas_orden_descendente() {
        let registros = vec![
            sample_detalle(1, 7, "María López", "UPIICSA", Some("UPI"), "finalizada", 10),
            sample_detalle(2, 7, "María López", "UPIICSA", Some("UPI"), "borrador", 20),
            sample_detalle(3, 9, "Juan Martínez", "ESCOM", None, "finalizada", 15),
        ];

        let consulta = ConsultaPublica::nueva().with_profesor("maría");
        let respuesta = buscar(&registros, &consulta).unwrap();
        // El borrador del mismo profesor no aparece.
        assert_eq!(respuesta.items.len(), 1);
        assert_eq!(respuesta.items[0].id, 1);
        assert_eq!(respuesta.items[0].unidad_academica_abreviatura, "UPI");

        let todas = buscar(&registros, &ConsultaPublica::nueva().with_unidad("datos")).unwrap();
        let ids: Vec<i64> = todas.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1]);
        // Sin abreviatura viaja cadena vacía.
        assert_eq!(todas.items[0].unidad_academica_abreviatura, "");
    }

    #[test]
    fn test_buscar_por_nombre_o_abreviatura_de_ua() {
        let registros = vec![
            sample_detalle(1, 7, "María López", "UPIICSA", Some("UPI"), "finalizada", 10),
            sample_detalle(3, 9, "Juan Martínez", "ESCOM", None, "finalizada", 15),
        ];

        let por_abreviatura = buscar(&registros, &ConsultaPublica::nueva().with_ua("upi")).unwrap();
        assert_eq!(por_abreviatura.items.len(), 1);
        assert_eq!(por_abreviatura.items[0].id, 1);

        let por_nombre = buscar(&registros, &ConsultaPublica::nueva().with_ua("escom")).unwrap();
        assert_eq!(por_nombre.items.len(), 1);
        assert_eq!(por_nombre.items[0].id, 3);
    }

    #[test]
    fn test_buscar_pagina_resultados() {
        let registros: Vec<DetallePublico> = (1..=5)
            .map(|i| {
                sample_detalle(i, 7, "María López", "UPIICSA", None, "finalizada", i as u32)
            })
            .collect();

        let consulta = ConsultaPublica::nueva()
            .with_profesor("maría")
            .with_limit(2)
            .with_offset(1);
        let respuesta = buscar(&registros, &consulta).unwrap();
        let ids: Vec<i64> = respuesta.items.iter().map(|i| i.id).collect();
        // Orden descendente por updated_at: 5,4,3,2,1; offset 1 y limit 2.
        assert_eq!(ids, vec![4, 3]);
        assert_eq!(respuesta.limit, 2);
        assert_eq!(respuesta.offset, 1);
    }

    #[test]
    fn test_detalle_por_slug_ignora_borradores() {
        let registros = vec![
            sample_detalle(1, 7, "María López", "UPIICSA", None, "finalizada", 10),
            sample_detalle(2, 7, "María López", "UPIICSA", None, "borrador", 20),
        ];

        let detalle = detalle_por_slug(&registros, "plan-1").unwrap();
        assert_eq!(detalle.id, 1);
        // El borrador existe pero no es público.
        assert!(detalle_por_slug(&registros, "plan-2").is_none());
        assert!(detalle_por_slug(&registros, "plan-9").is_none());
    }

    #[test]
    fn test_respuesta_serializa_campos_exactos() {
        let registros = vec![sample_detalle(
            1, 7, "María López", "UPIICSA", Some("UPI"), "finalizada", 10,
        )];
        let respuesta =
            buscar(&registros, &ConsultaPublica::nueva().with_profesor("maría")).unwrap();
        let v = serde_json::to_value(&respuesta).unwrap();

        assert!(v.as_object().unwrap().contains_key("items"));
        assert_eq!(v["limit"], 20);
        assert_eq!(v["offset"], 0);

        let item = v["items"][0].as_object().unwrap();
        let mut claves: Vec<&str> = item.keys().map(|k| k.as_str()).collect();
        claves.sort_unstable();
        assert_eq!(
            claves,
            vec![
                "id",
                "nombre_planeacion",
                "profesor",
                "slug",
                "unidad_academica",
                "unidad_academica_abreviatura",
                "unidad_aprendizaje",
                "updated_at",
            ]
        );
    }

    #[test]
    fn test_boletos_ultimo_gana() {
        let mut ranura = RanuraSolicitud::nueva();
        let primero = ranura.emitir();
        assert!(ranura.vigente(primero));

        let segundo = ranura.emitir();
        assert!(!ranura.vigente(primero));
        assert!(ranura.vigente(segundo));

        ranura.cancelar();
        assert!(!ranura.vigente(segundo));
    }

    #[test]
    fn test_estadisticas_agregadas() {
        let mut a = sample_detalle(1, 7, "María López", "UPIICSA", None, "finalizada", 10);
        a.unidades_tematicas = vec![
            sample_unidad(1, None, None, 0, 3),
            sample_unidad(2, None, None, 0, 2),
        ];
        let mut b = sample_detalle(2, 7, "María López", "UPIICSA", None, "borrador", 20);
        b.unidades_tematicas = vec![sample_unidad(1, None, None, 0, 1)];
        let c = sample_detalle(3, 9, "Juan Martínez", "ESCOM", None, "finalizada", 15);

        let stats = estadisticas(&[a, b, c]);
        assert_eq!(stats.planeaciones_total, 3);
        assert_eq!(stats.planeaciones_finalizadas, 2);
        assert_eq!(stats.docentes_participantes, 2);
        assert_eq!(stats.unidades_tematicas_total, 3);
        assert_eq!(stats.sesiones_didacticas_total, 6);
        // La última actualización viene del borrador (día 20); la última
        // publicación sólo mira finalizadas (día 15).
        assert_eq!(
            stats.ultima_actualizacion.unwrap().to_rfc3339(),
            "2025-08-20T12:00:00+00:00"
        );
        assert_eq!(
            stats.ultima_publicacion.unwrap().to_rfc3339(),
            "2025-08-15T12:00:00+00:00"
        );
    }

    #[test]
    fn test_estadisticas_vacias_omiten_fechas() {
        let stats = estadisticas(&[]);
        assert_eq!(stats.planeaciones_total, 0);
        assert_eq!(stats.ultima_actualizacion, None);

        let v = serde_json::to_value(&stats).unwrap();
        let claves = v.as_object().unwrap();
        assert!(!claves.contains_key("ultima_actualizacion"));
        assert!(!claves.contains_key("ultima_publicacion"));
    }

    #[test]
    fn test_unidad_vigente_inclusiva_en_extremos() {
        let unidades = vec![
            sample_unidad(2, Some("2025-09-15"), Some("2025-10-10"), 0, 0),
            sample_unidad(1, Some("2025-08-04"), Some("2025-09-12"), 0, 0),
        ];

        let vigente = unidad_vigente(&unidades, fecha(2025, 8, 4)).unwrap();
        assert_eq!(vigente.numero, Some(1));
        let vigente = unidad_vigente(&unidades, fecha(2025, 9, 12)).unwrap();
        assert_eq!(vigente.numero, Some(1));
        let vigente = unidad_vigente(&unidades, fecha(2025, 9, 15)).unwrap();
        assert_eq!(vigente.numero, Some(2));
        assert!(unidad_vigente(&unidades, fecha(2025, 9, 13)).is_none());

        // Periodo incompleto nunca está vigente.
        let sin_fin = vec![sample_unidad(1, Some("2025-08-04"), None, 0, 0)];
        assert!(unidad_vigente(&sin_fin, fecha(2025, 8, 4)).is_none());
    }

    #[test]
    fn test_orden_de_unidades_y_bloques() {
        let unidades = vec![
            sample_unidad(3, None, None, 0, 0),
            sample_unidad(1, None, None, 0, 0),
            sample_unidad(2, None, None, 0, 0),
        ];
        let numeros: Vec<Option<u32>> =
            unidades_ordenadas(&unidades).iter().map(|u| u.numero).collect();
        assert_eq!(numeros, vec![Some(1), Some(2), Some(3)]);

        let con_bloques = sample_unidad(1, None, None, 0, 3);
        let orden: Vec<Option<u32>> = bloques_ordenados(&con_bloques.bloques)
            .iter()
            .map(|b| b.numero_sesion)
            .collect();
        assert_eq!(orden, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_sesiones_de_unidad_con_respaldo() {
        // Total declarado manda.
        let declarada = sample_unidad(1, None, None, 8, 3);
        assert_eq!(sesiones_de_unidad(&declarada), 8);

        // Sin total, cuenta de bloques.
        let por_bloques = sample_unidad(1, None, None, 0, 3);
        assert_eq!(sesiones_de_unidad(&por_bloques), 3);

        // Sin total ni bloques, suma por espacio.
        let por_espacio: UnidadDetalle = serde_json::from_value(json!({
            "id": 1,
            "numero": 1,
            "sesiones_totales": 0,
            "sesiones_por_espacio": {"aula": 4, "laboratorio": 2, "taller": null, "clinica": null, "otro": null},
            "bloques": []
        }))
        .unwrap();
        assert_eq!(sesiones_de_unidad(&por_espacio), 6);
    }

    #[test]
    fn test_horas_de_unidad_suma_cinco_espacios() {
        let unidad: UnidadDetalle = serde_json::from_value(json!({
            "id": 1,
            "numero": 1,
            "horas": {"aula": 8.0, "laboratorio": 4.0, "taller": 1.5, "clinica": null, "otro": 0.5}
        }))
        .unwrap();
        assert_eq!(horas_de_unidad(&unidad), 14.0);
    }
}
