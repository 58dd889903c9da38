//! Editor state container for a course plan under capture.
//!
//! [`EditorPlaneacion`] owns the document being edited and is the only
//! place that mutates it: field writes go through typed paths
//! ([`RutaCampo`]), structural operations (add, remove, duplicate)
//! renumber units and blocks deterministically before returning, and
//! registered listeners are notified after every successful mutation.
//! A finalized document refuses every edit.
//!
//! Unit and block numbers always equal position + 1; renumbering runs
//! at the end of each insert or delete, never as a reactive side
//! effect.

use chrono::NaiveDate;

use crate::congruencia::reconciliar_totales;
use crate::models::{lista_a_texto, texto_a_lista, Bloque, Planeacion, Status, UnidadTematica};
use crate::progress::{progreso_secciones, Seccion};

/// Listener invoked with the document after each successful mutation.
pub type EscuchaCambios = Box<dyn FnMut(&Planeacion)>;

/// An editing error.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorEdicion {
    /// Error category.
    pub kind: ErrorEdicionKind,
    /// Human-readable description.
    pub mensaje: String,
    /// Section the form should focus, when the refusal points at one.
    pub seccion_foco: Option<Seccion>,
}

/// Categories of editing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorEdicionKind {
    /// The document is finalized and read-only.
    SoloLectura,
    /// A unit or block index is out of range.
    IndiceInvalido,
    /// The unit's percentage budget is exhausted.
    PresupuestoAgotado,
    /// The operation needs an existing block.
    SinBloques,
    /// A field value failed to parse.
    ValorInvalido,
    /// Finalization refused while a section is incomplete.
    SeccionIncompleta,
}

impl ErrorEdicion {
    fn new(kind: ErrorEdicionKind, mensaje: impl Into<String>) -> Self {
        Self {
            kind,
            mensaje: mensaje.into(),
            seccion_foco: None,
        }
    }

    fn con_foco(kind: ErrorEdicionKind, mensaje: impl Into<String>, seccion: Seccion) -> Self {
        Self {
            kind,
            mensaje: mensaje.into(),
            seccion_foco: Some(seccion),
        }
    }

    fn solo_lectura() -> Self {
        Self::new(
            ErrorEdicionKind::SoloLectura,
            "Planeación finalizada: solo lectura, no se puede guardar.",
        )
    }

    fn indice_unidad(i: usize) -> Self {
        Self::new(
            ErrorEdicionKind::IndiceInvalido,
            format!("No existe la unidad temática en la posición {}.", i),
        )
    }

    fn indice_bloque(i: usize, j: usize) -> Self {
        Self::new(
            ErrorEdicionKind::IndiceInvalido,
            format!("No existe la sesión {} en la unidad de la posición {}.", j, i),
        )
    }
}

impl std::fmt::Display for ErrorEdicion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mensaje)
    }
}

impl std::error::Error for ErrorEdicion {}

/// Editable fields of a thematic unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampoUnidad {
    Nombre,
    UnidadCompetencia,
    PeriodoDel,
    PeriodoAl,
    PeriodoRegistroEval,
    Precisiones,
}

/// Editable fields of a session block. List fields read and write the
/// semicolon-joined form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampoBloque {
    TemasSubtemas,
    ActividadesInicio,
    ActividadesDesarrollo,
    ActividadesCierre,
    Recursos,
    Evidencias,
    Instrumentos,
    ValorPorcentual,
}

/// Typed path to an editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RutaCampo {
    /// `(índice de unidad, campo)`.
    Unidad(usize, CampoUnidad),
    /// `(índice de unidad, índice de bloque, campo)`.
    Bloque(usize, usize, CampoBloque),
}

/// Sets `numero` to position + 1 on every unit.
pub fn renumerar_unidades(unidades: &mut [UnidadTematica]) {
    for (idx, unidad) in unidades.iter_mut().enumerate() {
        unidad.numero = (idx + 1) as u32;
    }
}

/// Sets `numero_sesion` to position + 1 on every block.
pub fn renumerar_bloques(bloques: &mut [Bloque]) {
    for (idx, bloque) in bloques.iter_mut().enumerate() {
        bloque.numero_sesion = (idx + 1) as u32;
    }
}

/// Sum of block weights; non-finite entries count as zero.
pub fn suma_valor_porcentual(bloques: &[Bloque]) -> f64 {
    bloques
        .iter()
        .map(|b| {
            if b.valor_porcentual.is_finite() {
                b.valor_porcentual
            } else {
                0.0
            }
        })
        .sum()
}

/// Remaining percentage budget of a unit: `max(0, 100 − suma)`.
pub fn restante(unidad: &UnidadTematica) -> f64 {
    (100.0 - suma_valor_porcentual(&unidad.bloques)).max(0.0)
}

/// Manual findings for one unit: percentage budget over 100 and an
/// inverted development period. Not part of the section progress.
pub fn hallazgos_unidad(unidad: &UnidadTematica) -> Vec<String> {
    let mut hallazgos = Vec::new();
    let total = suma_valor_porcentual(&unidad.bloques);
    if total > 100.0 {
        hallazgos.push(format!(
            "La suma de \"Valor (%)\" en las sesiones no debe exceder 100 (actual: {}).",
            total
        ));
    }
    if unidad.periodo_desarrollo.invertido() {
        hallazgos.push("La fecha inicial no puede ser posterior a la final.".to_string());
    }
    hallazgos
}

fn parsear_fecha(valor: &str) -> Result<Option<NaiveDate>, ErrorEdicion> {
    let valor = valor.trim();
    if valor.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(valor, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            ErrorEdicion::new(
                ErrorEdicionKind::ValorInvalido,
                format!("Fecha inválida: {}", valor),
            )
        })
}

fn parsear_valor_porcentual(valor: &str) -> Result<f64, ErrorEdicion> {
    let parseado: f64 = valor.trim().parse().map_err(|_| {
        ErrorEdicion::new(
            ErrorEdicionKind::ValorInvalido,
            format!("Número inválido: {}", valor),
        )
    })?;
    if !parseado.is_finite() {
        return Err(ErrorEdicion::new(
            ErrorEdicionKind::ValorInvalido,
            format!("Número inválido: {}", valor),
        ));
    }
    Ok(parseado.clamp(0.0, 100.0))
}

fn formato_fecha(fecha: Option<NaiveDate>) -> String {
    fecha
        .map(|f| f.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// State container for the document being edited.
pub struct EditorPlaneacion {
    planeacion: Planeacion,
    escuchas: Vec<EscuchaCambios>,
}

impl std::fmt::Debug for EditorPlaneacion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorPlaneacion")
            .field("planeacion", &self.planeacion)
            .field("escuchas", &self.escuchas.len())
            .finish()
    }
}

impl EditorPlaneacion {
    /// Wraps a document for editing.
    pub fn new(planeacion: Planeacion) -> Self {
        Self {
            planeacion,
            escuchas: Vec::new(),
        }
    }

    /// Read access to the current document.
    #[inline]
    pub fn planeacion(&self) -> &Planeacion {
        &self.planeacion
    }

    /// Consumes the editor, returning the document.
    pub fn into_planeacion(self) -> Planeacion {
        self.planeacion
    }

    /// Registers a change listener, invoked after every successful
    /// mutation with the updated document.
    pub fn suscribir(&mut self, escucha: impl FnMut(&Planeacion) + 'static) {
        self.escuchas.push(Box::new(escucha));
    }

    fn notificar(&mut self) {
        let mut escuchas = std::mem::take(&mut self.escuchas);
        for escucha in &mut escuchas {
            escucha(&self.planeacion);
        }
        self.escuchas = escuchas;
    }

    fn exigir_borrador(&self) -> Result<(), ErrorEdicion> {
        if self.planeacion.finalizada() {
            log::debug!("edición rechazada: la planeación está finalizada");
            return Err(ErrorEdicion::solo_lectura());
        }
        Ok(())
    }

    fn unidad(&self, i: usize) -> Result<&UnidadTematica, ErrorEdicion> {
        self.planeacion
            .unidades_tematicas
            .get(i)
            .ok_or_else(|| ErrorEdicion::indice_unidad(i))
    }

    fn unidad_mut(&mut self, i: usize) -> Result<&mut UnidadTematica, ErrorEdicion> {
        self.planeacion
            .unidades_tematicas
            .get_mut(i)
            .ok_or_else(|| ErrorEdicion::indice_unidad(i))
    }

    fn bloque(&self, i: usize, j: usize) -> Result<&Bloque, ErrorEdicion> {
        self.unidad(i)?
            .bloques
            .get(j)
            .ok_or_else(|| ErrorEdicion::indice_bloque(i, j))
    }

    fn bloque_mut(&mut self, i: usize, j: usize) -> Result<&mut Bloque, ErrorEdicion> {
        self.unidad_mut(i)?
            .bloques
            .get_mut(j)
            .ok_or_else(|| ErrorEdicion::indice_bloque(i, j))
    }

    /// Runs a mutation closure over the document, then notifies.
    pub fn actualizar(
        &mut self,
        f: impl FnOnce(&mut Planeacion),
    ) -> Result<(), ErrorEdicion> {
        self.exigir_borrador()?;
        f(&mut self.planeacion);
        self.notificar();
        Ok(())
    }

    /// Writes one field through its typed path.
    ///
    /// Dates use ISO `YYYY-MM-DD` (blank clears the endpoint), list
    /// fields take the semicolon-joined form, and the block weight is
    /// clamped to `[0, 100]`.
    pub fn escribir_campo(&mut self, ruta: RutaCampo, valor: &str) -> Result<(), ErrorEdicion> {
        self.exigir_borrador()?;
        match ruta {
            RutaCampo::Unidad(i, campo) => {
                let nueva_fecha = match campo {
                    CampoUnidad::PeriodoDel | CampoUnidad::PeriodoAl => parsear_fecha(valor)?,
                    _ => None,
                };
                let unidad = self.unidad_mut(i)?;
                match campo {
                    CampoUnidad::Nombre => unidad.nombre_unidad_tematica = valor.to_string(),
                    CampoUnidad::UnidadCompetencia => {
                        unidad.unidad_competencia = valor.to_string()
                    }
                    CampoUnidad::PeriodoDel => unidad.periodo_desarrollo.del = nueva_fecha,
                    CampoUnidad::PeriodoAl => unidad.periodo_desarrollo.al = nueva_fecha,
                    CampoUnidad::PeriodoRegistroEval => {
                        unidad.periodo_registro_eval = valor.to_string()
                    }
                    CampoUnidad::Precisiones => unidad.precisiones = valor.to_string(),
                }
            }
            RutaCampo::Bloque(i, j, campo) => {
                let nuevo_valor = match campo {
                    CampoBloque::ValorPorcentual => Some(parsear_valor_porcentual(valor)?),
                    _ => None,
                };
                let bloque = self.bloque_mut(i, j)?;
                match campo {
                    CampoBloque::TemasSubtemas => bloque.temas_subtemas = valor.to_string(),
                    CampoBloque::ActividadesInicio => {
                        bloque.actividades.inicio = valor.to_string()
                    }
                    CampoBloque::ActividadesDesarrollo => {
                        bloque.actividades.desarrollo = valor.to_string()
                    }
                    CampoBloque::ActividadesCierre => {
                        bloque.actividades.cierre = valor.to_string()
                    }
                    CampoBloque::Recursos => bloque.recursos = texto_a_lista(valor),
                    CampoBloque::Evidencias => bloque.evidencias = texto_a_lista(valor),
                    CampoBloque::Instrumentos => bloque.instrumentos = texto_a_lista(valor),
                    CampoBloque::ValorPorcentual => {
                        bloque.valor_porcentual = nuevo_valor.unwrap_or(0.0)
                    }
                }
            }
        }
        self.notificar();
        Ok(())
    }

    /// Reads one field through its typed path, in the same textual form
    /// [`escribir_campo`](Self::escribir_campo) accepts.
    pub fn leer_campo(&self, ruta: RutaCampo) -> Result<String, ErrorEdicion> {
        match ruta {
            RutaCampo::Unidad(i, campo) => {
                let unidad = self.unidad(i)?;
                Ok(match campo {
                    CampoUnidad::Nombre => unidad.nombre_unidad_tematica.clone(),
                    CampoUnidad::UnidadCompetencia => unidad.unidad_competencia.clone(),
                    CampoUnidad::PeriodoDel => formato_fecha(unidad.periodo_desarrollo.del),
                    CampoUnidad::PeriodoAl => formato_fecha(unidad.periodo_desarrollo.al),
                    CampoUnidad::PeriodoRegistroEval => unidad.periodo_registro_eval.clone(),
                    CampoUnidad::Precisiones => unidad.precisiones.clone(),
                })
            }
            RutaCampo::Bloque(i, j, campo) => {
                let bloque = self.bloque(i, j)?;
                Ok(match campo {
                    CampoBloque::TemasSubtemas => bloque.temas_subtemas.clone(),
                    CampoBloque::ActividadesInicio => bloque.actividades.inicio.clone(),
                    CampoBloque::ActividadesDesarrollo => bloque.actividades.desarrollo.clone(),
                    CampoBloque::ActividadesCierre => bloque.actividades.cierre.clone(),
                    CampoBloque::Recursos => lista_a_texto(&bloque.recursos),
                    CampoBloque::Evidencias => lista_a_texto(&bloque.evidencias),
                    CampoBloque::Instrumentos => lista_a_texto(&bloque.instrumentos),
                    CampoBloque::ValorPorcentual => format!("{}", bloque.valor_porcentual),
                })
            }
        }
    }

    /// Appends a blank template unit and renumbers.
    pub fn agregar_unidad(&mut self) -> Result<(), ErrorEdicion> {
        self.exigir_borrador()?;
        let siguiente = self.planeacion.unidades_tematicas.len() as u32 + 1;
        self.planeacion
            .unidades_tematicas
            .push(UnidadTematica::plantilla(siguiente));
        renumerar_unidades(&mut self.planeacion.unidades_tematicas);
        self.notificar();
        Ok(())
    }

    /// Removes a unit and renumbers. The last unit may be removed.
    pub fn eliminar_unidad(&mut self, i: usize) -> Result<(), ErrorEdicion> {
        self.exigir_borrador()?;
        if i >= self.planeacion.unidades_tematicas.len() {
            return Err(ErrorEdicion::indice_unidad(i));
        }
        self.planeacion.unidades_tematicas.remove(i);
        renumerar_unidades(&mut self.planeacion.unidades_tematicas);
        self.notificar();
        Ok(())
    }

    /// Appends a blank block with weight 0 and renumbers. Refused while
    /// the unit's percentage budget is exhausted.
    pub fn agregar_bloque(&mut self, i: usize) -> Result<(), ErrorEdicion> {
        self.exigir_borrador()?;
        let unidad = self.unidad_mut(i)?;
        if restante(unidad) <= 0.0 {
            log::debug!("agregar_bloque rechazado: presupuesto agotado en la unidad {}", i);
            return Err(ErrorEdicion::new(
                ErrorEdicionKind::PresupuestoAgotado,
                "Ya no hay porcentaje restante. Ajusta 'Valor (%)' antes de agregar otra sesión.",
            ));
        }
        let siguiente = unidad.bloques.len() as u32 + 1;
        unidad.bloques.push(Bloque::plantilla(siguiente));
        renumerar_bloques(&mut unidad.bloques);
        self.notificar();
        Ok(())
    }

    /// Appends a copy of the last block with its weight clamped to the
    /// remaining budget, and renumbers. Refused when no block exists or
    /// the budget is exhausted.
    pub fn duplicar_ultimo_bloque(&mut self, i: usize) -> Result<(), ErrorEdicion> {
        self.exigir_borrador()?;
        let unidad = self.unidad_mut(i)?;
        let ultimo = match unidad.bloques.last() {
            Some(bloque) => bloque.clone(),
            None => {
                return Err(ErrorEdicion::new(
                    ErrorEdicionKind::SinBloques,
                    "No hay sesión anterior para duplicar.",
                ))
            }
        };
        let disponible = restante(unidad);
        if disponible <= 0.0 {
            log::debug!(
                "duplicar_ultimo_bloque rechazado: presupuesto agotado en la unidad {}",
                i
            );
            return Err(ErrorEdicion::new(
                ErrorEdicionKind::PresupuestoAgotado,
                "Ya no hay porcentaje restante para duplicar.",
            ));
        }
        let mut copia = ultimo;
        copia.valor_porcentual = copia.valor_porcentual.min(disponible);
        unidad.bloques.push(copia);
        renumerar_bloques(&mut unidad.bloques);
        self.notificar();
        Ok(())
    }

    /// Removes a block and renumbers the remaining ones.
    pub fn eliminar_bloque(&mut self, i: usize, j: usize) -> Result<(), ErrorEdicion> {
        self.exigir_borrador()?;
        let unidad = self.unidad_mut(i)?;
        if j >= unidad.bloques.len() {
            return Err(ErrorEdicion::indice_bloque(i, j));
        }
        unidad.bloques.remove(j);
        renumerar_bloques(&mut unidad.bloques);
        self.notificar();
        Ok(())
    }

    /// Recomputes a unit's `sesiones_totales` from its per-space counts.
    pub fn sincronizar_sesiones(&mut self, i: usize) -> Result<(), ErrorEdicion> {
        self.exigir_borrador()?;
        self.unidad_mut(i)?.sincronizar_sesiones();
        self.notificar();
        Ok(())
    }

    /// Finalizes the document.
    ///
    /// Refused while any section is incomplete, focusing the first one.
    /// Otherwise the declared totals are reconciled with the unit sums
    /// (one warning per adjustment, see
    /// [`reconciliar_totales`](crate::congruencia::reconciliar_totales))
    /// and the status becomes `finalizada`.
    pub fn finalizar(&mut self) -> Result<Vec<String>, ErrorEdicion> {
        self.exigir_borrador()?;
        let progreso = progreso_secciones(&self.planeacion);
        if let Some(seccion) = progreso.primera_incompleta() {
            log::debug!(
                "finalización rechazada: sección incompleta \"{}\"",
                seccion.clave()
            );
            return Err(ErrorEdicion::con_foco(
                ErrorEdicionKind::SeccionIncompleta,
                "Revisa los campos requeridos antes de finalizar.",
                seccion,
            ));
        }
        let avisos = reconciliar_totales(&mut self.planeacion);
        self.planeacion.status = Status::Finalizada;
        self.notificar();
        Ok(avisos)
    }
}
