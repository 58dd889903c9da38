//! Business-day calendar layout for the unit Gantt.
//!
//! Builds a shared Monday-to-Friday column axis spanning the union of
//! the unit development periods, places each unit as a half-open column
//! span on that axis, and groups the axis into same-month segments for
//! the header. Degenerate inputs never error: a document without
//! complete periods and a range that holds only weekend days each map
//! to their own placeholder variant.
//!
//! # Algorithm
//! 1. Order units by `numero` and collect their ordered ranges.
//! 2. Enumerate calendar days from the earliest start to the latest end
//!    (capped at 5000 days) and keep the weekdays.
//! 3. Map any date onto the axis with [`indice_mas_cercano`]: clamp
//!    outside dates to the first or last column, use exact hits, probe
//!    forward then backward up to three calendar days, and fall back to
//!    a linear scan for the minimum absolute distance.
//! 4. A unit span covers `[a, b + 1)` so the end day is included; the
//!    today column runs through the same mapping.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::UnidadTematica;

/// Cap on enumerated calendar days for one grid.
pub const MAX_DIAS_CALENDARIO: i64 = 5000;

const MESES_CORTOS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

#[inline]
fn es_fin_de_semana(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

fn etiqueta_mes(d: NaiveDate) -> String {
    format!("{} {}", MESES_CORTOS[d.month0() as usize], d.year())
}

/// Business days (Monday to Friday) from `inicio` to `fin`, inclusive.
///
/// The enumerated window is clamped to at least one and at most
/// [`MAX_DIAS_CALENDARIO`] calendar days, so an inverted pair yields
/// just the start day when it is a weekday.
pub fn dias_habiles(inicio: NaiveDate, fin: NaiveDate) -> Vec<NaiveDate> {
    let total = (fin.signed_duration_since(inicio).num_days() + 1).clamp(1, MAX_DIAS_CALENDARIO);
    let mut dias = Vec::new();
    for i in 0..total {
        let d = inicio + Duration::days(i);
        if !es_fin_de_semana(d) {
            dias.push(d);
        }
    }
    dias
}

/// Maps a date onto a sorted business-day axis.
///
/// Dates on or before the first day map to column 0; on or after the
/// last, to the last column. Exact hits resolve directly. Anything else
/// (weekends inside the range) probes forward one to three calendar
/// days, then backward, and finally scans for the minimum absolute
/// distance. An empty axis maps everything to 0.
pub fn indice_mas_cercano(dias: &[NaiveDate], fecha: NaiveDate) -> usize {
    if dias.is_empty() {
        return 0;
    }
    if fecha <= dias[0] {
        return 0;
    }
    if fecha >= dias[dias.len() - 1] {
        return dias.len() - 1;
    }

    if let Ok(idx) = dias.binary_search(&fecha) {
        return idx;
    }

    for paso in 1..=3 {
        if let Ok(idx) = dias.binary_search(&(fecha + Duration::days(paso))) {
            return idx;
        }
    }
    for paso in 1..=3 {
        if let Ok(idx) = dias.binary_search(&(fecha - Duration::days(paso))) {
            return idx;
        }
    }

    let mut mejor = 0;
    let mut mejor_dist = i64::MAX;
    for (i, d) in dias.iter().enumerate() {
        let dist = d.signed_duration_since(fecha).num_days().abs();
        if dist < mejor_dist {
            mejor_dist = dist;
            mejor = i;
        }
    }
    mejor
}

/// A maximal run of axis columns sharing the same month and year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentoMes {
    /// Header label, e.g. "ene 2024".
    pub etiqueta: String,
    /// First column of the run.
    pub desde: usize,
    /// Last column of the run, inclusive.
    pub hasta: usize,
}

/// Groups a business-day axis into contiguous same-month segments.
pub fn segmentos_mes(dias: &[NaiveDate]) -> Vec<SegmentoMes> {
    let mut segmentos = Vec::new();
    if dias.is_empty() {
        return segmentos;
    }

    let mut desde = 0;
    let mut actual = (dias[0].month(), dias[0].year());
    for (i, d) in dias.iter().enumerate().skip(1) {
        let clave = (d.month(), d.year());
        if clave != actual {
            segmentos.push(SegmentoMes {
                etiqueta: etiqueta_mes(dias[desde]),
                desde,
                hasta: i - 1,
            });
            desde = i;
            actual = clave;
        }
    }
    segmentos.push(SegmentoMes {
        etiqueta: etiqueta_mes(dias[desde]),
        desde,
        hasta: dias.len() - 1,
    });
    segmentos
}

/// Column span of one unit bar, half-open: `[desde, hasta)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TramoUnidad {
    pub desde: usize,
    pub hasta: usize,
}

/// One Gantt row. Units without a complete period keep their row but
/// carry no span.
#[derive(Debug, Clone, PartialEq)]
pub struct FilaCronograma {
    pub numero: u32,
    pub nombre: String,
    pub sesiones_totales: u32,
    /// Ordered development range, when complete.
    pub rango: Option<(NaiveDate, NaiveDate)>,
    /// Column span on the axis, when the range is complete.
    pub tramo: Option<TramoUnidad>,
}

/// A renderable grid: the axis, its month header, one row per unit and
/// the today column.
#[derive(Debug, Clone, PartialEq)]
pub struct GrillaCronograma {
    pub dias: Vec<NaiveDate>,
    pub segmentos: Vec<SegmentoMes>,
    pub filas: Vec<FilaCronograma>,
    /// Column for the today indicator, snapped onto the axis.
    pub indice_hoy: usize,
}

/// Calendar layout result.
#[derive(Debug, Clone, PartialEq)]
pub enum Cronograma {
    /// No unit has a complete development period.
    SinFechas,
    /// The union of periods holds no weekday.
    SinDiasHabiles,
    /// Renderable grid.
    Grilla(GrillaCronograma),
}

/// Builds the Gantt grid for a set of thematic units.
///
/// Units are ordered by `numero`; inverted periods are swapped before
/// use. `hoy` is snapped onto the axis for the today column.
pub fn construir_cronograma(unidades: &[UnidadTematica], hoy: NaiveDate) -> Cronograma {
    let mut ordenadas: Vec<&UnidadTematica> = unidades.iter().collect();
    ordenadas.sort_by_key(|u| u.numero);

    let rangos: Vec<Option<(NaiveDate, NaiveDate)>> = ordenadas
        .iter()
        .map(|u| u.periodo_desarrollo.rango_ordenado())
        .collect();

    let mut limites: Option<(NaiveDate, NaiveDate)> = None;
    for (inicio, fin) in rangos.iter().flatten() {
        limites = Some(match limites {
            None => (*inicio, *fin),
            Some((min_inicio, max_fin)) => (min_inicio.min(*inicio), max_fin.max(*fin)),
        });
    }
    let (min_inicio, max_fin) = match limites {
        Some(l) => l,
        None => return Cronograma::SinFechas,
    };

    let dias = dias_habiles(min_inicio, max_fin);
    if dias.is_empty() {
        return Cronograma::SinDiasHabiles;
    }

    let segmentos = segmentos_mes(&dias);
    let indice_hoy = indice_mas_cercano(&dias, hoy);

    let filas = ordenadas
        .iter()
        .zip(rangos)
        .map(|(u, rango)| {
            let tramo = rango.map(|(inicio, fin)| {
                let s = indice_mas_cercano(&dias, inicio);
                let e = indice_mas_cercano(&dias, fin);
                TramoUnidad {
                    desde: s.min(e),
                    hasta: s.max(e) + 1,
                }
            });
            FilaCronograma {
                numero: u.numero,
                nombre: u.nombre_unidad_tematica.clone(),
                sesiones_totales: u.sesiones_totales,
                rango,
                tramo,
            }
        })
        .collect();

    Cronograma::Grilla(GrillaCronograma {
        dias,
        segmentos,
        filas,
        indice_hoy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fecha(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn unidad_con_periodo(numero: u32, del: NaiveDate, al: NaiveDate) -> UnidadTematica {
        UnidadTematica::plantilla(numero)
            .with_nombre(format!("Unidad {}", numero))
            .with_periodo(del, al)
    }

    #[test]
    fn test_dias_habiles_excluye_fin_de_semana() {
        // Lunes 1 a lunes 8 de enero de 2024.
        let dias = dias_habiles(fecha(2024, 1, 1), fecha(2024, 1, 8));
        let esperados: Vec<NaiveDate> = [1, 2, 3, 4, 5, 8]
            .iter()
            .map(|d| fecha(2024, 1, *d))
            .collect();
        assert_eq!(dias, esperados);
    }

    #[test]
    fn test_dias_habiles_rango_invertido_da_un_dia() {
        let dias = dias_habiles(fecha(2024, 1, 3), fecha(2024, 1, 1));
        assert_eq!(dias, vec![fecha(2024, 1, 3)]);
    }

    #[test]
    fn test_dias_habiles_respeta_el_tope() {
        let dias = dias_habiles(fecha(2024, 1, 1), fecha(2060, 1, 1));
        // 5000 días naturales desde un lunes: 714 semanas completas y
        // los dos días sobrantes caen en lunes y martes.
        assert_eq!(dias.len(), 714 * 5 + 2);
        assert_eq!(dias[0], fecha(2024, 1, 1));
    }

    #[test]
    fn test_indice_exacto_y_extremos() {
        let dias = dias_habiles(fecha(2024, 1, 1), fecha(2024, 1, 8));
        assert_eq!(indice_mas_cercano(&dias, fecha(2024, 1, 3)), 2);
        assert_eq!(indice_mas_cercano(&dias, fecha(2023, 12, 25)), 0);
        assert_eq!(indice_mas_cercano(&dias, fecha(2024, 2, 1)), dias.len() - 1);
        assert_eq!(indice_mas_cercano(&[], fecha(2024, 1, 3)), 0);
    }

    #[test]
    fn test_sabado_salta_hacia_adelante() {
        let dias = dias_habiles(fecha(2024, 1, 1), fecha(2024, 1, 8));
        // Sábado 6: +1 cae en domingo, +2 encuentra el lunes 8.
        assert_eq!(indice_mas_cercano(&dias, fecha(2024, 1, 6)), 5);
        // Domingo 7: +1 encuentra el lunes 8.
        assert_eq!(indice_mas_cercano(&dias, fecha(2024, 1, 7)), 5);
    }

    #[test]
    fn test_indice_es_deterministico() {
        let dias = dias_habiles(fecha(2024, 1, 1), fecha(2024, 3, 29));
        let consulta = fecha(2024, 2, 10);
        let primero = indice_mas_cercano(&dias, consulta);
        for _ in 0..10 {
            assert_eq!(indice_mas_cercano(&dias, consulta), primero);
        }
    }

    #[test]
    fn test_segmentos_en_frontera_de_mes() {
        // Lunes 29 de enero a viernes 2 de febrero de 2024.
        let dias = dias_habiles(fecha(2024, 1, 29), fecha(2024, 2, 2));
        assert_eq!(dias.len(), 5);
        let segmentos = segmentos_mes(&dias);
        assert_eq!(segmentos.len(), 2);
        assert_eq!(segmentos[0].etiqueta, "ene 2024");
        assert_eq!(segmentos[0].desde, 0);
        assert_eq!(segmentos[0].hasta, 2);
        assert_eq!(segmentos[1].etiqueta, "feb 2024");
        assert_eq!(segmentos[1].desde, 3);
        assert_eq!(segmentos[1].hasta, 4);
    }

    #[test]
    fn test_cronograma_de_dos_unidades() {
        let unidades = vec![
            unidad_con_periodo(1, fecha(2024, 1, 1), fecha(2024, 1, 5)),
            unidad_con_periodo(2, fecha(2024, 1, 6), fecha(2024, 1, 8)),
        ];
        let grilla = match construir_cronograma(&unidades, fecha(2024, 1, 3)) {
            Cronograma::Grilla(g) => g,
            otro => panic!("se esperaba una grilla, se obtuvo {:?}", otro),
        };

        assert_eq!(grilla.dias.len(), 6);
        assert_eq!(grilla.dias[5], fecha(2024, 1, 8));
        assert_eq!(grilla.indice_hoy, 2);

        assert_eq!(grilla.filas[0].tramo, Some(TramoUnidad { desde: 0, hasta: 5 }));
        // El inicio en sábado se recorre al lunes 8.
        assert_eq!(grilla.filas[1].tramo, Some(TramoUnidad { desde: 5, hasta: 6 }));
    }

    #[test]
    fn test_sin_periodos_completos() {
        let mut sin_fin = UnidadTematica::plantilla(1);
        sin_fin.periodo_desarrollo.del = Some(fecha(2024, 1, 1));
        let unidades = vec![sin_fin, UnidadTematica::plantilla(2)];
        assert_eq!(
            construir_cronograma(&unidades, fecha(2024, 1, 3)),
            Cronograma::SinFechas
        );
    }

    #[test]
    fn test_rango_solo_de_fin_de_semana() {
        let unidades = vec![unidad_con_periodo(1, fecha(2024, 1, 6), fecha(2024, 1, 7))];
        assert_eq!(
            construir_cronograma(&unidades, fecha(2024, 1, 6)),
            Cronograma::SinDiasHabiles
        );
    }

    #[test]
    fn test_unidad_sin_periodo_conserva_su_fila() {
        let unidades = vec![
            unidad_con_periodo(1, fecha(2024, 1, 1), fecha(2024, 1, 5)),
            UnidadTematica::plantilla(2).with_nombre("Sin fechas"),
        ];
        let grilla = match construir_cronograma(&unidades, fecha(2024, 1, 2)) {
            Cronograma::Grilla(g) => g,
            otro => panic!("se esperaba una grilla, se obtuvo {:?}", otro),
        };
        assert_eq!(grilla.filas.len(), 2);
        assert_eq!(grilla.filas[1].rango, None);
        assert_eq!(grilla.filas[1].tramo, None);
    }

    #[test]
    fn test_filas_ordenadas_por_numero() {
        let unidades = vec![
            unidad_con_periodo(2, fecha(2024, 2, 5), fecha(2024, 2, 9)),
            unidad_con_periodo(1, fecha(2024, 1, 8), fecha(2024, 1, 12)),
        ];
        let grilla = match construir_cronograma(&unidades, fecha(2024, 1, 10)) {
            Cronograma::Grilla(g) => g,
            otro => panic!("se esperaba una grilla, se obtuvo {:?}", otro),
        };
        assert_eq!(grilla.filas[0].numero, 1);
        assert_eq!(grilla.filas[1].numero, 2);
    }

    #[test]
    fn test_periodo_invertido_se_ordena() {
        let unidades = vec![unidad_con_periodo(1, fecha(2024, 1, 5), fecha(2024, 1, 1))];
        let grilla = match construir_cronograma(&unidades, fecha(2024, 1, 3)) {
            Cronograma::Grilla(g) => g,
            otro => panic!("se esperaba una grilla, se obtuvo {:?}", otro),
        };
        assert_eq!(
            grilla.filas[0].rango,
            Some((fecha(2024, 1, 1), fecha(2024, 1, 5)))
        );
        assert_eq!(grilla.filas[0].tramo, Some(TramoUnidad { desde: 0, hasta: 5 }));
    }

    #[test]
    fn test_hoy_en_fin_de_semana_se_ajusta() {
        let unidades = vec![unidad_con_periodo(1, fecha(2024, 1, 1), fecha(2024, 1, 12))];
        let grilla = match construir_cronograma(&unidades, fecha(2024, 1, 7)) {
            Cronograma::Grilla(g) => g,
            otro => panic!("se esperaba una grilla, se obtuvo {:?}", otro),
        };
        // Domingo 7 se recorre al lunes 8 (columna 5).
        assert_eq!(grilla.indice_hoy, 5);
    }
}
