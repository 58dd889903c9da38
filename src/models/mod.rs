//! Course-plan domain models.
//!
//! Provides the data types for an institutional course plan
//! ("planeación didáctica"): the document header, thematic units with
//! their session blocks, bibliographic references, and the flat wire
//! shapes the persistence API exchanges.
//!
//! # Form Mappings
//!
//! | Sección del formato | Tipos |
//! |---------------------|-------|
//! | 1. Datos generales | [`Planeacion`], [`Creditos`], [`HorasSemestre`] |
//! | 2. Relaciones y ejes | [`Ejes`] |
//! | 3. Organización didáctica | [`UnidadTematica`], [`Bloque`] |
//! | 4. Referencias | [`Referencia`] |
//! | 5. Plagio | [`Plagio`] |

mod bloque;
mod catalogo;
mod planeacion;
mod referencia;
mod unidad;
mod wire;

pub use bloque::{lista_a_texto, texto_a_lista, Actividades, Bloque};
pub use catalogo::UnidadAcademica;
pub use planeacion::{
    AreaFormacion, Creditos, Ejes, HorasSemestre, Modalidad, Organizacion, Plagio, Planeacion,
    SeccionesCompletas, SesionesDetalle, Status,
};
pub use referencia::{Referencia, TipoReferencia};
pub use unidad::{
    DesglosePorEspacio, HorasUnidad, PeriodoDesarrollo, SesionesUnidad, UnidadTematica,
};
pub use wire::{
    ActividadesDetalle, BloqueDetalle, CargaGuardado, DetallePublico, ReferenciaDetalle,
    UnidadCarga, UnidadDetalle,
};
