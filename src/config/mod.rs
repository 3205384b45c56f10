//! Configuración del proyecto
//! 
//! Este módulo contiene la configuración del servidor y del destino de los leads.

pub mod environment;

pub use environment::*;
