//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos del inventario y del flujo
//! de cotización.

pub mod contact;
pub mod lead;
pub mod quote;
pub mod vehicle;
