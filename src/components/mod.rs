//! UI components.

pub mod particle_banner;
