//! Persona registry.
//!
//! The fixed, ordered roster of interviewers. Panel order is question order.

use mockpanel_core::error::Result;
use mockpanel_core::persona::{Persona, validate_roster};

/// Immutable, validated panel roster.
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    personas: Vec<Persona>,
}

impl PersonaRegistry {
    /// Validates and wraps `personas`.
    pub fn new(personas: Vec<Persona>) -> Result<Self> {
        validate_roster(&personas)?;
        Ok(Self { personas })
    }

    /// All personas, in panel order.
    pub fn get_all(&self) -> &[Persona] {
        &self.personas
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    /// Always false: an empty roster is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Persona> {
        self.personas.get(index)
    }

    /// Persona at `index`, wrapping around the panel.
    pub fn at(&self, index: usize) -> &Persona {
        &self.personas[index % self.personas.len()]
    }

    pub fn first(&self) -> &Persona {
        self.at(0)
    }

    pub fn find(&self, id: u32) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id == id)
    }
}
