//! External service clients and the assistant wrapper.

pub mod assistant;
pub mod gemini;
pub mod whatsapp;
