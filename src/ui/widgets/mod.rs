//! Reusable UI widget components.
//!
//! This module contains styling utilities shared by the view renderers.

pub mod styling;
