//! Input adapters for the movie renderer.
//!
//! This module contains adapters that receive input from the command line
//! and translate it into domain requests.

pub mod cli;
