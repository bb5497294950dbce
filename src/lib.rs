//! Resx - string-resource extraction for Compose Multiplatform
//!
//! Resx is a CLI tool and library that extracts a hardcoded string literal
//! from a Kotlin source file into a `strings.xml` resource file, replaces the
//! literal with a `stringResource(Res.string.<key>)` reference, inserts the
//! needed imports, and triggers the Gradle task that regenerates resource
//! accessors.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `scanner`: Lexical string-literal scanning and interpolation splitting
//! - `keygen`: Resource key suggestion from display text
//! - `resources`: Resource-file index and sorted writer
//! - `imports`: Ordered import insertion planning
//! - `host`: Editor/dialog/build collaborator boundaries
//! - `extract`: End-to-end extraction orchestration
//! - `report`: User-facing output formatting

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod host;
pub mod imports;
pub mod keygen;
pub mod report;
pub mod resources;
pub mod scanner;
