//! Column type inference for tabular data
//!
//! This module classifies each column of a parsed table into the most specific
//! type that describes every non-missing value, then maps it onto the narrow
//! public vocabulary (`number`, `boolean`, `string`).
//!
//! ## Detection order
//!
//! Candidates are tried from most to least specific:
//!
//! 1. **boolean** - `true` / `false` (case-insensitive, configurable)
//! 2. **integer** - `[+-]?[0-9]+`
//! 3. **float** - decimal or exponential notation; integers also qualify
//! 4. **date** - `YYYY-MM-DD`
//! 5. **datetime** - `YYYY-MM-DD[T ]HH:MM:SS[.f][Z|±HH:MM]`
//! 6. **time** - `HH:MM:SS[.f]`
//! 7. **string** - everything else
//!
//! A column's type is the first candidate accepted by all of its non-missing
//! cells. Date-like types collapse to `string` in the public vocabulary.
//!
//! ## Example
//!
//! ```rust
//! use csv_schema_sdk::import::{CsvImporter, CsvOptions};
//! use csv_schema_sdk::inference::{OutputType, SchemaInferrer};
//!
//! let table = CsvImporter::new(CsvOptions::default())
//!     .parse("name,age\nAlice,30\nBob,25\n")
//!     .unwrap();
//! let schema = SchemaInferrer::new().infer(&table);
//!
//! assert_eq!(schema.fields[1].output_type, OutputType::Number);
//! ```

mod config;
mod detectors;
mod inferrer;
mod types;

pub use config::{InferenceConfig, InferenceConfigBuilder};
pub use detectors::{detect_type, is_date, is_datetime, is_float, is_integer, is_time};
pub use inferrer::{SchemaInferrer, infer_schema};
pub use types::{InferredField, OutputType, Schema, SchemaField, TypeCandidate};
