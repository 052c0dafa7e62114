//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Typed field paths for diagnostics            |
//! | `status` | Field status validation                      |

mod error;
mod field;
mod status;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use status::{FieldStatus, check_field_status, check_section_status};
