//! Validation report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// A single validation error
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// What failed (message or missing file).
    pub target: String,
    /// Extra detail (hint, tried candidates). May be empty.
    pub reason: String,
}

/// Unified validation report for all error types
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Descriptor errors, grouped by field path.
    pub descriptor: BTreeMap<String, Vec<ValidationError>>,
    /// Unresolved routes, grouped by the nav entry or sidebar item path
    /// that references them.
    pub routes: BTreeMap<String, Vec<ValidationError>>,
}

impl ValidationReport {
    /// Add a descriptor error.
    pub fn add_descriptor(&mut self, field: String, message: String, hint: String) {
        self.descriptor
            .entry(field)
            .or_default()
            .push(ValidationError {
                target: message,
                reason: hint,
            });
    }

    /// Add an unresolved route under its referencing origin.
    pub fn add_route(&mut self, origin: String, route: String, tried: String) {
        self.routes.entry(origin).or_default().push(ValidationError {
            target: route,
            reason: tried,
        });
    }

    /// Total descriptor error count.
    pub fn descriptor_error_count(&self) -> usize {
        self.descriptor.values().map(|v| v.len()).sum()
    }

    /// Total unresolved route count.
    pub fn route_error_count(&self) -> usize {
        self.routes.values().map(|v| v.len()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.descriptor_error_count() + self.route_error_count()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptor.is_empty() && self.routes.is_empty()
    }

    /// Print the full report to stderr (descriptor -> routes).
    pub fn print(&self) {
        self.print_section("descriptor", &self.descriptor);
        self.print_section("routes", &self.routes);
    }

    /// Print section with format (target + reason for non-empty reason).
    fn print_section(&self, name: &str, errors: &BTreeMap<String, Vec<ValidationError>>) {
        if errors.is_empty() {
            return;
        }
        eprintln!();

        let error_count: usize = errors.values().map(|v| v.len()).sum();

        // Section header
        eprintln!(
            "{} {}",
            name.red().bold(),
            format!("({error_count} error{})", plural_s(error_count)).dimmed()
        );

        for (path, errs) in errors {
            eprintln!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
            for e in errs {
                if e.reason.is_empty() {
                    eprintln!("{} {}", "→".red(), e.target);
                } else {
                    eprintln!("{} {} {}", "→".red(), e.target, e.reason.dimmed());
                }
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();

        if total == 0 {
            write!(f, "{}", "all checks passed".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("error{}", plural_s(total)).dimmed()
            )
        }
    }
}
