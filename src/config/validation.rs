//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route declarations are dispatchable (non-empty name,
//!   controller and action)
//! - Check URL patterns are absolute with well-formed placeholders
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: KernelConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::KernelConfig;

/// One semantic violation in a route declaration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("route at position {0} has an empty name")]
    EmptyName(usize),

    #[error("route {name:?} has a URL pattern not starting with '/': {url:?}")]
    PatternNotAbsolute { name: String, url: String },

    #[error("route {name:?} has a malformed placeholder in {url:?}")]
    MalformedPlaceholder { name: String, url: String },

    #[error("route {name:?} declares a non-uppercase method {method:?}")]
    MethodNotUppercase { name: String, method: String },

    #[error("route {name:?} has an empty controller reference")]
    EmptyController { name: String },

    #[error("route {name:?} has an empty action reference")]
    EmptyAction { name: String },
}

/// Validate a parsed configuration, collecting every violation.
pub fn validate_config(config: &KernelConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let routes = config.routes.as_deref().unwrap_or(&[]);

    for (index, route) in routes.iter().enumerate() {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyName(index));
        }
        if !route.url.starts_with('/') {
            errors.push(ValidationError::PatternNotAbsolute {
                name: route.name.clone(),
                url: route.url.clone(),
            });
        }
        if !placeholders_well_formed(&route.url) {
            errors.push(ValidationError::MalformedPlaceholder {
                name: route.name.clone(),
                url: route.url.clone(),
            });
        }
        for method in route.methods.iter().flatten() {
            if method.is_empty() || method.chars().any(|c| c.is_ascii_lowercase()) {
                errors.push(ValidationError::MethodNotUppercase {
                    name: route.name.clone(),
                    method: method.clone(),
                });
            }
        }
        if route.controller.is_empty() {
            errors.push(ValidationError::EmptyController {
                name: route.name.clone(),
            });
        }
        if route.action.is_empty() {
            errors.push(ValidationError::EmptyAction {
                name: route.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A segment either contains no braces, or is exactly `{name}` with a
/// non-empty name.
fn placeholders_well_formed(url: &str) -> bool {
    url.split('/').all(|segment| {
        let opens = segment.matches('{').count();
        let closes = segment.matches('}').count();
        match (opens, closes) {
            (0, 0) => true,
            (1, 1) => segment.starts_with('{') && segment.ends_with('}') && segment.len() > 2,
            _ => false,
        }
    })
}
