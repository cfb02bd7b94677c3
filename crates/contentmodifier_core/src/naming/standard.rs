//! Standard renderer candidate names.

use super::{NamingError, NamingStrategy};
use crate::model::candidate::{CandidateClassName, NAMESPACE_SEPARATOR};

/// Host framework's standard renderer naming scheme.
///
/// Without a subtype the order is: theme-prefixed autoloaded name,
/// component-namespaced autoloaded name, legacy name. With a subtype the two
/// theme-prefixed forms come first, then the two component-namespaced forms,
/// then the legacy name.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNaming;

impl StandardNaming {
    pub fn new() -> Self {
        Self
    }
}

impl NamingStrategy for StandardNaming {
    fn candidate_names(
        &self,
        component: &str,
        subtype: Option<&str>,
    ) -> Result<Vec<CandidateClassName>, NamingError> {
        let component = normalize_component(component)?;
        let sep = NAMESPACE_SEPARATOR;
        let subtype = subtype.map(str::trim).filter(|value| !value.is_empty());

        let forms: Vec<(String, bool, bool, bool)> = match subtype {
            None => vec![
                (format!("{sep}output{sep}{component}_renderer"), true, true, false),
                (format!("{sep}{component}{sep}output{sep}renderer"), true, false, true),
                (format!("{component}_renderer"), false, true, true),
            ],
            Some(subtype) => vec![
                (
                    format!("{sep}output{sep}{component}{sep}{subtype}_renderer"),
                    true,
                    true,
                    false,
                ),
                (
                    format!("{sep}output{sep}{component}{sep}{subtype}{sep}renderer"),
                    true,
                    true,
                    false,
                ),
                (
                    format!("{sep}{component}{sep}output{sep}{subtype}_renderer"),
                    true,
                    false,
                    true,
                ),
                (
                    format!("{sep}{component}{sep}output{sep}{subtype}{sep}renderer"),
                    true,
                    false,
                    true,
                ),
                (format!("{component}_{subtype}_renderer"), false, true, true),
            ],
        };

        forms
            .into_iter()
            .map(|(template, autoloaded, with_prefix, without_prefix)| {
                CandidateClassName::new(template, autoloaded, with_prefix, without_prefix)
                    .map_err(|err| NamingError::InvalidComponent(err.to_string()))
            })
            .collect()
    }
}

fn normalize_component(component: &str) -> Result<&str, NamingError> {
    let trimmed = component.trim();
    if trimmed.is_empty() {
        return Err(NamingError::EmptyComponent);
    }
    if trimmed.contains(NAMESPACE_SEPARATOR) || trimmed.contains(char::is_whitespace) {
        return Err(NamingError::InvalidComponent(trimmed.to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::StandardNaming;
    use crate::naming::{NamingError, NamingStrategy};

    #[test]
    fn core_component_without_subtype() {
        let names = StandardNaming::new()
            .candidate_names("core", None)
            .expect("core candidates");
        let templates: Vec<&str> = names.iter().map(|c| c.name_template.as_str()).collect();
        assert_eq!(
            templates,
            vec![
                "\\output\\core_renderer",
                "\\core\\output\\renderer",
                "core_renderer",
            ]
        );
        assert!(!names[2].autoloaded);
        assert!(names[0].valid_with_prefix && !names[0].valid_without_prefix);
        assert!(!names[1].valid_with_prefix && names[1].valid_without_prefix);
    }

    #[test]
    fn component_with_subtype_yields_five_candidates() {
        let names = StandardNaming::new()
            .candidate_names("mod_forum", Some("news"))
            .expect("subtype candidates");
        assert_eq!(names.len(), 5);
        assert_eq!(names[0].name_template, "\\output\\mod_forum\\news_renderer");
        assert_eq!(names[3].name_template, "\\mod_forum\\output\\news\\renderer");
        assert_eq!(names[4].name_template, "mod_forum_news_renderer");
    }

    #[test]
    fn blank_subtype_is_treated_as_absent() {
        let naming = StandardNaming::new();
        assert_eq!(
            naming.candidate_names("core", Some("  ")).unwrap(),
            naming.candidate_names("core", None).unwrap()
        );
    }

    #[test]
    fn rejects_empty_component() {
        let err = StandardNaming::new()
            .candidate_names("   ", None)
            .expect_err("empty component must fail");
        assert_eq!(err, NamingError::EmptyComponent);
    }
}
