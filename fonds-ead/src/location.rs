//! Location expressions name where a field value lives in a finding aid.
//!
//! An expression is an XPath-like absolute path of element-name steps with
//! optional attribute predicates, e.g.
//!
//! ```text
//! /ead/archdesc/did/unittitle
//! /ead/archdesc/did/unitdate[@datechar='created']
//! /ead/eadheader/eadid/@url
//! ```
//!
//! The grammar is intentionally closed: element steps descend, an
//! `[@name='value']` predicate constrains the element it follows, and a
//! trailing `/@name` addresses an attribute. Anything else is rejected at
//! parse time, so malformed schema configuration fails before any
//! document is touched.

use std::fmt;

use crate::error::{EadError, Result};

/// One step of a location expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Descend into a child element of this name.
    Element(String),
    /// Constrain the current element by attribute. Predicates are matched
    /// during resolution, never created during growth.
    Attribute {
        name: String,
        /// `None` for presence-only tests (`[@id]`, trailing `/@id`).
        value: Option<String>,
    },
}

/// A parsed location expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    raw: String,
    steps: Vec<Step>,
}

impl Location {
    /// Parse an expression, rejecting malformed input.
    pub fn parse(expr: &str) -> Result<Self> {
        let raw = expr.trim();
        if raw.is_empty() {
            return Err(EadError::invalid_location(expr, "empty expression"));
        }
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(EadError::invalid_location(expr, "must start with '/'"));
        };

        let segments = split_segments(rest, expr)?;
        let mut steps = Vec::new();
        let last = segments.len() - 1;
        for (i, segment) in segments.iter().enumerate() {
            parse_segment(segment, i == last, expr, &mut steps)?;
        }

        if !matches!(steps.first(), Some(Step::Element(_))) {
            return Err(EadError::invalid_location(
                expr,
                "must begin with an element step",
            ));
        }

        Ok(Self {
            raw: raw.to_string(),
            steps,
        })
    }

    /// The parsed steps, leading element step first.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The expression as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split on `/` outside predicate brackets.
fn split_segments<'a>(path: &'a str, expr: &str) -> Result<Vec<&'a str>> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in path.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    EadError::invalid_location(expr, "unmatched ']' in predicate")
                })?;
            }
            '/' if depth == 0 => {
                segments.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(EadError::invalid_location(expr, "unterminated predicate"));
    }
    segments.push(&path[start..]);

    for segment in &segments {
        if segment.is_empty() {
            return Err(EadError::invalid_location(expr, "empty step"));
        }
    }
    Ok(segments)
}

fn parse_segment(segment: &str, is_last: bool, expr: &str, steps: &mut Vec<Step>) -> Result<()> {
    // Trailing attribute form: /@name
    if let Some(name) = segment.strip_prefix('@') {
        if !is_last {
            return Err(EadError::invalid_location(
                expr,
                "attribute step must be the final step",
            ));
        }
        if name.is_empty() || name.contains('[') {
            return Err(EadError::invalid_location(expr, "malformed attribute step"));
        }
        steps.push(Step::Attribute {
            name: name.to_string(),
            value: None,
        });
        return Ok(());
    }

    let (name, mut rest) = match segment.find('[') {
        Some(pos) => (&segment[..pos], &segment[pos..]),
        None => (segment, ""),
    };
    if name.is_empty() {
        return Err(EadError::invalid_location(expr, "empty step name"));
    }
    steps.push(Step::Element(name.to_string()));

    while !rest.is_empty() {
        let Some(body) = rest.strip_prefix("[@") else {
            return Err(EadError::invalid_location(
                expr,
                "predicate must test an attribute",
            ));
        };
        let end = find_predicate_end(body)
            .ok_or_else(|| EadError::invalid_location(expr, "unterminated predicate"))?;
        steps.push(parse_predicate(&body[..end], expr)?);
        rest = &body[end + 1..];
    }
    Ok(())
}

/// Index of the closing `]`, skipping quoted values.
fn find_predicate_end(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in s.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => quote = Some(c),
                ']' => return Some(i),
                _ => {}
            },
        }
    }
    None
}

/// Parse the body of `[@...]` with the `@` already consumed.
fn parse_predicate(body: &str, expr: &str) -> Result<Step> {
    let (name, value) = match body.find('=') {
        None => (body, None),
        Some(eq) => {
            let value = unquote(&body[eq + 1..]).ok_or_else(|| {
                EadError::invalid_location(expr, "attribute value must be quoted")
            })?;
            (&body[..eq], Some(value.to_string()))
        }
    };
    if name.is_empty() {
        return Err(EadError::invalid_location(expr, "empty attribute name"));
    }
    Ok(Step::Attribute {
        name: name.to_string(),
        value,
    })
}

fn unquote(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    let first = chars.next()?;
    if (first == '\'' || first == '"') && s.len() >= 2 && s.ends_with(first) {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_element_path() {
        let loc = Location::parse("/ead/archdesc/did/unittitle").unwrap();
        assert_eq!(
            loc.steps(),
            [
                Step::Element("ead".into()),
                Step::Element("archdesc".into()),
                Step::Element("did".into()),
                Step::Element("unittitle".into()),
            ]
        );
        assert_eq!(loc.to_string(), "/ead/archdesc/did/unittitle");
    }

    #[test]
    fn predicate_becomes_attribute_step() {
        let loc = Location::parse("/ead/archdesc/did/unitdate[@datechar='created']").unwrap();
        assert_eq!(
            loc.steps().last(),
            Some(&Step::Attribute {
                name: "datechar".into(),
                value: Some("created".into()),
            })
        );
        assert_eq!(loc.steps().len(), 5);
    }

    #[test]
    fn presence_only_predicate() {
        let loc = Location::parse("/ead/archdesc[@level]").unwrap();
        assert_eq!(
            loc.steps().last(),
            Some(&Step::Attribute {
                name: "level".into(),
                value: None,
            })
        );
    }

    #[test]
    fn trailing_attribute_step() {
        let loc = Location::parse("/ead/eadheader/eadid/@url").unwrap();
        assert_eq!(
            loc.steps().last(),
            Some(&Step::Attribute {
                name: "url".into(),
                value: None,
            })
        );
    }

    #[test]
    fn double_quoted_value() {
        let loc = Location::parse(r#"/ead/archdesc[@level="collection"]"#).unwrap();
        assert_eq!(
            loc.steps().last(),
            Some(&Step::Attribute {
                name: "level".into(),
                value: Some("collection".into()),
            })
        );
    }

    #[test]
    fn stacked_predicates_on_one_element() {
        let loc = Location::parse("/ead/unitdate[@datechar='created'][@normal]").unwrap();
        assert_eq!(loc.steps().len(), 4);
    }

    #[test]
    fn empty_expression_rejected() {
        assert!(Location::parse("").is_err());
        assert!(Location::parse("   ").is_err());
    }

    #[test]
    fn relative_path_rejected() {
        let err = Location::parse("ead/eadheader").unwrap_err();
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn leading_attribute_step_rejected() {
        let err = Location::parse("/@id").unwrap_err();
        assert!(err.to_string().contains("must begin with an element step"));
    }

    #[test]
    fn mid_path_attribute_step_rejected() {
        let err = Location::parse("/ead/@id/eadheader").unwrap_err();
        assert!(err.to_string().contains("final step"));
    }

    #[test]
    fn empty_step_rejected() {
        assert!(Location::parse("/ead//eadheader").is_err());
        assert!(Location::parse("/ead/").is_err());
    }

    #[test]
    fn unterminated_predicate_rejected() {
        assert!(Location::parse("/ead/unitdate[@datechar='created'").is_err());
        assert!(Location::parse("/ead/unitdate[@datechar=created]").is_err());
    }

    #[test]
    fn non_attribute_predicate_rejected() {
        assert!(Location::parse("/ead/unitdate[position()=1]").is_err());
    }
}
