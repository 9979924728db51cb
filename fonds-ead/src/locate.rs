//! Resolution and growth of location expressions against a document.
//!
//! Both walks descend one element step at a time. When an element step is
//! followed by attribute predicates, the child satisfying name and
//! predicates is preferred; that is how two siblings distinguished only by
//! an attribute (`unitdate[@datechar='inclusive']` next to
//! `unitdate[@datechar='bulk']`) are told apart. Resolution is strict;
//! growth falls back to the first name match so a failing predicate stalls
//! on it instead of erroring.
//!
//! Growth ([`ensure`]) makes the primary write path possible on sparse
//! documents: an element step with no matching child appends a new empty
//! element as the last child. Attribute steps are never synthesized. When
//! one fails to match, growth stops and the deepest element reached is
//! returned, so the caller writes there. Growth is idempotent: re-running an
//! expression finds the nodes the previous run created and adds nothing.

use tracing::debug;

use crate::error::{EadError, Result};
use crate::location::{Location, Step};
use crate::tree::{Document, Element};

/// Walk a location expression read-only. Returns the deepest element only if
/// every step, predicates included, resolves.
pub fn resolve<'a>(root: &'a Element, location: &Location) -> Option<&'a Element> {
    let steps = location.steps();
    match steps.first() {
        Some(Step::Element(name)) if *name == root.name => {}
        _ => return None,
    }

    let mut cur = root;
    for (offset, step) in steps.iter().enumerate().skip(1) {
        match step {
            Step::Element(name) => {
                let window = predicate_window(&steps[offset + 1..]);
                cur = cur
                    .children
                    .iter()
                    .find(|c| c.name == *name && preds_match(c, window))?;
            }
            Step::Attribute { name, value } => {
                if !attr_matches(cur, name, value.as_deref()) {
                    return None;
                }
            }
        }
    }
    Some(cur)
}

/// Walk a location expression, growing missing element steps.
///
/// The first step anchors at the root: a mismatch is an invalid location,
/// not a search. Every later element step descends into the child matching
/// name and trailing predicates, then into the first child of that name,
/// finally creating one as the last child when none exists. An attribute
/// step that does not match the current element stops growth; the element
/// reached so far is returned and receives the value.
pub fn ensure<'a>(root: &'a mut Element, location: &Location) -> Result<&'a mut Element> {
    let steps = location.steps();
    match steps.first() {
        Some(Step::Element(name)) if *name == root.name => {}
        Some(Step::Element(name)) => {
            return Err(EadError::invalid_location(
                location.as_str(),
                format!("anchored at '{}' but document root is '{}'", name, root.name),
            ));
        }
        _ => {
            return Err(EadError::invalid_location(
                location.as_str(),
                "must begin with an element step",
            ));
        }
    }

    let mut cur = root;
    let mut created = 0usize;
    for (offset, step) in steps.iter().enumerate().skip(1) {
        match step {
            Step::Element(name) => {
                let window = predicate_window(&steps[offset + 1..]);
                let preferred = cur
                    .children
                    .iter()
                    .position(|c| c.name == *name && preds_match(c, window));
                let idx = match preferred
                    .or_else(|| cur.children.iter().position(|c| c.name == *name))
                {
                    Some(i) => i,
                    None => {
                        cur.children.push(Element::new(name.clone()));
                        created += 1;
                        cur.children.len() - 1
                    }
                };
                cur = &mut cur.children[idx];
            }
            Step::Attribute { name, value } => {
                if !attr_matches(cur, name, value.as_deref()) {
                    break;
                }
            }
        }
    }

    if created > 0 {
        debug!(location = %location, created, "grew finding aid path");
    }
    Ok(cur)
}

/// The run of attribute steps immediately following an element step.
fn predicate_window(rest: &[Step]) -> &[Step] {
    let end = rest
        .iter()
        .take_while(|s| matches!(s, Step::Attribute { .. }))
        .count();
    &rest[..end]
}

fn preds_match(el: &Element, window: &[Step]) -> bool {
    window.iter().all(|step| match step {
        Step::Attribute { name, value } => attr_matches(el, name, value.as_deref()),
        Step::Element(_) => true,
    })
}

fn attr_matches(el: &Element, name: &str, value: Option<&str>) -> bool {
    match (el.attr(name), value) {
        (Some(have), Some(want)) => have == want,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

impl Document {
    /// Resolve a location read-only against this document.
    pub fn resolve(&self, location: &Location) -> Option<&Element> {
        resolve(&self.root, location)
    }

    /// Resolve a location, growing missing element steps. See [`ensure`].
    pub fn ensure(&mut self, location: &Location) -> Result<&mut Element> {
        ensure(&mut self.root, location)
    }
}
