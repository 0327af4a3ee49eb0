use std::ops::ControlFlow;

use serde_json::{Number, Value};

use crate::{
    check::minimum::Minimum,
    document::{
        model::{Feature, Node},
        path::NodePath,
    },
    foundation::error::CheckResult,
};

/// Result of walking a whole document.
#[derive(Clone, Debug)]
pub enum Outcome<'a> {
    /// Every feature met the minimum.
    Pass,
    /// The first feature, in document order, whose count is below the minimum.
    Violation(Violation<'a>),
}

impl<'a> Outcome<'a> {
    /// `true` when no feature fell below the minimum.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// The reported violation, if any.
    pub fn violation(&self) -> Option<&Violation<'a>> {
        match self {
            Self::Pass => None,
            Self::Violation(v) => Some(v),
        }
    }
}

/// A feature whose count is below the minimum.
#[derive(Clone, Debug)]
pub struct Violation<'a> {
    /// Where the feature sits in the document.
    pub path: NodePath,
    /// The feature's `properties.count`.
    pub count: &'a Number,
    /// The feature node itself.
    pub feature: &'a Value,
}

/// Walk `document` depth-first and stop at the first feature whose count is
/// below `minimum`.
///
/// Collection children are visited in array order. Nothing after the first
/// violation is examined, so a structural problem later in the document does
/// not mask it.
#[tracing::instrument(skip(document, minimum), fields(minimum = %minimum))]
pub fn check_document<'a>(document: &'a Value, minimum: &Minimum) -> CheckResult<Outcome<'a>> {
    let mut path = NodePath::root();
    let outcome = match visit(document, minimum, &mut path)? {
        ControlFlow::Continue(()) => Outcome::Pass,
        ControlFlow::Break(v) => Outcome::Violation(v),
    };
    Ok(outcome)
}

fn visit<'a>(
    node: &'a Value,
    minimum: &Minimum,
    path: &mut NodePath,
) -> CheckResult<ControlFlow<Violation<'a>>> {
    match Node::classify(node, path)? {
        Node::Collection(children) => {
            tracing::debug!(%path, depth = path.depth(), children = children.len(), "collection");
            for (i, child) in children.iter().enumerate() {
                path.push_feature(i);
                let flow = visit(child, minimum, path)?;
                path.pop_feature();
                if flow.is_break() {
                    return Ok(flow);
                }
            }
            Ok(ControlFlow::Continue(()))
        }
        Node::Feature(feature) => Ok(check_feature(feature, minimum, path)),
        Node::Unrecognized => {
            tracing::trace!(%path, "skipping unrecognized node");
            Ok(ControlFlow::Continue(()))
        }
    }
}

fn check_feature<'a>(
    feature: Feature<'a>,
    minimum: &Minimum,
    path: &NodePath,
) -> ControlFlow<Violation<'a>> {
    let Some(count) = feature.count() else {
        tracing::debug!(%path, "feature has no count");
        return ControlFlow::Continue(());
    };

    if minimum.admits(count) {
        tracing::debug!(%path, %count, "feature ok");
        return ControlFlow::Continue(());
    }

    tracing::debug!(%path, %count, "feature below minimum");
    ControlFlow::Break(Violation {
        path: path.clone(),
        count,
        feature: feature.raw(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/check/walker.rs"]
mod tests;
