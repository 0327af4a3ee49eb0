use std::fmt;

/// One step of a [`NodePath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathElem {
    /// Object member.
    Field(&'static str),
    /// Array position.
    Index(usize),
}

/// Location of a node inside the parsed document, rendered as `$.features[0].features[3]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodePath {
    elems: Vec<PathElem>,
}

impl NodePath {
    /// The document root, `$`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Steps from the root, outermost first.
    pub fn elems(&self) -> &[PathElem] {
        &self.elems
    }

    /// Number of collections entered to reach this node.
    pub fn depth(&self) -> usize {
        self.elems
            .iter()
            .filter(|e| matches!(e, PathElem::Index(_)))
            .count()
    }

    /// Step into `features[index]` of the current collection.
    pub fn push_feature(&mut self, index: usize) {
        self.elems.push(PathElem::Field("features"));
        self.elems.push(PathElem::Index(index));
    }

    /// Undo the matching [`NodePath::push_feature`].
    pub fn pop_feature(&mut self) {
        self.elems.pop();
        self.elems.pop();
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for elem in &self.elems {
            match *elem {
                PathElem::Field(name) => write!(f, ".{name}")?,
                PathElem::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}
