use crate::tree::DecisionTree;
use std::fmt;

const INDENT: &str = "  ";

impl DecisionTree {
    /// Text shown for the node itself: the class of a leaf or the attribute of a split.
    pub fn display_string(&self) -> &str {
        match self {
            DecisionTree::Leaf(class) => class.as_str(),
            DecisionTree::Split { attribute, .. } => attribute.as_str(),
        }
    }

    fn fmt_children(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        if let DecisionTree::Split { children, .. } = self {
            for (value, child) in children {
                writeln!(
                    f,
                    "{}{}: {}",
                    INDENT.repeat(depth),
                    value,
                    child.display_string()
                )?;
                child.fmt_children(f, depth + 1)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.display_string())?;
        self.fmt_children(f, 1)
    }
}
