use std::fmt;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const INDENT: &str = "│   ";
const LAST_INDENT: &str = "    ";

/// Generic text tree with box-drawing connectors
///
/// ```text
/// root
/// ├── a
/// │   └── b
/// └── c
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTree {
    value: String,
    children: Vec<TextTree>,
}

impl TextTree {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn children(&self) -> &[TextTree] {
        &self.children
    }

    /// Append a leaf line
    pub fn add_node(&mut self, value: impl Into<String>) {
        self.children.push(TextTree::new(value));
    }

    /// Append a child and return it so it can be filled in
    pub fn add_branch(&mut self, value: impl Into<String>) -> &mut TextTree {
        self.children.push(TextTree::new(value));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    fn write_children(&self, f: &mut fmt::Formatter<'_>, prefix: &str) -> fmt::Result {
        let last = self.children.len().saturating_sub(1);
        for (i, child) in self.children.iter().enumerate() {
            let (connector, indent) = if i == last {
                (LAST_BRANCH, LAST_INDENT)
            } else {
                (BRANCH, INDENT)
            };
            writeln!(f, "{}{}{}", prefix, connector, child.value)?;
            child.write_children(f, &format!("{}{}", prefix, indent))?;
        }
        Ok(())
    }
}

impl fmt::Display for TextTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.value)?;
        self.write_children(f, "")
    }
}
