use std::fmt::Write as _;

use crate::domain::entities::{Inventory, Repository};
use crate::domain::value_objects::{AliasStyle, EnvVarName};

/// Renders an inventory as a shell file of shortcuts and exports
///
/// For every repository two lines are produced: a shortcut named after the
/// repository that jumps into it, lists it, shows the README and pulls, and
/// an `export` of the location under an upper-cased variable name. Names and
/// paths are inserted verbatim; nothing is shell-escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasEmitter {
    style: AliasStyle,
}

impl AliasEmitter {
    /// Create an emitter for the given shortcut syntax
    pub fn new(style: AliasStyle) -> Self {
        Self { style }
    }

    /// Render the whole inventory in name order
    pub fn render(&self, inventory: &Inventory) -> String {
        let mut content = String::new();
        for repo in inventory.iter() {
            self.render_repository(&mut content, repo);
        }
        content
    }

    fn render_repository(&self, out: &mut String, repo: &Repository) {
        let location = repo.location.display();
        let command = format!("cd {} && ls && cat README.md && git pull", location);
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", self.style.shortcut(&repo.name, &command));
        let _ = writeln!(
            out,
            "export {}=\"{}\"",
            EnvVarName::from_repo_name(&repo.name),
            location
        );
    }
}
