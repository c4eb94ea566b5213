//! Entity kinds that can be generated and destroyed.

use std::{fmt, str::FromStr};

/// A generatable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Component,
    Container,
    Module,
    Storybook,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Component,
        EntityKind::Container,
        EntityKind::Module,
        EntityKind::Storybook,
    ];

    /// Returns the kind identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Component => "component",
            EntityKind::Container => "container",
            EntityKind::Module => "module",
            EntityKind::Storybook => "storybook",
        }
    }

    /// Directory under the module that holds entities of this kind.
    pub fn dir_segment(&self) -> &'static str {
        match self {
            EntityKind::Component => "components",
            EntityKind::Container => "containers",
            EntityKind::Storybook => "components/stories",
            EntityKind::Module => "",
        }
    }

    /// Extension of generated files, without the dot.
    pub fn extension(&self) -> &'static str {
        "js"
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "component" => Ok(EntityKind::Component),
            "container" => Ok(EntityKind::Container),
            "module" => Ok(EntityKind::Module),
            "storybook" | "story" => Ok(EntityKind::Storybook),
            _ => Err(format!(
                "unknown type '{}', expected one of: component, container, module, storybook",
                s
            )),
        }
    }
}
