use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Schema-authoring issues keyed by route (`Class` or `Class.attribute`).
/// An empty route holds catalog-wide issues.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    messages: BTreeMap<String, Vec<String>>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: BTreeMap::new(),
        }
    }

    /// Record a catalog-wide issue.
    pub fn add(&mut self, message: impl fmt::Display) {
        self.add_route("", message);
    }

    pub fn add_route(&mut self, route: impl Into<String>, message: impl fmt::Display) {
        self.messages
            .entry(route.into())
            .or_default()
            .push(message.to_string());
    }

    /// Merge another tree, prefixing its routes with `route`.
    pub fn merge(&mut self, route: &str, other: Self) {
        for (sub, messages) in other.messages {
            let key = match (route.is_empty(), sub.is_empty()) {
                (true, _) => sub,
                (false, true) => route.to_string(),
                (false, false) => format!("{route}.{sub}"),
            };
            self.messages.entry(key).or_default().extend(messages);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Total number of messages across all routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn get(&self, route: &str) -> Option<&[String]> {
        self.messages.get(route).map(Vec::as_slice)
    }

    pub fn routes(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (route, messages) in &self.messages {
            for message in messages {
                if route.is_empty() {
                    writeln!(f, "  {message}")?;
                } else {
                    writeln!(f, "  {route}: {message}")?;
                }
            }
        }

        Ok(())
    }
}

/// Push a formatted message onto an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}
