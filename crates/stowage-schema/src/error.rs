use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Route-aware error aggregation. Validation never stops at the first problem:
/// every message is recorded under the route (class, then property) that
/// produced it, and the whole tree is reported at once.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: BTreeMap<String, Self>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    /// Build a tree holding a single message at the root.
    #[must_use]
    pub fn from_message(message: impl ToString) -> Self {
        let mut tree = Self::new();
        tree.add(message);

        tree
    }

    pub fn add(&mut self, message: impl ToString) {
        self.messages.push(message.to_string());
    }

    pub fn add_result(&mut self, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(message);
        }
    }

    /// Mutable access to the subtree at `route`, creating it on demand.
    pub fn child(&mut self, route: impl Into<String>) -> &mut Self {
        self.children.entry(route.into()).or_default()
    }

    /// Graft `other` under `route`, skipping empty trees.
    pub fn merge(&mut self, route: impl Into<String>, other: Self) {
        if other.is_empty() {
            return;
        }

        self.child(route).append(other);
    }

    /// Fold `other` into this tree at the same level.
    pub fn append(&mut self, other: Self) {
        self.messages.extend(other.messages);
        for (key, subtree) in other.children {
            self.merge(key, subtree);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of messages in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Flatten into `(route, message)` pairs; routes are joined with `.`.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);

        out
    }

    fn flatten_into(&self, prefix: &str, out: &mut Vec<(String, String)>) {
        for message in &self.messages {
            out.push((prefix.to_string(), message.clone()));
        }
        for (key, child) in &self.children {
            let route = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            child.flatten_into(&route, out);
        }
    }

    /// All messages, without routes.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.flatten().into_iter().map(|(_, message)| message).collect()
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (route, message)) in self.flatten().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if route.is_empty() {
                write!(f, "{message}")?;
            } else {
                write!(f, "{route}: {message}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

/// Append a formatted message to an `ErrorTree`.
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// TESTS
///
