//! JVM startup options assembly
//!
//! `JavaOpts` is the append-only option sequence threaded through the release
//! phase. Frameworks only ever add entries; the type deliberately exposes no
//! way to remove or reorder what another component contributed.

use std::fmt::Display;
use std::path::Path;

/// Ordered, append-only JVM option strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavaOpts {
    opts: Vec<String>,
}

impl JavaOpts {
    /// Create an empty options list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw option string
    pub fn push(&mut self, opt: impl Into<String>) {
        self.opts.push(opt.into());
    }

    /// Append a `-javaagent:` option pointing at the given agent jar
    pub fn add_javaagent(&mut self, agent_jar: &Path) {
        self.opts.push(format!("-javaagent:{}", agent_jar.display()));
    }

    /// Append a `-D<key>=<value>` system property option
    pub fn add_system_property(&mut self, key: &str, value: impl Display) {
        self.opts.push(format!("-D{key}={value}"));
    }

    /// View the accumulated options in append order
    pub fn as_slice(&self) -> &[String] {
        &self.opts
    }

    /// Iterate the accumulated options in append order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.opts.iter()
    }

    /// Number of accumulated options
    pub fn len(&self) -> usize {
        self.opts.len()
    }

    /// Whether no options have been accumulated
    pub fn is_empty(&self) -> bool {
        self.opts.is_empty()
    }
}

impl From<JavaOpts> for Vec<String> {
    fn from(opts: JavaOpts) -> Self {
        opts.opts
    }
}

impl<'a> IntoIterator for &'a JavaOpts {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.opts.iter()
    }
}
