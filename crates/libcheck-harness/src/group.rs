//! Test groups and the group registry.
//!
//! A [`TestGroup`] is a named, ordered list of cases sharing one fixture type.
//! Setup builds a fresh fixture before every case and teardown runs after the
//! body returns, so no state leaks between cases.

use crate::assert::CaseResult;

/// Body of a single test case.
pub type CaseFn<F> = fn(&mut F) -> CaseResult;

/// A named case within a group.
pub struct TestCase<F> {
    pub name: &'static str,
    pub body: CaseFn<F>,
}

/// A named collection of cases over fixture type `F`.
pub struct TestGroup<F> {
    name: String,
    setup: Box<dyn Fn() -> F>,
    teardown: Box<dyn Fn(&mut F)>,
    cases: Vec<TestCase<F>>,
}

impl<F> TestGroup<F> {
    /// Create an empty group whose fixture is built by `setup`.
    #[must_use]
    pub fn new(name: impl Into<String>, setup: impl Fn() -> F + 'static) -> Self {
        Self {
            name: name.into(),
            setup: Box::new(setup),
            teardown: Box::new(|_| {}),
            cases: Vec::new(),
        }
    }

    /// Replace the (empty) default teardown.
    #[must_use]
    pub fn with_teardown(mut self, teardown: impl Fn(&mut F) + 'static) -> Self {
        self.teardown = Box::new(teardown);
        self
    }

    /// Append a case. Cases run in registration order.
    #[must_use]
    pub fn case(mut self, name: &'static str, body: CaseFn<F>) -> Self {
        self.cases.push(TestCase { name, body });
        self
    }
}

/// Object-safe view of a group, independent of its fixture type.
pub trait Group {
    /// Group name.
    fn name(&self) -> &str;

    /// Case names in registration order.
    fn case_names(&self) -> Vec<&'static str>;

    /// Run case `index`: setup, body, teardown.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range, or if the case body panics.
    fn run_case(&self, index: usize) -> CaseResult;
}

impl<F> Group for TestGroup<F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn case_names(&self) -> Vec<&'static str> {
        self.cases.iter().map(|c| c.name).collect()
    }

    fn run_case(&self, index: usize) -> CaseResult {
        let case = &self.cases[index];
        let mut fixture = (self.setup)();
        let result = (case.body)(&mut fixture);
        (self.teardown)(&mut fixture);
        result
    }
}

/// All registered groups, in registration order.
#[derive(Default)]
pub struct Registry {
    groups: Vec<Box<dyn Group>>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group.
    pub fn register(&mut self, group: impl Group + 'static) -> &mut Self {
        self.groups.push(Box::new(group));
        self
    }

    /// Iterate over registered groups.
    pub fn groups(&self) -> impl Iterator<Item = &dyn Group> {
        self.groups.iter().map(|g| g.as_ref())
    }

    /// Look up a group by exact name.
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&dyn Group> {
        self.groups().find(|g| g.name() == name)
    }

    /// Total number of registered cases across all groups.
    #[must_use]
    pub fn case_count(&self) -> usize {
        self.groups.iter().map(|g| g.case_names().len()).sum()
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no group is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
