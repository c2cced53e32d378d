//! Ordered validation chains with early exit

use crate::core::error::Fault;
use serde_json::Value;

/// A single predicate over a submission.
///
/// Checks never mutate anything; they either accept the submission or
/// return the fault that aborts the operation.
pub type Check<T> = Box<dyn Fn(&Submission<'_, T>) -> Result<(), Fault> + Send + Sync>;

/// Box a closure as a [`Check`]
pub fn check<T, F>(predicate: F) -> Check<T>
where
    T: 'static,
    F: Fn(&Submission<'_, T>) -> Result<(), Fault> + Send + Sync + 'static,
{
    Box::new(predicate)
}

/// Everything a check may inspect: the request's `data` member, the route
/// id and the entity currently stored under that id.
pub struct Submission<'a, T> {
    data: Option<&'a Value>,
    route_id: Option<&'a str>,
    stored: Option<&'a T>,
}

impl<'a, T> Submission<'a, T> {
    /// A submission carrying only a payload (`None` when the body had no `data`)
    pub fn new(data: Option<&'a Value>) -> Self {
        Self {
            data,
            route_id: None,
            stored: None,
        }
    }

    /// Attach the id taken from the request path
    pub fn for_route(mut self, route_id: &'a str) -> Self {
        self.route_id = Some(route_id);
        self
    }

    /// Attach the entity found under the route id, if any
    pub fn against(mut self, stored: Option<&'a T>) -> Self {
        self.stored = stored;
        self
    }

    /// The `data` member, unless it was absent or `null`
    pub fn data(&self) -> Option<&'a Value> {
        self.data.filter(|data| !data.is_null())
    }

    /// A member of `data`; `None` when `data` is not an object
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.data().and_then(|data| data.get(name))
    }

    pub fn route_id(&self) -> Option<&'a str> {
        self.route_id
    }

    pub fn stored(&self) -> Option<&'a T> {
        self.stored
    }
}

/// An ordered list of checks; the first failure wins.
pub struct ValidationChain<T> {
    checks: Vec<Check<T>>,
}

impl<T> ValidationChain<T> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Append a check to the end of the chain
    pub fn then(mut self, check: Check<T>) -> Self {
        self.checks.push(check);
        self
    }

    /// Run every check in order, stopping at the first fault
    pub fn run(&self, submission: &Submission<'_, T>) -> Result<(), Fault> {
        self.checks.iter().try_for_each(|check| check(submission))
    }
}

impl<T> Default for ValidationChain<T> {
    fn default() -> Self {
        Self::new()
    }
}
