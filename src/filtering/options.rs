//! Gate configuration.
use std::borrow::Cow;

use crate::error::Error;

/// Name used in log lines and error messages when none is provided.
pub const DEFAULT_NAME: &str = "some-gate";

/// Options object accepted by [crate::gate::Gate::from_options].
///
/// `check` is optional at the type level so that incomplete options can be built
/// (and rejected) the same way an empty options object would be.
#[derive(Debug, Clone)]
pub struct Options<C> {
    check: Option<C>,
    name: Cow<'static, str>,
}

impl<C> Options<C> {
    /// Empty options. Building a gate from them fails until a check is set.
    pub fn new() -> Self {
        Self {
            check: None,
            name: Cow::Borrowed(DEFAULT_NAME),
        }
    }

    pub fn with_check(mut self, check: C) -> Self {
        self.check = Some(check);
        self
    }

    /// Set the stage name, used as a prefix for logs and errors.
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Get a reference to the options' check.
    pub fn check(&self) -> Option<&C> {
        self.check.as_ref()
    }

    /// Get a reference to the options' name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validates options, returning the check and the stage name.
    ///
    /// `None` stands for a missing options argument.
    pub(crate) fn resolve(options: Option<Self>) -> Result<(C, Cow<'static, str>), Error> {
        let options = options.ok_or_else(|| {
            Error::invalid_configuration(DEFAULT_NAME, "requires a check function or options object")
        })?;

        match options.check {
            Some(check) => Ok((check, options.name)),
            None => Err(Error::invalid_configuration(
                &options.name,
                "requires options.check to be a function",
            )),
        }
    }
}

impl<C> Default for Options<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps a bare check, so that either form can be passed where options are expected.
impl<C> From<C> for Options<C> {
    fn from(check: C) -> Self {
        Self::new().with_check(check)
    }
}

#[cfg(test)]
mod tests {
    use super::{Options, DEFAULT_NAME};
    use crate::error::Error;

    type Check = fn(&u32) -> bool;

    fn over_100(x: &u32) -> bool {
        *x > 100
    }

    #[test]
    fn missing_options() {
        let res = Options::<Check>::resolve(None);
        match res {
            Err(Error::InvalidConfiguration(msg)) => {
                assert_eq!(msg, "some-gate: requires a check function or options object")
            }
            _ => panic!("expected invalid configuration"),
        }
    }

    #[test]
    fn missing_check() {
        let res = Options::<Check>::resolve(Some(Options::default()));
        assert!(matches!(res, Err(Error::InvalidConfiguration(_))));
    }

    #[test]
    fn missing_check_uses_name() {
        let opts = Options::<Check>::new().with_name("newer");
        match Options::resolve(Some(opts)) {
            Err(Error::InvalidConfiguration(msg)) => assert!(msg.starts_with("newer: ")),
            _ => panic!("expected invalid configuration"),
        }
    }

    #[test]
    fn bare_check() {
        let opts: Options<Check> = Options::from(over_100 as Check);
        assert_eq!(opts.name(), DEFAULT_NAME);
        let (check, name) = Options::resolve(Some(opts)).unwrap();
        assert!(check(&150));
        assert_eq!(name, DEFAULT_NAME);
    }
}
