//! Exact-value validators
//!
//! - [`Equal`] - value strictly equals one option
//! - [`OneOf`] - value strictly equals at least one of a set of options
//! - [`AllOf`] - value strictly equals every option in a set
//!
//! "Strictly equals" is [`strict_equal`]: scalars by value, containers by
//! identity. An absent value equals nothing, and since options are
//! [`Value`]s an absent option cannot be declared.

use serde_json::Value;

use crate::foundation::{Validate, strict_equal};

crate::validator! {
    /// Accepts a value strictly equal to `option`.
    ///
    /// `option` is always a present value, so `equal` never accepts an
    /// absent input.
    ///
    /// # Examples
    ///
    /// ```
    /// use conform_validator::validators::equal;
    /// use conform_validator::foundation::ValidateExt;
    /// use serde_json::json;
    ///
    /// let v = equal("draft");
    /// assert!(v.is_valid(&json!("draft")));
    /// assert!(!v.is_valid(&json!("Draft")));
    /// ```
    #[derive(PartialEq)]
    pub Equal { option: Value };
    rule(self, value) { strict_equal(value, &self.option) }
    new(option: impl Into<Value>) { Self { option: option.into() } }
    fn equal(option: impl Into<Value>);
}

/// Accepts a value strictly equal to at least one option.
///
/// With no options nothing is accepted. Options are present values, so an
/// absent input never matches.
///
/// # Examples
///
/// ```
/// use conform_validator::validators::some;
/// use conform_validator::foundation::ValidateExt;
/// use serde_json::json;
///
/// let method = some(["GET", "POST"]);
/// assert!(method.is_valid(&json!("POST")));
/// assert!(!method.is_valid(&json!("PUT")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OneOf {
    options: Vec<Value>,
}

impl OneOf {
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn options(&self) -> &[Value] {
        &self.options
    }
}

impl Validate for OneOf {
    fn validate(&self, input: Option<&Value>) -> bool {
        match input {
            Some(value) => self.options.iter().any(|option| strict_equal(value, option)),
            None => false,
        }
    }
}

/// Creates a [`OneOf`] validator.
#[must_use]
pub fn some<I>(options: I) -> OneOf
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    OneOf::new(options)
}

/// Accepts a value strictly equal to *every* option.
///
/// This is the literal counterpart of [`OneOf`] and is rarely useful: it can
/// only accept anything when all options are the same scalar. With no options
/// it accepts every input, absent values included.
///
/// ```
/// use conform_validator::validators::every;
/// use conform_validator::foundation::{Validate, ValidateExt};
/// use serde_json::{Value, json};
///
/// assert!(every([1, 1]).is_valid(&json!(1)));
/// assert!(!every([1, 2]).is_valid(&json!(1)));
/// assert!(every(Vec::<Value>::new()).validate(None));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AllOf {
    options: Vec<Value>,
}

impl AllOf {
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn options(&self) -> &[Value] {
        &self.options
    }
}

impl Validate for AllOf {
    fn validate(&self, input: Option<&Value>) -> bool {
        self.options
            .iter()
            .all(|option| input.is_some_and(|value| strict_equal(value, option)))
    }
}

/// Creates an [`AllOf`] validator.
#[must_use]
pub fn every<I>(options: I) -> AllOf
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    AllOf::new(options)
}
