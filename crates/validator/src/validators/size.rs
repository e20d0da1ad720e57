//! Array size validators

crate::validator! {
    /// Accepts arrays with at most `max` elements.
    ///
    /// Elements are not inspected; pair with [`array`](crate::combinators::array)
    /// through `and` to check them too.
    ///
    /// # Examples
    ///
    /// ```
    /// use conform_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// let pair = array(number()).and(max_len(2));
    /// assert!(pair.is_valid(&json!([1, 2])));
    /// assert!(!pair.is_valid(&json!([1, 2, 3])));
    /// assert!(!max_len(2).is_valid(&json!("ab")));
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLen { max: usize };
    rule(self, value) { value.as_array().is_some_and(|items| items.len() <= self.max) }
    fn max_len(max: usize);
}
