use crate::f;

/// Extends Option for easy display formatting
pub trait OptionExt {
    /// Better option outputs
    ///
    /// Generic over anything that implements `Display`, this will either be
    /// the value contained within `Some()` or "none" for the `None` variant.
    ///
    /// For example:
    ///
    /// ```rust
    /// # use bateman_utils::OptionExt;
    /// let half_life: Option<f64> = Some(12.32);
    /// assert_eq!(half_life.display(), "12.32");
    ///
    /// let half_life: Option<f64> = None;
    /// assert_eq!(half_life.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: std::fmt::Display> OptionExt for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }
}
