/// Extends string types with useful functions
pub trait StringExt {
    /// Capilalises the first letter in a string
    ///
    /// ```rust
    /// # use bateman_utils::StringExt;
    /// assert_eq!("co".capitalise(), "Co".to_string());
    /// assert_eq!("ag110m1".capitalise(), "Ag110m1".to_string());
    /// ```
    fn capitalise(&self) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn capitalise(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            None => String::new(),
        }
    }
}
